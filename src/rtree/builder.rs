use geo_traits::RectTrait;
use log::debug;

use crate::error::{RTreeError, Result};
use crate::r#type::IndexableNum;
use crate::rtree::index::RTree;
use crate::rtree::node::Node;
use crate::rtree::rect::Rect;
use crate::rtree::sort::{BulkLoad, LoadParams, Strategy};
use crate::rtree::util::tree_height;

/// The default node size used by [`RTreeBuilder::new`]
pub const DEFAULT_RTREE_NODE_SIZE: usize = 16;

/// A builder to create an [`RTree`].
///
/// ```
/// use bulk_rtree::rtree::RTreeBuilder;
/// use bulk_rtree::rtree::sort::HilbertSort;
///
/// let mut builder = RTreeBuilder::<i32>::new();
/// builder.add(0, 0, 2, 2);
/// builder.add(1, 1, 3, 3);
/// builder.add(2, 2, 4, 4);
/// let tree = builder.finish::<HilbertSort>().unwrap();
/// assert_eq!(tree.num_items(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RTreeBuilder<N: IndexableNum> {
    leaves: Vec<Node<N>>,
    node_size: usize,
}

impl<N: IndexableNum> RTreeBuilder<N> {
    /// Create a new builder with the default node size.
    pub fn new() -> Self {
        Self::new_with_node_size(DEFAULT_RTREE_NODE_SIZE)
    }

    /// Create a new builder with the provided node size, the maximum number of children of
    /// each node.
    ///
    /// A node size below 2 is reported by [`finish`][Self::finish].
    pub fn new_with_node_size(node_size: usize) -> Self {
        Self {
            leaves: vec![],
            node_size,
        }
    }

    /// Reserve room for `additional` more rectangles.
    pub fn reserve(&mut self, additional: usize) {
        self.leaves.reserve(additional);
    }

    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// The number of rectangles added so far.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Add a given rectangle to the RTree.
    ///
    /// This returns the insertion index, which provides a lookup back into the original data.
    /// [`RTree::search`] reports this same insertion index for each match.
    ///
    /// # Panics
    ///
    /// If more than `u32::MAX` rectangles are added.
    #[inline]
    pub fn add(&mut self, min_x: N, min_y: N, max_x: N, max_y: N) -> u32 {
        self.push(Rect::new(min_x, min_y, max_x, max_y))
    }

    /// Add a given rectangle to the RTree.
    ///
    /// This returns the insertion index, which provides a lookup back into the original data.
    #[inline]
    pub fn add_rect(&mut self, rect: &impl RectTrait<T = N>) -> u32 {
        self.push(Rect::from_rect_trait(rect))
    }

    #[inline]
    fn push(&mut self, rect: Rect<N>) -> u32 {
        let index = u32::try_from(self.leaves.len()).expect("RTree holds at most u32::MAX items");
        self.leaves.push(Node::leaf(rect, index));
        index
    }

    /// Consume this builder, performing the bulk load and generating an RTree ready for
    /// queries.
    ///
    /// [`NearestXSort`], [`HilbertSort`] and [`STRSort`] all implement [`BulkLoad`], allowing
    /// you to choose the method used.
    ///
    /// [`NearestXSort`]: crate::rtree::sort::NearestXSort
    /// [`HilbertSort`]: crate::rtree::sort::HilbertSort
    /// [`STRSort`]: crate::rtree::sort::STRSort
    pub fn finish<S: BulkLoad<N>>(self) -> Result<RTree<N>> {
        self.finish_with(<S as BulkLoad<N>>::load)
    }

    /// Consume this builder using a strategy chosen at runtime.
    pub fn finish_with_strategy(self, strategy: Strategy) -> Result<RTree<N>> {
        self.finish_with(|params, leaves| strategy.load(params, leaves))
    }

    fn finish_with<F>(self, load: F) -> Result<RTree<N>>
    where
        F: FnOnce(&LoadParams, Vec<Node<N>>) -> Result<Option<Node<N>>>,
    {
        if self.node_size < 2 {
            return Err(RTreeError::InvalidFanout(self.node_size));
        }

        let params = LoadParams {
            num_items: self.leaves.len(),
            node_size: self.node_size,
        };
        let root = load(&params, self.leaves)?;

        let tree = RTree {
            root,
            node_size: params.node_size,
            num_items: params.num_items,
        };
        debug_assert_eq!(
            tree.height(),
            tree_height(params.num_items, params.node_size)
        );
        debug!(
            "built RTree of {} items, node size {}, height {}",
            tree.num_items,
            tree.node_size,
            tree.height()
        );
        Ok(tree)
    }
}

impl<N: IndexableNum> Default for RTreeBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: IndexableNum> Extend<Rect<N>> for RTreeBuilder<N> {
    fn extend<T: IntoIterator<Item = Rect<N>>>(&mut self, iter: T) {
        for rect in iter {
            self.push(rect);
        }
    }
}

/// Bulk load `rects` into an RTree with at most `node_size` children per node.
///
/// Fails with [`RTreeError::InvalidFanout`] when `node_size < 2`. An empty input produces an
/// empty tree.
pub fn build<N: IndexableNum>(
    strategy: Strategy,
    node_size: usize,
    rects: impl IntoIterator<Item = Rect<N>>,
) -> Result<RTree<N>> {
    let mut builder = RTreeBuilder::new_with_node_size(node_size);
    builder.extend(rects);
    builder.finish_with_strategy(strategy)
}
