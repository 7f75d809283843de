use geo_traits::RectTrait;

use crate::r#type::IndexableNum;
use crate::rtree::node::Node;
use crate::rtree::rect::Rect;
use crate::rtree::traversal::{search, Leaves, SearchResult};

/// A static, bulk-loaded RTree held entirely in memory.
///
/// Usually this will be created from scratch via [`RTreeBuilder`][crate::rtree::RTreeBuilder].
/// The tree is immutable: searches take `&self` and return their own disk-access count, so
/// any number of them may run concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RTree<N: IndexableNum> {
    pub(crate) root: Option<Node<N>>,
    pub(crate) node_size: usize,
    pub(crate) num_items: usize,
}

impl<N: IndexableNum> RTree<N> {
    /// The root node, or `None` for a tree built from no rectangles.
    pub fn root(&self) -> Option<&Node<N>> {
        self.root.as_ref()
    }

    /// Returns `true` if the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The total number of items contained in this RTree.
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// The maximum number of children of each node.
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Number of levels below the root. Every leaf sits at this depth.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, Node::height)
    }

    /// The bounding rectangle of every item, or `None` for an empty tree.
    pub fn bounds(&self) -> Option<&Rect<N>> {
        self.root.as_ref().map(Node::bounds)
    }

    /// Iterate over every leaf, in depth-first order.
    pub fn leaves(&self) -> Leaves<'_, N> {
        Leaves::new(self.root.as_ref())
    }

    /// Search the tree for every item intersecting `query`.
    ///
    /// Besides the matching leaves, the result reports how many internal nodes were visited.
    ///
    /// ```
    /// use bulk_rtree::rtree::{Rect, RTreeBuilder};
    /// use bulk_rtree::rtree::sort::STRSort;
    ///
    /// let mut builder = RTreeBuilder::<i32>::new_with_node_size(2);
    /// builder.add(0, 0, 2, 2);
    /// builder.add(1, 1, 3, 3);
    /// builder.add(8, 8, 9, 9);
    /// let tree = builder.finish::<STRSort>().unwrap();
    ///
    /// let result = tree.search(&Rect::new(2, 2, 4, 4));
    /// assert_eq!(result.indices(), vec![0, 1]);
    /// assert_eq!(result.disk_accesses, 2);
    /// ```
    pub fn search(&self, query: &Rect<N>) -> SearchResult<N> {
        search(self.root.as_ref(), query)
    }

    /// Search the tree given any [`RectTrait`] implementation.
    pub fn search_rect(&self, rect: &impl RectTrait<T = N>) -> SearchResult<N> {
        self.search(&Rect::from_rect_trait(rect))
    }

    /// Search the tree, returning only the insertion indices of the matching items.
    pub fn search_indices(&self, min_x: N, min_y: N, max_x: N, max_y: N) -> Vec<u32> {
        self.search(&Rect::new(min_x, min_y, max_x, max_y)).indices()
    }
}
