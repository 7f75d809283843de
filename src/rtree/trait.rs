use geo_traits::RectTrait;

use crate::error::Result;
use crate::r#type::IndexableNum;
use crate::rtree::index::RTree;
use crate::rtree::rect::Rect;
use crate::rtree::traversal::SearchResult;

/// A trait for searching any RTree backend, whether held in memory or decoded from pages.
pub trait RTreeIndex<N: IndexableNum>: Sized {
    /// The total number of items contained in this RTree.
    fn num_items(&self) -> usize;

    /// The maximum number of elements in each node.
    fn node_size(&self) -> usize;

    /// Search for every item intersecting `query`, counting the internal nodes visited.
    fn try_search(&self, query: &Rect<N>) -> Result<SearchResult<N>>;

    /// Search given any [`RectTrait`] implementation.
    fn try_search_rect(&self, rect: &impl RectTrait<T = N>) -> Result<SearchResult<N>> {
        self.try_search(&Rect::from_rect_trait(rect))
    }
}

impl<N: IndexableNum> RTreeIndex<N> for RTree<N> {
    fn num_items(&self) -> usize {
        self.num_items
    }

    fn node_size(&self) -> usize {
        self.node_size
    }

    fn try_search(&self, query: &Rect<N>) -> Result<SearchResult<N>> {
        Ok(self.search(query))
    }
}
