use crate::error::Result;
use crate::r#type::IndexableNum;
use crate::rtree::node::Node;
use crate::rtree::sort::util::pack_to_root;
use crate::rtree::sort::{BulkLoad, LoadParams};

/// Nearest-X packing.
///
/// Leaves are sorted once by the x coordinate of their centers and packed bottom-up in that
/// order. The sort is stable: leaves with equal centers keep their insertion order, so the
/// same input always produces the same tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestXSort;

impl<N: IndexableNum> BulkLoad<N> for NearestXSort {
    fn load(params: &LoadParams, mut leaves: Vec<Node<N>>) -> Result<Option<Node<N>>> {
        leaves.sort_by_key(|leaf| leaf.bounds().center_x());
        pack_to_root(leaves, params.node_size)
    }
}
