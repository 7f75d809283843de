use std::fmt;

use crate::error::Result;
use crate::r#type::IndexableNum;
use crate::rtree::node::Node;
use crate::rtree::sort::{HilbertSort, NearestXSort, STRSort};

pub struct LoadParams {
    pub(crate) num_items: usize,
    pub(crate) node_size: usize,
}

impl LoadParams {
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    pub fn node_size(&self) -> usize {
        self.node_size
    }
}

/// A bulk-loading strategy.
///
/// Implementations order the leaves and pack them level by level into parents of at most
/// `node_size` children, returning the root, or `None` when there are no leaves.
pub trait BulkLoad<N: IndexableNum> {
    fn load(params: &LoadParams, leaves: Vec<Node<N>>) -> Result<Option<Node<N>>>;
}

/// Runtime selection of one of the bulk-loading strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Sort once by the x coordinate of each center. See [`NearestXSort`].
    NearestX,
    /// Sort once by the Hilbert distance of each center. See [`HilbertSort`].
    Hilbert,
    /// Sort-tile-recursive packing. See [`STRSort`].
    Str,
}

impl Strategy {
    /// Every strategy, in a fixed order.
    pub const ALL: [Strategy; 3] = [Strategy::NearestX, Strategy::Hilbert, Strategy::Str];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::NearestX => "NearestX",
            Strategy::Hilbert => "Hilbert",
            Strategy::Str => "STR",
        }
    }

    pub(crate) fn load<N: IndexableNum>(
        &self,
        params: &LoadParams,
        leaves: Vec<Node<N>>,
    ) -> Result<Option<Node<N>>> {
        match self {
            Strategy::NearestX => NearestXSort::load(params, leaves),
            Strategy::Hilbert => HilbertSort::load(params, leaves),
            Strategy::Str => STRSort::load(params, leaves),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
