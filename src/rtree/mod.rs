//! Static RTrees bulk loaded with Nearest-X, Hilbert or STR packing.

pub mod builder;
pub mod constants;
pub mod index;
pub mod node;
pub mod paged;
pub mod rect;
pub mod sort;
pub mod r#trait;
pub mod traversal;
pub mod util;

pub use builder::{build, RTreeBuilder, DEFAULT_RTREE_NODE_SIZE};
pub use index::RTree;
pub use node::Node;
pub use paged::PagedRTree;
pub use r#trait::RTreeIndex;
pub use rect::Rect;
pub use sort::{BulkLoad, HilbertSort, NearestXSort, STRSort, Strategy};
pub use traversal::{LeafEntry, SearchResult};
