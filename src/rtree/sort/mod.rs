//! Bulk-loading strategies for static RTrees.

mod hilbert;
mod nearest_x;
mod str;
mod r#trait;
mod util;

pub use hilbert::{hilbert_distance, HilbertSort};
pub use nearest_x::NearestXSort;
pub use r#str::{slice_count, STRSort};
pub use r#trait::{BulkLoad, LoadParams, Strategy};
