#![doc = include_str!("../README.md")]

mod error;
pub mod evaluation;
pub mod rtree;
mod r#type;
pub mod workload;

pub use error::{RTreeError, Result};
pub use r#type::IndexableNum;

#[cfg(test)]
pub(crate) mod test;
