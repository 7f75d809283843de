//! A byte-encoded RTree that decodes each node from its page when the search visits it.
//!
//! Buffer layout:
//!
//! - Header: 24 bytes (magic, version and type, reserved, `node_size: u32`, `num_items: u64`,
//!   `root: u64` offset of the root record, or `u64::MAX` when empty)
//! - Records, children before parents. Each record is a 48 byte header (`id: u64` equal to
//!   the record's own byte offset, four coordinates widened to `i64`, `num_children: u32`,
//!   `index: u32` insertion index of a leaf) followed by `num_children` child offsets as `u64`.
//!
//! All integers are in native byte order.

use std::marker::PhantomData;
use std::mem::size_of;

use bytemuck::{bytes_of, pod_read_unaligned, Pod, Zeroable};
use log::trace;

use crate::error::{RTreeError, Result};
use crate::r#type::IndexableNum;
use crate::rtree::constants::{PAGED_MAGIC, VERSION};
use crate::rtree::index::RTree;
use crate::rtree::node::Node;
use crate::rtree::r#trait::RTreeIndex;
use crate::rtree::rect::Rect;
use crate::rtree::traversal::{LeafEntry, SearchResult};

const NO_ROOT: u64 = u64::MAX;
const INTERNAL_INDEX: u32 = u32::MAX;
const PAGE_HEADER_LEN: usize = size_of::<PageHeader>();
const RECORD_HEADER_LEN: usize = size_of::<RecordHeader>();
const CHILD_OFFSET_LEN: usize = size_of::<u64>();

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
struct PageHeader {
    magic: u8,
    version_and_type: u8,
    reserved: u16,
    node_size: u32,
    num_items: u64,
    root: u64,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct RecordHeader {
    id: u64,
    bounds: [i64; 4],
    num_children: u32,
    index: u32,
}

/// One node decoded from its page.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PagedNode<N: IndexableNum> {
    bounds: Rect<N>,
    index: u32,
    children: Vec<u64>,
}

/// An RTree stored as one byte buffer of node records.
///
/// Searching reads and decodes every visited node from the buffer, modelling a tree that lives
/// on disk. It answers exactly like the [`RTree`] it was encoded from, with the same
/// disk-access count.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedRTree<N: IndexableNum> {
    buffer: Vec<u8>,
    header: PageHeader,
    phantom: PhantomData<N>,
}

impl<N: IndexableNum> PagedRTree<N> {
    /// Encode an in-memory tree.
    pub fn from_tree(tree: &RTree<N>) -> Result<Self> {
        let node_size = u32::try_from(tree.node_size()).map_err(|_| {
            RTreeError::General(format!(
                "Node size {} does not fit a page header.",
                tree.node_size()
            ))
        })?;

        let mut buffer = vec![0; PAGE_HEADER_LEN];
        let root = match tree.root() {
            Some(root) => write_node(root, &mut buffer),
            None => NO_ROOT,
        };

        let header = PageHeader {
            magic: PAGED_MAGIC,
            version_and_type: (VERSION << 4) + N::TYPE_INDEX,
            reserved: 0,
            node_size,
            num_items: tree.num_items() as u64,
            root,
        };
        buffer[..PAGE_HEADER_LEN].copy_from_slice(bytes_of(&header));

        Ok(Self {
            buffer,
            header,
            phantom: PhantomData,
        })
    }

    /// Wrap an existing buffer, checking its header.
    ///
    /// Records are validated lazily, as searches reach them.
    pub fn try_new(buffer: Vec<u8>) -> Result<Self> {
        let header_bytes = buffer.get(..PAGE_HEADER_LEN).ok_or_else(|| {
            RTreeError::CorruptPage(format!(
                "Buffer of {} bytes is shorter than the header.",
                buffer.len()
            ))
        })?;
        let header: PageHeader = pod_read_unaligned(header_bytes);

        if header.magic != PAGED_MAGIC {
            return Err(RTreeError::CorruptPage(
                "Data not in paged RTree format.".to_string(),
            ));
        }

        let version = header.version_and_type >> 4;
        if version != VERSION {
            return Err(RTreeError::CorruptPage(format!(
                "Got v{} data when expected v{}.",
                version, VERSION
            )));
        }

        let type_ = header.version_and_type & 0x0f;
        if type_ != N::TYPE_INDEX {
            return Err(RTreeError::CorruptPage(format!(
                "Got type {} data when expected type {}.",
                type_,
                N::TYPE_INDEX
            )));
        }

        if header.node_size < 2 {
            return Err(RTreeError::InvalidFanout(header.node_size as usize));
        }

        if header.root != NO_ROOT && header.root >= buffer.len() as u64 {
            return Err(RTreeError::CorruptPage(format!(
                "Root offset {} is past the end of the buffer.",
                header.root
            )));
        }

        Ok(Self {
            buffer,
            header,
            phantom: PhantomData,
        })
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// The total number of items contained in this RTree.
    pub fn num_items(&self) -> usize {
        self.header.num_items as usize
    }

    /// The maximum number of children of each node.
    pub fn node_size(&self) -> usize {
        self.header.node_size as usize
    }

    pub fn is_empty(&self) -> bool {
        self.header.root == NO_ROOT
    }

    /// Search for every item intersecting `query`, decoding each visited node from its page.
    ///
    /// Fails with [`RTreeError::CorruptPage`] if a visited record does not decode.
    pub fn search(&self, query: &Rect<N>) -> Result<SearchResult<N>> {
        let mut result = SearchResult::new();
        if self.is_empty() {
            return Ok(result);
        }

        let mut stack = vec![self.header.root];
        while let Some(offset) = stack.pop() {
            let node = self.read_node(offset)?;
            if !node.bounds.intersects(query) {
                continue;
            }

            if node.children.is_empty() {
                result.leaves.push(LeafEntry {
                    index: node.index,
                    bounds: node.bounds,
                });
            } else {
                result.disk_accesses += 1;
                stack.extend(node.children.iter().rev());
            }
        }

        Ok(result)
    }

    fn read_node(&self, offset: u64) -> Result<PagedNode<N>> {
        let start = usize::try_from(offset)
            .map_err(|_| RTreeError::CorruptPage(format!("Offset {offset} is out of range.")))?;
        let record: RecordHeader = pod_read_unaligned(self.slice(start, RECORD_HEADER_LEN)?);

        if record.id != offset {
            return Err(RTreeError::CorruptPage(format!(
                "Record at offset {offset} claims id {}.",
                record.id
            )));
        }

        let [min_x, min_y, max_x, max_y] = record.bounds.map(narrow::<N>);
        let bounds = Rect::try_new(min_x?, min_y?, max_x?, max_y?)
            .map_err(|err| RTreeError::CorruptPage(err.to_string()))?;

        let num_children = record.num_children as usize;
        if num_children > self.node_size() {
            return Err(RTreeError::CorruptPage(format!(
                "Record at offset {offset} has {num_children} children, more than the node size {}.",
                self.node_size()
            )));
        }

        let children_start = start + RECORD_HEADER_LEN;
        let children_bytes = self.slice(children_start, num_children * CHILD_OFFSET_LEN)?;
        let children = children_bytes
            .chunks_exact(CHILD_OFFSET_LEN)
            .map(|bytes| {
                let child: u64 = pod_read_unaligned(bytes);
                // children are always written before their parent
                if child >= offset {
                    return Err(RTreeError::CorruptPage(format!(
                        "Record at offset {offset} points forward to {child}."
                    )));
                }
                Ok(child)
            })
            .collect::<Result<Vec<_>>>()?;

        trace!("read page {offset}: {num_children} children");
        Ok(PagedNode {
            bounds,
            index: record.index,
            children,
        })
    }

    fn slice(&self, start: usize, len: usize) -> Result<&[u8]> {
        start
            .checked_add(len)
            .and_then(|end| self.buffer.get(start..end))
            .ok_or_else(|| {
                RTreeError::CorruptPage(format!(
                    "Record of {len} bytes at offset {start} runs past the end of the buffer."
                ))
            })
    }
}

impl<N: IndexableNum> AsRef<[u8]> for PagedRTree<N> {
    fn as_ref(&self) -> &[u8] {
        &self.buffer
    }
}

impl<N: IndexableNum> RTreeIndex<N> for PagedRTree<N> {
    fn num_items(&self) -> usize {
        self.num_items()
    }

    fn node_size(&self) -> usize {
        self.node_size()
    }

    fn try_search(&self, query: &Rect<N>) -> Result<SearchResult<N>> {
        self.search(query)
    }
}

/// Append `node` and everything below it, returning the offset of its record.
fn write_node<N: IndexableNum>(node: &Node<N>, buffer: &mut Vec<u8>) -> u64 {
    let child_offsets: Vec<u64> = node
        .children()
        .iter()
        .map(|child| write_node(child, buffer))
        .collect();

    let id = buffer.len() as u64;
    let bounds = node.bounds();
    let record = RecordHeader {
        id,
        bounds: [
            bounds.min_x().widen(),
            bounds.min_y().widen(),
            bounds.max_x().widen(),
            bounds.max_y().widen(),
        ],
        num_children: child_offsets.len() as u32,
        index: node.index().unwrap_or(INTERNAL_INDEX),
    };
    buffer.extend_from_slice(bytes_of(&record));
    for offset in &child_offsets {
        buffer.extend_from_slice(bytes_of(offset));
    }
    id
}

fn narrow<N: IndexableNum>(value: i64) -> Result<N> {
    num_traits::cast(value).ok_or_else(|| {
        RTreeError::CorruptPage(format!("Coordinate {value} does not fit the index type."))
    })
}
