//! Tree nodes and the bounding-rectangle aggregation that creates parents.

use crate::error::{RTreeError, Result};
use crate::r#type::IndexableNum;
use crate::rtree::rect::Rect;

/// A node in an [`RTree`][crate::rtree::RTree].
///
/// Leaves wrap one input rectangle together with its insertion index. Internal nodes own their
/// children exclusively, and their bounds are always the exact bounding rectangle of those
/// children. Nodes are never modified after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<N: IndexableNum> {
    bounds: Rect<N>,
    kind: NodeKind<N>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeKind<N: IndexableNum> {
    Leaf { index: u32 },
    Internal { children: Vec<Node<N>> },
}

impl<N: IndexableNum> Node<N> {
    /// Create a leaf for the item inserted at position `index`.
    pub fn leaf(bounds: Rect<N>, index: u32) -> Self {
        Self {
            bounds,
            kind: NodeKind::Leaf { index },
        }
    }

    /// Create a parent over `children`, taking ownership of them in order.
    ///
    /// The parent's bounds are the coordinate-wise minimum and maximum over every child's
    /// bounds. Returns [`RTreeError::EmptyGroup`] if `children` is empty.
    pub fn from_children(children: Vec<Node<N>>) -> Result<Self> {
        let bounds =
            Rect::of(children.iter().map(|child| &child.bounds)).ok_or(RTreeError::EmptyGroup)?;
        Ok(Self {
            bounds,
            kind: NodeKind::Internal { children },
        })
    }

    /// The bounding rectangle of this node.
    #[inline]
    pub fn bounds(&self) -> &Rect<N> {
        &self.bounds
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }

    /// The child nodes, in stored order. Empty for leaves.
    #[inline]
    pub fn children(&self) -> &[Node<N>] {
        match &self.kind {
            NodeKind::Leaf { .. } => &[],
            NodeKind::Internal { children } => children,
        }
    }

    /// The original insertion index, or `None` for intermediate nodes.
    #[inline]
    pub fn index(&self) -> Option<u32> {
        match self.kind {
            NodeKind::Leaf { index } => Some(index),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Number of edges from this node down to its leaves. Zero for a leaf.
    ///
    /// Bulk-loaded trees are balanced, so following the first child is enough.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut node = self;
        while let Some(first) = node.children().first() {
            height += 1;
            node = first;
        }
        height
    }
}
