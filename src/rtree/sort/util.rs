use log::debug;

use crate::error::Result;
use crate::r#type::IndexableNum;
use crate::rtree::node::Node;

/// Replace each run of `node_size` consecutive nodes with one parent. The last parent may
/// hold fewer children.
pub(super) fn pack_level<N: IndexableNum>(
    level: Vec<Node<N>>,
    node_size: usize,
) -> Result<Vec<Node<N>>> {
    debug_assert!(node_size >= 2);

    let mut parents = Vec::with_capacity(level.len().div_ceil(node_size));
    let mut nodes = level.into_iter().peekable();
    while nodes.peek().is_some() {
        let group: Vec<Node<N>> = nodes.by_ref().take(node_size).collect();
        parents.push(Node::from_children(group)?);
    }
    Ok(parents)
}

/// Pack an already ordered level upward without reordering until at most `node_size` nodes
/// remain, then aggregate those into the root.
pub(super) fn pack_to_root<N: IndexableNum>(
    mut level: Vec<Node<N>>,
    node_size: usize,
) -> Result<Option<Node<N>>> {
    if level.is_empty() {
        return Ok(None);
    }

    let mut height = 0;
    while level.len() > node_size {
        level = pack_level(level, node_size)?;
        height += 1;
        debug!("packed level {height}: {} nodes", level.len());
    }

    Node::from_children(level).map(Some)
}
