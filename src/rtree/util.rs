//! Utilities for sizing RTrees.

/// Number of nodes on each level of a bulk-loaded tree holding `num_items` leaves, from the
/// leaves up to the root.
///
/// Levels are packed until at most `node_size` nodes remain, and those always get a root of
/// their own, so a single item still sits under one root.
pub fn level_sizes(num_items: usize, node_size: usize) -> Vec<usize> {
    debug_assert!(node_size >= 2);

    if num_items == 0 {
        return vec![];
    }

    let mut n = num_items;
    let mut sizes = vec![n];
    while n > node_size {
        n = n.div_ceil(node_size);
        sizes.push(n);
    }
    sizes.push(1);
    sizes
}

/// Depth of every leaf below the root, which is `ceil(log_M(num_items))` for two or more
/// items.
pub fn tree_height(num_items: usize, node_size: usize) -> usize {
    level_sizes(num_items, node_size).len().saturating_sub(1)
}
