//! Utilities to traverse the RTree structure.

use crate::r#type::IndexableNum;
use crate::rtree::node::Node;
use crate::rtree::rect::Rect;

/// A leaf returned by a search: the original insertion index and its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeafEntry<N: IndexableNum> {
    pub index: u32,
    pub bounds: Rect<N>,
}

/// The outcome of one range search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<N: IndexableNum> {
    /// Matching leaves, in depth-first order with children visited in stored order.
    pub leaves: Vec<LeafEntry<N>>,
    /// Number of internal nodes visited, each one standing for a page read.
    pub disk_accesses: usize,
}

impl<N: IndexableNum> SearchResult<N> {
    pub(crate) fn new() -> Self {
        Self {
            leaves: vec![],
            disk_accesses: 0,
        }
    }

    /// The insertion indices of the matching leaves.
    pub fn indices(&self) -> Vec<u32> {
        self.leaves.iter().map(|leaf| leaf.index).collect()
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }
}

/// Depth-first range search from `root`.
///
/// A node whose bounds miss the query is skipped. An intersecting leaf is reported. An
/// intersecting internal node counts as one disk access, and each of its children is then
/// tested on its own.
pub(crate) fn search<N: IndexableNum>(root: Option<&Node<N>>, query: &Rect<N>) -> SearchResult<N> {
    let mut result = SearchResult::new();
    let mut stack: Vec<&Node<N>> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        if !node.bounds().intersects(query) {
            continue;
        }

        match node.index() {
            Some(index) => result.leaves.push(LeafEntry {
                index,
                bounds: *node.bounds(),
            }),
            None => {
                result.disk_accesses += 1;
                // reversed, so the first child is popped first
                stack.extend(node.children().iter().rev());
            }
        }
    }

    result
}

/// Iterator over every leaf below a node, in depth-first order.
#[derive(Debug, Clone)]
pub struct Leaves<'a, N: IndexableNum> {
    stack: Vec<&'a Node<N>>,
}

impl<'a, N: IndexableNum> Leaves<'a, N> {
    pub(crate) fn new(root: Option<&'a Node<N>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, N: IndexableNum> Iterator for Leaves<'a, N> {
    type Item = &'a Node<N>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if node.is_leaf() {
                return Some(node);
            }
            self.stack.extend(node.children().iter().rev());
        }
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rtree::sort::{NearestXSort, STRSort};
    use crate::rtree::RTreeBuilder;
    use crate::test::{grid_points, overlapping_rects};

    #[test]
    fn counts_every_intersecting_internal_node() {
        let mut builder = RTreeBuilder::new_with_node_size(2);
        for rect in overlapping_rects() {
            builder.add_rect(&rect);
        }
        let tree = builder.finish::<NearestXSort>().unwrap();

        // one root over two groups of two leaves
        let root = tree.root().unwrap();
        assert_eq!(root.children().len(), 2);
        assert!(root.children().iter().all(|c| c.children().len() == 2));

        let result = tree.search(&Rect::new(2, 2, 5, 4));
        assert_eq!(result.indices(), vec![0, 1, 2, 3]);
        assert_eq!(result.disk_accesses, 3);
    }

    #[test]
    fn pruned_subtree_costs_nothing() {
        let mut builder = RTreeBuilder::new_with_node_size(2);
        for rect in overlapping_rects() {
            builder.add_rect(&rect);
        }
        let tree = builder.finish::<NearestXSort>().unwrap();

        // only the left group (1,1,4,4) is reached; the right group (3,1,6,4) is pruned
        let result = tree.search(&Rect::new(0, 0, 2, 2));
        assert_eq!(result.indices(), vec![0, 1]);
        assert_eq!(result.disk_accesses, 2);

        let result = tree.search(&Rect::new(10, 10, 20, 20));
        assert!(result.is_empty());
        assert_eq!(result.disk_accesses, 0);
    }

    #[test]
    fn leaves_in_stored_order() {
        let mut builder = RTreeBuilder::new_with_node_size(2);
        for (x, y) in grid_points() {
            builder.add(x, y, x, y);
        }
        let tree = builder.finish::<STRSort>().unwrap();
        let leaves: Vec<u32> = tree.leaves().filter_map(Node::index).collect();
        assert_eq!(leaves.len(), tree.num_items());

        let everything = tree.search(tree.bounds().unwrap());
        assert_eq!(everything.indices(), leaves);
    }
}
