use log::debug;
#[cfg(feature = "rayon")]
use rayon::iter::ParallelIterator;
#[cfg(feature = "rayon")]
use rayon::slice::ParallelSliceMut;

use crate::error::Result;
use crate::r#type::IndexableNum;
use crate::rtree::node::Node;
use crate::rtree::sort::util::pack_level;
use crate::rtree::sort::{BulkLoad, LoadParams};

/// An implementation of sort-tile-recursive (STR) packing.
///
/// Every level is sorted by the x coordinate of the node centers and cut into vertical slices
/// of `s * node_size` nodes, with `s` from [`slice_count`]. Each slice is then sorted by the
/// y coordinate of the centers and cut into groups of `node_size`, giving roughly square
/// parents. The same rule is applied to the parents until a single root remains.
///
/// The implementation is derived from [this
/// paper](https://ia600900.us.archive.org/27/items/nasa_techdoc_19970016975/19970016975.pdf).
#[derive(Debug, Clone, Copy)]
pub struct STRSort;

impl<N: IndexableNum> BulkLoad<N> for STRSort {
    fn load(params: &LoadParams, leaves: Vec<Node<N>>) -> Result<Option<Node<N>>> {
        if leaves.is_empty() {
            return Ok(None);
        }

        let node_size = params.node_size;
        let mut level = leaves;
        let mut height = 0;
        while level.len() > node_size {
            let num_slices = slice_count(level.len(), node_size);
            let slice_len = num_slices * node_size;

            level.sort_by_key(|node| node.bounds().center_x());
            sort_slices_by_y(&mut level, slice_len);

            // Every slice but the last holds a multiple of `node_size` nodes, so packing the
            // concatenated slices never puts nodes of two slices in one parent.
            level = pack_level(level, node_size)?;
            height += 1;
            debug!(
                "packed STR level {height}: {num_slices} slices, {} nodes",
                level.len()
            );
        }

        Node::from_children(level).map(Some)
    }
}

/// Number of vertical slices used to tile a level of `level_size` nodes.
///
/// Starts from `round(sqrt(level_size / node_size))` and adds one when a single slice of
/// `s * node_size` nodes would not hold the whole level. Slices are consecutive runs of the
/// x-sorted level, so any `s >= 1` covers it; the last slice may be short.
pub fn slice_count(level_size: usize, node_size: usize) -> usize {
    debug_assert!(node_size >= 2);

    let mut s = (level_size as f64 / node_size as f64).sqrt().round() as usize;
    if s * node_size < level_size {
        s += 1;
    }
    s.max(1)
}

/// Within each consecutive slice of `slice_len` nodes, sort by the y coordinate of the
/// centers.
#[cfg(feature = "rayon")]
fn sort_slices_by_y<N: IndexableNum>(level: &mut [Node<N>], slice_len: usize) {
    level
        .par_chunks_mut(slice_len)
        .for_each(|slice| slice.sort_by_key(|node| node.bounds().center_y()));
}

/// Within each consecutive slice of `slice_len` nodes, sort by the y coordinate of the
/// centers.
#[cfg(not(feature = "rayon"))]
fn sort_slices_by_y<N: IndexableNum>(level: &mut [Node<N>], slice_len: usize) {
    for slice in level.chunks_mut(slice_len) {
        slice.sort_by_key(|node| node.bounds().center_y());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rtree::rect::Rect;

    #[test]
    fn slice_count_rounds_then_steps_once() {
        for node_size in 2..20 {
            for level_size in node_size + 1..2000 {
                let rounded = (level_size as f64 / node_size as f64).sqrt().round() as usize;
                let s = slice_count(level_size, node_size);
                assert!(s >= 1);
                if rounded * node_size < level_size {
                    assert_eq!(s, rounded + 1, "L={level_size} M={node_size}");
                } else {
                    assert_eq!(s, rounded, "L={level_size} M={node_size}");
                }
            }
        }
    }

    #[test]
    fn slice_count_examples() {
        assert_eq!(slice_count(3, 2), 2);
        assert_eq!(slice_count(16, 4), 3);
        assert_eq!(slice_count(50, 2), 6);
        assert_eq!(slice_count(1024, 124), 4);
    }

    #[test]
    fn slices_of_a_level() {
        let slice_lens = |level_size: usize, node_size: usize| {
            let slice_len = slice_count(level_size, node_size) * node_size;
            (0..level_size)
                .collect::<Vec<_>>()
                .chunks(slice_len)
                .map(<[usize]>::len)
                .collect::<Vec<_>>()
        };
        assert_eq!(slice_lens(16, 4), vec![12, 4]);
        assert_eq!(slice_lens(50, 2), vec![12, 12, 12, 12, 2]);
        assert_eq!(slice_lens(1024, 124), vec![496, 496, 32]);
    }

    #[test]
    fn grid_is_cut_into_slices() {
        let mut leaves = vec![];
        for x in 0..4 {
            for y in 0..4 {
                let index = leaves.len() as u32;
                leaves.push(Node::leaf(Rect::point(x, y), index));
            }
        }
        let params = LoadParams {
            num_items: leaves.len(),
            node_size: 4,
        };
        let root = STRSort::load(&params, leaves).unwrap().unwrap();

        // three slices of width 3 hold the first 12 points, the last column is its own slice
        let tiles: Vec<Rect<i32>> = root.children().iter().map(|c| *c.bounds()).collect();
        assert_eq!(
            tiles,
            vec![
                Rect::new(0, 0, 2, 1),
                Rect::new(0, 1, 2, 2),
                Rect::new(0, 2, 2, 3),
                Rect::new(3, 0, 3, 3),
            ]
        );
        assert_eq!(root.bounds(), &Rect::new(0, 0, 3, 3));
    }

    #[test]
    fn no_leaves_no_root() {
        let params = LoadParams {
            num_items: 0,
            node_size: 4,
        };
        assert_eq!(STRSort::load(&params, Vec::<Node<i32>>::new()).unwrap(), None);
    }
}
