use num_traits::ToPrimitive;

use crate::error::{RTreeError, Result};
use crate::r#type::IndexableNum;
use crate::rtree::constants::HILBERT_RESOLUTION;
use crate::rtree::node::Node;
use crate::rtree::sort::util::pack_to_root;
use crate::rtree::sort::{BulkLoad, LoadParams};

/// Hilbert-curve packing.
///
/// Leaves are sorted once by the Hilbert distance of their centers, then packed bottom-up in
/// that order. Upper levels are not re-sorted: the curve order of the leaves already keeps
/// neighbouring parents close together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HilbertSort;

impl<N: IndexableNum> BulkLoad<N> for HilbertSort {
    fn load(params: &LoadParams, leaves: Vec<Node<N>>) -> Result<Option<Node<N>>> {
        // map item centers onto the curve
        let mut keyed = leaves
            .into_iter()
            .map(|leaf| {
                let bounds = leaf.bounds();
                let d = hilbert_distance(bounds.center_x(), bounds.center_y())?;
                Ok((d, leaf))
            })
            .collect::<Result<Vec<_>>>()?;

        // stable, so equal curve positions keep insertion order
        keyed.sort_by_key(|(d, _)| *d);

        let sorted = keyed.into_iter().map(|(_, leaf)| leaf).collect();
        pack_to_root(sorted, params.node_size)
    }
}

/// Distance of the point `(x, y)` along a Hilbert curve covering a
/// [`HILBERT_RESOLUTION`]-sized square grid.
///
/// Points close together on the curve are close together in space. Both coordinates must lie
/// in `0..HILBERT_RESOLUTION`; anything else returns [`RTreeError::OutOfRangeCoordinate`].
pub fn hilbert_distance<N: IndexableNum>(x: N, y: N) -> Result<u64> {
    let on_grid = |v: N| v.to_u32().filter(|v| *v < HILBERT_RESOLUTION);
    match (on_grid(x), on_grid(y)) {
        (Some(gx), Some(gy)) => Ok(hilbert(HILBERT_RESOLUTION, gx, gy)),
        _ => Err(RTreeError::OutOfRangeCoordinate {
            x: x.widen(),
            y: y.widen(),
        }),
    }
}

/// Hilbert distance on an `n` by `n` grid.
///
/// `n` must be a power of two and both coordinates must be below `n`.
#[inline]
fn hilbert(n: u32, mut x: u32, mut y: u32) -> u64 {
    debug_assert!(n.is_power_of_two());
    debug_assert!(x < n && y < n);

    let mut d = 0u64;
    let mut s = n / 2;
    while s > 0 {
        let rx = u32::from((x & s) > 0);
        let ry = u32::from((y & s) > 0);
        d += u64::from(s) * u64::from(s) * u64::from((3 * rx) ^ ry);

        // rotate the quadrant so the sub-curve starts at the origin
        if ry == 0 {
            if rx == 1 {
                x = n - 1 - x;
                y = n - 1 - y;
            }
            std::mem::swap(&mut x, &mut y);
        }
        s /= 2;
    }
    d
}
