//! Uniformly random rectangles and queries for benchmarking.
//!
//! Every rectangle has its lower corner drawn uniformly from the `0..=GRID_SIZE` square and a
//! random width and height, clamped so the rectangle stays on the grid. The grid fits inside
//! the Hilbert mapper's domain.

use rand::Rng;

use crate::rtree::Rect;

/// Side length of the square the generated rectangles are placed in.
pub const GRID_SIZE: i32 = 500_000;

/// Largest width or height of a generated data rectangle.
pub const DEFAULT_DATA_SIDE: i32 = 100;

/// Largest width or height of a generated query rectangle.
pub const DEFAULT_QUERY_SIDE: i32 = 100_000;

/// Number of queries run per benchmark.
pub const DEFAULT_NUM_QUERIES: usize = 100;

/// Generate `n` random rectangles with sides of at most `max_side`.
pub fn random_rectangles<R: Rng + ?Sized>(rng: &mut R, n: usize, max_side: i32) -> Vec<Rect<i32>> {
    let max_side = max_side.clamp(0, GRID_SIZE);
    (0..n)
        .map(|_| {
            let min_x = rng.gen_range(0..=GRID_SIZE);
            let min_y = rng.gen_range(0..=GRID_SIZE);
            let max_x = (min_x + rng.gen_range(0..=max_side)).min(GRID_SIZE);
            let max_y = (min_y + rng.gen_range(0..=max_side)).min(GRID_SIZE);
            Rect::new(min_x, min_y, max_x, max_y)
        })
        .collect()
}

/// Generate `n` random data rectangles with the default side length.
pub fn random_data<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Rect<i32>> {
    random_rectangles(rng, n, DEFAULT_DATA_SIDE)
}

/// Generate `n` random query rectangles with the default side length.
pub fn random_queries<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Rect<i32>> {
    random_rectangles(rng, n, DEFAULT_QUERY_SIDE)
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::rtree::constants::HILBERT_RESOLUTION;

    #[test]
    fn rectangles_stay_on_the_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Rect::new(0, 0, GRID_SIZE, GRID_SIZE);
        for rect in random_rectangles(&mut rng, 2000, 1000) {
            assert!(grid.contains(&rect));
            assert!(rect.max_x() - rect.min_x() <= 1000);
            assert!(rect.max_y() - rect.min_y() <= 1000);
        }
        assert!((GRID_SIZE as u32) < HILBERT_RESOLUTION);
    }

    #[test]
    fn same_seed_same_workload() {
        let a = random_queries(&mut StdRng::seed_from_u64(42), 10);
        let b = random_queries(&mut StdRng::seed_from_u64(42), 10);
        assert_eq!(a, b);
        assert!(random_data(&mut StdRng::seed_from_u64(1), 0).is_empty());
    }
}
