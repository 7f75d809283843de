use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::rtree::Rect;
use crate::workload::random_rectangles;


/// Route the crate's `log` output to the test harness. Set `RUST_LOG` to see it.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Four overlapping rectangles along the x axis.
pub(crate) fn overlapping_rects() -> Vec<Rect<i32>> {
    vec![
        Rect::new(1, 1, 3, 3),
        Rect::new(2, 2, 4, 4),
        Rect::new(3, 1, 5, 3),
        Rect::new(4, 2, 6, 4),
    ]
}

/// Fifty points on a 10 by 10 grid, five per column.
pub(crate) fn grid_points() -> Vec<(i32, i32)> {
    let columns: [(i32, [i32; 5]); 10] = [
        (1, [1, 2, 4, 6, 10]),
        (2, [3, 5, 6, 8, 9]),
        (3, [2, 5, 7, 8, 10]),
        (4, [1, 3, 5, 7, 9]),
        (5, [2, 5, 6, 9, 10]),
        (6, [1, 3, 4, 7, 9]),
        (7, [1, 2, 4, 6, 8]),
        (8, [2, 4, 6, 8, 10]),
        (9, [1, 3, 4, 6, 9]),
        (10, [1, 3, 5, 7, 9]),
    ];
    columns
        .into_iter()
        .flat_map(|(x, ys)| ys.into_iter().map(move |y| (x, y)))
        .collect()
}

/// Seeded random rectangles with sides of up to `max_side` on the benchmark grid.
pub(crate) fn seeded_rects(seed: u64, n: usize, max_side: i32) -> Vec<Rect<i32>> {
    random_rectangles(&mut StdRng::seed_from_u64(seed), n, max_side)
}
