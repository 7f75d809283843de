//! Measure how many simulated disk accesses, and how much time, queries cost.

use std::fmt;
use std::time::{Duration, Instant};

use log::debug;

use crate::error::Result;
use crate::r#type::IndexableNum;
use crate::rtree::{build, RTreeIndex, Rect, Strategy};

/// Per-query disk-access counts and latencies collected by [`evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub struct QueryStats {
    accesses: Vec<usize>,
    latencies: Vec<Duration>,
}

impl QueryStats {
    pub fn num_queries(&self) -> usize {
        self.accesses.len()
    }

    /// Disk accesses of each query, in query order.
    pub fn accesses(&self) -> &[usize] {
        &self.accesses
    }

    /// Wall-clock time of each query, in query order.
    pub fn latencies(&self) -> &[Duration] {
        &self.latencies
    }

    pub fn mean_accesses(&self) -> f64 {
        mean(self.accesses.iter().map(|&a| a as f64))
    }

    /// Population standard deviation of the disk accesses.
    pub fn std_dev_accesses(&self) -> f64 {
        std_dev(self.accesses.iter().map(|&a| a as f64))
    }

    pub fn mean_latency(&self) -> Duration {
        Duration::from_secs_f64(mean(self.latencies.iter().map(Duration::as_secs_f64)))
    }

    /// Population standard deviation of the latencies.
    pub fn std_dev_latency(&self) -> Duration {
        Duration::from_secs_f64(std_dev(self.latencies.iter().map(Duration::as_secs_f64)))
    }
}

impl fmt::Display for QueryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average time: {:?}", self.mean_latency())?;
        writeln!(f, "Standard deviation time: {:?}", self.std_dev_latency())?;
        writeln!(f, "Average accesses: {:.3}", self.mean_accesses())?;
        writeln!(
            f,
            "Standard deviation accesses: {:.3}",
            self.std_dev_accesses()
        )
    }
}

/// Run every query against `tree`, timing each one and recording its disk accesses.
pub fn evaluate<N, T>(tree: &T, queries: &[Rect<N>]) -> Result<QueryStats>
where
    N: IndexableNum,
    T: RTreeIndex<N>,
{
    let mut accesses = Vec::with_capacity(queries.len());
    let mut latencies = Vec::with_capacity(queries.len());

    for query in queries {
        let start = Instant::now();
        let result = tree.try_search(query)?;
        latencies.push(start.elapsed());
        accesses.push(result.disk_accesses);
    }

    Ok(QueryStats {
        accesses,
        latencies,
    })
}

/// Build one tree per strategy over `rects` and evaluate the same `queries` against each.
///
/// Results come back in the order of [`Strategy::ALL`].
pub fn compare_strategies<N: IndexableNum>(
    rects: &[Rect<N>],
    queries: &[Rect<N>],
    node_size: usize,
) -> Result<Vec<(Strategy, QueryStats)>> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| {
            let tree = build(strategy, node_size, rects.iter().copied())?;
            let stats = evaluate(&tree, queries)?;
            debug!(
                "{strategy}: {} items, mean accesses {:.3}",
                rects.len(),
                stats.mean_accesses()
            );
            Ok((strategy, stats))
        })
        .collect()
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let len = values.len();
    if len == 0 {
        return 0.;
    }
    values.sum::<f64>() / len as f64
}

fn std_dev(values: impl ExactSizeIterator<Item = f64> + Clone) -> f64 {
    let len = values.len();
    if len == 0 {
        return 0.;
    }
    let mean = mean(values.clone());
    let variance = values.map(|v| (v - mean).powi(2)).sum::<f64>() / len as f64;
    variance.sqrt()
}
