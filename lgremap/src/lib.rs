//! # `lgremap` - dense relabelling of s-line graph edge lists
//!
//! Reads newline/space delimited plaintext files of integer pairs: an edge
//! list over arbitrary vertex ids, and a list of query pairs over the same
//! ids. The edge list is relabelled onto `[0, |V|)` in order of first
//! appearance with undirected duplicates removed, and the queries are
//! carried through the same relabelling, dropping any that mention a
//! vertex missing from the graph.
//!
//! [`instance`] wires this up for a batch of graphs and `s` values laid out
//! on disk.

use std::collections::HashMap;

use ordered_float::NotNan;

pub mod error;
pub mod instance;
pub mod pairs;
pub mod project;
pub mod remap;
mod scanner;
pub mod vmap;

pub use error::{Error, Result};
pub use instance::{Instance, InstanceReport, Layout};
pub use project::{project, project_file, Projected};
pub use remap::{remap, remap_file, Remapped, Remapper};
pub use scanner::Scanner;
pub use vmap::{OriginalId, Vertex, VertexMap};

const NSTAT_PERCENTILES: usize = 11;
const STAT_PERCENTILES: [f64; NSTAT_PERCENTILES] = [
    0.0, 0.001, 0.01, 0.05, 0.10, 0.50, 0.90, 0.95, 0.99, 0.999, 1.0,
];

pub struct SummaryStats {
    mean: f64,
    percentiles: [f64; NSTAT_PERCENTILES],
}

impl SummaryStats {
    /// Summarizes the non-NaN values of `it`, or `None` if there are none.
    pub fn from(it: impl Iterator<Item = f64>) -> Option<Self> {
        let mut v: Vec<NotNan<f64>> = it.filter_map(|f| NotNan::new(f).ok()).collect();
        if v.is_empty() {
            return None;
        }
        v.sort_unstable();
        let mut stats = SummaryStats {
            mean: v.iter().map(|f| f.into_inner()).sum::<f64>() / v.len() as f64,
            percentiles: Default::default(),
        };
        STAT_PERCENTILES
            .iter()
            .copied()
            .map(|f| v[((v.len() - 1) as f64 * f) as usize].into_inner())
            .zip(stats.percentiles.iter_mut())
            .for_each(|(val, p)| *p = val);
        Some(stats)
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn to_map(&self) -> HashMap<String, f64> {
        let mut map: HashMap<_, _> = STAT_PERCENTILES
            .iter()
            .map(|f| format!("p{:.3}", f))
            .zip(self.percentiles.iter().copied())
            .collect();
        map.insert("mean".to_string(), self.mean);
        map
    }
}
