//! Projects query pairs from original ids onto the dense ids of one
//! remapped graph.
//!
//! A query survives only if both endpoints are in the vertex map. Unlike
//! edges, query pairs keep their orientation: `a b` becomes
//! `dense(a) dense(b)` even when `dense(a) > dense(b)`, so `3 9` and `9 3`
//! are distinct results.

use std::collections::HashSet;
use std::path::Path;

use itertools::Itertools;

use crate::error::Result;
use crate::pairs::{self, parse_pair};
use crate::vmap::{Vertex, VertexMap};
use crate::Scanner;

pub type QueryPair = (Vertex, Vertex);

/// Deduplicated, resolvable queries plus how many lines were read.
#[derive(Debug, Default)]
pub struct Projected {
    pub pairs: HashSet<QueryPair>,
    /// Query lines read, including those dropped.
    pub read: usize,
    /// Lines with at least one endpoint outside the vertex map.
    pub dropped: usize,
}

impl Projected {
    fn insert_line(mut self, vmap: &VertexMap, line_no: usize, line: &[u8]) -> Result<Self> {
        let (a, b) = parse_pair(line_no, line)?;
        self.read += 1;
        match (vmap.get(a), vmap.get(b)) {
            (Some(u), Some(v)) => {
                self.pairs.insert((u, v));
            }
            _ => self.dropped += 1,
        }
        Ok(self)
    }

    pub fn kept(&self) -> usize {
        self.pairs.len()
    }

    pub fn sorted_pairs(&self) -> Vec<QueryPair> {
        self.pairs.iter().copied().sorted().collect()
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        pairs::write_pairs(path, self.sorted_pairs())
    }
}

/// Projects an in-memory sequence of query lines through `vmap`.
pub fn project<'a>(
    lines: impl IntoIterator<Item = &'a [u8]>,
    vmap: &VertexMap,
) -> Result<Projected> {
    lines
        .into_iter()
        .enumerate()
        .try_fold(Projected::default(), |acc, (i, line)| {
            acc.insert_line(vmap, i + 1, line)
        })
}

/// Projects the query file at `path` through `vmap`.
pub fn project_file(path: &Path, vmap: &VertexMap) -> Result<Projected> {
    Scanner::new(path).fold(Projected::default(), |acc, line_no, line| {
        acc.insert_line(vmap, line_no, line)
    })
}
