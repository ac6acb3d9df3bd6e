//! Relabels a raw edge list onto dense vertex ids.
//!
//! Vertices get ids in order of first appearance across the scan (both
//! endpoints of a line, left to right, line after line). Edges are treated
//! as undirected: each is stored as `(min, max)` of its dense endpoints and
//! duplicates collapse. Self-loops are kept as `(v, v)`.

use std::collections::HashSet;
use std::path::Path;

use itertools::Itertools;

use crate::error::Result;
use crate::pairs::{self, parse_pair};
use crate::vmap::{OriginalId, Vertex, VertexMap};
use crate::Scanner;

/// An undirected edge over dense ids, smaller endpoint first.
pub type Edge = (Vertex, Vertex);

pub fn canonical(u: Vertex, v: Vertex) -> Edge {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Scan state: the vertex map built so far and the edges seen so far.
#[derive(Debug, Default)]
pub struct Remapper {
    vmap: VertexMap,
    edges: HashSet<Edge>,
}

impl Remapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, a: OriginalId, b: OriginalId) -> Result<()> {
        let u = self.vmap.get_or_assign(a)?;
        let v = self.vmap.get_or_assign(b)?;
        self.edges.insert(canonical(u, v));
        Ok(())
    }

    pub fn insert_line(&mut self, line_no: usize, line: &[u8]) -> Result<()> {
        let (a, b) = parse_pair(line_no, line)?;
        self.insert(a, b)
    }

    pub fn finish(self) -> Remapped {
        Remapped {
            vmap: self.vmap,
            edges: self.edges,
        }
    }
}

/// Remaps an in-memory sequence of edge-list lines.
///
/// Any malformed line fails the whole remap.
pub fn remap<'a>(lines: impl IntoIterator<Item = &'a [u8]>) -> Result<Remapped> {
    let mut remapper = Remapper::new();
    for (i, line) in lines.into_iter().enumerate() {
        remapper.insert_line(i + 1, line)?;
    }
    Ok(remapper.finish())
}

/// Remaps the edge list stored at `path`.
pub fn remap_file(path: &Path) -> Result<Remapped> {
    Scanner::new(path)
        .fold(Remapper::new(), |mut remapper, line_no, line| {
            remapper.insert_line(line_no, line)?;
            Ok(remapper)
        })
        .map(Remapper::finish)
}

/// A remapped edge list.
#[derive(Debug)]
pub struct Remapped {
    pub vmap: VertexMap,
    pub edges: HashSet<Edge>,
}

impl Remapped {
    pub fn nvertices(&self) -> usize {
        self.vmap.len()
    }

    pub fn nedges(&self) -> usize {
        self.edges.len()
    }

    pub fn self_loops(&self) -> usize {
        self.edges.iter().filter(|(u, v)| u == v).count()
    }

    /// Degree of each dense vertex; a self-loop counts twice.
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.nvertices()];
        for &(u, v) in &self.edges {
            degrees[u as usize] += 1;
            degrees[v as usize] += 1;
        }
        degrees
    }

    pub fn sorted_edges(&self) -> Vec<Edge> {
        self.edges.iter().copied().sorted().collect()
    }

    /// Writes the edges as `u v` lines, in sorted order so reruns on the
    /// same input produce identical files.
    pub fn write_edges(&self, path: &Path) -> Result<()> {
        pairs::write_pairs(path, self.sorted_edges())
    }
}
