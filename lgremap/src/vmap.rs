//! Dense relabelling of arbitrary vertex identifiers.

use std::collections::HashMap;
use std::convert::TryInto;
use std::path::Path;

use crate::error::{Error, Result};
use crate::pairs;

/// A dense vertex id in `[0, nvertices)`.
pub type Vertex = u32;

/// A vertex id as it appears in the source data.
pub type OriginalId = u64;

/// Bijection from the original ids seen so far onto `[0, len)`.
///
/// Dense ids are handed out in order of first sighting and never change
/// afterwards, so `originals[v]` is the original id of dense vertex `v`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VertexMap {
    dense: HashMap<OriginalId, Vertex>,
    originals: Vec<OriginalId>,
}

impl VertexMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dense id of `orig`, assigning the next unused one if
    /// `orig` has not been seen before.
    pub fn get_or_assign(&mut self, orig: OriginalId) -> Result<Vertex> {
        if let Some(&v) = self.dense.get(&orig) {
            return Ok(v);
        }
        let v: Vertex = self
            .originals
            .len()
            .try_into()
            .map_err(|_| Error::TooManyVertices)?;
        self.dense.insert(orig, v);
        self.originals.push(orig);
        Ok(v)
    }

    /// Dense id of `orig`, or `None` if it never appeared.
    pub fn get(&self, orig: OriginalId) -> Option<Vertex> {
        self.dense.get(&orig).copied()
    }

    pub fn original(&self, v: Vertex) -> Option<OriginalId> {
        self.originals.get(v as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.originals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    /// `(original, dense)` pairs in dense id order.
    pub fn iter(&self) -> impl Iterator<Item = (OriginalId, Vertex)> + '_ {
        self.originals.iter().copied().zip(0..)
    }

    /// Dumps the map as `original dense` lines, in dense id order.
    pub fn write(&self, path: &Path) -> Result<()> {
        pairs::write_pairs(path, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_in_first_seen_order() {
        let mut vmap = VertexMap::new();
        assert!(vmap.is_empty());
        assert_eq!(vmap.get_or_assign(3).unwrap(), 0);
        assert_eq!(vmap.get_or_assign(7).unwrap(), 1);
        assert_eq!(vmap.get_or_assign(3).unwrap(), 0);
        assert_eq!(vmap.get_or_assign(9).unwrap(), 2);
        assert_eq!(vmap.len(), 3);
        assert_eq!(vmap.get(7), Some(1));
        assert_eq!(vmap.get(100), None);
        assert_eq!(vmap.original(2), Some(9));
        assert_eq!(vmap.original(3), None);
        assert_eq!(vmap.iter().collect::<Vec<_>>(), vec![(3, 0), (7, 1), (9, 2)]);
    }

    #[test]
    fn dump_lists_original_then_dense() {
        let mut vmap = VertexMap::new();
        for orig in &[42, 5, 1000] {
            vmap.get_or_assign(*orig).unwrap();
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vmap.txt");
        vmap.write(&path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "42 0\n5 1\n1000 2\n"
        );
    }
}
