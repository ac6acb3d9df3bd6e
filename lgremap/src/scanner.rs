//! This module reads newline-delimited text files one line at a time,
//! folding some accumulated state over the raw bytes of each line.
//!
//! Lines are handed over undecoded; splitting them into words is up to
//! the caller (see [`crate::pairs`]).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const BUFSIZE: usize = 64 * 1024;

/// A `Scanner` provides line-level access to a single text file.
///
/// The file handle is only held for the duration of one [`Scanner::fold`].
pub struct Scanner {
    path: PathBuf,
}

impl Scanner {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fold over the lines of the file, in file order.
    ///
    /// `fold` receives the accumulator, the 1-based line number and the
    /// line's bytes without the trailing newline. The first error, whether
    /// from reading or from `fold`, stops the scan. Parse errors come back
    /// tagged with this scanner's path.
    pub fn fold<U, Fold>(&self, init: U, mut fold: Fold) -> Result<U>
    where
        Fold: FnMut(U, usize, &[u8]) -> Result<U>,
    {
        let file = File::open(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let reader = BufReader::with_capacity(BUFSIZE, file);
        let mut acc = init;
        for (i, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|e| Error::io(&self.path, e))?;
            acc = fold(acc, i + 1, &line).map_err(|e| e.at(&self.path))?;
        }
        Ok(acc)
    }
}
