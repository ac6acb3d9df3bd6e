//! Helper functions for plaintext files of integer pairs, i.e.,
//! `<a> <b> [ignored...]` per line, whitespace separated.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use bstr::ByteSlice;

use crate::error::{Error, ParseReason, Result};

const BUFSIZE: usize = 64 * 1024;

/// Parses the first two words of a line as non-negative integers.
///
/// Any words after the second are ignored.
pub fn parse_pair(line_no: usize, line: &[u8]) -> Result<(u64, u64)> {
    let fail = |reason: ParseReason| Error::Parse {
        path: Default::default(),
        line: line_no,
        reason,
    };
    let mut words = line.fields();
    match (words.next(), words.next()) {
        (Some(a), Some(b)) => {
            let a = parse_word(a).map_err(fail)?;
            let b = parse_word(b).map_err(fail)?;
            Ok((a, b))
        }
        (first, _) => Err(fail(ParseReason::TooFewTokens(first.is_some() as usize))),
    }
}

fn parse_word(word: &[u8]) -> Result<u64, ParseReason> {
    let string = word.to_str().map_err(|_| ParseReason::Utf8)?;
    string
        .parse()
        .map_err(|_| ParseReason::NotAnInteger(string.to_string()))
}

/// Writes one `a b` line per pair, creating parent directories as needed.
pub fn write_pairs<A, B>(path: &Path, pairs: impl IntoIterator<Item = (A, B)>) -> Result<()>
where
    A: Display,
    B: Display,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::with_capacity(BUFSIZE, file);
    for (a, b) in pairs {
        writeln!(writer, "{} {}", a, b).map_err(|e| Error::io(path, e))?;
    }
    writer.flush().map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(line: &[u8]) -> ParseReason {
        match parse_pair(7, line) {
            Err(Error::Parse { line: 7, reason, .. }) => reason,
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_first_two_words() {
        assert_eq!(parse_pair(1, b"3 7").unwrap(), (3, 7));
        assert_eq!(parse_pair(1, b"3 7 12 extra").unwrap(), (3, 7));
        assert_eq!(parse_pair(1, b"  3\t7\r").unwrap(), (3, 7));
        assert_eq!(
            parse_pair(1, b"18446744073709551615 0").unwrap(),
            (u64::MAX, 0)
        );
    }

    #[test]
    fn rejects_short_lines() {
        assert_eq!(reason(b""), ParseReason::TooFewTokens(0));
        assert_eq!(reason(b"   "), ParseReason::TooFewTokens(0));
        assert_eq!(reason(b"42"), ParseReason::TooFewTokens(1));
    }

    #[test]
    fn rejects_non_integers() {
        assert_eq!(reason(b"3 x"), ParseReason::NotAnInteger("x".to_string()));
        assert_eq!(reason(b"-1 2"), ParseReason::NotAnInteger("-1".to_string()));
        assert_eq!(reason(b"1.5 2"), ParseReason::NotAnInteger("1.5".to_string()));
        assert_eq!(reason(b"\xff 2"), ParseReason::Utf8);
    }

    #[test]
    fn writes_pairs_into_fresh_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("pairs.txt");
        write_pairs(&path, vec![(0u32, 1u32), (2, 2)]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "0 1\n2 2\n");
    }
}
