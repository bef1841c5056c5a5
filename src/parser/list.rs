//! Reader for profile directory list files
//!
//! The format is deliberately minimal:
//! - One path per line, split on `\n` (a preceding `\r` is dropped too)
//! - Blank lines are skipped
//! - No comments, quoting, escaping, or whitespace trimming

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A non-empty line read from a list file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// 1-indexed line number within the file
    pub line_number: usize,
    pub path: PathBuf,
}

/// Streams the non-empty lines of a list file as paths.
///
/// The underlying handle lives as long as the reader and is closed when it
/// is dropped, whichever way iteration ends.
pub struct ListReader<R> {
    reader: R,
    line_number: usize,
    buf: Vec<u8>,
}

impl ListReader<BufReader<File>> {
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> ListReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for ListReader<R> {
    type Item = io::Result<ListEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    let line = strip_line_terminator(&self.buf);
                    if line.is_empty() {
                        tracing::trace!(line = self.line_number, "skipping blank line");
                        continue;
                    }
                    return Some(Ok(ListEntry {
                        line_number: self.line_number,
                        path: path_from_bytes(line),
                    }));
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

fn strip_line_terminator(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(rest) => rest.strip_suffix(b"\r").unwrap_or(rest),
        None => line,
    }
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}
