//! Lazy line source over a buffered byte stream.
//!
//! Lines are produced on demand, consumed immediately by the dispatch loop,
//! and not retained afterward. Buffering policy is whatever the caller's
//! [`BufRead`] provides.

use std::io::{self, BufRead};

/// One line of input with the trailing terminator stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Position in the stream, 1-indexed.
    pub number: u64,
    /// Line content without `\n` or `\r\n`.
    pub text: String,
}

/// Iterator that yields [`Line`]s from a reader on demand.
///
/// End-of-stream ends iteration; read errors surface as items so the caller
/// decides how to stop. A final line without a terminator is still yielded.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    next_number: u64,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            next_number: 1,
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut text = String::new();
        match self.reader.read_line(&mut text) {
            Ok(0) => None,
            Ok(_) => {
                if text.ends_with('\n') {
                    text.pop();
                    if text.ends_with('\r') {
                        text.pop();
                    }
                }
                let number = self.next_number;
                self.next_number += 1;
                Some(Ok(Line { number, text }))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
