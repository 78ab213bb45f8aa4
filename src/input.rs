//! Provides `Scanner`, which reads typed values from any `BufRead`: a
//! locked stdin in the binary, a byte slice holding a script in tests.
//!
//! Values are whitespace-separated tokens, except for `next_line`, which
//! takes a whole line (set names may contain spaces).
use std::io::BufRead;
use std::str::FromStr;

use crate::error::PieError;

/// A token reader over `R`. `what` arguments name the value being read, for
/// error messages.
pub struct Scanner<R: BufRead> {
    reader: R,
    line: String,
    position: usize,
}

impl<R: BufRead> Scanner<R> {
    /// A scanner with nothing buffered yet
    pub fn new(reader: R) -> Self {
        Scanner { reader, line: String::new(), position: 0 }
    }

    /// The unread part of the current line
    fn rest(&self) -> &str {
        &self.line[self.position..]
    }

    /// Replaces the current line with the next one from the reader. Returns
    /// `false` at end of input.
    fn advance(&mut self) -> Result<bool, PieError> {
        self.line.clear();
        self.position = 0;
        Ok(self.reader.read_line(&mut self.line)? > 0)
    }

    /// The next whitespace-delimited token, reading more lines as needed.
    pub fn next_word(&mut self, what: &str) -> Result<String, PieError> {
        loop {
            let rest = self.rest();
            let skipped = rest.len() - rest.trim_start().len();
            self.position += skipped;
            if !self.rest().is_empty() {
                break;
            }
            if !self.advance()? {
                return Err(PieError::EndOfInput(what.to_string()));
            }
        }
        let rest = self.rest();
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let word = rest[..end].to_string();
        self.position += end;
        Ok(word)
    }

    /// The next token parsed as a `T`. A token that doesn't parse is consumed
    /// and reported as `PieError::InvalidInput`.
    pub fn next_value<T: FromStr>(&mut self, what: &str) -> Result<T, PieError> {
        let word = self.next_word(what)?;
        word.parse().map_err(|_| PieError::InvalidInput { expected: what.to_string(), found: word })
    }

    /// The rest of the current line if anything but whitespace is left on it,
    /// otherwise the next non-blank line. Surrounding whitespace is trimmed.
    pub fn next_line(&mut self, what: &str) -> Result<String, PieError> {
        while self.rest().trim().is_empty() {
            if !self.advance()? {
                return Err(PieError::EndOfInput(what.to_string()));
            }
        }
        let line = self.rest().trim().to_string();
        self.position = self.line.len();
        Ok(line)
    }

    /// Throws away whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.position = self.line.len();
    }
}
