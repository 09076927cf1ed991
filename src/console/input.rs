//! Whitespace-delimited reading of console input.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Reads input one word at a time, across line boundaries.
pub struct WordReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> WordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next word, or `None` at end of input.
    pub fn next_word(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Ok(Some(word));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Drop whatever is left of the current line, then wait for one more
    /// line. Returns `false` at end of input.
    pub fn wait_for_line(&mut self) -> io::Result<bool> {
        self.pending.clear();
        let mut line = String::new();
        Ok(self.reader.read_line(&mut line)? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_across_lines() {
        let mut reader = WordReader::new("1  2\n\n 3\n".as_bytes());
        assert_eq!(reader.next_word().unwrap().as_deref(), Some("1"));
        assert_eq!(reader.next_word().unwrap().as_deref(), Some("2"));
        assert_eq!(reader.next_word().unwrap().as_deref(), Some("3"));
        assert_eq!(reader.next_word().unwrap(), None);
    }

    #[test]
    fn test_wait_for_line_discards_rest_of_line() {
        let mut reader = WordReader::new("1 extra\n\n4\n".as_bytes());
        assert_eq!(reader.next_word().unwrap().as_deref(), Some("1"));
        assert!(reader.wait_for_line().unwrap());
        assert_eq!(reader.next_word().unwrap().as_deref(), Some("4"));
        assert!(!reader.wait_for_line().unwrap());
    }
}
