// ============================================================================
// Pair Reader
// Whitespace tokenizer that yields literal pairs from a text source
// ============================================================================

use super::error::{DriverError, DriverResult};
use std::collections::VecDeque;
use std::io::BufRead;

/// Iterator over `(lhs, rhs)` token pairs.
///
/// Line breaks are plain whitespace: a pair may span lines and a line may
/// hold several pairs. A final token without a partner is not yielded; it is
/// kept in [`dangling_token`](Self::dangling_token).
///
/// Input is read as raw bytes and split on ASCII whitespace. Bytes that are
/// not UTF-8 are replaced with `U+FFFD`, so such a token reaches the
/// validator and is rejected like any other bad literal.
pub struct PairReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
    exhausted: bool,
    dangling: Option<String>,
}

impl<R: BufRead> PairReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
            exhausted: false,
            dangling: None,
        }
    }

    /// The unpaired trailing token, once the reader is exhausted.
    pub fn dangling_token(&self) -> Option<&str> {
        self.dangling.as_deref()
    }

    fn next_token(&mut self) -> DriverResult<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            if self.exhausted {
                return Ok(None);
            }

            self.line.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut self.line)
                .map_err(DriverError::Read)?;
            if read == 0 {
                self.exhausted = true;
            } else {
                self.pending.extend(
                    self.line
                        .split(u8::is_ascii_whitespace)
                        .filter(|token| !token.is_empty())
                        .map(|token| String::from_utf8_lossy(token).into_owned()),
                );
            }
        }
    }
}

impl<R: BufRead> Iterator for PairReader<R> {
    type Item = DriverResult<(String, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        let lhs = match self.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => return None,
            Err(e) => return Some(Err(e)),
        };

        match self.next_token() {
            Ok(Some(rhs)) => Some(Ok((lhs, rhs))),
            Ok(None) => {
                tracing::warn!(token = %lhs, "ignoring trailing token without a partner");
                self.dangling = Some(lhs);
                None
            },
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn pairs(input: &str) -> Vec<(String, String)> {
        PairReader::new(Cursor::new(input))
            .collect::<DriverResult<Vec<_>>>()
            .unwrap()
    }

    fn pair(lhs: &str, rhs: &str) -> (String, String) {
        (lhs.to_string(), rhs.to_string())
    }

    #[test]
    fn test_one_pair_per_line() {
        assert_eq!(
            pairs("1.5 2.3\n-1 1\n"),
            vec![pair("1.5", "2.3"), pair("-1", "1")]
        );
    }

    #[test]
    fn test_pairs_span_lines() {
        assert_eq!(
            pairs("1\n2 3\t\t4\n\n  5 6"),
            vec![pair("1", "2"), pair("3", "4"), pair("5", "6")]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(pairs("").is_empty());
        assert!(pairs(" \n\t\n").is_empty());
    }

    #[test]
    fn test_dangling_token() {
        let mut reader = PairReader::new(Cursor::new("1 2 3\n"));
        assert_eq!(reader.next().unwrap().unwrap(), pair("1", "2"));
        assert!(reader.next().is_none());
        assert_eq!(reader.dangling_token(), Some("3"));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(pairs("1 2\r\n3 4\r\n"), vec![pair("1", "2"), pair("3", "4")]);
    }

    #[test]
    fn test_non_utf8_bytes_become_replacement_tokens() {
        let reader = PairReader::new(Cursor::new(&b"1 2\n\xff 3\n4 5\n"[..]));
        let pairs = reader.collect::<DriverResult<Vec<_>>>().unwrap();
        assert_eq!(
            pairs,
            vec![pair("1", "2"), pair("\u{FFFD}", "3"), pair("4", "5")]
        );
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_read_error_is_reported() {
        let mut reader = PairReader::new(io::BufReader::new(FailingReader));
        assert!(matches!(reader.next(), Some(Err(DriverError::Read(_)))));
    }
}
