//! SSE line framing for DashScope streaming replies.

use dashgate_error::{DashScopeError, DashScopeErrorKind};

/// Accumulates raw network chunks and yields complete `data:` payloads.
///
/// Network chunks may split lines — and multi-byte UTF-8 sequences — at
/// arbitrary byte boundaries, so the framer buffers bytes and only decodes
/// a line once its terminating newline has arrived. Field lines other than
/// `data:` (`id:`, `event:`, comments) and blank separators are skipped.
#[derive(Debug, Default)]
pub struct SseFramer {
    buffer: Vec<u8>,
}

impl SseFramer {
    /// Creates an empty framer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a chunk of bytes; returns the data payloads it completed.
    ///
    /// # Errors
    ///
    /// Returns a stream error if a completed line is not valid UTF-8.
    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<String>, DashScopeError> {
        self.buffer.extend_from_slice(chunk);

        let mut payloads = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = std::str::from_utf8(&line[..pos]).map_err(|e| {
                DashScopeError::new(DashScopeErrorKind::Stream(format!(
                    "Event line is not valid UTF-8: {}",
                    e
                )))
            })?;
            let line = line.trim_end_matches('\r');

            if let Some(data) = line.strip_prefix("data:") {
                payloads.push(data.trim_start().to_string());
            }
        }

        Ok(payloads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_payload_per_data_line() {
        let mut framer = SseFramer::new();
        let payloads = framer
            .push(b"data: {\"a\":1}\ndata: {\"b\":2}\n")
            .expect("valid frames");

        assert_eq!(payloads, vec!["{\"a\":1}", "{\"b\":2}"]);
    }

    #[test]
    fn buffers_lines_split_across_chunks() {
        let mut framer = SseFramer::new();

        let first = framer.push(b"data: {\"par").expect("valid frames");
        assert!(first.is_empty());

        let second = framer.push(b"tial\":true}\n").expect("valid frames");
        assert_eq!(second, vec!["{\"partial\":true}"]);
    }

    #[test]
    fn buffers_multibyte_utf8_split_across_chunks() {
        let mut framer = SseFramer::new();
        let bytes = "data: 你好\n".as_bytes();

        // Split in the middle of 好 (a three-byte sequence)
        let first = framer.push(&bytes[..10]).expect("valid frames");
        assert!(first.is_empty());

        let second = framer.push(&bytes[10..]).expect("valid frames");
        assert_eq!(second, vec!["你好"]);
    }

    #[test]
    fn skips_non_data_lines() {
        let mut framer = SseFramer::new();
        let payloads = framer
            .push(b"id:1\nevent:result\n:HTTP_STATUS/200\n\ndata: {}\n")
            .expect("valid frames");

        assert_eq!(payloads, vec!["{}"]);
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let mut framer = SseFramer::new();
        let payloads = framer.push(b"data: {\"x\":1}\r\n").expect("valid frames");

        assert_eq!(payloads, vec!["{\"x\":1}"]);
    }

    #[test]
    fn rejects_invalid_utf8_lines() {
        let mut framer = SseFramer::new();
        let result = framer.push(b"data: \xff\xfe\n");

        assert!(result.is_err());
    }
}
