// Newline-delimited framing for JSON-RPC input

use bytes::{Bytes, BytesMut};
use std::io;
use tokio_util::codec::{AnyDelimiterCodec, AnyDelimiterCodecError, Decoder};

/// Largest accepted message line, in bytes
pub const MAX_MESSAGE_LENGTH: usize = 8 * 1024 * 1024;

/// One line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    Message(String),
    /// Not valid UTF-8, or longer than the configured limit
    Malformed(&'static str),
}

/// Splits input on `\n`.
///
/// A bad line is yielded as [`InputLine::Malformed`] and decoding carries on
/// with the next line. An oversized line is discarded up to its newline
/// without being buffered.
pub struct MessageCodec {
    inner: AnyDelimiterCodec,
}

impl MessageCodec {
    pub fn new() -> Self {
        Self::with_max_length(MAX_MESSAGE_LENGTH)
    }

    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            inner: AnyDelimiterCodec::new_with_max_length(b"\n".to_vec(), Vec::new(), max_length),
        }
    }
}

impl Default for MessageCodec {
    fn default() -> Self {
        Self::new()
    }
}

fn to_line(chunk: Result<Option<Bytes>, AnyDelimiterCodecError>) -> io::Result<Option<InputLine>> {
    match chunk {
        Ok(Some(chunk)) => Ok(Some(match std::str::from_utf8(&chunk) {
            Ok(line) => InputLine::Message(line.to_string()),
            Err(_) => InputLine::Malformed("invalid UTF-8"),
        })),
        Ok(None) => Ok(None),
        Err(AnyDelimiterCodecError::MaxChunkLengthExceeded) => {
            Ok(Some(InputLine::Malformed("line too long")))
        }
        Err(AnyDelimiterCodecError::Io(e)) => Err(e),
    }
}

impl Decoder for MessageCodec {
    type Item = InputLine;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> io::Result<Option<InputLine>> {
        to_line(self.inner.decode(src))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> io::Result<Option<InputLine>> {
        to_line(self.inner.decode_eof(src))
    }
}
