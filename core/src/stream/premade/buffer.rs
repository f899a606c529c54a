use core::{convert::Infallible, fmt, mem, str};
use alloc::vec::Vec;

use crate::stream::ParserStream;


/// Something that bytes can be pulled from in chunks, e.g. a file or a socket.
pub trait ByteSource {
    /// The error of a failed pull.  This is distinct from the end of the input,
    /// which is `Ok(0)`.
    type Error;

    /// Append the next chunk of bytes to `sink` and return how many were
    /// appended.  Returning `Ok(0)` means the end of the input was reached and
    /// no more bytes will ever come.
    fn read_into(&mut self, sink: &mut Vec<u8>) -> Result<usize, Self::Error>;
}

impl ByteSource for &[u8] {
    type Error = Infallible;

    fn read_into(&mut self, sink: &mut Vec<u8>) -> Result<usize, Self::Error> {
        let count = self.len();
        sink.extend_from_slice(self);
        *self = &[];
        Ok(count)
    }
}


/// A [`ParserStream`](../trait.ParserStream.html) that decodes the UTF-8 bytes
/// pulled from a [`ByteSource`](trait.ByteSource.html) into a growable buffer
/// of characters, which is what makes undoing possible.
///
/// Pulling happens only when the cursor reaches the end of the buffer.  A
/// multi-byte character split across chunks is reassembled, and invalid byte
/// sequences become `U+FFFD`.
///
/// When the source fails, `read` returns `false` just as at the end of the
/// input, so parsers backtrack normally, but the error is kept and can be
/// retrieved with [`take_error`](#method.take_error).  The end of the input and
/// a source error are therefore never conflated.
pub struct BufferParserStream<B>
    where B: ByteSource,
{
    source: B,
    buffer: Vec<char>,
    position: usize,
    /// The character before the start of `buffer`, after `accept` released it.
    before: char,
    /// Trailing bytes of an incomplete UTF-8 sequence.
    pending: Vec<u8>,
    exhausted: bool,
    source_done: bool,
    error: Option<B::Error>,
}

impl<B> BufferParserStream<B>
    where B: ByteSource,
{
    /// Make a new stream that pulls from `source` as needed.
    pub fn new(source: B) -> Self {
        Self {
            source,
            buffer: Vec::new(),
            position: 0,
            before: '\0',
            pending: Vec::new(),
            exhausted: false,
            source_done: false,
            error: None,
        }
    }

    /// The error that made the last `read` fail, if any.
    #[inline]
    pub fn error(&self) -> Option<&B::Error> {
        self.error.as_ref()
    }

    /// Remove and return the error that made the last `read` fail, if any.
    /// After this, reading will try the source again.
    #[inline]
    pub fn take_error(&mut self) -> Option<B::Error> {
        self.exhausted = false;
        self.error.take()
    }

    /// How many decoded characters are currently held.
    #[inline]
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Give back the byte source.
    #[inline]
    pub fn into_source(self) -> B {
        self.source
    }

    fn fill(&mut self) {
        let mut bytes = mem::take(&mut self.pending);
        match self.source.read_into(&mut bytes) {
            Ok(0) => {
                self.source_done = true;
                if !bytes.is_empty() {
                    self.buffer.push(char::REPLACEMENT_CHARACTER);
                }
            }
            Ok(_) => self.decode(&bytes),
            Err(e) => {
                self.pending = bytes;
                self.error = Some(e);
            }
        }
    }

    fn decode(&mut self, bytes: &[u8]) {
        let mut rest = bytes;
        loop {
            match str::from_utf8(rest) {
                Ok(valid) => {
                    self.buffer.extend(valid.chars());
                    rest = &[];
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    if let Ok(valid) = str::from_utf8(valid) {
                        self.buffer.extend(valid.chars());
                    }
                    match e.error_len() {
                        Some(len) => {
                            self.buffer.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[len ..];
                        }
                        None => {
                            rest = after;
                            break;
                        }
                    }
                }
            }
        }
        self.pending.extend_from_slice(rest);
    }
}

impl<B> ParserStream for BufferParserStream<B>
    where B: ByteSource,
{
    fn peek(&self) -> char {
        match self.position.checked_sub(1) {
            Some(index) => self.buffer.get(index).copied().unwrap_or(self.before),
            None => self.before
        }
    }

    fn read(&mut self) -> bool {
        if self.position < self.buffer.len() {
            self.position += 1;
            return true;
        }
        if self.exhausted {
            return false;
        }
        while self.position == self.buffer.len() {
            if self.source_done || self.error.is_some() {
                self.exhausted = true;
                return false;
            }
            self.fill();
        }
        self.position += 1;
        true
    }

    fn undo_n(&mut self, count: usize) {
        if count > 0 {
            self.position = self.position.saturating_sub(count);
            self.exhausted = false;
        }
    }

    fn accept(&mut self) {
        if self.position == self.buffer.len() && self.position > 0 {
            self.before = self.peek();
            self.buffer.clear();
            self.position = 0;
        }
    }
}

impl<B> fmt::Debug for BufferParserStream<B>
    where B: ByteSource,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferParserStream")
            .field("position", &self.position)
            .field("buffered", &self.buffer.len())
            .field("pending", &self.pending.len())
            .field("exhausted", &self.exhausted)
            .field("source_done", &self.source_done)
            .field("failed", &self.error.is_some())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::String, vec};

    /// Gives out its chunks one at a time, then possibly fails once.
    struct Chunks {
        chunks: Vec<Vec<u8>>,
        fail_at_end: bool,
    }

    impl ByteSource for Chunks {
        type Error = &'static str;

        fn read_into(&mut self, sink: &mut Vec<u8>) -> Result<usize, Self::Error> {
            if self.chunks.is_empty() {
                if self.fail_at_end {
                    self.fail_at_end = false;
                    return Err("broken");
                }
                return Ok(0);
            }
            let chunk = self.chunks.remove(0);
            sink.extend_from_slice(&chunk);
            Ok(chunk.len())
        }
    }

    fn drain<S: ParserStream>(s: &mut S) -> String {
        let mut out = String::new();
        while let Some(c) = s.next_char() {
            out.push(c);
        }
        out
    }

    #[test]
    fn bytes() {
        let mut s = BufferParserStream::new(&b"ab"[..]);
        assert_eq!(s.peek(), '\0');
        assert_eq!(s.next_char(), Some('a'));
        assert_eq!(s.next_char(), Some('b'));
        assert!(!s.read());
        assert!(!s.read());
        s.undo();
        assert_eq!(s.peek(), 'a');
        assert_eq!(s.next_char(), Some('b'));
        assert!(s.error().is_none());
    }

    #[test]
    fn split_characters() {
        let text = "aλ€b".as_bytes();
        let chunks = text.iter().map(|b| vec![*b]).collect();
        let mut s = BufferParserStream::new(Chunks { chunks, fail_at_end: false });
        assert_eq!(drain(&mut s), "aλ€b");
        s.undo_n(3);
        assert_eq!(drain(&mut s), "λ€b");
    }

    #[test]
    fn invalid_bytes() {
        let mut s = BufferParserStream::new(&b"a\xFFb\xE2\x82"[..]);
        assert_eq!(drain(&mut s), "a\u{FFFD}b\u{FFFD}");
    }

    #[test]
    fn accept_releases() {
        let chunks = vec![b"ab".to_vec(), b"cd".to_vec()];
        let mut s = BufferParserStream::new(Chunks { chunks, fail_at_end: false });
        assert!(s.read());
        s.accept();
        assert_eq!(s.buffered(), 2);
        assert!(s.read());
        s.accept();
        assert_eq!(s.buffered(), 0);
        assert_eq!(s.peek(), 'b');
        assert_eq!(drain(&mut s), "cd");
    }

    #[test]
    fn error_is_latched() {
        let chunks = vec![b"xy".to_vec()];
        let mut s = BufferParserStream::new(Chunks { chunks, fail_at_end: true });
        assert_eq!(drain(&mut s), "xy");
        assert_eq!(s.error(), Some(&"broken"));
        assert!(!s.read());
        assert_eq!(s.take_error(), Some("broken"));
        assert!(!s.read());
        assert!(s.error().is_none());
    }
}
