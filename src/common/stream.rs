//! Parsing of inputs that are bytes, either in memory or pulled in chunks from
//! an [`io::Read`](http://doc.rust-lang.org/std/io/trait.Read.html).

use std::{convert::Infallible, io};

use tracing::{debug, trace};

use crate::{BufferParserStream, ByteSource, Error, Parser, ParserStream, Result};


/// A [`ByteSource`](../../trait.ByteSource.html) that pulls chunks of a
/// configurable size from an `io::Read`.  Reads that are interrupted are
/// retried.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    chunk_size: usize,
}

impl<R> ReaderSource<R>
    where R: io::Read,
{
    /// The size of the chunks pulled by a source made with
    /// [`new`](#method.new).
    pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

    /// Make a new one that pulls chunks of the default size.
    #[inline]
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, Self::DEFAULT_CHUNK_SIZE)
    }

    /// Make a new one that pulls chunks of at most `chunk_size` bytes, which is
    /// raised to 1 if 0.
    #[inline]
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        Self { reader, chunk_size: chunk_size.max(1) }
    }

    /// Give back the reader.
    #[inline]
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R> ByteSource for ReaderSource<R>
    where R: io::Read,
{
    type Error = io::Error;

    fn read_into(&mut self, sink: &mut Vec<u8>) -> io::Result<usize> {
        let start = sink.len();
        sink.resize(start + self.chunk_size, 0);
        let result = loop {
            match self.reader.read(&mut sink[start ..]) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                result => break result,
            }
        };
        match result {
            Ok(count) => {
                sink.truncate(start + count);
                trace!(count, "pulled bytes");
                Ok(count)
            }
            Err(e) => {
                sink.truncate(start);
                debug!(error = %e, "failed to pull bytes");
                Err(e)
            }
        }
    }
}


/// Conversion of the errors of byte sources into the crate's error.
pub trait IntoError {
    /// Perform the conversion.
    fn into_error(self) -> Error;
}

impl IntoError for io::Error {
    #[inline]
    fn into_error(self) -> Error {
        Error::Io(self)
    }
}

impl IntoError for Infallible {
    #[inline]
    fn into_error(self) -> Error {
        match self {}
    }
}


/// Parse the start of what `stream` gives with `parser`.  On success, what
/// was consumed is accepted, so the stream can continue with the rest of its
/// input.
///
/// A source error is reported as [`Error::Io`], even if `parser` matched,
/// because the stream ending early might have been what let it match.
///
/// [`Error::Io`]: ../../enum.Error.html#variant.Io
pub fn parse_from_stream<P, B>(parser: &P, stream: &mut BufferParserStream<B>)
                               -> Result<P::Result>
    where P: Parser,
          B: ByteSource,
          B::Error: IntoError,
{
    let value = parser.read(stream);
    if let Some(e) = stream.take_error() {
        let error = e.into_error();
        debug!(%error, "byte input failed");
        return Err(error);
    }
    match value {
        Some(value) => {
            stream.accept();
            trace!("parsed byte input");
            Ok(value)
        }
        None => {
            debug!(buffered = stream.buffered(), "byte input did not match");
            Err(Error::InvalidValue)
        }
    }
}

/// Parse the start of `input`, which is decoded as UTF-8, with `parser`.
/// Like [`parse_from`](../inmem/fn.parse_from.html), the input need not be
/// consumed entirely.
pub fn parse_from_bytes<P>(parser: &P, input: &[u8]) -> Result<P::Result>
    where P: Parser,
{
    parse_from_stream(parser, &mut BufferParserStream::new(input))
}

/// Parse the start of what `reader` gives, which is decoded as UTF-8, with
/// `parser`.  The reader is only read as far as needed.
pub fn parse_from_reader<P, R>(parser: &P, reader: R) -> Result<P::Result>
    where P: Parser,
          R: io::Read,
{
    parse_from_stream(parser, &mut BufferParserStream::new(ReaderSource::new(reader)))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{integral, string};

    /// Gives at most `step` bytes per read, and fails after `fail_after` bytes.
    struct Trickle<'a> {
        bytes: &'a [u8],
        step: usize,
        fail_after: Option<usize>,
        interrupted: bool,
    }

    impl io::Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "again"));
            }
            if let Some(0) = self.fail_after {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "cut"));
            }
            let count = self.step.min(buf.len()).min(self.bytes.len());
            let count = self.fail_after.map_or(count, |limit| count.min(limit));
            buf[.. count].copy_from_slice(&self.bytes[.. count]);
            self.bytes = &self.bytes[count ..];
            if let Some(limit) = &mut self.fail_after {
                *limit -= count;
            }
            Ok(count)
        }
    }

    #[test]
    fn bytes() {
        assert_eq!(parse_from_bytes(&integral::<u16>(), b"8080/tcp").unwrap(), 8080);
        assert!(matches!(parse_from_bytes(&integral::<u16>(), b"/tcp"),
                         Err(Error::InvalidValue)));
    }

    #[test]
    fn small_chunks() {
        let input = "\"caf\u{e9} \u{1f600}\"".as_bytes();
        let reader = Trickle { bytes: input, step: 1, fail_after: None, interrupted: false };
        let mut stream = BufferParserStream::new(ReaderSource::with_chunk_size(reader, 2));
        assert_eq!(parse_from_stream(&string(), &mut stream).unwrap(), "caf\u{e9} \u{1f600}");
        assert!(!stream.read());
    }

    #[test]
    fn io_error_is_not_a_mismatch() {
        let reader = Trickle { bytes: b"12345", step: 4, fail_after: Some(3),
                               interrupted: false };
        let result = parse_from_reader(&integral::<u32>(), reader);
        assert!(matches!(result, Err(Error::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
