use core::fmt;
use alloc::boxed::Box;

use crate::stream::ParserStream;


/// Owns any kind of [`ParserStream`](../trait.ParserStream.html) behind one
/// type, so that code which picks its input at run time can still give parsers
/// a single concrete stream type.
pub struct ParserStreamBox<'a> {
    stream: Box<dyn ParserStream + 'a>,
}

impl<'a> ParserStreamBox<'a> {
    /// Box the given stream.
    pub fn new<S>(stream: S) -> Self
        where S: ParserStream + 'a,
    {
        Self { stream: Box::new(stream) }
    }
}

impl ParserStream for ParserStreamBox<'_> {
    #[inline]
    fn peek(&self) -> char {
        self.stream.peek()
    }

    #[inline]
    fn read(&mut self) -> bool {
        self.stream.read()
    }

    #[inline]
    fn undo(&mut self) {
        self.stream.undo();
    }

    #[inline]
    fn undo_n(&mut self, count: usize) {
        self.stream.undo_n(count);
    }

    #[inline]
    fn accept(&mut self) {
        self.stream.accept();
    }
}

impl fmt::Debug for ParserStreamBox<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserStreamBox")
            .field("current", &self.stream.peek())
            .finish()
    }
}
