//! The character-stream abstraction that parsers read from, and the checkpoint
//! type that gives every parser its backtracking.

use alloc::boxed::Box;


/// Implementations provided for ready use.
pub mod premade
{
    mod str_stream;
    pub use str_stream::StrParserStream;

    mod buffer;
    pub use buffer::{BufferParserStream, ByteSource};

    mod boxed;
    pub use boxed::ParserStreamBox;
}

mod sub;
pub use sub::SubParserStream;


/// A source of characters with single-character lookahead and unbounded undo.
///
/// The model is a cursor that moves over the characters of the input.  `read`
/// moves the cursor forward over one character, which then becomes the
/// "current" character returned by `peek`.  `undo` moves the cursor back.
///
/// Reaching the end of the input is not an error: `read` returns `false`, and
/// keeps returning `false` until the cursor is moved back with `undo`.
///
/// This trait is object safe, so `&mut dyn ParserStream` can be given to any
/// parser.
pub trait ParserStream {
    /// The character that was most recently read, i.e. the one just before the
    /// cursor.  Returns `'\0'` if the cursor is at the very start of the input.
    fn peek(&self) -> char;

    /// Advance the cursor by one character.  Returns `false` if there are no
    /// more characters, in which case the cursor does not move.
    fn read(&mut self) -> bool;

    /// Move the cursor back by one character.
    #[inline]
    fn undo(&mut self) {
        self.undo_n(1);
    }

    /// Move the cursor back by `count` characters.  It is a logic error to move
    /// back past what was previously read.
    fn undo_n(&mut self, count: usize);

    /// Declare that everything before the cursor will never be undone, so that
    /// implementations may release it.  May be a no-op.
    fn accept(&mut self);

    /// Read one character and return it, or `None` at the end of the input.
    #[inline]
    fn next_char(&mut self) -> Option<char> {
        if self.read() {
            Some(self.peek())
        } else {
            None
        }
    }
}


impl<S> ParserStream for &mut S
    where S: ParserStream + ?Sized,
{
    #[inline]
    fn peek(&self) -> char {
        (**self).peek()
    }

    #[inline]
    fn read(&mut self) -> bool {
        (**self).read()
    }

    #[inline]
    fn undo(&mut self) {
        (**self).undo();
    }

    #[inline]
    fn undo_n(&mut self, count: usize) {
        (**self).undo_n(count);
    }

    #[inline]
    fn accept(&mut self) {
        (**self).accept();
    }
}

impl<S> ParserStream for Box<S>
    where S: ParserStream + ?Sized,
{
    #[inline]
    fn peek(&self) -> char {
        (**self).peek()
    }

    #[inline]
    fn read(&mut self) -> bool {
        (**self).read()
    }

    #[inline]
    fn undo(&mut self) {
        (**self).undo();
    }

    #[inline]
    fn undo_n(&mut self, count: usize) {
        (**self).undo_n(count);
    }

    #[inline]
    fn accept(&mut self) {
        (**self).accept();
    }
}
