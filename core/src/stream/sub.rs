use super::ParserStream;


/// A checkpoint over another stream.
///
/// Every character read through a `SubParserStream` is counted, and when it is
/// dropped, all of the counted characters are undone on the wrapped stream.
/// Calling [`accept`](#method.accept) resets the count so that the characters
/// read so far stay consumed.  Therefore a parser only has to create one of
/// these at the start of its `read` method and `accept` it on its success path;
/// every other way out of the method rolls back automatically.
///
/// Checkpoints nest: because a `SubParserStream` is itself a `ParserStream`
/// that delegates to the one it wraps, an enclosing checkpoint counts the reads
/// of an inner one, and accepting the inner one does not accept for the outer.
#[derive(Debug)]
pub struct SubParserStream<'s, S>
    where S: ParserStream + ?Sized,
{
    source: &'s mut S,
    count: usize,
}

impl<'s, S> SubParserStream<'s, S>
    where S: ParserStream + ?Sized,
{
    /// Make a new checkpoint at the current position of `source`.
    #[inline]
    pub fn new(source: &'s mut S) -> Self {
        Self { source, count: 0 }
    }

    /// How many characters would be undone if this were dropped now.
    #[inline]
    pub fn pending(&self) -> usize {
        self.count
    }
}

impl<S> ParserStream for SubParserStream<'_, S>
    where S: ParserStream + ?Sized,
{
    #[inline]
    fn peek(&self) -> char {
        self.source.peek()
    }

    #[inline]
    fn read(&mut self) -> bool {
        if self.source.read() {
            self.count += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    fn undo_n(&mut self, count: usize) {
        self.count -= count;
        self.source.undo_n(count);
    }

    /// Commit.  This does not call `accept` on the wrapped stream, because an
    /// enclosing checkpoint might still need to undo these characters.
    #[inline]
    fn accept(&mut self) {
        self.count = 0;
    }
}

impl<S> Drop for SubParserStream<'_, S>
    where S: ParserStream + ?Sized,
{
    fn drop(&mut self) {
        if self.count != 0 {
            self.source.undo_n(self.count);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::premade::StrParserStream;

    #[test]
    fn rollback_on_drop() {
        let mut s = StrParserStream::new("abc");
        {
            let mut c = SubParserStream::new(&mut s);
            assert_eq!(c.next_char(), Some('a'));
            assert_eq!(c.next_char(), Some('b'));
            assert_eq!(c.pending(), 2);
        }
        assert_eq!(s.next_char(), Some('a'));
    }

    #[test]
    fn accept_keeps() {
        let mut s = StrParserStream::new("abc");
        {
            let mut c = SubParserStream::new(&mut s);
            assert!(c.read());
            assert!(c.read());
            c.accept();
            assert_eq!(c.pending(), 0);
            assert!(c.read());
        }
        assert_eq!(s.peek(), 'b');
        assert_eq!(s.next_char(), Some('c'));
    }

    #[test]
    fn nested() {
        let mut s = StrParserStream::new("abcd");
        {
            let mut outer = SubParserStream::new(&mut s);
            assert!(outer.read());
            {
                let mut inner = SubParserStream::new(&mut outer);
                assert!(inner.read());
                assert!(inner.read());
                inner.accept();
            }
            assert_eq!(outer.pending(), 3);
            assert_eq!(outer.peek(), 'c');
        }
        assert_eq!(s.peek(), '\0');
        assert_eq!(s.next_char(), Some('a'));
    }

    #[test]
    fn undo_inside() {
        let mut s = StrParserStream::new("ab");
        let mut c = SubParserStream::new(&mut s);
        assert!(c.read());
        assert!(c.read());
        c.undo();
        assert_eq!(c.pending(), 1);
        assert_eq!(c.peek(), 'a');
    }

    #[test]
    fn exhausted() {
        let mut s = StrParserStream::new("");
        {
            let mut c = SubParserStream::new(&mut s);
            assert!(!c.read());
            assert_eq!(c.pending(), 0);
        }
        assert!(!s.read());
    }
}
