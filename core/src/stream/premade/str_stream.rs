use crate::stream::ParserStream;


/// A [`ParserStream`](../trait.ParserStream.html) over a single in-memory
/// string slice.  Undoing is always possible back to the start, and `accept`
/// does nothing since nothing is buffered.
#[derive(Copy, Clone, Debug)]
pub struct StrParserStream<'a> {
    text: &'a str,
    /// Byte offset of the cursor.
    position: usize,
}

impl<'a> StrParserStream<'a> {
    /// Make a new stream positioned at the start of `text`.
    #[inline]
    pub fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    /// The part of the input that has not been read yet.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.text[self.position ..]
    }

    /// The byte offset of the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a> From<&'a str> for StrParserStream<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl ParserStream for StrParserStream<'_> {
    fn peek(&self) -> char {
        self.text[.. self.position].chars().next_back().unwrap_or('\0')
    }

    fn read(&mut self) -> bool {
        match self.remaining().chars().next() {
            Some(c) => {
                self.position += c.len_utf8();
                true
            }
            None => false
        }
    }

    fn undo_n(&mut self, count: usize) {
        let mut back = self.text[.. self.position].chars();
        for _ in 0 .. count {
            if let Some(c) = back.next_back() {
                self.position -= c.len_utf8();
            }
        }
    }

    #[inline]
    fn accept(&mut self) {}
}
