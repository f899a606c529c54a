use crate::{Parser, ParserStream, SubParserStream, kind::MaybeChar};


/// Matches the first parser only where the second does not match at the same
/// position.  The second is only looked ahead at, so it never consumes anything.
#[derive(Copy, Clone, Debug)]
pub struct DifferenceParser<P, E> {
    parser: P,
    excluded: E,
}

impl<P, E> DifferenceParser<P, E> {
    /// Make a new one.
    #[inline]
    pub fn new(parser: P, excluded: E) -> Self {
        Self { parser, excluded }
    }
}

/// Whether `parser` would match here.  Always rolled back.
fn lookahead<P, S>(parser: &P, source: &mut S) -> bool
    where P: Parser,
          S: ParserStream + ?Sized,
{
    let mut context = SubParserStream::new(source);
    parser.skip(&mut context)
}

impl<P, E> Parser for DifferenceParser<P, E>
    where P: Parser,
          E: Parser,
{
    type Result = P::Result;
    type Kind = P::Kind;

    fn read<S>(&self, source: &mut S) -> Option<P::Result>
        where S: ParserStream + ?Sized,
    {
        if lookahead(&self.excluded, source) {
            None
        } else {
            self.parser.read(source)
        }
    }

    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        !lookahead(&self.excluded, source) && self.parser.skip(source)
    }
}


/// Matches where the given parser does not, and then consumes one character.
/// At the end of the input, it matches without consuming and produces `None`.
#[derive(Copy, Clone, Debug)]
pub struct NotParser<P> {
    parser: P,
}

impl<P> NotParser<P> {
    /// Make a new one.
    #[inline]
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P> Parser for NotParser<P>
    where P: Parser,
{
    type Result = Option<char>;
    type Kind = MaybeChar;

    fn read<S>(&self, source: &mut S) -> Option<Option<char>>
        where S: ParserStream + ?Sized,
    {
        if lookahead(&self.parser, source) {
            None
        } else {
            Some(source.next_char())
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StrParserStream, alpha, any, symbol};

    #[test]
    fn excluding() {
        let p = alpha().except('x');
        let mut s = StrParserStream::new("axb");
        assert_eq!(p.read(&mut s), Some('a'));
        assert_eq!(p.read(&mut s), None);
        assert_eq!(s.remaining(), "xb");
        assert!(!p.skip(&mut s));
        assert_eq!(s.remaining(), "xb");
    }

    #[test]
    fn excluded_longer() {
        let p = any().except("*/");
        let mut s = StrParserStream::new("a*b*/");
        assert_eq!(p.read(&mut s), Some('a'));
        assert_eq!(p.read(&mut s), Some('*'));
        assert_eq!(p.read(&mut s), Some('b'));
        assert_eq!(p.read(&mut s), None);
        assert_eq!(s.remaining(), "*/");
    }

    #[test]
    fn negation() {
        let p = NotParser::new(symbol('"'));
        let mut s = StrParserStream::new("a\"");
        assert_eq!(p.read(&mut s), Some(Some('a')));
        assert_eq!(p.read(&mut s), None);
        assert_eq!(s.remaining(), "\"");
        let mut s = StrParserStream::new("");
        assert_eq!(p.read(&mut s), Some(None));
    }
}
