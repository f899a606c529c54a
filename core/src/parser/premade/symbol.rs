use alloc::string::String;

use crate::{Parser, ParserStream, SubParserStream, kind::Void};


/// Matches an exact literal string.  Produces nothing, and a partial match is
/// completely undone.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SymbolParser {
    literal: String,
}

impl SymbolParser {
    /// Make a parser of `literal`.
    #[inline]
    pub fn new<T>(literal: T) -> Self
        where T: Into<SymbolText>,
    {
        Self { literal: literal.into().0 }
    }

    /// The literal that is matched.
    #[inline]
    pub fn literal(&self) -> &str {
        &self.literal
    }
}

/// Make a [`SymbolParser`](struct.SymbolParser.html) of `literal`, which can be
/// a `char`, a `&str` or a `String`.
#[inline]
pub fn symbol<T>(literal: T) -> SymbolParser
    where T: Into<SymbolText>,
{
    SymbolParser::new(literal)
}

/// The text of a symbol, made from whatever can be a literal.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SymbolText(String);

impl From<char> for SymbolText {
    #[inline]
    fn from(c: char) -> Self {
        let mut s = String::new();
        s.push(c);
        Self(s)
    }
}

impl From<&str> for SymbolText {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for SymbolText {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Parser for SymbolParser {
    type Result = ();
    type Kind = Void;

    fn read<S>(&self, source: &mut S) -> Option<()>
        where S: ParserStream + ?Sized,
    {
        let mut context = SubParserStream::new(source);
        for expected in self.literal.chars() {
            if context.next_char()? != expected {
                return None;
            }
        }
        context.accept();
        Some(())
    }
}


/// Matches zero or more whitespace characters.  Never fails.
#[derive(Copy, Clone, Default, Debug)]
pub struct SkipSpaceParser;

/// Make a [`SkipSpaceParser`](struct.SkipSpaceParser.html).
#[inline]
pub fn skip_space() -> SkipSpaceParser {
    SkipSpaceParser
}

impl SkipSpaceParser {
    /// Consume the whitespace at the current position of `source`.
    pub fn consume<S>(self, source: &mut S)
        where S: ParserStream + ?Sized,
    {
        while source.read() {
            if !source.peek().is_whitespace() {
                source.undo();
                break;
            }
        }
    }
}

impl Parser for SkipSpaceParser {
    type Result = ();
    type Kind = Void;

    #[inline]
    fn read<S>(&self, source: &mut S) -> Option<()>
        where S: ParserStream + ?Sized,
    {
        self.consume(source);
        Some(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::StrParserStream;

    #[test]
    fn literal() {
        let mut s = StrParserStream::new("hello, help");
        assert_eq!(symbol("hello").read(&mut s), Some(()));
        assert_eq!(symbol(',').read(&mut s), Some(()));
        assert_eq!(symbol(String::from("hello")).read(&mut s), None);
        assert_eq!(s.remaining(), " help");
        assert_eq!(symbol("").read(&mut s), Some(()));
        assert_eq!(symbol(" help me").read(&mut s), None);
        assert_eq!(s.remaining(), " help");
        assert_eq!(symbol('a').literal(), "a");
    }

    #[test]
    fn skipping() {
        let mut s = StrParserStream::new(" \t\n x ");
        assert!(skip_space().skip(&mut s));
        assert_eq!(s.remaining(), "x ");
        assert!(skip_space().skip(&mut s));
        assert_eq!(s.remaining(), "x ");
        assert!(symbol('x').skip(&mut s));
        assert!(skip_space().skip(&mut s));
        assert!(skip_space().skip(&mut s));
        assert_eq!(s.remaining(), "");
    }
}
