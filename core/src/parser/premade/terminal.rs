use crate::{Parser, ParserStream, kind::Void};


/// Always matches, consuming nothing.
#[derive(Copy, Clone, Default, Debug)]
pub struct SucceedParser;

/// Make a [`SucceedParser`](struct.SucceedParser.html).
#[inline]
pub fn succeed() -> SucceedParser {
    SucceedParser
}

impl Parser for SucceedParser {
    type Result = ();
    type Kind = Void;

    #[inline]
    fn read<S>(&self, _source: &mut S) -> Option<()>
        where S: ParserStream + ?Sized,
    {
        Some(())
    }
}


/// Never matches.
#[derive(Copy, Clone, Default, Debug)]
pub struct FailParser;

/// Make a [`FailParser`](struct.FailParser.html).
#[inline]
pub fn fail() -> FailParser {
    FailParser
}

impl Parser for FailParser {
    type Result = ();
    type Kind = Void;

    #[inline]
    fn read<S>(&self, _source: &mut S) -> Option<()>
        where S: ParserStream + ?Sized,
    {
        None
    }
}


/// Matches only where there are no more characters, consuming nothing.  Put it
/// last in a sequence to require that a whole input is matched.
#[derive(Copy, Clone, Default, Debug)]
pub struct EndOfInputParser;

/// Make an [`EndOfInputParser`](struct.EndOfInputParser.html).
#[inline]
pub fn end_of_input() -> EndOfInputParser {
    EndOfInputParser
}

impl Parser for EndOfInputParser {
    type Result = ();
    type Kind = Void;

    fn read<S>(&self, source: &mut S) -> Option<()>
        where S: ParserStream + ?Sized,
    {
        if source.read() {
            source.undo();
            None
        } else {
            Some(())
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::StrParserStream;

    #[test]
    fn terminals() {
        let mut s = StrParserStream::new("z");
        assert!(succeed().skip(&mut s));
        assert!(!fail().skip(&mut s));
        assert!(!end_of_input().skip(&mut s));
        assert_eq!(s.remaining(), "z");
        assert!(s.read());
        assert!(end_of_input().skip(&mut s));
        assert!(end_of_input().skip(&mut s));
    }
}
