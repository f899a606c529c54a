use crate::{Parser, ParserStream, SubParserStream, kind::Join};


/// Matches the left parser and then the right one, all or nothing.  The
/// results are combined per [`Join`](../kind/trait.Join.html): a void operand
/// is dropped, and sequences of sequences make one flat tuple.
#[derive(Copy, Clone, Debug)]
pub struct ConcatenateParser<L, R> {
    left: L,
    right: R,
}

impl<L, R> ConcatenateParser<L, R> {
    /// Make a new one.
    #[inline]
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Parser for ConcatenateParser<L, R>
    where L: Parser,
          R: Parser,
          L::Kind: Join<R::Kind, L::Result, R::Result>,
{
    type Result = <L::Kind as Join<R::Kind, L::Result, R::Result>>::Output;
    type Kind = <L::Kind as Join<R::Kind, L::Result, R::Result>>::Kind;

    fn read<S>(&self, source: &mut S) -> Option<Self::Result>
        where S: ParserStream + ?Sized,
    {
        let mut context = SubParserStream::new(source);
        let left = self.left.read(&mut context)?;
        let right = self.right.read(&mut context)?;
        context.accept();
        Some(<L::Kind as Join<R::Kind, L::Result, R::Result>>::join(left, right))
    }

    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        let mut context = SubParserStream::new(source);
        if self.left.skip(&mut context) && self.right.skip(&mut context) {
            context.accept();
            true
        } else {
            false
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StrParserStream, any, digit, integral, symbol};

    #[test]
    fn flattening() {
        let p = integral::<u8>().then(',').then(integral::<u8>()).then(',').then(any());
        let mut s = StrParserStream::new("1,2,x;");
        assert_eq!(p.read(&mut s), Some((1, 2, 'x')));
        assert_eq!(s.remaining(), ";");

        let nested = digit().then(digit()).then(digit().then(digit()));
        let mut s = StrParserStream::new("1234");
        assert_eq!(nested.read(&mut s), Some(('1', '2', '3', '4')));
    }

    #[test]
    fn all_or_nothing() {
        let p = symbol("ab").then(digit()).then(symbol("cd"));
        let mut s = StrParserStream::new("ab1cx");
        assert_eq!(p.read(&mut s), None);
        assert_eq!(s.remaining(), "ab1cx");
        assert!(!p.skip(&mut s));
        assert_eq!(s.remaining(), "ab1cx");
        let mut s = StrParserStream::new("ab1cd");
        assert!(p.skip(&mut s));
        assert_eq!(s.remaining(), "");
    }

    #[test]
    fn voids() {
        let p = symbol('(').then(symbol(')'));
        let mut s = StrParserStream::new("()");
        assert_eq!(p.read(&mut s), Some(()));
    }
}
