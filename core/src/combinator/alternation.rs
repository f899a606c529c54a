use crate::{Parser, ParserStream, SubParserStream, kind::{Alternate, Tag}};


/// Matches the left parser, or else the right one, where both produce the
/// same type or one of them is void.  The results are unified per
/// [`Alternate`](../kind/trait.Alternate.html).
#[derive(Copy, Clone, Debug)]
pub struct OrParser<L, R> {
    left: L,
    right: R,
}

impl<L, R> OrParser<L, R> {
    /// Make a new one.
    #[inline]
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Parser for OrParser<L, R>
    where L: Parser,
          R: Parser,
          L::Kind: Alternate<R::Kind, L::Result, R::Result>,
{
    type Result = <L::Kind as Alternate<R::Kind, L::Result, R::Result>>::Output;
    type Kind = <L::Kind as Alternate<R::Kind, L::Result, R::Result>>::Kind;

    fn read<S>(&self, source: &mut S) -> Option<Self::Result>
        where S: ParserStream + ?Sized,
    {
        {
            let mut context = SubParserStream::new(&mut *source);
            if let Some(left) = self.left.read(&mut context) {
                context.accept();
                return Some(<L::Kind as Alternate<R::Kind, L::Result, R::Result>>
                            ::from_left(left));
            }
        }
        self.right.read(source)
            .map(<L::Kind as Alternate<R::Kind, L::Result, R::Result>>::from_right)
    }

    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        {
            let mut context = SubParserStream::new(&mut *source);
            if self.left.skip(&mut context) {
                context.accept();
                return true;
            }
        }
        self.right.skip(source)
    }
}


/// Matches the left parser, or else the right one, where they may produce
/// different types.  The result is one of the `VariantN` enums per
/// [`Tag`](../kind/trait.Tag.html), flattened for chains of these.
#[derive(Copy, Clone, Debug)]
pub struct UnionParser<L, R> {
    left: L,
    right: R,
}

impl<L, R> UnionParser<L, R> {
    /// Make a new one.
    #[inline]
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Parser for UnionParser<L, R>
    where L: Parser,
          R: Parser,
          L::Kind: Tag<R::Kind, L::Result, R::Result>,
{
    type Result = <L::Kind as Tag<R::Kind, L::Result, R::Result>>::Output;
    type Kind = <L::Kind as Tag<R::Kind, L::Result, R::Result>>::Kind;

    fn read<S>(&self, source: &mut S) -> Option<Self::Result>
        where S: ParserStream + ?Sized,
    {
        {
            let mut context = SubParserStream::new(&mut *source);
            if let Some(left) = self.left.read(&mut context) {
                context.accept();
                return Some(<L::Kind as Tag<R::Kind, L::Result, R::Result>>::from_left(left));
            }
        }
        self.right.read(source)
            .map(<L::Kind as Tag<R::Kind, L::Result, R::Result>>::from_right)
    }

    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        {
            let mut context = SubParserStream::new(&mut *source);
            if self.left.skip(&mut context) {
                context.accept();
                return true;
            }
        }
        self.right.skip(source)
    }
}
