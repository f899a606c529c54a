//! The `Parser` trait, and the primitive parsers that grammars are built up
//! from.

use alloc::string::String;

use crate::{
    ParserStream, ResultKind,
    combinator::*,
    boxed::ParserBox,
};


/// Implementations provided for ready use.
pub mod premade
{
    mod any;
    pub use any::{any, alpha, digit, blank, space, satisfy,
                  AnyParser, AlphaParser, DigitParser, BlankParser, SpaceParser,
                  SatisfyParser};

    mod symbol;
    pub use symbol::{symbol, skip_space, SymbolParser, SymbolText, SkipSpaceParser};

    mod terminal;
    pub use terminal::{succeed, fail, end_of_input,
                       SucceedParser, FailParser, EndOfInputParser};

    mod string;
    pub use string::{string, StringParser};

    mod boolean;
    pub use boolean::{boolean, BoolParser};

    mod integral;
    pub use integral::{integral, Integral, IntegralParser};

    mod decimal;
    pub use decimal::{decimal, Decimal, DecimalParser};

    mod rational;
    pub use rational::{rational, RationalParser};

    mod enumerator;
    pub use enumerator::{enumerator, EnumeratorParser};
}

use premade::SymbolParser;


/// Something that tries to match the characters at the current position of a
/// [`ParserStream`](trait.ParserStream.html) and to produce a value from them.
///
/// A parser holds no state of its own across calls, other than how it was
/// constructed, so one value can be used for any number of parses.
///
/// # Backtracking
///
/// When [`read`](#tymethod.read) fails, the stream must be left exactly where
/// it was before the call.  Implementations achieve that by creating a
/// [`SubParserStream`](struct.SubParserStream.html) over the given stream and
/// only accepting it when they succeed.  Everything that composes parsers
/// depends on this, so failing is cheap and ordinary: it is how alternatives and
/// repetitions find out what to do next.
///
/// # Result types
///
/// The `Kind` classifies the `Result` (see the [`kind`](kind/index.html)
/// module) so that the combinators can compute their own `Result` types.  A
/// parser that only matches has `()` as its `Result` and
/// [`Void`](kind/struct.Void.html) as its `Kind`.
pub trait Parser {
    /// The type of value produced by a successful match.
    type Result;

    /// The classification of `Result` used for unification by combinators.
    type Kind: ResultKind;

    /// Try to match at the current position of `source`.  On success, the
    /// matched characters are consumed and the produced value is returned.  On
    /// failure, `None` is returned and `source` is unchanged.
    fn read<S>(&self, source: &mut S) -> Option<Self::Result>
        where S: ParserStream + ?Sized;

    /// Like [`read`](#tymethod.read) but the value is not needed.  Parsers that
    /// can match without building their value override this.
    #[inline]
    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        self.read(source).is_some()
    }

    /// Match `self` and then `next`.  Same as `self >> next`.
    #[inline]
    fn then<P>(self, next: P) -> ConcatenateParser<Self, P::Parser>
        where Self: Sized,
              P: IntoParser,
    {
        ConcatenateParser::new(self, next.into_parser())
    }

    /// Match `self`, or else `other`, where both produce the same type.  Same
    /// as `self | other`.
    #[inline]
    fn or<P>(self, other: P) -> OrParser<Self, P::Parser>
        where Self: Sized,
              P: IntoParser,
    {
        OrParser::new(self, other.into_parser())
    }

    /// Match `self`, or else `other`, where they may produce different types.
    /// Same as `self ^ other`.
    #[inline]
    fn union<P>(self, other: P) -> UnionParser<Self, P::Parser>
        where Self: Sized,
              P: IntoParser,
    {
        UnionParser::new(self, other.into_parser())
    }

    /// Match `self` only where `excluded` does not match.  Same as `self -
    /// excluded`.
    #[inline]
    fn except<P>(self, excluded: P) -> DifferenceParser<Self, P::Parser>
        where Self: Sized,
              P: IntoParser,
    {
        DifferenceParser::new(self, excluded.into_parser())
    }

    /// Match `self` zero or more times.
    #[inline]
    fn star(self) -> StarParser<Self>
        where Self: Sized,
    {
        StarParser::new(self)
    }

    /// Match `self` one or more times.
    #[inline]
    fn plus(self) -> PlusParser<Self>
        where Self: Sized,
    {
        PlusParser::new(self)
    }

    /// Match zero or more of `self` separated by `delimiter`, with optional
    /// whitespace around each delimiter.
    #[inline]
    fn list(self, delimiter: char) -> ListParser<Self>
        where Self: Sized,
    {
        ListParser::new(self, delimiter)
    }

    /// Match `self` but produce nothing.
    #[inline]
    fn discard(self) -> DiscardParser<Self>
        where Self: Sized,
    {
        DiscardParser::new(self)
    }

    /// Match `self` and convert its value with `f`.  For a void parser, `f`
    /// takes `()`.
    #[inline]
    fn map<F, U>(self, f: F) -> ConversionParser<Self, F>
        where Self: Sized,
              F: Fn(Self::Result) -> U,
    {
        ConversionParser::new(self, f)
    }

    /// Match `self` and convert its value with `f`, failing the match when `f`
    /// returns `None`.
    #[inline]
    fn try_map<F, U>(self, f: F) -> TryConversionParser<Self, F>
        where Self: Sized,
              F: Fn(Self::Result) -> Option<U>,
    {
        TryConversionParser::new(self, f)
    }

    /// Match `self` and produce a clone of `value` instead of its own value.
    #[inline]
    fn to<T>(self, value: T) -> ConstantParser<Self, T>
        where Self: Sized,
              T: Clone,
    {
        ConstantParser::new(self, value)
    }

    /// Match `self`, unifying its value as kind `K` in combinators, e.g.
    /// [`Char`](../kind/struct.Char.html) for a conversion that produces `char`
    /// so that repeating it accumulates a `String`.
    #[inline]
    fn with_kind<K>(self) -> KindParser<Self, K>
        where Self: Sized,
              K: ResultKind,
    {
        KindParser::new(self)
    }

    /// Match `self` and give its value to `f`, producing nothing.
    #[inline]
    fn action<F>(self, f: F) -> ActionParser<Self, F>
        where Self: Sized,
              F: Fn(Self::Result),
    {
        ActionParser::new(self, f)
    }

    /// Match `self` with optional whitespace before and after it.
    #[inline]
    fn token(self) -> TokenParser<Self>
        where Self: Sized,
    {
        TokenParser::new(self)
    }

    /// Erase the type of `self`.
    #[inline]
    fn boxed(self) -> ParserBox<Self::Result, Self::Kind>
        where Self: Sized + 'static,
    {
        ParserBox::new(self)
    }
}

impl<P> Parser for &P
    where P: Parser + ?Sized,
{
    type Result = P::Result;
    type Kind = P::Kind;

    #[inline]
    fn read<S>(&self, source: &mut S) -> Option<Self::Result>
        where S: ParserStream + ?Sized,
    {
        (**self).read(source)
    }

    #[inline]
    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        (**self).skip(source)
    }
}


/// Conversion into a parser, so that plain values can stand for the obvious
/// parsers where a parser is expected: a `char` or a string matches itself.
pub trait IntoParser {
    /// The parser converted to.
    type Parser: Parser;

    /// Perform the conversion.
    fn into_parser(self) -> Self::Parser;
}

impl<P> IntoParser for P
    where P: Parser,
{
    type Parser = P;

    #[inline]
    fn into_parser(self) -> P {
        self
    }
}

impl IntoParser for char {
    type Parser = SymbolParser;

    #[inline]
    fn into_parser(self) -> SymbolParser {
        SymbolParser::new(self)
    }
}

impl IntoParser for &'static str {
    type Parser = SymbolParser;

    #[inline]
    fn into_parser(self) -> SymbolParser {
        SymbolParser::new(self)
    }
}

impl IntoParser for String {
    type Parser = SymbolParser;

    #[inline]
    fn into_parser(self) -> SymbolParser {
        SymbolParser::new(self)
    }
}
