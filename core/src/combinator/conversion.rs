use core::{fmt, marker::PhantomData};

use crate::{Parser, ParserStream, SubParserStream, ResultKind, kind::{Value, Void}, skip_space};


/// Matches its parser and converts the value with a function.  A void parser
/// gives the function `()`.
#[derive(Copy, Clone)]
pub struct ConversionParser<P, F> {
    parser: P,
    convert: F,
}

impl<P, F> ConversionParser<P, F> {
    /// Make a new one.
    #[inline]
    pub fn new(parser: P, convert: F) -> Self {
        Self { parser, convert }
    }
}

impl<P, F, U> Parser for ConversionParser<P, F>
    where P: Parser,
          F: Fn(P::Result) -> U,
{
    type Result = U;
    type Kind = Value;

    #[inline]
    fn read<S>(&self, source: &mut S) -> Option<U>
        where S: ParserStream + ?Sized,
    {
        self.parser.read(source).map(&self.convert)
    }

    #[inline]
    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        self.parser.skip(source)
    }
}

impl<P, F> fmt::Debug for ConversionParser<P, F>
    where P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionParser").field("parser", &self.parser).finish()
    }
}


/// Matches its parser and converts the value with a function that may reject
/// it.  A rejected value fails the match, and what the parser consumed is
/// restored.
#[derive(Copy, Clone)]
pub struct TryConversionParser<P, F> {
    parser: P,
    convert: F,
}

impl<P, F> TryConversionParser<P, F> {
    /// Make a new one.
    #[inline]
    pub fn new(parser: P, convert: F) -> Self {
        Self { parser, convert }
    }
}

impl<P, F, U> Parser for TryConversionParser<P, F>
    where P: Parser,
          F: Fn(P::Result) -> Option<U>,
{
    type Result = U;
    type Kind = Value;

    fn read<S>(&self, source: &mut S) -> Option<U>
        where S: ParserStream + ?Sized,
    {
        let mut context = SubParserStream::new(source);
        let value = (self.convert)(self.parser.read(&mut context)?)?;
        context.accept();
        Some(value)
    }
}

impl<P, F> fmt::Debug for TryConversionParser<P, F>
    where P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryConversionParser").field("parser", &self.parser).finish()
    }
}


/// Matches its parser and produces a clone of a fixed value.
#[derive(Copy, Clone, Debug)]
pub struct ConstantParser<P, T> {
    parser: P,
    value: T,
}

impl<P, T> ConstantParser<P, T> {
    /// Make a new one.
    #[inline]
    pub fn new(parser: P, value: T) -> Self {
        Self { parser, value }
    }
}

impl<P, T> Parser for ConstantParser<P, T>
    where P: Parser,
          T: Clone,
{
    type Result = T;
    type Kind = Value;

    #[inline]
    fn read<S>(&self, source: &mut S) -> Option<T>
        where S: ParserStream + ?Sized,
    {
        if self.parser.skip(source) { Some(self.value.clone()) } else { None }
    }

    #[inline]
    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        self.parser.skip(source)
    }
}


/// Matches its parser and gives the value to a function, producing nothing.
#[derive(Copy, Clone)]
pub struct ActionParser<P, F> {
    parser: P,
    action: F,
}

impl<P, F> ActionParser<P, F> {
    /// Make a new one.
    #[inline]
    pub fn new(parser: P, action: F) -> Self {
        Self { parser, action }
    }
}

impl<P, F> Parser for ActionParser<P, F>
    where P: Parser,
          F: Fn(P::Result),
{
    type Result = ();
    type Kind = Void;

    #[inline]
    fn read<S>(&self, source: &mut S) -> Option<()>
        where S: ParserStream + ?Sized,
    {
        self.parser.read(source).map(&self.action)
    }
}

impl<P, F> fmt::Debug for ActionParser<P, F>
    where P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionParser").field("parser", &self.parser).finish()
    }
}


/// Matches its parser but produces nothing, e.g. to skip over a mandatory
/// token that carries no information.
#[derive(Copy, Clone, Debug)]
pub struct DiscardParser<P> {
    parser: P,
}

impl<P> DiscardParser<P> {
    /// Make a new one.
    #[inline]
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P> Parser for DiscardParser<P>
    where P: Parser,
{
    type Result = ();
    type Kind = Void;

    #[inline]
    fn read<S>(&self, source: &mut S) -> Option<()>
        where S: ParserStream + ?Sized,
    {
        if self.parser.skip(source) { Some(()) } else { None }
    }

    #[inline]
    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        self.parser.skip(source)
    }
}


/// Matches its parser with optional whitespace before and after it.  The value
/// is that of the parser.
#[derive(Copy, Clone, Debug)]
pub struct TokenParser<P> {
    parser: P,
}

impl<P> TokenParser<P> {
    /// Make a new one.
    #[inline]
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P> Parser for TokenParser<P>
    where P: Parser,
{
    type Result = P::Result;
    type Kind = P::Kind;

    fn read<S>(&self, source: &mut S) -> Option<P::Result>
        where S: ParserStream + ?Sized,
    {
        let space = skip_space();
        let mut context = SubParserStream::new(source);
        space.consume(&mut context);
        let value = self.parser.read(&mut context)?;
        space.consume(&mut context);
        context.accept();
        Some(value)
    }

    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        let space = skip_space();
        let mut context = SubParserStream::new(source);
        space.consume(&mut context);
        if self.parser.skip(&mut context) {
            space.consume(&mut context);
            context.accept();
            true
        } else {
            false
        }
    }
}


/// Matches its parser and produces its value, but is unified as kind `K` in
/// combinators.  E.g. a conversion that produces `char` is otherwise a
/// [`Value`](../kind/struct.Value.html), so repeating it gives a `Vec<char>`
/// rather than a `String`.
pub struct KindParser<P, K> {
    parser: P,
    kind: PhantomData<fn() -> K>,
}

impl<P, K> KindParser<P, K> {
    /// Make a new one.
    #[inline]
    pub fn new(parser: P) -> Self {
        Self { parser, kind: PhantomData }
    }
}

impl<P, K> Clone for KindParser<P, K>
    where P: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.parser.clone())
    }
}

impl<P, K> Copy for KindParser<P, K>
    where P: Copy,
{}

impl<P, K> fmt::Debug for KindParser<P, K>
    where P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindParser").field("parser", &self.parser).finish()
    }
}

impl<P, K> Parser for KindParser<P, K>
    where P: Parser,
          K: ResultKind,
{
    type Result = P::Result;
    type Kind = K;

    #[inline]
    fn read<S>(&self, source: &mut S) -> Option<P::Result>
        where S: ParserStream + ?Sized,
    {
        self.parser.read(source)
    }

    #[inline]
    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        self.parser.skip(source)
    }
}
