use alloc::vec::Vec;

use crate::{Parser, ParserStream, SubParserStream, kind::{Repeat, Value}, skip_space};


type Accumulation<P> = <<P as Parser>::Kind as Repeat<<P as Parser>::Result>>::Output;

#[inline]
fn push<P>(accumulator: &mut Accumulation<P>, value: P::Result)
    where P: Parser,
          P::Kind: Repeat<P::Result>,
{
    <P::Kind as Repeat<P::Result>>::push(accumulator, value);
}

/// Read `parser` repeatedly, each time in its own checkpoint, until it fails.
/// A match that consumes nothing ends the repetition after it is given to
/// `each`, because it would match forever.  Returns how many matched.
fn repeat<P, S, F>(parser: &P, source: &mut S, mut each: F) -> usize
    where P: Parser,
          S: ParserStream + ?Sized,
          F: FnMut(P::Result),
{
    let mut count = 0;
    loop {
        let mut context = SubParserStream::new(&mut *source);
        match parser.read(&mut context) {
            Some(value) => {
                let consumed = context.pending() != 0;
                context.accept();
                each(value);
                count += 1;
                if !consumed {
                    break count;
                }
            }
            None => break count,
        }
    }
}

/// Read `parser`, and then repeatedly a `delimiter` with optional whitespace
/// around it followed by another `parser`.  Each delimited step happens in its
/// own checkpoint, so a step that fails partway is not consumed.
fn delimited<P, S, F>(parser: &P, delimiter: char, source: &mut S, mut each: F)
    where P: Parser,
          S: ParserStream + ?Sized,
          F: FnMut(P::Result),
{
    {
        let mut context = SubParserStream::new(&mut *source);
        match parser.read(&mut context) {
            Some(value) => {
                context.accept();
                each(value);
            }
            None => return,
        }
    }
    let space = skip_space();
    loop {
        let mut context = SubParserStream::new(&mut *source);
        space.consume(&mut context);
        if context.next_char() != Some(delimiter) {
            break;
        }
        space.consume(&mut context);
        match parser.read(&mut context) {
            Some(value) => {
                context.accept();
                each(value);
            }
            None => break,
        }
    }
}


/// Matches its parser zero or more times.  Always succeeds.  The results are
/// accumulated per [`Repeat`](../kind/trait.Repeat.html).
#[derive(Copy, Clone, Debug)]
pub struct StarParser<P> {
    parser: P,
}

impl<P> StarParser<P> {
    /// Make a new one.
    #[inline]
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P> Parser for StarParser<P>
    where P: Parser,
          P::Kind: Repeat<P::Result>,
{
    type Result = Accumulation<P>;
    type Kind = <P::Kind as Repeat<P::Result>>::Kind;

    fn read<S>(&self, source: &mut S) -> Option<Self::Result>
        where S: ParserStream + ?Sized,
    {
        let mut accumulator: Accumulation<P> = Default::default();
        let _count = repeat(&self.parser, source, |value| push::<P>(&mut accumulator, value));
        Some(accumulator)
    }

    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        loop {
            let mut context = SubParserStream::new(&mut *source);
            if !self.parser.skip(&mut context) {
                break true;
            }
            let consumed = context.pending() != 0;
            context.accept();
            if !consumed {
                break true;
            }
        }
    }
}


/// Matches its parser one or more times.
#[derive(Copy, Clone, Debug)]
pub struct PlusParser<P> {
    parser: P,
}

impl<P> PlusParser<P> {
    /// Make a new one.
    #[inline]
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P> Parser for PlusParser<P>
    where P: Parser,
          P::Kind: Repeat<P::Result>,
{
    type Result = Accumulation<P>;
    type Kind = <P::Kind as Repeat<P::Result>>::Kind;

    fn read<S>(&self, source: &mut S) -> Option<Self::Result>
        where S: ParserStream + ?Sized,
    {
        let mut accumulator: Accumulation<P> = Default::default();
        let count = repeat(&self.parser, source, |value| push::<P>(&mut accumulator, value));
        if count == 0 { None } else { Some(accumulator) }
    }
}


/// Matches zero or more of its parser separated by a delimiter character, with
/// optional whitespace around each delimiter.  Always succeeds, and a trailing
/// delimiter is left unconsumed.
#[derive(Copy, Clone, Debug)]
pub struct ListParser<P> {
    parser: P,
    delimiter: char,
}

impl<P> ListParser<P> {
    /// Make a new one.
    #[inline]
    pub fn new(parser: P, delimiter: char) -> Self {
        Self { parser, delimiter }
    }
}

impl<P> Parser for ListParser<P>
    where P: Parser,
          P::Kind: Repeat<P::Result>,
{
    type Result = Accumulation<P>;
    type Kind = <P::Kind as Repeat<P::Result>>::Kind;

    fn read<S>(&self, source: &mut S) -> Option<Self::Result>
        where S: ParserStream + ?Sized,
    {
        let mut accumulator: Accumulation<P> = Default::default();
        delimited(&self.parser, self.delimiter, source,
                  |value| push::<P>(&mut accumulator, value));
        Some(accumulator)
    }
}


/// Matches like [`ListParser`](struct.ListParser.html), but each value is
/// folded into an accumulator that starts as a clone of an initial value, e.g.
/// to fill a map directly.  Always succeeds.
#[derive(Copy, Clone, Debug)]
pub struct ForListParser<P, A, F> {
    parser: P,
    initial: A,
    delimiter: char,
    fold: F,
}

impl<P, A, F> ForListParser<P, A, F> {
    /// Make a new one.
    #[inline]
    pub fn new(parser: P, initial: A, delimiter: char, fold: F) -> Self {
        Self { parser, initial, delimiter, fold }
    }
}

impl<P, A, F> Parser for ForListParser<P, A, F>
    where P: Parser,
          A: Clone,
          F: Fn(&mut A, P::Result),
{
    type Result = A;
    type Kind = Value;

    fn read<S>(&self, source: &mut S) -> Option<A>
        where S: ParserStream + ?Sized,
    {
        let mut accumulator = self.initial.clone();
        delimited(&self.parser, self.delimiter, source,
                  |value| (self.fold)(&mut accumulator, value));
        Some(accumulator)
    }
}


/// Matches each of a fixed list of parsers in order, separated by a delimiter
/// character with optional whitespace around it.  Either all of them match or
/// nothing is consumed.
#[derive(Clone, Debug)]
pub struct SequenceParser<P> {
    parsers: Vec<P>,
    delimiter: char,
}

impl<P> SequenceParser<P> {
    /// Make a new one.
    #[inline]
    pub fn new(parsers: Vec<P>, delimiter: char) -> Self {
        Self { parsers, delimiter }
    }
}

impl<P> Parser for SequenceParser<P>
    where P: Parser,
          P::Kind: Repeat<P::Result>,
{
    type Result = Accumulation<P>;
    type Kind = <P::Kind as Repeat<P::Result>>::Kind;

    fn read<S>(&self, source: &mut S) -> Option<Self::Result>
        where S: ParserStream + ?Sized,
    {
        let space = skip_space();
        let mut context = SubParserStream::new(source);
        let mut accumulator: Accumulation<P> = Default::default();
        for (index, parser) in self.parsers.iter().enumerate() {
            if index != 0 {
                space.consume(&mut context);
                if context.next_char() != Some(self.delimiter) {
                    return None;
                }
                space.consume(&mut context);
            }
            push::<P>(&mut accumulator, parser.read(&mut context)?);
        }
        context.accept();
        Some(accumulator)
    }
}
