//! Parsers made from other parsers.
//!
//! These are usually made with the provided methods of
//! [`Parser`](../trait.Parser.html) or with the operators `>>`, `|`, `^`, `-`
//! and `!`, but they are also available as functions here.

mod concatenate;
pub use concatenate::ConcatenateParser;

mod alternation;
pub use alternation::{OrParser, UnionParser};

mod difference;
pub use difference::{DifferenceParser, NotParser};

mod repetition;
pub use repetition::{StarParser, PlusParser, ListParser, ForListParser, SequenceParser};

mod conversion;
pub use conversion::{ConversionParser, TryConversionParser, ConstantParser, KindParser,
                     ActionParser, DiscardParser, TokenParser};

use alloc::vec::Vec;

use crate::Parser;


/// Make a parser that matches where `parser` does not, consuming one character
/// (or none at the end of the input).  Same as `!parser`.
#[inline]
pub fn not<P>(parser: P) -> NotParser<P>
    where P: Parser,
{
    NotParser::new(parser)
}

/// Make a parser that matches `parser` zero or more times.
#[inline]
pub fn star<P>(parser: P) -> StarParser<P>
    where P: Parser,
{
    StarParser::new(parser)
}

/// Make a parser that matches `parser` one or more times.
#[inline]
pub fn plus<P>(parser: P) -> PlusParser<P>
    where P: Parser,
{
    PlusParser::new(parser)
}

/// Make a parser that matches zero or more of `parser` separated by
/// `delimiter`.
#[inline]
pub fn list<P>(parser: P, delimiter: char) -> ListParser<P>
    where P: Parser,
{
    ListParser::new(parser, delimiter)
}

/// Make a parser that matches like [`list`](fn.list.html) but folds each value
/// into a clone of `initial` with `fold`.
#[inline]
pub fn for_list<P, A, F>(parser: P, initial: A, delimiter: char, fold: F) -> ForListParser<P, A, F>
    where P: Parser,
          A: Clone,
          F: Fn(&mut A, P::Result),
{
    ForListParser::new(parser, initial, delimiter, fold)
}

/// Make a parser that matches each of `parsers`, in order, separated by
/// `delimiter`.
#[inline]
pub fn sequence<P>(parsers: Vec<P>, delimiter: char) -> SequenceParser<P>
    where P: Parser,
{
    SequenceParser::new(parsers, delimiter)
}

/// Make a parser that matches `parser` but produces nothing.
#[inline]
pub fn discard<P>(parser: P) -> DiscardParser<P>
    where P: Parser,
{
    DiscardParser::new(parser)
}

/// Make a parser that matches `parser` and converts its value with `f`.
#[inline]
pub fn convert<P, F, U>(parser: P, f: F) -> ConversionParser<P, F>
    where P: Parser,
          F: Fn(P::Result) -> U,
{
    ConversionParser::new(parser, f)
}

/// Make a parser that matches `parser` with optional whitespace around it.
#[inline]
pub fn token<P>(parser: P) -> TokenParser<P>
    where P: Parser,
{
    TokenParser::new(parser)
}


/// Make a parser of a sequence of parsers where whitespace is skipped before,
/// between and after them.  The arguments can be anything that is an
/// [`IntoParser`](trait.IntoParser.html), e.g. `char` and `&'static str`
/// literals.  With no arguments, it only skips whitespace.
///
/// ```
/// use weft_core::{tokenize, integral, Parser, StrParserStream};
///
/// let pair = tokenize!('(', integral::<i32>(), ',', integral::<i32>(), ')');
/// let mut stream = StrParserStream::new(" ( 1 ,2 ) ");
/// assert_eq!(pair.read(&mut stream), Some((1, 2)));
/// ```
#[macro_export]
macro_rules! tokenize {
    () => {
        $crate::skip_space()
    };
    ($($parser:expr),+ $(,)?) => {{
        let parser = $crate::skip_space();
        $(
            let parser = $crate::Parser::then(
                $crate::Parser::then(parser, $parser),
                $crate::skip_space());
        )+
        parser
    }};
}
