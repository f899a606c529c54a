use crate::{Parser, ParserStream, kind::Char};


/// Matches any one character, failing only at the end of the input.
#[derive(Copy, Clone, Default, Debug)]
pub struct AnyParser;

/// Make an [`AnyParser`](struct.AnyParser.html).
#[inline]
pub fn any() -> AnyParser {
    AnyParser
}

impl Parser for AnyParser {
    type Result = char;
    type Kind = Char;

    #[inline]
    fn read<S>(&self, source: &mut S) -> Option<char>
        where S: ParserStream + ?Sized,
    {
        source.next_char()
    }
}


/// Read one character and keep it only if `test` accepts it.
#[inline]
fn read_if<S, F>(source: &mut S, test: F) -> Option<char>
    where S: ParserStream + ?Sized,
          F: FnOnce(char) -> bool,
{
    let c = source.next_char()?;
    if test(c) {
        Some(c)
    } else {
        source.undo();
        None
    }
}

macro_rules! char_class {
    ($(#[$doc:meta])* $name:ident, $func:ident, |$c:ident| $test:expr) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Default, Debug)]
        pub struct $name;

        #[doc = concat!("Make a [`", stringify!($name), "`](struct.",
                        stringify!($name), ".html).")]
        #[inline]
        pub fn $func() -> $name {
            $name
        }

        impl Parser for $name {
            type Result = char;
            type Kind = Char;

            #[inline]
            fn read<S>(&self, source: &mut S) -> Option<char>
                where S: ParserStream + ?Sized,
            {
                read_if(source, |$c| $test)
            }
        }
    };
}

char_class!(
    /// Matches one alphabetic character.
    AlphaParser, alpha, |c| c.is_alphabetic());

char_class!(
    /// Matches one decimal digit, `0` through `9`.
    DigitParser, digit, |c| c.is_ascii_digit());

char_class!(
    /// Matches one space or horizontal tab.
    BlankParser, blank, |c| c == ' ' || c == '\t');

char_class!(
    /// Matches one whitespace character, including line breaks.
    SpaceParser, space, |c| c.is_whitespace());


/// Matches one character that the given predicate accepts.
#[derive(Copy, Clone, Debug)]
pub struct SatisfyParser<F> {
    test: F,
}

/// Make a [`SatisfyParser`](struct.SatisfyParser.html) from `test`.
#[inline]
pub fn satisfy<F>(test: F) -> SatisfyParser<F>
    where F: Fn(char) -> bool,
{
    SatisfyParser { test }
}

impl<F> Parser for SatisfyParser<F>
    where F: Fn(char) -> bool,
{
    type Result = char;
    type Kind = Char;

    #[inline]
    fn read<S>(&self, source: &mut S) -> Option<char>
        where S: ParserStream + ?Sized,
    {
        read_if(source, &self.test)
    }
}
