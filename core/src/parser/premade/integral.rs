use core::marker::PhantomData;

use crate::{Parser, ParserStream, SubParserStream, kind::Value};


/// The primitive integer types that [`IntegralParser`](struct.IntegralParser.html)
/// can produce.
pub trait Integral: Copy {
    /// Zero.
    const ZERO: Self;

    /// `self * 10 + digit`, or `self * 10 - digit` when accumulating a negative
    /// number, or `None` on overflow.
    fn shift_digit(self, digit: u32, negative: bool) -> Option<Self>;
}

macro_rules! integral {
    ($($t:ty)+) => { $(
        impl Integral for $t {
            const ZERO: Self = 0;

            #[allow(trivial_numeric_casts, clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap, clippy::cast_lossless)]
            #[inline]
            fn shift_digit(self, digit: u32, negative: bool) -> Option<Self> {
                let shifted = self.checked_mul(10)?;
                if negative {
                    shifted.checked_sub(digit as $t)
                } else {
                    shifted.checked_add(digit as $t)
                }
            }
        }
    )+ };
}

integral!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);


/// Matches an optional `-` followed by one or more decimal digits, and produces
/// their value as `I`.  A value that does not fit in `I` fails the match.
#[derive(Debug)]
pub struct IntegralParser<I> {
    integral: PhantomData<fn() -> I>,
}

impl<I> Clone for IntegralParser<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for IntegralParser<I> {}

impl<I> Default for IntegralParser<I> {
    fn default() -> Self {
        Self { integral: PhantomData }
    }
}

/// Make an [`IntegralParser`](struct.IntegralParser.html) of `I`.
#[inline]
pub fn integral<I>() -> IntegralParser<I>
    where I: Integral,
{
    IntegralParser::default()
}

impl<I> Parser for IntegralParser<I>
    where I: Integral,
{
    type Result = I;
    type Kind = Value;

    fn read<S>(&self, source: &mut S) -> Option<I>
        where S: ParserStream + ?Sized,
    {
        let mut context = SubParserStream::new(source);
        let negative = context.next_char()? == '-';
        if !negative {
            context.undo();
        }
        let mut value = I::ZERO;
        let mut count = 0_usize;
        while context.read() {
            match context.peek().to_digit(10) {
                Some(digit) => {
                    value = value.shift_digit(digit, negative)?;
                    count += 1;
                }
                None => {
                    context.undo();
                    break;
                }
            }
        }
        if count == 0 {
            return None;
        }
        context.accept();
        Some(value)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::StrParserStream;

    fn parse<I: Integral>(input: &str) -> (Option<I>, &str) {
        let mut s = StrParserStream::new(input);
        let r = integral::<I>().read(&mut s);
        (r, s.remaining())
    }

    #[test]
    fn values() {
        assert_eq!(parse::<i32>("-123"), (Some(-123), ""));
        assert_eq!(parse::<i32>("0"), (Some(0), ""));
        assert_eq!(parse::<i32>("42abc"), (Some(42), "abc"));
        assert_eq!(parse::<u8>("255"), (Some(255), ""));
        assert_eq!(parse::<i8>("-128"), (Some(-128), ""));
        assert_eq!(parse::<u32>("-0"), (Some(0), ""));
        assert_eq!(parse::<i64>("007"), (Some(7), ""));
    }

    #[test]
    fn failures() {
        assert_eq!(parse::<i32>("-a123"), (None, "-a123"));
        assert_eq!(parse::<i32>("-"), (None, "-"));
        assert_eq!(parse::<i32>(""), (None, ""));
        assert_eq!(parse::<i32>("+1"), (None, "+1"));
        assert_eq!(parse::<i32>("x"), (None, "x"));
    }

    #[test]
    fn overflow() {
        assert_eq!(parse::<u8>("256"), (None, "256"));
        assert_eq!(parse::<i8>("128"), (None, "128"));
        assert_eq!(parse::<i8>("-129"), (None, "-129"));
        assert_eq!(parse::<u16>("-1"), (None, "-1"));
        assert_eq!(parse::<i32>("99999999999"), (None, "99999999999"));
    }
}
