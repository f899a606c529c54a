use core::marker::PhantomData;

use crate::{
    Parser, ParserStream, SubParserStream, kind::Value,
    rational::{Rational, RationalIntegral},
};

use super::decimal::scan;


/// Matches the same literals as [`DecimalParser`](struct.DecimalParser.html)
/// but produces the exact [`Rational`](struct.Rational.html) they denote, e.g.
/// `0.5` is `1/2`.  A value that does not fit in `I` fails the match.
#[derive(Debug)]
pub struct RationalParser<I> {
    integral: PhantomData<fn() -> I>,
}

impl<I> Clone for RationalParser<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for RationalParser<I> {}

impl<I> Default for RationalParser<I> {
    fn default() -> Self {
        Self { integral: PhantomData }
    }
}

/// Make a [`RationalParser`](struct.RationalParser.html) of `I`.
#[inline]
pub fn rational<I>() -> RationalParser<I>
    where I: RationalIntegral,
{
    RationalParser::default()
}

/// The value of a run of decimal digits, negated if `negative`.
fn accumulate<I>(digits: &str, negative: bool) -> Option<I>
    where I: RationalIntegral,
{
    digits.chars()
          .filter_map(|c| c.to_digit(10))
          .try_fold(I::ZERO, |value, digit| value.shift_digit(digit, negative))
}

/// Ten to the power of `count`.
fn scale<I>(count: usize) -> Option<I>
    where I: RationalIntegral,
{
    (0 .. count).try_fold(I::ONE, |scale, _| scale.mul(I::TEN))
}

impl<I> Parser for RationalParser<I>
    where I: RationalIntegral,
{
    type Result = Rational<I>;
    type Kind = Value;

    fn read<S>(&self, source: &mut S) -> Option<Rational<I>>
        where S: ParserStream + ?Sized,
    {
        let mut context = SubParserStream::new(source);
        let text = scan(&mut context)?;
        let integer = accumulate::<I>(&text.integer, text.negative)?;
        let fraction = accumulate::<I>(&text.fraction, text.negative)?;
        let denom = scale::<I>(text.fraction.len())?;
        let numer = integer.mul(denom)?.add(fraction)?;
        let value = Rational::new(numer, denom)?;
        context.accept();
        Some(value)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::StrParserStream;

    fn parse(input: &str) -> (Option<(i32, i32)>, &str) {
        let mut s = StrParserStream::new(input);
        let r = rational::<i32>().read(&mut s).map(|r| (r.numer(), r.denom()));
        (r, s.remaining())
    }

    #[test]
    fn reduction() {
        assert_eq!(parse("0.5"), (Some((1, 2)), ""));
        assert_eq!(parse("-0.5"), (Some((-1, 2)), ""));
        assert_eq!(parse("1.25;"), (Some((5, 4)), ";"));
        assert_eq!(parse("3"), (Some((3, 1)), ""));
        assert_eq!(parse("-4.000"), (Some((-4, 1)), ""));
        assert_eq!(parse("0.0"), (Some((0, 1)), ""));
    }

    #[test]
    fn widest_integers() {
        assert_eq!(parse("1000000000"), (Some((1_000_000_000, 1)), ""));
        assert_eq!(parse("-2147483648"), (Some((i32::MIN, 1)), ""));
        assert_eq!(parse("2147483648"), (None, "2147483648"));
        let mut s = StrParserStream::new("1000000000000000000");
        let r = rational::<i64>().read(&mut s).map(|r| (r.numer(), r.denom()));
        assert_eq!(r, Some((1_000_000_000_000_000_000, 1)));
    }

    #[test]
    fn failures() {
        assert_eq!(parse("-"), (None, "-"));
        assert_eq!(parse("1.x"), (None, "1.x"));
        assert_eq!(parse("x"), (None, "x"));
        assert_eq!(parse("0.0000000001"), (None, "0.0000000001"));
    }
}
