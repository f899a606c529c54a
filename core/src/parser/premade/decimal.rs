use core::{marker::PhantomData, str::FromStr};
use alloc::string::String;

use crate::{Parser, ParserStream, SubParserStream, kind::Value};


/// The digits of a decimal literal, as split up by `scan`.
#[derive(Debug, Default)]
pub(super) struct DecimalText {
    pub(super) negative: bool,
    pub(super) integer: String,
    pub(super) fraction: String,
}

/// Consume an optional `-`, one or more digits, and optionally a `.` followed
/// by one or more digits.  The checkpoint is left unaccepted.
pub(super) fn scan<S>(context: &mut SubParserStream<'_, S>) -> Option<DecimalText>
    where S: ParserStream + ?Sized,
{
    fn digits<S>(context: &mut SubParserStream<'_, S>, into: &mut String)
        where S: ParserStream + ?Sized,
    {
        while context.read() {
            let c = context.peek();
            if c.is_ascii_digit() {
                into.push(c);
            } else {
                context.undo();
                break;
            }
        }
    }

    let negative = context.next_char()? == '-';
    if !negative {
        context.undo();
    }
    let mut text = DecimalText { negative, ..DecimalText::default() };
    digits(context, &mut text.integer);
    if text.integer.is_empty() {
        return None;
    }
    if context.read() {
        if context.peek() == '.' {
            digits(context, &mut text.fraction);
            if text.fraction.is_empty() {
                return None;
            }
        } else {
            context.undo();
        }
    }
    Some(text)
}


/// The floating-point types that [`DecimalParser`](struct.DecimalParser.html)
/// can produce.
pub trait Decimal: FromStr {}

impl Decimal for f32 {}
impl Decimal for f64 {}


/// Matches an optional `-`, decimal digits, and optionally a `.` followed by
/// more digits, and produces the nearest `F`.  At least one digit is required on
/// each side of a `.`.
#[derive(Debug)]
pub struct DecimalParser<F> {
    decimal: PhantomData<fn() -> F>,
}

impl<F> Clone for DecimalParser<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for DecimalParser<F> {}

impl<F> Default for DecimalParser<F> {
    fn default() -> Self {
        Self { decimal: PhantomData }
    }
}

/// Make a [`DecimalParser`](struct.DecimalParser.html) of `F`.
#[inline]
pub fn decimal<F>() -> DecimalParser<F>
    where F: Decimal,
{
    DecimalParser::default()
}

impl<F> Parser for DecimalParser<F>
    where F: Decimal,
{
    type Result = F;
    type Kind = Value;

    fn read<S>(&self, source: &mut S) -> Option<F>
        where S: ParserStream + ?Sized,
    {
        let mut context = SubParserStream::new(source);
        let text = scan(&mut context)?;
        let mut literal = String::with_capacity(text.integer.len() + text.fraction.len() + 2);
        if text.negative {
            literal.push('-');
        }
        literal.push_str(&text.integer);
        if !text.fraction.is_empty() {
            literal.push('.');
            literal.push_str(&text.fraction);
        }
        let value = literal.parse().ok()?;
        context.accept();
        Some(value)
    }

    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        let mut context = SubParserStream::new(source);
        if scan(&mut context).is_some() {
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
    use crate::StrParserStream;

    fn parse(input: &str) -> (Option<f64>, &str) {
        let mut s = StrParserStream::new(input);
        let r = decimal::<f64>().read(&mut s);
        (r, s.remaining())
    }

    #[test]
    fn values() {
        assert_eq!(parse("3.300000"), (Some(3.3), ""));
        assert_eq!(parse("-0.25x"), (Some(-0.25), "x"));
        assert_eq!(parse("12"), (Some(12.0), ""));
        assert_eq!(parse("12,5"), (Some(12.0), ",5"));
        let mut s = StrParserStream::new("1.5");
        assert_eq!(decimal::<f32>().read(&mut s), Some(1.5_f32));
    }

    #[test]
    fn failures() {
        assert_eq!(parse("1.a32"), (None, "1.a32"));
        assert_eq!(parse("-"), (None, "-"));
        assert_eq!(parse("."), (None, "."));
        assert_eq!(parse(".5"), (None, ".5"));
        assert_eq!(parse("-.5"), (None, "-.5"));
        assert_eq!(parse("1."), (None, "1."));
        assert_eq!(parse(""), (None, ""));
    }

    #[test]
    fn skipping() {
        let mut s = StrParserStream::new("-10.01 ");
        assert!(decimal::<f64>().skip(&mut s));
        assert_eq!(s.remaining(), " ");
    }
}
