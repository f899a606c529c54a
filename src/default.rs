//! The parsers that are used for types by default, so that values can be
//! parsed knowing only their type.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::{
    AnyParser, BoolParser, DecimalParser, IntegralParser, Parser, Rational,
    RationalIntegral, RationalParser, Result, StringParser,
    combinator::{ListParser, OrParser},
    common::inmem::parse_from,
    datetime::{DateParser, DateTimeParser, TimeDurationParser, UnitDurationParser},
    json::{JsonParser, JsonValue},
};


/// A type that has a parser of its values that is used by default.
pub trait DefaultParser: Sized {
    /// The type of the parser.
    type Parser: Parser<Result = Self>;

    /// Make the parser.
    fn default_parser() -> Self::Parser;
}

/// Parse the start of `input` with the default parser of `T`.
///
/// ```
/// use weft::{parse, Rational};
///
/// assert_eq!(parse::<u8>("42").unwrap(), 42);
/// assert_eq!(parse::<Vec<bool>>("true, false").unwrap(), [true, false]);
/// assert_eq!(parse::<Rational<i64>>("0.75").unwrap().to_string(), "3/4");
/// ```
pub fn parse<T>(input: &str) -> Result<T>
    where T: DefaultParser,
{
    parse_from(&T::default_parser(), input)
}


macro_rules! default_parsers {
    ($($t:ty => $parser:ty;)+) => { $(
        impl DefaultParser for $t {
            type Parser = $parser;

            #[inline]
            fn default_parser() -> $parser {
                <$parser>::default()
            }
        }
    )+ };
}

default_parsers! {
    i8 => IntegralParser<i8>;
    i16 => IntegralParser<i16>;
    i32 => IntegralParser<i32>;
    i64 => IntegralParser<i64>;
    i128 => IntegralParser<i128>;
    isize => IntegralParser<isize>;
    u8 => IntegralParser<u8>;
    u16 => IntegralParser<u16>;
    u32 => IntegralParser<u32>;
    u64 => IntegralParser<u64>;
    u128 => IntegralParser<u128>;
    usize => IntegralParser<usize>;
    f32 => DecimalParser<f32>;
    f64 => DecimalParser<f64>;
    bool => BoolParser;
    char => AnyParser;
    String => StringParser;
    NaiveDate => DateParser;
    NaiveDateTime => DateTimeParser;
    JsonValue => JsonParser;
}

impl<I> DefaultParser for Rational<I>
    where I: RationalIntegral,
{
    type Parser = RationalParser<I>;

    #[inline]
    fn default_parser() -> RationalParser<I> {
        RationalParser::default()
    }
}

/// The clock form first, then the unit form.
impl DefaultParser for TimeDelta {
    type Parser = OrParser<TimeDurationParser, UnitDurationParser>;

    #[inline]
    fn default_parser() -> Self::Parser {
        OrParser::new(TimeDurationParser, UnitDurationParser)
    }
}

/// A list delimited by `,`.
impl<T> DefaultParser for Vec<T>
    where T: DefaultParser,
          ListParser<T::Parser>: Parser<Result = Vec<T>>,
{
    type Parser = ListParser<T::Parser>;

    #[inline]
    fn default_parser() -> Self::Parser {
        ListParser::new(T::default_parser(), ',')
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn primitives() {
        assert_eq!(parse::<i64>("-9").unwrap(), -9);
        assert_eq!(parse::<f32>("0.5").unwrap(), 0.5);
        assert_eq!(parse::<char>("λx").unwrap(), 'λ');
        assert_eq!(parse::<String>("\"a b\"").unwrap(), "a b");
        assert!(matches!(parse::<u8>("256"), Err(Error::InvalidValue)));
        assert!(matches!(parse::<bool>("yes"), Err(Error::InvalidValue)));
    }

    #[test]
    fn calendar() {
        assert_eq!(parse::<NaiveDate>("1999-12-31").unwrap(),
                   NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
        assert_eq!(parse::<TimeDelta>("0:01:00").unwrap(), TimeDelta::minutes(1));
        assert_eq!(parse::<TimeDelta>("90 s").unwrap(), TimeDelta::seconds(90));
        assert!(parse::<NaiveDateTime>("1999-12-31 23:59:59").is_ok());
    }

    #[test]
    fn lists() {
        assert_eq!(parse::<Vec<u32>>("1 ,2, 3").unwrap(), [1, 2, 3]);
        assert_eq!(parse::<Vec<u32>>("").unwrap(), Vec::<u32>::new());
        assert_eq!(parse::<Vec<String>>(r#""a","b""#).unwrap(), ["a", "b"]);
    }

    #[test]
    fn json() {
        let value = parse::<JsonValue>("[1, {\"k\": null}]").unwrap();
        assert_eq!(value.to_string(), "[1,{\"k\":null}]");
    }
}
