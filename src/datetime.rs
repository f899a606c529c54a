//! Parsers of calendar dates, date-times and durations, which produce the
//! types of [`chrono`](https://docs.rs/chrono).  These are compositions of the
//! primitive parsers, and out-of-range fields fail the match.

use std::iter;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::{
    Parser, ParserStream, digit, enumerator, integral, skip_space, succeed, symbol,
    kind::{Tuple, Value},
};


/// `yyyy-mm-dd` as its fields.
fn date_fields() -> impl Parser<Result = (i32, u32, u32), Kind = Tuple> {
    integral::<i32>() >> '-' >> integral::<u32>() >> '-' >> integral::<u32>()
}

/// `hh:mm:ss[.fraction]` as its fields.
fn time_fields() -> impl Parser<Result = (u32, u32, u32, Option<String>), Kind = Tuple> {
    let fraction = (symbol('.') >> digit().plus()).or(succeed());
    integral::<u32>() >> ':' >> integral::<u32>() >> ':' >> integral::<u32>() >> fraction
}

/// The nanoseconds of the digits after a decimal point.  Digits beyond
/// nanoseconds are ignored.
fn nanoseconds(fraction: Option<&str>) -> u32 {
    fraction.unwrap_or("").chars()
            .chain(iter::repeat('0'))
            .take(9)
            .filter_map(|c| c.to_digit(10))
            .fold(0, |nanos, digit| nanos * 10 + digit)
}


/// Matches `yyyy-mm-dd`.
#[derive(Copy, Clone, Default, Debug)]
pub struct DateParser;

/// Make a [`DateParser`](struct.DateParser.html).
#[inline]
pub fn date() -> DateParser {
    DateParser
}

impl Parser for DateParser {
    type Result = NaiveDate;
    type Kind = Value;

    fn read<S>(&self, source: &mut S) -> Option<NaiveDate>
        where S: ParserStream + ?Sized,
    {
        date_fields()
            .try_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day))
            .read(source)
    }
}


/// Matches `yyyy-mm-dd hh:mm:ss[.fraction]`, where the separator can also be
/// `T`.
#[derive(Copy, Clone, Default, Debug)]
pub struct DateTimeParser;

/// Make a [`DateTimeParser`](struct.DateTimeParser.html).
#[inline]
pub fn date_time() -> DateTimeParser {
    DateTimeParser
}

impl Parser for DateTimeParser {
    type Result = NaiveDateTime;
    type Kind = Value;

    fn read<S>(&self, source: &mut S) -> Option<NaiveDateTime>
        where S: ParserStream + ?Sized,
    {
        date_fields()
            .then(symbol('T') | ' ')
            .then(time_fields())
            .try_map(|(year, month, day, hour, minute, second, fraction)| {
                let date = NaiveDate::from_ymd_opt(year, month, day)?;
                let nanos = nanoseconds(fraction.as_deref());
                let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)?;
                Some(NaiveDateTime::new(date, time))
            })
            .read(source)
    }
}


/// Matches `[-]h:mm:ss[.fraction]`, where the hours are not limited.
#[derive(Copy, Clone, Default, Debug)]
pub struct TimeDurationParser;

/// Make a [`TimeDurationParser`](struct.TimeDurationParser.html).
#[inline]
pub fn time_duration() -> TimeDurationParser {
    TimeDurationParser
}

impl Parser for TimeDurationParser {
    type Result = TimeDelta;
    type Kind = Value;

    fn read<S>(&self, source: &mut S) -> Option<TimeDelta>
        where S: ParserStream + ?Sized,
    {
        let sign = symbol('-').to(true) | succeed().to(false);
        sign.then(time_fields())
            .try_map(|(negative, hours, minutes, seconds, fraction)| {
                if minutes >= 60 || seconds >= 60 {
                    return None;
                }
                let whole = i64::from(hours) * 3600 + i64::from(minutes) * 60 + i64::from(seconds);
                let nanos = i64::from(nanoseconds(fraction.as_deref()));
                let delta = TimeDelta::try_seconds(whole)?
                    .checked_add(&TimeDelta::nanoseconds(nanos))?;
                Some(if negative { -delta } else { delta })
            })
            .read(source)
    }
}


#[derive(Copy, Clone, Debug)]
enum Unit {
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
}

impl Unit {
    fn of(self, amount: i64) -> Option<TimeDelta> {
        match self {
            Unit::Hours => TimeDelta::try_hours(amount),
            Unit::Minutes => TimeDelta::try_minutes(amount),
            Unit::Seconds => TimeDelta::try_seconds(amount),
            Unit::Milliseconds => TimeDelta::try_milliseconds(amount),
            Unit::Microseconds => Some(TimeDelta::microseconds(amount)),
        }
    }
}


/// Matches `<integer> <unit>`, with the units `h`, `m`, `s`, `ms` and `us`, or
/// one of `infinity`, `+infinity` and `-infinity`, which are the extreme
/// durations.
#[derive(Copy, Clone, Default, Debug)]
pub struct UnitDurationParser;

/// Make a [`UnitDurationParser`](struct.UnitDurationParser.html).
#[inline]
pub fn unit_duration() -> UnitDurationParser {
    UnitDurationParser
}

impl Parser for UnitDurationParser {
    type Result = TimeDelta;
    type Kind = Value;

    fn read<S>(&self, source: &mut S) -> Option<TimeDelta>
        where S: ParserStream + ?Sized,
    {
        let infinity = enumerator([
            ("infinity", TimeDelta::MAX),
            ("+infinity", TimeDelta::MAX),
            ("-infinity", TimeDelta::MIN),
        ]);
        let unit = enumerator([
            ("h", Unit::Hours),
            ("ms", Unit::Milliseconds),
            ("m", Unit::Minutes),
            ("s", Unit::Seconds),
            ("us", Unit::Microseconds),
        ]);
        let amount = (integral::<i64>() >> skip_space() >> unit)
            .try_map(|(amount, unit)| unit.of(amount));
        (infinity | amount).read(source)
    }
}

weft_core::parser_ops! {
    DateParser;
    DateTimeParser;
    TimeDurationParser;
    UnitDurationParser;
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::StrParserStream;

    fn parse<P: Parser>(parser: P, input: &str) -> (Option<P::Result>, &str) {
        let mut s = StrParserStream::new(input);
        let r = parser.read(&mut s);
        (r, s.remaining())
    }

    #[test]
    fn dates() {
        assert_eq!(parse(date(), "2024-02-29;"),
                   (NaiveDate::from_ymd_opt(2024, 2, 29), ";"));
        assert_eq!(parse(date(), "2023-02-29"), (None, "2023-02-29"));
        assert_eq!(parse(date(), "2023-13-01"), (None, "2023-13-01"));
        assert_eq!(parse(date(), "2023-01"), (None, "2023-01"));
    }

    #[test]
    fn date_times() {
        let expected = NaiveDate::from_ymd_opt(2021, 7, 4)
            .and_then(|d| d.and_hms_milli_opt(13, 5, 9, 250));
        assert_eq!(parse(date_time(), "2021-07-04 13:05:09.25"), (expected, ""));
        assert_eq!(parse(date_time(), "2021-07-04T13:05:09.250 Z"), (expected, " Z"));
        let whole = NaiveDate::from_ymd_opt(2021, 7, 4).and_then(|d| d.and_hms_opt(0, 0, 0));
        assert_eq!(parse(date_time(), "2021-07-04 00:00:00"), (whole, ""));
        assert_eq!(parse(date_time(), "2021-07-04 24:00:00"), (None, "2021-07-04 24:00:00"));
        assert_eq!(parse(date_time(), "2021-07-04"), (None, "2021-07-04"));
    }

    #[test]
    fn time_durations() {
        assert_eq!(parse(time_duration(), "1:02:03"), (Some(TimeDelta::seconds(3723)), ""));
        assert_eq!(parse(time_duration(), "-0:00:01.5"),
                   (Some(-TimeDelta::milliseconds(1500)), ""));
        assert_eq!(parse(time_duration(), "100:00:00"),
                   (Some(TimeDelta::hours(100)), ""));
        assert_eq!(parse(time_duration(), "1:60:00"), (None, "1:60:00"));
    }

    #[test]
    fn unit_durations() {
        assert_eq!(parse(unit_duration(), "5 m"), (Some(TimeDelta::minutes(5)), ""));
        assert_eq!(parse(unit_duration(), "250ms"), (Some(TimeDelta::milliseconds(250)), ""));
        assert_eq!(parse(unit_duration(), "-3 h"), (Some(TimeDelta::hours(-3)), ""));
        assert_eq!(parse(unit_duration(), "7us"), (Some(TimeDelta::microseconds(7)), ""));
        assert_eq!(parse(unit_duration(), "infinity"), (Some(TimeDelta::MAX), ""));
        assert_eq!(parse(unit_duration(), "-infinity"), (Some(TimeDelta::MIN), ""));
        assert_eq!(parse(unit_duration(), "12 days"), (None, "12 days"));
        assert_eq!(parse(unit_duration(), "12"), (None, "12"));
    }

    #[test]
    fn operators() {
        let range = date() >> ".." >> date();
        let mut s = StrParserStream::new("2020-01-01..2020-12-31");
        let (start, end) = range.read(&mut s).unwrap();
        assert!(start < end);
    }
}
