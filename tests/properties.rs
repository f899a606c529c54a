//! Property-based tests of the parsers and combinators.
//!
//! ## Properties Tested
//!
//! 1. **Backtracking**: a parser that fails leaves the stream where it was
//! 2. **Determinism**: reading again after a failure gives the same result
//! 3. **Repetition never fails**: `star` and `list` match on any input
//! 4. **Left bias**: when both alternatives match, the left one is taken
//! 5. **Flattening**: a chain of `>>` gives a flat tuple of the values
//! 6. **Round trips**: printed integers, decimals and JSON parse back

use proptest::prelude::*;
use weft::{
    JsonObject, JsonValue, Parser, ParserStream, StrParserStream,
    alpha, decimal, integral, parse_json, symbol,
};


// ============================================================================
// Strategies
// ============================================================================

/// Short inputs that are mostly made of the characters the grammars below care
/// about, so that partial matches are common.
fn input() -> impl Strategy<Value = String> {
    "[0-9a-c,. -]{0,16}"
}

fn json_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _!?]{0,8}"
}

fn json_object() -> impl Strategy<Value = JsonObject> {
    prop::collection::vec((json_text(), json_text(), -1000i32 .. 1000), 0 .. 6)
        .prop_map(|entries| {
            entries.into_iter()
                   .flat_map(|(name, text, number)| {
                       vec![(format!("s{}", name), JsonValue::from(text)),
                            (format!("n{}", name), JsonValue::from(number))]
                   })
                   .collect()
        })
}


// ============================================================================
// Backtracking and determinism
// ============================================================================

proptest! {
    #[test]
    fn failure_restores_stream(text in input()) {
        let pair = integral::<i32>() >> ',' >> integral::<i32>() >> '.';
        let mut s = StrParserStream::new(&text);
        if pair.read(&mut s).is_none() {
            prop_assert_eq!(s.remaining(), text.as_str());
            prop_assert_eq!(s.position(), 0);
        }
    }

    #[test]
    fn failure_is_repeatable(text in input()) {
        let number = decimal::<f64>() >> " ";
        let mut s = StrParserStream::new(&text);
        let first = number.read(&mut s);
        if first.is_none() {
            prop_assert_eq!(number.read(&mut s), None);
            prop_assert!(!number.skip(&mut s));
            prop_assert_eq!(s.remaining(), text.as_str());
        }
    }
}


// ============================================================================
// Repetition and alternation
// ============================================================================

proptest! {
    #[test]
    fn star_never_fails(text in input()) {
        let mut s = StrParserStream::new(&text);
        let letters = alpha().star().read(&mut s);
        prop_assert!(letters.is_some());
        prop_assert!(!s.remaining().starts_with(char::is_alphabetic));
    }

    #[test]
    fn list_never_fails(text in input()) {
        let mut s = StrParserStream::new(&text);
        let numbers = integral::<i64>().list(',').read(&mut s);
        prop_assert!(numbers.is_some());
        let consumed = &text[.. s.position()];
        prop_assert_eq!(numbers.map_or(0, |n| n.len()) == 0, consumed.is_empty());
    }

    #[test]
    fn left_alternative_wins(word in "[a-c]{1,4}", tail in input()) {
        let text = format!("{}{}", word, tail);
        let either = symbol(word.as_str()).to(1) | symbol(word.as_str()).to(2);
        let mut s = StrParserStream::new(&text);
        prop_assert_eq!(either.read(&mut s), Some(1));
        prop_assert_eq!(s.remaining(), tail.as_str());
    }

    #[test]
    fn concatenation_flattens(a in any::<i32>(), b in any::<u8>(), c in any::<i16>()) {
        let triple = integral::<i32>() >> ',' >> integral::<u8>() >> ',' >> integral::<i16>();
        let text = format!("{},{},{}", a, b, c);
        let mut s = StrParserStream::new(&text);
        let (x, y, z) = triple.read(&mut s).unwrap_or_default();
        prop_assert_eq!((x, y, z), (a, b, c));
        prop_assert_eq!(s.next_char(), None);
    }
}


// ============================================================================
// Round trips
// ============================================================================

proptest! {
    #[test]
    fn integral_round_trip(n in -10000i32 .. 10000) {
        let text = n.to_string();
        let mut s = StrParserStream::new(&text);
        prop_assert_eq!(integral::<i32>().read(&mut s), Some(n));
        prop_assert_eq!(s.remaining(), "");
    }

    #[test]
    fn decimal_round_trip(x in -1.0e6f64 .. 1.0e6) {
        let text = x.to_string();
        let mut s = StrParserStream::new(&text);
        prop_assert_eq!(decimal::<f64>().read(&mut s), Some(x));
        prop_assert_eq!(s.remaining(), "");
    }

    #[test]
    fn json_round_trip(object in json_object()) {
        let value = JsonValue::from(object);
        let text = value.to_string();
        prop_assert_eq!(parse_json(&text).ok(), Some(value));
    }
}
