use weft::{
    Error, JsonValue, Parser, ParserStream, StrParserStream,
    alpha, any, boolean, decimal, integral, parse_json,
    common::{inmem::parse_from, stream::parse_from_reader},
};


#[test]
fn alpha_then_any() {
    let mut s = StrParserStream::new("ab1");
    assert_eq!(alpha().read(&mut s), Some('a'));
    assert_eq!(alpha().read(&mut s), Some('b'));
    assert_eq!(alpha().read(&mut s), None);
    assert_eq!(any().read(&mut s), Some('1'));
}

#[test]
fn signed_integral() {
    let mut s = StrParserStream::new("-123");
    assert_eq!(integral::<i32>().read(&mut s), Some(-123));
    assert_eq!(s.remaining(), "");

    let mut s = StrParserStream::new("-a123");
    assert_eq!(integral::<i32>().read(&mut s), None);
    assert_eq!(s.remaining(), "-a123");
    assert_eq!(s.next_char(), Some('-'));
}

#[test]
fn boolean_prefix() {
    let mut s = StrParserStream::new("truex");
    assert_eq!(boolean().read(&mut s), Some(true));
    assert_eq!(s.next_char(), Some('x'));
}

#[test]
fn list_then_literal() {
    let numbers = integral::<i32>().list(',') >> " .";
    assert_eq!(parse_from(&numbers, "123,456 .").unwrap(), vec![123, 456]);
    assert_eq!(parse_from_reader(&numbers, &b"123,456 ."[..]).unwrap(), vec![123, 456]);
}

#[test]
fn json_object() {
    let value = parse_json("{\"a\":5}").unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object.get("a"), Some(&JsonValue::Number(5.0)));
    assert_eq!(value.to_string(), r#"{"a":5}"#);
}

#[test]
fn decimal_backtracks() {
    let mut s = StrParserStream::new("3.300000");
    assert_eq!(decimal::<f64>().read(&mut s), Some(3.3));

    let mut s = StrParserStream::new("1.a32");
    assert_eq!(decimal::<f64>().read(&mut s), None);
    assert_eq!(s.remaining(), "1.a32");
    assert!(matches!(parse_from(&decimal::<f64>(), "1.a32"), Err(Error::InvalidValue)));
}
