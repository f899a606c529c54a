//! Suites of tests applied across multiple crates


use weft_core::{
    Parser, ParserStream, SubParserStream,
    alpha, any, boolean, decimal, integral, rational, string, symbol,
};

use super::drain;


/// Checks the `ParserStream` contract: single-character lookahead, unbounded
/// undo, and checkpoints that roll back unless accepted.  `make` gives a fresh
/// stream over its argument.
pub fn stream_suite<S, M>(make: M)
    where S: ParserStream,
          M: Fn(&'static str) -> S,
{
    // Reading and peeking
    let mut s = make("añ€𝄞");
    assert_eq!(s.peek(), '\0');
    assert!(s.read());
    assert_eq!(s.peek(), 'a');
    assert_eq!(s.next_char(), Some('ñ'));
    assert_eq!(s.next_char(), Some('€'));
    assert_eq!(s.next_char(), Some('𝄞'));
    assert!(!s.read());
    assert!(!s.read());
    assert_eq!(s.next_char(), None);

    // Undoing, also after the end was reached
    s.undo();
    assert_eq!(s.peek(), '€');
    assert_eq!(s.next_char(), Some('𝄞'));
    s.undo_n(3);
    assert_eq!(s.peek(), 'a');
    assert_eq!(drain(&mut s), "ñ€𝄞");
    s.undo_n(4);
    assert_eq!(s.peek(), '\0');
    assert_eq!(drain(&mut s), "añ€𝄞");

    // Empty input
    let mut s = make("");
    assert!(!s.read());
    assert_eq!(s.next_char(), None);
    assert_eq!(s.peek(), '\0');

    // Checkpoints roll back when dropped
    let mut s = make("abcdef");
    {
        let mut c = SubParserStream::new(&mut s);
        assert_eq!(c.next_char(), Some('a'));
        assert_eq!(c.next_char(), Some('b'));
        assert_eq!(c.pending(), 2);
    }
    assert_eq!(s.peek(), '\0');
    assert_eq!(s.next_char(), Some('a'));

    // Accepting keeps, and nesting counts through inner checkpoints
    {
        let mut outer = SubParserStream::new(&mut s);
        {
            let mut inner = SubParserStream::new(&mut outer);
            assert_eq!(inner.next_char(), Some('b'));
            assert_eq!(inner.next_char(), Some('c'));
            inner.accept();
        }
        assert_eq!(outer.pending(), 2);
        {
            let mut inner = SubParserStream::new(&mut outer);
            assert_eq!(inner.next_char(), Some('d'));
        }
        assert_eq!(outer.pending(), 2);
        assert_eq!(outer.peek(), 'c');
    }
    assert_eq!(s.peek(), 'a');
    {
        let mut c = SubParserStream::new(&mut s);
        assert_eq!(c.next_char(), Some('b'));
        c.accept();
    }
    assert_eq!(s.peek(), 'b');

    // Accepting on the stream itself does not lose the current position
    s.accept();
    assert_eq!(s.peek(), 'b');
    assert_eq!(s.next_char(), Some('c'));
    assert_eq!(drain(&mut s), "def");
    s.accept();
    assert!(!s.read());
}


/// Checks the primitive parsers and the combinators over the streams that
/// `make` gives, including that failing never moves the stream.
pub fn parser_suite<S, M>(make: M)
    where S: ParserStream,
          M: Fn(&'static str) -> S,
{
    macro_rules! test {
        // Expect failure, which leaves everything.  This arm must come first,
        // because `!` would otherwise be taken as the start of an expression.
        ($parser:expr, $input:expr =>!) => {{
            let mut s = make($input);
            assert_eq!($parser.read(&mut s), None, "reading {:?}", $input);
            assert!(!$parser.skip(&mut s), "skipping {:?}", $input);
            assert_eq!(drain(&mut s), $input, "after failing {:?}", $input);
        }};
        // Expect the value, and what is left.
        ($parser:expr, $input:expr => $expected:expr, $rest:expr) => {{
            let mut s = make($input);
            assert_eq!($parser.read(&mut s), $expected, "reading {:?}", $input);
            assert_eq!(drain(&mut s), $rest, "after reading {:?}", $input);
        }};
    }

    // Characters
    let mut s = make("ab1");
    assert_eq!(alpha().read(&mut s), Some('a'));
    assert_eq!(alpha().read(&mut s), Some('b'));
    assert_eq!(alpha().read(&mut s), None);
    assert_eq!(any().read(&mut s), Some('1'));
    assert_eq!(any().read(&mut s), None);

    // Numbers
    test!(integral::<i32>(), "-123" => Some(-123), "");
    test!(integral::<i32>(), "-a123" =>!);
    test!(integral::<u8>(), "255 " => Some(255), " ");
    test!(integral::<u8>(), "256" =>!);
    test!(decimal::<f64>(), "3.300000" => Some(3.3), "");
    test!(decimal::<f64>(), "1.a32" =>!);
    test!(rational::<i32>().map(|r| (r.numer(), r.denom())), "0.5" => Some((1, 2)), "");
    test!(rational::<i32>().map(|r| (r.numer(), r.denom())), "-0.5" => Some((-1, 2)), "");
    test!(rational::<i32>().map(|r| (r.numer(), r.denom())), "1000000000" =>
          Some((1_000_000_000, 1)), "");

    // Literals
    test!(boolean(), "truex" => Some(true), "x");
    test!(boolean(), "fals" =>!);
    test!(symbol("héllo"), "héllo!" => Some(()), "!");
    test!(symbol("héllo"), "hélp" =>!);
    test!(string(), r#""a\"\\\/\n""# => Some(String::from("a\"\\/\n")), "");
    test!(string(), r#""open"# =>!);
    test!(string(), r#""bad\q""# =>!);

    // Combinators
    test!(integral::<i32>().list(',') >> " .", "123,456 ." => Some(vec![123, 456]), "");
    test!(integral::<i32>().list(',') >> " .", "123,456," =>!);
    test!(alpha().star(), "" => Some(String::new()), "");
    test!(alpha().plus(), "1" =>!);
    test!(symbol("ab").to(1) | symbol("a").to(2), "ab" => Some(1), "");
    test!(symbol("ab").to(1) | symbol("a").to(2), "ac" => Some(2), "c");
    test!(integral::<i32>() >> ',' >> integral::<i32>(), "1,x" =>!);
    test!((any() - '}').star() >> '}', "a b}c" => Some(String::from("a b")), "c");
    test!(integral::<i32>().token() >> ';', " 7 ;" => Some(7), "");
}
