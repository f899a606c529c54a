#![no_std]

use weft_core::{BufferParserStream, ParserStreamBox, StrParserStream};
use weft_shared_tests::suites::*;


#[test]
fn str_stream() {
    stream_suite(StrParserStream::new);
    parser_suite(StrParserStream::new);
}

#[test]
fn buffer_stream() {
    stream_suite(|text: &'static str| BufferParserStream::new(text.as_bytes()));
    parser_suite(|text: &'static str| BufferParserStream::new(text.as_bytes()));
}

#[test]
fn boxed_stream() {
    stream_suite(|text| ParserStreamBox::new(StrParserStream::new(text)));
    parser_suite(|text| ParserStreamBox::new(BufferParserStream::new(text.as_bytes())));
}
