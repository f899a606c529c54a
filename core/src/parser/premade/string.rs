use alloc::string::String;

use crate::{Parser, ParserStream, SubParserStream, kind::Value};


/// Matches a string literal in double quotes and produces its unescaped text.
///
/// The escapes are `\n`, `\t`, `\"`, `\\`, `\/`, `\b`, `\f` and `\r`.  Any
/// other escape, an unescaped control character, or a missing closing quote
/// makes the match fail.
#[derive(Copy, Clone, Default, Debug)]
pub struct StringParser;

/// Make a [`StringParser`](struct.StringParser.html).
#[inline]
pub fn string() -> StringParser {
    StringParser
}

impl StringParser {
    /// Walk a whole literal, giving each unescaped character to `sink`.
    fn scan<S, F>(source: &mut S, mut sink: F) -> Option<()>
        where S: ParserStream + ?Sized,
              F: FnMut(char),
    {
        let mut context = SubParserStream::new(source);
        if context.next_char()? != '"' {
            return None;
        }
        loop {
            match context.next_char()? {
                '"' => break,
                '\\' => sink(match context.next_char()? {
                    'n' => '\n',
                    't' => '\t',
                    '"' => '"',
                    '\\' => '\\',
                    '/' => '/',
                    'b' => '\u{8}',
                    'f' => '\u{c}',
                    'r' => '\r',
                    _ => return None,
                }),
                c if c.is_control() => return None,
                c => sink(c),
            }
        }
        context.accept();
        Some(())
    }
}

impl Parser for StringParser {
    type Result = String;
    type Kind = Value;

    fn read<S>(&self, source: &mut S) -> Option<String>
        where S: ParserStream + ?Sized,
    {
        let mut value = String::new();
        Self::scan(source, |c| value.push(c))?;
        Some(value)
    }

    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        Self::scan(source, |_| ()).is_some()
    }
}
