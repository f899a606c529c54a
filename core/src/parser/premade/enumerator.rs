use alloc::vec::Vec;

use crate::{Parser, ParserStream, kind::Value};

use super::{SymbolParser, SymbolText};


/// Matches one of a set of literals and produces the value associated with it.
/// The literals are tried in the given order, so where one is a prefix of
/// another, the longer one must come first.
#[derive(Clone, Debug)]
pub struct EnumeratorParser<T> {
    entries: Vec<(SymbolParser, T)>,
}

/// Make an [`EnumeratorParser`](struct.EnumeratorParser.html) from pairs of a
/// literal and its value.
pub fn enumerator<I, L, T>(entries: I) -> EnumeratorParser<T>
    where I: IntoIterator<Item = (L, T)>,
          L: Into<SymbolText>,
{
    EnumeratorParser {
        entries: entries.into_iter()
                        .map(|(literal, value)| (SymbolParser::new(literal), value))
                        .collect(),
    }
}

impl<T> Parser for EnumeratorParser<T>
    where T: Clone,
{
    type Result = T;
    type Kind = Value;

    fn read<S>(&self, source: &mut S) -> Option<T>
        where S: ParserStream + ?Sized,
    {
        self.entries.iter()
            .find(|(literal, _)| literal.skip(source))
            .map(|(_, value)| value.clone())
    }

    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        self.entries.iter().any(|(literal, _)| literal.skip(source))
    }
}
