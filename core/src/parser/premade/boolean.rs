use crate::{Parser, ParserStream, kind::Value};

use super::SymbolParser;


/// Matches the exact, lowercase, literal `true` or `false`.  Whatever follows
/// the literal is left alone, so `truex` matches `true` and leaves `x`.
#[derive(Clone, Debug)]
pub struct BoolParser {
    literals: [(SymbolParser, bool); 2],
}

impl Default for BoolParser {
    fn default() -> Self {
        Self {
            literals: [(SymbolParser::new("true"), true),
                       (SymbolParser::new("false"), false)],
        }
    }
}

/// Make a [`BoolParser`](struct.BoolParser.html).
#[inline]
pub fn boolean() -> BoolParser {
    BoolParser::default()
}

impl Parser for BoolParser {
    type Result = bool;
    type Kind = Value;

    fn read<S>(&self, source: &mut S) -> Option<bool>
        where S: ParserStream + ?Sized,
    {
        self.literals.iter()
            .find(|(literal, _)| literal.skip(source))
            .map(|&(_, value)| value)
    }
}
