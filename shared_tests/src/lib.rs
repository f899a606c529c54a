//! Used by the integration tests of both the [core](../weft_core/index.html)
//! and the [full](../weft/index.html) crates.  It provides test suites that can
//! be run against any type of
//! [`ParserStream`](../weft_core/trait.ParserStream.html), so that every stream
//! is checked to behave the same and every parser is checked to behave the same
//! over every stream.

use weft_core::ParserStream;


pub mod suites;


/// Read everything that is left in `stream`.
pub fn drain<S>(stream: &mut S) -> String
    where S: ParserStream + ?Sized,
{
    let mut out = String::new();
    while let Some(c) = stream.next_char() {
        out.push(c);
    }
    out
}
