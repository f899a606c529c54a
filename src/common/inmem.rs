//! Parsing of inputs that are single in-memory strings.

use tracing::{debug, trace};

use crate::{Error, Parser, Result, StrParserStream};


/// Parse the start of `input` with `parser`.
///
/// This succeeds when `parser` matches at the start of `input`, whether or not
/// it consumed all of it.  To require that, end the grammar with
/// [`end_of_input`](../../fn.end_of_input.html).
///
/// ```
/// use weft::{Parser, common::inmem::parse_from, integral};
///
/// assert_eq!(parse_from(&integral::<i32>(), "-123").unwrap(), -123);
/// assert!(parse_from(&integral::<i32>(), "-a123").is_err());
/// ```
pub fn parse_from<P>(parser: &P, input: &str) -> Result<P::Result>
    where P: Parser,
{
    let mut stream = StrParserStream::new(input);
    match parser.read(&mut stream) {
        Some(value) => {
            trace!(consumed = stream.position(), "parsed string input");
            Ok(value)
        }
        None => {
            debug!(length = input.len(), "string input did not match");
            Err(Error::InvalidValue)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decimal, symbol};

    #[test]
    fn permissive() {
        assert_eq!(parse_from(&decimal::<f64>(), "2.5 and more").unwrap(), 2.5);
        assert!(parse_from(&symbol("ok"), "ok").is_ok());
    }

    #[test]
    fn invalid() {
        assert!(matches!(parse_from(&decimal::<f64>(), "1.a32"), Err(Error::InvalidValue)));
        assert!(matches!(parse_from(&symbol("x"), ""), Err(Error::InvalidValue)));
    }
}
