//! Type erasure of parsers, for grammars whose parser types would otherwise be
//! infinite or chosen at run time.

use core::{fmt, marker::PhantomData};
use alloc::rc::Rc;

use crate::{Parser, ParserStream, ResultKind, kind::Value};


/// The object-safe form of [`Parser`](../trait.Parser.html) that boxes hold.
trait ErasedParser<R> {
    fn read_erased(&self, source: &mut dyn ParserStream) -> Option<R>;

    fn skip_erased(&self, source: &mut dyn ParserStream) -> bool;
}

impl<P> ErasedParser<P::Result> for P
    where P: Parser,
{
    #[inline]
    fn read_erased(&self, source: &mut dyn ParserStream) -> Option<P::Result> {
        self.read(source)
    }

    #[inline]
    fn skip_erased(&self, source: &mut dyn ParserStream) -> bool {
        self.skip(source)
    }
}


/// A parser of `R` whose concrete type is erased.  `K` is the kind that it is
/// unified as in combinators, which defaults to
/// [`Value`](../kind/struct.Value.html) and can be changed with
/// [`with_kind`](#method.with_kind).
///
/// The wrapped parser is shared, so cloning a box is cheap and the clones read
/// with the same parser.  Reading through a box keeps the backtracking
/// behavior of the wrapped parser exactly.
pub struct ParserBox<R, K = Value> {
    inner: Rc<dyn ErasedParser<R>>,
    kind: PhantomData<fn() -> K>,
}

impl<R, K> ParserBox<R, K> {
    /// Box `parser`, keeping its kind.
    pub fn new<P>(parser: P) -> Self
        where P: Parser<Result = R, Kind = K> + 'static,
    {
        Self { inner: Rc::new(parser), kind: PhantomData }
    }

    /// The same box unified as kind `K2`.
    #[inline]
    pub fn with_kind<K2>(self) -> ParserBox<R, K2> {
        ParserBox { inner: self.inner, kind: PhantomData }
    }
}

impl<R, K> Clone for ParserBox<R, K> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner), kind: PhantomData }
    }
}

impl<R, K> fmt::Debug for ParserBox<R, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserBox").finish_non_exhaustive()
    }
}

impl<R, K> Parser for ParserBox<R, K>
    where K: ResultKind,
{
    type Result = R;
    type Kind = K;

    #[inline]
    fn read<S>(&self, source: &mut S) -> Option<R>
        where S: ParserStream + ?Sized,
    {
        // `S` might be unsized, but `&mut S` is a sized stream.
        let mut source = source;
        self.inner.read_erased(&mut source)
    }

    #[inline]
    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        let mut source = source;
        self.inner.skip_erased(&mut source)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StrParserStream, ParserStreamBox, digit, integral, kind::Char};
    use alloc::{string::String, vec::Vec};

    #[test]
    fn same_behavior() {
        let p = integral::<i32>().then(';').boxed();
        let q = p.clone();
        let mut s = StrParserStream::new("12;13:");
        assert_eq!(p.read(&mut s), Some(12));
        assert_eq!(q.read(&mut s), None);
        assert_eq!(s.remaining(), "13:");
        assert!(!q.skip(&mut s));
        assert_eq!(s.remaining(), "13:");
    }

    #[test]
    fn chosen_at_run_time() {
        let choices: Vec<ParserBox<i32>> = Vec::from([
            integral::<i32>().boxed(),
            digit().map(|c| c as i32).boxed(),
        ]);
        let mut s = StrParserStream::new("42");
        assert_eq!(choices[1].read(&mut s), Some('4' as i32));
        assert_eq!(choices[0].read(&mut s), Some(2));
    }

    #[test]
    fn kinds() {
        let chars: ParserBox<char, Char> = ParserBox::new(digit());
        let mut s = StrParserStream::new("123");
        assert_eq!(chars.clone().star().read(&mut s), Some(String::from("123")));
        let values = chars.with_kind::<Value>();
        let mut s = StrParserStream::new("12");
        assert_eq!(values.star().read(&mut s), Some(Vec::from(['1', '2'])));
    }

    #[test]
    fn boxed_streams() {
        let p = digit().boxed();
        let mut s = ParserStreamBox::new(StrParserStream::new("7"));
        assert_eq!(p.read(&mut s), Some('7'));
    }
}
