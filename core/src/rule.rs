//! Forward declaration of parsers, for recursive grammars.

use core::{cell::RefCell, fmt, marker::PhantomData};
use alloc::rc::Rc;

use crate::{IntoParser, Parser, ParserBox, ParserStream, ResultKind, kind::Value};


/// What a new [`Rule`](struct.Rule.html) is bound to.  Never matches.
struct Unbound<R>(PhantomData<fn() -> R>);

impl<R> Parser for Unbound<R> {
    type Result = R;
    type Kind = Value;

    #[inline]
    fn read<S>(&self, _source: &mut S) -> Option<R>
        where S: ParserStream + ?Sized,
    {
        None
    }
}


/// A slot that a parser of `R` is put into after the `Rule` has been used in
/// other parsers, so that a grammar can refer to itself.  Clones share the slot.
///
/// A new rule never matches until [`set`](#method.set) is called.  The slot is
/// a `RefCell` behind an `Rc`, which confines a rule to one thread, and `set`
/// is meant to be called while the grammar is being built, before any parsing
/// with it.
///
/// A rule that is set to a parser containing a clone of itself forms a
/// reference cycle, which is only freed after [`reset`](#method.reset).
///
/// ```
/// use weft_core::{Parser, Rule, StrParserStream, digit, symbol};
///
/// // nested = digit | '(' nested ')'
/// let nested: Rule<char> = Rule::new();
/// nested.set(digit() | symbol('(') >> nested.clone() >> ')');
///
/// let mut stream = StrParserStream::new("((7))");
/// assert_eq!(nested.read(&mut stream), Some('7'));
/// nested.reset();
/// ```
#[doc(alias = "Deferred")]
pub struct Rule<R, K = Value> {
    slot: Rc<RefCell<ParserBox<R, K>>>,
}

impl<R, K> Rule<R, K>
    where R: 'static,
{
    /// Make a new rule that does not match anything yet.
    pub fn new() -> Self {
        Self { slot: Rc::new(RefCell::new(Self::unbound())) }
    }

    fn unbound() -> ParserBox<R, K> {
        ParserBox::new(Unbound(PhantomData)).with_kind()
    }

    /// Bind this rule, and all of its clones, to `parser`.
    pub fn set<P>(&self, parser: P)
        where P: IntoParser,
              P::Parser: Parser<Result = R> + 'static,
    {
        let boxed = ParserBox::new(parser.into_parser()).with_kind();
        *self.slot.borrow_mut() = boxed;
    }

    /// Bind this rule back to nothing, which also breaks any reference cycle
    /// through it.
    pub fn reset(&self) {
        *self.slot.borrow_mut() = Self::unbound();
    }
}

impl<R, K> Default for Rule<R, K>
    where R: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R, K> Clone for Rule<R, K> {
    fn clone(&self) -> Self {
        Self { slot: Rc::clone(&self.slot) }
    }
}

impl<R, K> fmt::Debug for Rule<R, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}

impl<R, K> Parser for Rule<R, K>
    where K: ResultKind,
{
    type Result = R;
    type Kind = K;

    fn read<S>(&self, source: &mut S) -> Option<R>
        where S: ParserStream + ?Sized,
    {
        // Not borrowed while reading, because the parser can reach this rule.
        let parser = self.slot.borrow().clone();
        parser.read(source)
    }

    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        let parser = self.slot.borrow().clone();
        parser.skip(source)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StrParserStream, any, integral, symbol, kind::Char};
    use alloc::{string::String, vec::Vec};

    #[test]
    fn unbound_fails() {
        let r: Rule<i32> = Rule::new();
        let mut s = StrParserStream::new("1");
        assert_eq!(r.read(&mut s), None);
        assert!(!r.skip(&mut s));
        assert_eq!(s.remaining(), "1");
    }

    #[test]
    fn rebinding() {
        let r: Rule<i32> = Rule::default();
        let user = r.clone().then(';');
        r.set(integral::<i32>());
        let mut s = StrParserStream::new("5;x");
        assert_eq!(user.read(&mut s), Some(5));
        r.set(any().to(-1));
        assert_eq!(user.read(&mut s), None);
        assert_eq!(s.remaining(), "x");
        assert_eq!(r.read(&mut s), Some(-1));
    }

    #[test]
    fn recursive() {
        // list = '[' (int | list),* ']'
        #[derive(PartialEq, Debug)]
        enum Tree { Leaf(i32), Node(Vec<Tree>) }

        let tree: Rule<Tree> = Rule::new();
        let item = integral::<i32>().map(Tree::Leaf).or(tree.clone());
        tree.set(symbol('[').then(item.list(',')).then(']').map(Tree::Node));

        let mut s = StrParserStream::new("[1, [2, []], 3]");
        assert_eq!(tree.read(&mut s), Some(Tree::Node(Vec::from([
            Tree::Leaf(1),
            Tree::Node(Vec::from([Tree::Leaf(2), Tree::Node(Vec::new())])),
            Tree::Leaf(3),
        ]))));
        tree.reset();
    }

    #[test]
    fn kind() {
        let r: Rule<char, Char> = Rule::new();
        r.set(any());
        let mut s = StrParserStream::new("ab");
        assert_eq!(r.star().read(&mut s), Some(String::from("ab")));
    }
}
