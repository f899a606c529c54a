//! Compile-time computation of the result types of composite parsers.
//!
//! Every [`Parser`](../trait.Parser.html) declares a marker type as its
//! `Kind`, which classifies its `Result` type.  The traits of this module are
//! implemented on the markers, and the combinators use them to compute their
//! own `Result` and `Kind` from those of their operands:
//!
//! * [`Join`] for sequencing: a void operand is absorbed, two values make a
//! pair, and sequences of sequences are flattened into one tuple.
//!
//! * [`Alternate`] for same-typed alternation: a void operand makes the result
//! optional, and two operands of the same type give that type.
//!
//! * [`Tag`] for heterogeneous alternation: results of different types are put
//! in one of the `VariantN` enums, flattened for chains of alternatives.
//!
//! * [`Repeat`] for repetition: void stays void, characters accumulate into a
//! `String`, and anything else into a `Vec`.
//!
//! [`Join`]: trait.Join.html
//! [`Alternate`]: trait.Alternate.html
//! [`Tag`]: trait.Tag.html
//! [`Repeat`]: trait.Repeat.html

use alloc::{string::String, vec::Vec};


/// Implemented by the kind markers only.
pub trait ResultKind {}

/// The kind of parsers that only match and produce `()`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Void;

/// The kind of parsers that produce a single `char`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Char;

/// The kind of parsers that produce an `Option<char>`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MaybeChar;

/// The kind of parsers that produce any other single value.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Value;

/// The kind of sequences, which produce a flat tuple of two or more elements.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Tuple;

/// The kind of tagged alternations, which produce one of the `VariantN` enums.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Union;

impl ResultKind for Void {}
impl ResultKind for Char {}
impl ResultKind for MaybeChar {}
impl ResultKind for Value {}
impl ResultKind for Tuple {}
impl ResultKind for Union {}


/// Unification for sequencing.  Implemented on the kind of the left operand,
/// with `RK` the kind of the right one, and `L` and `R` their result types.
pub trait Join<RK, L, R> {
    /// The kind of the combined result.
    type Kind: ResultKind;
    /// The combined result.
    type Output;

    /// Combine the results of both operands.
    fn join(left: L, right: R) -> Self::Output;
}

/// Unification for alternation of operands that produce the same type, or where
/// one or both are void.
pub trait Alternate<RK, L, R> {
    /// The kind of the unified result.
    type Kind: ResultKind;
    /// The unified result.
    type Output;

    /// Convert the result of the left operand.
    fn from_left(left: L) -> Self::Output;

    /// Convert the result of the right operand.
    fn from_right(right: R) -> Self::Output;
}

/// Unification for alternation of operands that may produce different types.
pub trait Tag<RK, L, R> {
    /// The kind of the unified result.
    type Kind: ResultKind;
    /// The unified result.
    type Output;

    /// Convert the result of the left operand.
    fn from_left(left: L) -> Self::Output;

    /// Convert the result of the right operand.
    fn from_right(right: R) -> Self::Output;
}

/// Accumulation for repetition of a parser whose result is `T`.
pub trait Repeat<T> {
    /// The kind of the accumulation.
    type Kind: ResultKind;
    /// The accumulation, which starts out as its default.
    type Output: Default;

    /// Add one more result.
    fn push(accumulator: &mut Self::Output, item: T);
}


/// A tuple that one more element can be added to the end of.
pub trait TupleAppend<T> {
    /// The longer tuple.
    type Output;

    /// Add `last` after the elements of `self`.
    fn append(self, last: T) -> Self::Output;
}

/// A tuple that one more element can be added to the start of.
pub trait TuplePrepend<T> {
    /// The longer tuple.
    type Output;

    /// Add `first` before the elements of `self`.
    fn prepend(self, first: T) -> Self::Output;
}

/// A tuple that another tuple can be concatenated to.
pub trait TupleConcat<T> {
    /// The longer tuple.
    type Output;

    /// Add the elements of `right` after the elements of `self`.
    fn concat(self, right: T) -> Self::Output;
}

macro_rules! tuple_grow {
    ($($name:ident)+) => {
        impl<$($name,)+ Z> TupleAppend<Z> for ($($name,)+) {
            type Output = ($($name,)+ Z,);

            #[allow(non_snake_case)]
            #[inline]
            fn append(self, last: Z) -> Self::Output {
                let ($($name,)+) = self;
                ($($name,)+ last,)
            }
        }

        impl<$($name,)+ Z> TuplePrepend<Z> for ($($name,)+) {
            type Output = (Z, $($name,)+);

            #[allow(non_snake_case)]
            #[inline]
            fn prepend(self, first: Z) -> Self::Output {
                let ($($name,)+) = self;
                (first, $($name,)+)
            }
        }
    };
}

tuple_grow!(A B);
tuple_grow!(A B C);
tuple_grow!(A B C D);
tuple_grow!(A B C D E);
tuple_grow!(A B C D E F);
tuple_grow!(A B C D E F G);
tuple_grow!(A B C D E F G H);
tuple_grow!(A B C D E F G H I);
tuple_grow!(A B C D E F G H I J);
tuple_grow!(A B C D E F G H I J K);

macro_rules! tuple_concat {
    ($first:ident) => {
        impl<T, $first> TupleConcat<($first,)> for T
            where T: TupleAppend<$first>,
        {
            type Output = <T as TupleAppend<$first>>::Output;

            #[inline]
            fn concat(self, right: ($first,)) -> Self::Output {
                self.append(right.0)
            }
        }
    };
    ($first:ident $($rest:ident)+) => {
        impl<T, $first, $($rest),+> TupleConcat<($first, $($rest),+)> for T
            where T: TupleAppend<$first>,
                  <T as TupleAppend<$first>>::Output: TupleConcat<($($rest,)+)>,
        {
            type Output = <<T as TupleAppend<$first>>::Output
                           as TupleConcat<($($rest,)+)>>::Output;

            #[allow(non_snake_case)]
            #[inline]
            fn concat(self, right: ($first, $($rest),+)) -> Self::Output {
                let ($first, $($rest),+) = right;
                self.append($first).concat(($($rest,)+))
            }
        }

        tuple_concat!($($rest)+);
    };
}

tuple_concat!(A B C D E F G H I J);


// Sequencing

impl Join<Void, (), ()> for Void {
    type Kind = Void;
    type Output = ();

    #[inline]
    fn join((): (), (): ()) {}
}

macro_rules! join_with_void {
    ($($kind:ident)+) => { $(
        impl<R> Join<$kind, (), R> for Void {
            type Kind = $kind;
            type Output = R;

            #[inline]
            fn join((): (), right: R) -> R {
                right
            }
        }

        impl<L> Join<Void, L, ()> for $kind {
            type Kind = $kind;
            type Output = L;

            #[inline]
            fn join(left: L, (): ()) -> L {
                left
            }
        }
    )+ };
}

join_with_void!(Char MaybeChar Value Tuple Union);

macro_rules! join_singles {
    ($lk:ident => $($rk:ident)+) => { $(
        impl<L, R> Join<$rk, L, R> for $lk {
            type Kind = Tuple;
            type Output = (L, R);

            #[inline]
            fn join(left: L, right: R) -> (L, R) {
                (left, right)
            }
        }
    )+ };
}

join_singles!(Char => Char MaybeChar Value Union);
join_singles!(MaybeChar => Char MaybeChar Value Union);
join_singles!(Value => Char MaybeChar Value Union);
join_singles!(Union => Char MaybeChar Value Union);

macro_rules! join_tuples {
    ($($single:ident)+) => { $(
        impl<L, R> Join<$single, L, R> for Tuple
            where L: TupleAppend<R>,
        {
            type Kind = Tuple;
            type Output = L::Output;

            #[inline]
            fn join(left: L, right: R) -> Self::Output {
                left.append(right)
            }
        }

        impl<L, R> Join<Tuple, L, R> for $single
            where R: TuplePrepend<L>,
        {
            type Kind = Tuple;
            type Output = R::Output;

            #[inline]
            fn join(left: L, right: R) -> Self::Output {
                right.prepend(left)
            }
        }
    )+ };
}

join_tuples!(Char MaybeChar Value Union);

impl<L, R> Join<Tuple, L, R> for Tuple
    where L: TupleConcat<R>,
{
    type Kind = Tuple;
    type Output = L::Output;

    #[inline]
    fn join(left: L, right: R) -> Self::Output {
        left.concat(right)
    }
}


// Alternation of the same type

macro_rules! void_alternatives {
    ($tr:ident) => {
        impl $tr<Void, (), ()> for Void {
            type Kind = Void;
            type Output = ();

            #[inline]
            fn from_left((): ()) {}

            #[inline]
            fn from_right((): ()) {}
        }

        impl $tr<Char, (), char> for Void {
            type Kind = MaybeChar;
            type Output = Option<char>;

            #[inline]
            fn from_left((): ()) -> Option<char> {
                None
            }

            #[inline]
            fn from_right(right: char) -> Option<char> {
                Some(right)
            }
        }

        impl $tr<Void, char, ()> for Char {
            type Kind = MaybeChar;
            type Output = Option<char>;

            #[inline]
            fn from_left(left: char) -> Option<char> {
                Some(left)
            }

            #[inline]
            fn from_right((): ()) -> Option<char> {
                None
            }
        }

        void_alternatives!($tr => MaybeChar Value Tuple Union);
    };
    ($tr:ident => $($kind:ident)+) => { $(
        impl<R> $tr<$kind, (), R> for Void {
            type Kind = Value;
            type Output = Option<R>;

            #[inline]
            fn from_left((): ()) -> Option<R> {
                None
            }

            #[inline]
            fn from_right(right: R) -> Option<R> {
                Some(right)
            }
        }

        impl<L> $tr<Void, L, ()> for $kind {
            type Kind = Value;
            type Output = Option<L>;

            #[inline]
            fn from_left(left: L) -> Option<L> {
                Some(left)
            }

            #[inline]
            fn from_right((): ()) -> Option<L> {
                None
            }
        }
    )+ };
}

void_alternatives!(Alternate);
void_alternatives!(Tag);

macro_rules! same_alternatives {
    ($($lk:ident => $($rk:ident : $kind:ident),+;)+) => { $($(
        impl<T> Alternate<$rk, T, T> for $lk {
            type Kind = $kind;
            type Output = T;

            #[inline]
            fn from_left(left: T) -> T {
                left
            }

            #[inline]
            fn from_right(right: T) -> T {
                right
            }
        }
    )+)+ };
}

same_alternatives! {
    Char => Char: Char, MaybeChar: Value, Value: Value, Tuple: Value, Union: Value;
    MaybeChar => Char: Value, MaybeChar: MaybeChar, Value: Value, Tuple: Value, Union: Value;
    Value => Char: Value, MaybeChar: Value, Value: Value, Tuple: Value, Union: Value;
    Tuple => Char: Value, MaybeChar: Value, Value: Value, Tuple: Tuple, Union: Value;
    Union => Char: Value, MaybeChar: Value, Value: Value, Tuple: Value, Union: Union;
}


// Tagged alternation

/// One of two alternatives.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Variant2<A, B> { First(A), Second(B) }

/// One of three alternatives.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Variant3<A, B, C> { First(A), Second(B), Third(C) }

/// One of four alternatives.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Variant4<A, B, C, D> { First(A), Second(B), Third(C), Fourth(D) }

/// One of five alternatives.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Variant5<A, B, C, D, E> { First(A), Second(B), Third(C), Fourth(D), Fifth(E) }

/// One of six alternatives.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Variant6<A, B, C, D, E, F> {
    First(A), Second(B), Third(C), Fourth(D), Fifth(E), Sixth(F)
}


/// Merging of the alternatives of two tagged types into one flat one.  `Self`
/// is the left side, and either side may be a [`Single`](struct.Single.html)
/// alternative.
pub trait VariantMerge<R>: Sized {
    /// The merged `VariantN` type.
    type Output;

    /// Convert a left alternative.
    fn merge_left(self) -> Self::Output;

    /// Convert a right alternative.
    fn merge_right(right: R) -> Self::Output;
}

/// Marks a side of a `VariantMerge` as one untagged alternative.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Single<T>(pub T);

macro_rules! merge_into {
    ($out:ident;
     $left:ty { $($lpat:path => $lv:ident),+ };
     $right:ty { $($rpat:path => $rv:ident),+ };
     [$($param:ident),+]) => {
        impl<$($param),+> VariantMerge<$right> for $left {
            type Output = $out<$($param),+>;

            #[inline]
            fn merge_left(self) -> $out<$($param),+> {
                match self { $($lpat(v) => $out::$lv(v)),+ }
            }

            #[inline]
            fn merge_right(right: $right) -> $out<$($param),+> {
                match right { $($rpat(v) => $out::$rv(v)),+ }
            }
        }
    };
}

// single ^ union
merge_into!(Variant3; Single<A> { Single => First };
            Variant2<B, C> { Variant2::First => Second, Variant2::Second => Third };
            [A, B, C]);
merge_into!(Variant4; Single<A> { Single => First };
            Variant3<B, C, D> { Variant3::First => Second, Variant3::Second => Third,
                                Variant3::Third => Fourth };
            [A, B, C, D]);
merge_into!(Variant5; Single<A> { Single => First };
            Variant4<B, C, D, E> { Variant4::First => Second, Variant4::Second => Third,
                                   Variant4::Third => Fourth, Variant4::Fourth => Fifth };
            [A, B, C, D, E]);
merge_into!(Variant6; Single<A> { Single => First };
            Variant5<B, C, D, E, F> { Variant5::First => Second, Variant5::Second => Third,
                                      Variant5::Third => Fourth, Variant5::Fourth => Fifth,
                                      Variant5::Fifth => Sixth };
            [A, B, C, D, E, F]);

// union ^ single
merge_into!(Variant3; Variant2<A, B> { Variant2::First => First, Variant2::Second => Second };
            Single<C> { Single => Third };
            [A, B, C]);
merge_into!(Variant4; Variant3<A, B, C> { Variant3::First => First, Variant3::Second => Second,
                                          Variant3::Third => Third };
            Single<D> { Single => Fourth };
            [A, B, C, D]);
merge_into!(Variant5; Variant4<A, B, C, D> { Variant4::First => First,
                                             Variant4::Second => Second,
                                             Variant4::Third => Third,
                                             Variant4::Fourth => Fourth };
            Single<E> { Single => Fifth };
            [A, B, C, D, E]);
merge_into!(Variant6; Variant5<A, B, C, D, E> { Variant5::First => First,
                                                Variant5::Second => Second,
                                                Variant5::Third => Third,
                                                Variant5::Fourth => Fourth,
                                                Variant5::Fifth => Fifth };
            Single<F> { Single => Sixth };
            [A, B, C, D, E, F]);

// union ^ union
merge_into!(Variant4; Variant2<A, B> { Variant2::First => First, Variant2::Second => Second };
            Variant2<C, D> { Variant2::First => Third, Variant2::Second => Fourth };
            [A, B, C, D]);
merge_into!(Variant5; Variant2<A, B> { Variant2::First => First, Variant2::Second => Second };
            Variant3<C, D, E> { Variant3::First => Third, Variant3::Second => Fourth,
                                Variant3::Third => Fifth };
            [A, B, C, D, E]);
merge_into!(Variant5; Variant3<A, B, C> { Variant3::First => First, Variant3::Second => Second,
                                          Variant3::Third => Third };
            Variant2<D, E> { Variant2::First => Fourth, Variant2::Second => Fifth };
            [A, B, C, D, E]);
merge_into!(Variant6; Variant2<A, B> { Variant2::First => First, Variant2::Second => Second };
            Variant4<C, D, E, F> { Variant4::First => Third, Variant4::Second => Fourth,
                                   Variant4::Third => Fifth, Variant4::Fourth => Sixth };
            [A, B, C, D, E, F]);
merge_into!(Variant6; Variant3<A, B, C> { Variant3::First => First, Variant3::Second => Second,
                                          Variant3::Third => Third };
            Variant3<D, E, F> { Variant3::First => Fourth, Variant3::Second => Fifth,
                                Variant3::Third => Sixth };
            [A, B, C, D, E, F]);
merge_into!(Variant6; Variant4<A, B, C, D> { Variant4::First => First,
                                             Variant4::Second => Second,
                                             Variant4::Third => Third,
                                             Variant4::Fourth => Fourth };
            Variant2<E, F> { Variant2::First => Fifth, Variant2::Second => Sixth };
            [A, B, C, D, E, F]);

macro_rules! tag_singles {
    ($lk:ident => $($rk:ident)+) => { $(
        impl<L, R> Tag<$rk, L, R> for $lk {
            type Kind = Union;
            type Output = Variant2<L, R>;

            #[inline]
            fn from_left(left: L) -> Self::Output {
                Variant2::First(left)
            }

            #[inline]
            fn from_right(right: R) -> Self::Output {
                Variant2::Second(right)
            }
        }
    )+ };
}

tag_singles!(Char => Char MaybeChar Value Tuple);
tag_singles!(MaybeChar => Char MaybeChar Value Tuple);
tag_singles!(Value => Char MaybeChar Value Tuple);
tag_singles!(Tuple => Char MaybeChar Value Tuple);

macro_rules! tag_unions {
    ($($single:ident)+) => { $(
        impl<L, R> Tag<$single, L, R> for Union
            where L: VariantMerge<Single<R>>,
        {
            type Kind = Union;
            type Output = L::Output;

            #[inline]
            fn from_left(left: L) -> Self::Output {
                left.merge_left()
            }

            #[inline]
            fn from_right(right: R) -> Self::Output {
                L::merge_right(Single(right))
            }
        }

        impl<L, R> Tag<Union, L, R> for $single
            where Single<L>: VariantMerge<R>,
        {
            type Kind = Union;
            type Output = <Single<L> as VariantMerge<R>>::Output;

            #[inline]
            fn from_left(left: L) -> Self::Output {
                Single(left).merge_left()
            }

            #[inline]
            fn from_right(right: R) -> Self::Output {
                <Single<L> as VariantMerge<R>>::merge_right(right)
            }
        }
    )+ };
}

tag_unions!(Char MaybeChar Value Tuple);

impl<L, R> Tag<Union, L, R> for Union
    where L: VariantMerge<R>,
{
    type Kind = Union;
    type Output = L::Output;

    #[inline]
    fn from_left(left: L) -> Self::Output {
        left.merge_left()
    }

    #[inline]
    fn from_right(right: R) -> Self::Output {
        L::merge_right(right)
    }
}


// Repetition

impl Repeat<()> for Void {
    type Kind = Void;
    type Output = ();

    #[inline]
    fn push(_: &mut (), (): ()) {}
}

impl Repeat<char> for Char {
    type Kind = Value;
    type Output = String;

    #[inline]
    fn push(accumulator: &mut String, item: char) {
        accumulator.push(item);
    }
}

impl Repeat<Option<char>> for MaybeChar {
    type Kind = Value;
    type Output = String;

    #[inline]
    fn push(accumulator: &mut String, item: Option<char>) {
        if let Some(c) = item {
            accumulator.push(c);
        }
    }
}

macro_rules! repeat_into_vec {
    ($($kind:ident)+) => { $(
        impl<T> Repeat<T> for $kind {
            type Kind = Value;
            type Output = Vec<T>;

            #[inline]
            fn push(accumulator: &mut Vec<T>, item: T) {
                accumulator.push(item);
            }
        }
    )+ };
}

repeat_into_vec!(Value Tuple Union);


#[cfg(test)]
mod tests {
    use super::*;

    fn join<LK, RK, L, R>(l: L, r: R) -> <LK as Join<RK, L, R>>::Output
        where LK: Join<RK, L, R>,
    {
        LK::join(l, r)
    }

    #[test]
    fn joining() {
        join::<Void, Void, _, _>((), ());
        assert_eq!(join::<Void, Char, _, _>((), 'a'), 'a');
        assert_eq!(join::<Value, Void, _, _>(1, ()), 1);
        assert_eq!(join::<Char, Value, _, _>('a', 1), ('a', 1));
        assert_eq!(join::<Tuple, Value, _, _>(('a', 1), 2.5), ('a', 1, 2.5));
        assert_eq!(join::<Value, Tuple, _, _>(0, ('a', 1)), (0, 'a', 1));
        assert_eq!(join::<Tuple, Tuple, _, _>((1, 2, 3), (4, 5)), (1, 2, 3, 4, 5));
        assert_eq!(join::<Tuple, Tuple, _, _>((1, 2), (3, 4, 5, 6, 7, 8, 9, 10, 11, 12)),
                   (1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12));
    }

    #[test]
    fn alternating() {
        assert_eq!(<Void as Alternate<Char, (), char>>::from_left(()), None);
        assert_eq!(<Char as Alternate<Void, char, ()>>::from_left('x'), Some('x'));
        assert_eq!(<Void as Alternate<Value, (), u8>>::from_right(3), Some(3));
        assert_eq!(<Value as Alternate<Value, u8, u8>>::from_right(3), 3);
    }

    #[test]
    fn tagging() {
        type Two = Variant2<char, i32>;
        assert_eq!(<Char as Tag<Value, char, i32>>::from_left('c'), Two::First('c'));
        type Three = Variant3<char, i32, f64>;
        assert_eq!(<Union as Tag<Value, Two, f64>>::from_right(1.5),
                   Three::Third(1.5));
        assert_eq!(<Union as Tag<Value, Two, f64>>::from_left(Two::Second(7)),
                   Three::Second(7));
        type Front = Variant3<u8, char, i32>;
        assert_eq!(<Value as Tag<Union, u8, Two>>::from_right(Two::First('z')),
                   Front::Second('z'));
        type Other = Variant2<u8, u16>;
        type Four = Variant4<char, i32, u8, u16>;
        assert_eq!(<Union as Tag<Union, Two, Other>>::from_right(Other::Second(9)),
                   Four::Fourth(9));
    }

    #[test]
    fn repeating() {
        let mut s = String::new();
        <Char as Repeat<char>>::push(&mut s, 'a');
        <MaybeChar as Repeat<Option<char>>>::push(&mut s, None);
        <MaybeChar as Repeat<Option<char>>>::push(&mut s, Some('b'));
        assert_eq!(s, "ab");
        let mut v = Vec::new();
        <Value as Repeat<u8>>::push(&mut v, 1);
        <Value as Repeat<u8>>::push(&mut v, 2);
        assert_eq!(v, [1, 2]);
    }
}
