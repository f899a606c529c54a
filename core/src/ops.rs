//! The operators of the parser algebra: `>>` for
//! [`then`](../trait.Parser.html#method.then), `|` for
//! [`or`](../trait.Parser.html#method.or), `^` for
//! [`union`](../trait.Parser.html#method.union), `-` for
//! [`except`](../trait.Parser.html#method.except) and `!` for
//! [`not`](../combinator/fn.not.html).

use crate::{
    ParserBox, Rule,
    combinator::*,
    parser::premade::*,
};


/// Implement the operators for parser types.  Used by the crates that add more
/// parser types.
#[doc(hidden)]
#[macro_export]
macro_rules! parser_ops {
    ($($name:ident $(<$($param:ident),+>)?;)+) => { $(
        impl<$($($param,)+)? Q> ::core::ops::Shr<Q> for $name $(<$($param),+>)?
            where Self: $crate::Parser,
                  Q: $crate::IntoParser,
        {
            type Output = $crate::combinator::ConcatenateParser<Self, Q::Parser>;

            #[inline]
            fn shr(self, next: Q) -> Self::Output {
                $crate::combinator::ConcatenateParser::new(self, next.into_parser())
            }
        }

        impl<$($($param,)+)? Q> ::core::ops::BitOr<Q> for $name $(<$($param),+>)?
            where Self: $crate::Parser,
                  Q: $crate::IntoParser,
        {
            type Output = $crate::combinator::OrParser<Self, Q::Parser>;

            #[inline]
            fn bitor(self, other: Q) -> Self::Output {
                $crate::combinator::OrParser::new(self, other.into_parser())
            }
        }

        impl<$($($param,)+)? Q> ::core::ops::BitXor<Q> for $name $(<$($param),+>)?
            where Self: $crate::Parser,
                  Q: $crate::IntoParser,
        {
            type Output = $crate::combinator::UnionParser<Self, Q::Parser>;

            #[inline]
            fn bitxor(self, other: Q) -> Self::Output {
                $crate::combinator::UnionParser::new(self, other.into_parser())
            }
        }

        impl<$($($param,)+)? Q> ::core::ops::Sub<Q> for $name $(<$($param),+>)?
            where Self: $crate::Parser,
                  Q: $crate::IntoParser,
        {
            type Output = $crate::combinator::DifferenceParser<Self, Q::Parser>;

            #[inline]
            fn sub(self, excluded: Q) -> Self::Output {
                $crate::combinator::DifferenceParser::new(self, excluded.into_parser())
            }
        }

        impl<$($($param),+)?> ::core::ops::Not for $name $(<$($param),+>)?
            where Self: $crate::Parser,
        {
            type Output = $crate::combinator::NotParser<Self>;

            #[inline]
            fn not(self) -> Self::Output {
                $crate::combinator::NotParser::new(self)
            }
        }
    )+ };
}

parser_ops! {
    AnyParser;
    AlphaParser;
    DigitParser;
    BlankParser;
    SpaceParser;
    SatisfyParser<F>;
    SymbolParser;
    SkipSpaceParser;
    SucceedParser;
    FailParser;
    EndOfInputParser;
    StringParser;
    BoolParser;
    IntegralParser<I>;
    DecimalParser<F>;
    RationalParser<I>;
    EnumeratorParser<T>;
    ConcatenateParser<L, R>;
    OrParser<L, R>;
    UnionParser<L, R>;
    DifferenceParser<P, E>;
    NotParser<P>;
    StarParser<P>;
    PlusParser<P>;
    ListParser<P>;
    ForListParser<P, A, F>;
    SequenceParser<P>;
    ConversionParser<P, F>;
    TryConversionParser<P, F>;
    ConstantParser<P, T>;
    KindParser<P, K>;
    ActionParser<P, F>;
    DiscardParser<P>;
    TokenParser<P>;
    ParserBox<R, K>;
    Rule<R, K>;
}
