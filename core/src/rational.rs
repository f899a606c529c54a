//! Exact fractions, as produced by [`RationalParser`](../struct.RationalParser.html).

use core::fmt;

use crate::Integral;


/// The signed integer types that a [`Rational`](struct.Rational.html) can be
/// made of.
pub trait RationalIntegral: Integral + Eq + Ord {
    /// One.
    const ONE: Self;
    /// Ten.
    const TEN: Self;

    /// Multiplication, or `None` on overflow.
    fn mul(self, other: Self) -> Option<Self>;

    /// Addition, or `None` on overflow.
    fn add(self, other: Self) -> Option<Self>;

    /// Division, or `None` on overflow or division by zero.
    fn div(self, other: Self) -> Option<Self>;

    /// Remainder, or `None` on overflow or division by zero.
    fn rem(self, other: Self) -> Option<Self>;

    /// Negation, or `None` on overflow.
    fn neg(self) -> Option<Self>;
}

macro_rules! rational_integral {
    ($($t:ty)+) => { $(
        impl RationalIntegral for $t {
            const ONE: Self = 1;
            const TEN: Self = 10;

            #[inline]
            fn mul(self, other: Self) -> Option<Self> {
                <$t>::checked_mul(self, other)
            }

            #[inline]
            fn add(self, other: Self) -> Option<Self> {
                <$t>::checked_add(self, other)
            }

            #[inline]
            fn div(self, other: Self) -> Option<Self> {
                <$t>::checked_div(self, other)
            }

            #[inline]
            fn rem(self, other: Self) -> Option<Self> {
                <$t>::checked_rem(self, other)
            }

            #[inline]
            fn neg(self) -> Option<Self> {
                <$t>::checked_neg(self)
            }
        }
    )+ };
}

rational_integral!(i8 i16 i32 i64 i128 isize);


/// A fraction that is always in lowest terms with a positive denominator, so
/// equal values are also structurally equal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rational<I> {
    numer: I,
    denom: I,
}

impl<I> Rational<I>
    where I: RationalIntegral,
{
    /// Make `numer / denom` in lowest terms.  Returns `None` when `denom` is
    /// zero or when normalizing would overflow `I`.
    pub fn new(numer: I, denom: I) -> Option<Self> {
        if denom == I::ZERO {
            return None;
        }
        let divisor = gcd(numer, denom)?;
        let (mut numer, mut denom) = (numer.div(divisor)?, denom.div(divisor)?);
        if denom < I::ZERO {
            numer = numer.neg()?;
            denom = denom.neg()?;
        }
        Some(Self { numer, denom })
    }

    /// The whole number `value`.
    #[inline]
    pub fn integer(value: I) -> Self {
        Self { numer: value, denom: I::ONE }
    }

    /// The numerator, which carries the sign.
    #[inline]
    pub fn numer(&self) -> I {
        self.numer
    }

    /// The denominator, which is always positive.
    #[inline]
    pub fn denom(&self) -> I {
        self.denom
    }
}

/// The positive greatest common divisor, where `b` is nonzero.
fn gcd<I>(mut a: I, mut b: I) -> Option<I>
    where I: RationalIntegral,
{
    while b != I::ZERO {
        let r = a.rem(b)?;
        a = b;
        b = r;
    }
    if a < I::ZERO { a.neg() } else { Some(a) }
}

impl<I> fmt::Display for Rational<I>
    where I: RationalIntegral + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == I::ONE {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn reduction() {
        let r = Rational::new(10, 20).unwrap();
        assert_eq!((r.numer(), r.denom()), (1, 2));
        let r = Rational::new(-5, 10).unwrap();
        assert_eq!((r.numer(), r.denom()), (-1, 2));
        let r = Rational::new(3, -9).unwrap();
        assert_eq!((r.numer(), r.denom()), (-1, 3));
        let r = Rational::new(0, 7).unwrap();
        assert_eq!((r.numer(), r.denom()), (0, 1));
        assert_eq!(Rational::new(6, 3), Some(Rational::integer(2)));
    }

    #[test]
    fn edges() {
        assert_eq!(Rational::new(1, 0), None);
        assert_eq!(Rational::<i8>::new(-128, 1).map(|r| r.numer()), Some(-128));
        assert_eq!(Rational::<i8>::new(1, -128), None);
    }

    #[test]
    fn display() {
        assert_eq!(Rational::new(-3, 4).unwrap().to_string(), "-3/4");
        assert_eq!(Rational::integer(12_i64).to_string(), "12");
    }
}
