//! # Operator implementations
//!
//! Standard operations on the rational type. Each operation computes the textbook
//! cross-multiplication formula and routes the outcome through the canonicalizing constructor.
use std::fmt;

use crate::data::number_types::rational::Rational;

mod creation {
    use num::{BigInt, One};

    use crate::data::number_types::rational::Rational;

    impl From<i64> for Rational {
        fn from(value: i64) -> Self {
            // An integer is already canonical over denominator one.
            Self {
                numerator: BigInt::from(value),
                denominator: BigInt::one(),
            }
        }
    }
}

mod field {
    mod add {
        use std::iter::Sum;
        use std::ops::{Add, AddAssign};

        use num::Zero;

        use crate::data::number_types::rational::Rational;

        impl Add for &Rational {
            type Output = Rational;

            fn add(self, rhs: Self) -> Self::Output {
                Rational::normalized(
                    &self.numerator * &rhs.denominator + &self.denominator * &rhs.numerator,
                    &self.denominator * &rhs.denominator,
                )
            }
        }

        impl Add for Rational {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Add::add(&self, &rhs)
            }
        }

        impl Add<&Rational> for Rational {
            type Output = Self;

            fn add(self, rhs: &Self) -> Self::Output {
                Add::add(&self, rhs)
            }
        }

        impl Add<Rational> for &Rational {
            type Output = Rational;

            fn add(self, rhs: Rational) -> Self::Output {
                Add::add(self, &rhs)
            }
        }

        impl AddAssign for Rational {
            fn add_assign(&mut self, rhs: Self) {
                *self = &*self + &rhs;
            }
        }

        impl AddAssign<&Rational> for Rational {
            fn add_assign(&mut self, rhs: &Self) {
                *self = &*self + rhs;
            }
        }

        impl Sum for Rational {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::zero(), |total, term| total + term)
            }
        }
    }

    mod sub {
        use std::ops::{Sub, SubAssign};

        use crate::data::number_types::rational::Rational;

        impl Sub for &Rational {
            type Output = Rational;

            fn sub(self, rhs: Self) -> Self::Output {
                Rational::normalized(
                    &self.numerator * &rhs.denominator - &self.denominator * &rhs.numerator,
                    &self.denominator * &rhs.denominator,
                )
            }
        }

        impl Sub for Rational {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Sub::sub(&self, &rhs)
            }
        }

        impl Sub<&Rational> for Rational {
            type Output = Self;

            fn sub(self, rhs: &Self) -> Self::Output {
                Sub::sub(&self, rhs)
            }
        }

        impl Sub<Rational> for &Rational {
            type Output = Rational;

            fn sub(self, rhs: Rational) -> Self::Output {
                Sub::sub(self, &rhs)
            }
        }

        impl SubAssign for Rational {
            fn sub_assign(&mut self, rhs: Self) {
                *self = &*self - &rhs;
            }
        }

        impl SubAssign<&Rational> for Rational {
            fn sub_assign(&mut self, rhs: &Self) {
                *self = &*self - rhs;
            }
        }
    }

    mod mul {
        use std::ops::{Mul, MulAssign};

        use crate::data::number_types::rational::Rational;

        impl Mul for &Rational {
            type Output = Rational;

            fn mul(self, rhs: Self) -> Self::Output {
                Rational::normalized(
                    &self.numerator * &rhs.numerator,
                    &self.denominator * &rhs.denominator,
                )
            }
        }

        impl Mul for Rational {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                Mul::mul(&self, &rhs)
            }
        }

        impl Mul<&Rational> for Rational {
            type Output = Self;

            fn mul(self, rhs: &Self) -> Self::Output {
                Mul::mul(&self, rhs)
            }
        }

        impl Mul<Rational> for &Rational {
            type Output = Rational;

            fn mul(self, rhs: Rational) -> Self::Output {
                Mul::mul(self, &rhs)
            }
        }

        impl MulAssign for Rational {
            fn mul_assign(&mut self, rhs: Self) {
                *self = &*self * &rhs;
            }
        }

        impl MulAssign<&Rational> for Rational {
            fn mul_assign(&mut self, rhs: &Self) {
                *self = &*self * rhs;
            }
        }
    }

    mod div {
        use std::ops::{Div, DivAssign};

        use num::Zero;

        use crate::data::number_types::rational::Rational;

        impl Div for &Rational {
            type Output = Rational;

            fn div(self, rhs: Self) -> Self::Output {
                assert!(!rhs.numerator.is_zero(), "division by zero");

                Rational::normalized(
                    &self.numerator * &rhs.denominator,
                    &self.denominator * &rhs.numerator,
                )
            }
        }

        impl Div for Rational {
            type Output = Self;

            fn div(self, rhs: Self) -> Self::Output {
                Div::div(&self, &rhs)
            }
        }

        impl Div<&Rational> for Rational {
            type Output = Self;

            fn div(self, rhs: &Self) -> Self::Output {
                Div::div(&self, rhs)
            }
        }

        impl Div<Rational> for &Rational {
            type Output = Rational;

            fn div(self, rhs: Rational) -> Self::Output {
                Div::div(self, &rhs)
            }
        }

        impl DivAssign for Rational {
            fn div_assign(&mut self, rhs: Self) {
                *self = &*self / &rhs;
            }
        }

        impl DivAssign<&Rational> for Rational {
            fn div_assign(&mut self, rhs: &Self) {
                *self = &*self / rhs;
            }
        }
    }

    mod neg {
        use std::ops::Neg;

        use crate::data::number_types::rational::Rational;

        impl Neg for Rational {
            type Output = Self;

            fn neg(self) -> Self::Output {
                // Negation preserves canonical form.
                Self {
                    numerator: -self.numerator,
                    denominator: self.denominator,
                }
            }
        }

        impl Neg for &Rational {
            type Output = Rational;

            fn neg(self) -> Self::Output {
                Neg::neg(self.clone())
            }
        }
    }

    mod identities {
        use num::{BigInt, One, Zero};

        use crate::data::number_types::rational::Rational;

        impl Zero for Rational {
            fn zero() -> Self {
                Self {
                    numerator: BigInt::zero(),
                    denominator: BigInt::one(),
                }
            }

            fn set_zero(&mut self) {
                *self = Self::zero();
            }

            fn is_zero(&self) -> bool {
                self.numerator.is_zero()
            }
        }

        impl One for Rational {
            fn one() -> Self {
                Self {
                    numerator: BigInt::one(),
                    denominator: BigInt::one(),
                }
            }

            fn set_one(&mut self) {
                *self = Self::one();
            }

            fn is_one(&self) -> bool {
                self.numerator.is_one() && self.denominator.is_one()
            }
        }
    }

    mod order {
        use std::cmp::Ordering;

        use crate::data::number_types::rational::Rational;

        impl Ord for Rational {
            fn cmp(&self, other: &Self) -> Ordering {
                // Denominators are strictly positive, so the sign of the cross-multiplied
                // difference decides the ordering.
                (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
            }
        }

        impl PartialOrd for Rational {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use num::One;

        if self.denominator.is_one() {
            self.numerator.fmt(f)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
