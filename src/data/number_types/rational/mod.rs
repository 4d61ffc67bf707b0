//! # An exact rational type
//!
//! Arbitrary precision fractions in canonical form. All tableau arithmetic goes through this
//! type; no control decision is ever made on a floating point value.
use num::{BigInt, Integer, Signed, ToPrimitive, Zero};

mod ops;

/// An exact fraction with a canonical representation.
///
/// The denominator is always strictly positive, the fraction is always fully reduced and the
/// canonical zero is `0/1`. Every arithmetic operation yields a new value in canonical form, so
/// structural equality coincides with value equality.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rational {
    /// Carries the sign of the value.
    numerator: BigInt,
    /// Strictly positive.
    denominator: BigInt,
}

impl Rational {
    /// Create a new instance from a numerator and a denominator.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any signed integer.
    /// * `denominator`: Any signed integer except zero.
    ///
    /// # Panics
    ///
    /// When the denominator is zero.
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self::from_big(BigInt::from(numerator), BigInt::from(denominator))
    }

    /// Create a new instance from arbitrary precision parts.
    ///
    /// # Panics
    ///
    /// When the denominator is zero.
    pub fn from_big(numerator: BigInt, denominator: BigInt) -> Self {
        assert!(!denominator.is_zero(), "denominator may not be zero");

        Self::normalized(numerator, denominator)
    }

    /// Bring a fraction with nonzero denominator into canonical form.
    ///
    /// The sign moves into the numerator and both parts are divided by their gcd. The gcd of zero
    /// and any denominator is that denominator, so a zero numerator reduces to the canonical
    /// `0/1` without a special case.
    fn normalized(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        let gcd = numerator.gcd(&denominator);

        Self {
            numerator: numerator / &gcd,
            denominator: denominator / gcd,
        }
    }

    /// The numerator in canonical form.
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The denominator in canonical form. Strictly positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Whether this value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Whether this value is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    /// A best-effort floating point approximation.
    ///
    /// Used for display purposes only; no comparison or pivot decision consults this value.
    pub fn to_f64(&self) -> f64 {
        self.numerator.to_f64().unwrap_or(f64::NAN) / self.denominator.to_f64().unwrap_or(f64::NAN)
    }
}

/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! R {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational::from($value as i64)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational::new($numer as i64, $denom as i64)
    };
}
