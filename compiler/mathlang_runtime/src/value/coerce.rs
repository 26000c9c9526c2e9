//! Numeric coercion along the integer → real → complex ladder.

use num_complex::Complex64;

use super::Scalar;

/// A scalar after numeric promotion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Numeric {
    Int(i64),
    Real(f64),
    Complex(Complex64),
}

impl Numeric {
    /// Position on the promotion ladder.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Numeric::Int(_) => 0,
            Numeric::Real(_) => 1,
            Numeric::Complex(_) => 2,
        }
    }

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::Bool(b) => Some(Numeric::Int(i64::from(*b))),
            Scalar::Int(n) => Some(Numeric::Int(*n)),
            Scalar::Real(r) => Some(Numeric::Real(*r)),
            Scalar::Complex(c) => Some(Numeric::Complex(*c)),
            Scalar::Str(_) | Scalar::Date(_) | Scalar::DateTime(_) => None,
        }
    }

    fn promote(self, rank: u8) -> Self {
        match (self, rank) {
            (Numeric::Int(n), 1) => Numeric::Real(n as f64),
            (Numeric::Int(n), 2) => Numeric::Complex(Complex64::new(n as f64, 0.0)),
            (Numeric::Real(r), 2) => Numeric::Complex(Complex64::new(r, 0.0)),
            (same, _) => same,
        }
    }

    /// Value lifted to the top of the ladder.
    pub fn to_complex(self) -> Complex64 {
        match self {
            Numeric::Int(n) => Complex64::new(n as f64, 0.0),
            Numeric::Real(r) => Complex64::new(r, 0.0),
            Numeric::Complex(c) => c,
        }
    }

    pub fn into_scalar(self) -> Scalar {
        match self {
            Numeric::Int(n) => Scalar::Int(n),
            Numeric::Real(r) => Scalar::Real(r),
            Numeric::Complex(c) => Scalar::Complex(c),
        }
    }
}

/// Promote two scalars to a common numeric type.
///
/// If either side is complex both become complex; otherwise if either is
/// real both become real; otherwise both stay integers. Booleans enter as
/// integers. Returns `None` when either side is not numeric.
pub fn coerce_numeric(a: &Scalar, b: &Scalar) -> Option<(Numeric, Numeric)> {
    let a = Numeric::from_scalar(a)?;
    let b = Numeric::from_scalar(b)?;
    let rank = a.rank().max(b.rank());
    Some((a.promote(rank), b.promote(rank)))
}
