//! Atomic values.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use num_complex::Complex64;

/// A single atomic value.
///
/// Equality and hashing are structural on the wrapped datum. Floating-point
/// parts compare by bit pattern, so `Eq` and `Hash` stay consistent; the
/// language-level `==` goes through numeric coercion instead.
#[derive(Clone, Debug)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Real(f64),
    Complex(Complex64),
    Str(Rc<str>),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Scalar {
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "Boolean",
            Scalar::Int(_) => "Integer",
            Scalar::Real(_) => "Float",
            Scalar::Complex(_) => "Complex",
            Scalar::Str(_) => "String",
            Scalar::Date(_) => "Date",
            Scalar::DateTime(_) => "DateTime",
        }
    }

    /// Integer, real, or complex. Booleans are not numeric here even though
    /// they take part in arithmetic.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Scalar::Int(_) | Scalar::Real(_) | Scalar::Complex(_))
    }

    /// Value as `f64`; booleans count as 0/1, complex and non-numeric as `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Bool(b) => Some(f64::from(u8::from(*b))),
            Scalar::Int(n) => Some(*n as f64),
            Scalar::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Value as `i64` for integers and booleans.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Bool(b) => Some(i64::from(*b)),
            Scalar::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex64> {
        match self {
            Scalar::Complex(c) => Some(*c),
            other => other.as_f64().map(|re| Complex64::new(re, 0.0)),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Booleans use their own value, numbers are falsy iff zero, strings
    /// iff empty. Dates are always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Int(n) => *n != 0,
            Scalar::Real(r) => *r != 0.0,
            Scalar::Complex(c) => c.re != 0.0 || c.im != 0.0,
            Scalar::Str(s) => !s.is_empty(),
            Scalar::Date(_) | Scalar::DateTime(_) => true,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Real(a), Scalar::Real(b)) => a.to_bits() == b.to_bits(),
            (Scalar::Complex(a), Scalar::Complex(b)) => {
                a.re.to_bits() == b.re.to_bits() && a.im.to_bits() == b.im.to_bits()
            }
            (Scalar::Str(a), Scalar::Str(b)) => a == b,
            (Scalar::Date(a), Scalar::Date(b)) => a == b,
            (Scalar::DateTime(a), Scalar::DateTime(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Scalar::Bool(b) => b.hash(state),
            Scalar::Int(n) => n.hash(state),
            Scalar::Real(r) => r.to_bits().hash(state),
            Scalar::Complex(c) => {
                c.re.to_bits().hash(state);
                c.im.to_bits().hash(state);
            }
            Scalar::Str(s) => s.hash(state),
            Scalar::Date(d) => d.hash(state),
            Scalar::DateTime(dt) => dt.hash(state),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Real(r) => f.write_str(&format_real(*r)),
            Scalar::Complex(c) => f.write_str(&format_complex(*c)),
            Scalar::Str(s) => f.write_str(s),
            Scalar::Date(d) => write!(f, "{d}"),
            Scalar::DateTime(dt) => write!(f, "{dt}"),
        }
    }
}

/// Integral reals print as the integer they hold; others use [`float_repr`].
pub(crate) fn format_real(r: f64) -> String {
    if r.is_finite() && r.fract() == 0.0 {
        // Exact below 2^127.
        if r.abs() < i128::MAX as f64 {
            return format!("{}", r as i128);
        }
        return format!("{r}");
    }
    float_repr(r)
}

/// Shortest round-trip text. Exponents outside `-4..16` switch to
/// scientific notation with a signed, two-digit exponent (`1e-07`,
/// `1.5e+16`); fixed notation always carries a fractional part.
pub(crate) fn float_repr(r: f64) -> String {
    if r.is_nan() {
        return "nan".to_string();
    }
    if r.is_infinite() {
        return if r > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let scientific = format!("{r:e}");
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return scientific;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if (-4..16).contains(&exp) {
        let fixed = format!("{r}");
        if fixed.contains('.') {
            fixed
        } else {
            format!("{fixed}.0")
        }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}

fn format_complex(c: Complex64) -> String {
    if c.re == 0.0 {
        format!("{}i", float_repr(c.im))
    } else if c.im >= 0.0 {
        format!("{} + {}i", float_repr(c.re), float_repr(c.im))
    } else {
        format!("{} - {}i", float_repr(c.re), float_repr(-c.im))
    }
}
