//! Runtime values for the MathLang interpreter.
//!
//! `Value` is a closed set of variants matched exhaustively wherever it is
//! consumed. Values are immutable once built: collection contents sit
//! behind `Rc<[T]>`, and operations that "modify" a collection return a
//! new one. Heap variants are created through the factory methods
//! (`Value::list`, `Value::string`, ...), never by hand.

mod coerce;
mod interval;
mod plot;
mod scalar;

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use mathlang_ir::{expr_to_string, Expr, LambdaExpr};
use num_complex::Complex64;

use crate::environment::Environment;

pub use coerce::{coerce_numeric, Numeric};
pub use interval::{Interval, IntervalIter};
pub use plot::{HistogramData, PlotData2D, PlotData3D, ScatterData};
pub use scalar::Scalar;

/// Collections longer than this are displayed abbreviated.
const DISPLAY_LIMIT: usize = 10;

/// Runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    /// Homogeneous numeric scalars.
    Vector(Rc<[Scalar]>),
    /// Heterogeneous values.
    List(Rc<[Value]>),
    Interval(Interval),
    /// Parameters and body only; no captured environment.
    Lambda(Rc<LambdaExpr>),
    /// Deferred argument of a lazy operation position.
    Thunk(Rc<Thunk>),
    Error(Rc<str>),
    Notification(Rc<str>),
    Plot2D(Rc<PlotData2D>),
    Plot3D(Rc<PlotData3D>),
    Histogram(Rc<HistogramData>),
    Scatter(Rc<ScatterData>),
}

/// An unevaluated expression paired with the environment it was written in.
///
/// Forcing re-evaluates every time; nothing is memoized.
pub struct Thunk {
    expr: Expr,
    env: Environment,
}

impl Thunk {
    #[inline]
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thunk").field("expr", &self.expr).finish_non_exhaustive()
    }
}

/// Thunks are equal only to themselves.
impl PartialEq for Thunk {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

// Factory methods

impl Value {
    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }

    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Scalar(Scalar::Int(n))
    }

    #[inline]
    pub fn real(r: f64) -> Self {
        Value::Scalar(Scalar::Real(r))
    }

    #[inline]
    pub fn complex(re: f64, im: f64) -> Self {
        Value::Scalar(Scalar::Complex(Complex64::new(re, im)))
    }

    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Scalar(Scalar::Str(Rc::from(s.as_ref())))
    }

    #[inline]
    pub fn date(d: NaiveDate) -> Self {
        Value::Scalar(Scalar::Date(d))
    }

    #[inline]
    pub fn datetime(dt: NaiveDateTime) -> Self {
        Value::Scalar(Scalar::DateTime(dt))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Rc::from(items))
    }

    pub fn vector(items: Vec<Scalar>) -> Self {
        Value::Vector(Rc::from(items))
    }

    /// Vector of reals.
    pub fn real_vector(items: impl IntoIterator<Item = f64>) -> Self {
        Value::Vector(items.into_iter().map(Scalar::Real).collect())
    }

    pub fn lambda(params: Vec<String>, body: Expr) -> Self {
        Value::Lambda(Rc::new(LambdaExpr { params, body }))
    }

    pub fn thunk(expr: Expr, env: Environment) -> Self {
        Value::Thunk(Rc::new(Thunk { expr, env }))
    }

    pub fn error(message: impl AsRef<str>) -> Self {
        Value::Error(Rc::from(message.as_ref()))
    }

    pub fn notification(message: impl AsRef<str>) -> Self {
        Value::Notification(Rc::from(message.as_ref()))
    }

    pub fn plot2d(data: PlotData2D) -> Self {
        Value::Plot2D(Rc::new(data))
    }

    pub fn plot3d(data: PlotData3D) -> Self {
        Value::Plot3D(Rc::new(data))
    }

    pub fn histogram(data: HistogramData) -> Self {
        Value::Histogram(Rc::new(data))
    }

    pub fn scatter(data: ScatterData) -> Self {
        Value::Scatter(Rc::new(data))
    }
}

// Accessors

impl Value {
    #[inline]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Integer scalars only; booleans are rejected.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Scalar(Scalar::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Numeric (or boolean) scalar as `f64`.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Scalar::as_f64)
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    #[inline]
    pub fn as_lambda(&self) -> Option<&LambdaExpr> {
        match self {
            Value::Lambda(l) => Some(l),
            _ => None,
        }
    }

    /// Scalars follow [`Scalar::is_truthy`]; every other value is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Scalar(s) => s.is_truthy(),
            _ => true,
        }
    }

    /// Type name shown next to results.
    pub fn type_name(&self) -> Cow<'static, str> {
        match self {
            Value::Scalar(s) => Cow::Borrowed(s.type_name()),
            Value::Vector(items) => {
                let elem = items.first().map_or("empty", Scalar::type_name);
                Cow::Owned(format!("Vector ({elem})"))
            }
            Value::List(items) => Cow::Owned(format!("List ({} items)", items.len())),
            Value::Interval(_) => Cow::Borrowed("Interval"),
            Value::Lambda(l) => Cow::Owned(format!("Lambda ({} params)", l.arity())),
            Value::Thunk(_) => Cow::Borrowed("Thunk"),
            Value::Error(_) => Cow::Borrowed("Error"),
            Value::Notification(_) => Cow::Borrowed("Notification"),
            Value::Plot2D(_) => Cow::Borrowed("PlotData2D"),
            Value::Plot3D(_) => Cow::Borrowed("PlotData3D"),
            Value::Histogram(_) => Cow::Borrowed("HistogramData"),
            Value::Scatter(_) => Cow::Borrowed("ScatterData"),
        }
    }

    /// User-facing rendering; same as `to_string()`.
    #[inline]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{s}"),
            Value::Vector(items) => write_sequence(f, items),
            Value::List(items) => write_sequence(f, items),
            Value::Interval(interval) => write!(f, "{interval}"),
            Value::Lambda(lambda) => {
                let body = expr_to_string(&lambda.body);
                match lambda.params.as_slice() {
                    [] => write!(f, "() -> {body}"),
                    [single] => write!(f, "{single} -> {body}"),
                    params => write!(f, "({}) -> {body}", params.join(", ")),
                }
            }
            Value::Thunk(_) => f.write_str("<deferred>"),
            Value::Error(message) => write!(f, "Error: {message}"),
            Value::Notification(message) => f.write_str(message),
            Value::Plot2D(p) => write!(f, "[Plot: {} points]", p.x_values.len()),
            Value::Plot3D(p) => write!(
                f,
                "[3D Plot: {}x{} grid]",
                p.x_values.len(),
                p.y_values.len()
            ),
            Value::Histogram(h) => {
                write!(f, "[Histogram: {} values, {} bins]", h.values.len(), h.bins)
            }
            Value::Scatter(s) => write!(f, "[Scatter: {} points]", s.x_values.len()),
        }
    }
}

/// `[a, b, c]`, or `[a, b, c, d, e, ..., x, y, z]` past the display limit.
fn write_sequence<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    if items.len() <= DISPLAY_LIMIT {
        write_joined(f, items)?;
    } else {
        write_joined(f, &items[..5])?;
        f.write_str(", ..., ")?;
        write_joined(f, &items[items.len() - 3..])?;
    }
    f.write_str("]")
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
