//! Lazy arithmetic ranges.

use std::fmt;
use std::iter::FusedIterator;

use super::scalar::format_real;
use super::Scalar;

/// Half-open range `[start, end)` advancing by `step`.
///
/// Never materialized: length and indexed access are computed directly
/// from the bounds. Elements are integers when the range was built from
/// integers, reals otherwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
    step: f64,
    integral: bool,
}

impl Interval {
    /// Integer range. `step` must be non-zero.
    pub fn integers(start: i64, end: i64, step: i64) -> Self {
        Interval {
            start: start as f64,
            end: end as f64,
            step: step as f64,
            integral: true,
        }
    }

    /// Real-valued range. `step` must be non-zero.
    pub fn reals(start: f64, end: f64, step: f64) -> Self {
        Interval {
            start,
            end,
            step,
            integral: false,
        }
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[inline]
    pub fn is_integral(&self) -> bool {
        self.integral
    }

    /// `ceil((end - start) / step)`, zero when the step points away from `end`.
    pub fn len(&self) -> usize {
        let span = if self.step > 0.0 {
            self.end - self.start
        } else {
            self.start - self.end
        };
        let count = (span / self.step.abs()).ceil();
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`; negative indices count from the end.
    pub fn get(&self, index: i64) -> Option<Scalar> {
        let len = i64::try_from(self.len()).ok()?;
        let index = if index < 0 { len + index } else { index };
        if !(0..len).contains(&index) {
            return None;
        }
        Some(self.element(index))
    }

    fn element(&self, index: i64) -> Scalar {
        let value = self.start + index as f64 * self.step;
        if self.integral {
            Scalar::Int(value as i64)
        } else {
            Scalar::Real(value)
        }
    }

    /// Restartable forward iteration; each call starts from the first element.
    pub fn iter(&self) -> IntervalIter {
        IntervalIter {
            interval: *self,
            next: 0,
            len: self.len(),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = format_real(self.start);
        let end = format_real(self.end);
        if self.step == 1.0 {
            write!(f, "[{start}..{end})")
        } else {
            write!(f, "[{start}..{end} step {})", format_real(self.step))
        }
    }
}

/// Iterator over an [`Interval`], driven by index.
#[derive(Clone, Debug)]
pub struct IntervalIter {
    interval: Interval,
    next: usize,
    len: usize,
}

impl Iterator for IntervalIter {
    type Item = Scalar;

    fn next(&mut self) -> Option<Scalar> {
        if self.next >= self.len {
            return None;
        }
        let item = self.interval.element(i64::try_from(self.next).ok()?);
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IntervalIter {}

impl FusedIterator for IntervalIter {}

impl IntoIterator for &Interval {
    type Item = Scalar;
    type IntoIter = IntervalIter;

    fn into_iter(self) -> IntervalIter {
        self.iter()
    }
}
