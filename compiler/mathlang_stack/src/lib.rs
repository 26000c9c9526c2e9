//! Stack growth for deeply recursive MathLang programs.
//!
//! User-defined recursion (`f(n) = If(n <= 0, 0, 1 + f(n - 1))`) is plain
//! native recursion through the evaluator, and nested parentheses recurse
//! through the parser. Both wrap their recursive entry points in
//! [`ensure_sufficient_stack`], which moves execution onto a freshly
//! allocated segment when the current one is close to exhausted.
//!
//! Growth is bounded only by memory; a runaway recursion is still fatal, it
//! just fails much later than the host's default thread stack would.
//!
//! On `wasm32` the guard is a passthrough.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one has
/// less than the red zone left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_result_through() {
        let result: Result<i64, String> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn test_nested_sum_far_beyond_default_stack() {
        fn sum_to(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
        }

        assert_eq!(sum_to(200_000), 200_000 * 200_001 / 2);
    }
}
