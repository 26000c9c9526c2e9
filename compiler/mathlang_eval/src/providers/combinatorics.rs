//! Integer combinatorics and number theory.
//!
//! Results that overflow `i64` are returned as reals, the same way integer
//! arithmetic overflows.

use mathlang_runtime::{
    argument_error, Environment, EvalError, EvalResult, Executor, Operation, Provider, Value,
};

use super::{count, integer};

/// `170!` is the largest factorial a real can hold.
const MAX_FACTORIAL: u64 = 170;
const MAX_FIBONACCI: u64 = 1000;
const MAX_SIEVE: u64 = 1_000_000;

pub struct CombinatoricsProvider;

impl Provider for CombinatoricsProvider {
    fn name(&self) -> &'static str {
        "Combinatorics"
    }

    fn operations(&self) -> Vec<Operation> {
        vec![
            Operation::new("Factorial", "Factorial", "Combinatorics/Basic", factorial)
                .with_description("Returns n! (n factorial)")
                .required("n", "Non-negative integer"),
            Operation::new("Permutations", "Permutations", "Combinatorics/Counting", permutations)
                .with_description("Returns the number of ways to arrange r items from n (nPr)")
                .required("n", "Total number of items")
                .required("r", "Number of items to arrange"),
            Operation::new("Combinations", "Combinations", "Combinatorics/Counting", combinations)
                .with_description("Returns the number of ways to choose r items from n (nCr)")
                .required("n", "Total number of items")
                .required("r", "Number of items to choose"),
            Operation::new("BinomialCoeff", "Binomial Coefficient", "Combinatorics/Basic", binomial_coeff)
                .with_description("Returns n choose k; 0 when k exceeds n")
                .required("n", "Total number")
                .required("k", "Selection number"),
            Operation::new("Fibonacci", "Fibonacci", "Combinatorics/Sequences", fibonacci)
                .with_description("Returns the nth Fibonacci number")
                .required("n", "Index in the sequence (0-based)"),
            Operation::new("FibonacciList", "Fibonacci List", "Combinatorics/Sequences", fibonacci_list)
                .with_description("Returns the first n Fibonacci numbers")
                .required("n", "How many numbers to generate"),
            Operation::new("GCD", "Greatest Common Divisor", "Combinatorics/NumberTheory", gcd)
                .with_description("Returns the greatest common divisor of two integers")
                .required("a", "First integer")
                .required("b", "Second integer"),
            Operation::new("LCM", "Least Common Multiple", "Combinatorics/NumberTheory", lcm)
                .with_description("Returns the least common multiple of two integers")
                .required("a", "First integer")
                .required("b", "Second integer"),
            Operation::new("IsPrime", "Is Prime", "Combinatorics/NumberTheory", is_prime)
                .with_description("Returns 1 if n is prime, 0 otherwise")
                .required("n", "Integer to test"),
            Operation::new("PrimeFactors", "Prime Factors", "Combinatorics/NumberTheory", prime_factors)
                .with_description("Returns the prime factorization of n as a list")
                .required("n", "Positive integer"),
            Operation::new("Primes", "Primes Up To", "Combinatorics/NumberTheory", primes)
                .with_description("Returns every prime up to and including n")
                .required("n", "Upper limit"),
        ]
    }
}

/// Exact integer while the product fits, real afterwards.
#[derive(Copy, Clone)]
enum Product {
    Exact(i64),
    Approx(f64),
}

impl Product {
    fn times(self, factor: u64) -> Self {
        match self {
            Product::Exact(n) => i64::try_from(factor)
                .ok()
                .and_then(|f| n.checked_mul(f))
                .map_or(Product::Approx(n as f64 * factor as f64), Product::Exact),
            Product::Approx(r) => Product::Approx(r * factor as f64),
        }
    }

    fn into_value(self) -> Value {
        match self {
            Product::Exact(n) => Value::int(n),
            Product::Approx(r) => Value::real(r),
        }
    }
}

fn n_and_r(op: &str, args: &[Value]) -> Result<(u64, u64), EvalError> {
    let n = count(op, &args[0])?;
    let r = count(op, &args[1])?;
    if r > n {
        return Err(argument_error(format!("r ({r}) cannot be greater than n ({n})")));
    }
    Ok((n, r))
}

fn factorial(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let n = count("Factorial", &args[0])?;
    if n > MAX_FACTORIAL {
        return Err(argument_error(format!(
            "Factorial too large: {n}! exceeds floating point range"
        )));
    }
    Ok((2..=n).fold(Product::Exact(1), Product::times).into_value())
}

/// n! / (n - r)!
fn permutations(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let (n, r) = n_and_r("Permutations", args)?;
    Ok(((n - r + 1)..=n).fold(Product::Exact(1), Product::times).into_value())
}

fn combinations(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let (n, r) = n_and_r("Combinations", args)?;
    Ok(choose(n, r))
}

fn binomial_coeff(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let n = count("BinomialCoeff", &args[0])?;
    let k = count("BinomialCoeff", &args[1])?;
    if k > n {
        return Ok(Value::int(0));
    }
    Ok(choose(n, k))
}

/// `n` choose `r` for `r <= n`.
fn choose(n: u64, r: u64) -> Value {
    let r = r.min(n - r);
    // Multiplicative formula; every intermediate quotient is exact.
    let mut exact: Option<u128> = Some(1);
    let mut approx = 1.0_f64;
    for i in 1..=r {
        let numerator = n - r + i;
        exact = exact
            .and_then(|acc| acc.checked_mul(u128::from(numerator)))
            .map(|acc| acc / u128::from(i));
        approx = approx * numerator as f64 / i as f64;
    }
    match exact.and_then(|c| i64::try_from(c).ok()) {
        Some(c) => Value::int(c),
        None => Value::real(approx.round()),
    }
}

fn fibonacci(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let n = count("Fibonacci", &args[0])?;
    if n > MAX_FIBONACCI {
        return Err(argument_error(format!("Fibonacci index too large: {n}")));
    }
    let mut sequence = FibonacciSeq::default();
    for _ in 0..n {
        sequence.step();
    }
    Ok(sequence.current.into_value())
}

fn fibonacci_list(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let n = count("FibonacciList", &args[0])?;
    if n == 0 {
        return Err(argument_error("n must be positive, got 0"));
    }
    if n > MAX_FIBONACCI {
        return Err(argument_error(format!("Too many Fibonacci numbers requested: {n}")));
    }
    let mut sequence = FibonacciSeq::default();
    let mut items = Vec::new();
    for _ in 0..n {
        items.push(sequence.current.into_value());
        sequence.step();
    }
    Ok(Value::list(items))
}

/// `current` is F(k), `next` is F(k + 1).
struct FibonacciSeq {
    current: Product,
    next: Product,
}

impl Default for FibonacciSeq {
    fn default() -> Self {
        FibonacciSeq {
            current: Product::Exact(0),
            next: Product::Exact(1),
        }
    }
}

impl FibonacciSeq {
    fn step(&mut self) {
        let sum = match (self.current, self.next) {
            (Product::Exact(x), Product::Exact(y)) => x
                .checked_add(y)
                .map_or(Product::Approx(x as f64 + y as f64), Product::Exact),
            (x, y) => Product::Approx(as_f64(x) + as_f64(y)),
        };
        self.current = self.next;
        self.next = sum;
    }
}

fn as_f64(p: Product) -> f64 {
    match p {
        Product::Exact(n) => n as f64,
        Product::Approx(r) => r,
    }
}

fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn gcd(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let a = integer("GCD", &args[0])?.unsigned_abs();
    let b = integer("GCD", &args[1])?.unsigned_abs();
    let g = gcd_u64(a, b);
    Ok(i64::try_from(g).map_or(Value::real(g as f64), Value::int))
}

fn lcm(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let a = integer("LCM", &args[0])?.unsigned_abs();
    let b = integer("LCM", &args[1])?.unsigned_abs();
    if a == 0 || b == 0 {
        return Ok(Value::int(0));
    }
    let l = u128::from(a / gcd_u64(a, b)) * u128::from(b);
    Ok(i64::try_from(l).map_or(Value::real(l as f64), Value::int))
}

/// Trial division by odd numbers up to √n.
fn is_prime(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let n = integer("IsPrime", &args[0])?;
    let prime = match u64::try_from(n) {
        Ok(n) if n >= 2 => n == 2 || (n % 2 != 0 && !has_odd_divisor(n)),
        _ => false,
    };
    Ok(Value::int(i64::from(prime)))
}

fn has_odd_divisor(n: u64) -> bool {
    let mut d = 3u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return true;
        }
        d += 2;
    }
    false
}

fn prime_factors(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let n = integer("PrimeFactors", &args[0])?;
    let Ok(mut n) = u64::try_from(n) else {
        return Err(argument_error(format!("n must be positive, got {n}")));
    };
    if n == 0 {
        return Err(argument_error("n must be positive, got 0"));
    }
    let mut factors = Vec::new();
    let mut d = 2u64;
    while d.saturating_mul(d) <= n {
        while n % d == 0 {
            factors.push(d);
            n /= d;
        }
        d += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    Ok(Value::list(
        factors
            .into_iter()
            .map(|f| Value::int(f as i64))
            .collect(),
    ))
}

/// Sieve of Eratosthenes.
fn primes(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let n = count("Primes", &args[0])?;
    if n > MAX_SIEVE {
        return Err(argument_error(format!("Upper limit too large: {n}")));
    }
    if n < 2 {
        return Ok(Value::list(Vec::new()));
    }
    let n = n as usize;
    let mut sieve = vec![true; n + 1];
    sieve[0] = false;
    sieve[1] = false;
    let mut i = 2;
    while i * i <= n {
        if sieve[i] {
            for j in (i * i..=n).step_by(i) {
                sieve[j] = false;
            }
        }
        i += 1;
    }
    Ok(Value::list(
        sieve
            .iter()
            .enumerate()
            .filter(|(_, &prime)| prime)
            .map(|(p, _)| Value::int(p as i64))
            .collect(),
    ))
}
