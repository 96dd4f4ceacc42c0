use num_bigint::BigUint;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberTheoryError {
    #[error("Factorial is not defined for negative numbers")]
    NegativeFactorial(i64),
}

/// Trial division up to `floor(sqrt(n))`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}

/// Exact for every non-negative `n`.
pub fn factorial(n: i64) -> Result<BigUint, NumberTheoryError> {
    if n < 0 {
        return Err(NumberTheoryError::NegativeFactorial(n));
    }

    Ok((2..=n as u64).fold(BigUint::from(1u32), |acc, x| acc * x))
}

/// Euclid's algorithm. The result is always non-negative.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Zero when either input is zero.
pub fn lcm(a: i64, b: i64) -> u128 {
    if a == 0 || b == 0 {
        return 0;
    }

    let divisor = gcd(a, b) as u128;
    a.unsigned_abs() as u128 / divisor * b.unsigned_abs() as u128
}
