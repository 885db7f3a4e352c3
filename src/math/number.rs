//! Number theory helpers on `i64`.

use crate::{Error, Result};

/// Greatest common divisor, always non-negative
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, always non-negative
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b) * b).abs()
}

/// GCD of all values; zero for an empty slice
pub fn gcd_all(values: &[i64]) -> i64 {
    values.iter().fold(0, |acc, &v| gcd(acc, v))
}

/// LCM of all values; one for an empty slice
pub fn lcm_all(values: &[i64]) -> i64 {
    values.iter().fold(1, |acc, &v| lcm(acc, v))
}

/// Remainder in `[0, m)`, unlike `%` which keeps the sign of `a`
pub fn modulo(a: i64, m: i64) -> i64 {
    a.rem_euclid(m)
}

/// `base^exp mod m` by binary exponentiation
pub fn mod_pow(base: i64, mut exp: u64, m: i64) -> i64 {
    let m = i128::from(m);
    let mut result: i128 = 1 % m;
    let mut base = i128::from(base).rem_euclid(m);
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        exp >>= 1;
        base = base * base % m;
    }
    result as i64
}

/// Inverse of `a` modulo the prime `p` (Fermat's little theorem)
pub fn mod_inverse(a: i64, p: i64) -> i64 {
    mod_pow(a, (p - 2) as u64, p)
}

/// Returns `(g, x, y)` with `a*x + b*y = g = gcd(a, b)`
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if b == 0 {
        return (a, 1, 0);
    }
    let (g, x, y) = extended_gcd(b, a % b);
    (g, y, x - (a / b) * y)
}

/// Smallest non-negative `x` with `x = a1 (mod m1)` and `x = a2 (mod m2)`
pub fn crt(a1: i64, m1: i64, a2: i64, m2: i64) -> Result<i64> {
    let (g, p, _) = extended_gcd(m1, m2);
    if (a2 - a1) % g != 0 {
        return Err(Error::NoSolution);
    }
    let lcm = m1 / g * m2;
    let k = i128::from((a2 - a1) / g) * i128::from(p) % i128::from(m2 / g);
    let x = i128::from(a1) + i128::from(m1) * k;
    Ok(x.rem_euclid(i128::from(lcm)) as i64)
}

/// Chains [`crt`] over pairs of `(remainder, modulus)`
pub fn crt_all(congruences: &[(i64, i64)]) -> Result<i64> {
    let Some((&(mut result, mut modulus), rest)) = congruences.split_first() else {
        return Err(Error::NoSolution);
    };
    for &(remainder, m) in rest {
        result = crt(result, modulus, remainder, m)?;
        modulus = lcm(modulus, m);
    }
    Ok(result)
}

pub fn factorial(n: u32) -> u64 {
    (2..=u64::from(n)).product()
}

/// Binomial coefficient `C(n, k)`; zero when `k > n`
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // Each intermediate product is itself a binomial coefficient, so the division is exact
    (0..k).fold(1u128, |acc, i| acc * u128::from(n - i) / u128::from(i + 1)) as u64
}

pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// `1 + 2 + ... + n`
pub fn triangle_number(n: i64) -> i64 {
    n * (n + 1) / 2
}

/// `1² + 2² + ... + n²`
pub fn sum_of_squares(n: i64) -> i64 {
    n * (n + 1) * (2 * n + 1) / 6
}

/// -1, 0 or 1
pub fn sign(n: i64) -> i64 {
    n.signum()
}

pub fn clamp<T: Ord>(value: T, min: T, max: T) -> T {
    value.clamp(min, max)
}
