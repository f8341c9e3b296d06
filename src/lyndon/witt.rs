use num_bigint::BigInt;
use num_traits::{Zero, pow};

/// Number of Lyndon words of length exactly `n` over `k` letters.
pub fn witt_dimension(n: usize, k: usize) -> BigInt {
    if n == 0 {
        return BigInt::zero();
    }
    let base = BigInt::from(k);
    let total = (1..=n)
        .filter(|d| n % d == 0)
        .fold(BigInt::zero(), |acc, d| match mobius(d) {
            0 => acc,
            m => acc + BigInt::from(m) * pow(base.clone(), n / d),
        });
    total / BigInt::from(n)
}

fn mobius(mut n: usize) -> i32 {
    let mut result = 1;
    let mut p = 2;
    while p * p <= n {
        if n % p == 0 {
            n /= p;
            if n % p == 0 {
                return 0;
            }
            result = -result;
        }
        p += 1;
    }
    if n > 1 {
        result = -result;
    }
    result
}
