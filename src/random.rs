use rand::rngs::OsRng;
use rand::Rng;

use crate::arith::{is_prime, Int};
use crate::error::{Error, Result};

/// Upper bound on draws in the prime rejection sampler. Far above what
/// prime density requires anywhere a prime exists at all.
const MAX_DRAWS: u32 = 10_000;

/// Returns a uniformly distributed integer from `[0, max)`.
pub fn random_number(max: Int) -> Result<Int> {
    if max <= 0 {
        return Err(Error::EmptyRange(max));
    }
    Ok(OsRng.gen_range(0..max))
}

/// Returns a random prime below `max` by rejection sampling: redraw
/// until `is_prime` accepts a candidate.
///
/// Bounded by `MAX_DRAWS` so ranges without primes (any `max <= 2`)
/// fail explicitly instead of looping forever.
pub fn random_prime(max: Int) -> Result<Int> {
    if max <= 2 {
        return Err(Error::PrimeSearchExhausted { max, draws: 0 });
    }
    for _ in 0..MAX_DRAWS {
        let candidate = random_number(max)?;
        if is_prime(candidate) {
            return Ok(candidate);
        }
    }
    Err(Error::PrimeSearchExhausted {
        max,
        draws: MAX_DRAWS,
    })
}
