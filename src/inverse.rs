use crate::arith::Int;
use crate::error::{Error, Result};

/// Modular multiplicative inverse of `e` modulo `phi`, by the
/// iterative extended Euclidean algorithm.
///
/// Returns `x` with `(e * x) mod phi == 1` whenever `gcd(e, phi) == 1`,
/// normalized into `[0, phi)`. A modulus of one yields 0 ("no
/// meaningful inverse"). Coprimality of the operands is NOT checked
/// here: when `gcd(e, phi) != 1` the returned value is unspecified and
/// may happen to be 0. An inverse is therefore valid iff
/// `gcd(e, phi) == 1` AND the returned value is nonzero (for
/// `phi > 1`); callers that must not proceed on a bogus inverse combine
/// both checks, as `RsaKey::derive` does.
pub fn mod_inverse(e: Int, phi: Int) -> Result<Int> {
    if phi <= 0 {
        return Err(Error::NonPositiveModulus(phi));
    }
    if e < 0 {
        return Err(Error::NegativeOperand(e));
    }
    if phi == 1 {
        return Ok(0);
    }

    // Bézout coefficients in 128 bits; q * y stays well inside that
    // even for operands at the top of the supported range.
    let m0 = phi as i128;
    let (mut e, mut phi) = (e as i128, phi as i128);
    let (mut x, mut y) = (1_i128, 0_i128);

    while e > 1 {
        if phi == 0 {
            // gcd(e, phi) > 1, nothing meaningful left to compute
            break;
        }
        let q = e / phi;
        (e, phi) = (phi, e % phi);
        (x, y) = (y, x - q * y);
    }

    if x < 0 {
        x += m0;
    }
    Ok(x as Int)
}
