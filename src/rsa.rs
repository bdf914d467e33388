use std::env;

use crate::arith::{gcd, is_prime, lcm, pow_mod, Int};
use crate::error::{Error, Result};
use crate::inverse::mod_inverse;

/// An RSA key tuple for classroom-sized parameters.
///
/// `p` and `q` are expected to be prime; as in the rest of the crate
/// that property is a caller-side `is_prime` check, the derivation
/// only enforces what it can decide locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaKey {
    pub p: Int,
    pub q: Int,
    /// Modulus `n = p * q`.
    pub n: Int,
    /// Carmichael function `lambda(n) = lcm(p - 1, q - 1)`.
    pub lambda_n: Int,
    /// Public exponent.
    pub e: Int,
    /// Private exponent, the inverse of `e` modulo `lambda(n)`.
    pub d: Int,
}

impl RsaKey {
    /// Derives the full key tuple from `p`, `q` and the public
    /// exponent `e`.
    ///
    /// `e` must satisfy `1 < e < lambda(n)` and `gcd(e, lambda(n)) == 1`.
    /// Both halves of the inverse-validity contract (coprimality and a
    /// nonzero inverse) are enforced here, so a returned key always
    /// carries a usable `d`.
    pub fn derive(p: Int, q: Int, e: Int) -> Result<RsaKey> {
        if p < 2 {
            return Err(Error::FactorTooSmall(p));
        }
        if q < 2 {
            return Err(Error::FactorTooSmall(q));
        }

        let n = p.checked_mul(q).ok_or(Error::Overflow)?;
        let lambda_n = lcm(p - 1, q - 1)?;

        if e <= 1 || e >= lambda_n || gcd(e, lambda_n) != 1 {
            return Err(Error::NoInverse { e, lambda_n });
        }
        let d = mod_inverse(e, lambda_n)?;
        if d == 0 {
            return Err(Error::NoInverse { e, lambda_n });
        }

        Ok(RsaKey {
            p,
            q,
            n,
            lambda_n,
            e,
            d,
        })
    }

    /// Encrypts `m` as `m^e mod n`. The message must lie in `[0, n)`.
    pub fn encrypt(&self, m: Int) -> Result<Int> {
        if m < 0 || m >= self.n {
            return Err(Error::MessageOutOfRange { m, n: self.n });
        }
        pow_mod(m, self.e, self.n)
    }

    /// Decrypts `c` as `c^d mod n`.
    pub fn decrypt(&self, c: Int) -> Result<Int> {
        if c < 0 || c >= self.n {
            return Err(Error::MessageOutOfRange { m: c, n: self.n });
        }
        pow_mod(c, self.d, self.n)
    }
}

// -------------- demo binary glue

pub fn read_args(args: env::Args) -> (Int, Int, Int, Int) {
    let args: Vec<String> = args.collect();
    let p = args.get(2).unwrap().parse::<Int>().unwrap();
    let q = args.get(3).unwrap().parse::<Int>().unwrap();
    let e = args.get(4).unwrap().parse::<Int>().unwrap();
    let m = args.get(5).unwrap().parse::<Int>().unwrap();
    (p, q, e, m)
}

pub fn run_rsa(p: Int, q: Int, e: Int, m: Int) {
    if !is_prime(p) {
        println!("note: p = {p} is not prime");
    }
    if !is_prime(q) {
        println!("note: q = {q} is not prime");
    }

    let key = match RsaKey::derive(p, q, e) {
        Ok(key) => key,
        Err(err) => {
            println!("error: {err}");
            return;
        }
    };
    println!("n         = {p} * {q} = {}", key.n);
    println!("lambda(n) = lcm({}, {}) = {}", p - 1, q - 1, key.lambda_n);
    println!("d         = {e}^-1 mod {} = {}", key.lambda_n, key.d);

    let cipher = match key.encrypt(m) {
        Ok(cipher) => cipher,
        Err(err) => {
            println!("error: {err}");
            return;
        }
    };
    println!("cipher    = {m}^{e} mod {} = {cipher}", key.n);

    // decrypt cannot fail here, the cipher is already reduced mod n
    let plain = key.decrypt(cipher).unwrap();
    println!("decrypted = {cipher}^{} mod {} = {plain}", key.d, key.n);
}
