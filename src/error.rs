use thiserror::Error;

use crate::arith::Int;

/// Errors reported by the computation routines.
///
/// Only out-of-domain inputs fail. A discrete logarithm without a
/// solution or a modular inverse that does not exist are ordinary
/// results, not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("modulus must be positive, got {0}")]
    NonPositiveModulus(Int),

    #[error("exponent must be non-negative, got {0}")]
    NegativeExponent(Int),

    #[error("operand must be non-negative, got {0}")]
    NegativeOperand(Int),

    #[error("intermediate value does not fit into 64 bits")]
    Overflow,

    #[error("prime factor must be at least 2, got {0}")]
    FactorTooSmall(Int),

    #[error("{e} has no inverse modulo {lambda_n}")]
    NoInverse { e: Int, lambda_n: Int },

    #[error("message {m} must lie in [0, {n})")]
    MessageOutOfRange { m: Int, n: Int },

    #[error("sampling range [0, {0}) is empty")]
    EmptyRange(Int),

    #[error("no prime below {max} found after {draws} draws")]
    PrimeSearchExhausted { max: Int, draws: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
