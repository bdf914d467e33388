use std::env;

use crate::arith::{is_prime, pow_mod, Int};
use crate::error::Result;
use crate::random::{random_number, random_prime};

/// Parameters shared by both parties: the modulus `p` and the
/// generator `g`. `p` should be prime for the exchange to behave as
/// advertised; that property is a recommendation checked by callers
/// via `is_prime`, not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeParams {
    pub p: Int,
    pub g: Int,
}

/// Everything one party derives during the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Party {
    /// The secret exponent.
    pub private_key: Int,
    /// `g^private mod p`, the value sent to the peer.
    pub public_key: Int,
    /// `peer_public^private mod p`.
    pub shared_secret: Int,
}

/// One complete Diffie-Hellman exchange between Alice and Bob, every
/// derived value recomputed from the four inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyExchange {
    pub params: ExchangeParams,
    pub alice: Party,
    pub bob: Party,
}

impl KeyExchange {
    /// Derives both public keys and both shared secrets from the
    /// private exponents `a` and `b`. The two shared secrets agree for
    /// any inputs in domain; sound parameters additionally make the
    /// secret hard to recover from the public values alone.
    pub fn new(p: Int, g: Int, a: Int, b: Int) -> Result<KeyExchange> {
        let public_a = pow_mod(g, a, p)?;
        let public_b = pow_mod(g, b, p)?;

        Ok(KeyExchange {
            params: ExchangeParams { p, g },
            alice: Party {
                private_key: a,
                public_key: public_a,
                shared_secret: pow_mod(public_b, a, p)?,
            },
            bob: Party {
                private_key: b,
                public_key: public_b,
                shared_secret: pow_mod(public_a, b, p)?,
            },
        })
    }

    /// Draws a random prime modulus plus random generator and private
    /// keys, all below `max`, and derives the exchange from them.
    pub fn random(max: Int) -> Result<KeyExchange> {
        let p = random_prime(max)?;
        let g = random_number(max)?;
        let a = random_number(max)?;
        let b = random_number(max)?;
        Self::new(p, g, a, b)
    }
}

// -------------- demo binary glue

pub fn read_args(args: env::Args) -> (Int, Int, Int, Int) {
    let args: Vec<String> = args.collect();
    let p = args.get(2).unwrap().parse::<Int>().unwrap();
    let g = args.get(3).unwrap().parse::<Int>().unwrap();
    let a = args.get(4).unwrap().parse::<Int>().unwrap();
    let b = args.get(5).unwrap().parse::<Int>().unwrap();
    (p, g, a, b)
}

pub fn run_exchange(p: Int, g: Int, a: Int, b: Int) {
    let exchange = match KeyExchange::new(p, g, a, b) {
        Ok(exchange) => exchange,
        Err(err) => {
            println!("error: {err}");
            return;
        }
    };

    println!("p = {p}, g = {g}");
    if !is_prime(p) {
        println!("note: {p} is not prime, the exchange is only illustrative");
    }
    let sides = [
        ("Alice", exchange.alice, exchange.bob),
        ("Bob", exchange.bob, exchange.alice),
    ];
    for (name, own, other) in sides {
        println!("{name}:");
        println!("  private key:   {}", own.private_key);
        println!(
            "  public key:    {g}^{} mod {p} = {}",
            own.private_key, own.public_key
        );
        println!(
            "  shared secret: {}^{} mod {p} = {}",
            other.public_key, own.private_key, own.shared_secret
        );
    }
}
