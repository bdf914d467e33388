use std::collections::HashMap;
use std::env;

use crate::arith::{is_prime, mul_mod, pow_mod, Int};
use crate::error::{Error, Result};

/// One entry of the solver transcript, in computation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `g^j mod p` recorded into the baby-step table.
    Baby { j: Int, residue: Int },
    /// The reusable giant-step factor `g^(-m) mod p`.
    Inverse { value: Int },
    /// One giant-step lookup of `gamma` in the baby-step table.
    /// `hit` carries the matching baby-step index when it succeeds.
    Giant { i: Int, gamma: Int, hit: Option<Int> },
}

/// Result of one Baby-Step Giant-Step run.
///
/// The transcript and the baby-step table are first-class outputs, not
/// debug data: the point of the solver is showing every intermediate
/// value.
#[derive(Debug, Clone)]
pub struct DiscreteLog {
    /// Step count `m = ceil(sqrt(p))`.
    pub m: Int,
    /// `g^(-m) mod p`, obtained as `g^(p-1-m) mod p` (Fermat).
    pub inverse_factor: Int,
    /// Residue -> baby-step index `j`. Later indices overwrite earlier
    /// ones on collision (last-write-wins), so when `ord(g) < m` the
    /// reported solution is a valid exponent but not necessarily the
    /// smallest one.
    pub baby_steps: HashMap<Int, Int>,
    /// Ordered transcript of every computation step.
    pub steps: Vec<Step>,
    /// Matching exponent, or `None` when the giant-step range is
    /// exhausted. No solution is an ordinary outcome, not an error.
    pub solution: Option<Int>,
}

/// Finds `x` with `g^x ≡ h (mod p)` by Baby-Step Giant-Step, in
/// O(sqrt p) time and space.
///
/// `p` should be prime and `g` coprime to it for the Fermat inverse
/// factor to be sound; as with all parameters here, that property is
/// the caller's to check via `is_prime`. `h` is reduced modulo `p` on
/// entry, so any target congruent to a reachable residue is found.
pub fn solve_discrete_log(g: Int, h: Int, p: Int) -> Result<DiscreteLog> {
    if p <= 0 {
        return Err(Error::NonPositiveModulus(p));
    }

    let m = ceil_sqrt(p);
    let h = h.rem_euclid(p);

    let mut baby_steps = HashMap::with_capacity(m as usize);
    let mut steps = Vec::with_capacity(2 * m as usize + 1);

    for j in 0..m {
        let residue = pow_mod(g, j, p)?;
        baby_steps.insert(residue, j);
        steps.push(Step::Baby { j, residue });
    }

    // g^(-m) = g^(p-1-m) by Fermat. The exponent is clamped at zero
    // for p so small that m exceeds p-1; the factor then degenerates
    // to 1, as in a plain restart of the baby-step walk.
    let inverse_factor = pow_mod(g, (p - 1 - m).max(0), p)?;
    steps.push(Step::Inverse {
        value: inverse_factor,
    });

    let mut gamma = h;
    let mut solution = None;
    for i in 0..m {
        let hit = baby_steps.get(&gamma).copied();
        steps.push(Step::Giant { i, gamma, hit });
        if let Some(j) = hit {
            solution = Some(i * m + j);
            break;
        }
        gamma = mul_mod(gamma, inverse_factor, p);
    }

    Ok(DiscreteLog {
        m,
        inverse_factor,
        baby_steps,
        steps,
        solution,
    })
}

/// Smallest `m` with `m * m >= n`.
fn ceil_sqrt(n: Int) -> Int {
    let mut m = (n as f64).sqrt().ceil() as Int;
    while m * m < n {
        m += 1;
    }
    while m > 1 && (m - 1) * (m - 1) >= n {
        m -= 1;
    }
    m
}

// -------------- demo binary glue

pub fn read_args(args: env::Args) -> (Int, Int, Int) {
    let args: Vec<String> = args.collect();
    let g = args.get(2).unwrap().parse::<Int>().unwrap();
    let h = args.get(3).unwrap().parse::<Int>().unwrap();
    let p = args.get(4).unwrap().parse::<Int>().unwrap();
    (g, h, p)
}

pub fn run_solver(g: Int, h: Int, p: Int) {
    let result = match solve_discrete_log(g, h, p) {
        Ok(result) => result,
        Err(err) => {
            println!("error: {err}");
            return;
        }
    };

    println!("solving {g}^x = {h} mod {p} with m = {}", result.m);
    if !is_prime(p) {
        println!("note: {p} is not prime, the inverse factor is unreliable");
    }
    for step in &result.steps {
        match step {
            Step::Baby { j, residue } => {
                println!("baby step  {j:>3}: {g}^{j} mod {p} = {residue}")
            }
            Step::Inverse { value } => {
                println!("inverse factor: {g}^-{} mod {p} = {value}", result.m)
            }
            Step::Giant {
                i,
                gamma,
                hit: Some(j),
            } => println!("giant step {i:>3}: gamma = {gamma}, matches baby step {j}"),
            Step::Giant {
                i,
                gamma,
                hit: None,
            } => println!("giant step {i:>3}: gamma = {gamma}, no match"),
        }
    }
    match result.solution {
        Some(x) => println!("x = {x}"),
        None => println!("no solution found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solves_textbook_instance() {
        let result = solve_discrete_log(2, 22, 29).unwrap();
        assert_eq!(result.m, 6);
        let x = result.solution.unwrap();
        assert_eq!(x, 26);
        assert_eq!(pow_mod(2, x, 29).unwrap(), 22);
    }

    #[test]
    fn test_transcript_shape() {
        let result = solve_discrete_log(2, 22, 29).unwrap();
        let m = result.m as usize;

        assert_eq!(result.baby_steps.len(), m);
        assert_eq!(result.steps[0], Step::Baby { j: 0, residue: 1 });
        assert!(matches!(result.steps[m], Step::Inverse { .. }));
        match result.steps.last().unwrap() {
            Step::Giant { i, hit: Some(j), .. } => {
                assert_eq!(*i * result.m + *j, 26)
            }
            other => panic!("expected a matching giant step, got {other:?}"),
        }
    }

    #[test]
    fn test_no_solution_outside_subgroup() {
        // 4 generates only the even powers of 2 modulo 29; 2 itself is
        // an odd power, so no exponent can match.
        let result = solve_discrete_log(4, 2, 29).unwrap();
        assert_eq!(result.solution, None);

        let giants = result
            .steps
            .iter()
            .filter(|step| matches!(step, Step::Giant { .. }))
            .count();
        assert_eq!(giants as Int, result.m);
    }

    #[test]
    fn test_finds_every_exponent_for_primitive_root() {
        // 2 is a primitive root modulo 29, so every target is reachable
        // and the recovered exponent is exact
        for x in 0..28 {
            let h = pow_mod(2, x, 29).unwrap();
            let found = solve_discrete_log(2, h, 29).unwrap().solution.unwrap();
            assert_eq!(found, x);
        }
    }

    #[test]
    fn test_reduces_target() {
        let reduced = solve_discrete_log(2, 22, 29).unwrap();
        let congruent = solve_discrete_log(2, 22 + 29, 29).unwrap();
        assert_eq!(reduced.solution, congruent.solution);
    }

    #[test]
    fn test_colliding_baby_steps_keep_last_index() {
        // ord(4) = 2 mod 5, so 4^2 = 1 overwrites the j = 0 entry and
        // the solver reports x = 2 rather than x = 0
        let result = solve_discrete_log(4, 1, 5).unwrap();
        assert_eq!(result.m, 3);
        assert_eq!(result.baby_steps.len(), 2);
        assert_eq!(result.solution, Some(2));
        assert_eq!(pow_mod(4, 2, 5).unwrap(), 1);
    }

    #[test]
    fn test_rejects_bad_modulus() {
        assert_eq!(
            solve_discrete_log(2, 5, 0).unwrap_err(),
            Error::NonPositiveModulus(0)
        );
    }

    #[test]
    fn test_ceil_sqrt() {
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(4), 2);
        assert_eq!(ceil_sqrt(5), 3);
        assert_eq!(ceil_sqrt(29), 6);
        for n in 1..5_000 {
            let m = ceil_sqrt(n);
            assert!(m * m >= n && (m - 1) * (m - 1) < n);
        }
    }
}
