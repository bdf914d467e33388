use std::env::args;

mod arith;
mod bsgs;
mod dh;
mod error;
mod inverse;
mod random;
mod rsa;

const DH: &str = "dh";
const BSGS: &str = "bsgs";
const RSA: &str = "rsa";

const AVAILABLE_CMDS: [&str; 3] = [DH, BSGS, RSA];

fn main() {
    let cmd = read_command();

    match cmd.as_str() {
        DH => {
            let (p, g, a, b) = dh::read_args(args());
            dh::run_exchange(p, g, a, b)
        }

        BSGS => {
            let (g, h, p) = bsgs::read_args(args());
            bsgs::run_solver(g, h, p)
        }

        RSA => {
            let (p, q, e, m) = rsa::read_args(args());
            rsa::run_rsa(p, q, e, m)
        }
        _ => panic!(
            "Use one of the following commands: \"{cmds}\"",
            cmds = AVAILABLE_CMDS.join(", ")
        ),
    }
}

// -------------- parsing inputs
fn read_command() -> String {
    let args: Vec<String> = args().collect();
    let cmd = args.get(1).unwrap().to_string();
    cmd
}
