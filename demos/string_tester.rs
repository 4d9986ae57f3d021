//! String tester for a few sample automata.
//!
//! Run with: `cargo run --example string_tester -- 0101 aab 110`
//! Set `RUST_LOG=dfa_engine=debug` to watch every transition.

use dfa_engine::{automaton, Automaton, BuildError};
use tracing_subscriber::EnvFilter;

fn samples() -> Result<Vec<(&'static str, Automaton)>, BuildError> {
    let ending_01 = automaton! {
        initial: START,
        accepting: [ACCEPT],
        START => { '0' => ZERO, '1' => START },
        ZERO => { '0' => ZERO, '1' => ACCEPT },
        ACCEPT => { '0' => ZERO, '1' => START },
    }?;

    let even_a = automaton! {
        initial: EVEN_A,
        accepting: [EVEN_A],
        EVEN_A => { 'a' => ODD_A, 'b' => EVEN_A },
        ODD_A => { 'a' => EVEN_A, 'b' => ODD_A },
    }?;

    let divisible_by_3 = automaton! {
        initial: R0,
        accepting: [R0],
        R0 => { '0' => R0, '1' => R1 },
        R1 => { '0' => R2, '1' => R0 },
        R2 => { '0' => R1, '1' => R2 },
    }?;

    Ok(vec![
        ("Binary strings ending with '01'", ending_01),
        ("Even number of 'a's", even_a),
        ("Binary numbers divisible by 3", divisible_by_3),
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = ["", "01", "101", "10", "aa", "aab", "110", "0121"]
            .map(String::from)
            .to_vec();
    }

    for (description, mut dfa) in samples()? {
        println!("\n== {description}");
        println!("{}", dfa.summary());

        for input in &inputs {
            let evaluation = dfa.run(input.chars())?;
            println!("{input:?}: {evaluation}");
            for record in dfa.history() {
                println!("    {record}");
            }
        }
    }

    Ok(())
}
