//! Sample automata shared by the integration tests.

#![allow(dead_code)]

use dfa_engine::machine::NoopObserver;
use dfa_engine::{Automaton, AutomatonBuilder, State};
use std::sync::Arc;

/// Binary strings ending in "01".
pub fn binary_ending_01() -> Automaton {
    let mut start: State = State::new("START");
    let mut zero: State = State::new("ZERO");
    let mut accept: State = State::accepting("ACCEPT");

    start.add_transition('0', &zero);
    start.add_transition('1', "START");
    zero.add_transition('0', "ZERO");
    zero.add_transition('1', &accept);
    accept.add_transition('0', &zero);
    accept.add_transition('1', &start);

    let mut dfa: Automaton = Automaton::with_observer(Arc::new(NoopObserver));
    dfa.add_state(start);
    dfa.add_state(zero);
    dfa.add_state(accept);
    dfa.set_initial_state("START").expect("START is registered");
    dfa
}

/// Strings over {a, b} with an even number of 'a'.
pub fn even_a() -> Automaton {
    AutomatonBuilder::new()
        .accepting_state("EVEN_A")
        .state("ODD_A")
        .transition("EVEN_A", 'a', "ODD_A")
        .transition("ODD_A", 'a', "EVEN_A")
        .transition("EVEN_A", 'b', "EVEN_A")
        .transition("ODD_A", 'b', "ODD_A")
        .initial("EVEN_A")
        .observer(Arc::new(NoopObserver))
        .build()
        .expect("even-a automaton is well formed")
}

/// Three-character palindromes over {a, b}.
pub fn palindrome_3() -> Automaton {
    let mut builder = AutomatonBuilder::new()
        .state("START")
        .state("A_FIRST")
        .state("B_FIRST")
        .state("AA_SECOND")
        .state("AB_SECOND")
        .state("BA_SECOND")
        .state("BB_SECOND");
    for accept in ["AAA", "ABA", "BAB", "BBB"] {
        builder = builder.accepting_state(accept);
    }

    builder
        .transition("START", 'a', "A_FIRST")
        .transition("START", 'b', "B_FIRST")
        .transition("A_FIRST", 'a', "AA_SECOND")
        .transition("A_FIRST", 'b', "AB_SECOND")
        .transition("B_FIRST", 'a', "BA_SECOND")
        .transition("B_FIRST", 'b', "BB_SECOND")
        .transition("AA_SECOND", 'a', "AAA")
        .transition("AB_SECOND", 'a', "ABA")
        .transition("BA_SECOND", 'b', "BAB")
        .transition("BB_SECOND", 'b', "BBB")
        .initial("START")
        .observer(Arc::new(NoopObserver))
        .build()
        .expect("palindrome automaton is well formed")
}

/// Binary numbers divisible by 3. States track the remainder.
pub fn divisible_by_3() -> Automaton {
    dfa_engine::automaton! {
        initial: R0,
        accepting: [R0],
        R0 => { '0' => R0, '1' => R1 },
        R1 => { '0' => R2, '1' => R0 },
        R2 => { '0' => R1, '1' => R2 },
    }
    .expect("divisible-by-3 automaton is well formed")
}
