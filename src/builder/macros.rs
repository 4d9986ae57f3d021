//! Macros for declaring automata as transition tables.

/// Build an automaton from a transition table.
///
/// Every state listed on the left of `=>` is declared, and states named in
/// `accepting` are marked accepting. Expands to an
/// [`AutomatonBuilder`](crate::builder::AutomatonBuilder) chain and returns
/// its `Result`.
///
/// # Example
///
/// ```
/// use dfa_engine::automaton;
///
/// let mut div3 = automaton! {
///     initial: R0,
///     accepting: [R0],
///     R0 => { '0' => R0, '1' => R1 },
///     R1 => { '0' => R2, '1' => R0 },
///     R2 => { '0' => R1, '1' => R2 },
/// }
/// .unwrap();
///
/// assert!(div3.accepts("110").unwrap());
/// assert!(!div3.accepts("111").unwrap());
/// ```
#[macro_export]
macro_rules! automaton {
    (
        initial: $initial:ident,
        accepting: [$($accepting:ident),* $(,)?],
        $(
            $from:ident => { $($symbol:expr => $to:ident),* $(,)? }
        ),* $(,)?
    ) => {{
        let builder = $crate::builder::AutomatonBuilder::new();
        $( let builder = builder.state(stringify!($from)); )*
        $( let builder = builder.accepting_state(stringify!($accepting)); )*
        $( $( let builder = builder.transition(stringify!($from), $symbol, stringify!($to)); )* )*
        builder.initial(stringify!($initial)).build()
    }};
}
