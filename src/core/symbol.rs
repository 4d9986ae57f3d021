//! Input symbols consumed by an automaton.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for anything an automaton can consume as one atomic unit of input.
///
/// Implemented automatically for every type meeting the bounds, so `char`,
/// `u8`, `String` and user-defined token enums all work out of the box.
///
/// # Required Traits
///
/// - `Clone` + `Eq` + `Hash`: symbols key the transition table
/// - `Debug` + `Display`: symbols appear in diagnostics
/// - `Serialize` + `Deserialize`: symbols are stored in checkpoints
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::Symbol;
///
/// fn takes_symbol<Y: Symbol>(_symbol: Y) {}
///
/// takes_symbol('a');
/// takes_symbol("token".to_string());
/// ```
pub trait Symbol:
    Clone
    + Eq
    + Hash
    + Debug
    + Display
    + Serialize
    + for<'de> Deserialize<'de>
    + Send
    + Sync
    + 'static
{
}

impl<T> Symbol for T where
    T: Clone
        + Eq
        + Hash
        + Debug
        + Display
        + Serialize
        + for<'de> Deserialize<'de>
        + Send
        + Sync
        + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Token {
        Open,
        Close,
    }

    impl Display for Token {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::Open => write!(f, "("),
                Self::Close => write!(f, ")"),
            }
        }
    }

    fn assert_symbol<Y: Symbol>() {}

    #[test]
    fn common_types_are_symbols() {
        assert_symbol::<char>();
        assert_symbol::<u8>();
        assert_symbol::<String>();
    }

    #[test]
    fn custom_tokens_are_symbols() {
        assert_symbol::<Token>();
        assert_eq!(Token::Open.to_string(), "(");
        assert_eq!(Token::Close.to_string(), ")");
    }
}
