//! Validation checks over an automaton's structure.

use crate::core::Symbol;
use crate::machine::Automaton;
use crate::validation::issues::ValidationIssue;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of validating an automaton: success, or every issue found.
pub type ValidationReport = Validation<(), NonEmptyVec<ValidationIssue>>;

/// Run every structural check, accumulating ALL issues.
///
/// The checks are:
/// - at least one state is registered
/// - an initial state is set
/// - every transition target is a registered state
pub fn check_automaton<Y: Symbol>(automaton: &Automaton<Y>) -> ValidationReport {
    let mut checks: Vec<ValidationReport> = Vec::new();

    checks.push(if automaton.state_count() == 0 {
        Validation::fail(ValidationIssue::NoStates)
    } else {
        Validation::success(())
    });

    checks.push(if automaton.initial_state_name().is_none() {
        Validation::fail(ValidationIssue::NoInitialState)
    } else {
        Validation::success(())
    });

    for state in automaton.states() {
        for (symbol, target) in state.transitions() {
            if !automaton.contains_state(target.as_str()) {
                checks.push(Validation::fail(ValidationIssue::DanglingTransition {
                    from: state.id().clone(),
                    symbol: symbol.to_string(),
                    to: target.clone(),
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Flatten a report into a plain list of issues.
pub fn collect_issues(report: &ValidationReport) -> Vec<ValidationIssue> {
    match report {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
