//! Errors returned while constructing a machine.

use crate::core::ConfigFault;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states registered. Add at least one state")]
    NoStates,

    #[error("Initial state {0} is not registered")]
    UnknownInitialState(String),

    #[error("State {0} registered more than once")]
    DuplicateState(String),

    #[error("{} configuration fault(s) found: {}", .0.len(), join_faults(.0))]
    InvalidStates(Vec<ConfigFault>),
}

fn join_faults(faults: &[ConfigFault]) -> String {
    faults
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
