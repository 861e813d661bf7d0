//! Configuration faults.
//!
//! A fault means the embedding code is wired wrong: an action name that
//! no state defines, a handler called with the wrong number or types of
//! arguments, a transition to a state that was never registered. Faults are
//! detected at the point of misuse and abort the call. They are never
//! returned through [`StateMachine::trigger`](crate::machine::StateMachine::trigger),
//! whose error channel carries domain errors only.

use thiserror::Error;

/// A defect in how the machine was put together.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigFault {
    #[error("action '{action}' cannot be triggered from the current state")]
    UnknownAction { action: String },

    #[error("action '{action}' expects {expected} argument(s), {supplied} supplied")]
    ArityMismatch {
        action: String,
        expected: usize,
        supplied: usize,
    },

    #[error("action '{action}' argument {position} is not of type {expected}")]
    ArgumentType {
        action: String,
        position: usize,
        expected: &'static str,
    },

    #[error("state {state} is not registered with the machine")]
    UnknownState { state: String },

    #[error("lifecycle hook '{hook}' must take no arguments besides the context, declares {arity}")]
    HookArity { hook: String, arity: usize },
}

/// Abort the current call with `fault`.
///
/// The fault is logged before unwinding so it shows up even when a caller
/// catches the panic.
#[track_caller]
pub fn raise(fault: ConfigFault) -> ! {
    tracing::error!(%fault, "configuration fault");
    panic!("{fault}")
}
