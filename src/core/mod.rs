//! Core types of the machine.
//!
//! - The `State` contract and the `Transition` a handler requests
//! - Configuration faults, the fail-fast channel for wiring defects
//! - Bounded transition history

pub mod fault;
mod history;
mod state;

pub use fault::{raise, ConfigFault};
pub use history::{StateHistory, StateTransition};
pub use state::{Outcome, State, StateId, Transition};
