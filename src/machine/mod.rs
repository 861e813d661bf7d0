//! The machine controller and how to build one.
//!
//! A [`StateMachine`] owns the context, a [`StateRegistry`] of states and
//! the identifier of the current state. Build one with
//! [`StateMachineBuilder`] or [`StateMachine::new`]; both validate every
//! state and run the initial state's enter hook before returning.

mod builder;
mod config;
mod controller;
mod error;
mod registry;

pub use builder::StateMachineBuilder;
pub use config::{MachineConfig, DEFAULT_HISTORY_LIMIT};
pub use controller::StateMachine;
pub use error::BuildError;
pub use registry::StateRegistry;
