//! Actionfsm: a finite-state machine core driven by named actions.
//!
//! A machine is always in exactly one state. Callers trigger actions by
//! name; the current state decides whether to stay, move to another state
//! or reject the action with a domain error. Moving runs the old state's
//! exit hook and the new state's enter hook, in that order.
//!
//! # Core Concepts
//!
//! - **State**: anything implementing the `State` contract (trigger, enter,
//!   exit); [`actions::Actions`] is the stock, table-driven implementation
//! - **Handlers**: plain closures `Fn(&mut C, A1, .., An) -> R`, wrapped
//!   into uniform bindings at registration
//! - **Faults**: wiring defects (unknown actions, wrong arguments, unknown
//!   states) fail fast and never travel through `trigger`'s `Result`
//!
//! # Example
//!
//! ```rust
//! use actionfsm::actions::Actions;
//! use actionfsm::core::Transition;
//! use actionfsm::machine::StateMachineBuilder;
//! use actionfsm::args;
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! enum Door {
//!     Locked,
//!     Unlocked,
//! }
//!
//! struct Lock {
//!     code: String,
//! }
//!
//! let mut door = StateMachineBuilder::<Lock, Door, String>::new()
//!     .state(
//!         Door::Locked,
//!         Actions::new().on("enter-pin", |lock: &mut Lock, pin: String| {
//!             if pin == lock.code {
//!                 Ok(Transition::To(Door::Unlocked))
//!             } else {
//!                 Err("wrong pin".to_string())
//!             }
//!         }),
//!     )
//!     .state(
//!         Door::Unlocked,
//!         Actions::new().on("lock", |_: &mut Lock| Transition::To(Door::Locked)),
//!     )
//!     .initial(Door::Locked)
//!     .build(Lock { code: "1234".to_string() })
//!     .unwrap();
//!
//! assert!(door.trigger("enter-pin", args!["0000".to_string()]).is_err());
//! assert_eq!(door.current(), &Door::Locked);
//!
//! door.trigger("enter-pin", args!["1234".to_string()]).unwrap();
//! assert_eq!(door.current(), &Door::Unlocked);
//! ```

pub mod actions;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::actions::{Actions, Arg, Args};
pub use crate::core::{ConfigFault, Outcome, State, StateHistory, StateId, StateTransition, Transition};
pub use crate::machine::{BuildError, MachineConfig, StateMachine, StateMachineBuilder};
