//! Declarative states: tables mapping action names to handlers.
//!
//! [`Actions`] is the stock [`State`] implementation. Each entry binds an
//! action name to a closure taking the context first and any number of
//! typed arguments after it. Two reserved names back the lifecycle hooks:
//! [`ENTER`] (`"_enter"`) and [`EXIT`] (`"_exit"`).
//!
//! # Example
//!
//! ```rust
//! use actionfsm::actions::Actions;
//! use actionfsm::core::{State, Transition};
//! use actionfsm::args;
//!
//! #[derive(Default)]
//! struct Lamp {
//!     lit: bool,
//!     switched: u32,
//! }
//!
//! let off: Actions<Lamp, &'static str, ()> = Actions::new()
//!     .on_enter(|lamp: &mut Lamp| lamp.lit = false)
//!     .on("switch", |lamp: &mut Lamp| {
//!         lamp.switched += 1;
//!         Transition::To("on")
//!     });
//!
//! let mut lamp = Lamp::default();
//! off.enter(&mut lamp);
//! let outcome = off.trigger(&mut lamp, "switch", args![]);
//!
//! assert_eq!(outcome, Ok(Transition::To("on")));
//! assert_eq!(lamp.switched, 1);
//! ```

mod args;
mod binding;
pub mod macros;
mod validation;

pub use args::{Arg, Args};
pub use binding::{Binding, Handler, IntoOutcome};

use crate::core::{raise, ConfigFault, Outcome, State, Transition};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Reserved action name backing [`State::enter`].
pub const ENTER: &str = "_enter";

/// Reserved action name backing [`State::exit`].
pub const EXIT: &str = "_exit";

/// A state defined by a mapping from action names to handlers.
pub struct Actions<C, K, E> {
    bindings: HashMap<String, Binding<C, K, E>>,
}

impl<C, K, E> Actions<C, K, E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `action` to `handler`, replacing any previous binding.
    pub fn on<H, M>(mut self, action: impl Into<String>, handler: H) -> Self
    where
        H: Handler<C, K, E, M>,
    {
        self.insert(action, handler);
        self
    }

    /// Register the hook run when this state becomes current.
    pub fn on_enter<F>(self, hook: F) -> Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        self.on::<F, ((),)>(ENTER, hook)
    }

    /// Register the hook run when this state stops being current.
    pub fn on_exit<F>(self, hook: F) -> Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        self.on::<F, ((),)>(EXIT, hook)
    }

    /// Bind `action` in place. Returns the binding it replaced, if any.
    pub fn insert<H, M>(&mut self, action: impl Into<String>, handler: H) -> Option<Binding<C, K, E>>
    where
        H: Handler<C, K, E, M>,
    {
        self.bindings.insert(action.into(), Binding::new(handler))
    }

    pub fn contains(&self, action: &str) -> bool {
        self.bindings.contains_key(action)
    }

    /// Declared argument count of `action`, excluding the context.
    pub fn arity_of(&self, action: &str) -> Option<usize> {
        self.bindings.get(action).map(Binding::arity)
    }

    /// Names of all bound actions, hooks included, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn run_hook(&self, hook: &str, ctx: &mut C) {
        let Some(binding) = self.bindings.get(hook) else {
            return;
        };
        match binding.invoke(hook, ctx, Vec::new()) {
            Ok(Transition::Stay) => {}
            Ok(Transition::To(_)) => {
                tracing::warn!(hook, "lifecycle hook requested a transition; ignored");
            }
            Err(_) => {
                tracing::warn!(hook, "lifecycle hook returned an error; discarded");
            }
        }
    }
}

impl<C, K, E> Default for Actions<C, K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, K, E> std::fmt::Debug for Actions<C, K, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.bindings.iter().map(|(name, b)| (name, b.arity())))
            .finish()
    }
}

impl<C, K, E> State<C, K, E> for Actions<C, K, E> {
    /// Dispatch to the handler bound to `action`.
    ///
    /// An unbound action raises [`ConfigFault::UnknownAction`].
    fn trigger(&self, ctx: &mut C, action: &str, args: Args) -> Outcome<K, E> {
        match self.bindings.get(action) {
            Some(binding) => binding.invoke(action, ctx, args),
            None => raise(ConfigFault::UnknownAction {
                action: action.to_string(),
            }),
        }
    }

    fn enter(&self, ctx: &mut C) {
        self.run_hook(ENTER, ctx);
    }

    fn exit(&self, ctx: &mut C) {
        self.run_hook(EXIT, ctx);
    }

    fn validate(&self) -> Validation<(), NonEmptyVec<ConfigFault>> {
        validation::check_table(
            self.bindings
                .iter()
                .map(|(name, binding)| (name.as_str(), binding.arity())),
        )
    }
}
