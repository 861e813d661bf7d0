//! Builder for constructing state machines.

use crate::core::{State, StateId};
use crate::machine::config::MachineConfig;
use crate::machine::controller::StateMachine;
use crate::machine::error::BuildError;
use crate::machine::registry::StateRegistry;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use actionfsm::actions::Actions;
/// use actionfsm::core::Transition;
/// use actionfsm::machine::StateMachineBuilder;
/// use actionfsm::args;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Light {
///     Off,
///     On,
/// }
///
/// let mut machine = StateMachineBuilder::<u32, Light, ()>::new()
///     .state(
///         Light::Off,
///         Actions::new().on("flip", |_: &mut u32| Transition::To(Light::On)),
///     )
///     .state(
///         Light::On,
///         Actions::new()
///             .on_enter(|flips: &mut u32| *flips += 1)
///             .on("flip", |_: &mut u32| Transition::To(Light::Off)),
///     )
///     .initial(Light::Off)
///     .build(0)
///     .unwrap();
///
/// machine.trigger("flip", args![]).unwrap();
/// assert_eq!(machine.current(), &Light::On);
/// assert_eq!(*machine.context(), 1);
/// ```
pub struct StateMachineBuilder<C, K: StateId, E> {
    initial: Option<K>,
    states: StateRegistry<C, K, E>,
    duplicates: Vec<K>,
    config: MachineConfig,
}

impl<C, K: StateId, E> StateMachineBuilder<C, K, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: StateRegistry::new(),
            duplicates: Vec::new(),
            config: MachineConfig::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, id: K) -> Self {
        self.initial = Some(id);
        self
    }

    /// Register a state under `id`.
    pub fn state<S>(mut self, id: K, state: S) -> Self
    where
        S: State<C, K, E> + 'static,
    {
        if self.states.insert(id.clone(), state).is_some() {
            self.duplicates.push(id);
        }
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Keep at most `limit` transitions in history; zero disables it.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Build the machine around `context`, entering the initial state.
    /// Returns an error if required fields are missing or any state is
    /// misconfigured.
    pub fn build(self, context: C) -> Result<StateMachine<C, K, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if let Some(id) = self.duplicates.first() {
            return Err(BuildError::DuplicateState(format!("{id:?}")));
        }

        StateMachine::with_config(context, self.states, initial, self.config)
    }
}

impl<C, K: StateId, E> Default for StateMachineBuilder<C, K, E> {
    fn default() -> Self {
        Self::new()
    }
}
