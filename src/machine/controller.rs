//! The state machine controller.

use crate::actions::Args;
use crate::core::{raise, ConfigFault, State, StateHistory, StateId, StateTransition, Transition};
use crate::machine::config::MachineConfig;
use crate::machine::error::BuildError;
use crate::machine::registry::StateRegistry;
use chrono::Utc;
use stillwater::validation::Validation;

/// A finite-state machine driven by named actions.
///
/// Owns the context `C` and the registry of states, and tracks which state
/// is current. Not synchronised: callers sharing a machine across threads
/// must serialise `trigger` calls themselves, e.g. behind a `Mutex`.
pub struct StateMachine<C, K: StateId, E> {
    context: C,
    states: StateRegistry<C, K, E>,
    current: K,
    history: StateHistory<K>,
}

impl<C, K: StateId, E> StateMachine<C, K, E> {
    /// Create a machine in `initial` and run its enter hook.
    ///
    /// Every registered state is validated first; the machine is only
    /// returned once the registry is known to be well formed.
    pub fn new(context: C, states: StateRegistry<C, K, E>, initial: K) -> Result<Self, BuildError> {
        Self::with_config(context, states, initial, MachineConfig::default())
    }

    /// Like [`StateMachine::new`], with explicit configuration.
    pub fn with_config(
        mut context: C,
        states: StateRegistry<C, K, E>,
        initial: K,
        config: MachineConfig,
    ) -> Result<Self, BuildError> {
        if states.is_empty() {
            return Err(BuildError::NoStates);
        }
        if let Validation::Failure(faults) = states.validate() {
            return Err(BuildError::InvalidStates(faults.iter().cloned().collect()));
        }
        let Some(state) = states.get(&initial) else {
            return Err(BuildError::UnknownInitialState(format!("{initial:?}")));
        };

        tracing::debug!(state = ?initial, "entering initial state");
        state.enter(&mut context);

        Ok(Self {
            context,
            states,
            current: initial,
            history: StateHistory::with_limit(config.history_limit),
        })
    }

    /// Trigger `action` on the current state.
    ///
    /// - A domain error leaves the machine untouched and is returned as-is.
    /// - `Transition::Stay` leaves the machine untouched; no hooks run.
    /// - `Transition::To(next)` runs the current state's exit hook, makes
    ///   `next` current, then runs its enter hook. This happens even when
    ///   `next` is the current state.
    ///
    /// Configuration faults (an action the current state does not define,
    /// the wrong number or types of arguments, a transition to an
    /// unregistered state) panic instead of returning.
    pub fn trigger(&mut self, action: &str, args: Args) -> Result<(), E> {
        let state = resolve(&self.states, &self.current);
        tracing::debug!(state = ?self.current, action, "triggering action");

        match state.trigger(&mut self.context, action, args) {
            Ok(Transition::Stay) => {
                tracing::debug!(state = ?self.current, action, "staying in state");
                Ok(())
            }
            Ok(Transition::To(next)) => {
                self.transition(action, next);
                Ok(())
            }
            Err(error) => {
                tracing::debug!(state = ?self.current, action, "action rejected");
                Err(error)
            }
        }
    }

    fn transition(&mut self, action: &str, next: K) {
        // Resolve before running any hook so a bad target leaves the
        // machine in its current state.
        let entering = resolve(&self.states, &next);
        let leaving = resolve(&self.states, &self.current);

        tracing::debug!(from = ?self.current, to = ?next, action, "transition");
        leaving.exit(&mut self.context);

        let from = std::mem::replace(&mut self.current, next.clone());
        entering.enter(&mut self.context);

        self.history.record(StateTransition {
            from,
            to: next,
            action: action.to_string(),
            timestamp: Utc::now(),
        });
    }

    /// Identifier of the current state.
    pub fn current(&self) -> &K {
        &self.current
    }

    pub fn is_in(&self, id: &K) -> bool {
        self.current == *id
    }

    pub fn history(&self) -> &StateHistory<K> {
        &self.history
    }

    pub fn states(&self) -> &StateRegistry<C, K, E> {
        &self.states
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Drop the machine, handing back its context. No exit hook runs.
    pub fn into_context(self) -> C {
        self.context
    }
}

fn resolve<'a, C, K: StateId, E>(
    states: &'a StateRegistry<C, K, E>,
    id: &K,
) -> &'a dyn State<C, K, E> {
    match states.get(id) {
        Some(state) => state,
        None => raise(ConfigFault::UnknownState {
            state: format!("{id:?}"),
        }),
    }
}

impl<C, K: StateId, E> std::fmt::Debug for StateMachine<C, K, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("states", &self.states)
            .field("transitions", &self.history.len())
            .finish()
    }
}
