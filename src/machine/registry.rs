//! Registry of the states a machine can be in.
//!
//! States name their successors by identifier, so the registry is what
//! turns a `Transition::To(id)` into the state to enter.

use crate::core::{ConfigFault, State, StateId};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type BoxedState<C, K, E> = Box<dyn State<C, K, E>>;

/// States of one machine, keyed by identifier.
pub struct StateRegistry<C, K: StateId, E> {
    states: HashMap<K, BoxedState<C, K, E>>,
}

impl<C, K: StateId, E> StateRegistry<C, K, E> {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Register `state` under `id`, returning the state it replaced.
    pub fn insert<S>(&mut self, id: K, state: S) -> Option<BoxedState<C, K, E>>
    where
        S: State<C, K, E> + 'static,
    {
        self.states.insert(id, Box::new(state))
    }

    pub fn get(&self, id: &K) -> Option<&dyn State<C, K, E>> {
        self.states.get(id).map(|state| state.as_ref())
    }

    pub fn contains(&self, id: &K) -> bool {
        self.states.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.states.keys()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Validate every registered state, accumulating all faults.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigFault>> {
        let checks: Vec<_> = self.states.values().map(|state| state.validate()).collect();
        Validation::all_vec(checks).map(|_| ())
    }
}

impl<C, K: StateId, E> Default for StateRegistry<C, K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, K: StateId, E> std::fmt::Debug for StateRegistry<C, K, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.states.keys()).finish()
    }
}
