//! The State contract every machine state satisfies.
//!
//! A state handles named actions against the machine's context and decides
//! whether the machine stays put or moves to another state. States never
//! hold references to each other: they name their successors by identifier
//! and the machine resolves identifiers through its registry.

use crate::actions::Args;
use crate::core::fault::ConfigFault;
use std::fmt::Debug;
use std::hash::Hash;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Identifier of a state inside a machine's registry.
///
/// Blanket-implemented for every suitable key type, so plain enums and
/// `&'static str` both work.
///
/// # Example
///
/// ```rust
/// use actionfsm::core::StateId;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Locked,
///     Unlocked,
/// }
///
/// fn assert_id<K: StateId>(_: &K) {}
///
/// assert_id(&Door::Locked);
/// assert_id(&"unlocked");
/// ```
pub trait StateId: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> StateId for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

/// What the machine should do after an action was handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition<K> {
    /// Remain in the current state. No lifecycle hooks run.
    Stay,

    /// Move to the given state. Exit and Enter run even when the target
    /// is the current state.
    To(K),
}

impl<K> Transition<K> {
    /// Create a transition to `state`.
    pub fn to(state: K) -> Self {
        Self::To(state)
    }

    /// The target state, if any.
    pub fn target(&self) -> Option<&K> {
        match self {
            Self::Stay => None,
            Self::To(state) => Some(state),
        }
    }

    /// Consume the transition, returning the target state.
    pub fn into_target(self) -> Option<K> {
        match self {
            Self::Stay => None,
            Self::To(state) => Some(state),
        }
    }
}

impl<K> From<Option<K>> for Transition<K> {
    fn from(target: Option<K>) -> Self {
        target.map_or(Self::Stay, Self::To)
    }
}

/// Uniform result of handling an action: a transition, or a domain error.
pub type Outcome<K, E> = Result<Transition<K>, E>;

/// A unit of behaviour the machine can be in.
///
/// `C` is the opaque context threaded through every call, `K` the
/// identifier type of the machine's states and `E` the domain error an
/// action may fail with.
///
/// [`Actions`](crate::actions::Actions) is the stock implementation;
/// embedding code may implement this trait directly for states with
/// custom dispatch.
///
/// # Example
///
/// ```rust
/// use actionfsm::core::{raise, ConfigFault, Outcome, State, Transition};
/// use actionfsm::actions::Args;
///
/// struct Counter;
///
/// impl State<u32, &'static str, String> for Counter {
///     fn trigger(&self, ctx: &mut u32, action: &str, _args: Args) -> Outcome<&'static str, String> {
///         match action {
///             "tick" if *ctx == u32::MAX => Err("counter overflow".to_string()),
///             "tick" => {
///                 *ctx += 1;
///                 Ok(Transition::Stay)
///             }
///             other => raise(ConfigFault::UnknownAction {
///                 action: other.to_string(),
///             }),
///         }
///     }
/// }
///
/// let mut count = 0;
/// assert_eq!(Counter.trigger(&mut count, "tick", Vec::new()), Ok(Transition::Stay));
/// assert_eq!(count, 1);
/// ```
pub trait State<C, K, E>: Send + Sync {
    /// Handle `action` with the caller-supplied arguments.
    ///
    /// An action this state does not know about must fail fast rather than
    /// being ignored; the stock implementation raises
    /// [`ConfigFault::UnknownAction`].
    fn trigger(&self, ctx: &mut C, action: &str, args: Args) -> Outcome<K, E>;

    /// Runs whenever this state becomes current, including the initial
    /// state at construction and self-transitions.
    fn enter(&self, _ctx: &mut C) {}

    /// Runs whenever this state stops being current, right before the
    /// next state's `enter`.
    fn exit(&self, _ctx: &mut C) {}

    /// Check the state's configuration up front, accumulating every fault.
    fn validate(&self) -> Validation<(), NonEmptyVec<ConfigFault>> {
        Validation::success(())
    }
}
