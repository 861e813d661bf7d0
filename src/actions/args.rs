//! Dynamically typed action arguments.

use crate::core::{raise, ConfigFault};
use std::any::{type_name, Any};

/// One argument passed to an action handler.
pub type Arg = Box<dyn Any + Send>;

/// The arguments of one trigger, in declaration order.
pub type Args = Vec<Arg>;

/// Take the next argument and downcast it to the handler's declared type.
///
/// Called by bindings after the argument count has been checked, so running
/// out of arguments here is unreachable in practice; both that and a type
/// mismatch are configuration faults.
pub(crate) fn take<A: Any>(action: &str, args: &mut impl Iterator<Item = (usize, Arg)>) -> A {
    let Some((position, arg)) = args.next() else {
        raise(ConfigFault::ArityMismatch {
            action: action.to_string(),
            expected: 1,
            supplied: 0,
        })
    };
    match arg.downcast::<A>() {
        Ok(value) => *value,
        Err(_) => raise(ConfigFault::ArgumentType {
            action: action.to_string(),
            position,
            expected: type_name::<A>(),
        }),
    }
}
