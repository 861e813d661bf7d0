//! Handler bindings.
//!
//! A binding turns a richly typed closure such as
//! `|door: &mut Door, pin: String| -> Result<Transition<Id>, PinError>` into
//! the uniform shape `(&mut C, Args) -> Outcome<K, E>`. The closure's
//! parameter list is captured at compile time through the [`Handler`]
//! trait, so the only checks left at call time are the argument count and
//! the per-argument downcasts, both performed before the body runs.

use crate::actions::args::{take, Args};
use crate::core::{raise, ConfigFault, Outcome, Transition};
use std::any::Any;

/// Conversion from a handler's return value into an [`Outcome`].
///
/// | return type                | outcome                       |
/// |----------------------------|-------------------------------|
/// | `()`                       | stay, no error                |
/// | `Transition<K>`, `Option<K>` | that transition, no error   |
/// | `Result<(), E>`            | stay, or the error            |
/// | `Result<Transition<K>, E>`, `Result<Option<K>, E>` | both |
pub trait IntoOutcome<K, E> {
    fn into_outcome(self) -> Outcome<K, E>;
}

impl<K, E> IntoOutcome<K, E> for () {
    fn into_outcome(self) -> Outcome<K, E> {
        Ok(Transition::Stay)
    }
}

impl<K, E> IntoOutcome<K, E> for Transition<K> {
    fn into_outcome(self) -> Outcome<K, E> {
        Ok(self)
    }
}

impl<K, E> IntoOutcome<K, E> for Option<K> {
    fn into_outcome(self) -> Outcome<K, E> {
        Ok(Transition::from(self))
    }
}

impl<K, E> IntoOutcome<K, E> for Result<(), E> {
    fn into_outcome(self) -> Outcome<K, E> {
        self.map(|()| Transition::Stay)
    }
}

impl<K, E> IntoOutcome<K, E> for Result<Transition<K>, E> {
    fn into_outcome(self) -> Outcome<K, E> {
        self
    }
}

impl<K, E> IntoOutcome<K, E> for Result<Option<K>, E> {
    fn into_outcome(self) -> Outcome<K, E> {
        self.map(Transition::from)
    }
}

/// A closure usable as an action handler.
///
/// Implemented for `Fn(&mut C, A1, .., An) -> R` with up to six extra
/// parameters, where every `Ai: Any` and `R: IntoOutcome<K, E>`. `Marker`
/// only disambiguates the arities and is always inferred.
pub trait Handler<C, K, E, Marker>: Send + Sync + 'static {
    /// Number of parameters beyond the context.
    const ARITY: usize;

    /// Unpack `args` and run the handler. `args.len()` equals `ARITY`.
    fn call(&self, action: &str, ctx: &mut C, args: Args) -> Outcome<K, E>;
}

macro_rules! impl_handler {
    ($arity:expr; $($arg:ident),*) => {
        impl<F, C, K, E, R, $($arg,)*> Handler<C, K, E, (R, $($arg,)*)> for F
        where
            F: Fn(&mut C $(, $arg)*) -> R + Send + Sync + 'static,
            R: IntoOutcome<K, E>,
            $($arg: Any,)*
        {
            const ARITY: usize = $arity;

            #[allow(non_snake_case, unused_mut, unused_variables)]
            fn call(&self, action: &str, ctx: &mut C, args: Args) -> Outcome<K, E> {
                let mut args = args.into_iter().enumerate();
                $(let $arg = take::<$arg>(action, &mut args);)*
                (self)(ctx $(, $arg)*).into_outcome()
            }
        }
    };
}

impl_handler!(0;);
impl_handler!(1; A1);
impl_handler!(2; A1, A2);
impl_handler!(3; A1, A2, A3);
impl_handler!(4; A1, A2, A3, A4);
impl_handler!(5; A1, A2, A3, A4, A5);
impl_handler!(6; A1, A2, A3, A4, A5, A6);

type Invoke<C, K, E> = Box<dyn Fn(&str, &mut C, Args) -> Outcome<K, E> + Send + Sync>;

/// A validated, uniform wrapper around one action handler.
pub struct Binding<C, K, E> {
    arity: usize,
    invoke: Invoke<C, K, E>,
}

impl<C, K, E> Binding<C, K, E> {
    /// Wrap a handler.
    pub fn new<H, M>(handler: H) -> Self
    where
        H: Handler<C, K, E, M>,
    {
        Self {
            arity: H::ARITY,
            invoke: Box::new(move |action, ctx, args| handler.call(action, ctx, args)),
        }
    }

    /// Number of arguments the handler expects besides the context.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Run the handler for `action`.
    ///
    /// Supplying a different number of arguments than the handler declares
    /// raises [`ConfigFault::ArityMismatch`] before the handler body runs.
    pub fn invoke(&self, action: &str, ctx: &mut C, args: Args) -> Outcome<K, E> {
        if args.len() != self.arity {
            raise(ConfigFault::ArityMismatch {
                action: action.to_string(),
                expected: self.arity,
                supplied: args.len(),
            });
        }
        (self.invoke)(action, ctx, args)
    }
}

impl<C, K, E> std::fmt::Debug for Binding<C, K, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding").field("arity", &self.arity).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Door {
        Locked,
        Unlocked,
    }

    #[derive(Default)]
    struct Ctx {
        calls: usize,
        code: String,
    }

    type DoorBinding = Binding<Ctx, Door, String>;

    #[test]
    fn zero_return_handler_stays() {
        let binding = DoorBinding::new(|ctx: &mut Ctx| ctx.calls += 1);
        let mut ctx = Ctx::default();

        assert_eq!(binding.arity(), 0);
        assert_eq!(binding.invoke("noop", &mut ctx, args![]), Ok(Transition::Stay));
        assert_eq!(ctx.calls, 1);
    }

    #[test]
    fn single_return_handler_transitions() {
        let binding = DoorBinding::new(|_: &mut Ctx| Transition::To(Door::Unlocked));
        let mut ctx = Ctx::default();

        assert_eq!(
            binding.invoke("open", &mut ctx, args![]),
            Ok(Transition::To(Door::Unlocked))
        );
    }

    #[test]
    fn option_return_maps_to_transition() {
        let binding = DoorBinding::new(|_: &mut Ctx, lock: bool| lock.then_some(Door::Locked));
        let mut ctx = Ctx::default();

        assert_eq!(
            binding.invoke("maybe", &mut ctx, args![true]),
            Ok(Transition::To(Door::Locked))
        );
        assert_eq!(
            binding.invoke("maybe", &mut ctx, args![false]),
            Ok(Transition::Stay)
        );
    }

    #[test]
    fn double_return_handler_surfaces_error() {
        let binding = DoorBinding::new(|ctx: &mut Ctx, pin: String| {
            if pin == ctx.code {
                Ok(Transition::To(Door::Unlocked))
            } else {
                Err(format!("wrong pin {pin}"))
            }
        });
        let mut ctx = Ctx {
            calls: 0,
            code: "1234".to_string(),
        };

        assert_eq!(
            binding.invoke("enter-pin", &mut ctx, args!["1234".to_string()]),
            Ok(Transition::To(Door::Unlocked))
        );
        assert_eq!(
            binding.invoke("enter-pin", &mut ctx, args!["0000".to_string()]),
            Err("wrong pin 0000".to_string())
        );
    }

    #[test]
    fn multiple_arguments_arrive_in_order() {
        let binding = DoorBinding::new(|ctx: &mut Ctx, a: u8, b: &'static str, c: char| {
            ctx.code = format!("{a}{b}{c}");
        });
        let mut ctx = Ctx::default();

        assert_eq!(binding.arity(), 3);
        binding
            .invoke("combine", &mut ctx, args![1u8, "x", 'z'])
            .unwrap();
        assert_eq!(ctx.code, "1xz");
    }

    #[test]
    fn argument_count_mismatch_faults_before_body_runs() {
        let binding = DoorBinding::new(|ctx: &mut Ctx, _pin: String| ctx.calls += 1);
        let mut ctx = Ctx::default();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            binding.invoke("enter-pin", &mut ctx, args![])
        }));
        assert!(result.is_err());

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            binding.invoke("enter-pin", &mut ctx, args!["a".to_string(), "b".to_string()])
        }));
        assert!(result.is_err());
        assert_eq!(ctx.calls, 0);
    }

    #[test]
    #[should_panic(expected = "action 'enter-pin' argument 0 is not of type")]
    fn argument_type_mismatch_faults() {
        let binding = DoorBinding::new(|_: &mut Ctx, _pin: String| ());
        let mut ctx = Ctx::default();

        let _ = binding.invoke("enter-pin", &mut ctx, args![1234u32]);
    }
}
