//! Macros for building arguments and action tables.

/// Build the argument list for a trigger.
///
/// Every value is boxed as-is; the handler's parameter types must match
/// exactly (`"1234"` is a `&'static str`, not a `String`).
///
/// # Example
///
/// ```
/// use actionfsm::args;
/// use actionfsm::actions::Args;
///
/// let none: Args = args![];
/// let two = args![42u32, "pin".to_string()];
///
/// assert!(none.is_empty());
/// assert_eq!(two.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::actions::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$(::std::boxed::Box::new($arg) as $crate::actions::Arg),+]
    };
}

/// Build an [`Actions`](crate::actions::Actions) table from a literal
/// mapping of action names to handlers.
///
/// The reserved names `"_enter"` and `"_exit"` register lifecycle hooks.
///
/// # Example
///
/// ```
/// use actionfsm::actions;
/// use actionfsm::actions::Actions;
/// use actionfsm::core::Transition;
///
/// struct Door {
///     opened: u32,
/// }
///
/// let locked: Actions<Door, &'static str, String> = actions! {
///     "_enter" => |door: &mut Door| door.opened = 0,
///     "enter-pin" => |_: &mut Door, pin: String| {
///         if pin == "1234" {
///             Ok(Transition::To("unlocked"))
///         } else {
///             Err("wrong pin".to_string())
///         }
///     },
/// };
///
/// assert!(locked.contains("enter-pin"));
/// assert_eq!(locked.arity_of("enter-pin"), Some(1));
/// ```
#[macro_export]
macro_rules! actions {
    ($($name:expr => $handler:expr),* $(,)?) => {
        $crate::actions::Actions::new()$(.on($name, $handler))*
    };
}
