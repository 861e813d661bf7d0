//! Up-front checks for action tables.
//!
//! Every check runs and every fault is collected, so a miswired table
//! reports all of its problems at once instead of one per run.

use crate::actions::{ENTER, EXIT};
use crate::core::ConfigFault;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigFault>>;

/// Check `(name, arity)` pairs of a table.
///
/// Any name is a valid action; only the lifecycle hooks are constrained,
/// and they must not declare parameters besides the context.
pub(crate) fn check_table<'a>(entries: impl Iterator<Item = (&'a str, usize)>) -> Check {
    let mut checks: Vec<Check> = Vec::new();

    for (name, arity) in entries {
        checks.push(check_entry(name, arity));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_entry(name: &str, arity: usize) -> Check {
    if (name == ENTER || name == EXIT) && arity > 0 {
        return Validation::fail(ConfigFault::HookArity {
            hook: name.to_string(),
            arity,
        });
    }
    Validation::success(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Actions;
    use crate::core::State;

    #[test]
    fn well_formed_entries_pass() {
        let entries = vec![("_enter", 0), ("_exit", 0), ("enter-pin", 1), ("go", 0)];
        assert!(check_table(entries.into_iter()).is_success());
    }

    #[test]
    fn empty_table_passes() {
        assert!(check_table(std::iter::empty()).is_success());
    }

    #[test]
    fn underscore_and_empty_names_are_ordinary_actions() {
        let entries = vec![("_reset", 0), ("", 2), ("__", 1)];
        assert!(check_table(entries.into_iter()).is_success());
    }

    #[test]
    fn accumulates_all_faults() {
        let entries = vec![("_enter", 2), ("_reset", 0), ("_exit", 1), ("ok", 3)];

        match check_table(entries.into_iter()) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);

                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigFault::HookArity { arity: 2, .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigFault::HookArity { arity: 1, .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn hook_with_parameters_is_reported_by_table() {
        let table: Actions<u32, u8, ()> = Actions::new().on("_exit", |_: &mut u32, _code: u8| ());

        let result = table.validate();
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors.iter().any(|e| *e
                == ConfigFault::HookArity {
                    hook: "_exit".to_string(),
                    arity: 1,
                }));
        }
    }
}
