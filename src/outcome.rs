//! Adapter for native functions that only report success or failure.
//!
//! The native error does not fail the call. It is turned into script data by
//! an [`OutcomePolicy`]:
//!
//! | native result | `ErrorValue` (default)      | `Flag`        |
//! |---------------|-----------------------------|---------------|
//! | `Ok(())`      | `Bool(true)`                | `Bool(true)`  |
//! | `Err(e)`      | `Error(String(e.to_string()))` | `Bool(false)` |
//!
//! Arity and coercion failures still fail the call as usual.

use std::fmt;

use hostcall_core::{Callable, Dynamic};

use crate::adapter::adapt;

/// How a native error is represented to script code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutcomePolicy {
    /// Failure becomes an error value carrying the error's text.
    #[default]
    ErrorValue,
    /// Failure becomes `false`; the error text is dropped.
    Flag,
}

impl OutcomePolicy {
    /// Map a native outcome to its script value.
    pub fn wrap<E: fmt::Display>(self, outcome: Result<(), E>) -> Dynamic {
        match (outcome, self) {
            (Ok(()), _) => Dynamic::Bool(true),
            (Err(err), OutcomePolicy::ErrorValue) => Dynamic::error(err.to_string()),
            (Err(_), OutcomePolicy::Flag) => Dynamic::Bool(false),
        }
    }
}

/// Map a native outcome with the default policy.
pub fn wrap_error<E: fmt::Display>(outcome: Result<(), E>) -> Dynamic {
    OutcomePolicy::default().wrap(outcome)
}

/// `fn(String) -> Result<(), E>`, using the default [`OutcomePolicy`].
pub fn string_to_outcome<F, E>(f: F) -> Callable
where
    F: Fn(String) -> Result<(), E> + Send + Sync + 'static,
    E: fmt::Display,
{
    string_to_outcome_with(OutcomePolicy::default(), f)
}

/// `fn(String) -> Result<(), E>` with an explicit [`OutcomePolicy`].
pub fn string_to_outcome_with<F, E>(policy: OutcomePolicy, f: F) -> Callable
where
    F: Fn(String) -> Result<(), E> + Send + Sync + 'static,
    E: fmt::Display,
{
    adapt::<(String,), _>(move |text: String| policy.wrap(f(text)))
}
