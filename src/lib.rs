//! Expose statically-typed native functions to a dynamically-typed script
//! runtime.
//!
//! Host code hands a Rust function to an adapter constructor and gets back a
//! [`Callable`]: a uniform `(&[Dynamic]) -> Result<Dynamic, CallError>`
//! wrapper that checks arity, coerces each argument, invokes the function and
//! boxes its result.
//!
//! - [`adapt`]: the generic constructor for any supported signature
//! - [`shapes`]: named constructors for common signatures
//! - [`outcome`]: functions whose only result is success or failure
//! - [`Module`]: a named table of callables for the runtime's name resolver
//! - [`prelude`]: the types and traits needed to register and call adapters
//!
//! ```
//! use hostcall::{CallError, Dynamic, shapes};
//!
//! let floor = shapes::float_to_int(|x| x.floor() as i64);
//! assert_eq!(floor.call(&[Dynamic::Float(2.7)]), Ok(Dynamic::Int(2)));
//! assert!(matches!(floor.call(&[]), Err(CallError::ArityMismatch { .. })));
//! ```

pub mod adapter;
pub mod module;
pub mod outcome;
pub mod shapes;

pub use hostcall_core::*;

pub use adapter::{IntoReturn, NativeFunction, adapt};
pub use module::Module;
pub use outcome::{OutcomePolicy, string_to_outcome, string_to_outcome_with, wrap_error};

/// Glob-importable set of the items registration code uses.
///
/// ```
/// use hostcall::prelude::*;
///
/// let mut strings = Module::new("strings");
/// strings
///     .function("repeat", |s: String, n: i64| s.repeat(n as usize))
///     .unwrap();
///
/// let out = strings
///     .call("repeat", &[Dynamic::String("ab".into()), Dynamic::Float(2.9)])
///     .unwrap();
/// assert_eq!(out, "abab".into_dynamic());
/// assert!(matches!(
///     strings.call("repeat", &[]),
///     Err(CallError::ArityMismatch { expected: 2, actual: 0 })
/// ));
/// ```
pub mod prelude {
    pub use crate::adapter::{IntoReturn, NativeFunction, adapt};
    pub use crate::module::Module;
    pub use crate::outcome::OutcomePolicy;
    pub use hostcall_core::{CallError, Callable, Dynamic, FromDynamic, IntoDynamic};
}
