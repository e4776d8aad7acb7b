//! Core value types for hostcall.
//!
//! This crate defines what native adapters consume and produce:
//!
//! - [`Dynamic`]: the closed set of script values
//! - [`Callable`]: the uniform `(&[Dynamic]) -> Result<Dynamic, CallError>` wrapper
//! - [`FromDynamic`] / [`IntoDynamic`]: coercion and boxing rules
//! - [`CallError`] and friends: the failure taxonomy

pub mod convert;
pub mod error;
pub mod kinds;
pub mod runtime;

pub use convert::{
    FromDynamic, IntoDynamic, box_bool, box_float, box_int, box_string_sequence, box_text,
    box_truncated, box_undefined, coerce_to_float, coerce_to_integer, coerce_to_text,
};
pub use error::{CallError, ConversionError, NativeError, RegistrationError};
pub use kinds::{KindSet, ValueKind};
pub use runtime::{Callable, Dynamic};
