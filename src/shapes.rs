//! Named constructors for common native calling shapes.
//!
//! Each constructor pins the parameter and return types of [`adapt`], so
//! closures can be passed without type annotations and registration code
//! reads like the signature it expects. Any other shape can go through
//! [`adapt`] directly.

use std::fmt;

use hostcall_core::Callable;

use crate::adapter::adapt;

/// `fn()`; the call returns `Undefined`.
pub fn action<F>(f: F) -> Callable
where
    F: Fn() + Send + Sync + 'static,
{
    adapt::<(), F>(f)
}

/// `fn(i64)`; the call returns `Undefined`.
pub fn int_action<F>(f: F) -> Callable
where
    F: Fn(i64) + Send + Sync + 'static,
{
    adapt::<(i64,), F>(f)
}

/// `fn() -> f64`.
pub fn float_producer<F>(f: F) -> Callable
where
    F: Fn() -> f64 + Send + Sync + 'static,
{
    adapt::<(), F>(f)
}

/// `fn() -> i64`.
pub fn int_producer<F>(f: F) -> Callable
where
    F: Fn() -> i64 + Send + Sync + 'static,
{
    adapt::<(), F>(f)
}

/// `fn() -> String`.
pub fn string_producer<F>(f: F) -> Callable
where
    F: Fn() -> String + Send + Sync + 'static,
{
    adapt::<(), F>(f)
}

/// `fn() -> Vec<String>`; the call returns an array of strings.
pub fn strings_producer<F>(f: F) -> Callable
where
    F: Fn() -> Vec<String> + Send + Sync + 'static,
{
    adapt::<(), F>(f)
}

/// `fn(f64) -> f64`.
pub fn float_to_float<F>(f: F) -> Callable
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    adapt::<(f64,), F>(f)
}

/// `fn(i64) -> f64`.
pub fn int_to_float<F>(f: F) -> Callable
where
    F: Fn(i64) -> f64 + Send + Sync + 'static,
{
    adapt::<(i64,), F>(f)
}

/// `fn(f64) -> i64`.
pub fn float_to_int<F>(f: F) -> Callable
where
    F: Fn(f64) -> i64 + Send + Sync + 'static,
{
    adapt::<(f64,), F>(f)
}

/// `fn(i64) -> i64`.
pub fn int_to_int<F>(f: F) -> Callable
where
    F: Fn(i64) -> i64 + Send + Sync + 'static,
{
    adapt::<(i64,), F>(f)
}

/// `fn(f64) -> bool`.
pub fn float_to_bool<F>(f: F) -> Callable
where
    F: Fn(f64) -> bool + Send + Sync + 'static,
{
    adapt::<(f64,), F>(f)
}

/// `fn(String) -> String`.
pub fn string_to_string<F>(f: F) -> Callable
where
    F: Fn(String) -> String + Send + Sync + 'static,
{
    adapt::<(String,), F>(f)
}

/// `fn(String) -> Result<String, E>`; an `Err` fails the call with
/// [`CallError::Native`](hostcall_core::CallError::Native).
pub fn string_to_result<F, E>(f: F) -> Callable
where
    F: Fn(String) -> Result<String, E> + Send + Sync + 'static,
    E: fmt::Display,
{
    adapt::<(String,), F>(f)
}

/// `fn(f64, f64) -> f64`.
pub fn float_float_to_float<F>(f: F) -> Callable
where
    F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
{
    adapt::<(f64, f64), F>(f)
}

/// `fn(i64, f64) -> f64`.
pub fn int_float_to_float<F>(f: F) -> Callable
where
    F: Fn(i64, f64) -> f64 + Send + Sync + 'static,
{
    adapt::<(i64, f64), F>(f)
}

/// `fn(f64, i64) -> f64`.
pub fn float_int_to_float<F>(f: F) -> Callable
where
    F: Fn(f64, i64) -> f64 + Send + Sync + 'static,
{
    adapt::<(f64, i64), F>(f)
}

/// `fn(f64, i64) -> bool`.
pub fn float_int_to_bool<F>(f: F) -> Callable
where
    F: Fn(f64, i64) -> bool + Send + Sync + 'static,
{
    adapt::<(f64, i64), F>(f)
}
