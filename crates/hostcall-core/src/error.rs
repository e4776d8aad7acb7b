//! Error types for native calls.
//!
//! ## Error Hierarchy
//!
//! ```text
//! CallError             - why a Callable invocation did not produce a value
//! ├── ArityMismatch     - wrong number of arguments
//! ├── TypeCoercion      - an argument could not be converted (wraps ConversionError)
//! ├── Native            - the native function itself reported failure (wraps NativeError)
//! └── UnknownFunction   - a module lookup found nothing under the name
//! RegistrationError     - a callable could not be added to a module
//! ```
//!
//! Failures are plain data. The embedding runtime decides how they surface
//! to script code; [`CallError::is_invalid_call`] groups the variants that
//! are usually reported as a generic "invalid call".

use thiserror::Error;

use crate::kinds::{KindSet, ValueKind};

// ============================================================================
// Conversion Errors
// ============================================================================

/// Errors produced when a dynamic value cannot become a native primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The value's kind is not one the target type accepts.
    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        /// Kinds the target type accepts.
        expected: KindSet,
        /// Kind of the value that was supplied.
        actual: ValueKind,
    },

    /// An integer value does not fit the narrower native integer.
    #[error("integer overflow: {value} doesn't fit in {target_type}")]
    IntegerOverflow {
        /// The value that overflowed.
        value: i64,
        /// The native target type.
        target_type: &'static str,
    },
}

// ============================================================================
// Native Errors
// ============================================================================

/// Failure reported by a native function.
///
/// Only the descriptive text of the host error is kept, so the error can be
/// cloned and compared regardless of the host error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NativeError {
    message: String,
}

impl NativeError {
    /// Create a native error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Create a native error from anything displayable, typically a host error.
    pub fn from_display(err: impl std::fmt::Display) -> Self {
        Self::new(err.to_string())
    }

    /// The native error's descriptive text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for NativeError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for NativeError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

// ============================================================================
// Call Errors
// ============================================================================

/// Why a call through a [`Callable`](crate::Callable) failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    /// The number of arguments differs from the adapter's arity.
    #[error("wrong number of arguments: expected {expected}, got {actual}")]
    ArityMismatch {
        /// Declared arity.
        expected: usize,
        /// Number of arguments received.
        actual: usize,
    },

    /// The argument at `index` (zero-based) could not be coerced.
    #[error("invalid type for argument #{}: {source}", .index + 1)]
    TypeCoercion {
        /// Zero-based argument position.
        index: usize,
        /// The underlying conversion failure.
        source: ConversionError,
    },

    /// The native function reported an error.
    #[error("native function failed: {0}")]
    Native(#[from] NativeError),

    /// No function is registered under the requested name.
    #[error("unknown function '{name}'")]
    UnknownFunction {
        /// The name that was looked up.
        name: String,
    },
}

impl CallError {
    /// Build a coercion failure for the argument at `index`.
    pub fn coercion(index: usize, source: ConversionError) -> Self {
        CallError::TypeCoercion { index, source }
    }

    /// Check if this is an arity or coercion failure.
    ///
    /// These are caused by the caller, not by the native function, and are
    /// normally reported to scripts as the same class of error.
    pub fn is_invalid_call(&self) -> bool {
        matches!(
            self,
            CallError::ArityMismatch { .. } | CallError::TypeCoercion { .. }
        )
    }

    /// Check if the native function itself failed.
    pub fn is_native(&self) -> bool {
        matches!(self, CallError::Native(_))
    }
}

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors that occur when adding callables to a module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A function with this name is already registered.
    #[error("duplicate function '{name}' in module '{module}'")]
    Duplicate {
        /// The module being populated.
        module: String,
        /// The conflicting function name.
        name: String,
    },

    /// Function names must not be empty.
    #[error("empty function name in module '{module}'")]
    EmptyName {
        /// The module being populated.
        module: String,
    },
}

// ============================================================================
// Tests
// ============================================================================
