//! Dynamic value type seen by script code.

use std::fmt;

use super::Callable;
use crate::kinds::ValueKind;

/// A dynamically-typed script value.
///
/// The set of cases is closed; code that inspects a `Dynamic` matches on it
/// exhaustively so a new case cannot be silently ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Dynamic {
    /// Absence of a value
    #[default]
    Undefined,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value (owned)
    String(String),
    /// Ordered sequence of values
    Array(Vec<Dynamic>),
    /// Function value
    Callable(Callable),
    /// Error value carrying a payload, usually the error text
    Error(Box<Dynamic>),
}

impl Dynamic {
    /// Create an error value carrying `message` as its payload.
    pub fn error(message: impl Into<String>) -> Self {
        Dynamic::Error(Box::new(Dynamic::String(message.into())))
    }

    /// Get the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Dynamic::Undefined => ValueKind::Undefined,
            Dynamic::Bool(_) => ValueKind::Bool,
            Dynamic::Int(_) => ValueKind::Int,
            Dynamic::Float(_) => ValueKind::Float,
            Dynamic::String(_) => ValueKind::String,
            Dynamic::Array(_) => ValueKind::Array,
            Dynamic::Callable(_) => ValueKind::Callable,
            Dynamic::Error(_) => ValueKind::Error,
        }
    }

    /// Get a human-readable name for this value's type.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Check if this value is undefined.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Dynamic::Undefined)
    }

    /// Check if this value is an error value.
    pub fn is_error(&self) -> bool {
        matches!(self, Dynamic::Error(_))
    }

    /// Get the boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Dynamic::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the integer payload, if this is an `Int`. Floats are not converted.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Dynamic::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the float payload, if this is a `Float`. Integers are not converted.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Dynamic::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Borrow the string payload, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Dynamic::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the elements, if this is an `Array`.
    pub fn as_array(&self) -> Option<&[Dynamic]> {
        match self {
            Dynamic::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the callable, if this is a `Callable`.
    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Dynamic::Callable(c) => Some(c),
            _ => None,
        }
    }

    /// Payload of an error value.
    pub fn error_payload(&self) -> Option<&Dynamic> {
        match self {
            Dynamic::Error(payload) => Some(payload),
            _ => None,
        }
    }
}

impl fmt::Display for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dynamic::Undefined => f.write_str("undefined"),
            Dynamic::Bool(v) => write!(f, "{}", v),
            Dynamic::Int(v) => write!(f, "{}", v),
            Dynamic::Float(v) => write!(f, "{}", v),
            Dynamic::String(s) => write!(f, "{:?}", s),
            Dynamic::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Dynamic::Callable(c) => match c.arity() {
                Some(arity) => write!(f, "<callable/{}>", arity),
                None => f.write_str("<callable>"),
            },
            Dynamic::Error(payload) => write!(f, "error({})", payload),
        }
    }
}
