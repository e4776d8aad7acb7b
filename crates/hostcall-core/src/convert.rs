//! Conversions between native Rust values and [`Dynamic`] values.
//!
//! - [`FromDynamic`]: coerce a dynamic argument into a native primitive
//! - [`IntoDynamic`]: box a native value into a dynamic value
//!
//! ## Coercion rules
//!
//! An exact case match always succeeds. Numbers promote in both directions:
//! an `Int` requested as a float widens, a `Float` requested as an integer is
//! truncated toward zero. Every other combination fails and produces no
//! partial result. No coercion has side effects and none can panic.
//!
//! The free functions [`coerce_to_integer`], [`coerce_to_float`] and
//! [`coerce_to_text`] expose the same rules as predicates, and the `box_*`
//! functions name the boxing rules for callers that do not go through the
//! traits.

use crate::error::ConversionError;
use crate::kinds::KindSet;
use crate::runtime::Dynamic;

/// Extract a native value from a dynamic value.
pub trait FromDynamic: Sized {
    /// Kinds this conversion accepts, used in error messages.
    const ACCEPTS: KindSet;

    /// Convert the given value.
    ///
    /// Returns a `ConversionError` if the value's kind is not accepted.
    fn from_dynamic(value: &Dynamic) -> Result<Self, ConversionError>;
}

/// Convert a native value into a dynamic value. Never fails.
pub trait IntoDynamic {
    fn into_dynamic(self) -> Dynamic;
}

fn mismatch<T: FromDynamic>(value: &Dynamic) -> ConversionError {
    ConversionError::TypeMismatch {
        expected: T::ACCEPTS,
        actual: value.kind(),
    }
}

// ============================================================================
// Coercion
// ============================================================================

impl FromDynamic for i64 {
    const ACCEPTS: KindSet = KindSet::NUMBER;

    fn from_dynamic(value: &Dynamic) -> Result<Self, ConversionError> {
        match value {
            Dynamic::Int(v) => Ok(*v),
            // Truncates toward zero; saturates out of range, NaN becomes 0.
            Dynamic::Float(v) => Ok(*v as i64),
            Dynamic::Undefined
            | Dynamic::Bool(_)
            | Dynamic::String(_)
            | Dynamic::Array(_)
            | Dynamic::Callable(_)
            | Dynamic::Error(_) => Err(mismatch::<Self>(value)),
        }
    }
}

impl FromDynamic for i32 {
    const ACCEPTS: KindSet = KindSet::NUMBER;

    fn from_dynamic(value: &Dynamic) -> Result<Self, ConversionError> {
        let wide = i64::from_dynamic(value).map_err(|_| mismatch::<Self>(value))?;
        i32::try_from(wide).map_err(|_| ConversionError::IntegerOverflow {
            value: wide,
            target_type: "i32",
        })
    }
}

impl FromDynamic for f64 {
    const ACCEPTS: KindSet = KindSet::NUMBER;

    fn from_dynamic(value: &Dynamic) -> Result<Self, ConversionError> {
        match value {
            Dynamic::Float(v) => Ok(*v),
            Dynamic::Int(v) => Ok(*v as f64),
            Dynamic::Undefined
            | Dynamic::Bool(_)
            | Dynamic::String(_)
            | Dynamic::Array(_)
            | Dynamic::Callable(_)
            | Dynamic::Error(_) => Err(mismatch::<Self>(value)),
        }
    }
}

impl FromDynamic for String {
    const ACCEPTS: KindSet = KindSet::STRING;

    fn from_dynamic(value: &Dynamic) -> Result<Self, ConversionError> {
        match value {
            Dynamic::String(s) => Ok(s.clone()),
            Dynamic::Undefined
            | Dynamic::Bool(_)
            | Dynamic::Int(_)
            | Dynamic::Float(_)
            | Dynamic::Array(_)
            | Dynamic::Callable(_)
            | Dynamic::Error(_) => Err(mismatch::<Self>(value)),
        }
    }
}

impl FromDynamic for bool {
    const ACCEPTS: KindSet = KindSet::BOOL;

    fn from_dynamic(value: &Dynamic) -> Result<Self, ConversionError> {
        match value {
            Dynamic::Bool(v) => Ok(*v),
            Dynamic::Undefined
            | Dynamic::Int(_)
            | Dynamic::Float(_)
            | Dynamic::String(_)
            | Dynamic::Array(_)
            | Dynamic::Callable(_)
            | Dynamic::Error(_) => Err(mismatch::<Self>(value)),
        }
    }
}

/// Pass-through for native functions that inspect the value themselves.
impl FromDynamic for Dynamic {
    const ACCEPTS: KindSet = KindSet::all();

    fn from_dynamic(value: &Dynamic) -> Result<Self, ConversionError> {
        Ok(value.clone())
    }
}

/// Coerce to a 64-bit integer, truncating floats toward zero.
pub fn coerce_to_integer(value: &Dynamic) -> Option<i64> {
    i64::from_dynamic(value).ok()
}

/// Coerce to a 64-bit float, widening integers.
pub fn coerce_to_float(value: &Dynamic) -> Option<f64> {
    f64::from_dynamic(value).ok()
}

/// Coerce to text. Only string values qualify.
pub fn coerce_to_text(value: &Dynamic) -> Option<String> {
    String::from_dynamic(value).ok()
}

// ============================================================================
// Boxing
// ============================================================================

impl IntoDynamic for () {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Undefined
    }
}

impl IntoDynamic for bool {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Bool(self)
    }
}

impl IntoDynamic for i64 {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Int(self)
    }
}

impl IntoDynamic for i32 {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Int(self as i64)
    }
}

impl IntoDynamic for f64 {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Float(self)
    }
}

impl IntoDynamic for String {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::String(self)
    }
}

impl IntoDynamic for &str {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::String(self.to_owned())
    }
}

impl IntoDynamic for Vec<String> {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Array(self.into_iter().map(Dynamic::String).collect())
    }
}

impl IntoDynamic for Vec<Dynamic> {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Array(self)
    }
}

impl IntoDynamic for Dynamic {
    fn into_dynamic(self) -> Dynamic {
        self
    }
}

pub fn box_undefined() -> Dynamic {
    ().into_dynamic()
}

pub fn box_bool(value: bool) -> Dynamic {
    value.into_dynamic()
}

pub fn box_int(value: i64) -> Dynamic {
    value.into_dynamic()
}

pub fn box_float(value: f64) -> Dynamic {
    value.into_dynamic()
}

pub fn box_text(value: String) -> Dynamic {
    value.into_dynamic()
}

/// Box a sequence of strings as an array of string values, order preserved.
pub fn box_string_sequence(values: Vec<String>) -> Dynamic {
    values.into_dynamic()
}

/// Box a float as an integer, truncating toward zero (`3.9` becomes `3`,
/// `-3.9` becomes `-3`).
pub fn box_truncated(value: f64) -> Dynamic {
    Dynamic::Int(value as i64)
}
