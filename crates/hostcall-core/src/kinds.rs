//! Value kind tags used by conversions and diagnostics.

use std::fmt;

use bitflags::bitflags;

/// The case of a [`Dynamic`](crate::Dynamic) value, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Bool,
    Int,
    Float,
    String,
    Array,
    Callable,
    Error,
}

impl ValueKind {
    /// Every kind, in declaration order.
    pub const ALL: [ValueKind; 8] = [
        ValueKind::Undefined,
        ValueKind::Bool,
        ValueKind::Int,
        ValueKind::Float,
        ValueKind::String,
        ValueKind::Array,
        ValueKind::Callable,
        ValueKind::Error,
    ];

    /// Script-facing name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Callable => "callable",
            ValueKind::Error => "error",
        }
    }

    /// The single-member set containing this kind.
    pub fn as_set(self) -> KindSet {
        match self {
            ValueKind::Undefined => KindSet::UNDEFINED,
            ValueKind::Bool => KindSet::BOOL,
            ValueKind::Int => KindSet::INT,
            ValueKind::Float => KindSet::FLOAT,
            ValueKind::String => KindSet::STRING,
            ValueKind::Array => KindSet::ARRAY,
            ValueKind::Callable => KindSet::CALLABLE,
            ValueKind::Error => KindSet::ERROR,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of value kinds, e.g. the kinds a conversion accepts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KindSet: u8 {
        const UNDEFINED = 1 << 0;
        const BOOL = 1 << 1;
        const INT = 1 << 2;
        const FLOAT = 1 << 3;
        const STRING = 1 << 4;
        const ARRAY = 1 << 5;
        const CALLABLE = 1 << 6;
        const ERROR = 1 << 7;

        /// Kinds accepted wherever a number is expected.
        const NUMBER = Self::INT.bits() | Self::FLOAT.bits();
    }
}

impl KindSet {
    /// Check whether `kind` is a member of this set.
    pub fn accepts(self, kind: ValueKind) -> bool {
        self.contains(kind.as_set())
    }

    /// Iterate the member kinds in declaration order.
    pub fn kinds(self) -> impl Iterator<Item = ValueKind> {
        ValueKind::ALL
            .into_iter()
            .filter(move |kind| self.accepts(*kind))
    }
}

impl fmt::Display for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            return f.write_str("any");
        }
        if self.is_empty() {
            return f.write_str("nothing");
        }
        for (i, kind) in self.kinds().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            f.write_str(kind.name())?;
        }
        Ok(())
    }
}
