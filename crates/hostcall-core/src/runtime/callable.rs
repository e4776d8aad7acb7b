//! Uniform callable wrapper stored in script values and module tables.

use std::fmt;
use std::sync::Arc;

use super::Dynamic;
use crate::error::CallError;

type CallFn = dyn Fn(&[Dynamic]) -> Result<Dynamic, CallError> + Send + Sync;

/// Type-erased function invocable from script code.
///
/// Every native function, whatever its signature, is reduced to this one
/// shape: a slice of dynamic arguments in, one dynamic value or a
/// [`CallError`] out. The wrapped closure is owned through an `Arc`, so
/// cloning a `Callable` shares the same function and never copies captured
/// state.
///
/// Two callables compare equal only if they are clones of one another.
#[derive(Clone)]
pub struct Callable {
    arity: Option<usize>,
    inner: Arc<CallFn>,
}

impl Callable {
    /// Wrap a closure that checks its own arguments and expects exactly
    /// `arity` of them.
    ///
    /// The arity is recorded for diagnostics and introspection; enforcing it
    /// is the closure's job.
    pub fn with_arity<F>(arity: usize, f: F) -> Self
    where
        F: Fn(&[Dynamic]) -> Result<Dynamic, CallError> + Send + Sync + 'static,
    {
        Self {
            arity: Some(arity),
            inner: Arc::new(f),
        }
    }

    /// Wrap a closure that already speaks the uniform contract and has no
    /// fixed arity.
    pub fn raw<F>(f: F) -> Self
    where
        F: Fn(&[Dynamic]) -> Result<Dynamic, CallError> + Send + Sync + 'static,
    {
        Self {
            arity: None,
            inner: Arc::new(f),
        }
    }

    /// Declared number of arguments, if fixed.
    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    /// Invoke the function.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn call(&self, args: &[Dynamic]) -> Result<Dynamic, CallError> {
        let result = (self.inner)(args);
        if let Err(err) = &result {
            tracing::debug!(arity = ?self.arity, args = args.len(), %err, "native call failed");
        }
        result
    }

    /// Check whether both callables share the same underlying function.
    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
