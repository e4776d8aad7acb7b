//! Named tables of callables.
//!
//! A [`Module`] is what a runtime's name resolver consumes: the host builds
//! it once, registering adapted native functions under script-visible names,
//! and the runtime looks callables up by name for the module's lifetime.
//!
//! # Example
//!
//! ```
//! use hostcall::{Dynamic, Module, shapes};
//!
//! let mut math = Module::new("math");
//! math.register("sqrt", shapes::float_to_float(f64::sqrt))
//!     .unwrap()
//!     .function("max", |a: f64, b: f64| a.max(b))
//!     .unwrap();
//!
//! assert_eq!(math.call("sqrt", &[Dynamic::Int(9)]).unwrap(), Dynamic::Float(3.0));
//! assert_eq!(math.names(), vec!["max", "sqrt"]);
//! ```

use rustc_hash::FxHashMap;

use hostcall_core::{CallError, Callable, Dynamic, RegistrationError};

use crate::adapter::{NativeFunction, adapt};

/// A named table of callables.
#[derive(Debug, Clone, Default)]
pub struct Module {
    name: String,
    functions: FxHashMap<String, Callable>,
}

impl Module {
    /// Create an empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: FxHashMap::default(),
        }
    }

    /// The module's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a callable under `name`.
    ///
    /// Names must be non-empty and unique within the module.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        callable: Callable,
    ) -> Result<&mut Self, RegistrationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistrationError::EmptyName {
                module: self.name.clone(),
            });
        }
        if self.functions.contains_key(&name) {
            return Err(RegistrationError::Duplicate {
                module: self.name.clone(),
                name,
            });
        }

        tracing::trace!(module = %self.name, function = %name, arity = ?callable.arity(), "registering function");
        self.functions.insert(name, callable);
        Ok(self)
    }

    /// Adapt a typed native function and register it under `name`.
    pub fn function<Args, F>(
        &mut self,
        name: impl Into<String>,
        f: F,
    ) -> Result<&mut Self, RegistrationError>
    where
        F: NativeFunction<Args>,
    {
        self.register(name, adapt(f))
    }

    /// Look up a callable by name.
    pub fn get(&self, name: &str) -> Option<&Callable> {
        self.functions.get(name)
    }

    /// Check if a callable is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Look up `name` and call it with `args`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn call(&self, name: &str, args: &[Dynamic]) -> Result<Dynamic, CallError> {
        let callable = self.get(name).ok_or_else(|| CallError::UnknownFunction {
            name: format!("{}.{}", self.name, name),
        })?;
        callable.call(args)
    }

    /// Number of registered callables.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if no callables are registered.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over `(name, callable)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Callable)> {
        self.functions
            .iter()
            .map(|(name, callable)| (name.as_str(), callable))
    }
}
