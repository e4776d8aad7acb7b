//! Runtime value universe.
//!
//! ## Key Types
//!
//! - [`Dynamic`]: the closed set of values script code manipulates
//! - [`Callable`]: type-erased function wrapper with the uniform call shape

mod callable;
mod dynamic;

pub use callable::Callable;
pub use dynamic::Dynamic;
