//! Generic adapter turning typed Rust functions into [`Callable`]s.
//!
//! [`NativeFunction`] is implemented for every `Fn(A1, ..., An) -> R` with
//! `n <= 6`, where each `Ai: FromDynamic` and `R: IntoReturn`. The arity and
//! the coercion applied at each position are fixed by the type system when
//! the adapter is built; a call only inspects the incoming arguments.
//!
//! A call proceeds in a fixed order:
//!
//! 1. Arity check: a length mismatch is an [`CallError::ArityMismatch`] and
//!    nothing else happens.
//! 2. Coercion, left to right: the first argument that does not convert stops
//!    the call with [`CallError::TypeCoercion`]. The native function is not
//!    invoked.
//! 3. Invocation with the coerced arguments in declared order.
//! 4. Boxing of the result through [`IntoReturn`].

use std::fmt;

use hostcall_core::{CallError, Callable, Dynamic, FromDynamic, IntoDynamic, NativeError};

/// Conversion of a native return value into the outcome of a call.
///
/// Plain values box infallibly. `Result<T, E>` boxes `Ok` and turns `Err`
/// into [`CallError::Native`], keeping the error's text.
pub trait IntoReturn {
    fn into_return(self) -> Result<Dynamic, CallError>;
}

macro_rules! impl_into_return {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoReturn for $ty {
                fn into_return(self) -> Result<Dynamic, CallError> {
                    Ok(self.into_dynamic())
                }
            }
        )*
    };
}

impl_into_return!(
    (),
    bool,
    i64,
    i32,
    f64,
    String,
    &'static str,
    Vec<String>,
    Vec<Dynamic>,
    Dynamic,
);

impl<T, E> IntoReturn for Result<T, E>
where
    T: IntoDynamic,
    E: fmt::Display,
{
    fn into_return(self) -> Result<Dynamic, CallError> {
        match self {
            Ok(value) => Ok(value.into_dynamic()),
            Err(err) => Err(CallError::Native(NativeError::from_display(err))),
        }
    }
}

/// A native function with a statically known calling shape.
///
/// `Args` is the tuple of parameter types; it only exists to keep the
/// implementations for different arities apart.
pub trait NativeFunction<Args>: Send + Sync + 'static {
    /// Number of arguments the function takes.
    const ARITY: usize;

    /// Check, coerce, invoke and box.
    fn invoke(&self, args: &[Dynamic]) -> Result<Dynamic, CallError>;
}

macro_rules! impl_native_function {
    ($arity:expr; $($ty:ident $var:ident $index:tt),*) => {
        impl<Func, Ret, $($ty,)*> NativeFunction<($($ty,)*)> for Func
        where
            Func: Fn($($ty),*) -> Ret + Send + Sync + 'static,
            Ret: IntoReturn,
            $($ty: FromDynamic,)*
        {
            const ARITY: usize = $arity;

            fn invoke(&self, args: &[Dynamic]) -> Result<Dynamic, CallError> {
                let [$($var),*] = args else {
                    return Err(CallError::ArityMismatch {
                        expected: Self::ARITY,
                        actual: args.len(),
                    });
                };
                $(
                    let $var = $ty::from_dynamic($var)
                        .map_err(|err| CallError::coercion($index, err))?;
                )*
                (self)($($var),*).into_return()
            }
        }
    };
}

impl_native_function!(0;);
impl_native_function!(1; A a 0);
impl_native_function!(2; A a 0, B b 1);
impl_native_function!(3; A a 0, B b 1, C c 2);
impl_native_function!(4; A a 0, B b 1, C c 2, D d 3);
impl_native_function!(5; A a 0, B b 1, C c 2, D d 3, E e 4);
impl_native_function!(6; A a 0, B b 1, C c 2, D d 3, E e 4, G g 5);

/// Build a [`Callable`] from a typed native function.
///
/// ```
/// use hostcall::{Dynamic, adapt};
///
/// let add = adapt(|a: f64, b: f64| a + b);
/// let sum = add.call(&[Dynamic::Int(2), Dynamic::Float(3.5)]).unwrap();
/// assert_eq!(sum, Dynamic::Float(5.5));
/// ```
///
/// Parameter types without a [`FromDynamic`] conversion are rejected when
/// the adapter is built, not when it is called:
///
/// ```compile_fail
/// use hostcall::adapt;
///
/// struct Handle;
/// let _ = adapt(|_h: Handle| 0i64);
/// ```
pub fn adapt<Args, F>(f: F) -> Callable
where
    F: NativeFunction<Args>,
{
    tracing::trace!(
        arity = F::ARITY,
        native = std::any::type_name::<F>(),
        "adapting native function"
    );
    Callable::with_arity(F::ARITY, move |args| f.invoke(args))
}
