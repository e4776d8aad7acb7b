//! Integration tests for registering adapters in a module table.

mod common;

use common::{CallCounter, init_test_logging};
use hostcall::{
    CallError, Dynamic, Module, RegistrationError, adapt, shapes, string_to_outcome,
};
use pretty_assertions::assert_eq;

/// A module in the style of a standard-library math table.
fn math_module() -> Module {
    let mut math = Module::new("math");
    math.register("abs", shapes::float_to_float(f64::abs))
        .unwrap()
        .register("ilogb", shapes::float_to_int(|x| x.abs().log2().floor() as i64))
        .unwrap()
        .register("signbit", shapes::float_to_bool(f64::is_sign_negative))
        .unwrap()
        .register("pow", shapes::float_float_to_float(f64::powf))
        .unwrap()
        .register("ldexp", shapes::float_int_to_float(|f, e| f * 2f64.powi(e as i32)))
        .unwrap()
        .function("hypot", |x: f64, y: f64| x.hypot(y))
        .unwrap();
    math
}

#[test]
fn module_lists_registered_names() {
    init_test_logging();
    let math = math_module();
    assert_eq!(math.name(), "math");
    assert_eq!(math.len(), 6);
    assert_eq!(
        math.names(),
        vec!["abs", "hypot", "ilogb", "ldexp", "pow", "signbit"]
    );
}

#[test]
fn module_dispatches_by_name() {
    let math = math_module();
    assert_eq!(math.call("abs", &[Dynamic::Int(-3)]), Ok(Dynamic::Float(3.0)));
    assert_eq!(math.call("ilogb", &[Dynamic::Float(8.5)]), Ok(Dynamic::Int(3)));
    assert_eq!(
        math.call("signbit", &[Dynamic::Float(-1.0)]),
        Ok(Dynamic::Bool(true))
    );
    assert_eq!(
        math.call("pow", &[Dynamic::Int(2), Dynamic::Int(10)]),
        Ok(Dynamic::Float(1024.0))
    );
    assert_eq!(
        math.call("ldexp", &[Dynamic::Float(0.5), Dynamic::Int(3)]),
        Ok(Dynamic::Float(4.0))
    );
}

#[test]
fn module_surfaces_call_failures() {
    let math = math_module();
    assert_eq!(
        math.call("pow", &[Dynamic::Int(2)]),
        Err(CallError::ArityMismatch {
            expected: 2,
            actual: 1
        })
    );
    assert!(matches!(
        math.call("abs", &[Dynamic::String("1".into())]),
        Err(CallError::TypeCoercion { index: 0, .. })
    ));
    assert_eq!(
        math.call("cbrt", &[Dynamic::Int(8)]),
        Err(CallError::UnknownFunction {
            name: "math.cbrt".into()
        })
    );
}

#[test]
fn duplicate_registration_keeps_the_first_callable() {
    let counter = CallCounter::new();
    let hits = counter.clone();
    let mut os = Module::new("os");
    os.register("exit", shapes::int_action(move |_| hits.hit()))
        .unwrap();

    let err = os
        .register("exit", shapes::action(|| panic!("must not be registered")))
        .unwrap_err();
    assert_eq!(
        err,
        RegistrationError::Duplicate {
            module: "os".into(),
            name: "exit".into(),
        }
    );

    assert_eq!(os.call("exit", &[Dynamic::Int(0)]), Ok(Dynamic::Undefined));
    assert_eq!(counter.count(), 1);
}

#[test]
fn callables_can_be_stored_as_values() {
    let mut os = Module::new("os");
    os.register(
        "chdir",
        string_to_outcome(|dir: String| {
            if dir.starts_with('/') {
                Ok(())
            } else {
                Err(format!("{dir}: relative paths are not allowed"))
            }
        }),
    )
    .unwrap();

    let chdir = Dynamic::Callable(os.get("chdir").unwrap().clone());
    let result = chdir
        .as_callable()
        .unwrap()
        .call(&[Dynamic::String("tmp".into())])
        .unwrap();
    assert_eq!(result, Dynamic::error("tmp: relative paths are not allowed"));
    assert_eq!(chdir.to_string(), "<callable/1>");

    // A callable argument passes through a Dynamic parameter untouched.
    let apply = adapt(|f: Dynamic, arg: Dynamic| match f {
        Dynamic::Callable(c) => c.call(&[arg]).unwrap_or_else(|e| Dynamic::error(e.to_string())),
        other => Dynamic::error(format!("{} is not callable", other.type_name())),
    });
    assert_eq!(
        apply.call(&[chdir.clone(), Dynamic::String("/".into())]),
        Ok(Dynamic::Bool(true))
    );
    assert_eq!(
        apply.call(&[Dynamic::Int(1), Dynamic::Undefined]),
        Ok(Dynamic::error("int is not callable"))
    );
}
