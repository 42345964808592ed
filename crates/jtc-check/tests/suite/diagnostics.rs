use jtc_check::{CheckOptions, Expr, Recursion, TypeErrorKind, Variable};
use jtc_types::{Diagnostic, Severity, Type};

use super::{int, string_lit, Fixture};

#[test]
fn error_messages() {
    let fx = Fixture::new();

    let mismatch = Expr::call(
        Expr::variable("foo", fx.foo),
        "describe",
        vec![string_lit(&fx, "x"), int(1)],
    )
    .check_types(&fx.env)
    .unwrap_err();
    insta::assert_snapshot!(
        mismatch,
        @"Foo.describe() expects arguments of type (int, String), but got (String, int)"
    );

    let arity = Expr::call(Expr::variable("foo", fx.foo), "describe", vec![])
        .check_types(&fx.env)
        .unwrap_err();
    insta::assert_snapshot!(
        arity,
        @"Wrong number of arguments for Foo.describe(): expected 2, got 0"
    );

    let illegal = Expr::new_object(fx.pet, vec![])
        .check_types(&fx.env)
        .unwrap_err();
    insta::assert_snapshot!(illegal, @"Pet is not instantiable");
}

#[test]
fn errors_convert_to_serializable_diagnostics() {
    let fx = Fixture::new();
    let err = Expr::assign(Variable::new("x", Type::int()), string_lit(&fx, "hello"))
        .check_types(&fx.env)
        .unwrap_err();

    let diagnostic = err.to_diagnostic();
    assert_eq!(
        diagnostic,
        Diagnostic::error("type-mismatch", "Cannot assign String to variable x of type int")
    );
    assert_eq!(diagnostic.severity, Severity::Error);

    let json = serde_json::to_value(&diagnostic).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "severity": "error",
            "code": "type-mismatch",
            "message": "Cannot assign String to variable x of type int",
        })
    );
}

#[test]
fn error_kinds_have_stable_codes() {
    let codes: Vec<String> = [
        TypeErrorKind::TypeMismatch,
        TypeErrorKind::ArgumentCount,
        TypeErrorKind::NoSuchMethod,
        TypeErrorKind::IllegalInstantiation,
    ]
    .iter()
    .map(|kind| serde_json::to_value(kind).unwrap().as_str().unwrap().to_string())
    .collect();

    assert_eq!(
        codes,
        vec![
            "type-mismatch",
            "argument-count",
            "no-such-method",
            "illegal-instantiation"
        ]
    );
}

#[test]
fn options_deserialize_from_json() {
    let options: CheckOptions =
        serde_json::from_value(serde_json::json!({ "recursion": "constructor-args-only" }))
            .unwrap();
    assert_eq!(options.recursion, Recursion::ConstructorArgsOnly);

    let defaults: CheckOptions = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(defaults, CheckOptions::default());

    assert!(serde_json::from_value::<CheckOptions>(serde_json::json!({ "depth": 3 })).is_err());
}

#[test]
fn expressions_render_as_java_source() {
    let fx = Fixture::new();
    let expr = Expr::assign(
        Variable::new("ok", Type::boolean()),
        Expr::call(
            Expr::new_object(fx.kennel, vec![Expr::null()]),
            "admit",
            vec![Expr::variable("rex", fx.dog), int(2)],
        ),
    );
    insta::assert_snapshot!(
        expr.display(&fx.env),
        @"ok = new Kennel(null).admit(rex, 2)"
    );
}
