use jtc_check::{Callee, Expr, TypeError, TypeErrorKind, TypeMismatch};
use jtc_types::Type;
use pretty_assertions::assert_eq;

use super::{int, string_lit, Fixture};

#[test]
fn well_typed_call_succeeds() {
    let fx = Fixture::new();
    let expr = Expr::call(
        Expr::variable("foo", fx.foo),
        "describe",
        vec![int(1), string_lit(&fx, "x")],
    );
    assert_eq!(expr.check_types(&fx.env), Ok(()));
}

#[test]
fn arguments_may_be_subtypes_or_null() {
    let fx = Fixture::new();
    let kennel = || Expr::variable("k", fx.kennel);

    let with_dog = Expr::call(
        kennel(),
        "admit",
        vec![Expr::variable("d", fx.dog), int(3)],
    );
    assert_eq!(with_dog.check_types(&fx.env), Ok(()));

    let with_null = Expr::call(kennel(), "admit", vec![Expr::null(), int(3)]);
    assert_eq!(with_null.check_types(&fx.env), Ok(()));
}

#[test]
fn inherited_methods_resolve() {
    let fx = Fixture::new();
    let dog = || Expr::variable("d", fx.dog);

    // From the abstract superclass, the interface, and Object.
    assert_eq!(Expr::call(dog(), "feed", vec![int(1)]).check_types(&fx.env), Ok(()));
    assert_eq!(Expr::call(dog(), "name", vec![]).check_types(&fx.env), Ok(()));
    assert_eq!(
        Expr::call(dog(), "equals", vec![Expr::variable("o", fx.object())]).check_types(&fx.env),
        Ok(())
    );
}

#[test]
fn missing_method_on_subtype_reports_receiver_type() {
    let fx = Fixture::new();
    let expr = Expr::call(Expr::variable("a", fx.animal), "sibling", vec![]);

    assert_eq!(
        expr.check_types(&fx.env),
        Err(TypeError::NoSuchMethod {
            receiver: "Animal".to_string(),
            method: "sibling".to_string(),
        })
    );
}

#[test]
fn primitive_and_null_receivers_have_no_methods() {
    let fx = Fixture::new();

    let on_int = Expr::call(int(5), "toString", vec![]);
    assert_eq!(
        on_int.check_types(&fx.env).unwrap_err().to_string(),
        "int has no method named toString"
    );

    let on_null = Expr::call(Expr::null(), "hashCode", vec![]);
    assert_eq!(
        on_null.check_types(&fx.env).unwrap_err().to_string(),
        "null has no method named hashCode"
    );
}

#[test]
fn wrong_arity_is_an_argument_count_error() {
    let fx = Fixture::new();
    let expr = Expr::call(Expr::variable("p", fx.point), "moveBy", vec![int(1)]);

    assert_eq!(
        expr.check_types(&fx.env),
        Err(TypeError::ArgumentCount {
            callee: Callee::Method {
                receiver: "Point".to_string(),
                method: "moveBy".to_string(),
            },
            expected: 2,
            actual: 1,
        })
    );
}

#[test]
fn arity_is_checked_before_argument_types() {
    let fx = Fixture::new();
    let expr = Expr::call(
        Expr::variable("p", fx.point),
        "moveBy",
        vec![Expr::null(), Expr::null(), Expr::null()],
    );
    assert_eq!(
        expr.check_types(&fx.env).unwrap_err().kind(),
        TypeErrorKind::ArgumentCount
    );
}

#[test]
fn one_bad_argument_reports_full_tuples() {
    let fx = Fixture::new();
    let expr = Expr::call(
        Expr::variable("k", fx.kennel),
        "admit",
        vec![Expr::variable("d", fx.dog), Expr::literal("true", Type::boolean())],
    );

    assert_eq!(
        expr.check_types(&fx.env),
        Err(TypeError::TypeMismatch(TypeMismatch::MethodArguments {
            receiver: "Kennel".to_string(),
            method: "admit".to_string(),
            expected: "(Animal, int)".to_string(),
            actual: "(Dog, boolean)".to_string(),
        }))
    );
}

#[test]
fn receiver_without_static_type_is_not_verified() {
    let fx = Fixture::new();
    // `d.sibling().nonsense(1, 2, 3)`: the outer receiver is itself a call, so it has no
    // static type and the outer call cannot be checked.
    let expr = Expr::call(
        Expr::call(Expr::variable("d", fx.dog), "sibling", vec![]),
        "nonsense",
        vec![int(1), int(2), int(3)],
    );
    assert_eq!(expr.check_types(&fx.env), Ok(()));
}

#[test]
fn constructed_receiver_is_typed() {
    let fx = Fixture::new();
    let expr = Expr::call(
        Expr::new_object(fx.point, vec![int(0), int(0)]),
        "moveBy",
        vec![int(1), string_lit(&fx, "2")],
    );
    assert_eq!(
        expr.check_types(&fx.env).unwrap_err().to_string(),
        "Point.moveBy() expects arguments of type (int, int), but got (int, String)"
    );
}
