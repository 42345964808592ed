//! Static type checking for a small subset of Java expressions.
//!
//! The checker answers one question for an [`Expr`] tree: is it well-typed under Java's
//! subtyping and null-compatibility rules? It never evaluates anything and stops at the
//! first violation, reported as a structured [`TypeError`].
//!
//! ```
//! use jtc_check::{Expr, Variable};
//! use jtc_types::{Type, TypeStore};
//!
//! let env = TypeStore::new();
//! let assign = Expr::assign(
//!     Variable::new("x", Type::int()),
//!     Expr::literal("\"hello\"", env.string()),
//! );
//! let err = assign.check_types(&env).unwrap_err();
//! assert_eq!(err.to_string(), "Cannot assign String to variable x of type int");
//! ```

#![forbid(unsafe_code)]

mod check;
mod error;
mod expr;

pub use check::{CheckOptions, Checker, Recursion};
pub use error::{Callee, TypeError, TypeErrorKind, TypeMismatch};
pub use expr::{
    Assignment, ConstructorCall, DisplayExpr, Expr, Literal, MethodCall, NullLiteral, Variable,
};
