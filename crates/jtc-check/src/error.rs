use std::fmt;

use jtc_types::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The first type error found in an expression tree.
///
/// Names are rendered with the type environment at the point of failure, so an error
/// stays printable after the environment is gone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),
    #[error("Wrong number of arguments for {callee}: expected {expected}, got {actual}")]
    ArgumentCount {
        callee: Callee,
        expected: usize,
        actual: usize,
    },
    #[error("{receiver} has no method named {method}")]
    NoSuchMethod { receiver: String, method: String },
    #[error("{ty} is not instantiable")]
    IllegalInstantiation { ty: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeMismatch {
    #[error("Cannot assign {value_type} to variable {variable} of type {variable_type}")]
    Assignment {
        value_type: String,
        variable: String,
        variable_type: String,
    },
    /// Carries the whole parameter and argument tuples, e.g. `(int, String)`, not just
    /// the first bad pair.
    #[error("{receiver}.{method}() expects arguments of type {expected}, but got {actual}")]
    MethodArguments {
        receiver: String,
        method: String,
        expected: String,
        actual: String,
    },
    #[error("{ty} constructor expects arguments of type {expected}, but got {actual}")]
    ConstructorArgument {
        ty: String,
        expected: String,
        actual: String,
    },
}

/// What was being invoked when an arity check failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callee {
    Method { receiver: String, method: String },
    Constructor { ty: String },
}

impl fmt::Display for Callee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callee::Method { receiver, method } => write!(f, "{receiver}.{method}()"),
            Callee::Constructor { ty } => write!(f, "{ty} constructor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeErrorKind {
    TypeMismatch,
    ArgumentCount,
    NoSuchMethod,
    IllegalInstantiation,
}

impl TypeErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeErrorKind::TypeMismatch => "type-mismatch",
            TypeErrorKind::ArgumentCount => "argument-count",
            TypeErrorKind::NoSuchMethod => "no-such-method",
            TypeErrorKind::IllegalInstantiation => "illegal-instantiation",
        }
    }
}

impl fmt::Display for TypeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TypeError {
    pub fn kind(&self) -> TypeErrorKind {
        match self {
            TypeError::TypeMismatch(_) => TypeErrorKind::TypeMismatch,
            TypeError::ArgumentCount { .. } => TypeErrorKind::ArgumentCount,
            TypeError::NoSuchMethod { .. } => TypeErrorKind::NoSuchMethod,
            TypeError::IllegalInstantiation { .. } => TypeErrorKind::IllegalInstantiation,
        }
    }

    /// Stable diagnostic code, e.g. `type-mismatch`.
    pub fn code(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string())
    }
}
