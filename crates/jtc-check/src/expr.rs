//! Expression tree for the checked Java subset.
//!
//! Nodes are built bottom-up by whoever parses the source (declared types of variables are
//! already resolved at that point), own their children, and are never mutated afterwards.

use std::fmt;

use jtc_types::{format_type, Type, TypeEnv};

use crate::{Checker, TypeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Variable(Variable),
    Literal(Literal),
    Null(NullLiteral),
    Assignment(Assignment),
    MethodCall(MethodCall),
    ConstructorCall(ConstructorCall),
}

impl Expr {
    pub fn variable(name: impl Into<String>, declared_type: Type) -> Self {
        Expr::Variable(Variable::new(name, declared_type))
    }

    pub fn literal(value: impl Into<String>, ty: Type) -> Self {
        Expr::Literal(Literal::new(value, ty))
    }

    pub fn null() -> Self {
        Expr::Null(NullLiteral)
    }

    pub fn assign(lhs: Variable, rhs: Expr) -> Self {
        Expr::Assignment(Assignment::new(lhs, rhs))
    }

    pub fn call(receiver: Expr, method_name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::MethodCall(MethodCall::new(receiver, method_name, args))
    }

    pub fn new_object(instantiated_type: Type, args: Vec<Expr>) -> Self {
        Expr::ConstructorCall(ConstructorCall::new(instantiated_type, args))
    }

    /// The compile-time type of this expression, or `None` when it cannot be determined
    /// (method calls).
    pub fn static_type(&self) -> Option<Type> {
        match self {
            Expr::Variable(var) => Some(var.static_type()),
            Expr::Literal(lit) => Some(lit.static_type()),
            Expr::Null(null) => Some(null.static_type()),
            Expr::Assignment(assign) => Some(assign.static_type()),
            Expr::MethodCall(call) => call.static_type(),
            Expr::ConstructorCall(call) => Some(call.static_type()),
        }
    }

    /// Validate this expression with the default [`crate::CheckOptions`].
    ///
    /// Stops at the first violation.
    pub fn check_types(&self, env: &dyn TypeEnv) -> Result<(), TypeError> {
        Checker::new(env).check(self)
    }

    /// Direct subexpressions, left to right.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Variable(_) | Expr::Literal(_) | Expr::Null(_) => Vec::new(),
            Expr::Assignment(assign) => vec![assign.rhs()],
            Expr::MethodCall(call) => std::iter::once(call.receiver())
                .chain(call.args())
                .collect(),
            Expr::ConstructorCall(call) => call.args().iter().collect(),
        }
    }

    /// Java-like rendering; class names need the environment.
    pub fn display<'a>(&'a self, env: &'a dyn TypeEnv) -> DisplayExpr<'a> {
        DisplayExpr { expr: self, env }
    }
}

/// A read of a variable whose declared type is already known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
    declared_type: Type,
}

impl Variable {
    pub fn new(name: impl Into<String>, declared_type: Type) -> Self {
        Self {
            name: name.into(),
            declared_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_type(&self) -> &Type {
        &self.declared_type
    }

    pub fn static_type(&self) -> Type {
        self.declared_type
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    value: String,
    ty: Type,
}

impl Literal {
    /// `value` is the literal as spelled in source, e.g. `5` or `"hello"`.
    pub fn new(value: impl Into<String>, ty: Type) -> Self {
        Self {
            value: value.into(),
            ty,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn static_type(&self) -> Type {
        self.ty
    }
}

/// The `null` literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullLiteral;

impl NullLiteral {
    pub fn value(&self) -> &'static str {
        "null"
    }

    pub fn static_type(&self) -> Type {
        Type::Null
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    lhs: Variable,
    rhs: Box<Expr>,
}

impl Assignment {
    pub fn new(lhs: Variable, rhs: Expr) -> Self {
        Self {
            lhs,
            rhs: Box::new(rhs),
        }
    }

    pub fn lhs(&self) -> &Variable {
        &self.lhs
    }

    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }

    pub fn static_type(&self) -> Type {
        self.lhs.static_type()
    }
}

/// `receiver.method_name(args...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    receiver: Box<Expr>,
    method_name: String,
    args: Vec<Expr>,
}

impl MethodCall {
    pub fn new(receiver: Expr, method_name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            receiver: Box::new(receiver),
            method_name: method_name.into(),
            args,
        }
    }

    pub fn receiver(&self) -> &Expr {
        &self.receiver
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn args(&self) -> &[Expr] {
        &self.args
    }

    /// Calls have no static type in this model, so chained calls are never verified
    /// against their receiver.
    pub fn static_type(&self) -> Option<Type> {
        None
    }
}

/// `new instantiated_type(args...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorCall {
    instantiated_type: Type,
    args: Vec<Expr>,
}

impl ConstructorCall {
    pub fn new(instantiated_type: Type, args: Vec<Expr>) -> Self {
        Self {
            instantiated_type,
            args,
        }
    }

    pub fn instantiated_type(&self) -> &Type {
        &self.instantiated_type
    }

    pub fn args(&self) -> &[Expr] {
        &self.args
    }

    pub fn static_type(&self) -> Type {
        self.instantiated_type
    }
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Expr::Variable(var)
    }
}

impl From<Literal> for Expr {
    fn from(lit: Literal) -> Self {
        Expr::Literal(lit)
    }
}

impl From<NullLiteral> for Expr {
    fn from(null: NullLiteral) -> Self {
        Expr::Null(null)
    }
}

impl From<Assignment> for Expr {
    fn from(assign: Assignment) -> Self {
        Expr::Assignment(assign)
    }
}

impl From<MethodCall> for Expr {
    fn from(call: MethodCall) -> Self {
        Expr::MethodCall(call)
    }
}

impl From<ConstructorCall> for Expr {
    fn from(call: ConstructorCall) -> Self {
        Expr::ConstructorCall(call)
    }
}

pub struct DisplayExpr<'a> {
    expr: &'a Expr,
    env: &'a dyn TypeEnv,
}

impl DisplayExpr<'_> {
    fn args(&self, f: &mut fmt::Formatter<'_>, args: &[Expr]) -> fmt::Result {
        f.write_str("(")?;
        for (idx, arg) in args.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg.display(self.env))?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for DisplayExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expr {
            Expr::Variable(var) => f.write_str(var.name()),
            Expr::Literal(lit) => f.write_str(lit.value()),
            Expr::Null(null) => f.write_str(null.value()),
            Expr::Assignment(assign) => {
                write!(f, "{} = {}", assign.lhs().name(), assign.rhs().display(self.env))
            }
            Expr::MethodCall(call) => {
                write!(f, "{}.{}", call.receiver().display(self.env), call.method_name())?;
                self.args(f, call.args())
            }
            Expr::ConstructorCall(call) => {
                write!(f, "new {}", format_type(self.env, call.instantiated_type()))?;
                self.args(f, call.args())
            }
        }
    }
}
