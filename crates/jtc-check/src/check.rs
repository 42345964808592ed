use jtc_types::{
    constructor, format_type, format_type_list, is_instantiable, is_subtype, method_named, Type,
    TypeEnv,
};
use serde::{Deserialize, Serialize};

use crate::{Callee, ConstructorCall, Expr, MethodCall, TypeError, TypeMismatch};

/// Which subexpressions a composite node validates after validating itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recursion {
    /// Assignments, method calls and constructor calls all descend into every child.
    ///
    /// A call whose receiver has no static type is accepted as a node, but the check still
    /// fails if its receiver or an argument is ill-typed.
    #[default]
    Uniform,
    /// Only constructor calls descend (into their arguments). Assignment right-hand sides,
    /// receivers and method arguments are consulted for their static types only.
    ConstructorArgsOnly,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckOptions {
    pub recursion: Recursion,
}

/// Fail-fast type checker over an [`Expr`] tree.
///
/// Nodes are visited pre-order, left to right; the first violation aborts the check.
pub struct Checker<'env> {
    env: &'env dyn TypeEnv,
    options: CheckOptions,
}

impl<'env> Checker<'env> {
    pub fn new(env: &'env dyn TypeEnv) -> Self {
        Self {
            env,
            options: CheckOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CheckOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    pub fn check(&self, expr: &Expr) -> Result<(), TypeError> {
        let result = self.check_expr(expr);
        if let Err(err) = &result {
            tracing::debug!(
                target: "jtc_check",
                code = err.code(),
                expr = %expr.display(self.env),
                "expression rejected: {err}"
            );
        }
        result
    }

    fn check_expr(&self, expr: &Expr) -> Result<(), TypeError> {
        tracing::trace!(target: "jtc_check", expr = %expr.display(self.env), "checking");

        match expr {
            Expr::Variable(_) | Expr::Literal(_) | Expr::Null(_) => {}
            Expr::Assignment(assign) => {
                let target = assign.lhs().declared_type();
                if let Some(value) = assign.rhs().static_type() {
                    if !is_subtype(self.env, &value, target) {
                        return Err(TypeMismatch::Assignment {
                            value_type: format_type(self.env, &value),
                            variable: assign.lhs().name().to_string(),
                            variable_type: format_type(self.env, target),
                        }
                        .into());
                    }
                }
            }
            Expr::MethodCall(call) => match call.receiver().static_type() {
                Some(receiver) => self.check_method_call(call, &receiver)?,
                None => {
                    tracing::trace!(
                        target: "jtc_check",
                        method = call.method_name(),
                        "receiver has no static type; call not verified"
                    );
                }
            },
            Expr::ConstructorCall(call) => self.check_constructor_call(call)?,
        }

        let descend = match self.options.recursion {
            Recursion::Uniform => true,
            Recursion::ConstructorArgsOnly => matches!(expr, Expr::ConstructorCall(_)),
        };
        if descend {
            for child in expr.children() {
                self.check_expr(child)?;
            }
        }
        Ok(())
    }

    fn check_method_call(&self, call: &MethodCall, receiver: &Type) -> Result<(), TypeError> {
        let receiver_name = format_type(self.env, receiver);
        let Some(method) = method_named(self.env, receiver, call.method_name()) else {
            return Err(TypeError::NoSuchMethod {
                receiver: receiver_name,
                method: call.method_name().to_string(),
            });
        };

        check_arity(
            || Callee::Method {
                receiver: receiver_name.clone(),
                method: call.method_name().to_string(),
            },
            method.params.len(),
            call.args().len(),
        )?;

        let arg_types: Vec<Option<Type>> = call.args().iter().map(Expr::static_type).collect();
        let compatible = arg_types
            .iter()
            .zip(&method.params)
            .all(|(arg, param)| arg.map_or(true, |arg| is_subtype(self.env, &arg, param)));
        if compatible {
            return Ok(());
        }

        Err(TypeMismatch::MethodArguments {
            receiver: receiver_name,
            method: call.method_name().to_string(),
            expected: format_type_list(self.env, method.params.iter().map(Some)),
            actual: format_type_list(self.env, arg_types.iter().map(Option::as_ref)),
        }
        .into())
    }

    fn check_constructor_call(&self, call: &ConstructorCall) -> Result<(), TypeError> {
        let ty = call.instantiated_type();
        let illegal = || TypeError::IllegalInstantiation {
            ty: format_type(self.env, ty),
        };
        if !is_instantiable(self.env, ty) {
            return Err(illegal());
        }
        let ctor = constructor(self.env, ty).ok_or_else(illegal)?;

        check_arity(
            || Callee::Constructor {
                ty: format_type(self.env, ty),
            },
            ctor.params.len(),
            call.args().len(),
        )?;

        for (arg, param) in call.args().iter().zip(&ctor.params) {
            let Some(arg_ty) = arg.static_type() else {
                continue;
            };
            if !is_subtype(self.env, &arg_ty, param) {
                return Err(TypeMismatch::ConstructorArgument {
                    ty: format_type(self.env, ty),
                    expected: format_type(self.env, param),
                    actual: format_type(self.env, &arg_ty),
                }
                .into());
            }
        }
        Ok(())
    }
}

fn check_arity(
    callee: impl FnOnce() -> Callee,
    expected: usize,
    actual: usize,
) -> Result<(), TypeError> {
    if expected == actual {
        return Ok(());
    }
    Err(TypeError::ArgumentCount {
        callee: callee(),
        expected,
        actual,
    })
}
