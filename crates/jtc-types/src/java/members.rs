use std::collections::{HashSet, VecDeque};

use crate::{ClassKind, ConstructorDef, MethodDef, Type, TypeEnv};

/// Look up the method called `name` on `ty`.
///
/// Methods declared on the class itself win; otherwise direct supertypes are searched
/// breadth-first in declaration order, and finally `Object`. Primitive, `void` and `null`
/// types have no methods.
pub fn method_named<'env>(env: &'env dyn TypeEnv, ty: &Type, name: &str) -> Option<&'env MethodDef> {
    let Type::Class(start) = ty else {
        return None;
    };

    let mut queue = VecDeque::from([*start]);
    let mut seen = HashSet::new();
    while let Some(current) = queue.pop_front() {
        if !seen.insert(current) {
            continue;
        }
        let Some(def) = env.class(current) else {
            continue;
        };
        if let Some(method) = def.declared_method(name) {
            return Some(method);
        }
        queue.extend(def.supertypes.iter().copied());
    }

    // Interfaces and classes without an explicit `Object` supertype still inherit from it.
    let object = env.well_known().object;
    if seen.contains(&object) {
        return None;
    }
    env.class(object)?.declared_method(name)
}

/// The single constructor of a class type.
///
/// Classes without a declared constructor get the implicit no-arg one. Non-class types
/// (and dangling class ids) have no constructor.
pub fn constructor(env: &dyn TypeEnv, ty: &Type) -> Option<ConstructorDef> {
    let Type::Class(id) = ty else {
        return None;
    };
    let def = env.class(*id)?;
    Some(def.constructor.clone().unwrap_or_default())
}

/// Whether `new T(...)` is legal for `ty`: only concrete, known classes qualify.
pub fn is_instantiable(env: &dyn TypeEnv, ty: &Type) -> bool {
    match ty {
        Type::Class(id) => env
            .class(*id)
            .is_some_and(|def| def.kind == ClassKind::Class),
        Type::Void | Type::Primitive(_) | Type::Null => false,
    }
}
