use std::collections::{HashSet, VecDeque};

use crate::{ClassId, Type, TypeEnv};

/// Reflexive, transitive subtype check (`sub <: sup`).
///
/// * Every type is a subtype of itself.
/// * `null` is a subtype of every reference type.
/// * Every class type is a subtype of `Object`.
/// * Class types are otherwise related through their declared direct supertypes.
/// * Primitives and `void` only relate to themselves; no widening is modelled.
pub fn is_subtype(env: &dyn TypeEnv, sub: &Type, sup: &Type) -> bool {
    if sub == sup {
        return true;
    }

    match (sub, sup) {
        (Type::Null, sup) => sup.is_reference(),
        (Type::Class(sub), Type::Class(sup)) => {
            *sup == env.well_known().object || class_extends(env, *sub, *sup)
        }
        _ => false,
    }
}

/// Walk the supertype graph of `sub` breadth-first looking for `target`.
///
/// Malformed hierarchies (cycles, dangling ids) are tolerated: each class is visited at
/// most once and missing definitions are skipped.
fn class_extends(env: &dyn TypeEnv, sub: ClassId, target: ClassId) -> bool {
    let mut queue = VecDeque::from([sub]);
    let mut seen = HashSet::new();

    while let Some(current) = queue.pop_front() {
        if current == target {
            return true;
        }
        if !seen.insert(current) {
            continue;
        }
        let Some(def) = env.class(current) else {
            continue;
        };
        queue.extend(def.supertypes.iter().copied());
    }

    false
}
