use crate::{Type, TypeEnv};

/// Render `ty` the way it would be spelled in Java source.
///
/// Class ids the environment does not know are rendered as `<unknown#N>` rather than
/// panicking, so diagnostics stay printable for malformed input.
pub fn format_type(env: &dyn TypeEnv, ty: &Type) -> String {
    match ty {
        Type::Void => "void".to_string(),
        Type::Primitive(p) => p.keyword().to_string(),
        Type::Null => "null".to_string(),
        Type::Class(id) => match env.class(*id) {
            Some(def) => def.name.clone(),
            None => format!("<unknown#{}>", id.to_raw()),
        },
    }
}

/// Render a parenthesised, comma separated type tuple, e.g. `(int, String)`.
///
/// `None` entries stand for expressions without a static type and render as `?`.
pub fn format_type_list<'a>(
    env: &dyn TypeEnv,
    types: impl IntoIterator<Item = Option<&'a Type>>,
) -> String {
    let parts: Vec<String> = types
        .into_iter()
        .map(|ty| match ty {
            Some(ty) => format_type(env, ty),
            None => "?".to_string(),
        })
        .collect();
    format!("({})", parts.join(", "))
}
