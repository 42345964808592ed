//! Type universe shared by the jtc crates.
//!
//! The model is small: primitive types, `void`, the `null` type and
//! nominal class types. There are no generics, arrays or overloads; every class
//! declares at most one method per name and at most one constructor.

use serde::{Deserialize, Serialize};

pub mod java;

pub use java::env::{DefineClassError, TypeEnv, TypeStore, WellKnownTypes};
pub use java::format::{format_type, format_type_list};
pub use java::members::{constructor, is_instantiable, method_named};
pub use java::subtyping::is_subtype;

/// Index of a class definition inside a [`TypeStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassId(u32);

impl ClassId {
    pub(crate) fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub fn to_raw(self) -> u32 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    /// The Java keyword naming this primitive.
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Char => "char",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }
}

/// A compile-time type.
///
/// `Null` is the type of the `null` literal. It is a real type, distinct from
/// "no type known", which callers express as `Option<Type>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Void,
    Primitive(PrimitiveType),
    Null,
    Class(ClassId),
}

impl Type {
    pub fn class(id: ClassId) -> Self {
        Type::Class(id)
    }

    pub fn boolean() -> Self {
        Type::Primitive(PrimitiveType::Boolean)
    }

    pub fn int() -> Self {
        Type::Primitive(PrimitiveType::Int)
    }

    pub fn long() -> Self {
        Type::Primitive(PrimitiveType::Long)
    }

    pub fn double() -> Self {
        Type::Primitive(PrimitiveType::Double)
    }

    pub fn char() -> Self {
        Type::Primitive(PrimitiveType::Char)
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Type::Class(_) | Type::Null)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    /// A concrete class; the only kind that can be instantiated.
    Class,
    Abstract,
    Interface,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDef {
    pub name: String,
    pub params: Vec<Type>,
    pub return_type: Type,
}

impl MethodDef {
    pub fn new(name: impl Into<String>, params: Vec<Type>, return_type: Type) -> Self {
        Self {
            name: name.into(),
            params,
            return_type,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDef {
    pub params: Vec<Type>,
}

impl ConstructorDef {
    pub fn new(params: Vec<Type>) -> Self {
        Self { params }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    pub name: String,
    pub kind: ClassKind,
    /// Direct supertypes, in declaration order.
    #[serde(default)]
    pub supertypes: Vec<ClassId>,
    /// `None` means the implicit no-arg constructor.
    #[serde(default)]
    pub constructor: Option<ConstructorDef>,
    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

impl ClassDef {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            supertypes: Vec::new(),
            constructor: None,
            methods: Vec::new(),
        }
    }

    pub fn with_supertype(mut self, id: ClassId) -> Self {
        self.supertypes.push(id);
        self
    }

    pub fn with_constructor(mut self, params: Vec<Type>) -> Self {
        self.constructor = Some(ConstructorDef::new(params));
        self
    }

    pub fn with_method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    /// Method declared directly on this class (inherited methods are not considered).
    pub fn declared_method(&self, name: &str) -> Option<&MethodDef> {
        self.methods.iter().find(|m| m.name == name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    pub message: String,
}

impl Diagnostic {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
        }
    }
}
