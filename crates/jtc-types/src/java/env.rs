use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use thiserror::Error;

use crate::{ClassDef, ClassId, ClassKind, MethodDef, Type};

/// Read-only view of a type universe.
///
/// The checker only ever queries an environment; it never mutates one, so a single
/// environment can back any number of concurrent checks.
pub trait TypeEnv {
    fn class(&self, id: ClassId) -> Option<&ClassDef>;

    fn lookup_class(&self, name: &str) -> Option<ClassId>;

    fn well_known(&self) -> &WellKnownTypes;
}

/// Ids of the classes every [`TypeStore`] defines up front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellKnownTypes {
    pub object: ClassId,
    pub string: ClassId,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefineClassError {
    #[error("unknown class id {}", .0.to_raw())]
    UnknownClass(ClassId),
    #[error("class name {name} already belongs to another class")]
    NameTaken { name: String },
}

/// In-memory [`TypeEnv`] implementation.
///
/// Class ids are stable: redefining a class (via [`TypeStore::define_class`] or
/// [`TypeStore::add_class`] with an existing name) replaces its definition in place.
#[derive(Clone, Debug)]
pub struct TypeStore {
    classes: Vec<ClassDef>,
    by_name: HashMap<String, ClassId>,
    well_known: WellKnownTypes,
}

impl Default for TypeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeStore {
    /// A store containing only the built-in `Object` and `String` classes.
    pub fn new() -> Self {
        let placeholder = ClassId::new(0);
        let mut store = Self {
            classes: Vec::new(),
            by_name: HashMap::new(),
            well_known: WellKnownTypes {
                object: placeholder,
                string: placeholder,
            },
        };

        let object = store.intern_class_id("Object");
        let string = store.intern_class_id("String");
        store.well_known = WellKnownTypes { object, string };

        let object_ty = Type::class(object);
        let string_ty = Type::class(string);

        store.add_class(
            ClassDef::new("Object", ClassKind::Class)
                .with_method(MethodDef::new("equals", vec![object_ty], Type::boolean()))
                .with_method(MethodDef::new("hashCode", vec![], Type::int()))
                .with_method(MethodDef::new("toString", vec![], string_ty)),
        );
        store.add_class(
            ClassDef::new("String", ClassKind::Class)
                .with_supertype(object)
                .with_method(MethodDef::new("length", vec![], Type::int()))
                .with_method(MethodDef::new("isEmpty", vec![], Type::boolean()))
                .with_method(MethodDef::new("charAt", vec![Type::int()], Type::char()))
                .with_method(MethodDef::new("concat", vec![string_ty], string_ty)),
        );

        store
    }

    /// Return the id for `name`, allocating a placeholder class if it is not known yet.
    ///
    /// Placeholders let callers build mutually-referencing classes: intern every name
    /// first, then [`define_class`](Self::define_class) each one.
    pub fn intern_class_id(&mut self, name: &str) -> ClassId {
        if let Some(id) = self.by_name.get(name) {
            return *id;
        }

        let idx: u32 = self
            .classes
            .len()
            .try_into()
            .expect("too many classes in type store");
        let id = ClassId::new(idx);
        self.classes.push(ClassDef::new(name, ClassKind::Class));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Replace the definition behind `id`.
    ///
    /// If the new definition carries a different name, the name index is updated too. A
    /// name that already belongs to another class is rejected, as is an id this store never
    /// handed out.
    pub fn define_class(&mut self, id: ClassId, def: ClassDef) -> Result<(), DefineClassError> {
        let Some(current) = self.classes.get(id.index()) else {
            return Err(DefineClassError::UnknownClass(id));
        };
        if current.name != def.name {
            if self.by_name.contains_key(&def.name) {
                return Err(DefineClassError::NameTaken { name: def.name });
            }
            self.by_name.remove(&current.name);
            self.by_name.insert(def.name.clone(), id);
        }
        self.classes[id.index()] = def;
        Ok(())
    }

    /// Insert `def`, overwriting any existing class of the same name without changing its id.
    pub fn add_class(&mut self, def: ClassDef) -> ClassId {
        let id = self.intern_class_id(&def.name);
        // Same name, so the index needs no update.
        self.classes[id.index()] = def;
        id
    }

    pub fn object(&self) -> Type {
        Type::class(self.well_known.object)
    }

    pub fn string(&self) -> Type {
        Type::class(self.well_known.string)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &ClassDef)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(idx, def)| (ClassId::new(idx as u32), def))
    }
}

impl TypeEnv for TypeStore {
    fn class(&self, id: ClassId) -> Option<&ClassDef> {
        self.classes.get(id.index())
    }

    fn lookup_class(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    fn well_known(&self) -> &WellKnownTypes {
        &self.well_known
    }
}
