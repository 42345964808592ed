use jtc_types::{ClassDef, ClassKind, MethodDef, Type, TypeEnv, TypeStore};

mod diagnostics;
mod method_calls;

/// A small class universe shared by the suite:
///
/// ```text
/// Foo(int)                        String describe(int, String)
/// AbstractThing (abstract)
/// Animal (abstract)               void feed(int)
/// Pet (interface)                 String name()
/// Dog extends Animal, Pet         Dog(String)     Dog sibling()
/// Kennel                          Kennel(Animal)  boolean admit(Animal, int)
/// Point                           Point(int, int) void moveBy(int, int)
/// ```
pub struct Fixture {
    pub env: TypeStore,
    pub foo: Type,
    pub abstract_thing: Type,
    pub animal: Type,
    pub pet: Type,
    pub dog: Type,
    pub kennel: Type,
    pub point: Type,
}

impl Fixture {
    pub fn new() -> Self {
        let mut env = TypeStore::default();
        let object = env.well_known().object;
        let string = env.string();

        let foo = env.add_class(
            ClassDef::new("Foo", ClassKind::Class)
                .with_supertype(object)
                .with_constructor(vec![Type::int()])
                .with_method(MethodDef::new(
                    "describe",
                    vec![Type::int(), string],
                    string,
                )),
        );
        let abstract_thing = env.add_class(
            ClassDef::new("AbstractThing", ClassKind::Abstract).with_supertype(object),
        );
        let animal = env.add_class(
            ClassDef::new("Animal", ClassKind::Abstract)
                .with_supertype(object)
                .with_method(MethodDef::new("feed", vec![Type::int()], Type::Void)),
        );
        let pet = env.add_class(
            ClassDef::new("Pet", ClassKind::Interface)
                .with_method(MethodDef::new("name", vec![], string)),
        );
        let dog_id = env.intern_class_id("Dog");
        env.define_class(
            dog_id,
            ClassDef::new("Dog", ClassKind::Class)
                .with_supertype(animal)
                .with_supertype(pet)
                .with_constructor(vec![string])
                .with_method(MethodDef::new("sibling", vec![], Type::class(dog_id))),
        )
        .expect("Dog was interned above");
        let kennel = env.add_class(
            ClassDef::new("Kennel", ClassKind::Class)
                .with_supertype(object)
                .with_constructor(vec![Type::class(animal)])
                .with_method(MethodDef::new(
                    "admit",
                    vec![Type::class(animal), Type::int()],
                    Type::boolean(),
                )),
        );
        let point = env.add_class(
            ClassDef::new("Point", ClassKind::Class)
                .with_supertype(object)
                .with_constructor(vec![Type::int(), Type::int()])
                .with_method(MethodDef::new(
                    "moveBy",
                    vec![Type::int(), Type::int()],
                    Type::Void,
                )),
        );

        Self {
            env,
            foo: Type::class(foo),
            abstract_thing: Type::class(abstract_thing),
            animal: Type::class(animal),
            pet: Type::class(pet),
            dog: Type::class(dog_id),
            kennel: Type::class(kennel),
            point: Type::class(point),
        }
    }

    pub fn object(&self) -> Type {
        self.env.object()
    }

    pub fn string(&self) -> Type {
        self.env.string()
    }
}

pub fn int(value: i32) -> jtc_check::Expr {
    jtc_check::Expr::literal(value.to_string(), Type::int())
}

pub fn string_lit(fixture: &Fixture, value: &str) -> jtc_check::Expr {
    jtc_check::Expr::literal(format!("{value:?}"), fixture.string())
}
