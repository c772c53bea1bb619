use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Java primitive kinds, including `void` for method return types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveKind {
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Void => "void",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimitiveType {
    /// Written as `primitive:` so it does not clash with the `kind` tag of
    /// [`Type`].
    #[serde(rename = "primitive")]
    pub kind: PrimitiveKind,
    #[serde(default)]
    pub dimension: u32,
}

/// A class or interface type, identified by its JVM internal name
/// (`java/util/List`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectType {
    pub internal_name: String,
    pub qualified_name: String,
    pub name: String,
    #[serde(default)]
    pub type_arguments: Option<Box<TypeArgument>>,
    #[serde(default)]
    pub dimension: u32,
}

impl ObjectType {
    /// Build an object type from its internal name, deriving the qualified
    /// and simple names.
    pub fn new(internal_name: &str) -> Self {
        let qualified_name = internal_name.replace(['/', '$'], ".");
        let name = internal_name
            .rsplit(['/', '$'])
            .next()
            .unwrap_or(internal_name)
            .to_string();
        Self {
            internal_name: internal_name.to_string(),
            qualified_name,
            name,
            type_arguments: None,
            dimension: 0,
        }
    }

    pub fn with_arguments(mut self, arguments: TypeArgument) -> Self {
        self.type_arguments = Some(Box::new(arguments));
        self
    }

    pub fn with_dimension(mut self, dimension: u32) -> Self {
        self.dimension = dimension;
        self
    }

    /// Package part of the internal name, empty for the default package.
    pub fn package(&self) -> &str {
        match self.internal_name.rfind('/') {
            Some(pos) => &self.internal_name[..pos],
            None => "",
        }
    }

    fn is_assignable_from(&self, other: &ObjectType) -> bool {
        if self.dimension != other.dimension || self.internal_name != other.internal_name {
            return false;
        }
        match (&self.type_arguments, &other.type_arguments) {
            (None, None) => true,
            (Some(a), Some(b)) => a.is_assignable_from(b),
            _ => false,
        }
    }
}

/// A member type, rendered as `Outer.Inner`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InnerObjectType {
    pub inner: ObjectType,
    pub outer: Box<Type>,
}

/// A type variable reference such as `T`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericType {
    pub name: String,
    #[serde(default)]
    pub dimension: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    Primitive(PrimitiveType),
    Object(ObjectType),
    InnerObject(InnerObjectType),
    Generic(GenericType),
}

impl Type {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Type::Primitive(PrimitiveType { kind, dimension: 0 })
    }

    pub fn object(internal_name: &str) -> Self {
        Type::Object(ObjectType::new(internal_name))
    }

    pub fn generic(name: &str) -> Self {
        Type::Generic(GenericType {
            name: name.to_string(),
            dimension: 0,
        })
    }

    pub fn dimension(&self) -> u32 {
        match self {
            Type::Primitive(t) => t.dimension,
            Type::Object(t) => t.dimension,
            Type::InnerObject(t) => t.inner.dimension,
            Type::Generic(t) => t.dimension,
        }
    }

    /// Object view of class and member types.
    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Type::Object(t) => Some(t),
            Type::InnerObject(t) => Some(&t.inner),
            _ => None,
        }
    }

    /// Structural assignability used when matching type arguments. Class
    /// hierarchy is not consulted.
    pub fn is_assignable_from(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Primitive(a), Type::Primitive(b)) => a == b,
            (Type::Generic(a), Type::Generic(b)) => a == b,
            (Type::Primitive(_) | Type::Generic(_), _) => false,
            _ => match (self.as_object(), other.as_object()) {
                (Some(a), Some(b)) => a.is_assignable_from(b),
                _ => false,
            },
        }
    }
}

/// A type argument: a concrete type, a wildcard, or a list of arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "argument", rename_all = "snake_case")]
pub enum TypeArgument {
    Type(Type),
    /// `?`
    Wildcard,
    /// `? extends T`
    WildcardExtends { bound: Type },
    /// `? super T`
    WildcardSuper { bound: Type },
    List { types: Types },
}

impl TypeArgument {
    pub fn accept<V: TypeArgumentVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            TypeArgument::Type(ty) => visitor.visit_type(ty),
            TypeArgument::Wildcard => visitor.visit_wildcard(),
            TypeArgument::WildcardExtends { bound } => visitor.visit_wildcard_extends(bound),
            TypeArgument::WildcardSuper { bound } => visitor.visit_wildcard_super(bound),
            TypeArgument::List { types } => visitor.visit_types(types),
        }
    }

    pub fn is_assignable_from(&self, other: &TypeArgument) -> bool {
        match self {
            TypeArgument::Type(ty) => match other {
                TypeArgument::Type(o) => ty.is_assignable_from(o),
                _ => false,
            },
            TypeArgument::Wildcard => true,
            TypeArgument::WildcardExtends { bound } => match other {
                TypeArgument::WildcardExtends { bound: o } => bound.is_assignable_from(o),
                TypeArgument::Type(o) => bound.is_assignable_from(o),
                _ => false,
            },
            TypeArgument::WildcardSuper { bound } => match other {
                TypeArgument::WildcardSuper { bound: o } => bound.is_assignable_from(o),
                TypeArgument::Type(o) => bound.is_assignable_from(o),
                _ => false,
            },
            TypeArgument::List { types } => match other {
                TypeArgument::List { types: o } => {
                    types.len() == o.len()
                        && types.iter().zip(o.iter()).all(|(a, b)| a.is_assignable_from(b))
                }
                _ => false,
            },
        }
    }
}

/// Double-dispatch target for [`TypeArgument::accept`].
pub trait TypeArgumentVisitor {
    fn visit_type(&mut self, ty: &Type);
    fn visit_wildcard(&mut self);
    fn visit_wildcard_extends(&mut self, bound: &Type);
    fn visit_wildcard_super(&mut self, bound: &Type);
    fn visit_types(&mut self, types: &Types);
}

/// Two or more type arguments. Zero or one argument is represented by the
/// singular [`TypeArgument`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TypeArgument>", into = "Vec<TypeArgument>")]
pub struct Types(Vec<TypeArgument>);

impl Types {
    pub fn new(types: Vec<TypeArgument>) -> Result<Self> {
        if types.len() < 2 {
            return Err(ModelError::TypeListTooShort(types.len()));
        }
        Ok(Self(types))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a list built through [`Types::new`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeArgument> {
        self.0.iter()
    }

    pub fn first(&self) -> &TypeArgument {
        &self.0[0]
    }
}

impl TryFrom<Vec<TypeArgument>> for Types {
    type Error = ModelError;

    fn try_from(types: Vec<TypeArgument>) -> Result<Self> {
        Types::new(types)
    }
}

impl From<Types> for Vec<TypeArgument> {
    fn from(types: Types) -> Self {
        types.0
    }
}

impl<'a> IntoIterator for &'a Types {
    type Item = &'a TypeArgument;
    type IntoIter = std::slice::Iter<'a, TypeArgument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string() -> Type {
        Type::object("java/lang/String")
    }

    #[test]
    fn object_type_names() {
        let ty = ObjectType::new("java/util/Map$Entry");
        assert_eq!(ty.qualified_name, "java.util.Map.Entry");
        assert_eq!(ty.name, "Entry");
        assert_eq!(ty.package(), "java/util");
        assert_eq!(ObjectType::new("Foo").package(), "");
    }

    #[test]
    fn types_requires_two_elements() {
        assert_eq!(
            Types::new(vec![]).unwrap_err(),
            ModelError::TypeListTooShort(0)
        );
        assert_eq!(
            Types::new(vec![TypeArgument::Wildcard]).unwrap_err(),
            ModelError::TypeListTooShort(1)
        );
        let types = Types::new(vec![TypeArgument::Wildcard, TypeArgument::Type(string())]).unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types.first(), &TypeArgument::Wildcard);
    }

    #[test]
    fn wildcard_super_assignability() {
        let sup = TypeArgument::WildcardSuper { bound: string() };
        assert!(sup.is_assignable_from(&TypeArgument::WildcardSuper { bound: string() }));
        assert!(sup.is_assignable_from(&TypeArgument::Type(string())));
        assert!(!sup.is_assignable_from(&TypeArgument::Type(Type::object("java/lang/Integer"))));
        assert!(!sup.is_assignable_from(&TypeArgument::WildcardExtends { bound: string() }));
        assert!(!sup.is_assignable_from(&TypeArgument::Wildcard));
    }

    #[test]
    fn unbounded_wildcard_accepts_anything() {
        assert!(TypeArgument::Wildcard.is_assignable_from(&TypeArgument::Type(string())));
        assert!(
            TypeArgument::Wildcard
                .is_assignable_from(&TypeArgument::WildcardSuper { bound: string() })
        );
    }

    #[test]
    fn parameterized_types_compare_arguments() {
        let list_of = |arg: Type| {
            Type::Object(
                ObjectType::new("java/util/List").with_arguments(TypeArgument::Type(arg)),
            )
        };
        let raw = Type::object("java/util/List");
        assert!(list_of(string()).is_assignable_from(&list_of(string())));
        assert!(!list_of(string()).is_assignable_from(&list_of(Type::generic("T"))));
        assert!(!list_of(string()).is_assignable_from(&raw));
        assert!(!raw.is_assignable_from(&list_of(string())));
        assert!(raw.is_assignable_from(&raw));
    }

    #[test]
    fn primitive_and_generic_assignability() {
        let int = Type::primitive(PrimitiveKind::Int);
        let int_array = Type::Primitive(PrimitiveType {
            kind: PrimitiveKind::Int,
            dimension: 1,
        });
        assert!(int.is_assignable_from(&int));
        assert!(!int.is_assignable_from(&int_array));
        assert!(Type::generic("T").is_assignable_from(&Type::generic("T")));
        assert!(!Type::generic("T").is_assignable_from(&Type::generic("U")));
        assert!(!Type::generic("T").is_assignable_from(&string()));
    }

    #[test]
    fn list_assignability_is_pairwise() {
        let a = TypeArgument::List {
            types: Types::new(vec![TypeArgument::Wildcard, TypeArgument::Type(string())]).unwrap(),
        };
        let b = TypeArgument::List {
            types: Types::new(vec![
                TypeArgument::Type(Type::generic("K")),
                TypeArgument::Type(string()),
            ])
            .unwrap(),
        };
        assert!(a.is_assignable_from(&b));
        assert!(!b.is_assignable_from(&a));
    }

    #[derive(Default)]
    struct Collect(Vec<&'static str>);

    impl TypeArgumentVisitor for Collect {
        fn visit_type(&mut self, _: &Type) {
            self.0.push("type");
        }
        fn visit_wildcard(&mut self) {
            self.0.push("?");
        }
        fn visit_wildcard_extends(&mut self, _: &Type) {
            self.0.push("extends");
        }
        fn visit_wildcard_super(&mut self, _: &Type) {
            self.0.push("super");
        }
        fn visit_types(&mut self, types: &Types) {
            self.0.push("list");
            for t in types {
                t.accept(self);
            }
        }
    }

    #[test]
    fn accept_dispatches_by_variant() {
        let arg = TypeArgument::List {
            types: Types::new(vec![
                TypeArgument::WildcardSuper { bound: string() },
                TypeArgument::Type(string()),
                TypeArgument::Wildcard,
            ])
            .unwrap(),
        };
        let mut v = Collect::default();
        arg.accept(&mut v);
        assert_eq!(v.0, ["list", "super", "type", "?"]);
    }

    #[test]
    fn short_type_list_rejected_on_deserialize() {
        let yaml = "argument: list\ntypes:\n  - argument: wildcard\n";
        let err = serde_yaml::from_str::<TypeArgument>(yaml).unwrap_err();
        assert!(err.to_string().contains("at least 2"), "got {err}");
    }
}
