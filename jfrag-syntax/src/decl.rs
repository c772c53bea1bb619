use serde::{Deserialize, Serialize};

use crate::modifiers::Modifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl TypeKind {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Annotation => "@interface",
        }
    }
}

/// A class, interface, enum or annotation declared inside a method body.
/// Members are rendered by the declaration renderer, not by this model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    #[serde(default)]
    pub modifiers: Modifiers,
    pub type_kind: TypeKind,
    pub internal_name: String,
    pub name: String,
}
