//! Local-variable descriptors and the classifier that picks the descriptor
//! kind for a slot from its declared type.

use crate::types::{GenericType, PrimitiveType, Type};

#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveLocalVariable {
    pub index: u32,
    pub offset: u32,
    pub name: Option<String>,
    pub ty: PrimitiveType,
}

/// Reference-typed local, including arrays of primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLocalVariable {
    pub index: u32,
    pub offset: u32,
    pub name: Option<String>,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenericLocalVariable {
    pub index: u32,
    pub offset: u32,
    pub name: Option<String>,
    pub ty: GenericType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocalVariable {
    Primitive(PrimitiveLocalVariable),
    Object(ObjectLocalVariable),
    Generic(GenericLocalVariable),
}

impl LocalVariable {
    pub fn index(&self) -> u32 {
        match self {
            LocalVariable::Primitive(lv) => lv.index,
            LocalVariable::Object(lv) => lv.index,
            LocalVariable::Generic(lv) => lv.index,
        }
    }

    pub fn offset(&self) -> u32 {
        match self {
            LocalVariable::Primitive(lv) => lv.offset,
            LocalVariable::Object(lv) => lv.offset,
            LocalVariable::Generic(lv) => lv.offset,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            LocalVariable::Primitive(lv) => lv.name.as_deref(),
            LocalVariable::Object(lv) => lv.name.as_deref(),
            LocalVariable::Generic(lv) => lv.name.as_deref(),
        }
    }

    pub fn dimension(&self) -> u32 {
        match self {
            LocalVariable::Primitive(lv) => lv.ty.dimension,
            LocalVariable::Object(lv) => lv.ty.dimension(),
            LocalVariable::Generic(lv) => lv.ty.dimension,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, LocalVariable::Object(_))
    }

    pub fn declared_type(&self) -> Type {
        match self {
            LocalVariable::Primitive(lv) => Type::Primitive(lv.ty.clone()),
            LocalVariable::Object(lv) => lv.ty.clone(),
            LocalVariable::Generic(lv) => Type::Generic(lv.ty.clone()),
        }
    }
}

/// What a new local is classified from: a resolved type, or a variable that
/// previously occupied the slot.
#[derive(Debug, Clone, Copy)]
pub enum Declared<'a> {
    Type(&'a Type),
    Variable(&'a LocalVariable),
}

/// Create the local-variable descriptor matching `declared`.
///
/// Arrays are reference types, so a primitive with a non-zero dimension
/// always yields an object local.
pub fn classify(index: u32, offset: u32, declared: Declared<'_>) -> LocalVariable {
    match declared {
        Declared::Type(Type::Primitive(ty)) => primitive_or_array(index, offset, ty),
        Declared::Type(ty @ (Type::Object(_) | Type::InnerObject(_))) => object(index, offset, ty),
        Declared::Type(Type::Generic(ty)) => generic(index, offset, ty),
        Declared::Variable(LocalVariable::Primitive(lv)) => {
            primitive_or_array(index, offset, &lv.ty)
        }
        Declared::Variable(LocalVariable::Object(lv)) => object(index, offset, &lv.ty),
        Declared::Variable(LocalVariable::Generic(lv)) => generic(index, offset, &lv.ty),
    }
}

fn primitive_or_array(index: u32, offset: u32, ty: &PrimitiveType) -> LocalVariable {
    if ty.dimension == 0 {
        LocalVariable::Primitive(PrimitiveLocalVariable {
            index,
            offset,
            name: None,
            ty: ty.clone(),
        })
    } else {
        object(index, offset, &Type::Primitive(ty.clone()))
    }
}

fn object(index: u32, offset: u32, ty: &Type) -> LocalVariable {
    LocalVariable::Object(ObjectLocalVariable {
        index,
        offset,
        name: None,
        ty: ty.clone(),
    })
}

fn generic(index: u32, offset: u32, ty: &GenericType) -> LocalVariable {
    LocalVariable::Generic(GenericLocalVariable {
        index,
        offset,
        name: None,
        ty: ty.clone(),
    })
}
