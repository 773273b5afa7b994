//! Resolved entities referenced from the tree by handle.

use serde::{Deserialize, Serialize};
use xlate_ast::{ConstantValue, TypeId, TypeKind, TypeRef};
use xlate_common::Modifiers;

/// A class, interface, enum or annotation type known to the resolver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Qualified name (`pkg.Outer.Inner`).
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub superclass: Option<TypeId>,
    #[serde(default)]
    pub declaring_type: Option<TypeId>,
}

impl TypeDescriptor {
    #[inline]
    pub const fn is_interface(&self) -> bool {
        self.kind.is_interface_like()
    }

    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// A field, parameter or local variable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableBinding {
    pub name: String,
    pub ty: TypeRef,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub declaring_type: Option<TypeId>,
    #[serde(default)]
    pub is_field: bool,
    /// Compile-time constant value, for constant variables.
    #[serde(default)]
    pub constant_value: Option<ConstantValue>,
}

impl VariableBinding {
    /// `static final` field of primitive type with a known constant value.
    pub fn is_primitive_constant(&self) -> bool {
        self.is_field
            && self.modifiers.is_static()
            && self.modifiers.is_final()
            && self.ty.is_primitive()
            && self.constant_value.is_some()
    }
}

/// A method or constructor, declared or synthesized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodBinding {
    pub name: String,
    pub declaring_type: TypeId,
    #[serde(default)]
    pub modifiers: Modifiers,
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameter_types: Vec<TypeRef>,
    #[serde(default)]
    pub is_constructor: bool,
    #[serde(default)]
    pub is_synthetic: bool,
}
