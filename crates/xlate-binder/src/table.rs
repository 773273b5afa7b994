//! Serializable binding table: the reference [`Resolver`].
//!
//! Types, variables and methods are interned in flat vectors and addressed
//! by index handles. The two well-known types (`java.lang.Object` and
//! `java.lang.String`) are always present.

use crate::bindings::{MethodBinding, TypeDescriptor, VariableBinding};
use crate::error::ResolveError;
use crate::fold::{ConstantEnv, ConstantFolder};
use crate::resolver::Resolver;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;
use xlate_ast::{ConstantValue, Expression, MethodId, TypeId, TypeKind, VariableId};
use xlate_common::Modifiers;
use xlate_common::names::{ENUM_TYPE_NAME, OBJECT_TYPE_NAME, STRING_TYPE_NAME};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "TableData", into = "TableData")]
pub struct BindingTable {
    types: Vec<TypeDescriptor>,
    variables: Vec<VariableBinding>,
    methods: Vec<MethodBinding>,
    by_name: FxHashMap<String, TypeId>,
}

/// Wire form of the table; the name index is rebuilt on load.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct TableData {
    #[serde(default)]
    types: Vec<TypeDescriptor>,
    #[serde(default)]
    variables: Vec<VariableBinding>,
    #[serde(default)]
    methods: Vec<MethodBinding>,
}

impl From<TableData> for BindingTable {
    fn from(data: TableData) -> Self {
        let mut table = BindingTable {
            types: Vec::with_capacity(data.types.len()),
            variables: data.variables,
            methods: data.methods,
            by_name: FxHashMap::default(),
        };
        for desc in data.types {
            table.push_type(desc);
        }
        table.ensure_well_known();
        table
    }
}

impl From<BindingTable> for TableData {
    fn from(table: BindingTable) -> Self {
        TableData {
            types: table.types,
            variables: table.variables,
            methods: table.methods,
        }
    }
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingTable {
    pub fn new() -> Self {
        let mut table = BindingTable {
            types: Vec::new(),
            variables: Vec::new(),
            methods: Vec::new(),
            by_name: FxHashMap::default(),
        };
        table.ensure_well_known();
        table
    }

    fn ensure_well_known(&mut self) {
        if !self.by_name.contains_key(OBJECT_TYPE_NAME) {
            self.push_type(TypeDescriptor {
                name: OBJECT_TYPE_NAME.to_string(),
                kind: TypeKind::Class,
                modifiers: Modifiers::PUBLIC,
                superclass: None,
                declaring_type: None,
            });
        }
        if !self.by_name.contains_key(STRING_TYPE_NAME) {
            let object = self.object_type();
            self.push_type(TypeDescriptor {
                name: STRING_TYPE_NAME.to_string(),
                kind: TypeKind::Class,
                modifiers: Modifiers::PUBLIC | Modifiers::FINAL,
                superclass: object,
                declaring_type: None,
            });
        }
    }

    fn push_type(&mut self, desc: TypeDescriptor) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.by_name.insert(desc.name.clone(), id);
        self.types.push(desc);
        id
    }

    pub fn object_type(&self) -> Option<TypeId> {
        self.lookup_type(OBJECT_TYPE_NAME)
    }

    pub fn string_type(&self) -> Option<TypeId> {
        self.lookup_type(STRING_TYPE_NAME)
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a type. A class without an explicit superclass extends
    /// `java.lang.Object`, an enum extends `java.lang.Enum`.
    pub fn add_type(&mut self, mut desc: TypeDescriptor) -> TypeId {
        if desc.superclass.is_none() && desc.name != OBJECT_TYPE_NAME {
            desc.superclass = match desc.kind {
                TypeKind::Class => self.object_type(),
                TypeKind::Enum => Some(self.intern_external_class(ENUM_TYPE_NAME)),
                TypeKind::Interface | TypeKind::Annotation => None,
            };
        }
        trace!(name = %desc.name, kind = ?desc.kind, "add type");
        self.push_type(desc)
    }

    /// Type by qualified name, registering an external class extending
    /// `java.lang.Object` when it is not known yet.
    pub fn intern_external_class(&mut self, name: &str) -> TypeId {
        if let Some(id) = self.lookup_type(name) {
            return id;
        }
        self.add_type(TypeDescriptor {
            name: name.to_string(),
            kind: TypeKind::Class,
            modifiers: Modifiers::PUBLIC,
            superclass: None,
            declaring_type: None,
        })
    }

    pub fn add_variable(&mut self, binding: VariableBinding) -> VariableId {
        let id = VariableId(self.variables.len() as u32);
        self.variables.push(binding);
        id
    }

    pub fn set_superclass(&mut self, id: TypeId, superclass: TypeId) -> Result<(), ResolveError> {
        let desc = self
            .types
            .get_mut(id.0 as usize)
            .ok_or(ResolveError::UnknownType(id))?;
        desc.superclass = Some(superclass);
        Ok(())
    }

    pub fn set_constant_value(
        &mut self,
        id: VariableId,
        value: ConstantValue,
    ) -> Result<(), ResolveError> {
        let binding = self
            .variables
            .get_mut(id.0 as usize)
            .ok_or(ResolveError::UnknownVariable(id))?;
        binding.constant_value = Some(value);
        Ok(())
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn lookup_type(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    /// Type whose qualified name ends with `.simple` (or equals it).
    /// Declared types are preferred over well-known ones.
    pub fn lookup_simple_type(&self, simple: &str) -> Option<TypeId> {
        self.types
            .iter()
            .enumerate()
            .rev()
            .find(|(_, desc)| desc.simple_name() == simple)
            .map(|(idx, _)| TypeId(idx as u32))
    }

    /// Field named `name` declared by `ty` or one of its superclasses.
    pub fn find_field(&self, ty: TypeId, name: &str) -> Option<VariableId> {
        let mut current = Some(ty);
        let mut steps = 0;
        while let Some(owner) = current {
            if let Some(idx) = self
                .variables
                .iter()
                .position(|v| v.is_field && v.declaring_type == Some(owner) && v.name == name)
            {
                return Some(VariableId(idx as u32));
            }
            steps += 1;
            if steps > self.types.len() {
                // Cyclic superclass chain in a malformed table.
                return None;
            }
            current = self.types.get(owner.0 as usize)?.superclass;
        }
        None
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    /// Methods declared on `ty`, in registration order.
    pub fn methods_of(&self, ty: TypeId) -> impl Iterator<Item = (MethodId, &MethodBinding)> {
        self.methods
            .iter()
            .enumerate()
            .filter(move |(_, m)| m.declaring_type == ty)
            .map(|(idx, m)| (MethodId(idx as u32), m))
    }
}

impl ConstantEnv for BindingTable {
    fn variable_constant(&self, id: VariableId) -> Option<ConstantValue> {
        self.variables.get(id.0 as usize)?.constant_value.clone()
    }
}

impl Resolver for BindingTable {
    fn type_descriptor(&self, id: TypeId) -> Result<&TypeDescriptor, ResolveError> {
        self.types
            .get(id.0 as usize)
            .ok_or(ResolveError::UnknownType(id))
    }

    fn variable(&self, id: VariableId) -> Result<&VariableBinding, ResolveError> {
        self.variables
            .get(id.0 as usize)
            .ok_or(ResolveError::UnknownVariable(id))
    }

    fn method(&self, id: MethodId) -> Result<&MethodBinding, ResolveError> {
        self.methods
            .get(id.0 as usize)
            .ok_or(ResolveError::UnknownMethod(id))
    }

    fn constant_value(&self, expr: &Expression) -> Option<ConstantValue> {
        ConstantFolder::new(self).fold(expr)
    }

    fn add_method(&mut self, binding: MethodBinding) -> MethodId {
        let id = MethodId(self.methods.len() as u32);
        trace!(name = %binding.name, declaring = binding.declaring_type.0, "add method");
        self.methods.push(binding);
        id
    }
}

#[cfg(test)]
#[path = "../tests/table.rs"]
mod tests;
