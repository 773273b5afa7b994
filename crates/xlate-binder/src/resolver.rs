//! The resolver seam between tree passes and name resolution.
//!
//! Passes only see resolution through this trait: they query descriptors by
//! handle, ask for compile-time constants, and request fresh bindings for
//! the members they synthesize.

use crate::bindings::{MethodBinding, TypeDescriptor, VariableBinding};
use crate::error::ResolveError;
use xlate_ast::{ConstantValue, Expression, MethodId, TypeId, TypeRef, VariableId};
use xlate_common::Modifiers;
use xlate_common::names::CONSTRUCTOR_NAME;

pub trait Resolver {
    fn type_descriptor(&self, id: TypeId) -> Result<&TypeDescriptor, ResolveError>;

    fn variable(&self, id: VariableId) -> Result<&VariableBinding, ResolveError>;

    fn method(&self, id: MethodId) -> Result<&MethodBinding, ResolveError>;

    /// Compile-time constant value of `expr`, if it is a constant expression.
    fn constant_value(&self, expr: &Expression) -> Option<ConstantValue>;

    /// Register a synthesized method and return its handle.
    fn add_method(&mut self, binding: MethodBinding) -> MethodId;

    fn superclass(&self, id: TypeId) -> Result<TypeId, ResolveError> {
        let desc = self.type_descriptor(id)?;
        desc.superclass.ok_or_else(|| ResolveError::NoSuperclass {
            type_name: desc.name.clone(),
        })
    }

    fn is_interface(&self, id: TypeId) -> Result<bool, ResolveError> {
        Ok(self.type_descriptor(id)?.is_interface())
    }

    fn is_primitive_constant(&self, id: VariableId) -> Result<bool, ResolveError> {
        Ok(self.variable(id)?.is_primitive_constant())
    }

    /// Fresh no-argument constructor binding on `declaring_type`.
    fn new_constructor(
        &mut self,
        declaring_type: TypeId,
        modifiers: Modifiers,
    ) -> Result<MethodId, ResolveError> {
        self.type_descriptor(declaring_type)?;
        Ok(self.add_method(MethodBinding {
            name: CONSTRUCTOR_NAME.to_string(),
            declaring_type,
            modifiers,
            return_type: TypeRef::VOID,
            parameter_types: Vec::new(),
            is_constructor: true,
            is_synthetic: true,
        }))
    }

    /// Fresh parameterless method binding on `declaring_type`.
    fn new_method(
        &mut self,
        declaring_type: TypeId,
        name: &str,
        modifiers: Modifiers,
        return_type: TypeRef,
    ) -> Result<MethodId, ResolveError> {
        self.type_descriptor(declaring_type)?;
        Ok(self.add_method(MethodBinding {
            name: name.to_string(),
            declaring_type,
            modifiers,
            return_type,
            parameter_types: Vec::new(),
            is_constructor: false,
            is_synthetic: true,
        }))
    }
}
