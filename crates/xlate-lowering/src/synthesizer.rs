//! Synthesized members: the default constructor and the static
//! initialization routine.

use super::InitializationNormalizer;
use crate::error::LoweringError;
use tracing::debug;
use xlate_ast::{AstFactory, Member, NodeIdAllocator, Statement, TypeDeclaration, TypeId, TypeRef};
use xlate_binder::Resolver;
use xlate_common::Modifiers;

impl<R: Resolver + ?Sized> InitializationNormalizer<'_, R> {
    /// Append a no-argument constructor running `instance` after an implicit
    /// `super()`. Its visibility is the type's own access modifiers.
    pub(super) fn add_default_constructor(
        &mut self,
        decl: &mut TypeDeclaration,
        type_id: TypeId,
        instance: Vec<Statement>,
        ids: &mut NodeIdAllocator,
    ) -> Result<(), LoweringError> {
        let resolve = |err| LoweringError::from_resolve(&decl.name, decl.span, err);
        let modifiers = self
            .resolver
            .type_descriptor(type_id)
            .map_err(resolve)?
            .modifiers
            .access();
        let superclass = self.resolver.superclass(type_id).map_err(resolve)?;
        let super_binding = self
            .resolver
            .new_constructor(superclass, modifiers)
            .map_err(resolve)?;
        let binding = self
            .resolver
            .new_constructor(type_id, modifiers)
            .map_err(resolve)?;

        let mut factory = AstFactory::new(ids);
        let mut body = Vec::with_capacity(instance.len() + 1);
        body.push(factory.super_constructor_call(super_binding));
        body.extend(instance);
        let constructor = factory.method_declaration(
            decl.name.clone(),
            modifiers,
            TypeRef::VOID,
            true,
            binding,
            body,
        );
        debug!(name = %decl.name, "synthesized default constructor");
        decl.members.push(Member::Method(constructor));
        self.stats.default_constructors += 1;
        Ok(())
    }

    /// Append the `public static void` routine running `statics`.
    pub(super) fn add_class_initializer(
        &mut self,
        decl: &mut TypeDeclaration,
        type_id: TypeId,
        statics: Vec<Statement>,
        ids: &mut NodeIdAllocator,
    ) -> Result<(), LoweringError> {
        let options = self.options;
        let name = options.class_initializer_name.as_str();
        if let Some(existing) = decl.find_method(name, 0) {
            return Err(LoweringError::ReservedNameCollision {
                type_name: decl.name.clone(),
                method: name.to_string(),
                span: existing.span,
            });
        }
        let modifiers = Modifiers::PUBLIC | Modifiers::STATIC;
        let binding = self
            .resolver
            .new_method(type_id, name, modifiers, TypeRef::VOID)
            .map_err(|err| LoweringError::from_resolve(&decl.name, decl.span, err))?;
        let routine = AstFactory::new(ids).method_declaration(
            name,
            modifiers,
            TypeRef::VOID,
            false,
            binding,
            statics,
        );
        debug!(name = %decl.name, routine = name, "synthesized class initializer");
        decl.members.push(Member::Method(routine));
        self.stats.class_initializers += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/synthesizer.rs"]
mod tests;
