//! Splicing instance initialization into designated constructors.

use super::InitializationNormalizer;
use crate::error::LoweringError;
use tracing::trace;
use xlate_ast::{
    AstFactory, Member, MethodDeclaration, NodeCopier, NodeIdAllocator, Statement, TypeDeclaration,
    TypeId,
};
use xlate_binder::Resolver;
use xlate_common::Modifiers;

/// A constructor is designated unless its body starts with `this(...)`.
/// Only designated constructors run the instance initialization list, so each
/// instance is initialized exactly once whatever chain of constructors runs.
pub fn is_designated_constructor(method: &MethodDeclaration) -> bool {
    method.is_constructor
        && !method
            .first_statement()
            .is_some_and(Statement::is_constructor_call)
}

impl<R: Resolver + ?Sized> InitializationNormalizer<'_, R> {
    /// Splice a copy of `instance` into every designated constructor of
    /// `decl`. Returns the number of constructors the type declares.
    pub(super) fn normalize_constructors(
        &mut self,
        decl: &mut TypeDeclaration,
        type_id: TypeId,
        instance: &[Statement],
        ids: &mut NodeIdAllocator,
    ) -> Result<usize, LoweringError> {
        let mut count = 0;
        for member in &mut decl.members {
            let Member::Method(method) = member else {
                continue;
            };
            if !method.is_constructor {
                continue;
            }
            count += 1;
            if method.body.is_none() {
                return Err(LoweringError::MissingConstructorBody {
                    type_name: decl.name.clone(),
                    span: method.span,
                });
            }
            if !is_designated_constructor(method) {
                trace!(span = ?method.span, "delegating constructor left as is");
                self.stats.delegating_constructors += 1;
                continue;
            }

            let super_index = match method.super_call_index() {
                Some(index) => index,
                None => {
                    let binding = self
                        .resolver
                        .superclass(type_id)
                        .and_then(|superclass| {
                            self.resolver.new_constructor(superclass, Modifiers::PUBLIC)
                        })
                        .map_err(|err| LoweringError::from_resolve(&decl.name, method.span, err))?;
                    let call = AstFactory::new(ids).super_constructor_call(binding);
                    if let Some(body) = method.body.as_mut() {
                        body.statements.insert(0, call);
                    }
                    0
                }
            };

            let copies = NodeCopier::new(ids).copy_statements(instance);
            if let Some(body) = method.body.as_mut() {
                let at = super_index + 1;
                body.statements.splice(at..at, copies);
            }
            self.stats.designated_constructors += 1;
        }
        Ok(count)
    }
}

#[cfg(test)]
#[path = "../tests/constructors.rs"]
mod tests;
