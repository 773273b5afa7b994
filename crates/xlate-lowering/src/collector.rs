//! Initializer collection: strips field initializers and consumes
//! initializer blocks, producing the ordered instance and static lists.

use super::InitializationNormalizer;
use crate::eligibility::{LiteralEligibility, classify_initializer, folded_literal};
use crate::error::LoweringError;
use tracing::{debug, trace};
use xlate_ast::{
    AstFactory, Block, FieldDeclaration, Member, NodeIdAllocator, Statement, StatementKind,
    TypeDeclaration,
};
use xlate_binder::Resolver;

/// Initialization statements of one type, in declaration order.
#[derive(Debug, Default)]
pub struct InitializerLists {
    /// Run by every designated constructor.
    pub instance: Vec<Statement>,
    /// Run once by the static initialization routine.
    pub statics: Vec<Statement>,
}

impl InitializerLists {
    fn list_mut(&mut self, is_static: bool) -> &mut Vec<Statement> {
        if is_static {
            &mut self.statics
        } else {
            &mut self.instance
        }
    }

    /// Append the statements of an initializer block. A block that declares
    /// locals or local types is appended whole so its names stay scoped.
    fn push_block(&mut self, is_static: bool, block: Block, ids: &mut NodeIdAllocator) {
        let declares_names = block.statements.iter().any(|stmt| {
            matches!(
                stmt.kind,
                StatementKind::LocalVariable { .. } | StatementKind::TypeDeclaration(_)
            )
        });
        let list = self.list_mut(is_static);
        if declares_names {
            list.push(Statement {
                id: ids.fresh(),
                span: block.span,
                kind: StatementKind::Block(block),
            });
        } else {
            list.extend(block.statements);
        }
    }
}

impl<R: Resolver + ?Sized> InitializationNormalizer<'_, R> {
    /// Single pass over the members in declaration order. Initializer blocks
    /// are removed; field initializers that need a runtime assignment are
    /// stripped and replaced by an assignment in the matching list.
    pub(super) fn collect_initializers(
        &mut self,
        decl: &mut TypeDeclaration,
        is_interface: bool,
        ids: &mut NodeIdAllocator,
    ) -> Result<InitializerLists, LoweringError> {
        let mut lists = InitializerLists::default();
        let members = std::mem::take(&mut decl.members);
        decl.members.reserve(members.len());
        for member in members {
            match member {
                Member::Initializer(init) => {
                    trace!(is_static = init.is_static, "consume initializer block");
                    lists.push_block(init.is_static, init.body, ids);
                    self.stats.initializer_blocks += 1;
                }
                Member::Field(mut field) => {
                    let is_static = field.modifiers.is_static() || is_interface;
                    self.collect_field(&decl.name, &mut field, is_static, &mut lists, ids)?;
                    decl.members.push(Member::Field(field));
                }
                other => decl.members.push(other),
            }
        }
        Ok(lists)
    }

    fn collect_field(
        &mut self,
        type_name: &str,
        field: &mut FieldDeclaration,
        is_static: bool,
        lists: &mut InitializerLists,
        ids: &mut NodeIdAllocator,
    ) -> Result<(), LoweringError> {
        for frag in &mut field.fragments {
            let Some(initializer) = frag.initializer.as_ref() else {
                continue;
            };
            let variable = frag.binding.ok_or_else(|| LoweringError::MissingVariableBinding {
                type_name: type_name.to_string(),
                field: frag.name.clone(),
                span: frag.span,
            })?;

            let eligibility = if is_static {
                classify_initializer(
                    &*self.resolver,
                    initializer,
                    variable,
                    self.options.literal_encoding,
                )
                .map_err(|err| LoweringError::from_resolve(type_name, frag.span, err))?
            } else {
                LiteralEligibility::Demote
            };

            let mut factory = AstFactory::new(ids);
            match eligibility {
                LiteralEligibility::Keep => {
                    trace!(field = %frag.name, "keep literal initializer");
                    self.stats.kept_literals += 1;
                }
                LiteralEligibility::Fold(value) => {
                    debug!(field = %frag.name, ?value, "fold constant initializer");
                    frag.initializer = Some(folded_literal(&mut factory, &value, &field.ty));
                    self.stats.folded_literals += 1;
                }
                LiteralEligibility::Demote => {
                    let Some(value) = frag.initializer.take() else {
                        continue;
                    };
                    let mut assign =
                        factory.assignment_statement(frag.name.clone(), Some(variable), value);
                    assign.span = frag.span;
                    if is_static {
                        debug!(field = %frag.name, "static initializer moved to class initializer");
                        self.stats.static_assignments += 1;
                    } else {
                        trace!(field = %frag.name, "instance initializer moved to constructors");
                        self.stats.instance_assignments += 1;
                    }
                    lists.list_mut(is_static).push(assign);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/collector.rs"]
mod tests;
