//! Constant variables: `final` fields of primitive or `String` type whose
//! initializer is a constant expression.
//!
//! A constant may be defined in terms of other constants declared later in
//! the unit, so values are computed in rounds until no further field
//! resolves.

use crate::error::ResolveError;
use crate::resolver::Resolver;
use crate::table::BindingTable;
use tracing::{debug, trace};
use xlate_ast::visit::for_each_local_type;
use xlate_ast::{CompilationUnit, ConstantValue, Expression, TypeDeclaration, TypeRef, VariableId};
use xlate_common::limits::MAX_CONSTANT_BINDING_ROUNDS;

struct Candidate<'a> {
    id: VariableId,
    ty: &'a TypeRef,
    initializer: &'a Expression,
}

/// Record the constant value of every constant variable declared in `unit`.
/// Returns the number of fields that received a value.
pub fn bind_field_constants(
    table: &mut BindingTable,
    unit: &CompilationUnit,
) -> Result<usize, ResolveError> {
    let mut pending = Vec::new();
    for decl in &unit.types {
        collect_candidates(table, decl, &mut pending)?;
    }

    let mut bound = 0;
    for round in 0..MAX_CONSTANT_BINDING_ROUNDS {
        let before = pending.len();
        let mut still_pending = Vec::with_capacity(before);
        for candidate in pending {
            match table
                .constant_value(candidate.initializer)
                .and_then(|value| coerce(value, candidate.ty))
            {
                Some(value) => {
                    trace!(variable = candidate.id.0, ?value, "constant variable");
                    table.set_constant_value(candidate.id, value)?;
                    bound += 1;
                }
                None => still_pending.push(candidate),
            }
        }
        pending = still_pending;
        if pending.len() == before {
            debug!(rounds = round + 1, bound, "field constants bound");
            break;
        }
    }
    Ok(bound)
}

fn collect_candidates<'a>(
    table: &BindingTable,
    decl: &'a TypeDeclaration,
    out: &mut Vec<Candidate<'a>>,
) -> Result<(), ResolveError> {
    for field in decl.fields() {
        if !(field.ty.is_primitive() || field.ty.is_string()) {
            continue;
        }
        for frag in &field.fragments {
            let (Some(id), Some(initializer)) = (frag.binding, frag.initializer.as_ref()) else {
                continue;
            };
            let binding = table.variable(id)?;
            if binding.modifiers.is_final() && binding.constant_value.is_none() {
                out.push(Candidate {
                    id,
                    ty: &field.ty,
                    initializer,
                });
            }
        }
    }
    for inner in decl.member_types() {
        collect_candidates(table, inner, out)?;
    }
    let mut locals = Vec::new();
    for statements in decl.body_statements() {
        for_each_local_type(statements, &mut |local| locals.push(local));
    }
    for local in locals {
        collect_candidates(table, local, out)?;
    }
    Ok(())
}

/// Assignment conversion of a constant to the field's declared type.
fn coerce(value: ConstantValue, ty: &TypeRef) -> Option<ConstantValue> {
    match ty {
        TypeRef::Primitive(target) => value.convert_to(*target),
        _ if ty.is_string() && value.is_string() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/constants.rs"]
mod tests;
