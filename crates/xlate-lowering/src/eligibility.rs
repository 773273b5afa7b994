//! Literal eligibility of static field initializers.
//!
//! The target representation can only embed a static field's value in the
//! declaration when it is a literal it can spell. Everything else runs in the
//! class initialization routine.

use xlate_ast::{AstFactory, ConstantValue, Expression, ExpressionKind, Literal, TypeRef, VariableId};
use xlate_binder::{ResolveError, Resolver};
use xlate_common::LiteralEncoding;

/// What happens to one static field initializer.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralEligibility {
    /// The initializer stays in the declaration as written.
    Keep,
    /// The initializer is a constant expression; it is replaced by a literal
    /// of this value.
    Fold(ConstantValue),
    /// The initializer becomes an assignment in the static routine.
    Demote,
}

/// Decide how the initializer of the static field `variable` is lowered.
///
/// 1. `boolean`, `char`, `null` and number literals are kept.
/// 2. A string literal is kept when `encoding` can represent it.
/// 3. Primitive constants (`static final`, primitive, constant value) are kept.
/// 4. Other constant expressions fold to a literal, unless they are strings
///    the encoding cannot represent.
pub fn classify_initializer<R: Resolver + ?Sized>(
    resolver: &R,
    initializer: &Expression,
    variable: VariableId,
    encoding: LiteralEncoding,
) -> Result<LiteralEligibility, ResolveError> {
    if let ExpressionKind::Literal(lit) = &initializer.kind {
        return Ok(match lit {
            Literal::Boolean(_) | Literal::Char(_) | Literal::Null | Literal::Number(_) => {
                LiteralEligibility::Keep
            }
            Literal::String(value) if encoding.is_representable(value) => LiteralEligibility::Keep,
            Literal::String(_) => LiteralEligibility::Demote,
        });
    }
    if resolver.is_primitive_constant(variable)? {
        return Ok(LiteralEligibility::Keep);
    }
    Ok(match resolver.constant_value(initializer) {
        None => LiteralEligibility::Demote,
        Some(ConstantValue::String(value)) if !encoding.is_representable(&value) => {
            LiteralEligibility::Demote
        }
        Some(value) => LiteralEligibility::Fold(value),
    })
}

/// Literal replacing a folded initializer, converted to the field's type.
pub fn folded_literal(factory: &mut AstFactory<'_>, value: &ConstantValue, field_ty: &TypeRef) -> Expression {
    let converted = field_ty
        .as_primitive()
        .and_then(|target| value.convert_to(target));
    let value = converted.as_ref().unwrap_or(value);
    factory.literal_from_constant(value, field_ty.clone())
}

#[cfg(test)]
#[path = "../tests/eligibility.rs"]
mod tests;
