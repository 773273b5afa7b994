use thiserror::Error;
use xlate_binder::ResolveError;
use xlate_common::diagnostics::diagnostic_codes;
use xlate_common::{Diagnostic, Span};

/// Fatal errors of the lowering passes.
///
/// Every variant carries the name of the declaration being lowered and its
/// span, so the driver can report it once as a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoweringError {
    #[error("type '{type_name}' has no resolved type binding")]
    MissingTypeBinding { type_name: String, span: Span },

    #[error("field '{field}' of '{type_name}' has no resolved variable binding")]
    MissingVariableBinding {
        type_name: String,
        field: String,
        span: Span,
    },

    #[error("superclass of '{type_name}' cannot be resolved")]
    MissingSuperclass { type_name: String, span: Span },

    #[error("constructor of '{type_name}' has no body")]
    MissingConstructorBody { type_name: String, span: Span },

    #[error(
        "method '{method}()' of '{type_name}' collides with the synthesized static initializer"
    )]
    ReservedNameCollision {
        type_name: String,
        method: String,
        span: Span,
    },

    #[error("type '{type_name}' is nested more than {max_depth} levels deep")]
    NestingTooDeep {
        type_name: String,
        max_depth: u32,
        span: Span,
    },

    #[error("cannot resolve '{type_name}': {source}")]
    Resolve {
        type_name: String,
        span: Span,
        #[source]
        source: ResolveError,
    },
}

impl LoweringError {
    /// Wrap a resolver failure raised while lowering `type_name`.
    pub fn from_resolve(type_name: &str, span: Span, source: ResolveError) -> Self {
        match source {
            ResolveError::NoSuperclass { .. } => LoweringError::MissingSuperclass {
                type_name: type_name.to_string(),
                span,
            },
            source => LoweringError::Resolve {
                type_name: type_name.to_string(),
                span,
                source,
            },
        }
    }

    pub const fn span(&self) -> Span {
        match self {
            LoweringError::MissingTypeBinding { span, .. }
            | LoweringError::MissingVariableBinding { span, .. }
            | LoweringError::MissingSuperclass { span, .. }
            | LoweringError::MissingConstructorBody { span, .. }
            | LoweringError::ReservedNameCollision { span, .. }
            | LoweringError::NestingTooDeep { span, .. }
            | LoweringError::Resolve { span, .. } => *span,
        }
    }

    pub const fn code(&self) -> u32 {
        match self {
            LoweringError::MissingTypeBinding { .. } => diagnostic_codes::MISSING_TYPE_BINDING,
            LoweringError::MissingVariableBinding { .. } => {
                diagnostic_codes::MISSING_VARIABLE_BINDING
            }
            LoweringError::MissingSuperclass { .. } => diagnostic_codes::MISSING_SUPERCLASS,
            LoweringError::MissingConstructorBody { .. } => {
                diagnostic_codes::MISSING_CONSTRUCTOR_BODY
            }
            LoweringError::ReservedNameCollision { .. } => {
                diagnostic_codes::RESERVED_NAME_COLLISION
            }
            LoweringError::NestingTooDeep { .. } => diagnostic_codes::TYPE_NESTING_TOO_DEEP,
            LoweringError::Resolve { source, .. } => match source {
                ResolveError::UnknownVariable(_) => diagnostic_codes::MISSING_VARIABLE_BINDING,
                ResolveError::UnknownMethod(_) => diagnostic_codes::MISSING_METHOD_BINDING,
                ResolveError::NoSuperclass { .. } => diagnostic_codes::MISSING_SUPERCLASS,
                ResolveError::NestingTooDeep { .. } => diagnostic_codes::TYPE_NESTING_TOO_DEEP,
                ResolveError::UnknownType(_) | ResolveError::UnresolvedTypeName { .. } => {
                    diagnostic_codes::MISSING_TYPE_BINDING
                }
            },
        }
    }

    pub fn to_diagnostic(&self, file: &str) -> Diagnostic {
        Diagnostic::error(file, self.span(), self.to_string(), self.code())
    }
}
