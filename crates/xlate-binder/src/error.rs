use thiserror::Error;
use xlate_ast::{MethodId, TypeId, VariableId};

/// Failure to answer a resolver query.
///
/// Every variant means the tree and the binding table disagree; passes
/// treat these as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unknown type binding #{}", .0.0)]
    UnknownType(TypeId),

    #[error("unknown variable binding #{}", .0.0)]
    UnknownVariable(VariableId),

    #[error("unknown method binding #{}", .0.0)]
    UnknownMethod(MethodId),

    #[error("type '{type_name}' has no superclass")]
    NoSuperclass { type_name: String },

    #[error("type '{name}' is nested too deeply")]
    NestingTooDeep { name: String },

    #[error("cannot resolve type '{name}'")]
    UnresolvedTypeName { name: String },
}
