//! Syntax tree for the xlate source translator.
//!
//! Types, members, statements and expressions are owned Rust values; each
//! node carries a [`NodeId`] so that passes (and the emitter) can tell copies
//! apart. Resolver handles (`TypeId`, `VariableId`, `MethodId`) point into
//! the binding table of `xlate-binder`.
//!
//! Modules:
//! - `node`: the tree itself
//! - `node_access`: member/statement accessors
//! - `factory`: node construction with fresh ids
//! - `copier`: deep copies with fresh ids
//! - `printer`: source-like rendering
//! - `visit`: walks that reach local type declarations

pub mod ids;
pub use ids::{MethodId, NodeId, NodeIdAllocator, TypeId, VariableId};

pub mod types;
pub use types::{ConstantValue, PrimitiveType, TypeName, TypeRef};

pub mod node;
pub use node::*;

mod node_access;

pub mod factory;
pub use factory::AstFactory;

pub mod copier;
pub use copier::NodeCopier;

pub mod printer;
pub use printer::AstPrinter;

pub mod visit;
