//! Name resolution for the xlate source translator.
//!
//! - `bindings`: type, variable and method descriptors
//! - `resolver`: the [`Resolver`] trait passes resolve through
//! - `table`: [`BindingTable`], the serializable reference resolver
//! - `binder`: declares and binds the handles of a compilation unit
//! - `fold`: compile-time constant evaluation
//! - `constants`: constant values of `final` fields

pub mod bindings;
pub use bindings::{MethodBinding, TypeDescriptor, VariableBinding};

pub mod error;
pub use error::ResolveError;

pub mod resolver;
pub use resolver::Resolver;

pub mod table;
pub use table::BindingTable;

pub mod binder;
pub use binder::{BindStats, bind_unit};

pub mod fold;
pub use fold::{ConstantEnv, ConstantFolder};

pub mod constants;
pub use constants::bind_field_constants;
