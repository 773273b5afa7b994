//! Tree lowering passes for the xlate source translator.
//!
//! The passes rewrite a bound [`xlate_ast::CompilationUnit`] in place into
//! the shape the emitter expects. Resolution goes through the
//! [`xlate_binder::Resolver`] trait only.
//!
//! - `normalizer`: initialization normalization (field initializers and
//!   initializer blocks into constructors and a static routine)
//! - `eligibility`: which static initializers may stay literals
//! - `options`: pass configuration
//! - `error`: [`LoweringError`]

pub mod options;
pub use options::NormalizerOptions;

pub mod error;
pub use error::LoweringError;

pub mod eligibility;
pub use eligibility::{LiteralEligibility, classify_initializer};

pub mod normalizer;
pub use normalizer::{
    InitializationNormalizer, InitializerLists, NormalizeStats, is_designated_constructor,
    normalize_unit,
};
