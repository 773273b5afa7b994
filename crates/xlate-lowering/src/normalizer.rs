//! Initialization normalization.
//!
//! The target representation has no field initializers and no initializer
//! blocks. This pass rewrites every type declaration so that
//!
//! - instance field initializers and instance initializer blocks run, in
//!   declaration order, at the start of every designated constructor (right
//!   after the superclass constructor call);
//! - static field initializers that cannot stay literals, and static
//!   initializer blocks, run in one synthesized static routine;
//! - a type without constructors gets a default constructor.
//!
//! # Example
//!
//! ```java
//! class Counter {
//!     int count = 1;
//!     static String label = compute();
//!     { count++; }
//! }
//! ```
//!
//! becomes
//!
//! ```java
//! class Counter {
//!     int count;
//!     static String label;
//!     Counter() { super(); count = 1; count++; }
//!     public static void initialize() { label = compute(); }
//! }
//! ```
//!
//! Types are handled innermost first: member and local types of a type are
//! normalized before the type's own initialization lists are collected.

#[path = "collector.rs"]
mod collector;
#[path = "constructors.rs"]
mod constructors;
#[path = "synthesizer.rs"]
mod synthesizer;

pub use collector::InitializerLists;
pub use constructors::is_designated_constructor;

use crate::error::LoweringError;
use crate::options::NormalizerOptions;
use serde::Serialize;
use tracing::{debug, debug_span};
use xlate_ast::visit::try_for_each_local_type_mut;
use xlate_ast::{CompilationUnit, Member, NodeIdAllocator, TypeDeclaration};
use xlate_binder::Resolver;
use xlate_common::limits::MAX_TYPE_NESTING_DEPTH;

/// Counters reported after a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeStats {
    pub types: usize,
    /// Instance field initializers moved into constructors.
    pub instance_assignments: usize,
    /// Static field initializers moved into the static routine.
    pub static_assignments: usize,
    pub kept_literals: usize,
    pub folded_literals: usize,
    pub initializer_blocks: usize,
    pub designated_constructors: usize,
    pub delegating_constructors: usize,
    pub default_constructors: usize,
    pub class_initializers: usize,
}

pub struct InitializationNormalizer<'a, R: Resolver + ?Sized> {
    resolver: &'a mut R,
    options: &'a NormalizerOptions,
    stats: NormalizeStats,
}

impl<'a, R: Resolver + ?Sized> InitializationNormalizer<'a, R> {
    pub fn new(resolver: &'a mut R, options: &'a NormalizerOptions) -> Self {
        InitializationNormalizer {
            resolver,
            options,
            stats: NormalizeStats::default(),
        }
    }

    /// Normalize every type of `unit`. The first error aborts the run and
    /// leaves `unit` untouched; bindings already synthesized stay in the
    /// resolver but nothing in the tree refers to them.
    pub fn run(mut self, unit: &mut CompilationUnit) -> Result<NormalizeStats, LoweringError> {
        let _span = debug_span!("normalize_initialization", file = %unit.file_name).entered();
        let mut types = unit.types.clone();
        let mut node_ids = unit.node_ids.clone();
        for decl in &mut types {
            self.normalize_type(decl, &mut node_ids).inspect_err(|err| {
                debug!(error = %err, "initialization aborted, unit left as is");
            })?;
        }
        unit.types = types;
        unit.node_ids = node_ids;
        debug!(stats = ?self.stats, "initialization normalized");
        Ok(self.stats)
    }

    pub const fn stats(&self) -> &NormalizeStats {
        &self.stats
    }

    /// Normalize one type declaration and everything nested in it, in place.
    /// On error `decl` may be partly rewritten.
    pub fn normalize_type(
        &mut self,
        decl: &mut TypeDeclaration,
        ids: &mut NodeIdAllocator,
    ) -> Result<(), LoweringError> {
        self.normalize_type_at(decl, ids, 0)
    }

    fn normalize_type_at(
        &mut self,
        decl: &mut TypeDeclaration,
        ids: &mut NodeIdAllocator,
        depth: u32,
    ) -> Result<(), LoweringError> {
        if depth > MAX_TYPE_NESTING_DEPTH {
            return Err(LoweringError::NestingTooDeep {
                type_name: decl.name.clone(),
                max_depth: MAX_TYPE_NESTING_DEPTH,
                span: decl.span,
            });
        }
        let _span = debug_span!("normalize_type", name = %decl.name, kind = decl.kind.keyword())
            .entered();
        let type_id = decl.binding.ok_or_else(|| LoweringError::MissingTypeBinding {
            type_name: decl.name.clone(),
            span: decl.span,
        })?;
        let is_interface = self
            .resolver
            .is_interface(type_id)
            .map_err(|err| LoweringError::from_resolve(&decl.name, decl.span, err))?;

        self.normalize_nested_types(decl, ids, depth)?;

        let lists = self.collect_initializers(decl, is_interface, ids)?;

        if !is_interface {
            let constructors = self.normalize_constructors(decl, type_id, &lists.instance, ids)?;
            if constructors == 0 {
                self.add_default_constructor(decl, type_id, lists.instance, ids)?;
            }
        }

        if !lists.statics.is_empty() {
            self.add_class_initializer(decl, type_id, lists.statics, ids)?;
        }
        self.stats.types += 1;
        Ok(())
    }

    /// Member types, then local types declared in method and initializer
    /// bodies, before any body is copied.
    fn normalize_nested_types(
        &mut self,
        decl: &mut TypeDeclaration,
        ids: &mut NodeIdAllocator,
        depth: u32,
    ) -> Result<(), LoweringError> {
        for member in &mut decl.members {
            if let Member::Type(inner) = member {
                self.normalize_type_at(inner, ids, depth + 1)?;
            }
        }
        for statements in decl.body_statements_mut() {
            try_for_each_local_type_mut(statements, &mut |local| {
                self.normalize_type_at(local, ids, depth + 1)
            })?;
        }
        Ok(())
    }
}

/// Normalize `unit` with a fresh [`InitializationNormalizer`].
pub fn normalize_unit<R: Resolver + ?Sized>(
    resolver: &mut R,
    unit: &mut CompilationUnit,
    options: &NormalizerOptions,
) -> Result<NormalizeStats, LoweringError> {
    InitializationNormalizer::new(resolver, options).run(unit)
}
