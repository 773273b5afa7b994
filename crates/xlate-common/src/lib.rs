//! Common types and utilities for the xlate source translator.
//!
//! This crate provides foundational types used across all xlate crates:
//! - Source spans (`Span`)
//! - Declaration modifiers (`Modifiers`)
//! - Translator limits and reserved names
//! - Target literal encoding checks
//! - Diagnostics

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Declaration modifier bits
pub mod modifiers;
pub use modifiers::Modifiers;

// Centralized limits and thresholds
pub mod limits;

// Reserved names for synthesized members
pub mod names;

// Target literal encoding
pub mod unicode;
pub use unicode::LiteralEncoding;

// Diagnostics reported by translator passes
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};
