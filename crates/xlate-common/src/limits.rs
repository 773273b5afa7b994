//! Centralized limits and thresholds for the translator passes.
//!
//! Recursion over the program tree is ordinary function recursion, so every
//! recursive walk checks one of these depths before descending.

/// Maximum nesting depth of type declarations (member, local and nested
/// local types combined).
///
/// ```java
/// class A { class B { class C { /* ... 64 levels ... */ } } }
/// ```
///
/// Exceeding it aborts the pass with a fatal error rather than risking a
/// stack overflow.
pub const MAX_TYPE_NESTING_DEPTH: u32 = 64;

/// Maximum depth for constant-expression folding.
///
/// Deeper expressions are reported as "not a compile-time constant"; the
/// field is then initialized at runtime, which is always correct.
pub const MAX_CONSTANT_FOLD_DEPTH: u32 = 256;

/// Maximum number of fixed-point rounds when binding field constants.
///
/// Each round resolves at least one more constant variable or stops, so the
/// bound only matters for pathological inputs.
pub const MAX_CONSTANT_BINDING_ROUNDS: usize = 1024;
