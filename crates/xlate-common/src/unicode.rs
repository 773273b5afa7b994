//! Target literal encoding.
//!
//! A string constant can only stay a declarative literal in the target
//! representation when every character survives the target's literal
//! encoding. Everything else must be built at runtime.

use serde::{Deserialize, Serialize};

/// Character policy for string literals emitted into the target source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralEncoding {
    /// C/C++ narrow string literals: printable ASCII, the simple escapes, and
    /// Basic Multilingual Plane characters outside the C1 control block.
    #[default]
    Cpp,
    /// Printable ASCII plus `\t`, `\n` and `\r` only.
    Ascii,
}

impl LiteralEncoding {
    /// Whether every character of `value` can be embedded in a literal.
    pub fn is_representable(self, value: &str) -> bool {
        value.chars().all(|c| self.is_representable_char(c))
    }

    pub fn is_representable_char(self, c: char) -> bool {
        match self {
            LiteralEncoding::Cpp => is_valid_cpp_character(c),
            LiteralEncoding::Ascii => matches!(c, '\t' | '\n' | '\r' | ' '..='~'),
        }
    }
}

/// Characters accepted inside a C++ string literal of the target.
///
/// Rejected: NUL and the C0 controls without a simple escape, DEL and the C1
/// block, supplementary-plane characters (they would need a surrogate pair),
/// and the Unicode noncharacters.
pub fn is_valid_cpp_character(c: char) -> bool {
    let cp = c as u32;
    match cp {
        // \a \b \t \n \v \f \r
        0x07..=0x0D => true,
        0x00..=0x1F => false,
        0x20..=0x7E => true,
        0x7F..=0x9F => false,
        0xFDD0..=0xFDEF | 0xFFFE | 0xFFFF => false,
        _ => cp <= 0xFFFF,
    }
}

/// Shorthand for the default (`Cpp`) policy.
pub fn has_valid_cpp_characters(value: &str) -> bool {
    LiteralEncoding::Cpp.is_representable(value)
}

#[cfg(test)]
#[path = "../tests/unicode.rs"]
mod tests;
