//! Declaration modifiers.
//!
//! Bit values follow the class-file access flags, so modifier sets read from
//! a resolver or a serialized AST line up with the source language's own
//! numbering.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Modifier set attached to types, fields, methods and initializer blocks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Modifiers: u32 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE = 0x0040;
        const TRANSIENT = 0x0080;
        const NATIVE = 0x0100;
        const ABSTRACT = 0x0400;
        const STRICTFP = 0x0800;
        const DEFAULT = 0x1_0000;
    }
}

impl Modifiers {
    /// Visibility bits.
    pub const ACCESS_MASK: Modifiers = Modifiers::PUBLIC
        .union(Modifiers::PROTECTED)
        .union(Modifiers::PRIVATE);

    #[inline]
    pub const fn is_static(self) -> bool {
        self.contains(Modifiers::STATIC)
    }

    #[inline]
    pub const fn is_final(self) -> bool {
        self.contains(Modifiers::FINAL)
    }

    #[inline]
    pub const fn is_abstract(self) -> bool {
        self.contains(Modifiers::ABSTRACT)
    }

    /// Only the visibility bits of this set.
    #[inline]
    pub const fn access(self) -> Modifiers {
        self.intersection(Modifiers::ACCESS_MASK)
    }

    /// Keywords in source order, e.g. `["public", "static", "final"]`.
    pub fn keywords(self) -> Vec<&'static str> {
        const ORDER: &[(Modifiers, &str)] = &[
            (Modifiers::PUBLIC, "public"),
            (Modifiers::PROTECTED, "protected"),
            (Modifiers::PRIVATE, "private"),
            (Modifiers::ABSTRACT, "abstract"),
            (Modifiers::STATIC, "static"),
            (Modifiers::FINAL, "final"),
            (Modifiers::TRANSIENT, "transient"),
            (Modifiers::VOLATILE, "volatile"),
            (Modifiers::SYNCHRONIZED, "synchronized"),
            (Modifiers::NATIVE, "native"),
            (Modifiers::STRICTFP, "strictfp"),
            (Modifiers::DEFAULT, "default"),
        ];
        ORDER
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|&(_, kw)| kw)
            .collect()
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Modifiers::empty()
    }
}

#[cfg(test)]
#[path = "../tests/modifiers.rs"]
mod tests;
