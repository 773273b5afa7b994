use crate::span::Span;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

/// Stable codes for diagnostics raised by translator passes.
pub mod diagnostic_codes {
    pub const MISSING_TYPE_BINDING: u32 = 7001;
    pub const MISSING_VARIABLE_BINDING: u32 = 7002;
    pub const MISSING_METHOD_BINDING: u32 = 7003;
    pub const MISSING_SUPERCLASS: u32 = 7004;
    pub const MISSING_CONSTRUCTOR_BODY: u32 = 7005;
    pub const RESERVED_NAME_COLLISION: u32 = 7006;
    pub const TYPE_NESTING_TOO_DEEP: u32 = 7007;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(file: impl Into<String>, span: Span, message: impl Into<String>, code: u32) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            file: file.into(),
            start: span.start,
            length: span.len(),
            message_text: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let category = match self.category {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Message => "message",
        };
        write!(
            f,
            "{}:{}: {category} XL{}: {}",
            self.file, self.start, self.code, self.message_text
        )
    }
}
