use crate::OpcodeLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of diagnostics stored before further ones are only counted.
pub const MAX_ERRORS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// The site could not be routed to a handler.
    Dispatch,
    /// The handler was found but the site's opcode data is malformed.
    Opcode,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dispatch => write!(f, "dispatch"),
            Self::Opcode => write!(f, "opcode"),
        }
    }
}

/// Numeric error code (E100–E299).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Dispatch errors (E100–E199) ──
    pub const UNKNOWN_EXTENSION: Self = Self(100);
    pub const UNKNOWN_OPCODE: Self = Self(101);

    // ── Opcode errors (E200–E299) ──
    pub const MISSING_PARAMETER: Self = Self(200);
    pub const PARAMETER_MISMATCH: Self = Self(201);
    pub const NON_STATIC_KEY: Self = Self(202);
    pub const MALFORMED_EXPRESSION: Self = Self(203);
    /// Warning: an action carries the negation flag, which only conditions honour.
    pub const NEGATED_ACTION: Self = Self(204);

    pub fn category(self) -> ErrorCategory {
        match self.0 {
            100..=199 => ErrorCategory::Dispatch,
            _ => ErrorCategory::Opcode,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// A structured diagnostic pointing at one opcode site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    /// Derived from `code`.
    pub category: ErrorCategory,
    pub message: String,
    pub location: OpcodeLocation,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, message: impl Into<String>, location: OpcodeLocation) -> Self {
        Self {
            code,
            severity: Severity::Error,
            category: code.category(),
            message: message.into(),
            location,
        }
    }

    pub fn warning(code: ErrorCode, message: impl Into<String>, location: OpcodeLocation) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::new(code, message, location)
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.location, self.code, self.category, self.message
        )
    }
}

impl std::error::Error for Diagnostic {}

/// Diagnostics collected over one compilation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompileErrors {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub total_errors: usize,
    pub total_warnings: usize,
}

impl CompileErrors {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }

    /// Add an error, respecting the MAX_ERRORS limit.
    pub fn push_error(&mut self, error: Diagnostic) {
        if self.errors.len() < MAX_ERRORS {
            self.errors.push(error);
        }
        self.total_errors += 1;
    }

    pub fn push_warning(&mut self, warning: Diagnostic) {
        self.warnings.push(warning);
        self.total_warnings += 1;
    }
}
