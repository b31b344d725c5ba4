//! Codegen error types.

use evgen_types::{Diagnostic, ErrorCode, OpcodeLocation, SiteKind};
use thiserror::Error;

/// Errors raised while generating code for a single opcode site.
///
/// Every variant carries the location of the offending site; the pipeline
/// aborts that site's event and reports a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodegenError {
    #[error("unknown extension `{name}`")]
    UnknownExtension {
        name: String,
        location: OpcodeLocation,
    },

    #[error("extension `{extension}` has no {kind} with opcode {opcode}")]
    UnknownOpcode {
        extension: String,
        kind: SiteKind,
        opcode: u32,
        location: OpcodeLocation,
    },

    #[error("missing parameter {index}")]
    MissingParameter {
        index: usize,
        location: OpcodeLocation,
    },

    #[error("parameter {index}: expected {expected}, found {found}")]
    ParameterMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
        location: OpcodeLocation,
    },

    /// The alterable key was not a single string literal.
    #[error("parameter {index}: alterable key must be a static string")]
    NonStaticKey {
        index: usize,
        location: OpcodeLocation,
    },

    #[error("malformed expression: {reason}")]
    MalformedExpression {
        reason: String,
        location: OpcodeLocation,
    },
}

impl CodegenError {
    pub fn location(&self) -> OpcodeLocation {
        match self {
            Self::UnknownExtension { location, .. }
            | Self::UnknownOpcode { location, .. }
            | Self::MissingParameter { location, .. }
            | Self::ParameterMismatch { location, .. }
            | Self::NonStaticKey { location, .. }
            | Self::MalformedExpression { location, .. } => *location,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownExtension { .. } => ErrorCode::UNKNOWN_EXTENSION,
            Self::UnknownOpcode { .. } => ErrorCode::UNKNOWN_OPCODE,
            Self::MissingParameter { .. } => ErrorCode::MISSING_PARAMETER,
            Self::ParameterMismatch { .. } => ErrorCode::PARAMETER_MISMATCH,
            Self::NonStaticKey { .. } => ErrorCode::NON_STATIC_KEY,
            Self::MalformedExpression { .. } => ErrorCode::MALFORMED_EXPRESSION,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.to_string(), self.location())
    }
}

/// Codegen result type alias.
pub type CodegenResult<T> = Result<T, CodegenError>;
