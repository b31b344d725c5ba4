//! Shared types for evgen.
//!
//! This crate defines the event-site model the host compiler hands to
//! extension code generators, opcode locations, and the diagnostic types
//! reported back when a site cannot be compiled.

mod error;
pub mod event;
mod location;

pub use error::{CompileErrors, Diagnostic, ErrorCategory, ErrorCode, Severity, MAX_ERRORS};
pub use event::{CompareOp, Event, ExpressionItem, ObjectRef, Parameter, Site};
pub use location::{OpcodeLocation, SiteKind};
