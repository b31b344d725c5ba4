//! Errors for malformed pipeline input.

use thiserror::Error;

/// The JSON handed to [`crate::compile_json`] could not be decoded.
///
/// Problems inside individual opcode sites are not input errors; they are
/// reported as diagnostics in the compile result.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid event list: {0}")]
    Events(#[source] serde_json::Error),

    #[error("invalid codegen config: {0}")]
    Config(#[source] serde_json::Error),
}
