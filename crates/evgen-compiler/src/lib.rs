//! evgen compiler: runs extension codegen over a whole event list.
//!
//! ```text
//! Event list (JSON) → site dispatch → extension handlers → generated source
//! ```
//!
//! One call is one compilation run: a fresh [`CompilationContext`] owns the
//! alterable key table for the duration of the call, and the resulting
//! [`KeyManifest`] is returned alongside the source.

mod error;
mod pipeline;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub use error::InputError;
pub use evgen_codegen::{CodegenConfig, CompilationContext, KeyManifest};
pub use evgen_types::{CompileErrors, Event};

/// Result of one compilation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileResult {
    /// `true` when every event compiled.
    pub success: bool,
    /// Generated source for every event that compiled.
    pub source: String,
    /// SHA-256 of `source`, lower-case hex.
    pub source_hash: String,
    /// Alterable keys in handle order.
    pub keys: KeyManifest,
    pub errors: CompileErrors,
}

impl CompileResult {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Compile an event list with the given settings.
pub fn compile(events: &[Event], config: CodegenConfig) -> CompileResult {
    let mut ctx = CompilationContext::new(config);
    compile_with_context(events, &mut ctx)
}

/// Compile with a caller-supplied context, e.g. one with a custom
/// [`evgen_codegen::ObjectResolver`].
///
/// The context is reset first, so handles always start at 0.
pub fn compile_with_context(events: &[Event], ctx: &mut CompilationContext) -> CompileResult {
    ctx.reset();
    let output = pipeline::run(events, ctx);
    let keys = KeyManifest::from_interner(ctx.keys());

    tracing::info!(
        events = events.len(),
        keys = keys.len(),
        errors = output.errors.total_errors,
        "compilation finished"
    );

    CompileResult {
        success: !output.errors.has_errors(),
        source_hash: source_hash(&output.source),
        source: output.source,
        keys,
        errors: output.errors,
    }
}

/// Compile a JSON event list; `config` is an optional JSON config object.
pub fn compile_json(events: &str, config: Option<&str>) -> Result<CompileResult, InputError> {
    let events: Vec<Event> = serde_json::from_str(events).map_err(InputError::Events)?;
    let config = match config {
        Some(json) => CodegenConfig::from_json(json).map_err(InputError::Config)?,
        None => CodegenConfig::default(),
    };
    Ok(compile(&events, config))
}

fn source_hash(source: &str) -> String {
    Sha256::digest(source.as_bytes())
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_hash() {
        assert_eq!(
            source_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn bad_config_json() {
        let err = compile_json("[]", Some("{\"indent_width\": -1}")).unwrap_err();
        assert!(matches!(err, InputError::Config(_)));
    }

    #[test]
    fn bad_events_json() {
        let err = compile_json("{}", None).unwrap_err();
        assert!(err.to_string().starts_with("invalid event list"));
    }
}
