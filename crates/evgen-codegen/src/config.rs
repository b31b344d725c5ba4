//! Code generation settings for one compilation run.

use serde::{Deserialize, Serialize};

/// Accessor the runtime exposes on every object instance for its
/// alterable-value store.
pub const DEFAULT_CONTAINER_ACCESSOR: &str = "get_extra_alterables()";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Appended to an instance expression with `->` to reach its store.
    pub container_accessor: String,
    /// Spaces per indentation level in generated source.
    pub indent_width: usize,
    /// Emit a `// event N` line before each compiled event.
    pub event_comments: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            container_accessor: DEFAULT_CONTAINER_ACCESSOR.to_string(),
            indent_width: 4,
            event_comments: true,
        }
    }
}

impl CodegenConfig {
    /// Parse a config from JSON; omitted fields keep their defaults.
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = CodegenConfig::from_json(r#"{"indent_width": 2}"#).unwrap();
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.container_accessor, DEFAULT_CONTAINER_ACCESSOR);
        assert!(config.event_comments);
    }

    #[test]
    fn rejects_bad_json() {
        assert!(CodegenConfig::from_json(r#"{"indent_width": "wide"}"#).is_err());
    }
}
