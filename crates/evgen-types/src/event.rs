//! Event list node types handed to extension code generators.
//!
//! The host compiler has already decoded the binary event data into this
//! shape: every opcode site names its extension and opcode, and its
//! parameters are either object references or streams of expression items.
//! Sites keep source order; nothing here is sorted.

use serde::{Deserialize, Serialize};
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Events & Sites
// ══════════════════════════════════════════════════════════════════════════════

/// One event: all conditions must hold for the actions to run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub conditions: Vec<Site>,
    #[serde(default)]
    pub actions: Vec<Site>,
}

/// A single action or condition occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Extension name, e.g. `"ValueAdd"`.
    pub extension: String,
    pub opcode: u32,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Conditions only: the host's "negate" flag.
    #[serde(default)]
    pub negated: bool,
}

impl Site {
    pub fn new(extension: impl Into<String>, opcode: u32, parameters: Vec<Parameter>) -> Self {
        Self {
            extension: extension.into(),
            opcode,
            parameters,
            negated: false,
        }
    }

    pub fn negate(mut self) -> Self {
        self.negated = true;
        self
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Parameters
// ══════════════════════════════════════════════════════════════════════════════

/// Object-info handle plus object type, as stored in the event data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    pub handle: u32,
    pub type_id: i32,
}

impl ObjectRef {
    pub fn new(handle: u32, type_id: i32) -> Self {
        Self { handle, type_id }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Object(ObjectRef),
    Expression(Vec<ExpressionItem>),
    Comparison {
        op: CompareOp,
        value: Vec<ExpressionItem>,
    },
}

impl Parameter {
    /// Shorthand for a parameter holding a single string literal.
    pub fn string(s: impl Into<String>) -> Self {
        Self::Expression(vec![ExpressionItem::Str(s.into())])
    }

    /// Shorthand for a parameter holding already-rendered host code.
    pub fn code(s: impl Into<String>) -> Self {
        Self::Expression(vec![ExpressionItem::Code(s.into())])
    }

    /// Short human name used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Expression(_) => "expression",
            Self::Comparison { .. } => "comparison",
        }
    }
}

/// One token of a parameter expression.
///
/// Extension calls appear as an [`ExpressionItem::Extension`] marker followed
/// by their argument items, up to and including the closing
/// [`ExpressionItem::EndParenthesis`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionItem {
    /// Code the host has already rendered (numbers, operators, host calls).
    Code(String),
    /// A string literal.
    Str(String),
    Object(ObjectRef),
    Comma,
    EndParenthesis,
    Extension { name: String, opcode: u32 },
}

// ══════════════════════════════════════════════════════════════════════════════
// Comparison
// ══════════════════════════════════════════════════════════════════════════════

/// Comparison operator of a condition, in host index order.
///
/// Serializes by name; deserializes from either the name or the host's
/// numeric index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "CompareOpRepr")]
pub enum CompareOp {
    Equal,
    NotEqual,
    LessEqual,
    Less,
    GreaterEqual,
    Greater,
}

impl CompareOp {
    /// Decode the host's 0..=5 comparison index.
    pub fn from_index(index: u16) -> Option<Self> {
        Some(match index {
            0 => Self::Equal,
            1 => Self::NotEqual,
            2 => Self::LessEqual,
            3 => Self::Less,
            4 => Self::GreaterEqual,
            5 => Self::Greater,
            _ => return None,
        })
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "equal" => Self::Equal,
            "not_equal" => Self::NotEqual,
            "less_equal" => Self::LessEqual,
            "less" => Self::Less,
            "greater_equal" => Self::GreaterEqual,
            "greater" => Self::Greater,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessEqual => "<=",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::Greater => ">",
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CompareOpRepr {
    Index(u16),
    Name(String),
}

impl TryFrom<CompareOpRepr> for CompareOp {
    type Error = String;

    fn try_from(repr: CompareOpRepr) -> Result<Self, Self::Error> {
        match repr {
            CompareOpRepr::Index(index) => Self::from_index(index)
                .ok_or_else(|| format!("comparison index {index} out of range 0..=5")),
            CompareOpRepr::Name(name) => {
                Self::from_name(&name).ok_or_else(|| format!("unknown comparison `{name}`"))
            }
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
