use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the three extension tables a site dispatches through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteKind {
    Action,
    Condition,
    Expression,
}

impl fmt::Display for SiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action => write!(f, "action"),
            Self::Condition => write!(f, "condition"),
            Self::Expression => write!(f, "expression"),
        }
    }
}

/// Position of an opcode site inside the event list.
///
/// All indices are 0-based. `item` is set only for expression sites, which
/// live inside the item stream of an action or condition parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpcodeLocation {
    pub event: u32,
    pub kind: SiteKind,
    pub index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<u32>,
}

impl OpcodeLocation {
    /// Location of a top-level action or condition.
    pub fn new(event: u32, kind: SiteKind, index: u32) -> Self {
        Self {
            event,
            kind,
            index,
            item: None,
        }
    }

    /// Location of an expression embedded at `item` in this site's parameters.
    ///
    /// The site kind is kept so diagnostics still name the enclosing action
    /// or condition.
    pub fn at_item(self, item: u32) -> Self {
        Self {
            item: Some(item),
            ..self
        }
    }
}

impl fmt::Display for OpcodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event {}, {} {}", self.event, self.kind, self.index)?;
        if let Some(item) = self.item {
            write!(f, ", item {item}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display() {
        let loc = OpcodeLocation::new(3, SiteKind::Action, 1);
        assert_eq!(format!("{loc}"), "event 3, action 1");
    }

    #[test]
    fn test_location_display_with_item() {
        let loc = OpcodeLocation::new(0, SiteKind::Condition, 2).at_item(4);
        assert_eq!(format!("{loc}"), "event 0, condition 2, item 4");
    }

    #[test]
    fn test_location_json_omits_missing_item() {
        let loc = OpcodeLocation::new(1, SiteKind::Action, 0);
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(json, r#"{"event":1,"kind":"action","index":0}"#);

        let back: OpcodeLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, loc);
    }
}
