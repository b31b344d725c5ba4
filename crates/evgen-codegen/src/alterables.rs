//! Call-site templates for the runtime alterable-value store.
//!
//! The store attached to each object instance maps handles to values:
//! `get_value(h)`, `set_value(h, v)`, `get_string(h)`, `set_string(h, v)`.
//! Its layout and defaults belong to the runtime; this module only spells
//! the calls.

use evgen_types::CompareOp;

use crate::intern::KeyHandle;

/// Which half of the store a key addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Value,
    String,
}

impl Slot {
    pub fn getter(self) -> &'static str {
        match self {
            Self::Value => "get_value",
            Self::String => "get_string",
        }
    }

    pub fn setter(self) -> &'static str {
        match self {
            Self::Value => "set_value",
            Self::String => "set_string",
        }
    }
}

/// `<container>.set_value(<handle>, <value>);`
pub fn store(container: &str, slot: Slot, handle: KeyHandle, value: &str) -> String {
    format!("{container}.{}({handle}, {value});", slot.setter())
}

/// `<container>.get_value(<handle>)`
pub fn load(container: &str, slot: Slot, handle: KeyHandle) -> String {
    format!("{container}.{}({handle})", slot.getter())
}

/// `<container>.get_value(<handle>) <op> <value>`
pub fn compare(container: &str, handle: KeyHandle, op: CompareOp, value: &str) -> String {
    format!("{} {op} {value}", load(container, Slot::Value, handle))
}
