//! Alterable-value key interning.
//!
//! Opcode sites name per-instance values with string keys. Generated code
//! addresses them by small integer handles instead, so the runtime never
//! compares strings. The table lives for one compilation run and is shared by
//! every action, condition and expression emitted in that run, which keeps a
//! key's handle identical wherever it appears in the generated source.
//!
//! Keys are case-insensitive: the stored form is the lower-cased input.
//! Handles are dense, starting at 0 in first-seen order.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Dense handle of an interned key. Displays as a bare integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyHandle(usize);

impl KeyHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for KeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyInterner {
    keys: IndexSet<String>,
}

impl KeyInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle for `key`, assigning the next free one on first use.
    pub fn intern(&mut self, key: &str) -> KeyHandle {
        let normalized = key.to_lowercase();
        if let Some(idx) = self.keys.get_index_of(&normalized) {
            return KeyHandle(idx);
        }

        let (idx, is_new) = self.keys.insert_full(normalized);
        debug_assert!(is_new);
        tracing::debug!(key, handle = idx, "interned alterable key");
        KeyHandle(idx)
    }

    /// Look up a key without interning it.
    pub fn lookup(&self, key: &str) -> Option<KeyHandle> {
        self.keys.get_index_of(&key.to_lowercase()).map(KeyHandle)
    }

    /// The normalized key a handle was assigned to.
    pub fn resolve(&self, handle: KeyHandle) -> Option<&str> {
        self.keys.get_index(handle.0).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All keys in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (KeyHandle, &str)> + '_ {
        self.keys
            .iter()
            .enumerate()
            .map(|(idx, key)| (KeyHandle(idx), key.as_str()))
    }

    /// Forget every key; the next intern starts again at handle 0.
    pub fn reset(&mut self) {
        self.keys.clear();
    }
}
