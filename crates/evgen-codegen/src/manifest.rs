//! Key manifest: alterable handle to original key.
//!
//! Generated code only carries integer handles. The manifest records which
//! key each handle stands for, so tools and debuggers can map a handle seen
//! at run time back to a readable name.

use serde::{Deserialize, Serialize};

use crate::intern::{KeyHandle, KeyInterner};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyManifest {
    /// Entries in handle order.
    pub entries: Vec<KeyEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    pub handle: KeyHandle,
    /// Normalized (lower-case) key.
    pub key: String,
}

impl KeyManifest {
    /// Snapshot the interner's table.
    pub fn from_interner(interner: &KeyInterner) -> Self {
        Self {
            entries: interner
                .iter()
                .map(|(handle, key)| KeyEntry {
                    handle,
                    key: key.to_string(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Handle assigned to `key`, compared case-insensitively.
    pub fn handle_of(&self, key: &str) -> Option<KeyHandle> {
        let key = key.to_lowercase();
        self.entries.iter().find(|e| e.key == key).map(|e| e.handle)
    }

    pub fn to_json(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }

    pub fn from_json(data: &[u8]) -> Option<Self> {
        serde_json::from_slice(data).ok()
    }
}
