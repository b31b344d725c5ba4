//! Per-run compilation state shared by every extension handler.

use evgen_types::ObjectRef;

use crate::config::CodegenConfig;
use crate::intern::{KeyHandle, KeyInterner};
use crate::objects::{HandleNames, ObjectResolver};

/// Everything a handler needs that outlives a single opcode site.
///
/// One context covers one compilation run. Handles interned through it stay
/// valid for every site emitted in that run; [`CompilationContext::reset`]
/// starts a new run.
pub struct CompilationContext {
    pub config: CodegenConfig,
    keys: KeyInterner,
    objects: Box<dyn ObjectResolver>,
}

impl CompilationContext {
    pub fn new(config: CodegenConfig) -> Self {
        Self::with_resolver(config, Box::new(HandleNames))
    }

    pub fn with_resolver(config: CodegenConfig, objects: Box<dyn ObjectResolver>) -> Self {
        Self {
            config,
            keys: KeyInterner::new(),
            objects,
        }
    }

    pub fn intern_key(&mut self, key: &str) -> KeyHandle {
        self.keys.intern(key)
    }

    pub fn keys(&self) -> &KeyInterner {
        &self.keys
    }

    pub fn instance(&self, obj: ObjectRef) -> String {
        self.objects.instance(obj)
    }

    /// Alterable store of the current instance of `obj`.
    pub fn container(&self, obj: ObjectRef) -> String {
        format!("{}->{}", self.instance(obj), self.config.container_accessor)
    }

    pub fn instance_list(&self, obj: ObjectRef) -> String {
        self.objects.instance_list(obj)
    }

    /// Drop all interned keys before the next run.
    pub fn reset(&mut self) {
        self.keys.reset();
    }
}

impl Default for CompilationContext {
    fn default() -> Self {
        Self::new(CodegenConfig::default())
    }
}

impl std::fmt::Debug for CompilationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompilationContext")
            .field("config", &self.config)
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}
