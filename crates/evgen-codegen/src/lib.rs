//! evgen extension code generator.
//!
//! Translates extension opcode sites (actions, conditions and expressions)
//! into calls against the generated-code runtime API.
//!
//! # Alterable keys
//!
//! Sites address per-instance values by string key. The run's
//! [`KeyInterner`] turns each key into a dense integer handle, so generated
//! code reads:
//!
//! ```text
//! obj_4->get_extra_alterables().set_value(0, 10);
//! obj_4->get_extra_alterables().get_value(0) >= 3
//! ```
//!
//! Handles are shared across every site in one [`CompilationContext`] and
//! recorded in a [`KeyManifest`].

pub mod alterables;
pub mod config;
pub mod context;
pub mod error;
pub mod expr;
pub mod extensions;
pub mod intern;
pub mod manifest;
pub mod objects;
pub mod params;
pub mod table;
pub mod writer;

pub use config::CodegenConfig;
pub use context::CompilationContext;
pub use error::{CodegenError, CodegenResult};
pub use extensions::Extension;
pub use intern::{KeyHandle, KeyInterner};
pub use manifest::KeyManifest;
pub use objects::{HandleNames, ObjectResolver};
pub use writer::CodeWriter;
