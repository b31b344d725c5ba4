//! Extension registry and site dispatch.
//!
//! The set of supported extensions is closed. A site names its extension by
//! string; [`resolve`] maps that to an [`Extension`], whose opcode tables pick
//! the handler.

pub mod value_add;

use evgen_types::{OpcodeLocation, Site, SiteKind};

use crate::context::CompilationContext;
use crate::error::{CodegenError, CodegenResult};
use crate::expr::ItemCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Extension {
    ValueAdd,
}

impl Extension {
    pub const ALL: &'static [Extension] = &[Extension::ValueAdd];

    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ext| ext.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ValueAdd => value_add::NAME,
        }
    }

    /// Preprocessor defines the runtime needs when this extension is used.
    pub fn defines(self) -> &'static [&'static str] {
        match self {
            Self::ValueAdd => value_add::DEFINES,
        }
    }

    /// Generate one action statement.
    pub fn emit_action(
        self,
        site: &Site,
        ctx: &mut CompilationContext,
        location: OpcodeLocation,
    ) -> CodegenResult<String> {
        match self {
            Self::ValueAdd => {
                let action = value_add::ACTIONS
                    .get(site.opcode)
                    .ok_or_else(|| self.unknown_opcode(SiteKind::Action, site.opcode, location))?;
                value_add::emit_action(*action, &site.parameters, ctx, location)
            }
        }
    }

    /// Generate one condition expression, honouring the site's negate flag.
    pub fn emit_condition(
        self,
        site: &Site,
        ctx: &mut CompilationContext,
        location: OpcodeLocation,
    ) -> CodegenResult<String> {
        let code = match self {
            Self::ValueAdd => {
                let condition = value_add::CONDITIONS
                    .get(site.opcode)
                    .ok_or_else(|| self.unknown_opcode(SiteKind::Condition, site.opcode, location))?;
                value_add::emit_condition(*condition, &site.parameters, ctx, location)?
            }
        };
        if site.negated {
            Ok(format!("!({code})"))
        } else {
            Ok(code)
        }
    }

    /// Generate an expression call whose arguments follow in `cursor`.
    pub fn emit_expression(
        self,
        opcode: u32,
        cursor: &mut ItemCursor<'_>,
        ctx: &mut CompilationContext,
        location: OpcodeLocation,
    ) -> CodegenResult<String> {
        match self {
            Self::ValueAdd => {
                let expression = value_add::EXPRESSIONS
                    .get(opcode)
                    .ok_or_else(|| self.unknown_opcode(SiteKind::Expression, opcode, location))?;
                value_add::emit_expression(*expression, cursor, ctx, location)
            }
        }
    }

    fn unknown_opcode(self, kind: SiteKind, opcode: u32, location: OpcodeLocation) -> CodegenError {
        CodegenError::UnknownOpcode {
            extension: self.name().to_string(),
            kind,
            opcode,
            location,
        }
    }
}

/// Look up an extension by the name a site carries.
pub fn resolve(name: &str, location: OpcodeLocation) -> CodegenResult<Extension> {
    Extension::by_name(name).ok_or_else(|| CodegenError::UnknownExtension {
        name: name.to_string(),
        location,
    })
}
