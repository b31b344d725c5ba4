//! Expression item stream rendering.
//!
//! A parameter expression arrives as a flat stream of items. Host items are
//! copied through; an [`ExpressionItem::Extension`] marker hands the cursor
//! to the extension, which consumes its own arguments up to and including
//! the closing parenthesis.

use evgen_types::{ExpressionItem, ObjectRef, OpcodeLocation};

use crate::context::CompilationContext;
use crate::error::{CodegenError, CodegenResult};
use crate::extensions;

/// Forward-only reader over an expression item stream.
#[derive(Debug, Clone)]
pub struct ItemCursor<'a> {
    items: &'a [ExpressionItem],
    pos: usize,
}

impl<'a> ItemCursor<'a> {
    pub fn new(items: &'a [ExpressionItem]) -> Self {
        Self { items, pos: 0 }
    }

    /// Next item and its offset in the stream.
    pub fn next_item(&mut self) -> Option<(usize, &'a ExpressionItem)> {
        let item = self.items.get(self.pos)?;
        let at = self.pos;
        self.pos += 1;
        Some((at, item))
    }

    pub fn expect_object(&mut self, location: OpcodeLocation) -> CodegenResult<ObjectRef> {
        match self.next_item() {
            Some((_, ExpressionItem::Object(obj))) => Ok(*obj),
            other => Err(unexpected("an object", other, location)),
        }
    }

    pub fn expect_comma(&mut self, location: OpcodeLocation) -> CodegenResult<()> {
        match self.next_item() {
            Some((_, ExpressionItem::Comma)) => Ok(()),
            other => Err(unexpected("`,`", other, location)),
        }
    }

    pub fn expect_str(&mut self, location: OpcodeLocation) -> CodegenResult<&'a str> {
        match self.next_item() {
            Some((_, ExpressionItem::Str(s))) => Ok(s.as_str()),
            other => Err(unexpected("a string literal", other, location)),
        }
    }

    pub fn expect_end(&mut self, location: OpcodeLocation) -> CodegenResult<()> {
        match self.next_item() {
            Some((_, ExpressionItem::EndParenthesis)) => Ok(()),
            other => Err(unexpected("`)`", other, location)),
        }
    }
}

fn unexpected(
    expected: &str,
    found: Option<(usize, &ExpressionItem)>,
    location: OpcodeLocation,
) -> CodegenError {
    let reason = match found {
        Some((at, item)) => format!("expected {expected} at item {at}, found {}", describe(item)),
        None => format!("expected {expected}, found end of expression"),
    };
    CodegenError::MalformedExpression { reason, location }
}

fn describe(item: &ExpressionItem) -> &'static str {
    match item {
        ExpressionItem::Code(_) => "host code",
        ExpressionItem::Str(_) => "a string literal",
        ExpressionItem::Object(_) => "an object",
        ExpressionItem::Comma => "`,`",
        ExpressionItem::EndParenthesis => "`)`",
        ExpressionItem::Extension { .. } => "an extension call",
    }
}

/// Render a whole parameter expression to generated code.
///
/// `location` is the enclosing action or condition; extension calls inside
/// the stream are reported at their own item offset.
pub fn render_expression(
    items: &[ExpressionItem],
    ctx: &mut CompilationContext,
    location: OpcodeLocation,
) -> CodegenResult<String> {
    let mut cursor = ItemCursor::new(items);
    let mut out = String::new();
    while let Some((at, item)) = cursor.next_item() {
        match item {
            ExpressionItem::Code(code) => out.push_str(code),
            ExpressionItem::Str(s) => out.push_str(&quote(s)),
            ExpressionItem::Object(obj) => out.push_str(&ctx.instance(*obj)),
            ExpressionItem::Comma => out.push_str(", "),
            ExpressionItem::EndParenthesis => out.push(')'),
            ExpressionItem::Extension { name, opcode } => {
                let call_site = location.at_item(at as u32);
                tracing::trace!(extension = %name, opcode, location = %call_site, "expression site");
                let ext = extensions::resolve(name, call_site)?;
                let code = ext.emit_expression(*opcode, &mut cursor, ctx, call_site)?;
                out.push_str(&code);
            }
        }
    }
    Ok(out)
}

/// Static string value of an expression: exactly one string literal.
pub fn static_string(items: &[ExpressionItem]) -> Option<&str> {
    match items {
        [ExpressionItem::Str(s)] => Some(s.as_str()),
        _ => None,
    }
}

/// Quote `s` as a C string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
