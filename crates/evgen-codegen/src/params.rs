//! Typed access to a site's parameter list.
//!
//! Missing or wrongly-shaped parameters are malformed opcode data; each
//! accessor reports the parameter index and the site location.

use evgen_types::{CompareOp, ObjectRef, OpcodeLocation, Parameter};

use crate::context::CompilationContext;
use crate::error::{CodegenError, CodegenResult};
use crate::expr::{render_expression, static_string};

pub fn parameter(
    params: &[Parameter],
    index: usize,
    location: OpcodeLocation,
) -> CodegenResult<&Parameter> {
    params
        .get(index)
        .ok_or(CodegenError::MissingParameter { index, location })
}

fn mismatch(
    index: usize,
    expected: &'static str,
    found: &Parameter,
    location: OpcodeLocation,
) -> CodegenError {
    CodegenError::ParameterMismatch {
        index,
        expected,
        found: found.describe(),
        location,
    }
}

pub fn object(
    params: &[Parameter],
    index: usize,
    location: OpcodeLocation,
) -> CodegenResult<ObjectRef> {
    match parameter(params, index, location)? {
        Parameter::Object(obj) => Ok(*obj),
        other => Err(mismatch(index, "object", other, location)),
    }
}

/// The alterable key at `index`; must be a single string literal.
pub fn static_key(
    params: &[Parameter],
    index: usize,
    location: OpcodeLocation,
) -> CodegenResult<&str> {
    match parameter(params, index, location)? {
        Parameter::Expression(items) => {
            static_string(items).ok_or(CodegenError::NonStaticKey { index, location })
        }
        other => Err(mismatch(index, "expression", other, location)),
    }
}

pub fn expression(
    params: &[Parameter],
    index: usize,
    ctx: &mut CompilationContext,
    location: OpcodeLocation,
) -> CodegenResult<String> {
    match parameter(params, index, location)? {
        Parameter::Expression(items) => render_expression(items, ctx, location),
        other => Err(mismatch(index, "expression", other, location)),
    }
}

pub fn comparison(
    params: &[Parameter],
    index: usize,
    ctx: &mut CompilationContext,
    location: OpcodeLocation,
) -> CodegenResult<(CompareOp, String)> {
    match parameter(params, index, location)? {
        Parameter::Comparison { op, value } => {
            let value = render_expression(value, ctx, location)?;
            Ok((*op, value))
        }
        other => Err(mismatch(index, "comparison", other, location)),
    }
}
