//! Event list → generated source.
//!
//! Every event is compiled into a scratch fragment first. Only events whose
//! sites all succeed reach the output; a failing site aborts its event with a
//! diagnostic and compilation moves on to the next event.

use std::collections::BTreeSet;

use evgen_codegen::{CodeWriter, CodegenConfig, CodegenResult, CompilationContext, Extension};
use evgen_codegen::extensions;
use evgen_types::{CompileErrors, Diagnostic, ErrorCode, Event, OpcodeLocation, SiteKind};

/// Rendered sites of one event.
#[derive(Debug, Default)]
struct EventFragment {
    conditions: Vec<String>,
    actions: Vec<String>,
    extensions: BTreeSet<Extension>,
}

/// Output of a pipeline run before hashing and packaging.
#[derive(Debug)]
pub(crate) struct PipelineOutput {
    pub source: String,
    pub errors: CompileErrors,
}

pub(crate) fn run(events: &[Event], ctx: &mut CompilationContext) -> PipelineOutput {
    let mut body = CodeWriter::new(ctx.config.indent_width);
    let mut errors = CompileErrors::empty();
    let mut used = BTreeSet::new();

    for (i, event) in events.iter().enumerate() {
        let index = i as u32;
        match compile_event(index, event, ctx, &mut errors) {
            Ok(fragment) => {
                tracing::debug!(
                    event = index,
                    conditions = fragment.conditions.len(),
                    actions = fragment.actions.len(),
                    "compiled event"
                );
                write_event(&mut body, index, &fragment, &ctx.config);
                used.extend(fragment.extensions);
            }
            Err(err) => {
                let diagnostic = err.to_diagnostic();
                tracing::warn!(%diagnostic, "event aborted");
                errors.push_error(diagnostic);
            }
        }
    }

    let mut source = String::new();
    for ext in &used {
        for define in ext.defines() {
            source.push_str("#define ");
            source.push_str(define);
            source.push('\n');
        }
    }
    if !source.is_empty() && !body.is_empty() {
        source.push('\n');
    }
    source.push_str(&body.finish());

    PipelineOutput { source, errors }
}

fn compile_event(
    index: u32,
    event: &Event,
    ctx: &mut CompilationContext,
    errors: &mut CompileErrors,
) -> CodegenResult<EventFragment> {
    let mut fragment = EventFragment::default();

    for (i, site) in event.conditions.iter().enumerate() {
        let location = OpcodeLocation::new(index, SiteKind::Condition, i as u32);
        tracing::trace!(extension = %site.extension, opcode = site.opcode, %location, "condition site");
        let ext = extensions::resolve(&site.extension, location)?;
        fragment.conditions.push(ext.emit_condition(site, ctx, location)?);
        fragment.extensions.insert(ext);
    }

    for (i, site) in event.actions.iter().enumerate() {
        let location = OpcodeLocation::new(index, SiteKind::Action, i as u32);
        tracing::trace!(extension = %site.extension, opcode = site.opcode, %location, "action site");
        if site.negated {
            let warning = Diagnostic::warning(
                ErrorCode::NEGATED_ACTION,
                "actions cannot be negated; flag ignored",
                location,
            );
            tracing::warn!(diagnostic = %warning, "negated action");
            errors.push_warning(warning);
        }
        let ext = extensions::resolve(&site.extension, location)?;
        fragment.actions.push(ext.emit_action(site, ctx, location)?);
        fragment.extensions.insert(ext);
    }

    Ok(fragment)
}

fn write_event(out: &mut CodeWriter, index: u32, fragment: &EventFragment, config: &CodegenConfig) {
    if config.event_comments {
        out.putln(&format!("// event {index}"));
    }
    if fragment.conditions.is_empty() {
        out.start_brace("");
    } else {
        out.start_brace(&format!("if ({})", fragment.conditions.join(" && ")));
    }
    for action in &fragment.actions {
        out.putln(action);
    }
    out.end_brace();
}
