//! Determinism of compilation runs.
//!
//! The same event list must produce byte-identical source, the same hash and
//! the same key manifest on every run, and a reused context must not leak
//! handles from one run into the next.

use evgen_compiler::{compile, compile_with_context, CodegenConfig, CompilationContext, Event};
use evgen_types::{ExpressionItem, ObjectRef, Parameter, Site};

fn set(key: &str) -> Site {
    Site::new(
        "ValueAdd",
        0,
        vec![
            Parameter::Object(ObjectRef::new(1, 32)),
            Parameter::string(key),
            Parameter::Expression(vec![
                ExpressionItem::Extension {
                    name: "ValueAdd".into(),
                    opcode: 0,
                },
                ExpressionItem::Object(ObjectRef::new(1, 32)),
                ExpressionItem::Comma,
                ExpressionItem::Str(key.to_uppercase()),
                ExpressionItem::EndParenthesis,
                ExpressionItem::Code(" + 1".into()),
            ]),
        ],
    )
}

fn events() -> Vec<Event> {
    ["Alpha", "beta", "ALPHA", "Gamma", "delta", "Beta"]
        .iter()
        .map(|k| Event {
            conditions: vec![],
            actions: vec![set(k)],
        })
        .collect()
}

#[test]
fn test_compile_determinism_100_iterations() {
    let events = events();
    let first = compile(&events, CodegenConfig::default());
    assert!(first.success);
    for i in 0..100 {
        let result = compile(&events, CodegenConfig::default());
        assert_eq!(first.source, result.source, "Determinism failure at iteration {i}");
        assert_eq!(first.source_hash, result.source_hash);
        assert_eq!(first.keys, result.keys);
    }
}

#[test]
fn test_reused_context_restarts_handles() {
    let mut ctx = CompilationContext::default();
    let first = compile_with_context(&events(), &mut ctx);

    let reversed: Vec<Event> = events().into_iter().rev().collect();
    let other = compile_with_context(&reversed, &mut ctx);
    assert_eq!(other.keys.handle_of("beta").map(|h| h.index()), Some(0));

    let again = compile_with_context(&events(), &mut ctx);
    assert_eq!(first.source, again.source);
    assert_eq!(first.keys, again.keys);
}

#[test]
fn test_handles_follow_first_occurrence() {
    let result = compile(&events(), CodegenConfig::default());
    let keys: Vec<_> = result.keys.entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, ["alpha", "beta", "gamma", "delta"]);
    // The third event repeats "alpha" in another case and reuses handle 0.
    assert!(result
        .source
        .contains("set_value(0, obj_1->get_extra_alterables().get_value(0) + 1);"));
}
