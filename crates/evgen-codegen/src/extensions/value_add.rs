//! "Value Add" extension: named alterable values on any object.
//!
//! Every site names its value with a static string key. Keys are interned
//! through the run's [`CompilationContext`], so the generated code passes
//! integer handles to the instance's alterable store.
//!
//! Parameter layout of actions and conditions: `[object, key, ...]`.
//! Expressions read `object , "key" )` from the item stream.

use evgen_types::{OpcodeLocation, Parameter};

use crate::alterables::{self, Slot};
use crate::context::CompilationContext;
use crate::error::CodegenResult;
use crate::expr::ItemCursor;
use crate::params;
use crate::table::OpcodeTable;

pub const NAME: &str = "ValueAdd";

pub const DEFINES: &[&str] = &["EVGEN_USE_VALUEADD"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetValue,
    SpreadValue,
    SetString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    CompareValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expression {
    GetValue,
    GetString,
}

pub static ACTIONS: OpcodeTable<Action> = OpcodeTable::new(&[
    (0, Action::SetValue),
    (1, Action::SpreadValue),
    (2, Action::SetString),
]);

pub static CONDITIONS: OpcodeTable<Condition> =
    OpcodeTable::new(&[(0, Condition::CompareValue)]);

pub static EXPRESSIONS: OpcodeTable<Expression> = OpcodeTable::new(&[
    (0, Expression::GetValue),
    (1, Expression::GetString),
]);

pub fn emit_action(
    action: Action,
    params: &[Parameter],
    ctx: &mut CompilationContext,
    location: OpcodeLocation,
) -> CodegenResult<String> {
    let obj = params::object(params, 0, location)?;
    // Intern before rendering values so handle order follows the event data.
    let key = ctx.intern_key(params::static_key(params, 1, location)?);

    match action {
        Action::SetValue | Action::SetString => {
            let slot = if action == Action::SetValue {
                Slot::Value
            } else {
                Slot::String
            };
            let value = params::expression(params, 2, ctx, location)?;
            Ok(alterables::store(&ctx.container(obj), slot, key, &value))
        }
        Action::SpreadValue => {
            let start = params::expression(params, 2, ctx, location)?;
            let step = params::expression(params, 3, ctx, location)?;
            Ok(format!(
                "spread_value({}, {key}, {start}, {step});",
                ctx.instance_list(obj)
            ))
        }
    }
}

pub fn emit_condition(
    condition: Condition,
    params: &[Parameter],
    ctx: &mut CompilationContext,
    location: OpcodeLocation,
) -> CodegenResult<String> {
    match condition {
        Condition::CompareValue => {
            let obj = params::object(params, 0, location)?;
            let key = ctx.intern_key(params::static_key(params, 1, location)?);
            let (op, value) = params::comparison(params, 2, ctx, location)?;
            Ok(alterables::compare(&ctx.container(obj), key, op, &value))
        }
    }
}

/// Consume `object , "key" )` after the call marker.
pub fn emit_expression(
    expression: Expression,
    cursor: &mut ItemCursor<'_>,
    ctx: &mut CompilationContext,
    location: OpcodeLocation,
) -> CodegenResult<String> {
    let obj = cursor.expect_object(location)?;
    cursor.expect_comma(location)?;
    let key = cursor.expect_str(location)?;
    cursor.expect_end(location)?;
    let key = ctx.intern_key(key);

    let slot = match expression {
        Expression::GetValue => Slot::Value,
        Expression::GetString => Slot::String,
    };
    Ok(alterables::load(&ctx.container(obj), slot, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use evgen_types::{CompareOp, ExpressionItem, ObjectRef, SiteKind};

    fn loc() -> OpcodeLocation {
        OpcodeLocation::new(0, SiteKind::Action, 0)
    }

    fn obj() -> Parameter {
        Parameter::Object(ObjectRef::new(7, 32))
    }

    #[test]
    fn tables_cover_all_opcodes() {
        assert_eq!(ACTIONS.get(1), Some(&Action::SpreadValue));
        assert_eq!(CONDITIONS.get(0), Some(&Condition::CompareValue));
        assert_eq!(EXPRESSIONS.get(1), Some(&Expression::GetString));
        assert_eq!(ACTIONS.get(3), None);
    }

    #[test]
    fn set_value() {
        let mut ctx = CompilationContext::default();
        let params = [obj(), Parameter::string("Score"), Parameter::code("10")];
        let code = emit_action(Action::SetValue, &params, &mut ctx, loc()).unwrap();
        assert_eq!(code, "obj_7->get_extra_alterables().set_value(0, 10);");
    }

    #[test]
    fn set_string_shares_handle_case_insensitively() {
        let mut ctx = CompilationContext::default();
        ctx.intern_key("other");
        let params = [obj(), Parameter::string("NAME"), Parameter::string("Bob")];
        let code = emit_action(Action::SetString, &params, &mut ctx, loc()).unwrap();
        assert_eq!(code, "obj_7->get_extra_alterables().set_string(1, \"Bob\");");
        assert_eq!(ctx.keys().lookup("name").map(|h| h.index()), Some(1));
    }

    #[test]
    fn spread_value_uses_instance_list() {
        let mut ctx = CompilationContext::default();
        let params = [
            obj(),
            Parameter::string("slot"),
            Parameter::code("0"),
            Parameter::code("2"),
        ];
        let code = emit_action(Action::SpreadValue, &params, &mut ctx, loc()).unwrap();
        assert_eq!(code, "spread_value(obj_7_list, 0, 0, 2);");
    }

    #[test]
    fn key_is_interned_before_value_expression() {
        let mut ctx = CompilationContext::default();
        let value = Parameter::Expression(vec![
            ExpressionItem::Extension {
                name: NAME.into(),
                opcode: 0,
            },
            ExpressionItem::Object(ObjectRef::new(2, 32)),
            ExpressionItem::Comma,
            ExpressionItem::Str("Bonus".into()),
            ExpressionItem::EndParenthesis,
            ExpressionItem::Code(" * 2".into()),
        ]);
        let params = [obj(), Parameter::string("Score"), value];
        let code = emit_action(Action::SetValue, &params, &mut ctx, loc()).unwrap();
        assert_eq!(
            code,
            "obj_7->get_extra_alterables().set_value(0, \
             obj_2->get_extra_alterables().get_value(1) * 2);"
        );
    }

    #[test]
    fn compare_value() {
        let mut ctx = CompilationContext::default();
        let params = [
            obj(),
            Parameter::string("lives"),
            Parameter::Comparison {
                op: CompareOp::Less,
                value: vec![ExpressionItem::Code("1".into())],
            },
        ];
        let code = emit_condition(Condition::CompareValue, &params, &mut ctx, loc()).unwrap();
        assert_eq!(code, "obj_7->get_extra_alterables().get_value(0) < 1");
    }

    #[test]
    fn get_string_expression() {
        let mut ctx = CompilationContext::default();
        let items = [
            ExpressionItem::Object(ObjectRef::new(3, 32)),
            ExpressionItem::Comma,
            ExpressionItem::Str("Title".into()),
            ExpressionItem::EndParenthesis,
        ];
        let mut cursor = ItemCursor::new(&items);
        let code = emit_expression(Expression::GetString, &mut cursor, &mut ctx, loc()).unwrap();
        assert_eq!(code, "obj_3->get_extra_alterables().get_string(0)");
        assert!(cursor.next_item().is_none());
    }

    #[test]
    fn expression_without_comma_is_malformed() {
        let mut ctx = CompilationContext::default();
        let items = [
            ExpressionItem::Object(ObjectRef::new(3, 32)),
            ExpressionItem::Str("Title".into()),
        ];
        let mut cursor = ItemCursor::new(&items);
        let err = emit_expression(Expression::GetValue, &mut cursor, &mut ctx, loc()).unwrap_err();
        assert_eq!(err.code(), evgen_types::ErrorCode::MALFORMED_EXPRESSION);
        assert!(ctx.keys().is_empty());
    }

    #[test]
    fn expression_without_end_parenthesis_interns_nothing() {
        let mut ctx = CompilationContext::default();
        let items = [
            ExpressionItem::Object(ObjectRef::new(3, 32)),
            ExpressionItem::Comma,
            ExpressionItem::Str("Orphan".into()),
            ExpressionItem::Code("+1".into()),
        ];
        let mut cursor = ItemCursor::new(&items);
        let err = emit_expression(Expression::GetValue, &mut cursor, &mut ctx, loc()).unwrap_err();
        assert_eq!(err.code(), evgen_types::ErrorCode::MALFORMED_EXPRESSION);
        assert!(ctx.keys().is_empty());
        assert_eq!(ctx.keys().lookup("orphan"), None);
    }
}
