// src/eval/engine.rs
use super::{Evaluator, ParsedExpression};
use crate::core::prelude::*;
use evalexpr::{build_operator_tree, Node, Value};

/// `evalexpr`-backed evaluator.
///
/// Integer operands stay integers (`7/2` is `3`), `^` always yields a float,
/// and alphanumeric runs such as `a1` are variable identifiers. No variables
/// are ever bound, so those parse fine and fail on evaluation.
#[derive(Debug, Default, Clone, Copy)]
pub struct EvalexprEvaluator;

struct EvalexprExpression {
    tree: Node,
}

impl Evaluator for EvalexprEvaluator {
    fn parse(&self, expression: &str) -> Result<Box<dyn ParsedExpression>> {
        let tree = build_operator_tree(expression)
            .map_err(|e| AppError::InvalidExpression(format!("'{}': {}", expression, e)))?;
        Ok(Box::new(EvalexprExpression { tree }))
    }
}

impl ParsedExpression for EvalexprExpression {
    fn evaluate(&self) -> Result<String> {
        let value = self
            .tree
            .eval()
            .map_err(|e| AppError::Evaluation(e.to_string()))?;
        Ok(format_value(&value))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Int(number) => number.to_string(),
        Value::Float(number) => number.to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(expression: &str) -> Result<String> {
        EvalexprEvaluator.parse(expression)?.evaluate()
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(eval("12+3").unwrap(), "15");
        assert_eq!(eval("12*3-6").unwrap(), "30");
        assert_eq!(eval("7/2").unwrap(), "3");
    }

    #[test]
    fn test_power_yields_float_formatted_without_fraction() {
        assert_eq!(eval("12^2").unwrap(), "144");
    }

    #[test]
    fn test_unbalanced_parenthesis_has_errors() {
        assert!(EvalexprEvaluator.has_errors("12+(3"));
        assert!(!EvalexprEvaluator.has_errors("12+3"));
    }

    #[test]
    fn test_identifier_parses_but_fails_evaluation() {
        let parsed = EvalexprEvaluator.parse("a1+2").unwrap();
        assert!(matches!(parsed.evaluate(), Err(AppError::Evaluation(_))));
    }

    #[test]
    fn test_division_by_zero_is_evaluation_error() {
        assert!(matches!(eval("12/0"), Err(AppError::Evaluation(_))));
    }
}
