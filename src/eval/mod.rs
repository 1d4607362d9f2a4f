// src/eval/mod.rs
//! Narrow seam between the request handlers and whatever library actually
//! does the arithmetic.

mod engine;

pub use engine::EvalexprEvaluator;

use crate::core::prelude::*;

/// A successfully parsed expression, ready to be evaluated.
pub trait ParsedExpression {
    /// Evaluates and stringifies the value.
    fn evaluate(&self) -> Result<String>;
}

pub trait Evaluator: Send + Sync {
    /// Parses `expression`. An `Err` here means the expression has errors.
    fn parse(&self, expression: &str) -> Result<Box<dyn ParsedExpression>>;

    fn has_errors(&self, expression: &str) -> bool {
        self.parse(expression).is_err()
    }
}
