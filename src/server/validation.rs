// src/server/validation.rs
use crate::core::prelude::*;
use crate::eval::{Evaluator, ParsedExpression};
use once_cell::sync::Lazy;
use regex::Regex;

// Loose acceptance filters, not grammars. The create filter additionally
// demands a leading word character before the digits; search does not.
static SEARCH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\s*\**/*\+*-*\^*").expect("search pattern is valid"));
static CREATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w\d+\s*\**/*\+*-*\^*").expect("create pattern is valid"));

pub fn matches_search_pattern(expression: &str) -> bool {
    SEARCH_PATTERN.is_match(expression)
}

pub fn matches_create_pattern(expression: &str) -> bool {
    CREATE_PATTERN.is_match(expression)
}

pub fn validate_search_expression<'a>(
    expression: Option<&'a str>,
    evaluator: &dyn Evaluator,
) -> Result<&'a str> {
    let expression = require_expression(expression)?;

    if !matches_search_pattern(expression) {
        return Err(AppError::InvalidExpression(format!(
            "'{}' does not look like a search term",
            expression
        )));
    }

    if evaluator.has_errors(expression) {
        return Err(AppError::InvalidExpression(format!(
            "'{}' cannot be parsed",
            expression
        )));
    }

    Ok(expression)
}

/// Returns the parsed expression so the caller evaluates what was checked.
pub fn validate_create_expression(
    expression: Option<&str>,
    evaluator: &dyn Evaluator,
) -> Result<Box<dyn ParsedExpression>> {
    let expression = require_expression(expression)?;

    if !matches_create_pattern(expression) {
        return Err(AppError::InvalidExpression(format!(
            "'{}' does not look like an expression",
            expression
        )));
    }

    evaluator.parse(expression)
}

fn require_expression(expression: Option<&str>) -> Result<&str> {
    match expression {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::InvalidExpression(
            "expression is missing".to_string(),
        )),
    }
}
