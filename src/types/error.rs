use thiserror::Error;

use super::direction::Direction;

/// Errors produced when evaluating a [`FilterNode`](crate::FilterNode) tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unrecognized field '{field}'")]
    UnknownField { field: String },

    #[error("invalid value '{value}' for field '{field}': expected {expected}")]
    Validation {
        field: String,
        value: String,
        expected: &'static str,
    },

    #[error("filter expands to {produced} {direction} rules, exceeding the limit of {limit}")]
    RuleLimitExceeded {
        direction: Direction,
        produced: usize,
        limit: usize,
    },
}
