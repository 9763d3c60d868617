use thiserror::Error;

/// Errors produced when splitting or parsing a filter expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed comparison '{clause}': expected '<field> == <value>'")]
    MalformedComparison { clause: String },

    #[error("missing field name in comparison '{clause}'")]
    MissingField { clause: String },

    #[error("nothing left to negate in comparison '{clause}'")]
    EmptyNegation { clause: String },

    #[error("no operator found at split step {step} of '{expression}'")]
    OperatorNotFound { expression: String, step: usize },

    #[error("expression has {count} boolean operators, exceeding the limit of {limit}")]
    TooManyOperators { count: usize, limit: usize },
}
