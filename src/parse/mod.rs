mod error;
mod grammar;
mod splitter;

pub use error::ParseError;

use crate::FilterNode;

/// Parse a filter expression into a [`FilterNode`] tree.
///
/// The input is lower-cased before splitting, so keywords and field names are
/// case-insensitive.
///
/// # Errors
///
/// Returns [`ParseError`] if a clause is not a well-formed comparison.
pub fn parse(input: &str) -> Result<FilterNode, ParseError> {
    parse_bounded(input, None)
}

/// Parse with an optional cap on the number of `and`/`or` operators.
pub(crate) fn parse_bounded(
    input: &str,
    max_operators: Option<usize>,
) -> Result<FilterNode, ParseError> {
    let expression = input.to_lowercase();
    let count = splitter::operator_count(&expression);
    if let Some(limit) = max_operators {
        if count > limit {
            tracing::warn!(count, limit, "expression exceeds operator limit");
            return Err(ParseError::TooManyOperators { count, limit });
        }
    }
    splitter::split_expression(&expression)
}
