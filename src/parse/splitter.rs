use crate::FilterNode;

use super::grammar::comparison;
use super::ParseError;

const AND: &str = " and ";
const OR: &str = " or ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    And,
    Or,
}

impl Operator {
    fn token(self) -> &'static str {
        match self {
            Operator::And => AND,
            Operator::Or => OR,
        }
    }
}

/// Number of non-overlapping `and`/`or` tokens in a lower-cased expression.
pub(crate) fn operator_count(expression: &str) -> usize {
    expression.matches(AND).count() + expression.matches(OR).count()
}

/// Find the nearest operator at or after `cursor`. When both tokens occur,
/// the one that starts first wins.
fn next_operator(expression: &str, cursor: usize) -> Option<(usize, Operator)> {
    let rest = &expression[cursor..];
    let found = match (rest.find(AND), rest.find(OR)) {
        (Some(and), Some(or)) if or < and => (or, Operator::Or),
        (Some(and), _) => (and, Operator::And),
        (None, Some(or)) => (or, Operator::Or),
        (None, None) => return None,
    };
    Some((cursor + found.0, found.1))
}

/// Build a tree from a lower-cased expression.
///
/// With `n` operators present, the `ceil(n / 2)`-th operator from the left becomes
/// the root. This keeps long chains roughly balanced; it is not precedence
/// parsing, and `a or b and c or d` groups as `(a or b) and (c or d)`.
pub(crate) fn split_expression(expression: &str) -> Result<FilterNode, ParseError> {
    let total = operator_count(expression);
    if total == 0 {
        return comparison(expression);
    }

    let center = total.div_ceil(2);
    let mut cursor = 0;
    let mut split = None;
    for step in 1..=center {
        let Some((at, op)) = next_operator(expression, cursor) else {
            return Err(ParseError::OperatorNotFound {
                expression: expression.to_owned(),
                step,
            });
        };
        cursor = at + op.token().len();
        split = Some((at, op));
    }
    let Some((at, op)) = split else {
        return Err(ParseError::OperatorNotFound {
            expression: expression.to_owned(),
            step: 0,
        });
    };

    tracing::trace!(total, center, at, operator = ?op, "splitting expression");
    let left = split_expression(&expression[..at])?;
    let right = split_expression(&expression[at + op.token().len()..])?;
    Ok(match op {
        Operator::And => left.and(right),
        Operator::Or => left.or(right),
    })
}
