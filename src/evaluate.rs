use crate::{Direction, EvalError, FieldSpec, FilterNode, RuleSet, TranslatorConfig};

/// Evaluate a tree bottom-up. Left children are evaluated before right ones and
/// the first error is returned without touching the rest of the tree.
pub(crate) fn evaluate(node: &FilterNode, config: &TranslatorConfig) -> Result<RuleSet, EvalError> {
    match node {
        FilterNode::Comparison { key, value } => compare(key, value),
        FilterNode::Negation(inner) => Ok(evaluate(inner, config)?.negate_last()),
        FilterNode::Conjunction(a, b) => {
            let left = evaluate(a, config)?;
            let right = evaluate(b, config)?;
            check_limit(config, &left, &right, usize::saturating_mul)?;
            Ok(left.conjoin(&right))
        }
        FilterNode::Disjunction(a, b) => {
            let left = evaluate(a, config)?;
            let right = evaluate(b, config)?;
            check_limit(config, &left, &right, usize::saturating_add)?;
            Ok(left.disjoin(&right))
        }
    }
}

fn compare(key: &str, value: &str) -> Result<RuleSet, EvalError> {
    let spec = FieldSpec::lookup(key).ok_or_else(|| EvalError::UnknownField {
        field: key.to_owned(),
    })?;
    spec.render(value)
}

fn check_limit(
    config: &TranslatorConfig,
    left: &RuleSet,
    right: &RuleSet,
    combine: fn(usize, usize) -> usize,
) -> Result<(), EvalError> {
    let Some(limit) = config.max_rules else {
        return Ok(());
    };
    for direction in Direction::ALL {
        let produced = combine(left.len(direction), right.len(direction));
        if produced > limit {
            tracing::warn!(%direction, produced, limit, "rule expansion exceeds limit");
            return Err(EvalError::RuleLimitExceeded {
                direction,
                produced,
                limit,
            });
        }
    }
    Ok(())
}
