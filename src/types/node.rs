use std::fmt;
use std::ops::Not;

/// Parsed filter expression tree.
///
/// Leaves are `key == value` comparisons; inner nodes combine them. Built by
/// [`parse`](crate::parse::parse) or directly with [`field()`] and the
/// combinator methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterNode {
    Comparison { key: String, value: String },
    Negation(Box<FilterNode>),
    Conjunction(Box<FilterNode>, Box<FilterNode>),
    Disjunction(Box<FilterNode>, Box<FilterNode>),
}

impl fmt::Display for FilterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterNode::Comparison { key, value } if value.is_empty() => write!(f, "({key} ==)"),
            FilterNode::Comparison { key, value } => write!(f, "({key} == {value})"),
            FilterNode::Negation(inner) => write!(f, "(NOT {inner})"),
            FilterNode::Conjunction(a, b) => write!(f, "({a} AND {b})"),
            FilterNode::Disjunction(a, b) => write!(f, "({a} OR {b})"),
        }
    }
}

impl FilterNode {
    #[must_use]
    pub fn and(self, other: FilterNode) -> FilterNode {
        FilterNode::Conjunction(Box::new(self), Box::new(other))
    }

    #[must_use]
    pub fn or(self, other: FilterNode) -> FilterNode {
        FilterNode::Disjunction(Box::new(self), Box::new(other))
    }

    /// Number of leaf comparisons in the tree.
    #[must_use]
    pub fn comparison_count(&self) -> usize {
        match self {
            FilterNode::Comparison { .. } => 1,
            FilterNode::Negation(inner) => inner.comparison_count(),
            FilterNode::Conjunction(a, b) | FilterNode::Disjunction(a, b) => {
                a.comparison_count() + b.comparison_count()
            }
        }
    }

    /// Number of binary `AND`/`OR` nodes in the tree.
    #[must_use]
    pub fn operator_count(&self) -> usize {
        match self {
            FilterNode::Comparison { .. } => 0,
            FilterNode::Negation(inner) => inner.operator_count(),
            FilterNode::Conjunction(a, b) | FilterNode::Disjunction(a, b) => {
                1 + a.operator_count() + b.operator_count()
            }
        }
    }
}

impl Not for FilterNode {
    type Output = FilterNode;

    fn not(self) -> FilterNode {
        FilterNode::Negation(Box::new(self))
    }
}

/// Intermediate builder for a comparison leaf.
/// Created by [`field()`]; call [`eq`](Self::eq) to produce a [`FilterNode`].
#[derive(Debug, Clone)]
pub struct FieldComparison {
    key: String,
}

impl FieldComparison {
    #[must_use]
    pub fn eq(self, value: impl Into<String>) -> FilterNode {
        FilterNode::Comparison {
            key: self.key,
            value: value.into(),
        }
    }

    /// Comparison with an empty value, for flag-only fields like `proto.tcp`.
    #[must_use]
    pub fn present(self) -> FilterNode {
        self.eq(String::new())
    }
}

#[must_use]
pub fn field(key: &str) -> FieldComparison {
    FieldComparison {
        key: key.to_owned(),
    }
}
