use super::config::TranslatorConfig;
use super::error::EvalError;
use super::node::FilterNode;
use super::ruleset::RuleSet;
use crate::parse::ParseError;
use crate::FlowMatchError;

/// Builder for constructing a [`Translator`].
///
/// # Example
///
/// ```
/// use flowmatch::TranslatorBuilder;
///
/// let translator = TranslatorBuilder::new()
///     .max_operators(16)
///     .max_rules(64)
///     .build();
/// let rules = translator.translate("cli.ip == 10.0.0.0/8 AND proto.icmp ==").unwrap();
/// assert_eq!(rules.uplink(), ["-s 10.0.0.0/8 -p icmp"]);
/// ```
#[derive(Debug, Default)]
pub struct TranslatorBuilder {
    config: TranslatorConfig,
}

impl TranslatorBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject expressions with more than `limit` `and`/`or` operators.
    #[must_use]
    pub fn max_operators(mut self, limit: usize) -> Self {
        self.config.max_operators = Some(limit);
        self
    }

    /// Reject filters whose expansion exceeds `limit` rules in either direction.
    #[must_use]
    pub fn max_rules(mut self, limit: usize) -> Self {
        self.config.max_rules = Some(limit);
        self
    }

    #[must_use]
    pub fn build(self) -> Translator {
        Translator::with_config(self.config)
    }
}

/// Parses filter expressions and evaluates them into [`RuleSet`]s.
///
/// Holds only its configuration; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: TranslatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Parse an expression into a tree without evaluating it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] on malformed input or when the operator limit is exceeded.
    pub fn parse(&self, expression: &str) -> Result<FilterNode, ParseError> {
        crate::parse::parse_bounded(expression, self.config.max_operators)
    }

    /// Evaluate an already built tree.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError`] on the first unknown field, rejected value, or
    /// rule limit violation.
    pub fn evaluate(&self, node: &FilterNode) -> Result<RuleSet, EvalError> {
        crate::evaluate::evaluate(node, &self.config)
    }

    /// Parse and evaluate `expression`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowMatchError`] wrapping whichever stage failed.
    pub fn translate(&self, expression: &str) -> Result<RuleSet, FlowMatchError> {
        let node = self.parse(expression)?;
        let rules = self.evaluate(&node)?;
        tracing::debug!(
            expression,
            uplink = rules.uplink().len(),
            downlink = rules.downlink().len(),
            "translated filter expression"
        );
        Ok(rules)
    }
}
