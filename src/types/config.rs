/// Limits applied by a [`Translator`](crate::Translator).
///
/// Both limits default to `None` (unlimited).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TranslatorConfig {
    /// Maximum number of `and`/`or` operators accepted in one expression.
    pub max_operators: Option<usize>,
    /// Maximum number of rules any step may produce for one direction.
    pub max_rules: Option<usize>,
}
