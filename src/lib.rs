//! Translate boolean traffic filter expressions into packet-filter match arguments.
//!
//! An expression such as `srv.ip == 10.0.0.0/8 AND srv.tcp.port == 443` yields two
//! mirrored lists of iptables match fragments: one for uplink traffic (client to
//! server) and one for downlink traffic (server to client).
//!
//! ```
//! let rules = flowmatch::translate("srv.ip == 1.2.3.4 AND srv.tcp.port == 8080").unwrap();
//! assert_eq!(rules.uplink(), ["-d 1.2.3.4 -p tcp --dport 8080"]);
//! assert_eq!(rules.downlink(), ["-s 1.2.3.4 -p tcp --sport 8080"]);
//! ```

mod error;
mod evaluate;
pub mod parse;
mod types;
mod validate;

pub use error::FlowMatchError;
pub use parse::ParseError;
pub use types::{
    Direction, EvalError, FieldComparison, FieldSpec, FilterNode, RuleSet, Translator,
    TranslatorBuilder, TranslatorConfig, Validator, field,
};

/// Parse and evaluate `expression` with the default [`Translator`].
///
/// # Errors
///
/// Returns [`FlowMatchError`] if the expression is malformed, names an unknown
/// field, or carries a value the field rejects.
pub fn translate(expression: &str) -> Result<RuleSet, FlowMatchError> {
    Translator::default().translate(expression)
}
