mod config;
mod direction;
mod error;
mod field_table;
mod node;
mod ruleset;
mod translator;

pub use config::TranslatorConfig;
pub use direction::Direction;
pub use error::EvalError;
pub use field_table::{FieldSpec, Validator};
pub use node::{FieldComparison, FilterNode, field};
pub use ruleset::RuleSet;
pub use translator::{Translator, TranslatorBuilder};
