use thiserror::Error;

use crate::parse::ParseError;
use crate::EvalError;

/// Unified error type covering parsing and evaluation.
///
/// Returned by [`translate()`](crate::translate) and
/// [`Translator::translate()`](crate::Translator::translate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowMatchError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
