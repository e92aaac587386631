//! Error types for the random generators.

use thiserror::Error;

/// Errors raised while preparing generator inputs.
///
/// Sampling itself never fails; only building a [`crate::Pool`] from an
/// identifier that resolves to an empty alphabet does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// The pool identifier resolved to an empty alphabet.
    #[error("Invalid pool '{0}': alphabet is empty")]
    InvalidPool(String),
}
