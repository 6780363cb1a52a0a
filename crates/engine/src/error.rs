//! The module contains the errors the engine can throw.
//!
//! The codec itself is total (any string resolves to an amount, any amount
//! formats to a string), so errors only come out of the strict validation
//! paths: [`Amount::try_new`] and [`SavingsAccount::validate`].
//!
//! [`Amount::try_new`]: crate::Amount::try_new
//! [`SavingsAccount::validate`]: crate::SavingsAccount::validate
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid rate: {0}")]
    InvalidRate(String),
    #[error("Invalid term: {0}")]
    InvalidTerm(String),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidRate(a), Self::InvalidRate(b)) => a == b,
            (Self::InvalidTerm(a), Self::InvalidTerm(b)) => a == b,
            _ => false,
        }
    }
}
