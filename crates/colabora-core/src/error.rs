//! # Error Types — Structured Validation Errors
//!
//! Defines the error type used by the constructing side of the crate. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! The pure functions in [`crate::taxid`] deliberately return `bool` and
//! never construct an error; this type belongs to the newtype constructors
//! in [`crate::identity`] and to consumers that need a diagnostic-bearing
//! admission layer above the boolean core.

use thiserror::Error;

/// Validation failure for a tax identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is not a structurally valid CNPJ.
    #[error("invalid CNPJ: {0}")]
    InvalidCnpj(String),

    /// The value is not a structurally valid CPF.
    #[error("invalid CPF: {0}")]
    InvalidCpf(String),

    /// The digit count matches neither the CPF (11) nor the CNPJ (14) scheme.
    #[error("unrecognized tax identifier: {0}")]
    UnrecognizedTaxId(String),
}
