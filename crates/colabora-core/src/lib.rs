//! # colabora-core — Foundational Types for the Colabora Platform
//!
//! This crate is the bedrock of the Colabora stack. It defines the tax
//! identifier primitives that every registration path depends on: check-digit
//! validation for Brazilian CNPJ (legal entity) and CPF (natural person)
//! numbers, and newtype wrappers that make an invalid identifier
//! unrepresentable past the construction boundary. Every other crate in the
//! workspace depends on `colabora-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`Cnpj`] and [`Cpf`] are
//!    distinct types with validated constructors. No bare strings for
//!    identifiers — an NGO's CNPJ cannot be passed where a volunteer's CPF
//!    is expected.
//!
//! 2. **A pure boolean core.** The [`taxid`] module exposes the check-digit
//!    algorithms as total functions over all strings. They never panic,
//!    never allocate an error, never log. Admission filtering is pass/fail.
//!
//! 3. **Canonical digit-only storage.** Constructors accept punctuated and
//!    bare input alike, and store the stripped digit string. Equality and
//!    hashing are format-insensitive.
//!
//! 4. **Validation at the serde boundary.** String-validated types implement
//!    `Deserialize` by routing through their constructor, so an invalid
//!    identifier is rejected at deserialization time, not discovered later.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `colabora-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`.

pub mod error;
pub mod identity;
pub mod taxid;

// Re-export primary types for ergonomic imports.
pub use error::ValidationError;
pub use identity::{Cnpj, Cpf, TaxId, TaxIdKind};
pub use taxid::{validate_cnpj, validate_cpf};
