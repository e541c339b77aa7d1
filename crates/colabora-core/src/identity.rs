//! # Identity Newtypes
//!
//! Domain-primitive newtypes for the tax identifiers used throughout the
//! Colabora platform. Each identifier is a distinct type — you cannot pass
//! a [`Cnpj`] where a [`Cpf`] is expected.
//!
//! ## Validation
//!
//! Both types validate their check digits at construction time via
//! [`crate::taxid`] and store the canonical digit-only form, so equality and
//! hashing are insensitive to input formatting. [`TaxId`] covers the
//! registration paths that accept either scheme (an NGO's CNPJ or a
//! volunteer's/donor's CPF) and dispatches on the digit count.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::taxid::{validate_cnpj, validate_cpf};

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Brazilian legal-entity tax identifier (CNPJ).
///
/// The canonical storage format is 14 digits without punctuation. The
/// constructor accepts both:
/// - `"00000000000191"` (14 digits)
/// - `"00.000.000/0001-91"` (formatted)
///
/// # Validation
///
/// - Must normalize to exactly 14 digits
/// - Must not be a single repeated digit
/// - Both modulo-11 check digits must match
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Create a CNPJ from a string value, validating check digits.
    ///
    /// Stores the canonical 14-digit form (punctuation stripped).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnpj`] if the value fails
    /// [`validate_cnpj`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !validate_cnpj(&raw) {
            return Err(ValidationError::InvalidCnpj(raw));
        }
        Ok(Self(raw.chars().filter(|c| c.is_ascii_digit()).collect()))
    }

    /// Access the CNPJ in canonical 14-digit format (no punctuation).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the CNPJ in formatted form: `XX.XXX.XXX/XXXX-XX`.
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}/{}-{}",
            &self.0[..2],
            &self.0[2..5],
            &self.0[5..8],
            &self.0[8..12],
            &self.0[12..]
        )
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Brazilian natural-person tax identifier (CPF).
///
/// The canonical storage format is 11 digits without punctuation. The
/// constructor accepts both:
/// - `"52998224725"` (11 digits)
/// - `"529.982.247-25"` (formatted)
///
/// # Validation
///
/// - Must normalize to exactly 11 digits
/// - Must not be a single repeated digit
/// - Both modulo-11 check digits must match
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Create a CPF from a string value, validating check digits.
    ///
    /// Stores the canonical 11-digit form (punctuation stripped).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] if the value fails
    /// [`validate_cpf`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !validate_cpf(&raw) {
            return Err(ValidationError::InvalidCpf(raw));
        }
        Ok(Self(raw.chars().filter(|c| c.is_ascii_digit()).collect()))
    }

    /// Access the CPF in canonical 11-digit format (no punctuation).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the CPF in formatted form: `XXX.XXX.XXX-XX`.
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            &self.0[..3],
            &self.0[3..6],
            &self.0[6..9],
            &self.0[9..]
        )
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// The identifier scheme of a [`TaxId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxIdKind {
    /// Legal entity (14 digits).
    Cnpj,
    /// Natural person (11 digits).
    Cpf,
}

impl std::fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cnpj => write!(f, "CNPJ"),
            Self::Cpf => write!(f, "CPF"),
        }
    }
}

/// Either tax identifier scheme, for registration paths that accept both.
///
/// Account registration takes a CNPJ from organizations and a CPF from
/// individuals through the same form field; [`TaxId::parse`] dispatches on
/// the stripped digit count and never guesses on ambiguous lengths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TaxId {
    /// A validated CNPJ.
    Cnpj(Cnpj),
    /// A validated CPF.
    Cpf(Cpf),
}

impl TaxId {
    /// Parse a value as whichever scheme its digit count selects.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnrecognizedTaxId`] when the stripped
    /// digit count is neither 11 nor 14, otherwise the scheme's own
    /// rejection ([`ValidationError::InvalidCnpj`] /
    /// [`ValidationError::InvalidCpf`]).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.chars().filter(|c| c.is_ascii_digit()).count() {
            11 => Cpf::new(value).map(Self::Cpf),
            14 => Cnpj::new(value).map(Self::Cnpj),
            _ => Err(ValidationError::UnrecognizedTaxId(value.to_string())),
        }
    }

    /// The scheme this identifier belongs to.
    pub fn kind(&self) -> TaxIdKind {
        match self {
            Self::Cnpj(_) => TaxIdKind::Cnpj,
            Self::Cpf(_) => TaxIdKind::Cpf,
        }
    }

    /// Access the canonical digit-only form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cnpj(cnpj) => cnpj.as_str(),
            Self::Cpf(cpf) => cpf.as_str(),
        }
    }

    /// Return the scheme's formatted rendering.
    pub fn formatted(&self) -> String {
        match self {
            Self::Cnpj(cnpj) => cnpj.formatted(),
            Self::Cpf(cpf) => cpf.formatted(),
        }
    }
}

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for TaxId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
