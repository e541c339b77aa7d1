//! # colabora-cli — CLI Tool for the Colabora Platform
//!
//! Provides the `colabora` command-line interface for operators and
//! registration imports.
//!
//! ## Subcommands
//!
//! - `colabora validate` — Batch CNPJ/CPF validation from arguments or a file.
//! - `colabora format` — Canonical formatted rendering of a valid identifier.

pub mod format;
pub mod validate;

use clap::ValueEnum;

use colabora_core::{Cnpj, Cpf, TaxId, ValidationError};

/// Identifier scheme selection shared by the subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Dispatch on the digit count (11 → CPF, 14 → CNPJ).
    Auto,
    /// Require a CNPJ.
    Cnpj,
    /// Require a CPF.
    Cpf,
}

/// Parse `value` under the requested scheme.
pub fn classify(value: &str, kind: Kind) -> Result<TaxId, ValidationError> {
    match kind {
        Kind::Auto => TaxId::parse(value),
        Kind::Cnpj => Cnpj::new(value).map(TaxId::Cnpj),
        Kind::Cpf => Cpf::new(value).map(TaxId::Cpf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colabora_core::TaxIdKind;

    #[test]
    fn classify_auto_dispatches_on_digit_count() {
        let id = classify("529.982.247-25", Kind::Auto).unwrap();
        assert_eq!(id.kind(), TaxIdKind::Cpf);

        let id = classify("00.000.000/0001-91", Kind::Auto).unwrap();
        assert_eq!(id.kind(), TaxIdKind::Cnpj);
    }

    #[test]
    fn classify_forced_kind_rejects_the_other_scheme() {
        // A valid CPF is not a CNPJ.
        assert!(classify("52998224725", Kind::Cnpj).is_err());
        // A valid CNPJ is not a CPF.
        assert!(classify("00000000000191", Kind::Cpf).is_err());
    }

    #[test]
    fn classify_forced_kind_accepts_its_scheme() {
        assert!(classify("52998224725", Kind::Cpf).is_ok());
        assert!(classify("00000000000191", Kind::Cnpj).is_ok());
    }

    #[test]
    fn classify_rejects_garbage_under_every_kind() {
        for kind in [Kind::Auto, Kind::Cnpj, Kind::Cpf] {
            assert!(classify("not-a-number", kind).is_err());
        }
    }
}
