//! # Validate Subcommand
//!
//! Batch validation of CNPJ/CPF values from positional arguments and/or a
//! line-oriented input file. Used for registration imports, where a partner
//! NGO hands over a spreadsheet column of identifiers of unknown quality.
//!
//! A malformed value never aborts the run; it is reported and reflected in
//! the exit code (0 when every value passed, 1 otherwise).

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use colabora_core::{TaxId, TaxIdKind};

use crate::{classify, Kind};

/// Arguments for the `colabora validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Values to validate, in any formatting.
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,

    /// Identifier scheme to enforce.
    #[arg(long, value_enum, default_value = "auto")]
    pub kind: Kind,

    /// Read additional values from a file, one per line. Blank lines are
    /// skipped.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Emit one JSON object per value instead of text lines.
    #[arg(long)]
    pub json: bool,
}

/// Per-value validation report, one JSON object per input line.
#[derive(Debug, Serialize)]
pub struct ValueReport {
    /// The value exactly as supplied.
    pub input: String,
    /// Detected scheme; absent for invalid values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<TaxIdKind>,
    /// Validation verdict.
    pub valid: bool,
    /// Digit-only canonical form; absent for invalid values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    /// Punctuated rendering; absent for invalid values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

impl ValueReport {
    fn accepted(input: &str, id: &TaxId) -> Self {
        Self {
            input: input.to_string(),
            kind: Some(id.kind()),
            valid: true,
            canonical: Some(id.as_str().to_string()),
            formatted: Some(id.formatted()),
        }
    }

    fn rejected(input: &str) -> Self {
        Self {
            input: input.to_string(),
            kind: None,
            valid: false,
            canonical: None,
            formatted: None,
        }
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let values = collect_values(args)?;
    if values.is_empty() {
        bail!("no values to validate; pass VALUE arguments or --file");
    }

    let mut all_valid = true;
    for value in &values {
        match classify(value, args.kind) {
            Ok(id) => {
                tracing::debug!(input = %value, kind = %id.kind(), "accepted");
                if args.json {
                    println!("{}", serde_json::to_string(&ValueReport::accepted(value, &id))?);
                } else {
                    println!("OK: {} ({})", id.formatted(), id.kind());
                }
            }
            Err(err) => {
                all_valid = false;
                tracing::debug!(input = %value, "rejected");
                if args.json {
                    println!("{}", serde_json::to_string(&ValueReport::rejected(value))?);
                } else {
                    println!("INVALID: {err}");
                }
            }
        }
    }

    Ok(if all_valid { 0 } else { 1 })
}

/// Merge positional values with the lines of `--file`, if given.
fn collect_values(args: &ValidateArgs) -> Result<Vec<String>> {
    let mut values = args.values.clone();
    if let Some(path) = &args.file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read values file: {}", path.display()))?;
        values.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    }
    Ok(values)
}
