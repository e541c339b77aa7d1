//! # Format Subcommand
//!
//! Prints the canonical punctuated rendering of a valid identifier
//! (`XX.XXX.XXX/XXXX-XX` for CNPJ, `XXX.XXX.XXX-XX` for CPF).

use anyhow::Result;
use clap::Args;

use crate::{classify, Kind};

/// Arguments for the `colabora format` subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Value to format, in any formatting.
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Identifier scheme to enforce.
    #[arg(long, value_enum, default_value = "auto")]
    pub kind: Kind,
}

/// Execute the format subcommand.
pub fn run_format(args: &FormatArgs) -> Result<u8> {
    match classify(&args.value, args.kind) {
        Ok(id) => {
            println!("{}", id.formatted());
            Ok(0)
        }
        Err(err) => {
            eprintln!("INVALID: {err}");
            Ok(1)
        }
    }
}
