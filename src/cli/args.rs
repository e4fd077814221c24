//! CLI argument definitions using clap
//!
//! Commands:
//! - plants init --config <path>
//! - plants list --config <path> [-c | -f | -n [LETTER]] [--json]
//! - plants serve --config <path> [--port <port>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::{Letter, LetterError, SortCriterion};

/// plants - browse the plant catalog
#[derive(Parser, Debug)]
#[command(name = "plants")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the catalog database and fill it with sample plants
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./plants.json")]
        config: PathBuf,
    },

    /// Query the catalog once and print the result
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./plants.json")]
        config: PathBuf,

        #[command(flatten)]
        order: OrderArgs,

        /// Print the result as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Serve the catalog over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./plants.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

/// Sort options for `list`; at most one may be given
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
#[group(multiple = false)]
pub struct OrderArgs {
    /// Order by common name
    #[arg(short = 'c', long = "common")]
    pub common: bool,

    /// Order by family, then botanical name
    #[arg(short = 'f', long = "family")]
    pub family: bool,

    /// Order by botanical name (default); with LETTER, only names starting with it
    #[arg(
        short = 'n',
        long = "name",
        value_name = "LETTER",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub name: Option<String>,
}

impl OrderArgs {
    /// The criterion these flags select
    pub fn criterion(&self) -> Result<SortCriterion, LetterError> {
        if self.common {
            return Ok(SortCriterion::ByCommonName);
        }
        if self.family {
            return Ok(SortCriterion::ByFamily);
        }
        match self.name.as_deref() {
            Some(letter) if !letter.trim().is_empty() => {
                Letter::parse(letter).map(SortCriterion::ByLetter)
            }
            _ => Ok(SortCriterion::ByName),
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
