// src/cli.rs

use clap::{Parser, Subcommand};

/// Numeric type-compatibility kernel driver
#[derive(Parser)]
#[command(name = "castor")]
#[command(version = "0.1.0")]
#[command(about = "Numeric type-compatibility kernel", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Explain the cast between two types
    Cast {
        /// Source type name
        #[arg(value_name = "FROM")]
        from: String,
        /// Destination type name
        #[arg(value_name = "TO")]
        to: String,
    },
    /// Pick one common type for a set of operand types
    Coerce {
        /// Operand type names
        #[arg(value_name = "TYPE", required = true)]
        types: Vec<String>,
    },
    /// Resolve a call signature against overload versions
    Resolve {
        /// Comma-separated argument types of the call site
        #[arg(long, value_delimiter = ',', required = true, value_name = "TYPES")]
        sig: Vec<String>,
        /// One version's comma-separated argument types; repeat per version
        #[arg(long = "overload", required = true, value_name = "TYPES")]
        overloads: Vec<String>,
        /// Refine ties left-to-right and report a single winner
        #[arg(long)]
        best: bool,
        /// Compare ratings lexicographically instead of per-counter
        #[arg(long)]
        lexicographic: bool,
    },
    /// Run the built-in smoke walkthrough over the machine lattice
    Demo,
}
