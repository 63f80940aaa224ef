/// cli.rs — massdecomp command-line interface
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// massdecomp — integer mass decomposition over a weight alphabet
#[derive(Parser, Debug)]
#[command(
    name = "massdecomp",
    author,
    version,
    about = "Decompose an integer mass into combinations of alphabet weights",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Shared arguments for every subcommand.
#[derive(clap::Args, Debug)]
pub struct MassArgs {
    /// Path to an alphabet file ('name mass' per line).
    #[arg(short, long, value_name = "PATH")]
    pub alphabet: PathBuf,

    /// Target integer mass to decompose.
    #[arg(short, long, value_name = "M")]
    pub mass: u64,

    /// Decimal digits to retain when scaling fractional masses in the
    /// alphabet file to integer weights (default: masses are already
    /// integers).
    #[arg(short, long, value_name = "P", default_value_t = 0)]
    pub precision: u32,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report whether any decomposition of the mass exists
    Exist(MassArgs),

    /// Print one decomposition of the mass, named by element
    Decompose(MassArgs),

    /// Print every decomposition of the mass, named by element
    Enumerate(MassArgs),

    /// Print the number of decompositions of the mass
    Count(MassArgs),
}
