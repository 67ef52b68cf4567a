extern crate clap;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use wordswap::Direction;

#[derive(Debug, Parser)]
#[command(name = "wordswap", version, about = "Word-by-word substitution translator")]
pub struct Cli {
    /// Dictionary file.
    #[arg(
        long,
        short = 's',
        env = "WORDSWAP_STORE",
        default_value = "wordswap.json",
        global = true
    )]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate text (reads stdin when no text is given).
    Translate(Translate),

    /// Translate text, then translate the result back.
    Swap(Translate),

    /// Add a word pair, or update the target of an existing source.
    Add(Add),

    /// Remove the word pair at a position shown by `list`.
    Remove(Remove),

    /// Show the dictionary.
    List,

    /// Replace the dictionary with a JSON array of pairs.
    Import(Import),

    /// Print the dictionary as JSON, or write it to a file.
    Export(Export),

    /// Remove every word pair.
    Clear(Clear),
}

#[derive(Debug, Args)]
pub struct Translate {
    #[arg(long, short = 'd', default_value_t = Direction::Forward)]
    pub direction: Direction,

    pub text: Option<String>,
}

#[derive(Debug, Args)]
pub struct Add {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Args)]
pub struct Remove {
    pub index: usize,
}

#[derive(Debug, Args)]
pub struct Import {
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct Export {
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct Clear {
    #[arg(long, short = 'y')]
    pub yes: bool,
}
