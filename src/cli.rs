//! Command-line argument parsing
//!
//! Supports:
//! - One-shot find, replace, transform, stats and export over a file or stdin
//! - Toggling the persisted theme preference
//! - An interactive line-oriented session (the default)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::export::ExportFormat;
use crate::search::SearchOptions;
use crate::transform::TransformKind;

/// A text manipulation workspace
#[derive(Parser, Debug)]
#[command(name = "textsmith", version, about = "A text manipulation workspace")]
pub struct CliArgs {
    /// Read the initial text from FILE instead of stdin
    #[arg(short, long, global = true, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Search toggles shared by `find` and `replace`
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchArgs {
    /// Treat the term as a regular expression
    #[arg(short = 'e', long)]
    pub regex: bool,

    /// Match letter case exactly
    #[arg(short = 'c', long)]
    pub case_sensitive: bool,

    /// Only match whole words
    #[arg(short = 'w', long)]
    pub whole_word: bool,
}

impl From<SearchArgs> for SearchOptions {
    fn from(args: SearchArgs) -> Self {
        SearchOptions {
            use_regex: args.regex,
            case_sensitive: args.case_sensitive,
            whole_word: args.whole_word,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List matches of TERM
    Find {
        term: String,
        #[command(flatten)]
        search: SearchArgs,
        /// Print the highlight markup instead of the match list
        #[arg(long)]
        highlight: bool,
    },
    /// Replace matches of TERM and print the result
    Replace {
        term: String,
        replacement: String,
        #[command(flatten)]
        search: SearchArgs,
        /// Replace only the first match
        #[arg(long)]
        first: bool,
    },
    /// Apply a transform and print the result
    Transform {
        #[arg(value_enum)]
        kind: TransformKind,
    },
    /// Print text statistics
    Stats {
        /// Also count occurrences of WORD
        #[arg(long, value_name = "WORD")]
        word: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the text to manipulated_text.<ext>
    Export {
        #[arg(value_enum, default_value = "txt")]
        format: ExportFormat,
        /// Directory to write into
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },
    /// Toggle the dark theme preference
    Theme,
    /// Interactive session (the default)
    Repl,
}

impl CliArgs {
    /// The subcommand to run, defaulting to the interactive session
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Repl)
    }
}
