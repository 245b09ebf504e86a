use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use todotxt_core::{
    Priority,
    config::{get_config_dir, get_data_dir},
};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Use a custom config file
    #[arg(short, long, value_name = "PATH")]
    pub config_path: Option<PathBuf>,
    /// Log level written to the log file, overrides RUST_LOG
    #[arg(short, long, value_name = "LEVEL")]
    pub log_level: Option<tracing::Level>,
    #[command(subcommand)]
    pub command: Commands,
}

/// Edit and inspect todo.txt lines. Edited lines are written to STDOUT.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the tokens of a line
    Parse {
        #[arg(allow_hyphen_values = true)]
        line: String,
    },
    /// Print a new task, stamped with today's date if `add_creation_date` is set
    Add {
        #[arg(allow_hyphen_values = true)]
        line: String,
        /// Don't add a creation date
        #[arg(long)]
        no_date: bool,
    },
    /// Mark a task done
    #[command(alias = "done")]
    Complete {
        #[arg(allow_hyphen_values = true)]
        line: String,
        /// Completion date, defaults to today
        #[arg(short, long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },
    /// Mark a task not done
    #[command(alias = "undo")]
    Uncomplete {
        #[arg(allow_hyphen_values = true)]
        line: String,
    },
    /// Set or remove (`none`) the priority of a task
    #[command(alias = "pri")]
    Priority {
        #[arg(allow_hyphen_values = true)]
        line: String,
        #[arg(value_parser = parse_priority)]
        priority: Priority,
    },
    /// Set the threshold date of a task, removes it if no date is given
    Threshold {
        #[arg(allow_hyphen_values = true)]
        line: String,
        #[arg(value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },
    /// Add a tag (`@tag`) or a list (`+list`) to a task
    Tag {
        #[arg(allow_hyphen_values = true)]
        line: String,
        tag: String,
    },
    /// Remove a tag or a list from a task, the exact word must match
    Untag {
        #[arg(allow_hyphen_values = true)]
        line: String,
        tag: String,
    },
    /// Describe the attributes of a task
    Show {
        #[arg(allow_hyphen_values = true)]
        line: String,
    },
    /// Print the visible tasks of a todo.txt file (STDIN if no file is given)
    #[command(alias = "ls")]
    List { file: Option<PathBuf> },
    /// Generates a new configuration file from the default one
    GenerateConfig { path: Option<PathBuf> },
}

/// Parses a priority letter, case insensitive, or `none`.
pub fn parse_priority(input: &str) -> Result<Priority, String> {
    if input.eq_ignore_ascii_case("none") || input == "-" {
        return Ok(Priority::None);
    }
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            Ok(Priority::from_char(c.to_ascii_uppercase()))
        }
        _ => Err(format!("expected a letter from A to Z or `none`, got {input:?}")),
    }
}

const VERSION_MESSAGE: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> String {
    let author = clap::crate_authors!();

    let config_dir_path = get_config_dir().display().to_string();
    let data_dir_path = get_data_dir().display().to_string();

    format!(
        "\
{VERSION_MESSAGE}

Authors: {author}

Config directory: {config_dir_path}
Data directory: {data_dir_path}"
    )
}
