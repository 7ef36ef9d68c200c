//! @dose
//! purpose: This module defines the command-line interface for linemark using
//!     the clap derive macros. It specifies the action, file, pattern, and
//!     strings positionals and all flags.
//!
//! when-editing:
//!     - !The pattern argument is a genuine regular expression and is never escaped
//!     - !Literal matching goes through the comma-separated strings argument
//!     - PathBuf is used for the file argument to ensure proper path handling
//!
//! invariants:
//!     - The Cli struct is the root parser that clap uses to parse command-line arguments
//!     - action, file, and pattern are required; strings and flags are optional
//!
//! do-not:
//!     - Never escape or rewrite the pattern before compiling it
//!
//! gotchas:
//!     - Version uses -v rather than clap's default -V, so the builtin version
//!       flag is disabled and redeclared by hand
//!     - The strings positional splits each value on commas, so one argument
//!       can carry several literals

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::engine::Action;

#[derive(Debug, Parser)]
#[command(name = "linemark")]
#[command(author, version, disable_version_flag = true)]
#[command(about = "Comment or uncomment lines in a file by regex or literal string match")]
#[command(after_help = "\
Examples:
  Comment every line containing a console.log call in a JavaScript file:
    linemark comment app.js 'console\\.log'

  Uncomment lines in a Python script (removes one comment level per line):
    linemark uncomment script.py ''

  Comment lines matching any of several literal strings in a YAML file:
    linemark comment config.yml '' DEBUG,error,warning

  Uncomment a whole block comment in a CSS file:
    linemark uncomment styles.css '' --multiline
")]
pub struct Cli {
    /// The action to perform
    #[arg(value_enum)]
    pub action: Action,

    /// The file to process (rewritten in place)
    pub file: PathBuf,

    /// Regex identifying lines to act on (partial match, case-sensitive;
    /// an empty string matches nothing)
    pub pattern: String,

    /// Comma-separated strings matched exactly as substrings, OR-combined
    /// with the pattern
    #[arg(value_delimiter = ',')]
    pub strings: Vec<String>,

    /// Suppress the success message
    #[arg(short, long)]
    pub silent: bool,

    /// Toggle whole block comments instead of single lines (block-style
    /// file types only; others fall back to line handling)
    #[arg(short, long)]
    pub multiline: bool,

    /// With --multiline, fail on nested same-marker blocks instead of
    /// silently truncating the span
    #[arg(long)]
    pub strict: bool,

    /// Print the result to stdout without modifying the file
    #[arg(long)]
    pub dry_run: bool,

    /// Print version information and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}
