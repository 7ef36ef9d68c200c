//! @toon
//! purpose: This module implements the toggle command behind both the comment
//!     and uncomment actions. It resolves the file's comment profile, compiles
//!     the match criteria, and runs the read-transform-write cycle.
//!
//! when-editing:
//!     - !All transformation happens in memory; the file is only written after
//!       the whole document has been rewritten
//!     - !--multiline only engages the block engine when the profile has an end marker
//!     - Profile resolution uses the file name only, never the full path
//!
//! invariants:
//!     - Any failure leaves the original file untouched
//!     - --dry-run never writes
//!
//! do-not:
//!     - Never write partial output to the target file
//!
//! flows:
//!     - Load: Read linemark.toml from the working directory
//!     - Resolve: Map the file name to a comment profile
//!     - Compile: Build the regex and literal matchers
//!     - Toggle: Rewrite lines or block spans in memory
//!     - Write: Persist the result, or print it with --dry-run

use crate::cli::Cli;
use crate::config::Config;
use crate::document::Document;
use crate::engine::{toggle_block, toggle_line};
use crate::pattern::MatchSpec;
use anyhow::{bail, Context, Result};
use std::env;
use std::fs;

pub fn run_toggle(cli: &Cli) -> Result<()> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let config = Config::load(&cwd);
    let resolver = config.resolver();

    // Resolution is by file name, so relative and absolute paths behave alike.
    let file_name = cli
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let Some(profile) = resolver.resolve(file_name) else {
        bail!("no comment syntax known for {}", cli.file.display());
    };

    let spec = MatchSpec::compile(Some(cli.pattern.as_str()), &cli.strings)?;

    let raw = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let mut doc = Document::parse(&raw);

    if cli.multiline && profile.block_markers().is_some() {
        toggle_block(&mut doc, &profile, cli.action, cli.strict)?;
    } else {
        doc.map_lines(|line| toggle_line(line, &profile, &spec, cli.action));
    }

    let output = doc.render();
    if cli.dry_run {
        print!("{}", output);
        return Ok(());
    }

    fs::write(&cli.file, &output)
        .with_context(|| format!("Failed to write {}", cli.file.display()))?;

    if !cli.silent {
        println!("Successfully processed file {}", cli.file.display());
    }

    Ok(())
}
