//! @dose
//! purpose: This is the CLI entry point for linemark. It parses command-line
//!     arguments using clap, remaps clap's exit codes to the tool's contract,
//!     and dispatches to the toggle command handler.
//!
//! when-editing:
//!     - !Help and version output exit 0; every parse error exits 1
//!     - Error messages are printed to stderr and exit with code 1
//!
//! invariants:
//!     - The process exits with 0 on success, 1 on any error
//!     - No file is touched when argument parsing fails
//!
//! do-not:
//!     - Never add business logic here - delegate to command modules
//!     - Never panic - always use proper error handling
//!
//! gotchas:
//!     - clap's default exit code for argument errors is 2; try_parse plus the
//!       use_stderr check remaps it to 1

use clap::Parser;
use linemark::cli::Cli;
use linemark::commands::run_toggle;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run_toggle(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
