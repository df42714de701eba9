//! planetlocal entry point
//!
//! Parses arguments and runs the gateway via `cli::run`. Any error is
//! printed to stderr and the process exits non-zero.

use planetlocal::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
