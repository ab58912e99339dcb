//! tiermigrate main entrypoint.
//!
//! Exit codes: 0 success, 1 failure or incomplete migration, 2 cancelled.

use flexi_logger::Logger;
use tiermigrate::run;
use tiermigrate::ui::messages::error;

fn main() {
    // diagnostics go to stderr, level from RUST_LOG
    let _logger = Logger::try_with_env_or_str("warn")
        .and_then(|l| l.start())
        .map_err(|e| eprintln!("Warning: logger not initialized: {}", e))
        .ok();

    println!();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error(format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}
