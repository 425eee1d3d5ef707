use lockbot::{
    arguments::{patterns, print_help},
    entry,
    logger::{self, LogTag},
};

/// Main entry point for lockbot
///
/// Runs the token-lock flow once: initialize, mint, fund, report the pool
/// market cap, lock, and schedule the burn. Configuration comes from
/// configs.json in the working directory.
#[tokio::main]
async fn main() {
    // Check for help request first (before any other processing)
    if patterns::is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    // Initialize logger system
    logger::init();
    logger::info(LogTag::System, "lockbot starting up...");

    match entry::run().await {
        Ok(()) => {
            logger::info(LogTag::System, "Done");
        }
        Err(e) => {
            logger::error(LogTag::System, &format!("Run failed: {}", e));
            std::process::exit(1);
        }
    }
}
