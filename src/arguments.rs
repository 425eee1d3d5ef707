/// Centralized argument handling for lockbot
///
/// Consolidates command-line argument parsing and debug flag checking so
/// binaries and modules read flags from one place.
///
/// Features:
/// - Centralized CMD_ARGS storage with thread-safe access
/// - Debug flag checking functions for all modules
/// - Unified argument parsing utilities
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
/// Thread-safe singleton that stores arguments for access throughout the application
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by binaries and tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
/// Returns a vector clone to avoid holding the mutex lock
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => {
            // Fallback to env::args if mutex is poisoned
            env::args().collect()
        }
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

// =============================================================================
// DEBUG FLAG CHECKING FUNCTIONS
// These functions check for specific debug flags in the command-line arguments
// =============================================================================

/// Pool reader debug mode
pub fn is_debug_pool_enabled() -> bool {
    has_arg("--debug-pool")
}

/// RPC call debug mode
pub fn is_debug_rpc_enabled() -> bool {
    has_arg("--debug-rpc")
}

/// Lock program client debug mode
pub fn is_debug_lockup_enabled() -> bool {
    has_arg("--debug-lockup")
}

/// Scheduler debug mode
pub fn is_debug_scheduler_enabled() -> bool {
    has_arg("--debug-scheduler")
}

/// Token helper debug mode
pub fn is_debug_token_enabled() -> bool {
    has_arg("--debug-token")
}

/// Checks whether any debug flag is enabled
pub fn is_any_debug_enabled() -> bool {
    get_cmd_args().iter().any(|a| a.starts_with("--debug-"))
}

/// Returns the list of enabled debug module names (without the --debug- prefix)
pub fn get_enabled_debug_modes() -> Vec<String> {
    get_cmd_args()
        .iter()
        .filter_map(|a| a.strip_prefix("--debug-").map(|m| m.to_string()))
        .collect()
}

// =============================================================================
// RUN MODE FLAGS
// =============================================================================

/// Skip scheduling the delayed burn at the end of the run
pub fn is_skip_burn_enabled() -> bool {
    has_arg("--skip-burn")
}

/// Verbose mode
pub fn is_verbose_mode() -> bool {
    has_arg("--verbose") || has_arg("-v")
}

/// Burn delay override in seconds (defaults elsewhere when absent or invalid)
pub fn get_burn_delay_secs() -> Option<u64> {
    get_arg_value("--burn-delay-secs").and_then(|v| v.parse::<u64>().ok())
}

/// Common argument patterns shared by binaries
pub mod patterns {
    use super::has_arg;

    /// Checks for a help request
    pub fn is_help_requested() -> bool {
        has_arg("--help") || has_arg("-h")
    }
}

/// Print usage information for the main binary
pub fn print_help() {
    println!("lockbot - token-lock program driver");
    println!();
    println!("USAGE:");
    println!("    lockbot [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --skip-burn               Do not schedule the delayed burn");
    println!("    --burn-delay-secs <SECS>  Override the burn delay (default 120)");
    println!("    --debug-pool              Verbose pool reader logging");
    println!("    --debug-rpc               Verbose RPC logging");
    println!("    --debug-lockup            Verbose lock program client logging");
    println!("    --debug-scheduler         Verbose scheduler logging");
    println!("    --debug-token             Verbose SPL token helper logging");
    println!("    -v, --verbose             Enable verbose logging everywhere");
    println!("    -h, --help                Print this help");
    println!();
    println!("Configuration is read from configs.json in the working directory.");
}

/// Serializes tests that mutate the global CMD_ARGS
#[cfg(test)]
pub mod test_support {
    use std::sync::{Mutex, MutexGuard};

    static ARGS_LOCK: Mutex<()> = Mutex::new(());

    pub fn lock_args() -> MutexGuard<'static, ()> {
        ARGS_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_args() {
        let _guard = test_support::lock_args();
        let test_args = vec![
            "lockbot".to_string(),
            "--debug-pool".to_string(),
            "--burn-delay-secs".to_string(),
            "5".to_string(),
        ];

        set_cmd_args(test_args.clone());
        let retrieved_args = get_cmd_args();

        assert_eq!(retrieved_args, test_args);
    }

    #[test]
    fn test_has_arg() {
        let _guard = test_support::lock_args();
        set_cmd_args(vec!["lockbot".to_string(), "--debug-pool".to_string()]);

        assert!(has_arg("--debug-pool"));
        assert!(!has_arg("--debug-rpc"));
    }

    #[test]
    fn test_get_arg_value() {
        let _guard = test_support::lock_args();
        set_cmd_args(vec![
            "lockbot".to_string(),
            "--burn-delay-secs".to_string(),
            "30".to_string(),
        ]);

        assert_eq!(get_arg_value("--burn-delay-secs"), Some("30".to_string()));
        assert_eq!(get_arg_value("--pool"), None);
        assert_eq!(get_burn_delay_secs(), Some(30));
    }

    #[test]
    fn test_debug_flags() {
        let _guard = test_support::lock_args();
        set_cmd_args(vec![
            "lockbot".to_string(),
            "--debug-pool".to_string(),
            "--debug-scheduler".to_string(),
            "--skip-burn".to_string(),
        ]);

        assert!(is_debug_pool_enabled());
        assert!(is_debug_scheduler_enabled());
        assert!(!is_debug_rpc_enabled());
        assert!(is_skip_burn_enabled());
        assert!(is_any_debug_enabled());

        let enabled_modes = get_enabled_debug_modes();
        assert!(enabled_modes.contains(&"pool".to_string()));
        assert!(enabled_modes.contains(&"scheduler".to_string()));
        assert!(!enabled_modes.contains(&"rpc".to_string()));
    }
}
