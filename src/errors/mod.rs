/// Structured error handling for lockbot
///
/// One top-level error type with per-domain sub-enums so callers can
/// branch on failure kind instead of matching on strings. The pool reader
/// in particular must distinguish "not found", "malformed record" and
/// "price unavailable" at the type level.

// =============================================================================
// MAIN ERROR TYPE
// =============================================================================

#[derive(Debug, Clone)]
pub enum LockBotError {
    // Pool reserve reader failures
    Pool(PoolReadError),

    // Configuration loading / parsing failures
    Configuration(ConfigurationError),

    // RPC transport failures
    Rpc(RpcError),

    // Transaction construction / submission failures
    Transaction(TransactionError),

    // Scheduled task failures
    Schedule(ScheduleError),
}

impl std::fmt::Display for LockBotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LockBotError::Pool(e) => write!(f, "Pool Error: {}", e),
            LockBotError::Configuration(e) => write!(f, "Configuration Error: {}", e),
            LockBotError::Rpc(e) => write!(f, "RPC Error: {}", e),
            LockBotError::Transaction(e) => write!(f, "Transaction Error: {}", e),
            LockBotError::Schedule(e) => write!(f, "Schedule Error: {}", e),
        }
    }
}

impl std::error::Error for LockBotError {}

impl From<PoolReadError> for LockBotError {
    fn from(e: PoolReadError) -> Self {
        LockBotError::Pool(e)
    }
}

impl From<RpcError> for LockBotError {
    fn from(e: RpcError) -> Self {
        LockBotError::Rpc(e)
    }
}

impl From<ConfigurationError> for LockBotError {
    fn from(e: ConfigurationError) -> Self {
        LockBotError::Configuration(e)
    }
}

impl From<TransactionError> for LockBotError {
    fn from(e: TransactionError) -> Self {
        LockBotError::Transaction(e)
    }
}

impl From<ScheduleError> for LockBotError {
    fn from(e: ScheduleError) -> Self {
        LockBotError::Schedule(e)
    }
}

// =============================================================================
// POOL READER ERROR TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum PoolReadError {
    /// The pool address does not resolve to any account on the ledger
    AccountNotFound { address: String },
    /// Account data is shorter than the fixed 80-byte record
    RecordTooShort { len: usize },
    /// Record bytes could not be interpreted as the fixed layout
    MalformedRecord { reason: String },
    /// The requested symbol is absent from the price source
    PriceUnavailable { symbol: String },
    /// The ledger read itself failed
    Transport { message: String },
}

impl std::fmt::Display for PoolReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolReadError::AccountNotFound { address } => {
                write!(f, "Pool account {} not found", address)
            }
            PoolReadError::RecordTooShort { len } => {
                write!(f, "Pool record too short: {} bytes (minimum: 80)", len)
            }
            PoolReadError::MalformedRecord { reason } => {
                write!(f, "Malformed pool record: {}", reason)
            }
            PoolReadError::PriceUnavailable { symbol } => {
                write!(f, "No price available for symbol {}", symbol)
            }
            PoolReadError::Transport { message } => {
                write!(f, "Ledger read failed: {}", message)
            }
        }
    }
}

impl std::error::Error for PoolReadError {}

// =============================================================================
// CONFIGURATION ERROR TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub enum ConfigurationError {
    FileNotReadable { path: String, error: String },
    ParseFailed { path: String, error: String },
    InvalidPrivateKey { reason: String },
    InvalidPubkey { field: String, value: String },
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::FileNotReadable { path, error } => {
                write!(f, "Cannot read {}: {}", path, error)
            }
            ConfigurationError::ParseFailed { path, error } => {
                write!(f, "Cannot parse {}: {}", path, error)
            }
            ConfigurationError::InvalidPrivateKey { reason } => {
                write!(f, "Invalid wallet private key: {}", reason)
            }
            ConfigurationError::InvalidPubkey { field, value } => {
                write!(f, "Invalid pubkey in field {}: {}", field, value)
            }
        }
    }
}

// =============================================================================
// RPC ERROR TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub enum RpcError {
    RequestFailed { method: String, message: String },
    AirdropUnconfirmed { signature: String },
}

impl std::fmt::Display for RpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RpcError::RequestFailed { method, message } => {
                write!(f, "{} failed: {}", method, message)
            }
            RpcError::AirdropUnconfirmed { signature } => {
                write!(f, "Airdrop {} was not confirmed", signature)
            }
        }
    }
}

// =============================================================================
// TRANSACTION ERROR TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub enum TransactionError {
    BuildFailed { instruction: String, message: String },
    SubmitFailed { instruction: String, message: String },
    AccountDecode { account: String, message: String },
}

impl std::fmt::Display for TransactionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionError::BuildFailed { instruction, message } => {
                write!(f, "Failed to build {}: {}", instruction, message)
            }
            TransactionError::SubmitFailed { instruction, message } => {
                write!(f, "Failed to submit {}: {}", instruction, message)
            }
            TransactionError::AccountDecode { account, message } => {
                write!(f, "Failed to decode account {}: {}", account, message)
            }
        }
    }
}

// =============================================================================
// SCHEDULER ERROR TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub enum ScheduleError {
    Cancelled,
    TaskFailed { message: String },
    JoinFailed { message: String },
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::Cancelled => write!(f, "Scheduled task was cancelled"),
            ScheduleError::TaskFailed { message } => {
                write!(f, "Scheduled task failed: {}", message)
            }
            ScheduleError::JoinFailed { message } => {
                write!(f, "Scheduled task could not be joined: {}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_error_kinds_are_distinguishable() {
        let not_found = PoolReadError::AccountNotFound {
            address: "abc".to_string(),
        };
        let short = PoolReadError::RecordTooShort { len: 12 };
        let miss = PoolReadError::PriceUnavailable {
            symbol: "BONK".to_string(),
        };

        assert_ne!(not_found, short);
        assert_ne!(short, miss);
        assert!(not_found.to_string().contains("abc"));
        assert!(short.to_string().contains("12"));
        assert!(miss.to_string().contains("BONK"));
    }

    #[test]
    fn test_top_level_wrapping() {
        let err: LockBotError = PoolReadError::RecordTooShort { len: 0 }.into();
        match err {
            LockBotError::Pool(PoolReadError::RecordTooShort { len }) => assert_eq!(len, 0),
            other => panic!("unexpected variant: {}", other),
        }
    }
}
