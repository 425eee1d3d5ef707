/// Log tags identifying the module a message originates from
///
/// The debug key doubles as the --debug-<key> flag suffix for that module.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
    System,
    Config,
    Rpc,
    Pool,
    Price,
    Lockup,
    Token,
    Scheduler,
    Wallet,
}

impl LogTag {
    /// Plain name used in file output
    pub fn to_plain_string(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Config => "CONFIG",
            LogTag::Rpc => "RPC",
            LogTag::Pool => "POOL",
            LogTag::Price => "PRICE",
            LogTag::Lockup => "LOCKUP",
            LogTag::Token => "TOKEN",
            LogTag::Scheduler => "SCHED",
            LogTag::Wallet => "WALLET",
        }
    }

    /// Suffix for the per-module debug flag (--debug-<key>)
    pub fn debug_key(&self) -> &'static str {
        match self {
            LogTag::System => "system",
            LogTag::Config => "config",
            LogTag::Rpc => "rpc",
            LogTag::Pool => "pool",
            LogTag::Price => "price",
            LogTag::Lockup => "lockup",
            LogTag::Token => "token",
            LogTag::Scheduler => "scheduler",
            LogTag::Wallet => "wallet",
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
