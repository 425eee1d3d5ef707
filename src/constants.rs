/// Shared constants for the lockbot client
///
/// Program ids, PDA seeds and token parameters used across modules.
/// The token-lock program id here is the deployed default; configs.json
/// can override it per environment.

// =============================================================================
// PROGRAM IDS
// =============================================================================

pub const TOKEN_LOCK_PROGRAM_ID: &str = "GbwQKqr9T1vqJFctV5x6pQiGym61VfzyQ3Smsa42A59J";
pub const SPL_TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

// =============================================================================
// PDA SEEDS
// =============================================================================

/// Seed for the vault authority PDA that owns the vault token account
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault-authority";

/// Seed prefix for per-user lock accounts (followed by the user pubkey)
pub const USER_ACCOUNT_SEED: &[u8] = b"user-account";

// =============================================================================
// TOKEN PARAMETERS
// =============================================================================

/// Decimals for the mint created by the run flow
pub const MINT_DECIMALS: u8 = 9;

/// Raw amount minted to each of the admin and user accounts (1000 tokens)
pub const INITIAL_MINT_AMOUNT: u64 = 1000 * 10u64.pow(9);

/// Raw amount transferred from admin to user before locking (500 tokens)
pub const SEED_TRANSFER_AMOUNT: u64 = 500 * 10u64.pow(9);

/// Lamports in one SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

// =============================================================================
// LOCK PROGRAM PARAMETERS
// =============================================================================

/// Initial market cap passed to initialize
pub const INITIAL_MARKET_CAP: u64 = 10_000_000;

/// Cap quantum between burn cycles passed to initialize
pub const CAP_QUANTUM: u64 = 1_000_000;

/// Percentage of the user balance that may be locked in one call
pub const MAX_LOCK_PERCENT: u64 = 30;

/// Market cap values are reported to the program scaled down by 1e6
pub const CAP_SCALE: u128 = 1_000_000;

/// Default delay before the scheduled burn fires
pub const DEFAULT_BURN_DELAY_SECS: u64 = 120;

// =============================================================================
// PRICE SYMBOLS
// =============================================================================

/// Symbols priced when estimating a pool's aggregate value. These are fixed
/// for the target pool rather than resolved from the decoded mint addresses.
pub const BASE_PRICE_SYMBOL: &str = "SOL";
pub const QUOTE_PRICE_SYMBOL: &str = "USDC";
