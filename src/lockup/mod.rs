/// Token-lock program client
///
/// Builds and submits calls to the externally deployed token-lock program
/// (initialize / lock_tokens / burn_tokens / update_cap). The program's
/// semantics, validation and storage live on-chain; this module only
/// constructs instructions in the program's declared account order and
/// reads back its state accounts.

pub mod client;
pub mod instructions;
pub mod state;

pub use client::LockupClient;
pub use instructions::{find_user_account, find_vault_authority};
pub use state::{GlobalState, UserAccount};
