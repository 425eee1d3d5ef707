//! High-level client for the token-lock program
//!
//! Wraps the instruction builders with transaction submission and account
//! read-back. Each call is one transaction, confirmed before returning.

use super::instructions;
use super::state::GlobalState;
use crate::errors::{LockBotError, TransactionError};
use crate::logger::{self, LogTag};
use crate::rpc;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};

pub struct LockupClient {
    program_id: Pubkey,
}

impl LockupClient {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    /// Derived vault authority PDA and bump for this program
    pub fn vault_authority(&self) -> (Pubkey, u8) {
        instructions::find_vault_authority(&self.program_id)
    }

    /// initialize(initial_market_cap, quantum)
    ///
    /// global_state is a fresh keypair; it co-signs the creating
    /// transaction alongside the admin payer.
    pub async fn initialize(
        &self,
        admin: &Keypair,
        global_state: &Keypair,
        initial_market_cap: u64,
        quantum: u64,
    ) -> Result<Signature, LockBotError> {
        let ix = instructions::build_initialize(
            &self.program_id,
            &global_state.pubkey(),
            &admin.pubkey(),
            initial_market_cap,
            quantum,
        )?;

        let signature = rpc::send_instructions(
            "initialize",
            &[ix],
            &admin.pubkey(),
            &[admin, global_state],
        )
        .await?;

        logger::info(
            LogTag::Lockup,
            &format!(
                "Initialized: cap={}, quantum={}, global_state={}",
                initial_market_cap,
                quantum,
                global_state.pubkey()
            ),
        );
        Ok(signature)
    }

    /// update_cap(new_cap)
    pub async fn update_cap(
        &self,
        admin: &Keypair,
        global_state: &Pubkey,
        new_cap: u64,
    ) -> Result<Signature, LockBotError> {
        let ix =
            instructions::build_update_cap(&self.program_id, &admin.pubkey(), global_state, new_cap)?;
        let signature =
            rpc::send_instructions("update_cap", &[ix], &admin.pubkey(), &[admin]).await?;

        logger::info(LogTag::Lockup, &format!("Cap updated to {}", new_cap));
        Ok(signature)
    }

    /// lock_tokens(amount) signed by the locking user
    pub async fn lock_tokens(
        &self,
        user: &Keypair,
        user_token_account: &Pubkey,
        vault_token_account: &Pubkey,
        global_state: &Pubkey,
        amount: u64,
    ) -> Result<Signature, LockBotError> {
        let ix = instructions::build_lock_tokens(
            &self.program_id,
            &user.pubkey(),
            user_token_account,
            vault_token_account,
            global_state,
            amount,
        )?;

        let signature =
            rpc::send_instructions("lock_tokens", &[ix], &user.pubkey(), &[user]).await?;

        logger::info(
            LogTag::Lockup,
            &format!("Locked {} for user {}", amount, user.pubkey()),
        );
        Ok(signature)
    }

    /// burn_tokens(vault_authority_bump), admin-signed
    pub async fn burn_tokens(
        &self,
        admin: &Keypair,
        vault_token_account: &Pubkey,
        token_mint: &Pubkey,
        global_state: &Pubkey,
    ) -> Result<Signature, LockBotError> {
        let ix = instructions::build_burn_tokens(
            &self.program_id,
            &admin.pubkey(),
            vault_token_account,
            token_mint,
            global_state,
        )?;

        let signature =
            rpc::send_instructions("burn_tokens", &[ix], &admin.pubkey(), &[admin]).await?;

        logger::info(LogTag::Lockup, "Burn submitted");
        Ok(signature)
    }

    /// Read and decode the program's global state account
    pub async fn fetch_global_state(
        &self,
        global_state: &Pubkey,
    ) -> Result<GlobalState, LockBotError> {
        let account = rpc::get_account_optional(global_state)
            .await?
            .ok_or_else(|| {
                LockBotError::Transaction(TransactionError::AccountDecode {
                    account: "GlobalState".to_string(),
                    message: format!("account {} not found", global_state),
                })
            })?;

        let state = GlobalState::decode(&account.data)?;
        logger::debug(
            LogTag::Lockup,
            &format!(
                "GlobalState: current_cap={}, next_burn_cap={}, quantum={}",
                state.current_cap, state.next_burn_cap, state.quantum
            ),
        );
        Ok(state)
    }
}
