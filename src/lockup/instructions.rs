//! Instruction builders for the token-lock program
//!
//! The program speaks the Anchor wire convention: an 8-byte method
//! discriminator (sha256 of "global:<method>") followed by Borsh-encoded
//! arguments, with accounts in the order the program declares them.

use crate::constants::{USER_ACCOUNT_SEED, VAULT_AUTHORITY_SEED};
use crate::errors::TransactionError;
use borsh::BorshSerialize;
use sha2::{Digest, Sha256};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
    sysvar::rent,
};
use std::str::FromStr;

use crate::constants::SPL_TOKEN_PROGRAM_ID;

/// 8-byte Anchor method/account discriminator
pub fn sighash(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{}:{}", namespace, name);
    let hash = Sha256::digest(preimage.as_bytes());
    let mut out = [0u8; 8];
    out.copy_from_slice(&hash[..8]);
    out
}

/// Derive the vault authority PDA that owns the vault token account
pub fn find_vault_authority(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_AUTHORITY_SEED], program_id)
}

/// Derive a user's lock account PDA
pub fn find_user_account(program_id: &Pubkey, user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_ACCOUNT_SEED, user.as_ref()], program_id)
}

fn encode_data<T: BorshSerialize>(method: &str, args: &T) -> Result<Vec<u8>, TransactionError> {
    let mut data = sighash("global", method).to_vec();
    let encoded = borsh::to_vec(args).map_err(|e| TransactionError::BuildFailed {
        instruction: method.to_string(),
        message: e.to_string(),
    })?;
    data.extend(encoded);
    Ok(data)
}

fn token_program_id() -> Pubkey {
    Pubkey::from_str(SPL_TOKEN_PROGRAM_ID).expect("static token program id")
}

// =============================================================================
// ARGUMENT LAYOUTS
// =============================================================================

#[derive(BorshSerialize)]
struct InitializeArgs {
    initial_market_cap: u64,
    quantum: u64,
}

#[derive(BorshSerialize)]
struct LockTokensArgs {
    amount: u64,
}

#[derive(BorshSerialize)]
struct BurnTokensArgs {
    vault_authority_bump: u8,
}

#[derive(BorshSerialize)]
struct UpdateCapArgs {
    new_cap: u64,
}

// =============================================================================
// INSTRUCTION BUILDERS
// =============================================================================

/// initialize(initial_market_cap, quantum)
///
/// global_state is a fresh keypair created by the transaction, so it signs
/// alongside the admin payer.
pub fn build_initialize(
    program_id: &Pubkey,
    global_state: &Pubkey,
    admin: &Pubkey,
    initial_market_cap: u64,
    quantum: u64,
) -> Result<Instruction, TransactionError> {
    let data = encode_data(
        "initialize",
        &InitializeArgs {
            initial_market_cap,
            quantum,
        },
    )?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*global_state, true),
            AccountMeta::new(*admin, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    })
}

/// lock_tokens(amount)
pub fn build_lock_tokens(
    program_id: &Pubkey,
    user: &Pubkey,
    user_token_account: &Pubkey,
    vault_token_account: &Pubkey,
    global_state: &Pubkey,
    amount: u64,
) -> Result<Instruction, TransactionError> {
    let (user_account, _) = find_user_account(program_id, user);
    let data = encode_data("lock_tokens", &LockTokensArgs { amount })?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*user, true),
            AccountMeta::new(user_account, false),
            AccountMeta::new(*user_token_account, false),
            AccountMeta::new(*vault_token_account, false),
            AccountMeta::new_readonly(token_program_id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(rent::id(), false),
            AccountMeta::new(*global_state, false),
        ],
        data,
    })
}

/// burn_tokens(vault_authority_bump)
pub fn build_burn_tokens(
    program_id: &Pubkey,
    admin: &Pubkey,
    vault_token_account: &Pubkey,
    token_mint: &Pubkey,
    global_state: &Pubkey,
) -> Result<Instruction, TransactionError> {
    let (vault_authority, bump) = find_vault_authority(program_id);
    let data = encode_data(
        "burn_tokens",
        &BurnTokensArgs {
            vault_authority_bump: bump,
        },
    )?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(*vault_token_account, false),
            AccountMeta::new(*token_mint, false),
            AccountMeta::new(vault_authority, false),
            AccountMeta::new_readonly(token_program_id(), false),
            AccountMeta::new(*global_state, false),
        ],
        data,
    })
}

/// update_cap(new_cap)
pub fn build_update_cap(
    program_id: &Pubkey,
    admin: &Pubkey,
    global_state: &Pubkey,
    new_cap: u64,
) -> Result<Instruction, TransactionError> {
    let data = encode_data("update_cap", &UpdateCapArgs { new_cap })?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(*global_state, false),
        ],
        data,
    })
}
