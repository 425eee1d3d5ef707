//! SPL token glue
//!
//! Sequential helpers the run flow needs around the SPL token program:
//! mint creation, associated token accounts, minting, transfers and
//! handing a token account's owner authority to a PDA.

use crate::errors::{LockBotError, TransactionError};
use crate::logger::{self, LogTag};
use crate::rpc;
use solana_program::program_pack::Pack;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    system_instruction,
};
use spl_associated_token_account::get_associated_token_address;
use spl_token::instruction::AuthorityType;
use spl_token::state::Mint;

fn build_failed(instruction: &str, e: impl std::fmt::Display) -> TransactionError {
    TransactionError::BuildFailed {
        instruction: instruction.to_string(),
        message: e.to_string(),
    }
}

/// Create a new mint with the payer as mint authority
pub async fn create_mint(payer: &Keypair, decimals: u8) -> Result<Pubkey, LockBotError> {
    let mint = Keypair::new();
    let rent = rpc::get_rent_exempt_lamports(Mint::LEN).await?;

    let create_ix = system_instruction::create_account(
        &payer.pubkey(),
        &mint.pubkey(),
        rent,
        Mint::LEN as u64,
        &spl_token::id(),
    );
    let init_ix = spl_token::instruction::initialize_mint(
        &spl_token::id(),
        &mint.pubkey(),
        &payer.pubkey(),
        None,
        decimals,
    )
    .map_err(|e| build_failed("initialize_mint", e))?;

    rpc::send_instructions(
        "create_mint",
        &[create_ix, init_ix],
        &payer.pubkey(),
        &[payer, &mint],
    )
    .await?;

    logger::info(LogTag::Token, &format!("Mint created: {}", mint.pubkey()));
    Ok(mint.pubkey())
}

/// Derive the associated token account for an owner, creating it when it
/// does not exist yet
pub async fn get_or_create_ata(
    payer: &Keypair,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<Pubkey, LockBotError> {
    let ata = get_associated_token_address(owner, mint);

    if rpc::get_account_optional(&ata).await?.is_some() {
        logger::debug(LogTag::Token, &format!("ATA exists: {}", ata));
        return Ok(ata);
    }

    let create_ix = spl_associated_token_account::instruction::create_associated_token_account(
        &payer.pubkey(),
        owner,
        mint,
        &spl_token::id(),
    );

    rpc::send_instructions("create_ata", &[create_ix], &payer.pubkey(), &[payer]).await?;

    logger::info(
        LogTag::Token,
        &format!("ATA created for {}: {}", owner, ata),
    );
    Ok(ata)
}

/// Mint raw tokens to a destination token account
pub async fn mint_to(
    mint_authority: &Keypair,
    mint: &Pubkey,
    destination: &Pubkey,
    amount: u64,
) -> Result<Signature, LockBotError> {
    let ix = spl_token::instruction::mint_to(
        &spl_token::id(),
        mint,
        destination,
        &mint_authority.pubkey(),
        &[],
        amount,
    )
    .map_err(|e| build_failed("mint_to", e))?;

    let signature = rpc::send_instructions(
        "mint_to",
        &[ix],
        &mint_authority.pubkey(),
        &[mint_authority],
    )
    .await?;

    logger::info(
        LogTag::Token,
        &format!("Minted {} to {}", amount, destination),
    );
    Ok(signature)
}

/// Transfer raw tokens between token accounts
pub async fn transfer(
    authority: &Keypair,
    source: &Pubkey,
    destination: &Pubkey,
    amount: u64,
) -> Result<Signature, LockBotError> {
    let ix = spl_token::instruction::transfer(
        &spl_token::id(),
        source,
        destination,
        &authority.pubkey(),
        &[],
        amount,
    )
    .map_err(|e| build_failed("transfer", e))?;

    let signature =
        rpc::send_instructions("transfer", &[ix], &authority.pubkey(), &[authority]).await?;

    logger::info(
        LogTag::Token,
        &format!("Transferred {} from {} to {}", amount, source, destination),
    );
    Ok(signature)
}

/// Reassign a token account's owner authority (used to hand the vault to
/// the program's vault-authority PDA)
pub async fn set_account_owner(
    current_owner: &Keypair,
    token_account: &Pubkey,
    new_owner: &Pubkey,
) -> Result<Signature, LockBotError> {
    let ix = spl_token::instruction::set_authority(
        &spl_token::id(),
        token_account,
        Some(new_owner),
        AuthorityType::AccountOwner,
        &current_owner.pubkey(),
        &[],
    )
    .map_err(|e| build_failed("set_authority", e))?;

    let signature = rpc::send_instructions(
        "set_authority",
        &[ix],
        &current_owner.pubkey(),
        &[current_owner],
    )
    .await?;

    logger::info(
        LogTag::Token,
        &format!("Owner of {} set to {}", token_account, new_owner),
    );
    Ok(signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ata_derivation_is_stable() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let a = get_associated_token_address(&owner, &mint);
        let b = get_associated_token_address(&owner, &mint);
        assert_eq!(a, b);

        let other_owner = Pubkey::new_unique();
        assert_ne!(a, get_associated_token_address(&other_owner, &mint));
    }
}
