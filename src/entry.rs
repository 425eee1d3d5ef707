//! The sequential run flow
//!
//! Drives the external token-lock program end to end, in the order the
//! deployment expects: initialize, set up mint and token accounts, fund
//! the user, report the pool market cap, lock, hand the vault to the
//! program's PDA, then schedule the burn.

use crate::arguments;
use crate::configs::{load_wallet_from_config, read_configs};
use crate::constants::{
    CAP_QUANTUM, CAP_SCALE, DEFAULT_BURN_DELAY_SECS, INITIAL_MARKET_CAP, INITIAL_MINT_AMOUNT,
    LAMPORTS_PER_SOL, MAX_LOCK_PERCENT, MINT_DECIMALS, SEED_TRANSFER_AMOUNT,
};
use crate::errors::LockBotError;
use crate::lockup::LockupClient;
use crate::logger::{self, LogTag};
use crate::pool_price;
use crate::pricing::StaticPriceTable;
use crate::rpc;
use crate::scheduler;
use crate::token;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use std::time::Duration;

const CONFIGS_PATH: &str = "configs.json";

/// Run the full flow once. Any step's failure aborts the run with a
/// typed error.
pub async fn run() -> Result<(), LockBotError> {
    let configs = read_configs(CONFIGS_PATH)?;
    rpc::init_rpc(&configs.rpc_url);

    let admin = load_wallet_from_config(&configs)?;
    let program_id = configs.program_pubkey()?;
    let pool_id = configs.pool_pubkey()?;

    logger::info(
        LogTag::System,
        &format!("Admin wallet: {}", admin.pubkey()),
    );
    logger::info(LogTag::System, &format!("Program id: {}", program_id));

    let admin_lamports = rpc::get_balance_lamports(&admin.pubkey()).await?;
    logger::info(
        LogTag::Wallet,
        &format!("Admin balance: {} SOL", rpc::lamports_to_sol(admin_lamports)),
    );

    let client = LockupClient::new(program_id);

    // Initialize the program's global state
    let global_state = Keypair::new();
    client
        .initialize(&admin, &global_state, INITIAL_MARKET_CAP, CAP_QUANTUM)
        .await?;

    // Mint and token accounts. The admin ATA doubles as the vault; its
    // owner authority moves to the program PDA before the burn.
    let mint = token::create_mint(&admin, MINT_DECIMALS).await?;
    let (vault_authority, vault_authority_bump) = client.vault_authority();
    logger::info(
        LogTag::System,
        &format!(
            "Vault authority PDA: {} (bump {})",
            vault_authority, vault_authority_bump
        ),
    );

    let vault_token_account = token::get_or_create_ata(&admin, &admin.pubkey(), &mint).await?;

    // A fresh user funded with 1 SOL for fees and rent
    let user = Keypair::new();
    logger::info(LogTag::Wallet, &format!("User: {}", user.pubkey()));
    rpc::request_airdrop_and_confirm(&user.pubkey(), LAMPORTS_PER_SOL).await?;
    logger::info(LogTag::Wallet, "Airdropped 1 SOL to the user");

    let user_token_account = token::get_or_create_ata(&admin, &user.pubkey(), &mint).await?;

    token::mint_to(&admin, &mint, &vault_token_account, INITIAL_MINT_AMOUNT).await?;
    token::mint_to(&admin, &mint, &user_token_account, INITIAL_MINT_AMOUNT).await?;

    let user_balance = rpc::get_token_balance_raw(&user_token_account).await?;
    let admin_balance = rpc::get_token_balance_raw(&vault_token_account).await?;
    logger::info(
        LogTag::Wallet,
        &format!(
            "Balances before transfer: user={}, admin={}",
            user_balance, admin_balance
        ),
    );

    token::transfer(
        &admin,
        &vault_token_account,
        &user_token_account,
        SEED_TRANSFER_AMOUNT,
    )
    .await?;

    // Estimate the pool's aggregate value and report it to the program
    let prices = StaticPriceTable::new();
    let market_cap = pool_price::get_pool_market_cap(&pool_id, &prices).await?;
    let scaled_cap = u64::try_from(market_cap / CAP_SCALE).unwrap_or(u64::MAX);
    logger::info(
        LogTag::System,
        &format!("Market cap: {} (scaled: {})", market_cap, scaled_cap),
    );

    client
        .update_cap(&admin, &global_state.pubkey(), scaled_cap)
        .await?;

    // Lock the maximum the program allows: 30% of the user's balance
    let user_balance = rpc::get_token_balance_raw(&user_token_account).await?;
    let lock_amount =
        (user_balance as u128 * MAX_LOCK_PERCENT as u128 / 100) as u64;
    logger::info(
        LogTag::System,
        &format!(
            "User balance {}, locking {} ({}%)",
            user_balance, lock_amount, MAX_LOCK_PERCENT
        ),
    );

    client
        .lock_tokens(
            &user,
            &user_token_account,
            &vault_token_account,
            &global_state.pubkey(),
            lock_amount,
        )
        .await?;

    // Hand the vault to the program before the burn can sign for it
    token::set_account_owner(&admin, &vault_token_account, &vault_authority).await?;

    let state = client.fetch_global_state(&global_state.pubkey()).await?;
    logger::info(
        LogTag::System,
        &format!(
            "GlobalState: current_cap={}, next_burn_cap={}, quantum={}",
            state.current_cap, state.next_burn_cap, state.quantum
        ),
    );

    if arguments::is_skip_burn_enabled() {
        logger::info(LogTag::System, "Burn skipped (--skip-burn)");
        return Ok(());
    }

    // Delayed burn as an explicit scheduled task with a reported outcome
    let delay_secs = arguments::get_burn_delay_secs().unwrap_or(DEFAULT_BURN_DELAY_SECS);
    let global_state_pubkey = global_state.pubkey();
    let burn_task = scheduler::schedule(
        "burn_tokens",
        Duration::from_secs(delay_secs),
        move || async move {
            let client = LockupClient::new(program_id);
            client
                .burn_tokens(&admin, &vault_token_account, &mint, &global_state_pubkey)
                .await?;
            Ok(())
        },
    );

    burn_task
        .join()
        .await
        .map_err(LockBotError::Schedule)?;

    logger::info(LogTag::System, "Run complete");
    Ok(())
}
