//! RPC access for lockbot
//!
//! Thin wrapper over the nonblocking solana-client exposing exactly the
//! calls this driver needs. Account reads distinguish "not found" from
//! transport failure so the pool reader can report a typed error.

pub mod utils;

pub use utils::{lamports_to_sol, parse_pubkey_string, sol_to_lamports};

use crate::errors::{RpcError, TransactionError};
use crate::logger::{self, LogTag};
use once_cell::sync::OnceCell;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};
use std::sync::Arc;
use std::time::Duration;

/// How many times to poll for airdrop confirmation before giving up
const AIRDROP_CONFIRM_ATTEMPTS: u32 = 30;
const AIRDROP_POLL_INTERVAL: Duration = Duration::from_millis(500);

static RPC_CLIENT: OnceCell<Arc<RpcClient>> = OnceCell::new();

/// Initialize the global RPC client. Later calls are no-ops, so tools can
/// safely call this with an override URL before the main flow runs.
pub fn init_rpc(url: &str) {
    let _ = RPC_CLIENT.set(Arc::new(RpcClient::new_with_commitment(
        url.to_string(),
        CommitmentConfig::confirmed(),
    )));
    logger::debug(LogTag::Rpc, &format!("RPC client initialized: {}", url));
}

/// Get the global RPC client. init_rpc must have been called at startup.
pub fn get_rpc_client() -> Arc<RpcClient> {
    RPC_CLIENT
        .get()
        .expect("RPC client not initialized - call rpc::init_rpc first")
        .clone()
}

fn request_failed(method: &str, e: impl std::fmt::Display) -> RpcError {
    RpcError::RequestFailed {
        method: method.to_string(),
        message: e.to_string(),
    }
}

/// Fetch an account, returning None when the address does not resolve to
/// any account rather than treating absence as a transport error.
pub async fn get_account_optional(pubkey: &Pubkey) -> Result<Option<Account>, RpcError> {
    let client = get_rpc_client();
    let response = client
        .get_account_with_commitment(pubkey, CommitmentConfig::confirmed())
        .await
        .map_err(|e| request_failed("getAccountInfo", e))?;
    Ok(response.value)
}

/// SOL balance of an account in lamports
pub async fn get_balance_lamports(pubkey: &Pubkey) -> Result<u64, RpcError> {
    let client = get_rpc_client();
    client
        .get_balance(pubkey)
        .await
        .map_err(|e| request_failed("getBalance", e))
}

/// Raw token balance of a token account
pub async fn get_token_balance_raw(token_account: &Pubkey) -> Result<u64, RpcError> {
    let client = get_rpc_client();
    let balance = client
        .get_token_account_balance(token_account)
        .await
        .map_err(|e| request_failed("getTokenAccountBalance", e))?;
    balance
        .amount
        .parse::<u64>()
        .map_err(|e| request_failed("getTokenAccountBalance", e))
}

/// Minimum lamports for rent exemption of an account of the given size
pub async fn get_rent_exempt_lamports(data_len: usize) -> Result<u64, RpcError> {
    let client = get_rpc_client();
    client
        .get_minimum_balance_for_rent_exemption(data_len)
        .await
        .map_err(|e| request_failed("getMinimumBalanceForRentExemption", e))
}

/// Request an airdrop and poll until it confirms
pub async fn request_airdrop_and_confirm(
    pubkey: &Pubkey,
    lamports: u64,
) -> Result<Signature, RpcError> {
    let client = get_rpc_client();
    let signature = client
        .request_airdrop(pubkey, lamports)
        .await
        .map_err(|e| request_failed("requestAirdrop", e))?;

    logger::debug(
        LogTag::Rpc,
        &format!("Airdrop requested for {}: {}", pubkey, signature),
    );

    for _ in 0..AIRDROP_CONFIRM_ATTEMPTS {
        let confirmed = client
            .confirm_transaction(&signature)
            .await
            .map_err(|e| request_failed("confirmTransaction", e))?;
        if confirmed {
            return Ok(signature);
        }
        tokio::time::sleep(AIRDROP_POLL_INTERVAL).await;
    }

    Err(RpcError::AirdropUnconfirmed {
        signature: signature.to_string(),
    })
}

/// Sign and submit a set of instructions as one transaction, waiting for
/// confirmation. The label names the operation for errors and logs.
pub async fn send_instructions(
    label: &str,
    instructions: &[Instruction],
    payer: &Pubkey,
    signers: &[&Keypair],
) -> Result<Signature, TransactionError> {
    let client = get_rpc_client();

    let blockhash = client
        .get_latest_blockhash()
        .await
        .map_err(|e| TransactionError::SubmitFailed {
            instruction: label.to_string(),
            message: format!("getLatestBlockhash: {}", e),
        })?;

    let signer_refs: Vec<&Keypair> = signers.to_vec();
    let transaction =
        Transaction::new_signed_with_payer(instructions, Some(payer), &signer_refs, blockhash);

    let signature = client
        .send_and_confirm_transaction(&transaction)
        .await
        .map_err(|e| TransactionError::SubmitFailed {
            instruction: label.to_string(),
            message: e.to_string(),
        })?;

    logger::debug(LogTag::Rpc, &format!("{} confirmed: {}", label, signature));
    Ok(signature)
}
