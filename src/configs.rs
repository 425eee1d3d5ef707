/// Runtime configuration loaded from configs.json
///
/// Holds the wallet key, RPC endpoint and the addresses of the external
/// collaborators (token-lock program, pool account). The private key is
/// accepted in base58 form or as a JSON byte array.
use crate::errors::ConfigurationError;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::constants::TOKEN_LOCK_PROGRAM_ID;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configs {
    pub main_wallet_private: String,
    pub rpc_url: String,
    /// Token-lock program id; falls back to the deployed default when absent
    #[serde(default = "default_program_id")]
    pub program_id: String,
    /// Liquidity pool account whose reserves drive the market cap estimate
    pub pool_id: String,
}

fn default_program_id() -> String {
    TOKEN_LOCK_PROGRAM_ID.to_string()
}

/// Reads a configs.json file and returns a Configs object
pub fn read_configs<P: AsRef<Path>>(path: P) -> Result<Configs, ConfigurationError> {
    let path_str = path.as_ref().display().to_string();
    let data = fs::read_to_string(&path).map_err(|e| ConfigurationError::FileNotReadable {
        path: path_str.clone(),
        error: e.to_string(),
    })?;
    let configs: Configs =
        serde_json::from_str(&data).map_err(|e| ConfigurationError::ParseFailed {
            path: path_str,
            error: e.to_string(),
        })?;
    Ok(configs)
}

impl Configs {
    /// Parse the configured program id into a Pubkey
    pub fn program_pubkey(&self) -> Result<Pubkey, ConfigurationError> {
        Pubkey::from_str(&self.program_id).map_err(|_| ConfigurationError::InvalidPubkey {
            field: "program_id".to_string(),
            value: self.program_id.clone(),
        })
    }

    /// Parse the configured pool id into a Pubkey
    pub fn pool_pubkey(&self) -> Result<Pubkey, ConfigurationError> {
        Pubkey::from_str(&self.pool_id).map_err(|_| ConfigurationError::InvalidPubkey {
            field: "pool_id".to_string(),
            value: self.pool_id.clone(),
        })
    }
}

/// Load the main wallet keypair from the configs
///
/// Accepts either a base58 string or an array form like [1,2,3,...] as
/// written by solana-keygen.
pub fn load_wallet_from_config(configs: &Configs) -> Result<Keypair, ConfigurationError> {
    let raw = configs.main_wallet_private.trim();

    let bytes = if raw.starts_with('[') && raw.ends_with(']') {
        let inner = raw.trim_start_matches('[').trim_end_matches(']');
        inner
            .split(',')
            .map(|s| s.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|e| ConfigurationError::InvalidPrivateKey {
                reason: format!("array parse failed: {}", e),
            })?
    } else {
        bs58::decode(raw)
            .into_vec()
            .map_err(|e| ConfigurationError::InvalidPrivateKey {
                reason: format!("base58 decode failed: {}", e),
            })?
    };

    if bytes.len() != 64 {
        return Err(ConfigurationError::InvalidPrivateKey {
            reason: format!("expected 64 bytes, got {}", bytes.len()),
        });
    }

    Keypair::try_from(&bytes[..]).map_err(|e| ConfigurationError::InvalidPrivateKey {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signer::Signer;

    fn sample_configs(private: &str) -> Configs {
        Configs {
            main_wallet_private: private.to_string(),
            rpc_url: "http://127.0.0.1:8899".to_string(),
            program_id: TOKEN_LOCK_PROGRAM_ID.to_string(),
            pool_id: "8sLbNZoA1cfnvMJLPfp98ZLAnFSYCFApfJKMbiXNLwxj".to_string(),
        }
    }

    #[test]
    fn test_parse_configs_json() {
        let json = r#"{
            "main_wallet_private": "abc",
            "rpc_url": "http://127.0.0.1:8899",
            "pool_id": "8sLbNZoA1cfnvMJLPfp98ZLAnFSYCFApfJKMbiXNLwxj"
        }"#;
        let configs: Configs = serde_json::from_str(json).unwrap();
        assert_eq!(configs.rpc_url, "http://127.0.0.1:8899");
        // program_id falls back to the deployed default
        assert_eq!(configs.program_id, TOKEN_LOCK_PROGRAM_ID);
        assert!(configs.pool_pubkey().is_ok());
        assert!(configs.program_pubkey().is_ok());
    }

    #[test]
    fn test_load_wallet_base58() {
        let keypair = Keypair::new();
        let encoded = bs58::encode(keypair.to_bytes()).into_string();
        let configs = sample_configs(&encoded);

        let loaded = load_wallet_from_config(&configs).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_load_wallet_array_form() {
        let keypair = Keypair::new();
        let array = format!(
            "[{}]",
            keypair
                .to_bytes()
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(",")
        );
        let configs = sample_configs(&array);

        let loaded = load_wallet_from_config(&configs).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_load_wallet_rejects_wrong_length() {
        let configs = sample_configs("[1,2,3]");
        assert!(load_wallet_from_config(&configs).is_err());
    }
}
