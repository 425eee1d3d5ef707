//! State accounts of the token-lock program
//!
//! Read-only mirrors of the on-chain layouts: an 8-byte Anchor account
//! discriminator (sha256 of "account:<Name>") followed by Borsh fields.

use super::instructions::sighash;
use crate::errors::TransactionError;
use borsh::{BorshDeserialize, BorshSerialize};

/// Global program state written by initialize and advanced by burns
#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct GlobalState {
    pub current_cap: u64,
    pub next_burn_cap: u64,
    pub quantum: u64,
}

/// Per-user lock account created on first lock_tokens call
#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct UserAccount {
    pub locked_amount: u64,
    pub unlock_time: i64,
    pub last_lock_cap: u64,
}

fn decode_account<T: BorshDeserialize>(
    name: &str,
    data: &[u8],
) -> Result<T, TransactionError> {
    let discriminator = sighash("account", name);
    if data.len() < 8 || data[..8] != discriminator {
        return Err(TransactionError::AccountDecode {
            account: name.to_string(),
            message: "discriminator mismatch".to_string(),
        });
    }
    // Trailing zero padding from the fixed allocation is expected
    T::deserialize(&mut &data[8..]).map_err(|e| TransactionError::AccountDecode {
        account: name.to_string(),
        message: e.to_string(),
    })
}

impl GlobalState {
    pub fn decode(data: &[u8]) -> Result<Self, TransactionError> {
        decode_account("GlobalState", data)
    }
}

impl UserAccount {
    pub fn decode(data: &[u8]) -> Result<Self, TransactionError> {
        decode_account("UserAccount", data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_with_discriminator<T: BorshSerialize>(name: &str, value: &T, pad: usize) -> Vec<u8> {
        let mut data = sighash("account", name).to_vec();
        data.extend(borsh::to_vec(value).unwrap());
        data.extend(std::iter::repeat(0u8).take(pad));
        data
    }

    #[test]
    fn test_global_state_roundtrip() {
        let state = GlobalState {
            current_cap: 10_000_000,
            next_burn_cap: 11_000_000,
            quantum: 1_000_000,
        };
        // The program allocates 8 + 64 bytes, so real accounts carry padding
        let data = encode_with_discriminator("GlobalState", &state, 40);
        assert_eq!(GlobalState::decode(&data).unwrap(), state);
    }

    #[test]
    fn test_user_account_roundtrip() {
        let account = UserAccount {
            locked_amount: 42,
            unlock_time: 1_700_000_000,
            last_lock_cap: 10_000_000,
        };
        let data = encode_with_discriminator("UserAccount", &account, 56);
        assert_eq!(UserAccount::decode(&data).unwrap(), account);
    }

    #[test]
    fn test_wrong_discriminator_rejected() {
        let state = GlobalState {
            current_cap: 1,
            next_burn_cap: 2,
            quantum: 3,
        };
        let data = encode_with_discriminator("UserAccount", &state, 0);
        assert!(GlobalState::decode(&data).is_err());
    }

    #[test]
    fn test_truncated_account_rejected() {
        assert!(GlobalState::decode(&[1, 2, 3]).is_err());
    }
}
