//! Fixed-layout pool record decoding
//!
//! Interprets the 80-byte prefix of a pool account: base reserve (u64 LE),
//! quote reserve (u64 LE), base mint (32 bytes), quote mint (32 bytes).

use super::types::{pool_log, PoolRecord, POOL_RECORD_LEN};
use crate::errors::PoolReadError;
use solana_sdk::pubkey::Pubkey;

/// Decode a pool record from raw account bytes
///
/// Fails with RecordTooShort when fewer than 80 bytes are present; never
/// returns a partial result.
pub fn decode_pool_record(data: &[u8]) -> Result<PoolRecord, PoolReadError> {
    if data.len() < POOL_RECORD_LEN {
        pool_log(
            "ERROR",
            &format!("Pool record too short: {} bytes", data.len()),
        );
        return Err(PoolReadError::RecordTooShort { len: data.len() });
    }

    let base_reserve = u64::from_le_bytes(slice_8(data, 0)?);
    let quote_reserve = u64::from_le_bytes(slice_8(data, 8)?);
    let base_mint = Pubkey::new_from_array(slice_32(data, 16)?);
    let quote_mint = Pubkey::new_from_array(slice_32(data, 48)?);

    pool_log(
        "DEBUG",
        &format!(
            "Decoded pool record: base_reserve={}, quote_reserve={}, base_mint={}, quote_mint={}",
            base_reserve, quote_reserve, base_mint, quote_mint
        ),
    );

    Ok(PoolRecord {
        base_reserve,
        quote_reserve,
        base_mint,
        quote_mint,
    })
}

fn slice_8(data: &[u8], offset: usize) -> Result<[u8; 8], PoolReadError> {
    data[offset..offset + 8]
        .try_into()
        .map_err(|_| PoolReadError::MalformedRecord {
            reason: format!("bad u64 field at offset {}", offset),
        })
}

fn slice_32(data: &[u8], offset: usize) -> Result<[u8; 32], PoolReadError> {
    data[offset..offset + 32]
        .try_into()
        .map_err(|_| PoolReadError::MalformedRecord {
            reason: format!("bad address field at offset {}", offset),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record_bytes(base: u64, quote: u64, extra: usize) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&base.to_le_bytes());
        data.extend_from_slice(&quote.to_le_bytes());
        data.extend_from_slice(&[7u8; 32]); // base mint
        data.extend_from_slice(&[9u8; 32]); // quote mint
        data.extend(std::iter::repeat(0u8).take(extra));
        data
    }

    #[test]
    fn test_decode_well_formed_record() {
        let data = make_record_bytes(1_000_000_000, 2_000_000_000, 0);
        let record = decode_pool_record(&data).unwrap();

        assert_eq!(record.base_reserve, 1_000_000_000);
        assert_eq!(record.quote_reserve, 2_000_000_000);
        assert_eq!(record.base_mint, Pubkey::new_from_array([7u8; 32]));
        assert_eq!(record.quote_mint, Pubkey::new_from_array([9u8; 32]));
    }

    #[test]
    fn test_decode_is_deterministic() {
        let data = make_record_bytes(42, u64::MAX, 0);
        let first = decode_pool_record(&data).unwrap();
        let second = decode_pool_record(&data).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        let exact = make_record_bytes(5, 6, 0);
        let padded = make_record_bytes(5, 6, 600);
        assert_eq!(
            decode_pool_record(&exact).unwrap(),
            decode_pool_record(&padded).unwrap()
        );
    }

    #[test]
    fn test_short_record_fails() {
        for len in [0, 1, 8, 16, 48, 79] {
            let data = vec![0u8; len];
            match decode_pool_record(&data) {
                Err(PoolReadError::RecordTooShort { len: reported }) => {
                    assert_eq!(reported, len);
                }
                other => panic!("expected RecordTooShort for {} bytes, got {:?}", len, other),
            }
        }
    }

    #[test]
    fn test_little_endian_interpretation() {
        let mut data = vec![0u8; 80];
        data[0] = 0x01; // base reserve = 1
        data[8] = 0x00;
        data[9] = 0x01; // quote reserve = 256
        let record = decode_pool_record(&data).unwrap();
        assert_eq!(record.base_reserve, 1);
        assert_eq!(record.quote_reserve, 256);
    }
}
