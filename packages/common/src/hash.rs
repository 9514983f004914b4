//! Message identity hashing for the cross-domain transport.
//!
//! A message is identified by keccak256 over its fixed-width fields, so the
//! bridge and the transport agree on the same key without sharing storage.
//!
//! # Byte Layout
//! Remote → local (`remote_to_local_hash`):
//! - Bytes 0-31:  sender on the remote domain (uint256, big-endian)
//! - Bytes 32-63: keccak256 of the local recipient address string
//! - Bytes 64-71: payload length (u64, big-endian)
//! - 32 bytes per payload element (uint256, big-endian)
//!
//! Local → remote (`local_to_remote_hash`):
//! - Bytes 0-31:  keccak256 of the local sender address string
//! - Bytes 32-63: recipient on the remote domain (uint256, big-endian)
//! - Bytes 64-71: nonce (u64, big-endian)
//! - Bytes 72-79: payload length (u64, big-endian)
//! - 32 bytes per payload element (uint256, big-endian)

use cosmwasm_std::{Addr, Uint256};
use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Field-element key for a base-domain address, used wherever a local
/// address has to travel inside a payload.
pub fn local_address_key(addr: &Addr) -> Uint256 {
    Uint256::from_be_bytes(keccak256(addr.as_bytes()))
}

/// Identity of a message sent from the remote domain to a local contract.
pub fn remote_to_local_hash(from_remote: Uint256, to_local: &Addr, payload: &[Uint256]) -> [u8; 32] {
    let mut data = Vec::with_capacity(72 + payload.len() * 32);
    data.extend_from_slice(&from_remote.to_be_bytes());
    data.extend_from_slice(&keccak256(to_local.as_bytes()));
    data.extend_from_slice(&(payload.len() as u64).to_be_bytes());
    for word in payload {
        data.extend_from_slice(&word.to_be_bytes());
    }
    keccak256(&data)
}

/// Identity of a message sent from a local contract to the remote domain.
pub fn local_to_remote_hash(
    from_local: &Addr,
    to_remote: Uint256,
    nonce: u64,
    payload: &[Uint256],
) -> [u8; 32] {
    let mut data = Vec::with_capacity(80 + payload.len() * 32);
    data.extend_from_slice(&keccak256(from_local.as_bytes()));
    data.extend_from_slice(&to_remote.to_be_bytes());
    data.extend_from_slice(&nonce.to_be_bytes());
    data.extend_from_slice(&(payload.len() as u64).to_be_bytes());
    for word in payload {
        data.extend_from_slice(&word.to_be_bytes());
    }
    keccak256(&data)
}

/// Convert 32-byte hash to hex string (for attributes)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
