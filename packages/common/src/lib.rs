//! Common - Shared Types and Utilities for the Custody Bridge Contracts
//!
//! This package provides the types shared by the bridge, the multisig admin
//! and the messaging mock:
//! - `asset` - native / CW20 asset descriptors and transfer helpers
//! - `hash` - keccak256 message identity and address keys
//! - `messaging` - the cross-domain messaging transport interface
//! - `ownership` - the `Owner` capability guarding privileged entry points

pub mod asset;
pub mod hash;
pub mod messaging;
pub mod ownership;

pub use asset::AssetInfo;
pub use messaging::{MessagingExecuteMsg, RemoteAddress};
pub use ownership::{Owner, OwnershipError};
