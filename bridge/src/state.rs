//! State definitions for the custody bridge contract
//!
//! Storage for the asset registry, the linked remote accounts used to bind
//! withdrawals, and the deposit-cancellation state table.

use common::{AssetInfo, Owner, RemoteAddress};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Messaging transport contract
    pub messaging: Addr,
    /// Bank denom custodied for the native asset
    pub native_denom: String,
    /// Ticker the native asset is registered under
    pub native_ticker: u64,
    /// Remote registry allowed to add and remove assets
    pub asset_remote_address: RemoteAddress,
    /// Remote contract notified when a withdrawal request is fulfilled
    pub withdrawal_remote_address: RemoteAddress,
}

// ============================================================================
// Deposit Cancellation
// ============================================================================

/// Cancellation lifecycle of a single deposit message.
#[cw_serde]
pub enum CancellationStatus {
    /// Deposit outstanding, no cancellation requested
    None,
    /// Depositor asked to cancel; reclaimable after the delay
    CancelRequested,
    /// Funds returned to the depositor
    Reclaimed,
}

/// A deposit message sent to the remote domain, keyed by its message hash.
#[cw_serde]
pub struct DepositRecord {
    pub depositor: Addr,
    pub remote_recipient: RemoteAddress,
    pub ticker: u64,
    /// Asset actually custodied, kept so a reclaim still works after the
    /// ticker is deregistered
    pub asset: AssetInfo,
    pub amount: Uint128,
    pub nonce: u64,
    pub deposited_at: Timestamp,
    pub status: CancellationStatus,
    pub requested_at: Option<Timestamp>,
}

impl DepositRecord {
    /// NONE → CANCEL_REQUESTED
    pub fn request_cancellation(&mut self, now: Timestamp) -> Result<(), ContractError> {
        match self.status {
            CancellationStatus::None => {
                self.status = CancellationStatus::CancelRequested;
                self.requested_at = Some(now);
                Ok(())
            }
            CancellationStatus::CancelRequested => Err(ContractError::CancellationAlreadyRequested),
            CancellationStatus::Reclaimed => Err(ContractError::NoMessageToCancel),
        }
    }

    /// CANCEL_REQUESTED → RECLAIMED, once `delay` seconds have passed.
    pub fn reclaim(&mut self, now: Timestamp, delay: u64) -> Result<(), ContractError> {
        let requested_at = match (&self.status, self.requested_at) {
            (CancellationStatus::CancelRequested, Some(at)) => at,
            _ => return Err(ContractError::CancellationNotRequested),
        };

        let unlock_at = requested_at.plus_seconds(delay);
        if now < unlock_at {
            return Err(ContractError::CancellationNotAllowedYet {
                remaining_seconds: unlock_at.seconds() - now.seconds(),
            });
        }

        self.status = CancellationStatus::Reclaimed;
        Ok(())
    }
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:custody-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds between a cancellation request and the earliest reclaim
pub const DEPOSIT_CANCEL_DELAY: u64 = 600;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Holder of the privileged entry points
pub const OWNER: Owner = Owner::new("owner");

/// Registered tickers in registry order
pub const ASSET_LIST: Item<Vec<u64>> = Item::new("asset_list");

/// Key: ticker, Value: remote-assigned internal id (never zero)
pub const ASSET_IDS: Map<u64, Uint128> = Map::new("asset_ids");

/// Key: ticker, Value: CW20 contract backing the asset (write-once)
pub const TOKEN_ADDRESSES: Map<u64, Addr> = Map::new("token_addresses");

/// Key: depositor, Value: remote account of their most recent deposit.
/// Withdrawals for an address are only consumed from this account.
pub const LINKED_ACCOUNTS: Map<&Addr, RemoteAddress> = Map::new("linked_accounts");

/// Nonce attached to the next outgoing message
pub const OUTGOING_NONCE: Item<u64> = Item::new("outgoing_nonce");

/// Key: local→remote message hash, Value: deposit and its cancellation state
pub const DEPOSITS: Map<&[u8], DepositRecord> = Map::new("deposits");

/// Key: asset key (denom or CW20 address), Value: custodied amount
pub const LOCKED_BALANCES: Map<&str, Uint128> = Map::new("locked_balances");
