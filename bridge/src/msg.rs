//! Message types for the custody bridge contract

use common::{AssetInfo, RemoteAddress};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128};

use crate::state::CancellationStatus;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Initial owner of the privileged entry points
    pub owner: String,
    /// Messaging transport contract
    pub messaging: String,
    /// Bank denom custodied for the native asset
    pub native_denom: String,
    /// Ticker the native asset is registered under
    pub native_ticker: u64,
    /// Remote registry that authorizes asset additions and removals
    pub asset_remote_address: RemoteAddress,
    /// Remote contract notified of fulfilled withdrawals
    pub withdrawal_remote_address: RemoteAddress,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Asset Registry (owner only, each consumes one remote message)
    // ========================================================================
    /// Register `ticker` under the remote-assigned `asset_id`.
    /// Consumes `[ADD_ASSET, ticker, asset_id]` from the asset remote address.
    RegisterAsset { ticker: u64, asset_id: Uint128 },

    /// Deregister `ticker`. Consumes `[REMOVE_ASSET, ticker, asset_id]`.
    DeregisterAsset { ticker: u64, asset_id: Uint128 },

    /// Bind the CW20 contract backing `ticker`. Write-once.
    SetTokenAddress { ticker: u64, token: String },

    // ========================================================================
    // Deposits (permissionless)
    // ========================================================================
    /// Deposit the native denom attached as funds.
    DepositNative { remote_recipient: RemoteAddress },

    /// Deposit CW20 tokens; the caller must have granted an allowance.
    DepositToken {
        remote_recipient: RemoteAddress,
        ticker: u64,
        amount: Uint128,
    },

    // ========================================================================
    // Withdrawals (require a matching remote authorization)
    // ========================================================================
    WithdrawNative {
        recipient: String,
        amount: Uint128,
        request_id: u64,
    },

    WithdrawToken {
        recipient: String,
        ticker: u64,
        amount: Uint128,
        request_id: u64,
    },

    // ========================================================================
    // Deposit Cancellation (depositor only)
    // ========================================================================
    RequestDepositCancellation {
        remote_recipient: RemoteAddress,
        ticker: u64,
        amount: Uint128,
        nonce: u64,
    },

    ReclaimCancelledDeposit {
        remote_recipient: RemoteAddress,
        ticker: u64,
        amount: Uint128,
        nonce: u64,
    },

    // ========================================================================
    // Owner Operations
    // ========================================================================
    SetAssetRemoteAddress { address: RemoteAddress },

    SetWithdrawalRemoteAddress { address: RemoteAddress },

    /// Move custodied funds out of the bridge.
    TransferFunds {
        asset: AssetInfo,
        recipient: String,
        amount: Uint128,
    },

    TransferOwnership { new_owner: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(OwnerResponse)]
    Owner {},

    /// Registered tickers in registry order
    #[returns(AssetListResponse)]
    AssetList {},

    #[returns(AssetResponse)]
    Asset { ticker: u64 },

    #[returns(LinkedAccountResponse)]
    LinkedAccount { address: String },

    /// Cancellation state of one deposit message
    #[returns(DepositCancellationResponse)]
    DepositCancellation {
        depositor: String,
        remote_recipient: RemoteAddress,
        ticker: u64,
        amount: Uint128,
        nonce: u64,
    },

    #[returns(LockedBalanceResponse)]
    LockedBalance { asset: String },

    /// Nonce the next outgoing message will carry
    #[returns(NonceResponse)]
    CurrentNonce {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub messaging: Addr,
    pub native_denom: String,
    pub native_ticker: u64,
    pub asset_remote_address: RemoteAddress,
    pub withdrawal_remote_address: RemoteAddress,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct AssetListResponse {
    pub tickers: Vec<u64>,
}

#[cw_serde]
pub struct AssetResponse {
    pub ticker: u64,
    /// Zero when not registered
    pub asset_id: Uint128,
    pub token_address: Option<Addr>,
    pub registered: bool,
}

#[cw_serde]
pub struct LinkedAccountResponse {
    pub address: Addr,
    pub remote_account: Option<RemoteAddress>,
}

#[cw_serde]
pub struct DepositCancellationResponse {
    /// Message hash keying the deposit (hex)
    pub message_hash: String,
    pub found: bool,
    pub status: Option<CancellationStatus>,
    pub asset: Option<AssetInfo>,
    pub deposited_at: Option<Timestamp>,
    pub requested_at: Option<Timestamp>,
    /// Earliest reclaim time while a cancellation is pending
    pub reclaimable_at: Option<Timestamp>,
}

#[cw_serde]
pub struct LockedBalanceResponse {
    pub asset: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}
