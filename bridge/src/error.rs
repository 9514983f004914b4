//! Error types for the custody bridge contract
//!
//! Grouped the way callers should react to them: validation and
//! authorization errors need corrected input, timing errors may be retried
//! after the reported delay, transport errors surface from the messaging
//! contract itself and revert the whole call.

use common::OwnershipError;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error("Sender is not withdrawal recipient")]
    NotWithdrawalRecipient,

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Messaging address not provided")]
    MessagingAddressMissing,

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Zero address provided")]
    ZeroAddress,

    // ========================================================================
    // Asset Registry Errors
    // ========================================================================

    #[error("Asset already registered: {ticker}")]
    AssetAlreadyRegistered { ticker: u64 },

    #[error("Non-registered asset: {ticker}")]
    NonRegisteredAsset { ticker: u64 },

    #[error("Invalid asset id: must be non-zero")]
    InvalidAssetId,

    #[error("Asset id mismatch for {ticker}: registered {expected}, got {got}")]
    AssetIdMismatch {
        ticker: u64,
        expected: Uint128,
        got: Uint128,
    },

    #[error("Token address already set for asset {ticker}")]
    TokenAddressAlreadySet { ticker: u64 },

    #[error("Token address not set for asset {ticker}")]
    TokenAddressNotSet { ticker: u64 },

    // ========================================================================
    // Amount & Funds Errors
    // ========================================================================

    #[error("No funds sent")]
    NoFundsSent,

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Insufficient custody balance for {asset}")]
    InsufficientLiquidity { asset: String },

    // ========================================================================
    // Withdrawal Errors
    // ========================================================================

    #[error("No remote account linked to {address}")]
    NoLinkedAccount { address: String },

    // ========================================================================
    // Deposit Cancellation Errors
    // ========================================================================

    #[error("No message to cancel")]
    NoMessageToCancel,

    #[error("Cancellation already requested")]
    CancellationAlreadyRequested,

    #[error("Cancellation not requested")]
    CancellationNotRequested,

    #[error("Cancellation not allowed yet: {remaining_seconds} seconds remaining")]
    CancellationNotAllowedYet { remaining_seconds: u64 },
}
