//! Error types for the multisig admin contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller is not an admin")]
    NotAdmin,

    #[error("Unauthorized: only the proposer can cancel a transaction")]
    NotProposer,

    #[error("Unauthorized: only callable by the multisig itself")]
    NotSelf,

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    // ========================================================================
    // Proposal Errors
    // ========================================================================

    #[error("Transaction id already used: {tx_id}")]
    TransactionIdUsed { tx_id: u64 },

    #[error("Empty call batch")]
    EmptyCallBatch,

    #[error("Invalid call {index}: {reason}")]
    InvalidCall { index: usize, reason: String },

    #[error("Invalid unlock delay: {unlock_delay} seconds")]
    InvalidUnlockDelay { unlock_delay: u64 },

    #[error("Transaction not found: {tx_id}")]
    TransactionNotFound { tx_id: u64 },

    #[error("Transaction not approved by caller")]
    NotApproved,

    // ========================================================================
    // Execution Errors
    // ========================================================================

    #[error("Quorum not met: {approvals} of {quorum} approvals")]
    QuorumNotMet { approvals: u32, quorum: u32 },

    #[error("Not yet executable: {remaining_seconds} seconds remaining")]
    TimelockNotExpired { remaining_seconds: u64 },

    #[error("Insufficient balance: need {required}, have {available}")]
    InsufficientBalance {
        required: Uint128,
        available: Uint128,
    },

    #[error("Transaction already executed")]
    AlreadyExecuted,

    #[error("Transaction cancelled")]
    TransactionCancelled,

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },
}
