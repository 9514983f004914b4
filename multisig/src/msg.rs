//! Message types for the multisig admin contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128};

pub use crate::state::{Call, TxStatus};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Distinct admin addresses
    pub admins: Vec<String>,
    /// Approvals required, between 1 and the number of admins
    pub quorum: u32,
    /// Denom moved by call values and `Withdraw`
    pub native_denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Store a new batch under a caller-chosen, unused `tx_id`.
    Propose {
        tx_id: u64,
        calls: Vec<Call>,
        unlock_delay: u64,
    },
    /// Approving twice has no further effect.
    Approve { tx_id: u64 },
    /// Withdraw the caller's approval before execution.
    RevokeApproval { tx_id: u64 },
    /// Proposer only, before execution.
    Cancel { tx_id: u64 },
    /// Dispatch all calls in order. Attached funds count toward call values.
    Execute { tx_id: u64 },
    /// Send native funds held by the multisig. Only reachable through an
    /// executed transaction calling the multisig itself.
    Withdraw { to: String, amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(TransactionResponse)]
    Transaction { tx_id: u64 },

    #[returns(TxIdsResponse)]
    AllTxIds {},

    #[returns(IsApprovedResponse)]
    IsApproved { tx_id: u64, admin: String },

    /// Whether `Execute` would pass with `value` attached
    #[returns(CanExecuteResponse)]
    CanExecute { tx_id: u64, value: Uint128 },
}

#[cw_serde]
pub struct ConfigResponse {
    pub admins: Vec<Addr>,
    pub quorum: u32,
    pub native_denom: String,
}

#[cw_serde]
pub struct TransactionResponse {
    pub tx_id: u64,
    pub calls: Vec<Call>,
    pub proposer: Addr,
    pub proposed_at: Timestamp,
    pub unlock_at: Timestamp,
    pub approvals: u32,
    pub status: TxStatus,
}

#[cw_serde]
pub struct TxIdsResponse {
    pub tx_ids: Vec<u64>,
}

#[cw_serde]
pub struct IsApprovedResponse {
    pub approved: bool,
}

#[cw_serde]
pub struct CanExecuteResponse {
    pub can_execute: bool,
    /// First unmet condition when not executable
    pub reason: Option<String>,
}
