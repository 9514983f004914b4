//! State definitions for the multisig admin contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    Addr, BankMsg, Binary, Coin, CosmosMsg, StdError, StdResult, Timestamp, Uint128, Uint64,
    WasmMsg,
};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

// ============================================================================
// Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    pub admins: Vec<Addr>,
    /// Distinct approvals required before execution
    pub quorum: u32,
    /// Denom moved by call values and `Withdraw`
    pub native_denom: String,
}

impl Config {
    pub fn is_admin(&self, address: &Addr) -> bool {
        self.admins.contains(address)
    }
}

// ============================================================================
// Transactions
// ============================================================================

/// One call of a batch. An empty `msg` is a plain transfer of `value` to
/// `target`; otherwise `msg` is executed on the `target` contract with
/// `value` attached as funds.
#[cw_serde]
pub struct Call {
    pub target: String,
    pub msg: Binary,
    pub value: Uint128,
}

impl Call {
    pub fn is_transfer(&self) -> bool {
        self.msg.is_empty()
    }

    pub fn to_cosmos_msg(&self, denom: &str) -> CosmosMsg {
        let funds = if self.value.is_zero() {
            vec![]
        } else {
            vec![Coin {
                denom: denom.to_string(),
                amount: self.value,
            }]
        };

        if self.is_transfer() {
            CosmosMsg::Bank(BankMsg::Send {
                to_address: self.target.clone(),
                amount: funds,
            })
        } else {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: self.target.clone(),
                msg: self.msg.clone(),
                funds,
            })
        }
    }
}

#[cw_serde]
pub enum TxStatus {
    Proposed,
    Executed,
    Cancelled,
}

#[cw_serde]
pub struct Transaction {
    pub calls: Vec<Call>,
    pub proposer: Addr,
    pub proposed_at: Timestamp,
    pub unlock_delay: u64,
    pub approvals: u32,
    pub status: TxStatus,
}

impl Transaction {
    /// Fails when `proposed_at + unlock_delay` does not fit a timestamp.
    pub fn unlock_at(&self) -> StdResult<Timestamp> {
        let delay = Uint64::new(self.unlock_delay).checked_mul(Uint64::new(1_000_000_000))?;
        let nanos = Uint64::new(self.proposed_at.nanos()).checked_add(delay)?;
        Ok(Timestamp::from_nanos(nanos.u64()))
    }

    /// Native value moved by all calls together.
    pub fn total_value(&self) -> StdResult<Uint128> {
        self.calls
            .iter()
            .try_fold(Uint128::zero(), |total, call| {
                total.checked_add(call.value).map_err(StdError::from)
            })
    }

    /// Fails while the transaction is not open for approval changes.
    pub fn ensure_pending(&self) -> Result<(), ContractError> {
        match self.status {
            TxStatus::Proposed => Ok(()),
            TxStatus::Executed => Err(ContractError::AlreadyExecuted),
            TxStatus::Cancelled => Err(ContractError::TransactionCancelled),
        }
    }

    /// Executability at `now` with `available` native balance, reporting the
    /// first unmet condition.
    pub fn check_executable(
        &self,
        now: Timestamp,
        quorum: u32,
        available: Uint128,
    ) -> Result<(), ContractError> {
        self.ensure_pending()?;

        if self.approvals < quorum {
            return Err(ContractError::QuorumNotMet {
                approvals: self.approvals,
                quorum,
            });
        }

        let unlock_at = self.unlock_at()?;
        if now < unlock_at {
            return Err(ContractError::TimelockNotExpired {
                remaining_seconds: unlock_at.seconds() - now.seconds(),
            });
        }

        let required = self.total_value()?;
        if available < required {
            return Err(ContractError::InsufficientBalance {
                required,
                available,
            });
        }

        Ok(())
    }
}

// ============================================================================
// Constants
// ============================================================================

pub const CONTRACT_NAME: &str = "crates.io:multisig-admin";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Key: tx_id
pub const TRANSACTIONS: Map<u64, Transaction> = Map::new("transactions");

/// Key: (tx_id, admin); present while the admin's approval stands
pub const APPROVALS: Map<(u64, &Addr), bool> = Map::new("approvals");
