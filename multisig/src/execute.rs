//! Execute handlers for the multisig admin contract.

use std::collections::BTreeSet;

use cosmwasm_std::{Addr, BankMsg, Coin, DepsMut, Env, MessageInfo, Response, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{Call, Config, Transaction, TxStatus, APPROVALS, CONFIG, TRANSACTIONS};

fn load_admin_config(storage: &dyn Storage, sender: &Addr) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if !config.is_admin(sender) {
        return Err(ContractError::NotAdmin);
    }
    Ok(config)
}

fn load_transaction(storage: &dyn Storage, tx_id: u64) -> Result<Transaction, ContractError> {
    TRANSACTIONS
        .may_load(storage, tx_id)?
        .ok_or(ContractError::TransactionNotFound { tx_id })
}

// ============================================================================
// Proposal
// ============================================================================

pub fn execute_propose(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    tx_id: u64,
    calls: Vec<Call>,
    unlock_delay: u64,
) -> Result<Response, ContractError> {
    load_admin_config(deps.storage, &info.sender)?;

    if TRANSACTIONS.has(deps.storage, tx_id) {
        return Err(ContractError::TransactionIdUsed { tx_id });
    }
    if calls.is_empty() {
        return Err(ContractError::EmptyCallBatch);
    }

    let mut validated = Vec::with_capacity(calls.len());
    for (index, call) in calls.into_iter().enumerate() {
        let target = deps
            .api
            .addr_validate(&call.target)
            .map_err(|e| ContractError::InvalidCall {
                index,
                reason: e.to_string(),
            })?;
        if call.is_transfer() && call.value.is_zero() {
            return Err(ContractError::InvalidCall {
                index,
                reason: "transfer without value".to_string(),
            });
        }
        validated.push(Call {
            target: target.to_string(),
            ..call
        });
    }

    let tx = Transaction {
        calls: validated,
        proposer: info.sender.clone(),
        proposed_at: env.block.time,
        unlock_delay,
        approvals: 0,
        status: TxStatus::Proposed,
    };
    let unlock_at = tx
        .unlock_at()
        .map_err(|_| ContractError::InvalidUnlockDelay { unlock_delay })?;
    TRANSACTIONS.save(deps.storage, tx_id, &tx)?;

    Ok(Response::new()
        .add_attribute("method", "propose")
        .add_attribute("tx_id", tx_id.to_string())
        .add_attribute("proposer", info.sender)
        .add_attribute("call_count", tx.calls.len().to_string())
        .add_attribute("unlock_at", unlock_at.seconds().to_string()))
}

pub fn execute_cancel(
    deps: DepsMut,
    info: MessageInfo,
    tx_id: u64,
) -> Result<Response, ContractError> {
    let mut tx = load_transaction(deps.storage, tx_id)?;
    if info.sender != tx.proposer {
        return Err(ContractError::NotProposer);
    }
    tx.ensure_pending()?;

    tx.status = TxStatus::Cancelled;
    TRANSACTIONS.save(deps.storage, tx_id, &tx)?;

    Ok(Response::new()
        .add_attribute("method", "cancel")
        .add_attribute("tx_id", tx_id.to_string()))
}

// ============================================================================
// Approvals
// ============================================================================

pub fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    tx_id: u64,
) -> Result<Response, ContractError> {
    load_admin_config(deps.storage, &info.sender)?;
    let mut tx = load_transaction(deps.storage, tx_id)?;
    tx.ensure_pending()?;

    let already_approved = APPROVALS.has(deps.storage, (tx_id, &info.sender));
    if !already_approved {
        APPROVALS.save(deps.storage, (tx_id, &info.sender), &true)?;
        tx.approvals += 1;
        TRANSACTIONS.save(deps.storage, tx_id, &tx)?;
    }

    Ok(Response::new()
        .add_attribute("method", "approve")
        .add_attribute("tx_id", tx_id.to_string())
        .add_attribute("admin", info.sender)
        .add_attribute("approvals", tx.approvals.to_string())
        .add_attribute("already_approved", already_approved.to_string()))
}

pub fn execute_revoke_approval(
    deps: DepsMut,
    info: MessageInfo,
    tx_id: u64,
) -> Result<Response, ContractError> {
    load_admin_config(deps.storage, &info.sender)?;
    let mut tx = load_transaction(deps.storage, tx_id)?;
    tx.ensure_pending()?;

    if !APPROVALS.has(deps.storage, (tx_id, &info.sender)) {
        return Err(ContractError::NotApproved);
    }
    APPROVALS.remove(deps.storage, (tx_id, &info.sender));
    tx.approvals -= 1;
    TRANSACTIONS.save(deps.storage, tx_id, &tx)?;

    Ok(Response::new()
        .add_attribute("method", "revoke_approval")
        .add_attribute("tx_id", tx_id.to_string())
        .add_attribute("admin", info.sender)
        .add_attribute("approvals", tx.approvals.to_string()))
}

// ============================================================================
// Execution
// ============================================================================

/// Execute an approved, unlocked transaction.
///
/// Funds attached to this call are already part of the contract balance
/// when the check runs.
pub fn execute_execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    tx_id: u64,
) -> Result<Response, ContractError> {
    let config = load_admin_config(deps.storage, &info.sender)?;
    let mut tx = load_transaction(deps.storage, tx_id)?;

    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.native_denom)?;
    tx.check_executable(env.block.time, config.quorum, balance.amount)?;

    tx.status = TxStatus::Executed;
    TRANSACTIONS.save(deps.storage, tx_id, &tx)?;

    let messages: Vec<_> = tx
        .calls
        .iter()
        .map(|call| call.to_cosmos_msg(&config.native_denom))
        .collect();

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "execute")
        .add_attribute("tx_id", tx_id.to_string())
        .add_attribute("executor", info.sender)
        .add_attribute("call_count", tx.calls.len().to_string()))
}

/// Self-call only: pay out native funds held by the multisig.
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::NotSelf);
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "withdraw amount must be positive".to_string(),
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let to = deps.api.addr_validate(&to)?;

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: to.to_string(),
            amount: vec![Coin {
                denom: config.native_denom,
                amount,
            }],
        })
        .add_attribute("method", "withdraw")
        .add_attribute("to", to)
        .add_attribute("amount", amount.to_string()))
}

/// Admins must be non-empty and distinct; quorum within `1..=admins`.
pub(crate) fn validate_admins(admins: &[Addr], quorum: u32) -> Result<(), ContractError> {
    if admins.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "at least one admin required".to_string(),
        });
    }
    let distinct: BTreeSet<_> = admins.iter().collect();
    if distinct.len() != admins.len() {
        return Err(ContractError::InvalidConfig {
            reason: "duplicate admin".to_string(),
        });
    }
    if quorum == 0 || quorum as usize > admins.len() {
        return Err(ContractError::InvalidConfig {
            reason: format!("quorum must be between 1 and {}", admins.len()),
        });
    }
    Ok(())
}
