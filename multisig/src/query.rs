//! Query handlers for the multisig admin contract.

use cosmwasm_std::{Deps, Env, Order, StdError, StdResult, Uint128};

use crate::msg::{
    CanExecuteResponse, ConfigResponse, IsApprovedResponse, TransactionResponse, TxIdsResponse,
};
use crate::state::{APPROVALS, CONFIG, TRANSACTIONS};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admins: config.admins,
        quorum: config.quorum,
        native_denom: config.native_denom,
    })
}

pub fn query_transaction(deps: Deps, tx_id: u64) -> StdResult<TransactionResponse> {
    let tx = TRANSACTIONS
        .may_load(deps.storage, tx_id)?
        .ok_or_else(|| StdError::not_found(format!("transaction {}", tx_id)))?;
    Ok(TransactionResponse {
        tx_id,
        unlock_at: tx.unlock_at()?,
        calls: tx.calls,
        proposer: tx.proposer,
        proposed_at: tx.proposed_at,
        approvals: tx.approvals,
        status: tx.status,
    })
}

/// All proposed ids in ascending order, whatever their status.
pub fn query_all_tx_ids(deps: Deps) -> StdResult<TxIdsResponse> {
    let tx_ids = TRANSACTIONS
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    Ok(TxIdsResponse { tx_ids })
}

pub fn query_is_approved(deps: Deps, tx_id: u64, admin: String) -> StdResult<IsApprovedResponse> {
    let admin = deps.api.addr_validate(&admin)?;
    Ok(IsApprovedResponse {
        approved: APPROVALS.has(deps.storage, (tx_id, &admin)),
    })
}

/// Dry run of `Execute` with `value` attached.
pub fn query_can_execute(
    deps: Deps,
    env: Env,
    tx_id: u64,
    value: Uint128,
) -> StdResult<CanExecuteResponse> {
    let Some(tx) = TRANSACTIONS.may_load(deps.storage, tx_id)? else {
        return Ok(CanExecuteResponse {
            can_execute: false,
            reason: Some(format!("Transaction not found: {}", tx_id)),
        });
    };

    let config = CONFIG.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.native_denom)?;
    let available = balance.amount.checked_add(value)?;

    Ok(match tx.check_executable(env.block.time, config.quorum, available) {
        Ok(()) => CanExecuteResponse {
            can_execute: true,
            reason: None,
        },
        Err(e) => CanExecuteResponse {
            can_execute: false,
            reason: Some(e.to_string()),
        },
    })
}
