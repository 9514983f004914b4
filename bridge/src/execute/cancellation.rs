//! Two-phase deposit cancellation.
//!
//! The deposit is located by recomputing its message hash with the caller
//! as depositor, so a caller can only ever reach their own deposits.

use common::hash::{bytes32_to_hex, local_to_remote_hash};
use common::{MessagingExecuteMsg, RemoteAddress};
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::unlock;
use crate::payload;
use crate::state::{CONFIG, DEPOSITS, DEPOSIT_CANCEL_DELAY};

/// Start cancelling one of the caller's deposits.
pub fn execute_request_deposit_cancellation(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    remote_recipient: RemoteAddress,
    ticker: u64,
    amount: Uint128,
    nonce: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let payload = payload::deposit(&info.sender, ticker, amount);
    let message_hash = local_to_remote_hash(&env.contract.address, remote_recipient, nonce, &payload);

    let mut record = DEPOSITS
        .may_load(deps.storage, message_hash.as_slice())?
        .ok_or(ContractError::NoMessageToCancel)?;
    record.request_cancellation(env.block.time)?;
    DEPOSITS.save(deps.storage, message_hash.as_slice(), &record)?;

    let start = MessagingExecuteMsg::StartCancellation {
        to_address: remote_recipient,
        payload,
        nonce,
    }
    .into_cosmos_msg(&config.messaging)?;

    Ok(Response::new()
        .add_message(start)
        .add_attribute("method", "deposit_cancel_requested")
        .add_attribute("depositor", info.sender)
        .add_attribute("message_hash", bytes32_to_hex(&message_hash))
        .add_attribute("nonce", nonce.to_string())
        .add_attribute(
            "reclaimable_at",
            env.block
                .time
                .plus_seconds(DEPOSIT_CANCEL_DELAY)
                .seconds()
                .to_string(),
        ))
}

/// Finish a cancellation and return the deposit to the caller.
pub fn execute_reclaim_cancelled_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    remote_recipient: RemoteAddress,
    ticker: u64,
    amount: Uint128,
    nonce: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let payload = payload::deposit(&info.sender, ticker, amount);
    let message_hash = local_to_remote_hash(&env.contract.address, remote_recipient, nonce, &payload);

    let mut record = DEPOSITS
        .may_load(deps.storage, message_hash.as_slice())?
        .ok_or(ContractError::NoMessageToCancel)?;
    record.reclaim(env.block.time, DEPOSIT_CANCEL_DELAY)?;
    DEPOSITS.save(deps.storage, message_hash.as_slice(), &record)?;

    let remaining = unlock(deps.storage, &record.asset, record.amount)?;

    let cancel = MessagingExecuteMsg::CancelMessage {
        to_address: remote_recipient,
        payload,
        nonce,
    }
    .into_cosmos_msg(&config.messaging)?;
    let refund = record.asset.transfer_msg(&info.sender, record.amount)?;

    Ok(Response::new()
        .add_message(cancel)
        .add_message(refund)
        .add_attribute("method", "deposit_reclaimed")
        .add_attribute("depositor", info.sender)
        .add_attribute("message_hash", bytes32_to_hex(&message_hash))
        .add_attribute("asset", record.asset.to_string())
        .add_attribute("amount", record.amount.to_string())
        .add_attribute("locked_balance", remaining.to_string()))
}
