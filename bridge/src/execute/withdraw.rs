//! Withdrawal handlers.
//!
//! A withdrawal is only paid out against a `WITHDRAWAL` message the remote
//! domain addressed to this contract, consumed from the remote account the
//! recipient linked through their latest deposit.

use common::{AssetInfo, MessagingExecuteMsg};
use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::{next_nonce, unlock};
use crate::payload;
use crate::state::{Config, CONFIG, LINKED_ACCOUNTS, TOKEN_ADDRESSES};

/// Withdraw the native denom.
pub fn execute_withdraw_native(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
    request_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let asset = AssetInfo::native(&config.native_denom);
    let ticker = config.native_ticker;
    withdraw(deps, info, &config, ticker, asset, recipient, amount, request_id)
}

/// Withdraw a CW20-backed asset. The token address must be bound.
pub fn execute_withdraw_token(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    ticker: u64,
    amount: Uint128,
    request_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let token = TOKEN_ADDRESSES
        .may_load(deps.storage, ticker)?
        .ok_or(ContractError::TokenAddressNotSet { ticker })?;
    withdraw(
        deps,
        info,
        &config,
        ticker,
        AssetInfo::cw20(token),
        recipient,
        amount,
        request_id,
    )
}

#[allow(clippy::too_many_arguments)]
fn withdraw(
    deps: DepsMut,
    info: MessageInfo,
    config: &Config,
    ticker: u64,
    asset: AssetInfo,
    recipient: String,
    amount: Uint128,
    request_id: u64,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "withdrawal amount must be positive".to_string(),
        });
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    if info.sender != recipient {
        return Err(ContractError::NotWithdrawalRecipient);
    }

    let remote_account = LINKED_ACCOUNTS
        .may_load(deps.storage, &recipient)?
        .ok_or_else(|| ContractError::NoLinkedAccount {
            address: recipient.to_string(),
        })?;

    let remaining = unlock(deps.storage, &asset, amount)?;

    let consume = MessagingExecuteMsg::ConsumeMessageFromRemote {
        from_address: remote_account,
        payload: payload::withdrawal(&recipient, ticker, amount, request_id),
    }
    .into_cosmos_msg(&config.messaging)?;

    let mut response = Response::new()
        .add_message(consume)
        .add_message(asset.transfer_msg(&recipient, amount)?);

    // Fulfilment notice; skipped while no request contract is linked.
    if !config.withdrawal_remote_address.is_zero() {
        let nonce = next_nonce(deps.storage)?;
        let notify = MessagingExecuteMsg::SendMessageToRemote {
            to_address: config.withdrawal_remote_address,
            payload: payload::withdrawal_fulfilled(remote_account, request_id),
            nonce,
        }
        .into_cosmos_msg(&config.messaging)?;
        response = response
            .add_message(notify)
            .add_attribute("notify_nonce", nonce.to_string());
    }

    Ok(response
        .add_attribute("method", "withdrawal")
        .add_attribute("recipient", recipient)
        .add_attribute("remote_account", remote_account.to_string())
        .add_attribute("ticker", ticker.to_string())
        .add_attribute("asset", asset.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("locked_balance", remaining.to_string()))
}
