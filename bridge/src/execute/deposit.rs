//! Deposit handlers.
//!
//! Funds enter custody here and a deposit message is sent to the remote
//! recipient. Each deposit is recorded under its message hash so the
//! depositor can later cancel it if the remote side never picks it up.

use common::hash::{bytes32_to_hex, local_to_remote_hash};
use common::{AssetInfo, MessagingExecuteMsg, RemoteAddress};
use cosmwasm_std::{
    to_json_binary, Addr, DepsMut, Env, MessageInfo, Response, Storage, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::execute::{ensure_registered, lock, next_nonce};
use crate::payload;
use crate::state::{
    CancellationStatus, Config, DepositRecord, CONFIG, DEPOSITS, LINKED_ACCOUNTS, TOKEN_ADDRESSES,
};

/// Execute handler for depositing the native denom attached as funds.
pub fn execute_deposit_native(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    remote_recipient: RemoteAddress,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_registered(deps.storage, config.native_ticker)?;

    if remote_recipient.is_zero() {
        return Err(ContractError::ZeroAddress);
    }

    let amount = match info.funds.as_slice() {
        [] => return Err(ContractError::NoFundsSent),
        [coin] if coin.denom == config.native_denom => coin.amount,
        [_] => {
            return Err(ContractError::InvalidAmount {
                reason: format!("only {} is accepted", config.native_denom),
            })
        }
        _ => {
            return Err(ContractError::InvalidAmount {
                reason: "Only one token type allowed per transaction".to_string(),
            })
        }
    };
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "deposit amount must be positive".to_string(),
        });
    }

    let deposit = Deposit {
        depositor: info.sender,
        remote_recipient,
        ticker: config.native_ticker,
        asset: AssetInfo::native(&config.native_denom),
        amount,
    };
    record_deposit(deps.storage, &env, &config, deposit, Response::new())
}

/// Execute handler for depositing CW20 tokens.
///
/// The tokens are pulled with `TransferFrom`, so the caller must have
/// granted the bridge an allowance of at least `amount` beforehand.
pub fn execute_deposit_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    remote_recipient: RemoteAddress,
    ticker: u64,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_registered(deps.storage, ticker)?;
    let token = TOKEN_ADDRESSES
        .may_load(deps.storage, ticker)?
        .ok_or(ContractError::TokenAddressNotSet { ticker })?;

    if remote_recipient.is_zero() {
        return Err(ContractError::ZeroAddress);
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "deposit amount must be positive".to_string(),
        });
    }
    if !info.funds.is_empty() {
        return Err(ContractError::InvalidAmount {
            reason: "token deposits do not accept native funds".to_string(),
        });
    }

    let pull = WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    let deposit = Deposit {
        depositor: info.sender,
        remote_recipient,
        ticker,
        asset: AssetInfo::cw20(token),
        amount,
    };
    record_deposit(
        deps.storage,
        &env,
        &config,
        deposit,
        Response::new().add_message(pull),
    )
}

struct Deposit {
    depositor: Addr,
    remote_recipient: RemoteAddress,
    ticker: u64,
    asset: AssetInfo,
    amount: Uint128,
}

/// Shared tail of both deposit flows: custody bookkeeping, account link,
/// cancellation record and the outgoing message.
fn record_deposit(
    storage: &mut dyn Storage,
    env: &Env,
    config: &Config,
    deposit: Deposit,
    response: Response,
) -> Result<Response, ContractError> {
    let locked = lock(storage, &deposit.asset, deposit.amount)?;
    LINKED_ACCOUNTS.save(storage, &deposit.depositor, &deposit.remote_recipient)?;

    let nonce = next_nonce(storage)?;
    let payload = payload::deposit(&deposit.depositor, deposit.ticker, deposit.amount);
    let message_hash = local_to_remote_hash(
        &env.contract.address,
        deposit.remote_recipient,
        nonce,
        &payload,
    );

    DEPOSITS.save(
        storage,
        message_hash.as_slice(),
        &DepositRecord {
            depositor: deposit.depositor.clone(),
            remote_recipient: deposit.remote_recipient,
            ticker: deposit.ticker,
            asset: deposit.asset,
            amount: deposit.amount,
            nonce,
            deposited_at: env.block.time,
            status: CancellationStatus::None,
            requested_at: None,
        },
    )?;

    let send = MessagingExecuteMsg::SendMessageToRemote {
        to_address: deposit.remote_recipient,
        payload,
        nonce,
    }
    .into_cosmos_msg(&config.messaging)?;

    Ok(response
        .add_message(send)
        .add_attribute("method", "deposit")
        .add_attribute("sender", deposit.depositor)
        .add_attribute("remote_recipient", deposit.remote_recipient.to_string())
        .add_attribute("ticker", deposit.ticker.to_string())
        .add_attribute("amount", deposit.amount.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("message_hash", bytes32_to_hex(&message_hash))
        .add_attribute("locked_balance", locked.to_string()))
}
