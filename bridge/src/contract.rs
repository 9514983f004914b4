//! Custody Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_deposit_native, execute_deposit_token, execute_deregister_asset,
    execute_reclaim_cancelled_deposit, execute_register_asset,
    execute_request_deposit_cancellation, execute_set_asset_remote_address,
    execute_set_token_address, execute_set_withdrawal_remote_address, execute_transfer_funds,
    execute_transfer_ownership, execute_withdraw_native, execute_withdraw_token,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_asset, query_asset_list, query_config, query_current_nonce, query_deposit_cancellation,
    query_linked_account, query_locked_balance, query_owner,
};
use crate::state::{
    Config, ASSET_LIST, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, OUTGOING_NONCE, OWNER,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.messaging.trim().is_empty() {
        return Err(ContractError::MessagingAddressMissing);
    }
    if msg.native_denom.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "native denom must not be empty".to_string(),
        });
    }

    let owner = deps.api.addr_validate(&msg.owner)?;
    let messaging = deps.api.addr_validate(&msg.messaging)?;

    let config = Config {
        messaging,
        native_denom: msg.native_denom,
        native_ticker: msg.native_ticker,
        asset_remote_address: msg.asset_remote_address,
        withdrawal_remote_address: msg.withdrawal_remote_address,
    };
    CONFIG.save(deps.storage, &config)?;
    OWNER.initialize(deps.storage, &owner)?;

    ASSET_LIST.save(deps.storage, &vec![])?;
    OUTGOING_NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("messaging", config.messaging)
        .add_attribute("native_denom", config.native_denom)
        .add_attribute("native_ticker", config.native_ticker.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Asset registry
        ExecuteMsg::RegisterAsset { ticker, asset_id } => {
            execute_register_asset(deps, info, ticker, asset_id)
        }
        ExecuteMsg::DeregisterAsset { ticker, asset_id } => {
            execute_deregister_asset(deps, info, ticker, asset_id)
        }
        ExecuteMsg::SetTokenAddress { ticker, token } => {
            execute_set_token_address(deps, info, ticker, token)
        }

        // Deposits
        ExecuteMsg::DepositNative { remote_recipient } => {
            execute_deposit_native(deps, env, info, remote_recipient)
        }
        ExecuteMsg::DepositToken {
            remote_recipient,
            ticker,
            amount,
        } => execute_deposit_token(deps, env, info, remote_recipient, ticker, amount),

        // Withdrawals
        ExecuteMsg::WithdrawNative {
            recipient,
            amount,
            request_id,
        } => execute_withdraw_native(deps, info, recipient, amount, request_id),
        ExecuteMsg::WithdrawToken {
            recipient,
            ticker,
            amount,
            request_id,
        } => execute_withdraw_token(deps, info, recipient, ticker, amount, request_id),

        // Deposit cancellation
        ExecuteMsg::RequestDepositCancellation {
            remote_recipient,
            ticker,
            amount,
            nonce,
        } => execute_request_deposit_cancellation(
            deps,
            env,
            info,
            remote_recipient,
            ticker,
            amount,
            nonce,
        ),
        ExecuteMsg::ReclaimCancelledDeposit {
            remote_recipient,
            ticker,
            amount,
            nonce,
        } => execute_reclaim_cancelled_deposit(
            deps,
            env,
            info,
            remote_recipient,
            ticker,
            amount,
            nonce,
        ),

        // Owner operations
        ExecuteMsg::SetAssetRemoteAddress { address } => {
            execute_set_asset_remote_address(deps, info, address)
        }
        ExecuteMsg::SetWithdrawalRemoteAddress { address } => {
            execute_set_withdrawal_remote_address(deps, info, address)
        }
        ExecuteMsg::TransferFunds {
            asset,
            recipient,
            amount,
        } => execute_transfer_funds(deps, info, asset, recipient, amount),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::CurrentNonce {} => to_json_binary(&query_current_nonce(deps)?),

        // Registry queries
        QueryMsg::AssetList {} => to_json_binary(&query_asset_list(deps)?),
        QueryMsg::Asset { ticker } => to_json_binary(&query_asset(deps, ticker)?),

        // Custody queries
        QueryMsg::LinkedAccount { address } => {
            to_json_binary(&query_linked_account(deps, address)?)
        }
        QueryMsg::LockedBalance { asset } => to_json_binary(&query_locked_balance(deps, asset)?),
        QueryMsg::DepositCancellation {
            depositor,
            remote_recipient,
            ticker,
            amount,
            nonce,
        } => to_json_binary(&query_deposit_cancellation(
            deps,
            env,
            depositor,
            remote_recipient,
            ticker,
            amount,
            nonce,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
