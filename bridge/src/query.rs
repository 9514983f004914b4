//! Query handlers for the custody bridge contract.

use common::hash::{bytes32_to_hex, local_to_remote_hash};
use common::RemoteAddress;
use cosmwasm_std::{Deps, Env, StdError, StdResult, Uint128};

use crate::msg::{
    AssetListResponse, AssetResponse, ConfigResponse, DepositCancellationResponse,
    LinkedAccountResponse, LockedBalanceResponse, NonceResponse, OwnerResponse,
};
use crate::payload;
use crate::state::{
    CancellationStatus, ASSET_IDS, ASSET_LIST, CONFIG, DEPOSITS, DEPOSIT_CANCEL_DELAY,
    LINKED_ACCOUNTS, LOCKED_BALANCES, OUTGOING_NONCE, OWNER, TOKEN_ADDRESSES,
};

// ============================================================================
// Core Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        messaging: config.messaging,
        native_denom: config.native_denom,
        native_ticker: config.native_ticker,
        asset_remote_address: config.asset_remote_address,
        withdrawal_remote_address: config.withdrawal_remote_address,
    })
}

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let owner = OWNER
        .get(deps.storage)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(OwnerResponse { owner })
}

/// Query the nonce the next outgoing message will carry.
pub fn query_current_nonce(deps: Deps) -> StdResult<NonceResponse> {
    let nonce = OUTGOING_NONCE.load(deps.storage)?;
    Ok(NonceResponse { nonce })
}

// ============================================================================
// Registry Queries
// ============================================================================

pub fn query_asset_list(deps: Deps) -> StdResult<AssetListResponse> {
    let tickers = ASSET_LIST.load(deps.storage)?;
    Ok(AssetListResponse { tickers })
}

pub fn query_asset(deps: Deps, ticker: u64) -> StdResult<AssetResponse> {
    let asset_id = ASSET_IDS.may_load(deps.storage, ticker)?.unwrap_or_default();
    let token_address = TOKEN_ADDRESSES.may_load(deps.storage, ticker)?;
    Ok(AssetResponse {
        ticker,
        asset_id,
        token_address,
        registered: !asset_id.is_zero(),
    })
}

// ============================================================================
// Custody Queries
// ============================================================================

pub fn query_linked_account(deps: Deps, address: String) -> StdResult<LinkedAccountResponse> {
    let address = deps.api.addr_validate(&address)?;
    let remote_account = LINKED_ACCOUNTS.may_load(deps.storage, &address)?;
    Ok(LinkedAccountResponse {
        address,
        remote_account,
    })
}

/// Query the custodied balance of a denom or CW20 address.
pub fn query_locked_balance(deps: Deps, asset: String) -> StdResult<LockedBalanceResponse> {
    let amount = LOCKED_BALANCES
        .may_load(deps.storage, &asset)?
        .unwrap_or(Uint128::zero());
    Ok(LockedBalanceResponse { asset, amount })
}

/// Look up a deposit by the fields that make up its message.
pub fn query_deposit_cancellation(
    deps: Deps,
    env: Env,
    depositor: String,
    remote_recipient: RemoteAddress,
    ticker: u64,
    amount: Uint128,
    nonce: u64,
) -> StdResult<DepositCancellationResponse> {
    let depositor = deps.api.addr_validate(&depositor)?;
    let payload = payload::deposit(&depositor, ticker, amount);
    let message_hash = local_to_remote_hash(&env.contract.address, remote_recipient, nonce, &payload);

    let record = DEPOSITS.may_load(deps.storage, message_hash.as_slice())?;
    let reclaimable_at = record.as_ref().and_then(|r| match (&r.status, r.requested_at) {
        (CancellationStatus::CancelRequested, Some(at)) => Some(at.plus_seconds(DEPOSIT_CANCEL_DELAY)),
        _ => None,
    });

    Ok(DepositCancellationResponse {
        message_hash: bytes32_to_hex(&message_hash),
        found: record.is_some(),
        status: record.as_ref().map(|r| r.status.clone()),
        asset: record.as_ref().map(|r| r.asset.clone()),
        deposited_at: record.as_ref().map(|r| r.deposited_at),
        requested_at: record.as_ref().and_then(|r| r.requested_at),
        reclaimable_at,
    })
}
