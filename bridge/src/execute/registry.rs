//! Asset registry handlers.
//!
//! Registration and deregistration each consume exactly one message from the
//! remote asset registry, dispatched in the same call. If the transport has
//! no matching message the whole call reverts, so local state only changes
//! when the remote side authorized it.

use common::MessagingExecuteMsg;
use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::asset_list;
use crate::error::ContractError;
use crate::execute::ensure_registered;
use crate::payload;
use crate::state::{ASSET_IDS, ASSET_LIST, CONFIG, OWNER, TOKEN_ADDRESSES};

/// Register `ticker` under `asset_id` (owner only).
pub fn execute_register_asset(
    deps: DepsMut,
    info: MessageInfo,
    ticker: u64,
    asset_id: Uint128,
) -> Result<Response, ContractError> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    if asset_id.is_zero() {
        return Err(ContractError::InvalidAssetId);
    }

    let mut list = ASSET_LIST.load(deps.storage)?;
    if ASSET_IDS.has(deps.storage, ticker) || !asset_list::insert(&mut list, ticker) {
        return Err(ContractError::AssetAlreadyRegistered { ticker });
    }
    ASSET_LIST.save(deps.storage, &list)?;
    ASSET_IDS.save(deps.storage, ticker, &asset_id)?;

    let config = CONFIG.load(deps.storage)?;
    let consume = MessagingExecuteMsg::ConsumeMessageFromRemote {
        from_address: config.asset_remote_address,
        payload: payload::add_asset(ticker, asset_id),
    }
    .into_cosmos_msg(&config.messaging)?;

    Ok(Response::new()
        .add_message(consume)
        .add_attribute("method", "asset_added")
        .add_attribute("ticker", ticker.to_string())
        .add_attribute("asset_id", asset_id.to_string())
        .add_attribute("list_length", list.len().to_string()))
}

/// Deregister `ticker` (owner only). The caller must name the id the
/// ticker was registered under.
pub fn execute_deregister_asset(
    deps: DepsMut,
    info: MessageInfo,
    ticker: u64,
    asset_id: Uint128,
) -> Result<Response, ContractError> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let registered_id = ensure_registered(deps.storage, ticker)?;
    if registered_id != asset_id {
        return Err(ContractError::AssetIdMismatch {
            ticker,
            expected: registered_id,
            got: asset_id,
        });
    }

    let mut list = ASSET_LIST.load(deps.storage)?;
    let index =
        asset_list::swap_remove(&mut list, ticker).ok_or(ContractError::NonRegisteredAsset { ticker })?;
    ASSET_LIST.save(deps.storage, &list)?;
    ASSET_IDS.remove(deps.storage, ticker);
    TOKEN_ADDRESSES.remove(deps.storage, ticker);

    let config = CONFIG.load(deps.storage)?;
    let consume = MessagingExecuteMsg::ConsumeMessageFromRemote {
        from_address: config.asset_remote_address,
        payload: payload::remove_asset(ticker, asset_id),
    }
    .into_cosmos_msg(&config.messaging)?;

    Ok(Response::new()
        .add_message(consume)
        .add_attribute("method", "asset_removed")
        .add_attribute("ticker", ticker.to_string())
        .add_attribute("asset_id", asset_id.to_string())
        .add_attribute("index", index.to_string()))
}

/// Bind the CW20 contract backing `ticker`. Write-once.
pub fn execute_set_token_address(
    deps: DepsMut,
    info: MessageInfo,
    ticker: u64,
    token: String,
) -> Result<Response, ContractError> {
    OWNER.assert_owner(deps.storage, &info.sender)?;
    ensure_registered(deps.storage, ticker)?;

    if token.trim().is_empty() {
        return Err(ContractError::ZeroAddress);
    }
    let token_addr = deps.api.addr_validate(&token)?;

    if TOKEN_ADDRESSES.has(deps.storage, ticker) {
        return Err(ContractError::TokenAddressAlreadySet { ticker });
    }
    TOKEN_ADDRESSES.save(deps.storage, ticker, &token_addr)?;

    Ok(Response::new()
        .add_attribute("method", "token_address_changed")
        .add_attribute("ticker", ticker.to_string())
        .add_attribute("token", token_addr))
}
