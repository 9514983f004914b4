//! Owner operations handlers.
//!
//! This module handles:
//! - Linked remote addresses (asset registry, withdrawal requests)
//! - Moving custodied funds
//! - Ownership transfer

use common::{AssetInfo, RemoteAddress};
use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{CONFIG, LOCKED_BALANCES, OWNER};

// ============================================================================
// Linked Remote Addresses
// ============================================================================

/// Point the registry at a new remote asset registry.
pub fn execute_set_asset_remote_address(
    deps: DepsMut,
    info: MessageInfo,
    address: RemoteAddress,
) -> Result<Response, ContractError> {
    OWNER.assert_owner(deps.storage, &info.sender)?;
    if address.is_zero() {
        return Err(ContractError::ZeroAddress);
    }

    let mut config = CONFIG.load(deps.storage)?;
    let previous = config.asset_remote_address;
    config.asset_remote_address = address;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "linked_remote_address_changed")
        .add_attribute("link", "asset")
        .add_attribute("previous", previous.to_string())
        .add_attribute("address", address.to_string()))
}

/// Point fulfilment notices at a new withdrawal request contract.
pub fn execute_set_withdrawal_remote_address(
    deps: DepsMut,
    info: MessageInfo,
    address: RemoteAddress,
) -> Result<Response, ContractError> {
    OWNER.assert_owner(deps.storage, &info.sender)?;
    if address.is_zero() {
        return Err(ContractError::ZeroAddress);
    }

    let mut config = CONFIG.load(deps.storage)?;
    let previous = config.withdrawal_remote_address;
    config.withdrawal_remote_address = address;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "linked_remote_address_changed")
        .add_attribute("link", "withdrawal")
        .add_attribute("previous", previous.to_string())
        .add_attribute("address", address.to_string()))
}

// ============================================================================
// Fund Transfer
// ============================================================================

/// Move funds held by the bridge.
///
/// The locked balance is reduced by at most what is tracked; funds that
/// reached the contract outside a deposit can be moved as well.
pub fn execute_transfer_funds(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "transfer amount must be positive".to_string(),
        });
    }
    let recipient_addr = deps.api.addr_validate(&recipient)?;
    if let AssetInfo::Cw20 { contract_addr } = &asset {
        deps.api.addr_validate(contract_addr.as_str())?;
    }

    let key = asset.key();
    let locked = LOCKED_BALANCES.may_load(deps.storage, &key)?.unwrap_or_default();
    let remaining = locked.saturating_sub(amount);
    LOCKED_BALANCES.save(deps.storage, &key, &remaining)?;

    Ok(Response::new()
        .add_message(asset.transfer_msg(&recipient_addr, amount)?)
        .add_attribute("method", "funds_transferred")
        .add_attribute("asset", key)
        .add_attribute("recipient", recipient_addr)
        .add_attribute("amount", amount.to_string())
        .add_attribute("locked_balance", remaining.to_string()))
}

// ============================================================================
// Ownership
// ============================================================================

/// Hand the owner capability to `new_owner`.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let new_owner = deps.api.addr_validate(&new_owner)?;
    let previous = OWNER.transfer(deps.storage, &info.sender, &new_owner)?;

    Ok(Response::new()
        .add_attribute("method", "ownership_transferred")
        .add_attribute("previous_owner", previous)
        .add_attribute("new_owner", new_owner))
}
