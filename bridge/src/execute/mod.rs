//! Execute handlers for the custody bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `registry` - Asset registration, deregistration and token binding
//! - `deposit` - Native and CW20 deposits to the remote domain
//! - `withdraw` - Withdrawals authorized by remote messages
//! - `cancellation` - Two-phase deposit cancellation and reclaim
//! - `admin` - Linked remote addresses, fund transfers, ownership

mod admin;
mod cancellation;
mod deposit;
mod registry;
mod withdraw;

pub use admin::*;
pub use cancellation::*;
pub use deposit::*;
pub use registry::*;
pub use withdraw::*;

use common::AssetInfo;
use cosmwasm_std::{StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{ASSET_IDS, LOCKED_BALANCES, OUTGOING_NONCE};

/// Fails with `NonRegisteredAsset` unless `ticker` has a non-zero id.
pub(crate) fn ensure_registered(storage: &dyn Storage, ticker: u64) -> Result<Uint128, ContractError> {
    match ASSET_IDS.may_load(storage, ticker)? {
        Some(id) if !id.is_zero() => Ok(id),
        _ => Err(ContractError::NonRegisteredAsset { ticker }),
    }
}

/// Allocate the nonce for the next outgoing message.
pub(crate) fn next_nonce(storage: &mut dyn Storage) -> StdResult<u64> {
    let nonce = OUTGOING_NONCE.load(storage)?;
    OUTGOING_NONCE.save(storage, &(nonce + 1))?;
    Ok(nonce)
}

/// Add `amount` to the custodied balance of `asset`.
pub(crate) fn lock(storage: &mut dyn Storage, asset: &AssetInfo, amount: Uint128) -> StdResult<Uint128> {
    LOCKED_BALANCES.update(storage, &asset.key(), |locked| -> StdResult<_> {
        Ok(locked.unwrap_or_default().checked_add(amount)?)
    })
}

/// Release `amount` of `asset` from custody; fails if less is locked.
pub(crate) fn unlock(
    storage: &mut dyn Storage,
    asset: &AssetInfo,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let key = asset.key();
    let locked = LOCKED_BALANCES.may_load(storage, &key)?.unwrap_or_default();
    let remaining = locked
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientLiquidity { asset: key.clone() })?;
    LOCKED_BALANCES.save(storage, &key, &remaining)?;
    Ok(remaining)
}
