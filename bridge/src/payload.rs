//! Payload layouts exchanged with the remote domain.
//!
//! Inbound payloads start with a tag selecting the handler
//! (`ADD_ASSET`, `REMOVE_ASSET`, `WITHDRAWAL`); outbound payloads are
//! addressed by recipient and need no tag.

use common::hash::local_address_key;
use common::messaging::{word, ADD_ASSET, REMOVE_ASSET, WITHDRAWAL};
use common::RemoteAddress;
use cosmwasm_std::{Addr, Uint128, Uint256};

/// `[ADD_ASSET, ticker, asset_id]`
pub fn add_asset(ticker: u64, asset_id: Uint128) -> Vec<Uint256> {
    vec![word(ADD_ASSET), word(ticker), word(asset_id)]
}

/// `[REMOVE_ASSET, ticker, asset_id]`
pub fn remove_asset(ticker: u64, asset_id: Uint128) -> Vec<Uint256> {
    vec![word(REMOVE_ASSET), word(ticker), word(asset_id)]
}

/// `[WITHDRAWAL, recipient, ticker, amount, request_id]`
pub fn withdrawal(recipient: &Addr, ticker: u64, amount: Uint128, request_id: u64) -> Vec<Uint256> {
    vec![
        word(WITHDRAWAL),
        local_address_key(recipient),
        word(ticker),
        word(amount),
        word(request_id),
    ]
}

/// `[depositor, ticker, amount]`, sent to the remote recipient.
pub fn deposit(depositor: &Addr, ticker: u64, amount: Uint128) -> Vec<Uint256> {
    vec![local_address_key(depositor), word(ticker), word(amount)]
}

/// `[remote_account, request_id]`, sent to the withdrawal request contract.
pub fn withdrawal_fulfilled(remote_account: RemoteAddress, request_id: u64) -> Vec<Uint256> {
    vec![remote_account, word(request_id)]
}
