//! Custody Bridge Contract - Asset Custody Between a CosmWasm Chain and a Remote Domain
//!
//! The contract holds native coins and CW20 tokens in custody while the
//! remote domain tracks the bridged balances. All cross-domain traffic goes
//! through an external messaging transport contract.
//!
//! # Asset Registry
//! Assets are registered and removed only against a matching message from
//! the remote asset registry, consumed in the same call.
//!
//! # Deposit Flow
//! 1. User deposits coins (attached funds) or tokens (cw20 allowance)
//! 2. Bridge records the deposit and sends it to the remote recipient
//! 3. If the remote side never picks it up, the depositor may request a
//!    cancellation and reclaim the funds after `DEPOSIT_CANCEL_DELAY`
//!
//! # Withdrawal Flow
//! 1. Remote domain sends a `WITHDRAWAL` message addressed to this contract
//! 2. The recipient calls `WithdrawNative` / `WithdrawToken`
//! 3. Bridge consumes the message, pays out, and notifies the remote
//!    withdrawal request contract

mod asset_list;
pub mod contract;
pub mod error;
mod execute;
pub mod msg;
pub mod payload;
mod query;
pub mod state;

pub use crate::error::ContractError;
