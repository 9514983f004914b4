//! Multisig Admin Contract - Quorum-Gated, Timelocked Privileged Calls
//!
//! Installed as the owner of the custody bridge. Every privileged bridge
//! operation becomes a transaction of one or more calls that
//!
//! 1. an admin proposes with an unlock delay,
//! 2. at least `quorum` distinct admins approve,
//! 3. any admin executes once the delay has elapsed.
//!
//! The calls of a transaction are dispatched in order as messages of the
//! executing call, so a failure in any of them reverts the whole batch.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
