//! Cross-domain messaging transport interface.
//!
//! The transport is an external contract. The bridge only ever talks to it
//! through the four primitives below, dispatched as sub-messages of the
//! calling transaction; a failing primitive reverts the whole call.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, Uint256, WasmMsg};

/// Address on the remote domain (a field element).
pub type RemoteAddress = Uint256;

/// Payload tag: remote registry asks to register an asset.
pub const ADD_ASSET: u64 = 1;
/// Payload tag: remote registry asks to deregister an asset.
pub const REMOVE_ASSET: u64 = 2;
/// Payload tag: remote domain authorizes a withdrawal.
pub const WITHDRAWAL: u64 = 3;

/// Execute interface every transport implementation accepts.
#[cw_serde]
pub enum MessagingExecuteMsg {
    /// Fire-and-forget notification to the remote domain.
    SendMessageToRemote {
        to_address: RemoteAddress,
        payload: Vec<Uint256>,
        nonce: u64,
    },
    /// Consume an outstanding remote message addressed to the caller.
    /// Fails unless an exactly matching message exists; single use.
    ConsumeMessageFromRemote {
        from_address: RemoteAddress,
        payload: Vec<Uint256>,
    },
    /// First phase of cancelling a message the caller sent.
    StartCancellation {
        to_address: RemoteAddress,
        payload: Vec<Uint256>,
        nonce: u64,
    },
    /// Second phase: drop the message once the transport's window elapsed.
    CancelMessage {
        to_address: RemoteAddress,
        payload: Vec<Uint256>,
        nonce: u64,
    },
}

impl MessagingExecuteMsg {
    /// Wrap into a `WasmMsg` addressed to the transport contract.
    pub fn into_cosmos_msg(self, messaging: &Addr) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: messaging.to_string(),
            msg: to_json_binary(&self)?,
            funds: vec![],
        }))
    }
}

/// Convenience for building payload words.
pub fn word(value: impl Into<Uint256>) -> Uint256 {
    value.into()
}
