use common::RemoteAddress;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint256;

#[cw_serde]
pub struct InstantiateMsg {
    /// Seconds a sender must wait between starting and finishing a cancellation
    pub cancellation_delay: u64,
}

/// Accepts the transport interface (`common::MessagingExecuteMsg` has the
/// same JSON shape) plus the test hooks.
#[cw_serde]
pub enum ExecuteMsg {
    SendMessageToRemote {
        to_address: RemoteAddress,
        payload: Vec<Uint256>,
        nonce: u64,
    },
    ConsumeMessageFromRemote {
        from_address: RemoteAddress,
        payload: Vec<Uint256>,
    },
    StartCancellation {
        to_address: RemoteAddress,
        payload: Vec<Uint256>,
        nonce: u64,
    },
    CancelMessage {
        to_address: RemoteAddress,
        payload: Vec<Uint256>,
        nonce: u64,
    },

    /// Test hook: the remote domain sends `payload` to `to_address`
    AddRemoteToLocalMessage {
        from_address: RemoteAddress,
        to_address: String,
        payload: Vec<Uint256>,
    },
    /// Test hook: the remote domain processes a message `from_address` sent
    ConsumeLocalToRemote {
        from_address: String,
        to_address: RemoteAddress,
        payload: Vec<Uint256>,
        nonce: u64,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// How often the send and consume primitives were invoked
    #[returns(CountersResponse)]
    Counters {},
    #[returns(CountResponse)]
    RemoteToLocalCount {
        from_address: RemoteAddress,
        to_address: String,
        payload: Vec<Uint256>,
    },
    #[returns(CountResponse)]
    LocalToRemoteCount {
        from_address: String,
        to_address: RemoteAddress,
        payload: Vec<Uint256>,
        nonce: u64,
    },
}

#[cw_serde]
#[derive(Default)]
pub struct CountersResponse {
    pub sent: u64,
    pub consumed: u64,
    pub cancelled: u64,
}

#[cw_serde]
pub struct CountResponse {
    pub count: u64,
}
