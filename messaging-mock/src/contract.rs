use common::hash::{bytes32_to_hex, local_to_remote_hash, remote_to_local_hash};
use common::RemoteAddress;
use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Storage, Uint256,
};
use cw2::set_contract_version;
use cw_storage_plus::Map;

use crate::error::ContractError;
use crate::msg::{CountResponse, CountersResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{
    CANCELLATIONS, CANCELLATION_DELAY, CONTRACT_NAME, CONTRACT_VERSION, COUNTERS,
    LOCAL_TO_REMOTE, REMOTE_TO_LOCAL,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    CANCELLATION_DELAY.save(deps.storage, &msg.cancellation_delay)?;
    COUNTERS.save(deps.storage, &CountersResponse::default())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("cancellation_delay", msg.cancellation_delay.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SendMessageToRemote {
            to_address,
            payload,
            nonce,
        } => {
            let hash = local_to_remote_hash(&info.sender, to_address, nonce, &payload);
            let count = increment(deps.storage, &LOCAL_TO_REMOTE, &hash)?;
            bump_counters(deps.storage, |c| c.sent += 1)?;
            Ok(message_response("send_message_to_remote", &hash, count))
        }
        ExecuteMsg::ConsumeMessageFromRemote {
            from_address,
            payload,
        } => {
            let hash = remote_to_local_hash(from_address, &info.sender, &payload);
            let count = decrement(deps.storage, &REMOTE_TO_LOCAL, &hash)
                .ok_or(ContractError::InvalidMessageToConsume)??;
            bump_counters(deps.storage, |c| c.consumed += 1)?;
            Ok(message_response("consume_message_from_remote", &hash, count))
        }
        ExecuteMsg::StartCancellation {
            to_address,
            payload,
            nonce,
        } => {
            let hash = local_to_remote_hash(&info.sender, to_address, nonce, &payload);
            if outstanding(deps.storage, &LOCAL_TO_REMOTE, &hash)? == 0 {
                return Err(ContractError::NoMessageToCancel);
            }
            CANCELLATIONS.save(deps.storage, hash.as_slice(), &env.block.time)?;
            Ok(Response::new()
                .add_attribute("action", "start_cancellation")
                .add_attribute("message_hash", bytes32_to_hex(&hash)))
        }
        ExecuteMsg::CancelMessage {
            to_address,
            payload,
            nonce,
        } => execute_cancel_message(deps, env, info.sender, to_address, payload, nonce),
        ExecuteMsg::AddRemoteToLocalMessage {
            from_address,
            to_address,
            payload,
        } => {
            let to_address = deps.api.addr_validate(&to_address)?;
            let hash = remote_to_local_hash(from_address, &to_address, &payload);
            let count = increment(deps.storage, &REMOTE_TO_LOCAL, &hash)?;
            Ok(message_response("add_remote_to_local_message", &hash, count))
        }
        ExecuteMsg::ConsumeLocalToRemote {
            from_address,
            to_address,
            payload,
            nonce,
        } => {
            let from_address = deps.api.addr_validate(&from_address)?;
            let hash = local_to_remote_hash(&from_address, to_address, nonce, &payload);
            let count = decrement(deps.storage, &LOCAL_TO_REMOTE, &hash)
                .ok_or(ContractError::InvalidMessageToConsume)??;
            Ok(message_response("consume_local_to_remote", &hash, count))
        }
    }
}

fn execute_cancel_message(
    deps: DepsMut,
    env: Env,
    sender: Addr,
    to_address: RemoteAddress,
    payload: Vec<Uint256>,
    nonce: u64,
) -> Result<Response, ContractError> {
    let hash = local_to_remote_hash(&sender, to_address, nonce, &payload);
    if outstanding(deps.storage, &LOCAL_TO_REMOTE, &hash)? == 0 {
        return Err(ContractError::NoMessageToCancel);
    }

    let requested_at = CANCELLATIONS
        .may_load(deps.storage, hash.as_slice())?
        .ok_or(ContractError::CancellationNotRequested)?;
    let delay = CANCELLATION_DELAY.load(deps.storage)?;
    let cancellable_at = requested_at.plus_seconds(delay);
    if env.block.time < cancellable_at {
        return Err(ContractError::CancellationNotAllowedYet {
            cancellable_at: cancellable_at.seconds(),
        });
    }

    let count = decrement(deps.storage, &LOCAL_TO_REMOTE, &hash)
        .ok_or(ContractError::NoMessageToCancel)??;
    CANCELLATIONS.remove(deps.storage, hash.as_slice());
    bump_counters(deps.storage, |c| c.cancelled += 1)?;

    Ok(message_response("cancel_message", &hash, count))
}

fn outstanding<'k>(
    storage: &dyn Storage,
    map: &Map<&'k [u8], u64>,
    hash: &'k [u8; 32],
) -> StdResult<u64> {
    Ok(map.may_load(storage, hash.as_slice())?.unwrap_or(0))
}

fn increment<'k>(
    storage: &mut dyn Storage,
    map: &Map<&'k [u8], u64>,
    hash: &'k [u8; 32],
) -> StdResult<u64> {
    let count = outstanding(storage, map, hash)? + 1;
    map.save(storage, hash.as_slice(), &count)?;
    Ok(count)
}

/// `None` when nothing is outstanding under `hash`.
fn decrement<'k>(
    storage: &mut dyn Storage,
    map: &Map<&'k [u8], u64>,
    hash: &'k [u8; 32],
) -> Option<StdResult<u64>> {
    let count = match outstanding(storage, map, hash) {
        Ok(0) => return None,
        Ok(count) => count - 1,
        Err(e) => return Some(Err(e)),
    };
    let saved = if count == 0 {
        map.remove(storage, hash.as_slice());
        Ok(())
    } else {
        map.save(storage, hash.as_slice(), &count)
    };
    Some(saved.map(|_| count))
}

fn bump_counters(storage: &mut dyn Storage, f: impl FnOnce(&mut CountersResponse)) -> StdResult<()> {
    let mut counters = COUNTERS.load(storage)?;
    f(&mut counters);
    COUNTERS.save(storage, &counters)
}

fn message_response(action: &str, hash: &[u8; 32], outstanding: u64) -> Response {
    Response::new()
        .add_attribute("action", action)
        .add_attribute("message_hash", bytes32_to_hex(hash))
        .add_attribute("outstanding", outstanding.to_string())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Counters {} => to_json_binary(&COUNTERS.load(deps.storage)?),
        QueryMsg::RemoteToLocalCount {
            from_address,
            to_address,
            payload,
        } => {
            let to_address = deps.api.addr_validate(&to_address)?;
            let hash = remote_to_local_hash(from_address, &to_address, &payload);
            let count = outstanding(deps.storage, &REMOTE_TO_LOCAL, &hash)?;
            to_json_binary(&CountResponse { count })
        }
        QueryMsg::LocalToRemoteCount {
            from_address,
            to_address,
            payload,
            nonce,
        } => {
            let from_address = deps.api.addr_validate(&from_address)?;
            let hash = local_to_remote_hash(&from_address, to_address, nonce, &payload);
            let count = outstanding(deps.storage, &LOCAL_TO_REMOTE, &hash)?;
            to_json_binary(&CountResponse { count })
        }
    }
}
