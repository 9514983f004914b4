//! Multisig Admin Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_approve, execute_cancel, execute_execute, execute_propose, execute_revoke_approval,
    execute_withdraw, validate_admins,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_all_tx_ids, query_can_execute, query_config, query_is_approved, query_transaction,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admins = msg
        .admins
        .iter()
        .map(|admin| deps.api.addr_validate(admin))
        .collect::<StdResult<Vec<_>>>()?;
    validate_admins(&admins, msg.quorum)?;

    if msg.native_denom.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "native denom must not be empty".to_string(),
        });
    }

    let config = Config {
        admins,
        quorum: msg.quorum,
        native_denom: msg.native_denom,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin_count", config.admins.len().to_string())
        .add_attribute("quorum", config.quorum.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Propose {
            tx_id,
            calls,
            unlock_delay,
        } => execute_propose(deps, env, info, tx_id, calls, unlock_delay),
        ExecuteMsg::Approve { tx_id } => execute_approve(deps, info, tx_id),
        ExecuteMsg::RevokeApproval { tx_id } => execute_revoke_approval(deps, info, tx_id),
        ExecuteMsg::Cancel { tx_id } => execute_cancel(deps, info, tx_id),
        ExecuteMsg::Execute { tx_id } => execute_execute(deps, env, info, tx_id),
        ExecuteMsg::Withdraw { to, amount } => execute_withdraw(deps, env, info, to, amount),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Transaction { tx_id } => to_json_binary(&query_transaction(deps, tx_id)?),
        QueryMsg::AllTxIds {} => to_json_binary(&query_all_tx_ids(deps)?),
        QueryMsg::IsApproved { tx_id, admin } => {
            to_json_binary(&query_is_approved(deps, tx_id, admin)?)
        }
        QueryMsg::CanExecute { tx_id, value } => {
            to_json_binary(&query_can_execute(deps, env, tx_id, value)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
