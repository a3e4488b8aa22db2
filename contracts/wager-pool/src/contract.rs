use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{PoolConfig, RoundInfo, CONFIG, ROUND};

const CONTRACT_NAME: &str = "crates.io:duel-wager-pool";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = match msg.admin {
        Some(addr) => deps.api.addr_validate(&addr)?,
        None => info.sender.clone(),
    };
    let config = PoolConfig { admin };
    CONFIG.save(deps.storage, &config)?;
    ROUND.save(deps.storage, &RoundInfo::uninitialized())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "wager-pool")
        .add_attribute("admin", config.admin.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::ResetBets {
            outcome_a,
            outcome_b,
        } => execute::reset_bets(deps, env, info, outcome_a, outcome_b),
        ExecuteMsg::Bet { outcome } => execute::bet(deps, env, info, outcome),
        ExecuteMsg::PickWinner { entropy } => execute::pick_winner(deps, env, info, entropy),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Round {} => query::query_round(deps),
        QueryMsg::BetsAllowed {} => query::query_bets_allowed(deps),
        QueryMsg::HasWagered { address } => query::query_has_wagered(deps, address),
        QueryMsg::Wager { address } => query::query_wager(deps, address),
        QueryMsg::Winner {} => query::query_winner(deps),
        QueryMsg::CurrentBets {} => query::query_current_bets(deps),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
