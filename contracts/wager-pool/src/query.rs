use cosmwasm_std::{to_json_binary, Binary, Deps, StdError};
use duel_wager_common::format_odds;

use crate::error::ContractError;
use crate::msg::{CurrentBetsResponse, WagerResponse, WinnerResponse};
use crate::state::{CONFIG, LAST_WINNER, ROUND, WAGERS};

pub fn query_config(deps: Deps) -> Result<Binary, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(to_json_binary(&config)?)
}

pub fn query_round(deps: Deps) -> Result<Binary, ContractError> {
    let round = ROUND.load(deps.storage)?;
    Ok(to_json_binary(&round)?)
}

pub fn query_bets_allowed(deps: Deps) -> Result<Binary, ContractError> {
    let round = ROUND.load(deps.storage)?;
    Ok(to_json_binary(&round.is_open())?)
}

/// Whether `address` has wagered in the current round.
pub fn query_has_wagered(deps: Deps, address: String) -> Result<Binary, ContractError> {
    let addr = deps.api.addr_validate(&address)?;
    let round = ROUND.load(deps.storage)?;
    let wagered = WAGERS.has(deps.storage, (round.round_id, &addr));
    Ok(to_json_binary(&wagered)?)
}

pub fn query_wager(deps: Deps, address: String) -> Result<Binary, ContractError> {
    let addr = deps.api.addr_validate(&address)?;
    let round = ROUND.load(deps.storage)?;
    let wager = WAGERS
        .may_load(deps.storage, (round.round_id, &addr))?
        .map(|side| WagerResponse {
            round_id: round.round_id,
            outcome: round.outcome_name(side).to_string(),
        });
    Ok(to_json_binary(&wager)?)
}

pub fn query_winner(deps: Deps) -> Result<Binary, ContractError> {
    let winner = LAST_WINNER
        .may_load(deps.storage)?
        .ok_or(ContractError::WinnerNotPicked)?;
    Ok(to_json_binary(&WinnerResponse { winner })?)
}

/// Outcome names with their odds. Only available while betting is open.
pub fn query_current_bets(deps: Deps) -> Result<Binary, ContractError> {
    let round = ROUND.load(deps.storage)?;
    if !round.is_open() {
        return Err(ContractError::BettingClosed);
    }

    let odds_a = format_odds(round.count_a, round.count_b).ok_or_else(zero_count_err)?;
    let odds_b = format_odds(round.count_b, round.count_a).ok_or_else(zero_count_err)?;

    Ok(to_json_binary(&CurrentBetsResponse {
        outcome_a: round.outcome_a,
        odds_a,
        outcome_b: round.outcome_b,
        odds_b,
    })?)
}

/// Open rounds are seeded with one wager per side, so neither count can be zero.
fn zero_count_err() -> ContractError {
    StdError::generic_err("invariant violated: open round has a zero outcome count").into()
}
