use cosmwasm_std::{to_json_binary, DepsMut, Env, Event, MessageInfo, Response, StdError};
use duel_wager_common::select_side;
use duel_wager_common::types::{Phase, Side};

use crate::error::ContractError;
use crate::random::derive_randomness;
use crate::state::{CONFIG, LAST_WINNER, ROUND, WAGERS};

/// Open a new round between two outcomes. Admin only.
///
/// Both sides are seeded with one wager, and the round id advances so the
/// previous round's wagers no longer apply. The last winner is kept.
pub fn reset_bets(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    outcome_a: String,
    outcome_b: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can reset bets".to_string(),
        });
    }

    let mut round = ROUND.load(deps.storage)?;
    round.round_id += 1;
    round.phase = Phase::Open;
    round.outcome_a = outcome_a;
    round.outcome_b = outcome_b;
    round.count_a = 1;
    round.count_b = 1;
    ROUND.save(deps.storage, &round)?;

    Ok(Response::new()
        .add_attribute("action", "reset_bets")
        .add_attribute("round_id", round.round_id.to_string())
        .add_event(
            Event::new("wager_round_opened")
                .add_attribute("round_id", round.round_id.to_string())
                .add_attribute("outcome_a", &round.outcome_a)
                .add_attribute("outcome_b", &round.outcome_b)
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Place the caller's wager on one of the current outcomes.
///
/// Checks run in order: round open, outcome known, caller has not wagered.
pub fn bet(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    outcome: String,
) -> Result<Response, ContractError> {
    let mut round = ROUND.load(deps.storage)?;
    if !round.is_open() {
        return Err(ContractError::BettingClosed);
    }

    let side = round
        .side_of(&outcome)
        .ok_or_else(|| ContractError::UnknownOutcome {
            outcome: outcome.clone(),
        })?;

    let key = (round.round_id, &info.sender);
    if WAGERS.has(deps.storage, key) {
        return Err(ContractError::AlreadyWagered {
            address: info.sender.to_string(),
        });
    }

    match side {
        Side::A => round.count_a += 1,
        Side::B => round.count_b += 1,
    }
    WAGERS.save(deps.storage, key, &side)?;
    ROUND.save(deps.storage, &round)?;

    Ok(Response::new()
        .add_attribute("action", "bet")
        .add_attribute("bettor", info.sender.to_string())
        .add_attribute("outcome", &outcome)
        .add_event(
            Event::new("wager_placed")
                .add_attribute("round_id", round.round_id.to_string())
                .add_attribute("bettor", info.sender.to_string())
                .add_attribute("outcome", outcome)
                .add_attribute("side", side.as_str())
                .add_attribute("count_a", round.count_a.to_string())
                .add_attribute("count_b", round.count_b.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Close the round and draw a winner. Admin only.
///
/// The draw is weighted by wager counts: `P(A) = count_a / (count_a + count_b)`.
/// Picking again on a closed round redraws from the same counts.
/// Before any round has been opened there is nothing to pick from, so this is
/// rejected with `NoRoundOpened`, an extra check on top of the admin-only rule.
pub fn pick_winner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    entropy: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can pick the winner".to_string(),
        });
    }

    let mut round = ROUND.load(deps.storage)?;
    if round.phase == Phase::Uninitialized {
        return Err(ContractError::NoRoundOpened);
    }

    let entropy = entropy
        .map(|e| {
            hex::decode(e).map_err(|_| ContractError::InvalidHex {
                field: "entropy".to_string(),
            })
        })
        .transpose()?;

    let randomness = derive_randomness(&env, &round, entropy.as_deref());
    // counts are >= 1 once a round has been opened
    let side = select_side(&randomness, round.count_a, round.count_b).ok_or_else(|| {
        StdError::generic_err("invariant violated: opened round has no wagers to draw from")
    })?;
    let winner = round.outcome_name(side).to_string();

    round.phase = Phase::Closed;
    ROUND.save(deps.storage, &round)?;
    LAST_WINNER.save(deps.storage, &winner)?;

    Ok(Response::new()
        .set_data(to_json_binary(&winner)?)
        .add_attribute("action", "pick_winner")
        .add_attribute("winner", &winner)
        .add_event(
            Event::new("wager_winner_picked")
                .add_attribute("round_id", round.round_id.to_string())
                .add_attribute("winner", winner)
                .add_attribute("side", side.as_str())
                .add_attribute("count_a", round.count_a.to_string())
                .add_attribute("count_b", round.count_b.to_string())
                .add_attribute("randomness", hex::encode(randomness))
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}
