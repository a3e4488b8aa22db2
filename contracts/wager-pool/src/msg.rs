use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::state::{PoolConfig, RoundInfo};

#[cw_serde]
pub struct InstantiateMsg {
    /// Pool administrator. Defaults to the instantiating sender.
    pub admin: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Open a new round between two outcomes (admin only).
    ResetBets {
        outcome_a: String,
        outcome_b: String,
    },
    /// Place the caller's single wager for the current round.
    Bet { outcome: String },
    /// Close the round and draw a winner (admin only).
    PickWinner {
        /// Optional hex-encoded bytes mixed into the draw randomness.
        entropy: Option<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(PoolConfig)]
    Config {},

    #[returns(RoundInfo)]
    Round {},

    #[returns(bool)]
    BetsAllowed {},

    #[returns(bool)]
    HasWagered { address: String },

    #[returns(Option<WagerResponse>)]
    Wager { address: String },

    #[returns(WinnerResponse)]
    Winner {},

    #[returns(CurrentBetsResponse)]
    CurrentBets {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct WinnerResponse {
    pub winner: String,
}

#[cw_serde]
pub struct CurrentBetsResponse {
    pub outcome_a: String,
    /// `count_b / count_a`, two decimals
    pub odds_a: String,
    pub outcome_b: String,
    /// `count_a / count_b`, two decimals
    pub odds_b: String,
}

#[cw_serde]
pub struct WagerResponse {
    pub round_id: u64,
    pub outcome: String,
}
