use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use duel_wager_common::types::{Phase, Side};

pub const CONFIG: Item<PoolConfig> = Item::new("config");
pub const ROUND: Item<RoundInfo> = Item::new("round");
pub const LAST_WINNER: Item<String> = Item::new("last_winner");

/// Wagers keyed by (round_id, bettor). A fresh round id starts with no entries.
pub const WAGERS: Map<(u64, &Addr), Side> = Map::new("wagers");

#[cw_serde]
pub struct PoolConfig {
    /// Sole identity allowed to open rounds and pick winners. Fixed at instantiate.
    pub admin: Addr,
}

#[cw_serde]
pub struct RoundInfo {
    /// 0 until the first reset, then incremented by every reset.
    pub round_id: u64,
    pub phase: Phase,
    pub outcome_a: String,
    pub outcome_b: String,
    /// Wagers on each side, including the seed of 1 placed on open.
    pub count_a: u64,
    pub count_b: u64,
}

impl RoundInfo {
    pub fn uninitialized() -> Self {
        RoundInfo {
            round_id: 0,
            phase: Phase::Uninitialized,
            outcome_a: String::new(),
            outcome_b: String::new(),
            count_a: 0,
            count_b: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    /// Side whose name equals `outcome`. Side A wins a tie between identical names.
    pub fn side_of(&self, outcome: &str) -> Option<Side> {
        if outcome == self.outcome_a {
            Some(Side::A)
        } else if outcome == self.outcome_b {
            Some(Side::B)
        } else {
            None
        }
    }

    pub fn outcome_name(&self, side: Side) -> &str {
        match side {
            Side::A => &self.outcome_a,
            Side::B => &self.outcome_b,
        }
    }
}
