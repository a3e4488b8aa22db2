use cosmwasm_schema::cw_serde;

/// Lifecycle stage of the pool.
#[cw_serde]
#[derive(Copy)]
pub enum Phase {
    /// Instantiated, no round has ever been opened.
    Uninitialized,
    /// Accepting wagers.
    Open,
    /// Winner picked; wagers rejected until the next reset.
    Closed,
}

/// Which of the two outcomes of a round a wager or a winner refers to.
#[cw_serde]
#[derive(Copy)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::A => "a",
            Side::B => "b",
        }
    }
}
