use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("betting is closed")]
    BettingClosed,

    #[error("unknown outcome: {outcome}")]
    UnknownOutcome { outcome: String },

    #[error("{address} already placed a wager this round")]
    AlreadyWagered { address: String },

    #[error("winner has not been picked yet")]
    WinnerNotPicked,

    #[error("no betting round has been opened yet")]
    NoRoundOpened,

    #[error("invalid hex input: {field}")]
    InvalidHex { field: String },
}
