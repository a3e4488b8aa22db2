pub mod odds;
pub mod selection;
pub mod types;

pub use odds::{format_odds, odds_hundredths};
pub use selection::{select_side, ticket_from_randomness};
pub use types::{Phase, Side};
