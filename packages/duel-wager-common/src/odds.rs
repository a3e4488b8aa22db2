/// Odds of an outcome in hundredths: `other / own`, rounded half-up.
///
/// Returns `None` when `own` is zero. Both inputs are `u64`, so the `u128`
/// intermediate cannot overflow.
pub fn odds_hundredths(own: u64, other: u64) -> Option<u128> {
    if own == 0 {
        return None;
    }
    let own = own as u128;
    let other = other as u128;
    // round(other * 100 / own) == floor((other * 200 + own) / (2 * own))
    Some((other * 200 + own) / (own * 2))
}

/// Render the odds of an outcome as a fixed two-decimal string, e.g. `"1.50"`.
pub fn format_odds(own: u64, other: u64) -> Option<String> {
    odds_hundredths(own, other).map(|h| format!("{}.{:02}", h / 100, h % 100))
}
