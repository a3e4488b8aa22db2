use crate::types::Side;

/// Interpret the first 16 bytes of `randomness` as a big-endian `u128` ticket.
pub fn ticket_from_randomness(randomness: &[u8; 32]) -> u128 {
    let mut ticket_bytes = [0u8; 16];
    ticket_bytes.copy_from_slice(&randomness[0..16]);
    u128::from_be_bytes(ticket_bytes)
}

/// Wager-weighted choice between the two sides of a round.
///
/// `winning_ticket = ticket % (count_a + count_b)`; tickets in `[0, count_a)`
/// belong to side A, the rest to side B. Returns `None` for an empty pool.
pub fn select_side(randomness: &[u8; 32], count_a: u64, count_b: u64) -> Option<Side> {
    let total = count_a as u128 + count_b as u128;
    if total == 0 {
        return None;
    }
    let winning_ticket = ticket_from_randomness(randomness) % total;
    if winning_ticket < count_a as u128 {
        Some(Side::A)
    } else {
        Some(Side::B)
    }
}
