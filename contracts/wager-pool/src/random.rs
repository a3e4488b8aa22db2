use cosmwasm_std::Env;
use sha2::{Digest, Sha256};

use crate::state::RoundInfo;

const DOMAIN_TAG: &[u8] = b"duel-wager/pick-winner/v1";

/// Derive 32 bytes of draw randomness from the block environment and round state.
///
/// `seed = sha256(tag || chain_id || height || time_ns || tx_index || contract || round_id || count_a || count_b)`
///
/// When caller entropy is given, the result is `seed XOR sha256(entropy)`.
/// Identical inputs always give identical output.
pub fn derive_randomness(env: &Env, round: &RoundInfo, entropy: Option<&[u8]>) -> [u8; 32] {
    let tx_index = env.transaction.as_ref().map(|t| t.index).unwrap_or(0);

    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_TAG);
    hasher.update((env.block.chain_id.len() as u64).to_be_bytes());
    hasher.update(env.block.chain_id.as_bytes());
    hasher.update(env.block.height.to_be_bytes());
    hasher.update(env.block.time.nanos().to_be_bytes());
    hasher.update(tx_index.to_be_bytes());
    hasher.update(env.contract.address.as_bytes());
    hasher.update(round.round_id.to_be_bytes());
    hasher.update(round.count_a.to_be_bytes());
    hasher.update(round.count_b.to_be_bytes());
    let seed: [u8; 32] = hasher.finalize().into();

    match entropy {
        Some(bytes) => {
            let entropy_hash: [u8; 32] = Sha256::digest(bytes).into();
            let mut mixed = [0u8; 32];
            for i in 0..32 {
                mixed[i] = seed[i] ^ entropy_hash[i];
            }
            mixed
        }
        None => seed,
    }
}
