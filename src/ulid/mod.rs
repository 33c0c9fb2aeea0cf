//! Sortable record identifiers.
//!
//! Identifiers are 26-character ULIDs: a 48-bit millisecond timestamp
//! followed by 80 bits of randomness, Crockford base32 encoded with the
//! most significant character first. Because the alphabet is in ascending
//! ASCII order, lexicographic order of identifiers matches creation-time
//! order; identifiers minted within the same millisecond stay distinct
//! through the random tail but carry no ordering.

use chrono::Utc;
use rand::Rng;

/// Crockford base32 alphabet (no I, L, O, U)
const ENCODING: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

const TIME_LEN: usize = 10;
const RANDOM_LEN: usize = 16;

/// Generate a new identifier from the current time and fresh randomness.
pub fn generate() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let random = rand::rng().random::<u128>() >> 48;
    encode(millis, random)
}

fn encode(millis: u64, random: u128) -> String {
    let mut out = String::with_capacity(TIME_LEN + RANDOM_LEN);

    for i in (0..TIME_LEN).rev() {
        let index = ((millis >> (i * 5)) & 0x1f) as usize;
        out.push(ENCODING[index] as char);
    }
    for i in (0..RANDOM_LEN).rev() {
        let index = ((random >> (i * 5)) & 0x1f) as usize;
        out.push(ENCODING[index] as char);
    }

    out
}
