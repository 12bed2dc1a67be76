//! TEA round function.

/// Key schedule constant added to the round sum every round.
pub const DELTA: u32 = 0x9e37_79b9;

/// Number of rounds applied per block.
///
/// Reference TEA uses 32; the remote verifier expects 16.
pub const ROUNDS: usize = 16;

#[inline]
fn mix(v: u32, sum: u32, ka: u32, kb: u32) -> u32 {
    // `>>` on u32 is a logical shift.
    (v << 4).wrapping_add(ka) ^ v.wrapping_add(sum) ^ (v >> 5).wrapping_add(kb)
}

/// Applies one round to `(v0, v1)` with the already-advanced `sum`.
///
/// `v1` is updated from the new `v0`, not the incoming one.
#[inline]
pub fn round(v0: u32, v1: u32, sum: u32, k: &[u32; 4]) -> (u32, u32) {
    let v0 = v0.wrapping_add(mix(v1, sum, k[0], k[1]));
    let v1 = v1.wrapping_add(mix(v0, sum, k[2], k[3]));
    (v0, v1)
}
