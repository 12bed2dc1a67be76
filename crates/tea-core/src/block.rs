//! Block representation helpers.

/// TEA block of 8 bytes.
pub type Block = [u8; 8];

/// Size of a [`Block`] in bytes.
pub const BLOCK_LEN: usize = 8;

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Splits a block into its two big-endian words.
#[inline]
pub fn split_words(block: &Block) -> (u32, u32) {
    let [a, b, c, d, e, f, g, h] = *block;
    (
        u32::from_be_bytes([a, b, c, d]),
        u32::from_be_bytes([e, f, g, h]),
    )
}

/// Joins two words back into a big-endian block.
#[inline]
pub fn join_words(v0: u32, v1: u32) -> Block {
    let mut out = [0u8; BLOCK_LEN];
    out[..4].copy_from_slice(&v0.to_be_bytes());
    out[4..].copy_from_slice(&v1.to_be_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_big_endian() {
        let block = [0x01, 0x02, 0x03, 0x04, 0xf0, 0xe0, 0xd0, 0xc0];
        assert_eq!(split_words(&block), (0x0102_0304, 0xf0e0_d0c0));
        assert_eq!(join_words(0x0102_0304, 0xf0e0_d0c0), block);
    }

    #[test]
    fn xor_is_bytewise() {
        let mut a = [0xffu8; 8];
        xor_in_place(&mut a, &[0x0f, 0xf0, 0, 0xff, 1, 2, 3, 4]);
        assert_eq!(a, [0xf0, 0x0f, 0xff, 0x00, 0xfe, 0xfd, 0xfc, 0xfb]);
    }
}
