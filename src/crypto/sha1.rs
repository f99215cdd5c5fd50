//! SHA-1 digest engine (FIPS PUB 180-4)
//!
//! One-shot, from-scratch implementation. The message is padded and split
//! into 512-bit blocks up front; each block is expanded into an 80-word
//! schedule and compressed into the running five-word state.

use crate::crypto::encoding::hex_encode;
use crate::error::{Result, Rsha1Error};

/// One 512-bit block as sixteen big-endian 32-bit words.
pub type Block = [u32; 16];

/// Initial hash state.
const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Compute the SHA-1 digest of `data` (one-shot).
pub fn sha1(data: &[u8]) -> Result<[u8; 20]> {
    let mut state = H0;
    for block in pad_blocks(data)? {
        let w = message_schedule(&block);
        state = compress(state, &w);
    }

    let mut digest = [0u8; 20];
    for (chunk, word) in digest.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    Ok(digest)
}

/// Compute the SHA-1 digest of `data` as a 40-character lowercase hex string.
pub fn sha1_hex(data: &[u8]) -> Result<String> {
    Ok(hex_encode(&sha1(data)?))
}

/// Pad `data` and split it into 512-bit blocks.
///
/// A single 0x80 byte follows the message, then zeros up to 56 mod 64 bytes,
/// then the message length in bits as a 64-bit big-endian integer.
fn pad_blocks(data: &[u8]) -> Result<Vec<Block>> {
    if data.len() as u128 * 8 > u64::MAX as u128 {
        return Err(Rsha1Error::InputTooLarge(format!(
            "message of {} bytes exceeds the 64-bit length field",
            data.len()
        )));
    }
    let bit_len = (data.len() as u64) * 8;

    let mut padded = data.to_vec();
    padded.push(0x80);
    while padded.len() % 64 != 56 {
        padded.push(0);
    }
    padded.extend_from_slice(&bit_len.to_be_bytes());

    let mut blocks = Vec::with_capacity(padded.len() / 64);
    for chunk in padded.chunks_exact(64) {
        let mut block = [0u32; 16];
        for (word, bytes) in block.iter_mut().zip(chunk.chunks_exact(4)) {
            *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        blocks.push(block);
    }
    Ok(blocks)
}

/// Expand a block into the 80-word message schedule.
fn message_schedule(block: &Block) -> [u32; 80] {
    let mut w = [0u32; 80];
    w[..16].copy_from_slice(block);
    for j in 16..80 {
        w[j] = (w[j - 3] ^ w[j - 8] ^ w[j - 14] ^ w[j - 16]).rotate_left(1);
    }
    w
}

/// Run the 80 compression rounds and fold the result into `state`.
fn compress(state: [u32; 5], w: &[u32; 80]) -> [u32; 5] {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    for (j, &word) in w.iter().enumerate() {
        let (f, k) = match j {
            0..=19 => ((b & c) | (!b & d), 0x5a827999),
            20..=39 => (b ^ c ^ d, 0x6ed9eba1),
            40..=59 => ((b & c) | (b & d) | (c & d), 0x8f1bbcdc),
            _ => (b ^ c ^ d, 0xca62c1d6),
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(word);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    [
        state[0].wrapping_add(a),
        state[1].wrapping_add(b),
        state[2].wrapping_add(c),
        state[3].wrapping_add(d),
        state[4].wrapping_add(e),
    ]
}
