//! The SHA-256 compression function.
//!
//! [`compress_block`] folds one block, given as sixteen big-endian words, into
//! the chaining state. [`compress256`] is the byte-level entry point that
//! decodes whole 64-byte blocks first.

use byteorder::{BigEndian, ByteOrder};

use crate::consts::{State256, BLOCK_LEN, BLOCK_WORDS, K32, ROUNDS};

#[inline(always)]
fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

#[inline(always)]
fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

#[inline(always)]
fn big_sigma0(a: u32) -> u32 {
    a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(e: u32) -> u32 {
    e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25)
}

#[inline(always)]
fn small_sigma0(w: u32) -> u32 {
    w.rotate_right(7) ^ w.rotate_right(18) ^ (w >> 3)
}

#[inline(always)]
fn small_sigma1(w: u32) -> u32 {
    w.rotate_right(17) ^ w.rotate_right(19) ^ (w >> 10)
}

/// Expands sixteen block words into the full 64-word message schedule.
#[inline]
pub(crate) fn extend(block: &[u32; BLOCK_WORDS]) -> [u32; ROUNDS] {
    let mut w = [0u32; ROUNDS];
    w[..BLOCK_WORDS].copy_from_slice(block);
    for i in BLOCK_WORDS..ROUNDS {
        w[i] = small_sigma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }
    w
}

/// Runs the 64 rounds over one block and adds the result into `state`.
///
/// The block length is part of the type, so a short or long block cannot
/// reach the round loop.
#[inline]
pub fn compress_block(state: &mut State256, block: &[u32; BLOCK_WORDS]) {
    let w = extend(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..ROUNDS {
        let temp1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K32[i])
            .wrapping_add(w[i]);
        let temp2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    for (hx, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *hx = hx.wrapping_add(v);
    }
}

/// Raw SHA-256 compression over whole blocks.
///
/// This is a low-level API: no padding is applied and no length is tracked.
/// Most callers want [`Sha256Hasher`](crate::Sha256Hasher) instead.
pub fn compress256(state: &mut State256, blocks: &[[u8; BLOCK_LEN]]) {
    let mut w = [0u32; BLOCK_WORDS];
    for block in blocks {
        BigEndian::read_u32_into(block, &mut w);
        compress_block(state, &w);
    }
}
