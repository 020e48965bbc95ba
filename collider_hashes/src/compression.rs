#![allow(clippy::unreadable_literal)]

use crate::schedule::ScheduleVariant;
use crate::state::ChainingState;
use crate::BLOCK_LENGTH_BYTES;

/// Selection function of the first round group: bits of `c` where `b` is set, bits of `d` elsewhere.
#[inline]
fn choose(b: u32, c: u32, d: u32) -> u32 {
    (b & c) ^ (!b & d)
}

#[inline]
fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline]
fn majority(b: u32, c: u32, d: u32) -> u32 {
    (b & c) ^ (b & d) ^ (c & d)
}

/// Compress one 64 byte block into the given chaining state and return the new chaining state. The input state is
/// not modified.
pub fn compress(
    state: &ChainingState,
    block: &[u8; BLOCK_LENGTH_BYTES],
    variant: ScheduleVariant,
) -> ChainingState {
    let extended_block = variant.expand(block);

    let mut round_state = *state;

    for (i, data_word) in extended_block.iter().enumerate() {
        let (scrambled_data, magic_constant) = match i {
            0..=19 => (choose(round_state.b, round_state.c, round_state.d), 0x5A827999),
            20..=39 => (parity(round_state.b, round_state.c, round_state.d), 0x6ED9EBA1),
            40..=59 => (majority(round_state.b, round_state.c, round_state.d), 0x8F1BBCDC),
            60..=79 => (parity(round_state.b, round_state.c, round_state.d), 0xCA62C1D6),
            _ => unreachable!(),
        };

        let temp = u32::rotate_left(round_state.a, 5)
            .wrapping_add(scrambled_data)
            .wrapping_add(round_state.e)
            .wrapping_add(*data_word)
            .wrapping_add(magic_constant);
        round_state.e = round_state.d;
        round_state.d = round_state.c;
        round_state.c = u32::rotate_left(round_state.b, 30);
        round_state.b = round_state.a;
        round_state.a = temp;
    }

    state.wrapping_add(&round_state)
}
