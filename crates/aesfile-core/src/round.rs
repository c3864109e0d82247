//! AES round transformations over the state matrix.

use crate::block::Block;
use crate::field;
use crate::sbox::{inv_sbox, sbox};
use crate::state::{State, COLS, ROWS};

/// Column multiplier matrix for MixColumns, row-major.
const MIX: [[u8; COLS]; ROWS] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Column multiplier matrix for InvMixColumns, row-major.
const INV_MIX: [[u8; COLS]; ROWS] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for row in state.iter_mut() {
        for byte in row.iter_mut() {
            *byte = sbox(*byte);
        }
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for row in state.iter_mut() {
        for byte in row.iter_mut() {
            *byte = inv_sbox(*byte);
        }
    }
}

/// Cyclically shifts row `r` left by `r` positions; row 0 is unchanged.
#[inline]
pub fn shift_rows(state: &mut State) {
    for (r, row) in state.iter_mut().enumerate() {
        row.rotate_left(r);
    }
}

/// Shifts row `r` right by `r` positions, undoing [`shift_rows`].
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for (r, row) in state.iter_mut().enumerate() {
        row.rotate_right(r);
    }
}

/// Replaces each column with its product against `matrix` over GF(2^8).
fn mul_columns(state: &mut State, matrix: &[[u8; COLS]; ROWS]) {
    for c in 0..COLS {
        let column = [state[0][c], state[1][c], state[2][c], state[3][c]];
        for r in 0..ROWS {
            let mut acc = 0u8;
            for (k, &byte) in column.iter().enumerate() {
                acc = field::add(acc, field::mul(matrix[r][k], byte));
            }
            state[r][c] = acc;
        }
    }
}

/// Applies MixColumns to every column of the state.
#[inline]
pub fn mix_columns(state: &mut State) {
    mul_columns(state, &MIX);
}

/// Applies the inverse MixColumns transformation.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    mul_columns(state, &INV_MIX);
}

/// Adds (XORs) a round key into the state, matching key byte `i` with the
/// state cell holding flat block byte `i`.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &Block) {
    for (i, &key_byte) in round_key.iter().enumerate() {
        let cell = &mut state[i % ROWS][i / ROWS];
        *cell = field::add(*cell, key_byte);
    }
}
