//! AES-128 key schedule and single-block encryption/decryption.

use crate::block::Block;
use crate::field;
use crate::key::{Aes128Key, RoundKeys, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;
use crate::state::{block_to_state, state_to_block};

/// Round constants: x^(r-1) in GF(2^8) for rounds 1 through 10.
const RCON: [u8; ROUNDS] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// One 4-byte word of the key schedule.
type Word = [u8; 4];

/// Total number of schedule words for AES-128.
const SCHEDULE_WORDS: usize = 4 * (ROUNDS + 1);

/// The key-expansion g function: rotate the word left one byte, pass
/// every byte through the S-box, and add the round constant for `round`
/// (1..=10) to the first byte.
fn g_function(word: &Word, round: usize) -> Word {
    let rotated = [word[1], word[2], word[3], word[0]];
    let mut out = rotated.map(sbox);
    out[0] = field::add(out[0], RCON[round - 1]);
    out
}

fn xor_words(a: &Word, b: &Word) -> Word {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// Expands a 128-bit key into the 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut words = [[0u8; 4]; SCHEDULE_WORDS];
    for (i, chunk) in key.bytes().chunks_exact(4).enumerate() {
        words[i].copy_from_slice(chunk);
    }

    for i in 4..SCHEDULE_WORDS {
        let temp = if i % 4 == 0 {
            g_function(&words[i - 1], i / 4)
        } else {
            words[i - 1]
        };
        words[i] = xor_words(&words[i - 4], &temp);
    }

    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for word_idx in 0..4 {
            let offset = word_idx * 4;
            round_key[offset..offset + 4].copy_from_slice(&words[round * 4 + word_idx]);
        }
    }

    RoundKeys::new(round_keys)
}

/// Encrypts a single block with pre-expanded round keys.
pub fn encrypt_block_with(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = block_to_state(block);

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state_to_block(&state)
}

/// Decrypts a single block with pre-expanded round keys.
pub fn decrypt_block_with(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = block_to_state(block);

    add_round_key(&mut state, round_keys.get(ROUNDS));
    for round in (1..ROUNDS).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state_to_block(&state)
}

/// Encrypts a single block, generating the key schedule internally.
///
/// Callers processing many blocks under one key should expand the key
/// once with [`expand_key`] and use [`encrypt_block_with`].
pub fn encrypt_block(block: &Block, key: &Aes128Key) -> Block {
    encrypt_block_with(block, &expand_key(key))
}

/// Decrypts a single block, generating the key schedule internally.
///
/// The schedule-reuse note on [`encrypt_block`] applies here as well.
pub fn decrypt_block(block: &Block, key: &Aes128Key) -> Block {
    decrypt_block_with(block, &expand_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    #[test]
    fn encrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let ct = encrypt_block_with(&NIST_PLAIN, &round_keys);
        assert_eq!(ct, NIST_CIPHER);
    }

    #[test]
    fn decrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let pt = decrypt_block_with(&NIST_CIPHER, &round_keys);
        assert_eq!(pt, NIST_PLAIN);
    }

    #[test]
    fn key_taking_drivers_match_schedule_reuse() {
        let key = Aes128Key::from(NIST_KEY);
        assert_eq!(encrypt_block(&NIST_PLAIN, &key), NIST_CIPHER);
        assert_eq!(decrypt_block(&NIST_CIPHER, &key), NIST_PLAIN);
    }

    #[test]
    fn round_key_zero_is_the_original_key() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let mut key_bytes = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            let round_keys = expand_key(&Aes128Key::from(key_bytes));
            assert_eq!(round_keys.get(0), &key_bytes);
        }
    }

    #[test]
    fn expansion_matches_fips_appendix_a() {
        // Key expansion example from FIPS-197 appendix A.1.
        let key = Aes128Key::from([
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ]);
        let round_keys = expand_key(&key);
        assert_eq!(
            round_keys.get(1),
            &[
                0xa0, 0xfa, 0xfe, 0x17, 0x88, 0x54, 0x2c, 0xb1, 0x23, 0xa3, 0x39, 0x39, 0x2a,
                0x6c, 0x76, 0x05,
            ]
        );
        assert_eq!(
            round_keys.get(10),
            &[
                0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6,
                0x63, 0x0c, 0xa6,
            ]
        );
    }

    #[test]
    fn expansion_is_deterministic() {
        let key = Aes128Key::from(NIST_KEY);
        assert_eq!(expand_key(&key), expand_key(&key));
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let key = Aes128Key::from(key_bytes);
            let rks = expand_key(&key);
            let ct = encrypt_block_with(&block, &rks);
            let pt = decrypt_block_with(&ct, &rks);
            assert_eq!(pt, block);
        }
    }
}
