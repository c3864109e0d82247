//! File-level framing around the AES-128 block cipher.
//!
//! A file is processed as consecutive 16-byte blocks, each encrypted or
//! decrypted independently with no chaining between blocks. Inputs that
//! are not block aligned are zero-padded before encryption, and trailing
//! zero bytes are stripped after decryption. The cipher core never sees
//! this policy; it belongs to the file layer alone.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use aesfile_core::{decrypt_block_with, encrypt_block_with, RoundKeys, BLOCK_SIZE};

/// Appends zero bytes until the buffer length is a multiple of
/// [`BLOCK_SIZE`]. Buffers already on a block boundary are unchanged.
pub fn pad_to_block_boundary(data: &mut Vec<u8>) {
    let remainder = data.len() % BLOCK_SIZE;
    if remainder != 0 {
        data.resize(data.len() + (BLOCK_SIZE - remainder), 0x00);
    }
}

/// Removes every trailing zero byte.
///
/// This undoes [`pad_to_block_boundary`], but it cannot tell padding
/// apart from plaintext that genuinely ends in zero bytes; such
/// plaintext comes back shorter than it went in.
pub fn strip_trailing_zeros(data: &mut Vec<u8>) {
    while data.last() == Some(&0x00) {
        data.pop();
    }
}

/// Encrypts every 16-byte block of `data` in place under one expanded
/// key schedule.
///
/// # Panics
///
/// Panics if `data.len()` is not a multiple of [`BLOCK_SIZE`]; size
/// validation happens before buffers reach the framing layer.
pub fn encrypt_in_place(data: &mut [u8], round_keys: &RoundKeys) {
    assert_eq!(data.len() % BLOCK_SIZE, 0, "buffer is not block aligned");
    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        chunk.copy_from_slice(&encrypt_block_with(&block, round_keys));
    }
}

/// Decrypts every 16-byte block of `data` in place under one expanded
/// key schedule.
///
/// # Panics
///
/// Panics if `data.len()` is not a multiple of [`BLOCK_SIZE`]; size
/// validation happens before buffers reach the framing layer.
pub fn decrypt_in_place(data: &mut [u8], round_keys: &RoundKeys) {
    assert_eq!(data.len() % BLOCK_SIZE, 0, "buffer is not block aligned");
    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        chunk.copy_from_slice(&decrypt_block_with(&block, round_keys));
    }
}
