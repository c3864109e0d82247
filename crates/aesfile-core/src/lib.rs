//! From-scratch AES-128 block cipher used by the `aesfile` tools.
//!
//! Implements the FIPS-197 cipher for 128-bit keys:
//! - GF(2^8) field arithmetic and the S-box lookup tables.
//! - The four round transformations over the 4x4 state matrix.
//! - Key schedule expansion into 11 round keys.
//! - Single-block encryption and decryption drivers.
//!
//! Both drivers are total functions: any 16-byte block and 16-byte key
//! succeed, and calls share no mutable state, so blocks may be processed
//! concurrently. The implementation aims for clarity and testability
//! rather than constant-time guarantees; it should not be treated as
//! side-channel hardened. Block chaining, padding, and file handling
//! live in the `aesfile-framing` and `aesfile-cli` crates.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
pub mod field;
mod key;
mod round;
mod sbox;
mod state;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{
    decrypt_block, decrypt_block_with, encrypt_block, encrypt_block_with, expand_key,
};
pub use crate::key::{Aes128Key, RoundKeys, ROUNDS};
