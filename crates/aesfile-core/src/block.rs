//! Block representation.

/// Number of bytes in an AES block, key, and round key.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes, the unit of encryption and decryption.
pub type Block = [u8; BLOCK_SIZE];
