//! Command-line interface for `aesfile`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aesfile_core::{expand_key, Aes128Key, BLOCK_SIZE};
use aesfile_framing::{
    decrypt_in_place, encrypt_in_place, pad_to_block_boundary, strip_trailing_zeros,
};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128 file encryption CLI.
#[derive(Parser)]
#[command(
    name = "aesfile",
    version,
    author,
    about = "AES-128 file encryption and decryption (independent blocks, zero padding)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file block-by-block, zero-padding to a 16-byte boundary.
    Encrypt {
        #[command(flatten)]
        key: KeyArgs,
        /// Input plaintext file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt a file block-by-block, stripping trailing zero padding.
    Decrypt {
        #[command(flatten)]
        key: KeyArgs,
        /// Input ciphertext file (length must be a multiple of 16).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Round-trip a random two-block message and print the hex transcript.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Key source shared by the encrypt and decrypt subcommands.
#[derive(Args)]
struct KeyArgs {
    /// Path to a key file holding exactly 16 bytes.
    #[arg(long, value_name = "FILE")]
    key_file: Option<PathBuf>,
    /// AES-128 key as 32 hex characters.
    #[arg(long, value_name = "HEX", conflicts_with = "key_file")]
    key_hex: Option<String>,
}

impl KeyArgs {
    fn load(&self) -> Result<Aes128Key> {
        if let Some(path) = &self.key_file {
            return read_key_file(path);
        }
        if let Some(hex_str) = &self.key_hex {
            return parse_key_hex(hex_str);
        }
        bail!("either --key-file or --key-hex is required");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt { key, input, output } => cmd_encrypt(&key, &input, &output),
        Commands::Decrypt { key, input, output } => cmd_decrypt(&key, &input, &output),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_encrypt(key: &KeyArgs, input: &Path, output: &Path) -> Result<()> {
    let round_keys = expand_key(&key.load()?);
    let mut data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    pad_to_block_boundary(&mut data);
    encrypt_in_place(&mut data, &round_keys);
    fs::write(output, &data).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}

fn cmd_decrypt(key: &KeyArgs, input: &Path, output: &Path) -> Result<()> {
    let round_keys = expand_key(&key.load()?);
    let mut data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    if data.len() % BLOCK_SIZE != 0 {
        bail!(
            "bad ciphertext file {}: {} bytes is not a multiple of {}",
            input.display(),
            data.len(),
            BLOCK_SIZE
        );
    }
    decrypt_in_place(&mut data, &round_keys);
    strip_trailing_zeros(&mut data);
    fs::write(output, &data).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut key_bytes);
    let round_keys = expand_key(&Aes128Key::from(key_bytes));

    let mut message = vec![0u8; 2 * BLOCK_SIZE];
    rng.fill_bytes(&mut message);
    let plaintext_hex = hex::encode(&message);

    encrypt_in_place(&mut message, &round_keys);
    let ciphertext_hex = hex::encode(&message);

    decrypt_in_place(&mut message, &round_keys);
    let decrypted_hex = hex::encode(&message);

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", plaintext_hex);
    println!("ciphertext: {}", ciphertext_hex);
    println!("decrypted: {}", decrypted_hex);
    if decrypted_hex != plaintext_hex {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn read_key_file(path: &Path) -> Result<Aes128Key> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    if bytes.len() != BLOCK_SIZE {
        bail!(
            "bad key file {}: expected {} bytes, found {}",
            path.display(),
            BLOCK_SIZE,
            bytes.len()
        );
    }
    let mut key = [0u8; BLOCK_SIZE];
    key.copy_from_slice(&bytes);
    Ok(Aes128Key::from(key))
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if bytes.len() != BLOCK_SIZE {
        bail!("AES-128 key must be 16 bytes (32 hex characters)");
    }
    let mut key = [0u8; BLOCK_SIZE];
    key.copy_from_slice(&bytes);
    Ok(Aes128Key::from(key))
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
