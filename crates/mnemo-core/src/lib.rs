//! Mnemo Core
//!
//! BIP-39 mnemonic encoding and seed derivation.
//!
//! # Encoding
//!
//! Entropy (128–256 bits) is hashed with SHA-256, the leading `ENT / 32`
//! bits of the digest are appended as a checksum, and the result is split
//! into 11-bit word indices:
//!
//! | ENT | CS | ENT+CS | Words |
//! |-----|----|--------|-------|
//! | 128 | 4  | 132    | 12    |
//! | 160 | 5  | 165    | 15    |
//! | 192 | 6  | 198    | 18    |
//! | 224 | 7  | 231    | 21    |
//! | 256 | 8  | 264    | 24    |
//!
//! # Seed Derivation
//!
//! PBKDF2-HMAC-SHA512 over the sentence with salt `"mnemonic" + passphrase`,
//! 2048 rounds, 64-byte output.
//!
//! # Example
//!
//! ```
//! use mnemo_core::{derive_seed, encode_entropy, Entropy, Language, Wordlist};
//!
//! let wordlist = Wordlist::from_language(Language::English);
//! let entropy = Entropy::from_bytes(&[0u8; 16]).unwrap();
//!
//! let mnemonic = encode_entropy(&entropy, &wordlist).unwrap();
//! assert_eq!(mnemonic.word_count(), 12);
//!
//! let seed = derive_seed(&mnemonic.phrase(), "TREZOR");
//! assert_eq!(&seed.to_hex()[..16], "c55257c360c07c72");
//! ```

pub mod bits;
pub mod checksum;
pub mod entropy;
pub mod memory;
pub mod mnemonic;
pub mod seed;
pub mod wordlist;

pub use bits::{pack, BitString, WORD_BITS};
pub use checksum::{checksum, checksum_bits};
pub use entropy::{generate_entropy, generate_entropy_with, Entropy, EntropySize};
pub use mnemonic::{encode_entropy, generate_mnemonic, generate_mnemonic_with, MnemonicSentence};
pub use seed::{derive_seed, derive_seed_default, Seed, SEED_LEN};
pub use wordlist::{lookup, Wordlist, WORDLIST_LEN};

pub use bip39::Language;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MnemonicError {
    #[error("Invalid entropy size: {0} bits (allowed: 128, 160, 192, 224, 256)")]
    InvalidEntropySize(usize),
    #[error("Random source failed: {0}")]
    RandomSourceError(String),
    #[error("Malformed wordlist: expected 2048 words, found {0}")]
    MalformedWordlist(usize),
    #[error("Word index {index} out of range for a wordlist of {len} words")]
    WordlistIndexOutOfRange { index: usize, len: usize },
    #[error("Invalid bit length: {0}")]
    InvalidBitLength(String),
    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}
