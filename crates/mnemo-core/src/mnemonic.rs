//! Entropy → mnemonic encoding
//!
//! entropy → SHA-256 checksum → packed bits → 11-bit indices → words.
//! Each step either succeeds completely or the whole encoding fails, so a
//! partial sentence is never returned.

use crate::bits::{pack, WORD_BITS};
use crate::checksum::checksum_bits;
use crate::entropy::{generate_entropy_with, Entropy, EntropySize};
use crate::seed::{derive_seed, Seed};
use crate::wordlist::{lookup, Wordlist};
use crate::MnemonicError;
use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// An ordered mnemonic sentence.
///
/// Words are wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct MnemonicSentence {
    words: Vec<String>,
}

impl MnemonicSentence {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Words joined by single spaces
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }

    /// Derive the seed for this sentence
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        derive_seed(&self.phrase(), passphrase)
    }
}

impl fmt::Display for MnemonicSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl fmt::Debug for MnemonicSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MnemonicSentence({} words)", self.words.len())
    }
}

/// Encode entropy into a mnemonic sentence using `wordlist`
pub fn encode_entropy(
    entropy: &Entropy,
    wordlist: &Wordlist,
) -> Result<MnemonicSentence, MnemonicError> {
    let checksum = checksum_bits(entropy)?;
    let packed = pack(entropy.as_bytes(), &checksum)?;
    let indices = packed.segments(WORD_BITS)?;
    let words = lookup(&indices, wordlist)?;

    debug!(
        "Encoded {} of entropy into {} words",
        entropy.size(),
        words.len()
    );

    Ok(MnemonicSentence { words })
}

/// Generate a fresh mnemonic of `bit_size` bits of entropy.
///
/// Fails with [`MnemonicError::InvalidEntropySize`] before touching the RNG
/// if the size is not allowed, and with [`MnemonicError::RandomSourceError`]
/// if the OS RNG cannot deliver.
pub fn generate_mnemonic(
    bit_size: usize,
    wordlist: &Wordlist,
) -> Result<MnemonicSentence, MnemonicError> {
    let size = EntropySize::from_bits(bit_size)?;
    generate_mnemonic_with(size, wordlist, &mut OsRng)
}

/// Generate a mnemonic from a caller-provided cryptographic RNG
pub fn generate_mnemonic_with<R>(
    size: EntropySize,
    wordlist: &Wordlist,
    rng: &mut R,
) -> Result<MnemonicSentence, MnemonicError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let entropy = generate_entropy_with(size, rng)?;
    encode_entropy(&entropy, wordlist)
}
