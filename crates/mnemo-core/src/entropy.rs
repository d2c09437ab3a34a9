//! Entropy generation
//!
//! Entropy is drawn from the operating system CSPRNG. A failed read is an
//! error; there is no fallback source.

use crate::MnemonicError;
use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use zeroize::Zeroizing;

/// Allowed entropy sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntropySize {
    /// 128 bits, 12 words
    Bits128,
    /// 160 bits, 15 words
    Bits160,
    /// 192 bits, 18 words
    Bits192,
    /// 224 bits, 21 words
    Bits224,
    /// 256 bits, 24 words
    Bits256,
}

impl EntropySize {
    pub const ALL: [EntropySize; 5] = [
        Self::Bits128,
        Self::Bits160,
        Self::Bits192,
        Self::Bits224,
        Self::Bits256,
    ];

    /// Resolve a requested bit size
    pub fn from_bits(bits: usize) -> Result<Self, MnemonicError> {
        match bits {
            128 => Ok(Self::Bits128),
            160 => Ok(Self::Bits160),
            192 => Ok(Self::Bits192),
            224 => Ok(Self::Bits224),
            256 => Ok(Self::Bits256),
            other => Err(MnemonicError::InvalidEntropySize(other)),
        }
    }

    /// Resolve from a byte length
    pub fn from_byte_len(len: usize) -> Result<Self, MnemonicError> {
        Self::from_bits(len * 8)
    }

    pub fn bits(self) -> usize {
        match self {
            Self::Bits128 => 128,
            Self::Bits160 => 160,
            Self::Bits192 => 192,
            Self::Bits224 => 224,
            Self::Bits256 => 256,
        }
    }

    pub fn byte_len(self) -> usize {
        self.bits() / 8
    }

    /// Checksum length in bits (ENT / 32)
    pub fn checksum_bits(self) -> usize {
        self.bits() / 32
    }

    /// Number of mnemonic words ((ENT + CS) / 11)
    pub fn word_count(self) -> usize {
        (self.bits() + self.checksum_bits()) / crate::WORD_BITS
    }
}

impl fmt::Display for EntropySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}

/// Raw entropy bytes of an allowed length.
///
/// The buffer is wiped when dropped.
#[derive(Clone)]
pub struct Entropy {
    size: EntropySize,
    bytes: Zeroizing<Vec<u8>>,
}

impl Entropy {
    /// Wrap caller-supplied entropy, rejecting any length other than
    /// 16, 20, 24, 28 or 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MnemonicError> {
        let size = EntropySize::from_byte_len(bytes.len())?;
        Ok(Self {
            size,
            bytes: Zeroizing::new(bytes.to_vec()),
        })
    }

    /// Parse entropy from a hex string
    pub fn from_hex(hex_str: &str) -> Result<Self, MnemonicError> {
        let bytes = Zeroizing::new(
            hex::decode(hex_str.trim()).map_err(|e| MnemonicError::InvalidHex(e.to_string()))?,
        );
        Self::from_bytes(&bytes)
    }

    pub fn size(&self) -> EntropySize {
        self.size
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("size", &self.size)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Generate fresh entropy from the OS CSPRNG.
///
/// `bit_size` must be 128, 160, 192, 224 or 256. The size is checked before
/// any randomness is consumed.
pub fn generate_entropy(bit_size: usize) -> Result<Entropy, MnemonicError> {
    let size = EntropySize::from_bits(bit_size)?;
    generate_entropy_with(size, &mut OsRng)
}

/// Generate entropy from a caller-provided cryptographic RNG
pub fn generate_entropy_with<R>(size: EntropySize, rng: &mut R) -> Result<Entropy, MnemonicError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut bytes = Zeroizing::new(vec![0u8; size.byte_len()]);
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| MnemonicError::RandomSourceError(e.to_string()))?;

    debug!("Generated {} of entropy", size);

    Ok(Entropy { size, bytes })
}
