//! Bit strings for mnemonic packing
//!
//! Bits are stored most-significant first. Entropy bytes are expanded MSB
//! first, checksum bits are appended with no padding, and the result is
//! sliced into fixed-width groups.

use crate::MnemonicError;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Width of one word index in bits (2^11 = 2048 words)
pub const WORD_BITS: usize = 11;

/// An ordered sequence of bits
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Expand every byte, MSB first, in byte order
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut out = Self::with_capacity(bytes.len() * 8);
        for &byte in bytes {
            out.push_bits(byte as u16, 8);
        }
        out
    }

    /// Take the first `count` bits of `bytes`, starting at the MSB of the
    /// first byte.
    pub fn leading_bits(bytes: &[u8], count: usize) -> Result<Self, MnemonicError> {
        if count > bytes.len() * 8 {
            return Err(MnemonicError::InvalidBitLength(format!(
                "cannot take {} bits from {} bytes",
                count,
                bytes.len()
            )));
        }

        let mut out = Self::from_bytes(&bytes[..count.div_ceil(8)]);
        out.bits.truncate(count);
        Ok(out)
    }

    /// Push the low `num_bits` bits of `value`, MSB first
    pub fn push_bits(&mut self, value: u16, num_bits: usize) {
        debug_assert!(num_bits <= 16);
        for i in (0..num_bits).rev() {
            self.bits.push((value >> i) & 1 != 0);
        }
    }

    /// Append all bits of `other`
    pub fn extend(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Slice into consecutive `width`-bit groups, left to right.
    ///
    /// The length must be an exact multiple of `width`; a remainder is an
    /// error rather than being padded or dropped.
    pub fn segments(&self, width: usize) -> Result<Vec<u16>, MnemonicError> {
        if width == 0 || width > 16 {
            return Err(MnemonicError::InvalidBitLength(format!(
                "segment width {} not in 1..=16",
                width
            )));
        }
        if self.bits.len() % width != 0 {
            return Err(MnemonicError::InvalidBitLength(format!(
                "{} bits do not split into {}-bit groups",
                self.bits.len(),
                width
            )));
        }

        Ok(self.bits.chunks(width).map(bits_to_u16).collect())
    }
}

impl std::fmt::Debug for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitString({} bits)", self.bits.len())
    }
}

/// Concatenate entropy bits with checksum bits.
///
/// The checksum must be exactly `entropy bits / 32` long, which makes the
/// packed length a multiple of [`WORD_BITS`].
pub fn pack(entropy: &[u8], checksum: &BitString) -> Result<BitString, MnemonicError> {
    let entropy_bits = entropy.len() * 8;
    if entropy_bits % 32 != 0 || checksum.len() != entropy_bits / 32 {
        return Err(MnemonicError::InvalidBitLength(format!(
            "{} checksum bits for {} entropy bits",
            checksum.len(),
            entropy_bits
        )));
    }

    let mut packed = BitString::with_capacity(entropy_bits + checksum.len());
    for &byte in entropy {
        packed.push_bits(byte as u16, 8);
    }
    packed.extend(checksum);

    if packed.len() % WORD_BITS != 0 {
        return Err(MnemonicError::InvalidBitLength(format!(
            "{} packed bits are not a multiple of {}",
            packed.len(),
            WORD_BITS
        )));
    }

    Ok(packed)
}

fn bits_to_u16(bits: &[bool]) -> u16 {
    bits.iter().fold(0u16, |acc, &bit| (acc << 1) | bit as u16)
}
