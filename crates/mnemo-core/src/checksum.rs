//! Entropy checksum
//!
//! SHA-256 over the raw entropy. Only the leading `ENT / 32` bits of the
//! digest end up in the mnemonic.

use crate::bits::BitString;
use crate::entropy::Entropy;
use crate::MnemonicError;
use sha2::{Digest, Sha256};

/// SHA-256 digest of the entropy bytes
pub fn checksum(entropy: &[u8]) -> [u8; 32] {
    Sha256::digest(entropy).into()
}

/// The checksum bits appended to `entropy`: the first `ENT / 32` bits of
/// its digest, MSB of the first digest byte first.
pub fn checksum_bits(entropy: &Entropy) -> Result<BitString, MnemonicError> {
    let digest = checksum(entropy.as_bytes());
    BitString::leading_bits(&digest, entropy.size().checksum_bits())
}
