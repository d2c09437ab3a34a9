//! BIP-39 seed derivation
//!
//! seed = PBKDF2-HMAC-SHA512(password = mnemonic, salt = "mnemonic" + passphrase,
//! 2048 rounds, 64 bytes)

use log::debug;
use sha2::Sha512;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Seed length in bytes (512 bits)
pub const SEED_LEN: usize = 64;

/// PBKDF2 round count fixed by BIP-39
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Salt prefix fixed by BIP-39
pub const SALT_PREFIX: &str = "mnemonic";

/// A 64-byte BIP-39 seed. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// 128 lowercase hex characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

/// Derive seed bytes from a mnemonic sentence and passphrase.
///
/// The sentence is used byte-for-byte as given; it is not validated against
/// any wordlist. An empty passphrase is valid and gives the salt `"mnemonic"`.
pub fn derive_seed(mnemonic: &str, passphrase: &str) -> Seed {
    let mut salt = String::with_capacity(SALT_PREFIX.len() + passphrase.len());
    salt.push_str(SALT_PREFIX);
    salt.push_str(passphrase);

    let mut seed = [0u8; SEED_LEN];
    pbkdf2::pbkdf2_hmac::<Sha512>(mnemonic.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed);
    salt.zeroize();

    debug!("Derived {}-byte seed ({} rounds)", SEED_LEN, PBKDF2_ROUNDS);

    let out = Seed(seed);
    seed.zeroize();
    out
}

/// Derive seed bytes with the empty passphrase
pub fn derive_seed_default(mnemonic: &str) -> Seed {
    derive_seed(mnemonic, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_trezor_vector() {
        let seed = derive_seed(ABANDON_ABOUT, "TREZOR");
        assert_eq!(
            seed.to_hex(),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }

    #[test]
    fn test_deterministic() {
        let a = derive_seed(ABANDON_ABOUT, "hunter2");
        let b = derive_seed(ABANDON_ABOUT, "hunter2");
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_default_passphrase_is_empty() {
        assert_eq!(derive_seed_default(ABANDON_ABOUT), derive_seed(ABANDON_ABOUT, ""));
    }

    #[test]
    fn test_passphrase_changes_seed() {
        assert_ne!(derive_seed(ABANDON_ABOUT, ""), derive_seed(ABANDON_ABOUT, "TREZOR"));
        assert_ne!(derive_seed(ABANDON_ABOUT, "a"), derive_seed(ABANDON_ABOUT, "A"));
    }

    #[test]
    fn test_mnemonic_is_not_normalized() {
        // Whitespace is part of the password bytes
        let spaced = ABANDON_ABOUT.replace(' ', "  ");
        assert_ne!(derive_seed_default(ABANDON_ABOUT), derive_seed_default(&spaced));
    }

    #[test]
    fn test_hex_rendering() {
        let seed = derive_seed_default(ABANDON_ABOUT);
        let hex = seed.to_hex();
        assert_eq!(hex.len(), 128);
        assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert_eq!(hex::decode(&hex).unwrap(), seed.as_bytes().as_slice());
    }

    #[test]
    fn test_debug_redacts() {
        let seed = derive_seed_default(ABANDON_ABOUT);
        assert_eq!(format!("{:?}", seed), "Seed([REDACTED])");
    }

    #[test]
    fn test_matches_reference_crate() {
        let mnemonic = bip39::Mnemonic::parse_in(bip39::Language::English, ABANDON_ABOUT).unwrap();
        for passphrase in ["", "TREZOR", "correct horse battery staple"] {
            assert_eq!(
                derive_seed(ABANDON_ABOUT, passphrase).as_bytes(),
                &mnemonic.to_seed(passphrase)
            );
        }
    }
}
