//! Published BIP-39 English vectors (Trezor reference set, passphrase "TREZOR")
//! plus cross-checks against the `bip39` crate for every entropy size.

use mnemo_core::{
    derive_seed, derive_seed_default, encode_entropy, generate_entropy, generate_mnemonic,
    Entropy, EntropySize, Language, MnemonicError, Wordlist,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;

struct Vector {
    entropy: &'static str,
    mnemonic: &'static str,
    seed: Option<&'static str>,
}

const VECTORS: &[Vector] = &[
    Vector {
        entropy: "00000000000000000000000000000000",
        mnemonic: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        seed: Some("c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"),
    },
    Vector {
        entropy: "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        mnemonic: "legal winner thank year wave sausage worth useful legal winner thank yellow",
        seed: Some("2e8905819b8723fe2c1d161860e5ee1830318dbf49a83bd451cfb8440c28bd6fa457fe1296106559a3c80937a1c1069be3a3a5bd381ee6260e8d9739fce1f607"),
    },
    Vector {
        entropy: "80808080808080808080808080808080",
        mnemonic: "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
        seed: Some("d71de856f81a8acc65e6fc851a38d4d7ec216fd0796d0a6827a3ad6ed5511a30fa280f12eb2e47ed2ac03b5c462a0358d18d69fe4f985ec81778c1b370b652a8"),
    },
    Vector {
        entropy: "ffffffffffffffffffffffffffffffff",
        mnemonic: "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
        seed: None,
    },
    Vector {
        entropy: "000000000000000000000000000000000000000000000000",
        mnemonic: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon agent",
        seed: None,
    },
    Vector {
        entropy: "ffffffffffffffffffffffffffffffffffffffffffffffff",
        mnemonic: "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo when",
        seed: None,
    },
    Vector {
        entropy: "0000000000000000000000000000000000000000000000000000000000000000",
        mnemonic: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
        seed: None,
    },
    Vector {
        entropy: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        mnemonic: "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
        seed: None,
    },
];

fn english() -> Wordlist {
    Wordlist::from_language(Language::English)
}

#[test]
fn test_published_vectors() {
    let wordlist = english();

    for vector in VECTORS {
        let entropy = Entropy::from_hex(vector.entropy).unwrap();
        let mnemonic = encode_entropy(&entropy, &wordlist).unwrap();
        assert_eq!(mnemonic.phrase(), vector.mnemonic, "entropy {}", vector.entropy);

        let seed = derive_seed(vector.mnemonic, "TREZOR");
        let reference = bip39::Mnemonic::parse_in(Language::English, vector.mnemonic)
            .unwrap()
            .to_seed("TREZOR");
        assert_eq!(seed.as_bytes(), &reference, "seed for {}", vector.entropy);

        if let Some(expected) = vector.seed {
            assert_eq!(seed.to_hex(), expected);
        }
    }
}

#[test]
fn test_matches_reference_crate_for_random_entropy() {
    let wordlist = english();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for size in EntropySize::ALL {
        for _ in 0..25 {
            let mut bytes = vec![0u8; size.byte_len()];
            rng.fill_bytes(&mut bytes);

            let ours = encode_entropy(&Entropy::from_bytes(&bytes).unwrap(), &wordlist).unwrap();
            let reference = bip39::Mnemonic::from_entropy(&bytes).unwrap();

            assert_eq!(ours.phrase(), reference.to_string());
            assert_eq!(ours.word_count(), size.word_count());
        }
    }
}

#[test]
fn test_non_english_lists_match_reference_crate() {
    let entropy = [0x9Cu8; 32];
    for language in [Language::Spanish, Language::French, Language::Italian, Language::Czech] {
        let ours = encode_entropy(
            &Entropy::from_bytes(&entropy).unwrap(),
            &Wordlist::from_language(language),
        )
        .unwrap();
        let reference = bip39::Mnemonic::from_entropy_in(language, &entropy).unwrap();
        assert_eq!(ours.phrase(), reference.to_string(), "{language:?}");
    }
}

#[test]
fn test_generated_mnemonic_yields_64_byte_seed() {
    let mnemonic = generate_mnemonic(256, &english()).unwrap();
    let seed = derive_seed_default(&mnemonic.phrase());
    assert_eq!(seed.as_bytes().len(), 64);
    assert_eq!(seed, mnemonic.to_seed(""));
}

#[test]
fn test_entropy_round_trips_through_reference_parser() {
    let entropy = generate_entropy(160).unwrap();
    let mnemonic = encode_entropy(&entropy, &english()).unwrap();

    // The reference parser verifies our checksum bits
    let parsed = bip39::Mnemonic::parse_in(Language::English, mnemonic.phrase()).unwrap();
    assert_eq!(parsed.to_entropy(), entropy.as_bytes());
}

#[test]
fn test_malformed_wordlist_never_encodes() {
    let mut words: Vec<&str> = Language::English.word_list().to_vec();
    words.pop();
    assert!(matches!(
        Wordlist::new(words.clone()),
        Err(MnemonicError::MalformedWordlist(2047))
    ));

    words.push("zoo");
    words.push("extra");
    assert!(matches!(
        Wordlist::new(words),
        Err(MnemonicError::MalformedWordlist(2049))
    ));
}

#[test]
fn test_shared_wordlist_across_threads() {
    let wordlist = Arc::new(english());
    let entropy = Entropy::from_hex("80808080808080808080808080808080").unwrap();
    let expected = encode_entropy(&entropy, &wordlist).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let wordlist = Arc::clone(&wordlist);
            let entropy = entropy.clone();
            std::thread::spawn(move || encode_entropy(&entropy, &wordlist).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_concurrent_seed_derivation_is_deterministic() {
    let mnemonic = VECTORS[1].mnemonic;
    let seeds: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || derive_seed(mnemonic, "TREZOR")))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for seed in &seeds {
        assert_eq!(seed.to_hex(), VECTORS[1].seed.unwrap());
    }
}
