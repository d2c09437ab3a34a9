#![no_main]

use libfuzzer_sys::fuzz_target;
use mnemo_core::{encode_entropy, Entropy, Language, Wordlist};
use std::sync::OnceLock;

static ENGLISH: OnceLock<Wordlist> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let wordlist = ENGLISH.get_or_init(|| Wordlist::from_language(Language::English));

    // Arbitrary lengths must be rejected, never panic
    let Ok(entropy) = Entropy::from_bytes(data) else {
        return;
    };

    let mnemonic = encode_entropy(&entropy, wordlist).expect("valid entropy always encodes");
    assert_eq!(mnemonic.word_count(), entropy.size().word_count());
});
