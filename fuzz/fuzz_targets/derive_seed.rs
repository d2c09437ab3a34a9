#![no_main]

use libfuzzer_sys::fuzz_target;
use mnemo_core::{derive_seed, SEED_LEN};

fuzz_target!(|data: &[u8]| {
    // Any UTF-8 input is accepted as a mnemonic; split off a passphrase at the first NUL
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (mnemonic, passphrase) = text.split_once('\0').unwrap_or((text, ""));

    let seed = derive_seed(mnemonic, passphrase);
    assert_eq!(seed.as_bytes().len(), SEED_LEN);
    assert_eq!(seed, derive_seed(mnemonic, passphrase));
});
