//! Print a fresh mnemonic and its seed for every entropy size
//! Run with: cargo run --example entropy_sizes

use mnemo_core::{generate_mnemonic, EntropySize, Language, Wordlist};

fn main() -> Result<(), mnemo_core::MnemonicError> {
    let wordlist = Wordlist::from_language(Language::English);

    println!("=== THROWAWAY MNEMONICS (do not fund) ===\n");
    for size in EntropySize::ALL {
        let mnemonic = generate_mnemonic(size.bits(), &wordlist)?;
        let seed = mnemonic.to_seed("");
        println!(
            "{:>3} bits + {} checksum bits -> {} words",
            size.bits(),
            size.checksum_bits(),
            mnemonic.word_count()
        );
        println!("  {}", mnemonic);
        println!("  seed: {}\n", seed.to_hex());
    }
    Ok(())
}
