//! BIP-39 wordlists
//!
//! A [`Wordlist`] is an immutable, caller-owned list of exactly 2048 words.
//! It is checked once at construction and then only read, so a single list
//! can be shared by any number of concurrent encoders.

use crate::MnemonicError;
use bip39::Language;
use std::sync::Arc;

/// Number of words in a BIP-39 wordlist
pub const WORDLIST_LEN: usize = 2048;

/// An ordered list of exactly 2048 words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Arc<[String]>,
}

impl Wordlist {
    /// Build a wordlist, rejecting anything but exactly 2048 entries.
    ///
    /// Uniqueness is not checked; the loader is trusted for that.
    pub fn new<I, S>(words: I) -> Result<Self, MnemonicError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != WORDLIST_LEN {
            return Err(MnemonicError::MalformedWordlist(words.len()));
        }
        Ok(Self {
            words: words.into(),
        })
    }

    /// The standard BIP-39 list for `language`
    pub fn from_language(language: Language) -> Self {
        Self {
            words: language.word_list().iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Word at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Map word indices to words, in order
    pub fn lookup(&self, indices: &[u16]) -> Result<Vec<String>, MnemonicError> {
        lookup(indices, self)
    }
}

/// Resolve each index against `wordlist`.
///
/// The first word corresponds to the first index. Any index past the end of
/// the list fails the whole lookup.
pub fn lookup(indices: &[u16], wordlist: &Wordlist) -> Result<Vec<String>, MnemonicError> {
    indices
        .iter()
        .map(|&index| {
            wordlist
                .get(index as usize)
                .map(str::to_owned)
                .ok_or(MnemonicError::WordlistIndexOutOfRange {
                    index: index as usize,
                    len: wordlist.len(),
                })
        })
        .collect()
}
