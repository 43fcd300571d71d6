//! Tone and stress reattachment.
//!
//! Corpus codes write prosody as a separate symbol (ARPABET `AE1`, CALLHOME
//! `ka1sa`), while IPA binds it to the vowel (`ˈæ`, `ma˥`). After
//! segmentation each marker is a standalone symbol; this pass merges it into
//! the nearest vowel in the configured scan direction.

use std::collections::HashSet;

/// Which way to look for the vowel that owns a pending tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Tone precedes its vowel
    Forward,
    /// Tone follows its vowel
    Backward,
}

/// Where the tone goes when merged into the vowel symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// vowel + tone
    Append,
    /// tone + vowel
    Prepend,
}

#[derive(Debug, Clone)]
pub struct ToneConfig {
    tones: HashSet<String>,
    vowels: HashSet<String>,
    pub direction: Direction,
    pub side: Side,
}

impl ToneConfig {
    pub fn new<T, V>(tones: T, vowels: V, direction: Direction, side: Side) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            tones: tones.into_iter().map(Into::into).collect(),
            vowels: vowels.into_iter().map(Into::into).collect(),
            direction,
            side,
        }
    }

    pub fn is_tone(&self, symbol: &str) -> bool {
        self.tones.contains(symbol)
    }

    /// A vowel symbol, or a multi-char symbol starting with one (vowel plus
    /// diacritics, diphthongs).
    pub fn is_vowel(&self, symbol: &str) -> bool {
        if self.vowels.contains(symbol) {
            return true;
        }
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(first), Some(_)) => {
                let mut buf = [0u8; 4];
                self.vowels.contains(&*first.encode_utf8(&mut buf))
            }
            _ => false,
        }
    }

    /// Tone symbols in sorted order.
    pub fn tones(&self) -> Vec<&str> {
        let mut tones: Vec<&str> = self.tones.iter().map(String::as_str).collect();
        tones.sort_unstable();
        tones
    }
}

/// Scan state: at most one tone waits for a vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Idle,
    /// Tone symbol at this index
    At(usize),
}

/// Merge each tone symbol into the nearest vowel in the scan direction.
///
/// A second tone seen before a vowel replaces the pending one, which stays
/// where it is. A tone with no vowel ahead of it is left standalone.
pub fn reattach(symbols: &[String], config: &ToneConfig) -> Vec<String> {
    let mut out = symbols.to_vec();
    let mut v = match config.direction {
        Direction::Forward => 0,
        Direction::Backward => match out.len().checked_sub(1) {
            Some(last) => last,
            None => return out,
        },
    };
    let mut pending = Pending::Idle;

    while v < out.len() {
        if let Pending::At(t) = pending {
            if config.is_vowel(&out[v]) {
                let tone = out.remove(t);
                // Forward scans removed an earlier element; the vowel moved left
                let vowel_idx = if t < v { v - 1 } else { v };
                let vowel = &mut out[vowel_idx];
                match config.side {
                    Side::Append => vowel.push_str(&tone),
                    Side::Prepend => vowel.insert_str(0, &tone),
                }
                pending = Pending::Idle;
            }
        }
        // After a forward merge, index v now holds the symbol following the vowel
        if v < out.len() && config.is_tone(&out[v]) {
            pending = Pending::At(v);
        }
        match config.direction {
            Direction::Forward => v += 1,
            Direction::Backward => match v.checked_sub(1) {
                Some(prev) => v = prev,
                None => break,
            },
        }
    }
    out
}
