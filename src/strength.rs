//! Passphrase strength heuristics and key generation.
//!
//! Scoring follows a simple additive model: length tiers plus presence
//! of each character class. The assessment is calibrated for the AEAD
//! key lengths (16, 24, 32) the encrypt command suggests.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Generated key lengths.
const KEY_LENGTHS: [usize; 3] = [16, 24, 32];

/// Qualitative strength levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Scores a key from 0 to 7.
///
/// One point per length tier reached (8, 12, 16 characters) and per
/// character class present (uppercase, lowercase, digit, symbol).
pub fn score(key: &str) -> u8 {
    let mut score = 0;
    let length = key.chars().count();

    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if length >= 16 {
        score += 1;
    }

    if key.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if key.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if key.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if key.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    score
}

/// Maps a key to a strength level; `None` for an empty key.
///
/// Keys at exactly the AEAD lengths get pinned levels when their score
/// qualifies: 16 characters caps at Strong, 24 or 32 reach Very Strong.
pub fn assess(key: &str) -> Option<Strength> {
    if key.is_empty() {
        return None;
    }

    let score = score(key);
    let mut level = match score {
        0..=2 => Strength::Weak,
        3..=4 => Strength::Medium,
        5..=6 => Strength::Strong,
        _ => Strength::VeryStrong,
    };

    let length = key.chars().count();
    if length == 16 && score >= 5 {
        level = Strength::Strong;
    }
    if (length == 24 || length == 32) && score >= 6 {
        level = Strength::VeryStrong;
    }

    Some(level)
}

/// Generates a random key at one of the AEAD-friendly lengths.
///
/// At least one character from each class is guaranteed; positions are
/// shuffled so the guaranteed characters do not cluster at the front.
pub fn generate_key() -> String {
    let mut rng = rand::thread_rng();
    let length = KEY_LENGTHS[rng.gen_range(0..KEY_LENGTHS.len())];

    let mut key = vec![
        pick(UPPERCASE, &mut rng),
        pick(LOWERCASE, &mut rng),
        pick(DIGITS, &mut rng),
        pick(SYMBOLS, &mut rng),
    ];

    let all: Vec<char> = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS].concat().chars().collect();
    while key.len() < length {
        key.push(all[rng.gen_range(0..all.len())]);
    }

    key.shuffle(&mut rng);
    key.into_iter().collect()
}

fn pick(set: &str, rng: &mut impl Rng) -> char {
    let chars: Vec<char> = set.chars().collect();
    chars[rng.gen_range(0..chars.len())]
}
