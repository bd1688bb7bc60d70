//! # Annotations
//!
//! The human-readable label under every item: an example word for letters,
//! the spelled-out form for numbers.
//!
//! Both lookups are total. A miss produces `None` here and the sequence
//! providers turn that into an empty string, so nothing upstream ever has to
//! handle a failed lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Which example-word table the alphabet uses.
///
/// Two revisions of the word list exist and they only disagree on "A".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WordSet {
    #[default]
    Classic,
    Family,
}

impl WordSet {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(WordSet::Classic),
            "family" => Some(WordSet::Family),
            _ => None,
        }
    }

    fn table(self) -> &'static [&'static str; 26] {
        match self {
            WordSet::Classic => &CLASSIC_WORDS,
            WordSet::Family => &FAMILY_WORDS,
        }
    }
}

const CLASSIC_WORDS: [&str; 26] = [
    "Apple", "Ball", "Cat", "Dog", "Elephant", "Fish", "Giraffe", "House", "Ice cream", "Jump",
    "Kobe", "Lion", "Moon", "Nest", "Orange", "Pizza", "Queen", "Rainbow", "Sun", "Tree",
    "Umbrella", "Violin", "Water", "Xylophone", "Yellow", "Zebra",
];

const FAMILY_WORDS: [&str; 26] = [
    "Alannah", "Ball", "Cat", "Dog", "Elephant", "Fish", "Giraffe", "House", "Ice cream", "Jump",
    "Kobe", "Lion", "Moon", "Nest", "Orange", "Pizza", "Queen", "Rainbow", "Sun", "Tree",
    "Umbrella", "Violin", "Water", "Xylophone", "Yellow", "Zebra",
];

/// Example words for A–Z: a base word set plus per-letter overrides.
#[derive(Debug, Clone, Default)]
pub struct ExampleWords {
    set: WordSet,
    overrides: HashMap<char, String>,
}

impl ExampleWords {
    pub fn new(set: WordSet) -> Self {
        Self {
            set,
            overrides: HashMap::new(),
        }
    }

    /// Adds overrides keyed by letter. Keys that aren't a single A–Z letter
    /// (either case) are skipped.
    pub fn with_overrides<'a>(mut self, overrides: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        for (key, word) in overrides {
            let mut chars = key.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => {
                    self.overrides.insert(c.to_ascii_uppercase(), word.to_string());
                }
                _ => log::warn!("Ignoring example word override for invalid key {:?}", key),
            }
        }
        self
    }

    pub fn set(&self) -> WordSet {
        self.set
    }

    /// Example word for an uppercase letter, `None` outside A–Z.
    pub fn lookup(&self, letter: char) -> Option<&str> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        if let Some(word) = self.overrides.get(&letter) {
            return Some(word.as_str());
        }
        let index = (letter as u8 - b'A') as usize;
        Some(self.set.table()[index])
    }
}

/// Largest number `spell_out` accepts.
pub const MAX_SPELLABLE: u32 = 999_999;

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Spells out a positive integer in US English ("twenty-one", "one hundred five").
///
/// Returns `None` for zero and anything above [`MAX_SPELLABLE`].
pub fn spell_out(n: u32) -> Option<String> {
    if n == 0 || n > MAX_SPELLABLE {
        return None;
    }

    let thousands = n / 1000;
    let rest = n % 1000;

    let mut parts = Vec::new();
    if thousands > 0 {
        parts.push(format!("{} thousand", spell_below_thousand(thousands)));
    }
    if rest > 0 {
        parts.push(spell_below_thousand(rest));
    }
    Some(parts.join(" "))
}

fn spell_below_thousand(n: u32) -> String {
    debug_assert!(n > 0 && n < 1000);
    let hundreds = n / 100;
    let rest = n % 100;

    let mut parts = Vec::new();
    if hundreds > 0 {
        parts.push(format!("{} hundred", ONES[hundreds as usize]));
    }
    if rest > 0 {
        parts.push(spell_below_hundred(rest));
    }
    parts.join(" ")
}

fn spell_below_hundred(n: u32) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        ones => format!("{}-{}", tens, ONES[ones as usize]),
    }
}
