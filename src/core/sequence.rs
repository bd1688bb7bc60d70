//! # Sequences
//!
//! A sequence is the fixed, ordered domain one browsing mode works over:
//! the letters A–Z or the numbers 1..=N. It never changes after construction.
//!
//! ```text
//! SequenceProvider
//! ├── items()       ordered, no duplicates
//! ├── annotate()    item → label ("Apple", "twenty-one", or "")
//! └── index_of()    first match on value
//! ```
//!
//! Position is the only identity the navigator uses; values are looked up
//! once to find it.

use std::fmt;

use crate::core::annotation::{ExampleWords, spell_out};

/// Largest numbers range offered. The grid renders every card into one buffer.
pub const MAX_NUMBERS_UPPER_BOUND: u32 = 1000;

/// One browsable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    Letter(char),
    Number(u32),
}

impl Item {
    /// The big glyph shown on cards and in the detail view.
    pub fn glyph(&self) -> String {
        match self {
            Item::Letter(c) => c.to_string(),
            Item::Number(n) => n.to_string(),
        }
    }

    /// Secondary glyph under the main one: the lowercase form of a letter.
    pub fn secondary(&self) -> String {
        match self {
            Item::Letter(c) => c.to_lowercase().to_string(),
            Item::Number(_) => String::new(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Letter(c) => write!(f, "{c}"),
            Item::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Which browsing mode a screen belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Letters,
    Numbers,
}

impl Domain {
    pub fn title(self) -> &'static str {
        match self {
            Domain::Letters => "Alphabet",
            Domain::Numbers => "Numbers",
        }
    }

    /// Prefix used in the detail view title ("Letter B", "Number 7").
    pub fn item_label(self) -> &'static str {
        match self {
            Domain::Letters => "Letter",
            Domain::Numbers => "Number",
        }
    }
}

/// Supplies an ordered domain and a label for each of its items.
pub trait SequenceProvider: Send + Sync {
    fn domain(&self) -> Domain;

    fn items(&self) -> &[Item];

    /// Human-readable label for `item`. Pure; returns `""` for anything the
    /// provider can't label.
    fn annotate(&self, item: &Item) -> String;

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Position of the first item equal to `item`.
    fn index_of(&self, item: &Item) -> Option<usize> {
        self.items().iter().position(|candidate| candidate == item)
    }

    fn get(&self, index: usize) -> Option<Item> {
        self.items().get(index).copied()
    }
}

/// The 26 letters A–Z with example words.
pub struct LetterSequence {
    items: Vec<Item>,
    words: ExampleWords,
}

impl LetterSequence {
    pub fn new(words: ExampleWords) -> Self {
        Self {
            items: ('A'..='Z').map(Item::Letter).collect(),
            words,
        }
    }
}

impl SequenceProvider for LetterSequence {
    fn domain(&self) -> Domain {
        Domain::Letters
    }

    fn items(&self) -> &[Item] {
        &self.items
    }

    fn annotate(&self, item: &Item) -> String {
        match item {
            Item::Letter(c) => self.words.lookup(*c).unwrap_or_default().to_string(),
            Item::Number(_) => String::new(),
        }
    }
}

/// The numbers 1..=upper, spelled out.
pub struct NumberSequence {
    items: Vec<Item>,
    upper: u32,
}

impl NumberSequence {
    /// `upper` is clamped to `1..=MAX_NUMBERS_UPPER_BOUND`, so the sequence
    /// is never empty and the grid stays within its render limit.
    pub fn new(upper: u32) -> Self {
        let upper = upper.clamp(1, MAX_NUMBERS_UPPER_BOUND);
        Self {
            items: (1..=upper).map(Item::Number).collect(),
            upper,
        }
    }

    pub fn upper(&self) -> u32 {
        self.upper
    }
}

impl SequenceProvider for NumberSequence {
    fn domain(&self) -> Domain {
        Domain::Numbers
    }

    fn items(&self) -> &[Item] {
        &self.items
    }

    fn annotate(&self, item: &Item) -> String {
        match item {
            Item::Number(n) if (1..=self.upper).contains(n) => spell_out(*n).unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn index_of(&self, item: &Item) -> Option<usize> {
        // Members are 1..=upper in order, so the position is arithmetic.
        match item {
            Item::Number(n) if (1..=self.upper).contains(n) => Some((*n - 1) as usize),
            _ => None,
        }
    }
}
