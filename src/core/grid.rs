//! # Grid Browser
//!
//! Every item of a sequence as a card. Selecting a card opens the detail
//! navigator on that item, always moving forward.

use std::sync::Arc;

use log::debug;

use crate::core::navigator::{DetailNavigator, Direction};
use crate::core::sequence::{Item, SequenceProvider};

/// Display data for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub item: Item,
    pub glyph: String,
    pub secondary: String,
    pub annotation: String,
}

pub struct GridBrowser {
    sequence: Arc<dyn SequenceProvider>,
}

impl GridBrowser {
    pub fn new(sequence: Arc<dyn SequenceProvider>) -> Self {
        Self { sequence }
    }

    pub fn sequence(&self) -> &Arc<dyn SequenceProvider> {
        &self.sequence
    }

    /// All cards, in sequence order.
    pub fn cards(&self) -> Vec<Card> {
        self.sequence
            .items()
            .iter()
            .map(|item| Card {
                item: *item,
                glyph: item.glyph(),
                secondary: item.secondary(),
                annotation: self.sequence.annotate(item),
            })
            .collect()
    }

    pub fn select(&self, item: Item) -> DetailNavigator {
        debug!("Grid selected {}", item);
        DetailNavigator::new(self.sequence.clone(), item, Direction::Forward)
    }

    /// Selects by position; `None` past the end.
    pub fn select_index(&self, index: usize) -> Option<DetailNavigator> {
        self.sequence.get(index).map(|item| self.select(item))
    }
}
