//! # Detail Navigator
//!
//! Shows one item of a sequence at a time and moves through it one step at
//! a time, clamped at both ends.
//!
//! ```text
//!           go_previous()              go_next()
//!   [ A ] ◄─────────────── [ B ] ───────────────► [ C ]
//!          direction=Backward        direction=Forward
//! ```
//!
//! Only `current` and `direction` are stored. The index and both neighbours
//! are derived from the sequence on every call.

use std::sync::Arc;

use log::debug;

use crate::core::sequence::{Item, SequenceProvider};
use crate::pronounce::Utterance;

/// Which way the user last moved. Picks the page transition and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// A screen edge, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Leading,
    Trailing,
}

/// Where the incoming view enters from and where the outgoing one leaves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub enter_from: Edge,
    pub exit_to: Edge,
}

impl Transition {
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self {
                enter_from: Edge::Trailing,
                exit_to: Edge::Leading,
            },
            Direction::Backward => Self {
                enter_from: Edge::Leading,
                exit_to: Edge::Trailing,
            },
        }
    }
}

/// How unavailable previous/next controls are shown at a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryStyle {
    /// Leave out the unavailable button.
    #[default]
    Hide,
    /// Leave out the unavailable button and dim the whole control row.
    Dim,
}

impl BoundaryStyle {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hide" => Some(BoundaryStyle::Hide),
            "dim" => Some(BoundaryStyle::Dim),
            _ => None,
        }
    }
}

/// What the previous/next control row should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavControls {
    pub previous: Option<Item>,
    pub next: Option<Item>,
    pub dimmed: bool,
}

pub struct DetailNavigator {
    sequence: Arc<dyn SequenceProvider>,
    current: Item,
    direction: Direction,
}

impl DetailNavigator {
    pub fn new(sequence: Arc<dyn SequenceProvider>, current: Item, direction: Direction) -> Self {
        Self {
            sequence,
            current,
            direction,
        }
    }

    pub fn sequence(&self) -> &Arc<dyn SequenceProvider> {
        &self.sequence
    }

    pub fn current(&self) -> Item {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn transition(&self) -> Transition {
        Transition::for_direction(self.direction)
    }

    /// Position of the current item, falling back to 0 if it isn't in the
    /// sequence.
    pub fn current_index(&self) -> usize {
        self.sequence.index_of(&self.current).unwrap_or(0)
    }

    pub fn previous_item(&self) -> Option<Item> {
        let index = self.current_index();
        if index > 0 {
            self.sequence.get(index - 1)
        } else {
            None
        }
    }

    pub fn next_item(&self) -> Option<Item> {
        let index = self.current_index();
        if index + 1 < self.sequence.len() {
            self.sequence.get(index + 1)
        } else {
            None
        }
    }

    pub fn annotation(&self) -> String {
        self.sequence.annotate(&self.current)
    }

    /// Moves one step back. Returns the new item, or `None` (state unchanged)
    /// at the first item.
    pub fn go_previous(&mut self) -> Option<Item> {
        let previous = self.previous_item()?;
        debug!("Navigating back: {} -> {}", self.current, previous);
        self.current = previous;
        self.direction = Direction::Backward;
        Some(previous)
    }

    /// Moves one step forward. Returns the new item, or `None` (state
    /// unchanged) at the last item.
    pub fn go_next(&mut self) -> Option<Item> {
        let next = self.next_item()?;
        debug!("Navigating forward: {} -> {}", self.current, next);
        self.current = next;
        self.direction = Direction::Forward;
        Some(next)
    }

    /// The utterance for the current item itself.
    pub fn pronounce(&self) -> Utterance {
        Utterance::for_item(&self.current)
    }

    /// The utterance for the annotation. Falls back to the item when the
    /// annotation is empty or the item is a number.
    pub fn pronounce_annotation(&self) -> Utterance {
        match self.current {
            Item::Letter(_) => {
                let word = self.annotation();
                if word.is_empty() {
                    self.pronounce()
                } else {
                    Utterance::for_word(&word)
                }
            }
            Item::Number(_) => self.pronounce(),
        }
    }

    /// Control row under the given boundary policy.
    pub fn controls(&self, style: BoundaryStyle) -> NavControls {
        let previous = self.previous_item();
        let next = self.next_item();
        let at_boundary = previous.is_none() || next.is_none();
        NavControls {
            previous,
            next,
            dimmed: style == BoundaryStyle::Dim && at_boundary,
        }
    }
}
