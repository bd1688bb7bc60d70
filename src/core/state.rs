//! # Application State
//!
//! Core state for Kidlearn. This module contains domain logic only,
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── letters: Arc<dyn SequenceProvider>   // A–Z
//! ├── numbers: Arc<dyn SequenceProvider>   // 1..=N
//! ├── screen: Screen                       // Home | Grid | Detail
//! ├── quiz: Option<CountingQuiz>           // overlay on the Numbers grid
//! ├── boundary_style: BoundaryStyle        // hide or dim at the ends
//! └── pronounce_on_select: bool            // speak when a card is opened
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::grid::GridBrowser;
use crate::core::navigator::{BoundaryStyle, DetailNavigator};
use crate::core::quiz::CountingQuiz;
use crate::core::sequence::{Domain, LetterSequence, NumberSequence, SequenceProvider};

/// Entries of the home menu, top to bottom.
pub const HOME_ENTRIES: [Domain; 2] = [Domain::Letters, Domain::Numbers];

pub enum Screen {
    Home { selected: usize },
    Grid { domain: Domain, selected: usize },
    Detail { domain: Domain, navigator: DetailNavigator },
}

impl Screen {
    pub fn domain(&self) -> Option<Domain> {
        match self {
            Screen::Home { .. } => None,
            Screen::Grid { domain, .. } | Screen::Detail { domain, .. } => Some(*domain),
        }
    }
}

pub struct App {
    pub letters: Arc<dyn SequenceProvider>,
    pub numbers: Arc<dyn SequenceProvider>,
    pub screen: Screen,
    pub quiz: Option<CountingQuiz>,
    pub boundary_style: BoundaryStyle,
    pub pronounce_on_select: bool,
}

impl App {
    pub fn new(letters: Arc<dyn SequenceProvider>, numbers: Arc<dyn SequenceProvider>) -> Self {
        Self {
            letters,
            numbers,
            screen: Screen::Home { selected: 0 },
            quiz: None,
            boundary_style: BoundaryStyle::default(),
            pronounce_on_select: false,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let letters = Arc::new(LetterSequence::new(config.example_words()));
        let numbers = Arc::new(NumberSequence::new(config.numbers_upper_bound));
        Self {
            boundary_style: config.boundary_style,
            pronounce_on_select: config.pronounce_on_select,
            ..Self::new(letters, numbers)
        }
    }

    pub fn sequence(&self, domain: Domain) -> &Arc<dyn SequenceProvider> {
        match domain {
            Domain::Letters => &self.letters,
            Domain::Numbers => &self.numbers,
        }
    }

    pub fn grid(&self, domain: Domain) -> GridBrowser {
        GridBrowser::new(self.sequence(domain).clone())
    }

    /// Title for the current screen.
    pub fn title(&self) -> String {
        match &self.screen {
            Screen::Home { .. } => "Kids Learning".to_string(),
            Screen::Grid { domain, .. } => domain.title().to_string(),
            Screen::Detail { domain, navigator } => {
                format!("{} {}", domain.item_label(), navigator.current())
            }
        }
    }
}
