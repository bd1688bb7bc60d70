//! # Counting Quiz
//!
//! Shows a handful of ducks and asks how many there are.
//!
//! ```text
//!            reveal()                 advance()
//! Showing(n) ────────► Revealed(n) ────────────► Showing(m), m ≠ n
//! ```
//!
//! `m` is drawn uniformly from 1..=10 and redrawn until it differs from `n`.

use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

pub const MIN_COUNT: u8 = 1;
pub const MAX_COUNT: u8 = 10;

/// The glyph repeated `count` times.
pub const QUIZ_GLYPH: &str = "🦆";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    Showing(u8),
    Revealed(u8),
}

impl QuizState {
    pub fn count(self) -> u8 {
        match self {
            QuizState::Showing(count) | QuizState::Revealed(count) => count,
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, QuizState::Revealed(_))
    }
}

pub struct CountingQuiz<R: Rng = SmallRng> {
    state: QuizState,
    rng: R,
}

impl CountingQuiz<SmallRng> {
    /// A quiz seeded from the OS.
    pub fn start() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> CountingQuiz<R> {
    pub fn new(mut rng: R) -> Self {
        let count = rng.gen_range(MIN_COUNT..=MAX_COUNT);
        debug!("Counting quiz started with {}", count);
        Self {
            state: QuizState::Showing(count),
            rng,
        }
    }

    /// A quiz showing `count`, or `None` if it's outside 1..=10.
    pub fn with_count(count: u8, rng: R) -> Option<Self> {
        (MIN_COUNT..=MAX_COUNT).contains(&count).then_some(Self {
            state: QuizState::Showing(count),
            rng,
        })
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// `Showing(n)` → `Revealed(n)`. Already revealed is a no-op.
    pub fn reveal(&mut self) -> QuizState {
        if let QuizState::Showing(count) = self.state {
            self.state = QuizState::Revealed(count);
        }
        self.state
    }

    /// `Revealed(n)` → `Showing(m)` with `m ≠ n`. Does nothing while the
    /// answer is still hidden.
    pub fn advance(&mut self) -> QuizState {
        if let QuizState::Revealed(count) = self.state {
            let next = self.draw_other_than(count);
            debug!("Counting quiz advanced {} -> {}", count, next);
            self.state = QuizState::Showing(next);
        }
        self.state
    }

    /// The single primary button: reveal when hidden, advance when shown.
    pub fn press(&mut self) -> QuizState {
        match self.state {
            QuizState::Showing(_) => self.reveal(),
            QuizState::Revealed(_) => self.advance(),
        }
    }

    /// Ends the session. The quiz is consumed; nothing carries over.
    pub fn close(self) {
        debug!("Counting quiz closed at {:?}", self.state);
    }

    fn draw_other_than(&mut self, current: u8) -> u8 {
        loop {
            let candidate = self.rng.gen_range(MIN_COUNT..=MAX_COUNT);
            if candidate != current {
                return candidate;
            }
        }
    }
}
