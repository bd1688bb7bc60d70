//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::core::annotation::{ExampleWords, WordSet};
use crate::core::sequence::{LetterSequence, NumberSequence};
use crate::core::state::App;
use crate::pronounce::{PronunciationSink, SinkError, Utterance};

/// A sink that records what it was asked to say instead of making noise.
///
/// With a delay, each utterance only counts as finished once the delay has
/// passed, which lets tests observe interrupted playback.
#[derive(Default)]
pub struct RecordingSink {
    delay: Option<Duration>,
    started: Mutex<Vec<String>>,
    finished: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn started(&self) -> Vec<String> {
        self.started.lock().unwrap().clone()
    }

    pub fn finished(&self) -> Vec<String> {
        self.finished.lock().unwrap().clone()
    }
}

#[async_trait]
impl PronunciationSink for RecordingSink {
    fn name(&self) -> &str {
        "recording"
    }

    async fn pronounce(&self, utterance: &Utterance) -> Result<(), SinkError> {
        self.started.lock().unwrap().push(utterance.text.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.finished.lock().unwrap().push(utterance.text.clone());
        Ok(())
    }
}

/// Creates a test App: classic letters and the short 1–20 number range.
pub fn test_app() -> App {
    App::new(
        Arc::new(LetterSequence::new(ExampleWords::new(WordSet::Classic))),
        Arc::new(NumberSequence::new(20)),
    )
}
