//! # Playback Handle
//!
//! The one place a running utterance lives. The TUI owns a single
//! `Playback`; there is no global player.
//!
//! ```text
//! start(u1) ──► task(u1) playing
//! start(u2) ──► abort task(u1), task(u2) playing
//! drop      ──► abort task(u2)
//! ```
//!
//! Callers never await playback. Sink failures are logged and dropped here,
//! which is the only error handling pronunciation gets.

use std::sync::Arc;

use log::{debug, warn};
use tokio::task::AbortHandle;

use super::sink::PronunciationSink;
use super::types::Utterance;

pub struct Playback {
    sink: Arc<dyn PronunciationSink>,
    current: Option<AbortHandle>,
}

impl Playback {
    pub fn new(sink: Arc<dyn PronunciationSink>) -> Self {
        Self {
            sink,
            current: None,
        }
    }

    pub fn sink_name(&self) -> &str {
        self.sink.name()
    }

    /// Starts rendering `utterance`, stopping whatever was playing before.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, utterance: Utterance) {
        self.stop();

        let sink = self.sink.clone();
        debug!("Pronouncing {:?} via {} sink", utterance.text, sink.name());
        let handle = tokio::spawn(async move {
            if let Err(e) = sink.pronounce(&utterance).await {
                warn!("Pronunciation of {:?} failed: {}", utterance.text, e);
            }
        });
        self.current = Some(handle.abort_handle());
    }

    /// Stops the current utterance, if any.
    pub fn stop(&mut self) {
        if let Some(handle) = self.current.take() {
            if !handle.is_finished() {
                debug!("Stopping previous utterance");
            }
            handle.abort();
        }
    }

    pub fn is_playing(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Playback {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pronounce::sink::SinkError;
    use crate::test_support::RecordingSink;
    use async_trait::async_trait;
    use std::time::Duration;

    struct FailingSink;

    #[async_trait]
    impl PronunciationSink for FailingSink {
        fn name(&self) -> &str {
            "failing"
        }

        async fn pronounce(&self, utterance: &Utterance) -> Result<(), SinkError> {
            Err(SinkError::ClipNotFound(utterance.resource_id.clone()))
        }
    }

    #[tokio::test]
    async fn test_new_utterance_replaces_previous() {
        let sink = Arc::new(RecordingSink::with_delay(Duration::from_millis(50)));
        let mut playback = Playback::new(sink.clone());

        playback.start(Utterance::for_word("first"));
        playback.start(Utterance::for_word("second"));
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(sink.finished(), vec!["second".to_string()]);
        assert!(!playback.is_playing());
    }

    #[tokio::test]
    async fn test_drop_stops_playback() {
        let sink = Arc::new(RecordingSink::with_delay(Duration::from_millis(50)));
        {
            let mut playback = Playback::new(sink.clone());
            playback.start(Utterance::for_word("gone"));
            assert!(playback.is_playing());
        }
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(sink.finished().is_empty());
    }

    #[tokio::test]
    async fn test_sink_errors_are_swallowed() {
        let mut playback = Playback::new(Arc::new(FailingSink));
        playback.start(Utterance::for_word("missing"));
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(!playback.is_playing());
        assert_eq!(playback.sink_name(), "failing");
    }
}
