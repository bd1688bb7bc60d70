use async_trait::async_trait;
use log::debug;

use crate::pronounce::sink::{PronunciationSink, SinkError};
use crate::pronounce::types::Utterance;

/// A sink that makes no sound. Used headless and when audio is switched off.
pub struct SilentSink;

#[async_trait]
impl PronunciationSink for SilentSink {
    fn name(&self) -> &str {
        "silent"
    }

    async fn pronounce(&self, utterance: &Utterance) -> Result<(), SinkError> {
        debug!("Silent sink skipping {:?}", utterance.text);
        Ok(())
    }
}
