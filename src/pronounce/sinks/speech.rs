//! Speech synthesis through an external synthesizer.
//!
//! The default program is `espeak-ng`. Voice parameters are translated from
//! the platform-style scales in [`SpeechSettings`] to espeak's flags:
//!
//! ```text
//! locale "en-US"  →  -v en-us
//! rate   0.5      →  -s 175   (words per minute, 80..=450)
//! pitch  1.0      →  -p 50    (0..=99)
//! volume 1.0      →  -a 100   (0..=200)
//! ```

use async_trait::async_trait;
use log::debug;

use crate::pronounce::sink::{PronunciationSink, SinkError, run_command};
use crate::pronounce::types::{SpeechSettings, Utterance};

pub const DEFAULT_SPEECH_COMMAND: &str = "espeak-ng";

const NORMAL_WPM: f32 = 175.0;

pub struct SpeechSink {
    program: String,
    settings: SpeechSettings,
}

impl SpeechSink {
    pub fn new(program: String, settings: SpeechSettings) -> Self {
        Self { program, settings }
    }

    /// Speaks `text` with the configured voice. Resolves when speaking ends.
    pub async fn speak(&self, text: &str) -> Result<(), SinkError> {
        let args = speech_args(text, &self.settings);
        debug!("Speaking {:?} via {} {:?}", text, self.program, args);
        run_command(&self.program, &args).await
    }
}

#[async_trait]
impl PronunciationSink for SpeechSink {
    fn name(&self) -> &str {
        "speech"
    }

    async fn pronounce(&self, utterance: &Utterance) -> Result<(), SinkError> {
        self.speak(&utterance.text).await
    }
}

/// Builds the synthesizer argument list for `text`.
pub fn speech_args(text: &str, settings: &SpeechSettings) -> Vec<String> {
    let words_per_minute = (settings.rate / 0.5 * NORMAL_WPM).clamp(80.0, 450.0).round() as u32;
    let pitch = (settings.pitch * 50.0).clamp(0.0, 99.0).round() as u32;
    let amplitude = (settings.volume * 100.0).clamp(0.0, 200.0).round() as u32;

    vec![
        "-v".to_string(),
        settings.locale.to_ascii_lowercase(),
        "-s".to_string(),
        words_per_minute.to_string(),
        "-p".to_string(),
        pitch.to_string(),
        "-a".to_string(),
        amplitude.to_string(),
        "--".to_string(),
        text.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_map_to_espeak_flags() {
        let args = speech_args("b", &SpeechSettings::default());
        assert_eq!(
            args,
            ["-v", "en-us", "-s", "140", "-p", "50", "-a", "100", "--", "b"]
        );
    }

    #[test]
    fn test_extreme_settings_are_clamped() {
        let settings = SpeechSettings {
            locale: "en-GB".to_string(),
            rate: 5.0,
            pitch: 3.0,
            volume: -1.0,
        };
        let args = speech_args("hello", &settings);
        assert_eq!(args[1], "en-gb");
        assert_eq!(args[3], "450");
        assert_eq!(args[5], "99");
        assert_eq!(args[7], "0");
    }

    #[test]
    fn test_text_follows_separator() {
        let args = speech_args("-v", &SpeechSettings::default());
        assert_eq!(args[args.len() - 2], "--");
        assert_eq!(args[args.len() - 1], "-v");
    }

    #[tokio::test]
    async fn test_missing_synthesizer_is_an_error_not_a_panic() {
        let sink = SpeechSink::new(
            "kidlearn-no-such-synthesizer".to_string(),
            SpeechSettings::default(),
        );
        let result = sink.pronounce(&Utterance::for_word("Apple")).await;
        assert!(matches!(result, Err(SinkError::Spawn { .. })));
    }
}
