use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::sequence::Item;

/// What a sink is asked to render.
///
/// Speech sinks read `text`; clip sinks look up `resource_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub resource_id: String,
}

impl Utterance {
    /// The item itself: a lowercase letter ("b") or the digits of a number.
    pub fn for_item(item: &Item) -> Self {
        match item {
            Item::Letter(c) => Self {
                text: c.to_lowercase().to_string(),
                resource_id: c.to_string(),
            },
            Item::Number(n) => Self {
                text: n.to_string(),
                resource_id: n.to_string(),
            },
        }
    }

    /// An annotation word, e.g. the example word "Ice cream".
    pub fn for_word(word: &str) -> Self {
        Self {
            text: word.to_string(),
            resource_id: word.to_lowercase().replace(' ', "_"),
        }
    }
}

/// Which sink implementation is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Speech,
    Clip,
    Silent,
}

impl SinkKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "speech" => Some(SinkKind::Speech),
            "clip" => Some(SinkKind::Clip),
            "silent" => Some(SinkKind::Silent),
            _ => None,
        }
    }
}

/// Voice parameters for speech synthesis.
///
/// `rate`, `pitch` and `volume` use the usual platform scales: rate 0.0–1.0
/// with 0.5 as normal speed, pitch as a multiplier around 1.0, volume 0.0–1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechSettings {
    pub locale: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            rate: 0.4,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}
