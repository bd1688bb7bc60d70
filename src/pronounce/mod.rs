pub mod playback;
pub mod sink;
pub mod sinks;
pub mod types;

pub use playback::Playback;
pub use sink::{PronunciationSink, SinkError};
pub use sinks::{ClipSink, SilentSink, SpeechSink};
pub use types::{SinkKind, SpeechSettings, Utterance};
