pub mod clip;
pub mod silent;
pub mod speech;

pub use clip::ClipSink;
pub use silent::SilentSink;
pub use speech::SpeechSink;
