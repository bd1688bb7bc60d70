use std::fmt;

use async_trait::async_trait;

use super::types::Utterance;

/// Errors a sink can hit while rendering an utterance.
///
/// None of these ever reach the screen; the playback handle logs them.
#[derive(Debug)]
pub enum SinkError {
    /// No pre-recorded clip exists for the resource id.
    ClipNotFound(String),
    /// The external player or synthesizer couldn't be started.
    Spawn { program: String, source: std::io::Error },
    /// The external program ran but exited unsuccessfully.
    Exited { program: String, code: Option<i32> },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::ClipNotFound(id) => write!(f, "sound file not found for {id:?}"),
            SinkError::Spawn { program, source } => {
                write!(f, "failed to start {program}: {source}")
            }
            SinkError::Exited { program, code: Some(code) } => {
                write!(f, "{program} exited with status {code}")
            }
            SinkError::Exited { program, code: None } => {
                write!(f, "{program} was terminated by a signal")
            }
        }
    }
}

impl std::error::Error for SinkError {}

/// Something that can make an item audible.
#[async_trait]
pub trait PronunciationSink: Send + Sync {
    /// Returns the name of the sink, for logs.
    fn name(&self) -> &str;

    /// Renders the utterance. Resolves once playback has finished.
    async fn pronounce(&self, utterance: &Utterance) -> Result<(), SinkError>;
}

/// Runs an external command to completion, mapping failures to `SinkError`.
///
/// The child is killed if the future is dropped, so aborting the task that
/// awaits this stops the sound.
pub(crate) async fn run_command(program: &str, args: &[String]) -> Result<(), SinkError> {
    let status = tokio::process::Command::new(program)
        .args(args)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .kill_on_drop(true)
        .status()
        .await
        .map_err(|source| SinkError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(SinkError::Exited {
            program: program.to_string(),
            code: status.code(),
        })
    }
}
