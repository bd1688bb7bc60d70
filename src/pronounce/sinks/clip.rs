//! Pre-recorded clip playback.
//!
//! Clips live in one directory, one file per resource id:
//! `<dir>/<resource_id>.<extension>` (e.g. `~/.kidlearn/sounds/7.mp3`).

use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;

use crate::pronounce::sink::{PronunciationSink, SinkError, run_command};
use crate::pronounce::types::Utterance;

/// Must be able to decode [`DEFAULT_CLIP_EXTENSION`] clips.
#[cfg(target_os = "macos")]
pub const DEFAULT_CLIP_PLAYER: &str = "afplay";
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_CLIP_PLAYER: &str = "mpg123";

pub const DEFAULT_CLIP_EXTENSION: &str = "mp3";

pub struct ClipSink {
    dir: PathBuf,
    extension: String,
    player: String,
}

impl ClipSink {
    pub fn new(dir: PathBuf, extension: String, player: String) -> Self {
        Self {
            dir,
            extension: extension.trim_start_matches('.').to_string(),
            player,
        }
    }

    /// Path of the clip for `resource_id`, or `ClipNotFound` if there is no
    /// such file. Ids that try to leave the clip directory never match.
    pub async fn resolve(&self, resource_id: &str) -> Result<PathBuf, SinkError> {
        let escapes = resource_id.is_empty()
            || resource_id.contains(['/', '\\'])
            || resource_id.starts_with('.');
        if escapes {
            return Err(SinkError::ClipNotFound(resource_id.to_string()));
        }

        let path = self.dir.join(format!("{}.{}", resource_id, self.extension));
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(path),
            _ => Err(SinkError::ClipNotFound(resource_id.to_string())),
        }
    }

    /// Resolves the clip, then plays it to the end.
    pub async fn play_clip(&self, resource_id: &str) -> Result<(), SinkError> {
        let path = self.resolve(resource_id).await?;
        debug!("Playing clip {} via {}", path.display(), self.player);
        run_command(&self.player, &[path.to_string_lossy().into_owned()]).await
    }
}

#[async_trait]
impl PronunciationSink for ClipSink {
    fn name(&self) -> &str {
        "clip"
    }

    async fn pronounce(&self, utterance: &Utterance) -> Result<(), SinkError> {
        self.play_clip(&utterance.resource_id).await
    }
}
