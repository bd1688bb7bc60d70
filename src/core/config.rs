//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.kidlearn/config.toml`. If missing on first run, a
//! commented-out default is generated so parents can discover all options.
//!
//! Two known revisions of the app disagree on the number range (1–20 vs
//! 1–100) and on the example word for "A". Both are settings here rather
//! than constants.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::annotation::{ExampleWords, WordSet};
use crate::core::navigator::BoundaryStyle;
pub use crate::core::sequence::MAX_NUMBERS_UPPER_BOUND;
use crate::pronounce::sinks::clip::{DEFAULT_CLIP_EXTENSION, DEFAULT_CLIP_PLAYER};
use crate::pronounce::sinks::speech::DEFAULT_SPEECH_COMMAND;
use crate::pronounce::{SinkKind, SpeechSettings};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KidlearnConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub letters: LettersConfig,
    #[serde(default)]
    pub numbers: NumbersConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub clips: ClipsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub pronunciation: Option<SinkKind>,
    pub boundary_style: Option<BoundaryStyle>,
    pub pronounce_on_select: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LettersConfig {
    pub word_set: Option<WordSet>,
    /// Per-letter example word overrides, e.g. `K = "Kite"`.
    #[serde(default)]
    pub words: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NumbersConfig {
    pub upper_bound: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SpeechConfig {
    pub command: Option<String>,
    pub locale: Option<String>,
    pub rate: Option<f32>,
    pub pitch: Option<f32>,
    pub volume: Option<f32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ClipsConfig {
    pub dir: Option<String>,
    pub extension: Option<String>,
    pub player: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_NUMBERS_UPPER_BOUND: u32 = 100;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub pronunciation: SinkKind,
    pub boundary_style: BoundaryStyle,
    pub pronounce_on_select: bool,
    pub word_set: WordSet,
    pub word_overrides: BTreeMap<String, String>,
    pub numbers_upper_bound: u32,
    pub speech_command: String,
    pub speech: SpeechSettings,
    pub clip_dir: PathBuf,
    pub clip_extension: String,
    pub clip_player: String,
}

impl ResolvedConfig {
    pub fn example_words(&self) -> ExampleWords {
        ExampleWords::new(self.word_set).with_overrides(
            self.word_overrides
                .iter()
                .map(|(letter, word)| (letter.as_str(), word.as_str())),
        )
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&KidlearnConfig::default(), &CliOverrides::default(), |_| None)
    }
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub pronunciation: Option<SinkKind>,
    pub boundary_style: Option<BoundaryStyle>,
    pub word_set: Option<WordSet>,
    pub numbers_upper_bound: Option<u32>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.kidlearn/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".kidlearn"))
}

/// Returns the path to `~/.kidlearn/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.kidlearn/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `KidlearnConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse` or `ConfigError::Invalid`.
pub fn load_config() -> Result<KidlearnConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(KidlearnConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(KidlearnConfig::default());
    }

    let config = load_config_from(&path)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Reads, parses and validates a config file.
pub fn load_config_from(path: &Path) -> Result<KidlearnConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<KidlearnConfig, ConfigError> {
    let config: KidlearnConfig = toml::from_str(contents).map_err(ConfigError::Parse)?;
    validate(&config)?;
    Ok(config)
}

/// Rejects values no resolution could make sense of.
fn validate(config: &KidlearnConfig) -> Result<(), ConfigError> {
    if let Some(upper) = config.numbers.upper_bound
        && !(1..=MAX_NUMBERS_UPPER_BOUND).contains(&upper)
    {
        return Err(ConfigError::Invalid(format!(
            "numbers.upper_bound must be between 1 and {MAX_NUMBERS_UPPER_BOUND}, got {upper}"
        )));
    }

    let speech = &config.speech;
    for (name, value) in [
        ("speech.rate", speech.rate),
        ("speech.pitch", speech.pitch),
        ("speech.volume", speech.volume),
    ] {
        if let Some(v) = value
            && !(v.is_finite() && v >= 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "{name} must be a non-negative number, got {v}"
            )));
        }
    }
    Ok(())
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Kidlearn Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# pronunciation = "speech"        # "speech", "clip" or "silent"
# boundary_style = "hide"         # "hide" or "dim"
# pronounce_on_select = false     # speak a card when it is opened from the grid

# [letters]
# word_set = "classic"            # "classic" (A is for Apple) or "family" (A is for Alannah)

# [letters.words]
# K = "Kite"

# [numbers]
# upper_bound = 100               # 1..=1000; 20 for the short range

# [speech]
# command = "espeak-ng"
# locale = "en-US"
# rate = 0.4                      # 0.5 is normal speed
# pitch = 1.0
# volume = 1.0

# [clips]
# dir = "sounds"                  # relative to ~/.kidlearn/
# extension = "mp3"
# player = "mpg123"              # "afplay" on macOS; must decode the extension
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &KidlearnConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &KidlearnConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Pronunciation: CLI → env → config → default
    let pronunciation = cli
        .pronunciation
        .or_else(|| env_parsed(&env, "KIDLEARN_PRONUNCIATION", SinkKind::parse))
        .or(config.general.pronunciation)
        .unwrap_or_default();

    let boundary_style = cli
        .boundary_style
        .or_else(|| env_parsed(&env, "KIDLEARN_BOUNDARY_STYLE", BoundaryStyle::parse))
        .or(config.general.boundary_style)
        .unwrap_or_default();

    let word_set = cli
        .word_set
        .or_else(|| env_parsed(&env, "KIDLEARN_WORD_SET", WordSet::parse))
        .or(config.letters.word_set)
        .unwrap_or_default();

    let numbers_upper_bound = cli
        .numbers_upper_bound
        .or_else(|| {
            env_parsed(&env, "KIDLEARN_NUMBERS_MAX", |s| {
                s.trim().parse::<u32>().ok()
            })
        })
        .or(config.numbers.upper_bound)
        .unwrap_or(DEFAULT_NUMBERS_UPPER_BOUND)
        .clamp(1, MAX_NUMBERS_UPPER_BOUND);

    let defaults = SpeechSettings::default();
    let speech = SpeechSettings {
        locale: config.speech.locale.clone().unwrap_or(defaults.locale),
        rate: config.speech.rate.unwrap_or(defaults.rate),
        pitch: config.speech.pitch.unwrap_or(defaults.pitch),
        volume: config.speech.volume.unwrap_or(defaults.volume),
    };

    // Clip dir: absolute paths as given, relative ones under ~/.kidlearn/
    let clip_dir = {
        let dir = PathBuf::from(config.clips.dir.as_deref().unwrap_or("sounds"));
        if dir.is_absolute() {
            dir
        } else {
            config_dir().map(|base| base.join(&dir)).unwrap_or(dir)
        }
    };

    ResolvedConfig {
        pronunciation,
        boundary_style,
        pronounce_on_select: config.general.pronounce_on_select.unwrap_or(false),
        word_set,
        word_overrides: config.letters.words.clone(),
        numbers_upper_bound,
        speech_command: config
            .speech
            .command
            .clone()
            .unwrap_or_else(|| DEFAULT_SPEECH_COMMAND.to_string()),
        speech,
        clip_dir,
        clip_extension: config
            .clips
            .extension
            .clone()
            .unwrap_or_else(|| DEFAULT_CLIP_EXTENSION.to_string()),
        clip_player: config
            .clips
            .player
            .clone()
            .unwrap_or_else(|| DEFAULT_CLIP_PLAYER.to_string()),
    }
}

/// Reads and parses an env var, warning (and ignoring it) if unparseable.
fn env_parsed<T>(
    env: &impl Fn(&str) -> Option<String>,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = env(key)?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        warn!("Ignoring {}={:?}: unrecognized value", key, raw);
    }
    parsed
}
