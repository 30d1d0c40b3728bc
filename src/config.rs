//! Game configuration stored in a TOML file (default `wordle.toml`).
//!
//! Every key is optional. A missing, mistyped or out-of-range value falls back
//! to that field's default with a warning; the game never refuses to start
//! because of configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default location looked up when no `--config` flag is given.
pub const DEFAULT_CONFIG_PATH: &str = "wordle.toml";

/// Typed game settings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed per game.
    pub max_attempts: usize,

    /// Letters per word. The embedded word lists only cover 5.
    pub word_length: usize,

    /// Glyphs for Absent, Present and Correct, in that order.
    pub display_symbols: [String; 3],

    /// Pick the target from today's date instead of at random.
    pub seed_from_date: bool,

    /// Verbose logging, including the selected target word.
    pub debug_mode: bool,

    /// Custom accepted-guess list; the embedded list is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_path: Option<PathBuf>,

    /// Custom target list; the embedded list is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            word_length: 5,
            display_symbols: ["⬛".to_string(), "🟨".to_string(), "🟩".to_string()],
            seed_from_date: false,
            debug_mode: false,
            allowed_path: None,
            targets_path: None,
        }
    }
}

/// Untyped view of the file; each field is validated on its own.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    max_attempts: Option<toml::Value>,
    word_length: Option<toml::Value>,
    display_symbols: Option<toml::Value>,
    seed_from_date: Option<toml::Value>,
    debug_mode: Option<toml::Value>,
    allowed_path: Option<toml::Value>,
    targets_path: Option<toml::Value>,
    #[serde(flatten)]
    unknown: toml::Table,
}

impl GameConfig {
    /// Parse TOML text, falling back to defaults field by field.
    #[must_use]
    pub fn parse(contents: &str) -> Self {
        let raw: RawConfig = match toml::from_str(contents) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "config is not valid TOML, using defaults");
                return Self::default();
            }
        };

        for key in raw.unknown.keys() {
            warn!(key = %key, "ignoring unknown config key");
        }

        let defaults = Self::default();
        Self {
            max_attempts: positive("max_attempts", raw.max_attempts, defaults.max_attempts),
            word_length: positive("word_length", raw.word_length, defaults.word_length),
            display_symbols: symbols(raw.display_symbols, defaults.display_symbols),
            seed_from_date: flag("seed_from_date", raw.seed_from_date, defaults.seed_from_date),
            debug_mode: flag("debug_mode", raw.debug_mode, defaults.debug_mode),
            allowed_path: path("allowed_path", raw.allowed_path),
            targets_path: path("targets_path", raw.targets_path),
        }
    }

    /// Serialize to TOML, e.g. to show the effective settings.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize config toml")
    }
}

/// Load config from a TOML file.
///
/// A missing file yields `GameConfig::default()`. Read failures other than
/// "not found" are errors.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_config(path: &Path) -> Result<GameConfig> {
    if !path.exists() {
        return Ok(GameConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(GameConfig::parse(&contents))
}

fn positive(key: &str, value: Option<toml::Value>, default: usize) -> usize {
    match value {
        None => default,
        Some(toml::Value::Integer(n)) if n >= 1 => usize::try_from(n).unwrap_or_else(|_| {
            warn!(key, value = n, "config value out of range, using default");
            default
        }),
        Some(other) => {
            warn!(key, value = %other, "expected a positive integer, using default");
            default
        }
    }
}

fn flag(key: &str, value: Option<toml::Value>, default: bool) -> bool {
    match value {
        None => default,
        Some(toml::Value::Boolean(b)) => b,
        Some(other) => {
            warn!(key, value = %other, "expected true or false, using default");
            default
        }
    }
}

fn path(key: &str, value: Option<toml::Value>) -> Option<PathBuf> {
    match value {
        None => None,
        Some(toml::Value::String(s)) if !s.trim().is_empty() => Some(PathBuf::from(s)),
        Some(other) => {
            warn!(key, value = %other, "expected a file path, ignoring");
            None
        }
    }
}

fn symbols(value: Option<toml::Value>, default: [String; 3]) -> [String; 3] {
    let Some(value) = value else {
        return default;
    };

    let parsed = match &value {
        toml::Value::Array(items) => items
            .iter()
            .map(|item| match item {
                toml::Value::String(s) if !s.is_empty() => Some(s.clone()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .and_then(|v| <[String; 3]>::try_from(v).ok()),
        // Three glyphs written together, e.g. ".?!"
        toml::Value::String(s) => {
            let glyphs: Vec<String> = s.chars().map(String::from).collect();
            <[String; 3]>::try_from(glyphs).ok()
        }
        _ => None,
    };

    parsed.unwrap_or_else(|| {
        warn!(key = "display_symbols", value = %value, "expected exactly three glyphs, using default");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(GameConfig::parse(""), GameConfig::default());
    }

    #[test]
    fn defaults_match_classic_rules() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.max_attempts, 6);
        assert_eq!(cfg.word_length, 5);
        assert!(!cfg.seed_from_date);
        assert!(!cfg.debug_mode);
    }

    #[test]
    fn parses_all_fields() {
        let cfg = GameConfig::parse(
            r#"
            max_attempts = 8
            word_length = 6
            display_symbols = ["-", "?", "!"]
            seed_from_date = true
            debug_mode = true
            allowed_path = "lists/allowed.txt"
            targets_path = "lists/targets.txt"
            "#,
        );

        assert_eq!(cfg.max_attempts, 8);
        assert_eq!(cfg.word_length, 6);
        assert_eq!(cfg.display_symbols, ["-", "?", "!"].map(String::from));
        assert!(cfg.seed_from_date);
        assert!(cfg.debug_mode);
        assert_eq!(cfg.allowed_path, Some(PathBuf::from("lists/allowed.txt")));
        assert_eq!(cfg.targets_path, Some(PathBuf::from("lists/targets.txt")));
    }

    #[test]
    fn invalid_values_fall_back_per_field() {
        let cfg = GameConfig::parse(
            r#"
            max_attempts = 0
            word_length = "five"
            display_symbols = ["a", "b"]
            seed_from_date = "yes"
            debug_mode = true
            "#,
        );

        let defaults = GameConfig::default();
        assert_eq!(cfg.max_attempts, defaults.max_attempts);
        assert_eq!(cfg.word_length, defaults.word_length);
        assert_eq!(cfg.display_symbols, defaults.display_symbols);
        assert_eq!(cfg.seed_from_date, defaults.seed_from_date);
        assert!(cfg.debug_mode);
    }

    #[test]
    fn negative_attempts_fall_back() {
        let cfg = GameConfig::parse("max_attempts = -3");
        assert_eq!(cfg.max_attempts, 6);
    }

    #[test]
    fn symbols_accept_compact_string() {
        let cfg = GameConfig::parse(r#"display_symbols = ".?!""#);
        assert_eq!(cfg.display_symbols, [".", "?", "!"].map(String::from));

        let cfg = GameConfig::parse(r#"display_symbols = ".?""#);
        assert_eq!(cfg.display_symbols, GameConfig::default().display_symbols);
    }

    #[test]
    fn malformed_toml_is_default() {
        assert_eq!(GameConfig::parse("max_attempts = = 3"), GameConfig::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = GameConfig::parse("colour = \"blue\"\nmax_attempts = 4");
        assert_eq!(cfg.max_attempts, 4);
    }

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn load_reads_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("wordle.toml");
        fs::write(&path, "max_attempts = 3\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.max_attempts, 3);
    }

    #[test]
    fn to_toml_round_trips() {
        let cfg = GameConfig {
            max_attempts: 4,
            seed_from_date: true,
            ..GameConfig::default()
        };
        let text = cfg.to_toml().expect("serialize");
        assert_eq!(GameConfig::parse(&text), cfg);
    }
}
