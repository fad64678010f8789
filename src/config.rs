//! Runtime configuration from `PAIRS_*` environment variables.
//!
//! - `PAIRS_BOARD`: `small`/`easy`, `medium`, `large`/`hard` (default: small)
//! - `PAIRS_SEED`: deal seed, any `u32` including 0 (default: derived from the clock)
//! - `PAIRS_CONTENT_DIR`: directory of `<name>.json` custom games (default: `games`)
//! - `PAIRS_GAME`: custom game to load at start
//! - `PAIRS_LOG_PATH`: write logs to this file (logging is off without it)
//! - `PAIRS_LOG`: log filter (default: `info`)
//!
//! Unparseable values fall back to their defaults.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::BoardSize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub board_size: BoardSize,
    pub seed: u32,
    pub content_dir: PathBuf,
    pub game: Option<String>,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            seed: clock_seed(),
            content_dir: PathBuf::from("games"),
            game: None,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| non_empty(lookup(key));
        let defaults = Self::default();

        let board_size = get("PAIRS_BOARD")
            .and_then(|s| BoardSize::parse(&s))
            .unwrap_or(defaults.board_size);
        let seed = get("PAIRS_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);
        let content_dir = get("PAIRS_CONTENT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.content_dir);

        Self {
            board_size,
            seed,
            content_dir,
            game: get("PAIRS_GAME"),
            log_path: get("PAIRS_LOG_PATH").map(PathBuf::from),
            log_filter: get("PAIRS_LOG").unwrap_or(defaults.log_filter),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    // Fold so both fast- and slow-moving bits contribute.
    (nanos ^ (nanos >> 32)) as u32
}
