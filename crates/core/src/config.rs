//! Game configuration: timing, top-out row and seed.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_FALL_DELAY_MS, DEFAULT_SPAWN_DELAY_MS, DEFAULT_TOP_OUT_ROWS};

/// Tunables for one game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Seconds between automatic one-row falls
    pub fall_delay_secs: f32,
    /// Seconds between a landing and the next spawn
    pub spawn_delay_secs: f32,
    /// How many rows below the top row must stay free of locked cells
    pub top_out_rows: usize,
    /// Seed for the default piece picker
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fall_delay_secs: DEFAULT_FALL_DELAY_MS as f32 / 1000.0,
            spawn_delay_secs: DEFAULT_SPAWN_DELAY_MS as f32 / 1000.0,
            top_out_rows: DEFAULT_TOP_OUT_ROWS,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    ///
    /// - `BLOCKFALL_FALL_DELAY_MS`
    /// - `BLOCKFALL_SPAWN_DELAY_MS`
    /// - `BLOCKFALL_TOP_OUT_ROWS`
    /// - `BLOCKFALL_SEED` (wall-clock derived when unset)
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse_ms = |key: &str, default: f32| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u32>().ok())
                .map(|ms| ms as f32 / 1000.0)
                .unwrap_or(default)
        };

        let fall_delay_secs = parse_ms("BLOCKFALL_FALL_DELAY_MS", defaults.fall_delay_secs);
        let spawn_delay_secs = parse_ms("BLOCKFALL_SPAWN_DELAY_MS", defaults.spawn_delay_secs);

        let top_out_rows = lookup("BLOCKFALL_TOP_OUT_ROWS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.top_out_rows);

        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        Self {
            fall_delay_secs,
            spawn_delay_secs,
            top_out_rows,
            seed,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
