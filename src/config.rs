//! Runtime configuration read from `SNAKE_*` environment variables.
//!
//! - `SNAKE_WIDTH` / `SNAKE_HEIGHT`: grid size in cells (default: fit the terminal)
//! - `SNAKE_TICK_MS`: tick interval in milliseconds (default: 200)
//! - `SNAKE_SEED`: food RNG seed (default: wall clock)
//! - `SNAKE_LOG_PATH`: log file; logging is off when unset or empty
//! - `SNAKE_LOG_LEVEL`: `error`, `warn`, `info`, `debug` or `trace` (default: `info`)
//!
//! Unparseable values fall back to the default.

use log::LevelFilter;

use crate::types::{MIN_TICK_MS, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub tick_ms: u32,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            tick_ms: TICK_MS,
            seed: None,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Create from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u32>().ok());
        let dimension = |key: &str| {
            parsed(key)
                .filter(|&v| v > 0)
                .map(|v| v.min(u16::MAX as u32) as u16)
        };

        let tick_ms = parsed("SNAKE_TICK_MS")
            .map(|v| v.max(MIN_TICK_MS))
            .unwrap_or(TICK_MS);

        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let log_level = lookup("SNAKE_LOG_LEVEL")
            .and_then(|s| s.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            width: dimension("SNAKE_WIDTH"),
            height: dimension("SNAKE_HEIGHT"),
            tick_ms,
            seed: parsed("SNAKE_SEED"),
            log_path,
            log_level,
        }
    }

    /// Grid size: explicit values win, the rest comes from `fit`.
    pub fn grid_size(&self, fit: (u16, u16)) -> (u16, u16) {
        (
            self.width.unwrap_or(fit.0).max(1),
            self.height.unwrap_or(fit.1).max(1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> GameConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[]);
        assert_eq!(c, GameConfig::default());
        assert_eq!(c.tick_ms, 200);
    }

    #[test]
    fn test_values_are_read() {
        let c = config(&[
            ("SNAKE_WIDTH", "30"),
            ("SNAKE_HEIGHT", " 12 "),
            ("SNAKE_TICK_MS", "100"),
            ("SNAKE_SEED", "42"),
            ("SNAKE_LOG_PATH", "/tmp/snake.log"),
            ("SNAKE_LOG_LEVEL", "debug"),
        ]);
        assert_eq!(c.width, Some(30));
        assert_eq!(c.height, Some(12));
        assert_eq!(c.tick_ms, 100);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.log_path.as_deref(), Some("/tmp/snake.log"));
        assert_eq!(c.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let c = config(&[
            ("SNAKE_WIDTH", "0"),
            ("SNAKE_HEIGHT", "tall"),
            ("SNAKE_TICK_MS", "-5"),
            ("SNAKE_LOG_PATH", "  "),
            ("SNAKE_LOG_LEVEL", "loud"),
        ]);
        assert_eq!(c.width, None);
        assert_eq!(c.height, None);
        assert_eq!(c.tick_ms, 200);
        assert_eq!(c.log_path, None);
        assert_eq!(c.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_tick_has_floor() {
        assert_eq!(config(&[("SNAKE_TICK_MS", "1")]).tick_ms, 10);
    }

    #[test]
    fn test_oversized_dimension_is_clamped() {
        assert_eq!(config(&[("SNAKE_WIDTH", "100000")]).width, Some(u16::MAX));
    }

    #[test]
    fn test_grid_size_prefers_explicit_values() {
        let c = config(&[("SNAKE_WIDTH", "15")]);
        assert_eq!(c.grid_size((39, 22)), (15, 22));
        assert_eq!(GameConfig::default().grid_size((0, 0)), (1, 1));
    }
}
