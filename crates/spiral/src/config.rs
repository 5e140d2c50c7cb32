use std::env;
use std::time::Duration;

const DEFAULT_TICK_MS: u64 = 200;
const DEFAULT_PLACEHOLDER: char = '-';

pub const TICK_MS_ENV: &str = "SPIRAL_TICK_MS";
pub const PLACEHOLDER_ENV: &str = "SPIRAL_PLACEHOLDER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiralConfig {
    /// Presentation delay between consecutive ticks.
    pub tick_interval: Duration,
    /// Character shown for, and parsed as, an empty cell.
    pub placeholder: char,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl SpiralConfig {
    /// Defaults overridden by `SPIRAL_TICK_MS` and `SPIRAL_PLACEHOLDER`.
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var(TICK_MS_ENV).ok().as_deref(),
            env::var(PLACEHOLDER_ENV).ok().as_deref(),
        )
    }

    fn from_vars(tick_ms: Option<&str>, placeholder: Option<&str>) -> Self {
        Self {
            tick_interval: Duration::from_millis(
                tick_ms
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(DEFAULT_TICK_MS),
            ),
            placeholder: placeholder
                .and_then(|v| single_char(v.trim()))
                .unwrap_or(DEFAULT_PLACEHOLDER),
        }
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
