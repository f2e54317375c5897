//! Watcher configuration types
//!
//! A `WatcherConfig` describes one input watcher: which input it observes,
//! its thresholds and how each threshold resets after firing. Every field
//! except `watched` has a default so hosts can embed partial tables in
//! their own config files:
//!
//! ```toml
//! watched = "Space"
//! down_timeout_secs = 0.5
//! hit_count_max = 2
//! hit_count_reset = "manual"
//! combo = ["LeftControl", "S"]
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::InputCode;

/// Whether a threshold clears itself right after its signal fires, or waits
/// for the caller to reset it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetMode {
    #[default]
    Auto,
    Manual,
}

impl ResetMode {
    pub fn is_auto(self) -> bool {
        self == ResetMode::Auto
    }
}

/// Configuration for a single input watcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatcherConfig<C = InputCode> {
    /// Input observed for down/release/hit-count behavior
    pub watched: C,

    #[serde(default = "default_true")]
    pub enabled: bool,

    // ─── Hit count ──────────────────────────────────────────────────────────
    /// Completed presses needed to fire the hit-count signal
    #[serde(default = "default_hit_count_max")]
    pub hit_count_max: u32,

    /// Amount added per completed press
    #[serde(default = "default_hit_count_step")]
    pub hit_count_step: u32,

    #[serde(default)]
    pub hit_count_reset: ResetMode,

    // ─── Timeouts ───────────────────────────────────────────────────────────
    /// How long the input may stay down before the down-timeout signal fires
    #[serde(default = "default_timeout_secs")]
    pub down_timeout_secs: f32,

    #[serde(default)]
    pub down_reset: ResetMode,

    /// How long the input may stay released before the release-timeout signal fires
    #[serde(default = "default_timeout_secs")]
    pub release_timeout_secs: f32,

    #[serde(default)]
    pub release_reset: ResetMode,

    // ─── Combo ──────────────────────────────────────────────────────────────
    /// Inputs that must all be down at once; empty means no combo
    #[serde(default = "Vec::new")]
    pub combo: Vec<C>,
}

fn default_true() -> bool {
    true
}

fn default_hit_count_max() -> u32 {
    3
}

fn default_hit_count_step() -> u32 {
    1
}

fn default_timeout_secs() -> f32 {
    1.0
}

impl<C> WatcherConfig<C> {
    /// Default configuration watching `watched`
    pub fn new(watched: C) -> Self {
        Self {
            watched,
            enabled: true,
            hit_count_max: default_hit_count_max(),
            hit_count_step: default_hit_count_step(),
            hit_count_reset: ResetMode::Auto,
            down_timeout_secs: default_timeout_secs(),
            down_reset: ResetMode::Auto,
            release_timeout_secs: default_timeout_secs(),
            release_reset: ResetMode::Auto,
            combo: Vec::new(),
        }
    }

    pub fn down_timeout(&self) -> Duration {
        duration_from_secs(self.down_timeout_secs)
    }

    pub fn release_timeout(&self) -> Duration {
        duration_from_secs(self.release_timeout_secs)
    }

    pub fn has_combo(&self) -> bool {
        !self.combo.is_empty()
    }
}

/// Convert fractional seconds to a `Duration`, clamping degenerate values.
///
/// Negative, zero and NaN inputs become zero; values too large to represent
/// (including infinity) saturate to `Duration::MAX`.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use inputwatch_types::duration_from_secs;
/// assert_eq!(duration_from_secs(0.5), Duration::from_millis(500));
/// assert_eq!(duration_from_secs(-2.0), Duration::ZERO);
/// assert_eq!(duration_from_secs(f32::NAN), Duration::ZERO);
/// assert_eq!(duration_from_secs(f32::INFINITY), Duration::MAX);
/// ```
pub fn duration_from_secs(secs: f32) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Key, MouseButton};

    #[test]
    fn test_parse_minimal_toml() {
        let config: WatcherConfig = toml::from_str(r#"watched = "Space""#).unwrap();
        assert_eq!(config, WatcherConfig::new(InputCode::Key(Key::Space)));
        assert!(config.enabled);
        assert_eq!(config.hit_count_max, 3);
        assert_eq!(config.hit_count_step, 1);
        assert_eq!(config.down_timeout(), Duration::from_secs(1));
        assert!(!config.has_combo());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = r#"
watched = "MouseLeft"
enabled = false
hit_count_max = 2
hit_count_step = 2
hit_count_reset = "manual"
down_timeout_secs = 0.5
down_reset = "manual"
release_timeout_secs = 2.5
release_reset = "auto"
combo = ["ctrl", "S"]
"#;

        let config: WatcherConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.watched, InputCode::Mouse(MouseButton::Left));
        assert!(!config.enabled);
        assert_eq!(config.hit_count_max, 2);
        assert_eq!(config.hit_count_step, 2);
        assert_eq!(config.hit_count_reset, ResetMode::Manual);
        assert_eq!(config.down_timeout(), Duration::from_millis(500));
        assert_eq!(config.down_reset, ResetMode::Manual);
        assert_eq!(config.release_timeout(), Duration::from_millis(2500));
        assert_eq!(config.release_reset, ResetMode::Auto);
        assert_eq!(
            config.combo,
            vec![InputCode::Key(Key::LeftControl), InputCode::Key(Key::S)]
        );
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let result: Result<WatcherConfig, _> = toml::from_str(r#"watched = "Hyper""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_text_codes() {
        let mut config = WatcherConfig::new(InputCode::Key(Key::F1));
        config.combo = vec![InputCode::Mouse(MouseButton::X1)];
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains(r#"watched = "F1""#));
        assert!(text.contains(r#"combo = ["MouseX1"]"#));

        let parsed: WatcherConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_negative_timeout_clamps_to_zero() {
        let mut config = WatcherConfig::new(InputCode::Key(Key::A));
        config.release_timeout_secs = -1.0;
        assert_eq!(config.release_timeout(), Duration::ZERO);
    }

    #[test]
    fn test_duration_from_secs() {
        assert_eq!(duration_from_secs(1.5), Duration::from_millis(1500));
        assert_eq!(duration_from_secs(0.0), Duration::ZERO);
        assert_eq!(duration_from_secs(-0.1), Duration::ZERO);
        assert_eq!(duration_from_secs(f32::NAN), Duration::ZERO);
        assert_eq!(duration_from_secs(f32::MAX), Duration::MAX);
    }
}
