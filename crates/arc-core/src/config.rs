use crate::clock::{DEFAULT_MAX_CATCH_UP, MIN_TIME_STEP};
use crate::parameter::Param;
use crate::waveform::DEFAULT_TIME_STEP;
use serde::Deserialize;
use std::io;
use std::path::Path;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "ARC_SCOPE_CONFIG";

/// Start-up configuration for the oscilloscope window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    /// Simulated seconds per tick; the timer fires every `1000 * time_step` ms.
    pub time_step: f64,
    /// Initial amplitude. Range: 0..10
    pub amplitude: f64,
    /// Initial period in seconds. Range: 1..60
    pub period: f64,
    /// Initial phase in radians. Range: 0..10
    pub phase: f64,
    /// Initial window size in logical pixels.
    pub window_size: [f32; 2],
    /// Most ticks replayed in one frame after a stall.
    pub max_catch_up_ticks: usize,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            amplitude: Param::Amplitude.range().default,
            period: Param::Period.range().default,
            phase: Param::Phase.range().default,
            window_size: [1920.0, 1080.0],
            max_catch_up_ticks: DEFAULT_MAX_CATCH_UP,
        }
    }
}

impl ScopeConfig {
    /// Parse a config from JSON text and sanitize it.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let config: ScopeConfig =
            serde_json::from_str(json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config.sanitized())
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], falling back to
    /// defaults when the variable is unset or the file is unusable.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = Path::new(&path);
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp parameters into range and replace unusable values with defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            log::warn!(
                "Invalid time_step {}, using {}",
                self.time_step,
                defaults.time_step
            );
            self.time_step = defaults.time_step;
        } else if self.time_step < MIN_TIME_STEP {
            log::warn!(
                "time_step {} is below the 1 ms timer resolution, using {}",
                self.time_step,
                MIN_TIME_STEP
            );
            self.time_step = MIN_TIME_STEP;
        }
        self.amplitude = Param::Amplitude.range().clamp(self.amplitude);
        self.period = Param::Period.range().clamp(self.period);
        self.phase = Param::Phase.range().clamp(self.phase);
        if !self.window_size.iter().all(|v| v.is_finite() && *v > 0.0) {
            self.window_size = defaults.window_size;
        }
        self.max_catch_up_ticks = self.max_catch_up_ticks.max(1);
        self
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ScopeConfig::from_json(r#"{ "amplitude": 5 }"#).unwrap();
        assert_eq!(config.amplitude, 5.0);
        assert_eq!(config.period, 30.0);
        assert_eq!(config.time_step, DEFAULT_TIME_STEP);
    }

    #[test]
    fn test_out_of_range_values_are_sanitized() {
        let config =
            ScopeConfig::from_json(r#"{ "period": 0, "time_step": -1, "window_size": [0, 10] }"#)
                .unwrap();
        assert_eq!(config.period, 1.0);
        assert_eq!(config.time_step, DEFAULT_TIME_STEP);
        assert_eq!(config.window_size, [1920.0, 1080.0]);
    }

    #[test]
    fn test_malformed_json_is_invalid_data() {
        let err = ScopeConfig::from_json("{ not json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_sub_millisecond_step_raised_to_timer_floor() {
        let config = ScopeConfig::from_json(r#"{ "time_step": 0.000001 }"#).unwrap();
        assert_eq!(config.time_step, MIN_TIME_STEP);

        // Simulated time must keep pace with the timer interval.
        let clock = crate::TickClock::new(config.time_step, 1);
        assert_eq!(clock.interval().as_secs_f64(), config.time_step);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("arc-scope-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "amplitude": 7, "period": 12, "window_size": [800, 600] }"#)
            .unwrap();
        let config = ScopeConfig::load(&path);
        let _ = std::fs::remove_file(&path);

        let config = config.unwrap();
        assert_eq!(config.amplitude, 7.0);
        assert_eq!(config.period, 12.0);
        assert_eq!(config.window_size, [800.0, 600.0]);
        assert_eq!(config.time_step, DEFAULT_TIME_STEP);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let path = std::env::temp_dir().join("arc-scope-config-does-not-exist.json");
        let err = ScopeConfig::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_from_env() {
        // Single test touching the variable so parallel tests do not race on it.
        std::env::remove_var(CONFIG_ENV_VAR);
        assert_eq!(ScopeConfig::from_env(), ScopeConfig::default());

        let path = std::env::temp_dir().join(format!("arc-scope-env-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "phase": 3 }"#).unwrap();
        std::env::set_var(CONFIG_ENV_VAR, &path);
        let loaded = ScopeConfig::from_env();

        std::fs::write(&path, "{ broken").unwrap();
        let fallback = ScopeConfig::from_env();

        std::env::remove_var(CONFIG_ENV_VAR);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.phase, 3.0);
        assert_eq!(fallback, ScopeConfig::default());
    }
}
