//! Unveil configuration system
//!
//! This crate provides centralized configuration management for unveil,
//! loading settings from `unveil.toml` as an alternative to environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for unveil
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UnveilConfig {
    /// Motion policy (kill switch, reduced motion)
    pub motion: MotionConfig,
    /// Default reveal parameters
    pub defaults: DefaultsConfig,
    /// Demo application settings
    pub demo: DemoConfig,
}

/// Motion policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Master switch: when false, reveals apply their final state
    /// immediately and arm no watchers
    pub enabled: bool,
    /// Reduced-motion preference; same degradation as `enabled = false`
    pub reduced: bool,
}

/// Default reveal parameters applied where sequences leave fields unset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Tween duration in milliseconds
    pub duration_ms: f32,
    /// Per-item stagger in milliseconds
    pub stagger_ms: f32,
    /// Easing curve name (linear, ease, ease_in, ease_out, ease_in_out,
    /// power1..power4 with .in/.out/.in_out suffixes)
    pub easing: String,
    /// Entry threshold as a viewport-height fraction
    pub start: f32,
}

/// Demo application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Simulated viewport height in document units
    pub viewport_height: f32,
    /// Scroll distance per simulated wheel step
    pub scroll_step: f32,
    /// Milliseconds of animation clock per tick
    pub tick_ms: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            reduced: false,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            duration_ms: 800.0,
            stagger_ms: 100.0,
            easing: "power3.out".to_string(),
            start: 0.8,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            viewport_height: 900.0,
            scroll_step: 120.0,
            tick_ms: 16.7,
        }
    }
}

impl UnveilConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the unveil.toml configuration file
    ///
    /// # Returns
    /// * `Ok(UnveilConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (unveil.toml in the
    /// current directory) or return default configuration if file doesn't
    /// exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("unveil.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file
    /// values. This allows for temporary overrides without modifying the
    /// config file.
    pub fn merge_with_env(&mut self) {
        // Motion settings
        if let Ok(val) = std::env::var("UNVEIL_MOTION") {
            self.motion.enabled = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Ok(val) = std::env::var("UNVEIL_REDUCED_MOTION") {
            self.motion.reduced = val == "1" || val.eq_ignore_ascii_case("true");
        }

        // Default reveal parameters
        if let Ok(val) = std::env::var("UNVEIL_DURATION_MS") {
            if let Ok(duration) = val.parse::<f32>() {
                self.defaults.duration_ms = duration;
            }
        }
        if let Ok(val) = std::env::var("UNVEIL_STAGGER_MS") {
            if let Ok(stagger) = val.parse::<f32>() {
                self.defaults.stagger_ms = stagger;
            }
        }
        if let Ok(easing) = std::env::var("UNVEIL_EASING") {
            self.defaults.easing = easing;
        }
        if let Ok(val) = std::env::var("UNVEIL_START") {
            if let Ok(start) = val.parse::<f32>() {
                self.defaults.start = start;
            }
        }

        // Demo settings
        if let Ok(val) = std::env::var("UNVEIL_VIEWPORT_HEIGHT") {
            if let Ok(height) = val.parse::<f32>() {
                self.demo.viewport_height = height;
            }
        }
        if let Ok(val) = std::env::var("UNVEIL_SCROLL_STEP") {
            if let Ok(step) = val.parse::<f32>() {
                self.demo.scroll_step = step;
            }
        }
        if let Ok(val) = std::env::var("UNVEIL_TICK_MS") {
            if let Ok(tick) = val.parse::<f32>() {
                self.demo.tick_ms = tick;
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from unveil.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }

    /// Whether reveals should animate at all: both the master switch and
    /// the reduced-motion preference can suppress motion.
    pub fn motion_enabled(&self) -> bool {
        self.motion.enabled && !self.motion.reduced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UnveilConfig::default();
        assert!(config.motion.enabled);
        assert!(!config.motion.reduced);
        assert!(config.motion_enabled());
        assert_eq!(config.defaults.duration_ms, 800.0);
        assert_eq!(config.defaults.easing, "power3.out");
        assert_eq!(config.demo.viewport_height, 900.0);
    }

    #[test]
    fn test_reduced_motion_suppresses() {
        let mut config = UnveilConfig::default();
        config.motion.reduced = true;
        assert!(!config.motion_enabled());

        config.motion.reduced = false;
        config.motion.enabled = false;
        assert!(!config.motion_enabled());
    }

    #[test]
    fn test_toml_serialization() {
        let config = UnveilConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: UnveilConfig = toml::from_str(&toml_str).unwrap();
        assert!(parsed.motion.enabled);
        assert_eq!(parsed.defaults.stagger_ms, 100.0);
    }

    #[test]
    fn test_partial_toml() {
        let config: UnveilConfig = toml::from_str(
            r#"
            [motion]
            reduced = true

            [defaults]
            duration_ms = 500.0
            "#,
        )
        .unwrap();

        assert!(config.motion.enabled);
        assert!(config.motion.reduced);
        assert_eq!(config.defaults.duration_ms, 500.0);
        // Unset fields keep their defaults.
        assert_eq!(config.defaults.start, 0.8);
        assert_eq!(config.demo.scroll_step, 120.0);
    }

    #[test]
    fn test_load_or_default() {
        // Should not panic even if unveil.toml doesn't exist
        let config = UnveilConfig::load_or_default();
        assert!(config.defaults.duration_ms > 0.0);
    }

    #[test]
    fn test_merge_with_env() {
        // Set environment variable
        unsafe {
            std::env::set_var("UNVEIL_DURATION_MS", "640");
            std::env::set_var("UNVEIL_REDUCED_MOTION", "true");
        }

        let mut config = UnveilConfig::default();
        config.merge_with_env();

        assert_eq!(config.defaults.duration_ms, 640.0);
        assert!(config.motion.reduced);
        assert!(!config.motion_enabled());

        // Clean up
        unsafe {
            std::env::remove_var("UNVEIL_DURATION_MS");
            std::env::remove_var("UNVEIL_REDUCED_MOTION");
        }
    }
}
