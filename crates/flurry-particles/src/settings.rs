//! Simulation settings (parsed from TOML)

use crate::bounds::{Bounds, Viewport};
use crate::profile::SystemType;
use flurry_core::{FlurryError, Result};
use flurry_runtime::ClockSettings;
use serde::Serialize;
use std::path::Path;

/// Host-supplied parameters for a particle system
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSettings {
    pub system_type: SystemType,
    /// Spawn-count multiplier (the intensity slider)
    pub intensity: f64,
    /// Base particle scale (the size slider)
    pub size: f64,
    pub paused: bool,
    /// Fixed seed for reproducible runs; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub viewport: Viewport,
    pub bounds: Bounds,
    pub clock: ClockSettings,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            system_type: SystemType::Water,
            intensity: 30.0,
            size: 10.0,
            paused: false,
            seed: None,
            viewport: Viewport::default(),
            bounds: Bounds::default(),
            clock: ClockSettings::default(),
        }
    }
}

impl SimulationSettings {
    /// Parse settings from a TOML table. Missing keys keep their defaults;
    /// a key holding the wrong kind of value is an `InvalidSetting` error.
    pub fn from_toml(table: &toml::value::Table) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(v) = table.get("system_type") {
            let name = v.as_str().ok_or_else(|| wrong_type("system_type", "a string"))?;
            settings.system_type = name.parse()?;
        }
        if let Some(v) = table.get("intensity") {
            settings.intensity = toml_f64("intensity", v)?;
        }
        if let Some(v) = table.get("size") {
            settings.size = toml_f64("size", v)?;
        }
        if let Some(v) = table.get("paused") {
            settings.paused = v.as_bool().ok_or_else(|| wrong_type("paused", "a boolean"))?;
        }
        if let Some(v) = table.get("seed") {
            settings.seed = Some(toml_u64("seed", v)?);
        }

        if let Some(viewport) = section(table, "viewport")? {
            if let Some(v) = viewport.get("width") {
                settings.viewport.width = toml_f64("viewport.width", v)?;
            }
            if let Some(v) = viewport.get("height") {
                settings.viewport.height = toml_f64("viewport.height", v)?;
            }
        }

        if let Some(bounds) = section(table, "bounds")? {
            if let Some(v) = bounds.get("side_margin") {
                settings.bounds.side_margin = toml_f64("bounds.side_margin", v)?;
            }
            if let Some(v) = bounds.get("bottom_margin") {
                settings.bounds.bottom_margin = toml_f64("bounds.bottom_margin", v)?;
            }
            if let Some(v) = bounds.get("ceiling") {
                settings.bounds.ceiling = toml_f64("bounds.ceiling", v)?;
            }
        }

        if let Some(clock) = section(table, "clock")? {
            if let Some(v) = clock.get("interval_ms") {
                settings.clock.interval_ms = toml_u64("clock.interval_ms", v)?;
            }
            if let Some(v) = clock.get("fixed_dt") {
                settings.clock.fixed_dt = toml_f64("clock.fixed_dt", v)?;
            }
            if let Some(v) = clock.get("fps_window_ms") {
                settings.clock.fps_window_ms = toml_u64("clock.fps_window_ms", v)?;
            }
            if let Some(v) = clock.get("max_catch_up") {
                settings.clock.max_catch_up = toml_f64("clock.max_catch_up", v)?;
            }
        }

        Ok(settings)
    }

    /// Parse and validate settings from TOML source text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: toml::value::Table = toml::from_str(source)?;
        let settings = Self::from_toml(&table)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_toml_str(&source)?;
        log::debug!("[settings] loaded {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        check_range("viewport.width", self.viewport.width, 1.0, 100_000.0)?;
        check_range("viewport.height", self.viewport.height, 1.0, 100_000.0)?;
        check_range("intensity", self.intensity, 0.0, 10_000.0)?;
        check_range("size", self.size, 0.0, 10_000.0)?;
        check_range("clock.fixed_dt", self.clock.fixed_dt, 1e-6, 1.0)?;
        check_range("clock.max_catch_up", self.clock.max_catch_up, 0.0, 10.0)?;

        for (field, value) in [
            ("bounds.side_margin", self.bounds.side_margin),
            ("bounds.bottom_margin", self.bounds.bottom_margin),
            ("bounds.ceiling", self.bounds.ceiling),
        ] {
            if !value.is_finite() {
                return Err(FlurryError::InvalidSetting {
                    field: field.into(),
                    reason: "must be a finite number".into(),
                });
            }
        }

        if self.clock.interval_ms == 0 {
            return Err(FlurryError::InvalidSetting {
                field: "clock.interval_ms".into(),
                reason: "must be positive".into(),
            });
        }
        if self.clock.fps_window_ms == 0 {
            return Err(FlurryError::InvalidSetting {
                field: "clock.fps_window_ms".into(),
                reason: "must be positive".into(),
            });
        }
        Ok(())
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
    // NaN fails both comparisons
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(FlurryError::ValueOutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn wrong_type(field: &str, expected: &str) -> FlurryError {
    FlurryError::InvalidSetting {
        field: field.into(),
        reason: format!("expected {expected}"),
    }
}

fn section<'a>(table: &'a toml::value::Table, name: &str) -> Result<Option<&'a toml::value::Table>> {
    match table.get(name) {
        None => Ok(None),
        Some(v) => v
            .as_table()
            .map(Some)
            .ok_or_else(|| wrong_type(name, "a table")),
    }
}

fn toml_f64(field: &str, v: &toml::Value) -> Result<f64> {
    v.as_float()
        .or_else(|| v.as_integer().map(|i| i as f64))
        .ok_or_else(|| wrong_type(field, "a number"))
}

fn toml_u64(field: &str, v: &toml::Value) -> Result<u64> {
    v.as_integer()
        .and_then(|i| u64::try_from(i).ok())
        .ok_or_else(|| wrong_type(field, "a non-negative integer"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        let settings = SimulationSettings::default();
        settings.validate().unwrap();
        assert_eq!(settings.system_type, SystemType::Water);
        assert_eq!(settings.clock.interval_ms, 16);
    }

    #[test]
    fn parse_from_toml() {
        let toml_str = r#"
system_type = "smoke"
intensity = 45
size = 12.5
seed = 7

[viewport]
width = 1024
height = 768.0

[bounds]
ceiling = -200

[clock]
interval_ms = 33
fixed_dt = 0.033
"#;
        let settings = SimulationSettings::from_toml_str(toml_str).unwrap();
        assert_eq!(settings.system_type, SystemType::Smoke);
        assert!((settings.intensity - 45.0).abs() < 1e-12);
        assert!((settings.size - 12.5).abs() < 1e-12);
        assert_eq!(settings.seed, Some(7));
        assert!((settings.viewport.width - 1024.0).abs() < 1e-12);
        assert!((settings.bounds.ceiling + 200.0).abs() < 1e-12);
        assert!((settings.bounds.side_margin - 50.0).abs() < 1e-12);
        assert_eq!(settings.clock.interval_ms, 33);
        assert_eq!(settings.clock.fps_window_ms, 1000);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = SimulationSettings::from_toml_str("system_type = \"fire\"").unwrap_err();
        assert!(matches!(err, FlurryError::InvalidSetting { .. }));
    }

    #[test]
    fn wrongly_typed_values_are_rejected() {
        for source in [
            "paused = \"yes\"",
            "seed = -1",
            "seed = 1.5",
            "intensity = \"high\"",
            "viewport = 800",
            "[clock]\ninterval_ms = -16",
            "[bounds]\nceiling = true",
        ] {
            let err = SimulationSettings::from_toml_str(source).unwrap_err();
            assert!(
                matches!(err, FlurryError::InvalidSetting { .. }),
                "{source}: {err:?}"
            );
        }
    }

    #[test]
    fn paused_flag_parses() {
        let settings = SimulationSettings::from_toml_str("paused = true").unwrap();
        assert!(settings.paused);
    }

    #[test]
    fn zero_viewport_is_rejected() {
        let err = SimulationSettings::from_toml_str("[viewport]\nwidth = 0").unwrap_err();
        assert!(matches!(err, FlurryError::ValueOutOfRange { .. }));
    }

    #[test]
    fn nan_size_is_rejected() {
        let settings = SimulationSettings {
            size: f64::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn serializes_back_to_toml() {
        let settings = SimulationSettings {
            seed: Some(99),
            system_type: SystemType::Sparks,
            ..Default::default()
        };
        let text = settings.to_toml_string().unwrap();
        assert!(text.contains("system_type = \"sparks\""));
        assert!(text.contains("seed = 99"));
        assert!(text.contains("[viewport]"));

        let reparsed = SimulationSettings::from_toml_str(&text).unwrap();
        assert_eq!(reparsed, settings);
    }
}
