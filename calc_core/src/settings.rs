//! # Settings
//!
//! User-adjustable defaults: the values each form starts with, the
//! preferred unit system and where text exports go. Settings live in a
//! TOML file; every section is optional and falls back to the built-in
//! defaults.
//!
//! ## Example file
//!
//! ```toml
//! [emi]
//! principal = 2500000.0
//! annual_rate_percent = 9.1
//! tenure_years = 15.0
//!
//! [bmi]
//! unit_system = "imperial"
//!
//! [export]
//! output_dir = "exports"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::calculations::bmi::BodyMeasurement;
use crate::calculations::emi::LoanInput;
use crate::errors::{CalcError, CalcResult};
use crate::units::UnitSystem;

/// Root settings container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub emi: EmiDefaults,
    pub bmi: BmiDefaults,
    pub export: ExportSettings,
}

/// Starting values for the EMI form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmiDefaults {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub tenure_years: f64,
}

impl Default for EmiDefaults {
    fn default() -> Self {
        EmiDefaults {
            principal: 500_000.0,
            annual_rate_percent: 8.5,
            tenure_years: 20.0,
        }
    }
}

impl EmiDefaults {
    pub fn to_input(self) -> LoanInput {
        LoanInput::new(self.principal, self.annual_rate_percent, self.tenure_years)
    }
}

/// Starting values for the BMI form, per unit system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BmiDefaults {
    /// Unit system selected when the form opens
    pub unit_system: UnitSystem,
    pub metric_weight_kg: f64,
    pub metric_height_cm: f64,
    pub imperial_weight_lbs: f64,
    pub imperial_height_in: f64,
}

impl Default for BmiDefaults {
    fn default() -> Self {
        let metric = BodyMeasurement::sample(UnitSystem::Metric);
        let imperial = BodyMeasurement::sample(UnitSystem::Imperial);
        BmiDefaults {
            unit_system: UnitSystem::Metric,
            metric_weight_kg: metric.weight,
            metric_height_cm: metric.height,
            imperial_weight_lbs: imperial.weight,
            imperial_height_in: imperial.height,
        }
    }
}

impl BmiDefaults {
    /// Default measurement for a given unit system
    pub fn measurement(self, unit_system: UnitSystem) -> BodyMeasurement {
        match unit_system {
            UnitSystem::Metric => BodyMeasurement::new(self.metric_weight_kg, self.metric_height_cm, unit_system),
            UnitSystem::Imperial => {
                BodyMeasurement::new(self.imperial_weight_lbs, self.imperial_height_in, unit_system)
            }
        }
    }
}

/// Where exported files are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub output_dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            output_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text and validate them.
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        let settings: Settings = toml::from_str(text).map_err(|e| CalcError::config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read settings", path.display().to_string(), e.to_string()))?;
        let settings = Settings::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Load from `path` when given, otherwise use the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> CalcResult<Self> {
        match path {
            Some(path) => Settings::load(path),
            None => Ok(Settings::default()),
        }
    }

    /// Serialize to TOML, e.g. to write a starter settings file.
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::SerializationError { reason: e.to_string() })
    }

    /// Check that the default form values would calculate.
    pub fn validate(&self) -> CalcResult<()> {
        self.emi
            .to_input()
            .validate()
            .map_err(|e| CalcError::config(format!("[emi] {}", e)))?;

        for unit_system in UnitSystem::ALL {
            self.bmi
                .measurement(unit_system)
                .validate()
                .map_err(|e| CalcError::config(format!("[bmi] {} {}", unit_system, e)))?;
        }

        if self.export.output_dir.as_os_str().is_empty() {
            return Err(CalcError::config("[export] output_dir must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_forms() {
        let settings = Settings::default();
        assert_eq!(settings.emi.principal, 500_000.0);
        assert_eq!(settings.emi.annual_rate_percent, 8.5);
        assert_eq!(settings.emi.tenure_years, 20.0);
        assert_eq!(settings.bmi.unit_system, UnitSystem::Metric);
        assert_eq!(settings.bmi.measurement(UnitSystem::Imperial).weight, 154.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings = Settings::from_toml_str("[bmi]\nunit_system = \"imperial\"\n").unwrap();
        assert_eq!(settings.bmi.unit_system, UnitSystem::Imperial);
        assert_eq!(settings.bmi.metric_height_cm, 170.0);
        assert_eq!(settings.emi, EmiDefaults::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_defaults_rejected() {
        let err = Settings::from_toml_str("[emi]\ntenure_years = 0.0\n").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("tenure_years"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = Settings::from_toml_str("[emi\nprincipal = ").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut settings = Settings::default();
        settings.emi.annual_rate_percent = 9.1;
        let text = settings.to_toml_string().unwrap();
        assert_eq!(Settings::from_toml_str(&text).unwrap(), settings);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.toml");
        fs::write(&path, "[emi]\ntenure_years = 15.0\n").unwrap();

        let settings = Settings::load_or_default(Some(&path)).unwrap();
        assert_eq!(settings.emi.tenure_years, 15.0);
        assert_eq!(settings.emi.principal, 500_000.0);

        let missing = Settings::load(&dir.path().join("absent.toml")).unwrap_err();
        assert_eq!(missing.error_code(), "FILE_ERROR");
    }
}
