use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{Result, SiteError};

/// Upper bound on points generated by one sampled path, arc or arrow ring.
pub const MAX_POINTS: usize = 10_000;

/// Number of whole `step`s that fit in `span`, rejected past [`MAX_POINTS`].
pub(crate) fn step_count(what: &str, span: f64, step: f64) -> Result<usize> {
    // Small slack so 6..=18 step 1 still lands on 18 after rounding.
    let steps = (span / step + 1e-9).floor();
    if !(steps.is_finite() && steps >= 0.0 && steps < MAX_POINTS as f64) {
        return Err(SiteError::InvalidInput(format!(
            "{what} step {step} over {span} yields more than {MAX_POINTS} points"
        )));
    }
    Ok(steps as usize)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunPathConfig {
    pub start_hour: f64,
    pub end_hour: f64,
    pub step_hours: f64,
}

impl Default for SunPathConfig {
    fn default() -> Self {
        Self {
            start_hour: 6.0,
            end_hour: 18.0,
            step_hours: 1.0,
        }
    }
}

impl SunPathConfig {
    pub fn validate(&self) -> Result<()> {
        let in_day = |h: f64| h.is_finite() && (0.0..=24.0).contains(&h);
        if !in_day(self.start_hour) || !in_day(self.end_hour) {
            return Err(SiteError::InvalidInput(format!(
                "sun path hours {}..{} must lie in [0, 24]",
                self.start_hour, self.end_hour
            )));
        }
        if self.end_hour < self.start_hour {
            return Err(SiteError::InvalidInput(
                "sun path end hour precedes start hour".into(),
            ));
        }
        if !(self.step_hours.is_finite() && self.step_hours > 0.0) {
            return Err(SiteError::InvalidInput(format!(
                "sun path step {} must be positive",
                self.step_hours
            )));
        }
        step_count("sun path", self.end_hour - self.start_hour, self.step_hours)?;
        Ok(())
    }
}

/// Instants used for the seasonal sunrise/sunset markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalConfig {
    pub year: i32,
    pub winter_sunrise_hour: f64,
    pub winter_sunset_hour: f64,
    pub summer_sunrise_hour: f64,
    pub summer_sunset_hour: f64,
    /// Distance of a marker from the AOI centre, degrees.
    pub marker_radius_deg: f64,
}

impl Default for SeasonalConfig {
    fn default() -> Self {
        Self {
            year: 2024,
            winter_sunrise_hour: 7.0,
            winter_sunset_hour: 17.0,
            summer_sunrise_hour: 5.0,
            summer_sunset_hour: 19.0,
            marker_radius_deg: 0.015,
        }
    }
}

impl SeasonalConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.marker_radius_deg.is_finite() && self.marker_radius_deg > 0.0) {
            return Err(SiteError::InvalidInput(format!(
                "marker radius {} must be positive",
                self.marker_radius_deg
            )));
        }
        Ok(())
    }
}

/// Bearings in degrees clockwise from north; radii in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    pub direction_degrees: f64,
    pub speed_kmh: f64,
    pub primary_start: f64,
    pub primary_end: f64,
    pub secondary_start: f64,
    pub secondary_end: f64,
    pub sector_radius_deg: f64,
    pub primary_area_radius_deg: f64,
    pub secondary_area_radius_deg: f64,
    pub arc_step_degrees: f64,
    pub arrow_radius_deg: f64,
    pub arrow_count: usize,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            direction_degrees: 315.0,
            speed_kmh: 15.0,
            primary_start: 315.0,
            primary_end: 360.0,
            secondary_start: 270.0,
            secondary_end: 315.0,
            sector_radius_deg: 0.01,
            primary_area_radius_deg: 0.02,
            secondary_area_radius_deg: 0.015,
            arc_step_degrees: 5.0,
            arrow_radius_deg: 0.008,
            arrow_count: 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub sun_path: SunPathConfig,
    pub seasonal: SeasonalConfig,
    pub wind: WindConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] SiteError),
}

impl SiteConfig {
    pub fn from_json_str(s: &str) -> std::result::Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading site config");
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.sun_path.validate()?;
        self.seasonal.validate()?;
        crate::wind::validate_wind_config(&self.wind)
    }
}
