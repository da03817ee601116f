use chrono::NaiveDate;
use tracing::debug;

use crate::angles::{self, deg_to_rad};
use crate::config::{step_count, SeasonalConfig, SunPathConfig};
use crate::error::{Result, SiteError};
use crate::types::{LngLat, SeasonalEvent, SeasonalMarker, SolarPosition, SunPathSample};

pub fn winter_solstice(year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 21)
        .ok_or_else(|| SiteError::InvalidInput(format!("year {year} out of range")))
}

pub fn summer_solstice(year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 6, 21)
        .ok_or_else(|| SiteError::InvalidInput(format!("year {year} out of range")))
}

/// Hours sampled between `start_hour` and `end_hour` inclusive.
pub fn sample_hours(config: &SunPathConfig) -> Result<Vec<f64>> {
    config.validate()?;
    let steps = step_count("sun path", config.end_hour - config.start_hour, config.step_hours)?;
    Ok((0..=steps)
        .map(|i| config.start_hour + i as f64 * config.step_hours)
        .collect())
}

pub fn sample_sun_path(
    latitude: f64,
    date: NaiveDate,
    config: &SunPathConfig,
) -> Result<Vec<SunPathSample>> {
    let samples = sample_hours(config)?
        .into_iter()
        .map(|hour| {
            angles::sun_position(latitude, date, hour).map(|position| SunPathSample { hour, position })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(
        latitude,
        %date,
        samples = samples.len(),
        daylight = samples.iter().filter(|s| s.position.is_some()).count(),
        "sampled sun path"
    );
    Ok(samples)
}

/// Map point for a sun marker, `radius_deg` from `center` along the azimuth,
/// pulled in by `cos(elevation)`.
pub fn project_marker(center: LngLat, position: &SolarPosition, radius_deg: f64) -> LngLat {
    let az = deg_to_rad(position.azimuth_degrees);
    let reach = radius_deg * deg_to_rad(position.elevation_degrees).cos();
    LngLat::new(center.lng + az.sin() * reach, center.lat + az.cos() * reach)
}

pub fn seasonal_instant(event: SeasonalEvent, config: &SeasonalConfig) -> Result<(NaiveDate, f64)> {
    Ok(match event {
        SeasonalEvent::WinterSunrise => (winter_solstice(config.year)?, config.winter_sunrise_hour),
        SeasonalEvent::WinterSunset => (winter_solstice(config.year)?, config.winter_sunset_hour),
        SeasonalEvent::SummerSunrise => (summer_solstice(config.year)?, config.summer_sunrise_hour),
        SeasonalEvent::SummerSunset => (summer_solstice(config.year)?, config.summer_sunset_hour),
    })
}

/// Sunrise/sunset reference markers on both solstices. Events whose instant
/// falls with the sun below the horizon are left out.
pub fn seasonal_markers(center: LngLat, config: &SeasonalConfig) -> Result<Vec<SeasonalMarker>> {
    config.validate()?;
    let mut markers = Vec::with_capacity(SeasonalEvent::ALL.len());
    for event in SeasonalEvent::ALL {
        let (date, hour) = seasonal_instant(event, config)?;
        match angles::sun_position(center.lat, date, hour)? {
            Some(position) => markers.push(SeasonalMarker {
                event,
                position,
                point: project_marker(center, &position, config.marker_radius_deg),
            }),
            None => debug!(event = event.label(), "no marker, sun below horizon"),
        }
    }
    Ok(markers)
}
