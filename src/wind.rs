use tracing::debug;

use crate::angles::deg_to_rad;
use crate::config::{step_count, WindConfig, MAX_POINTS};
use crate::error::{Result, SiteError};
use crate::types::{LngLat, WindAnalysis};

/// Point `radius_deg` away from `center` on the given compass bearing,
/// measured in raw degrees (no cos-latitude correction).
fn offset(center: LngLat, bearing_degrees: f64, radius_deg: f64) -> LngLat {
    let rad = deg_to_rad(bearing_degrees);
    LngLat::new(center.lng + rad.sin() * radius_deg, center.lat + rad.cos() * radius_deg)
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SiteError::InvalidInput(format!("{name} {value} must be positive")))
    }
}

/// Pie-slice ring: centre, arc points from `start` stepping by `step` while
/// `<= end`, then back to the centre.
pub fn wind_sector(
    center: LngLat,
    start_degrees: f64,
    end_degrees: f64,
    radius_deg: f64,
    step_degrees: f64,
) -> Result<Vec<LngLat>> {
    positive("sector radius", radius_deg)?;
    positive("arc step", step_degrees)?;
    if !(start_degrees.is_finite() && end_degrees.is_finite()) || end_degrees < start_degrees {
        return Err(SiteError::InvalidInput(format!(
            "sector {start_degrees}..{end_degrees} is not an increasing bearing range"
        )));
    }

    let steps = step_count("arc", end_degrees - start_degrees, step_degrees)?;
    let mut ring = Vec::with_capacity(steps + 3);
    ring.push(center);
    ring.extend((0..=steps).map(|i| offset(center, start_degrees + i as f64 * step_degrees, radius_deg)));
    ring.push(center);
    Ok(ring)
}

fn check_arrow_count(count: usize) -> Result<()> {
    if count > MAX_POINTS {
        return Err(SiteError::InvalidInput(format!(
            "arrow count {count} exceeds {MAX_POINTS}"
        )));
    }
    Ok(())
}

pub fn arrow_anchors(center: LngLat, radius_deg: f64, count: usize) -> Result<Vec<LngLat>> {
    check_arrow_count(count)?;
    Ok((0..count)
        .map(|i| offset(center, i as f64 * 360.0 / count as f64, radius_deg))
        .collect())
}

pub fn validate_wind_config(config: &WindConfig) -> Result<()> {
    positive("sector radius", config.sector_radius_deg)?;
    positive("primary area radius", config.primary_area_radius_deg)?;
    positive("secondary area radius", config.secondary_area_radius_deg)?;
    positive("arc step", config.arc_step_degrees)?;
    positive("arrow radius", config.arrow_radius_deg)?;
    if config.primary_end < config.primary_start || config.secondary_end < config.secondary_start {
        return Err(SiteError::InvalidInput(
            "wind sector end bearing precedes start bearing".into(),
        ));
    }
    step_count("arc", config.primary_end - config.primary_start, config.arc_step_degrees)?;
    step_count("arc", config.secondary_end - config.secondary_start, config.arc_step_degrees)?;
    check_arrow_count(config.arrow_count)
}

pub fn wind_analysis(center: LngLat, config: &WindConfig) -> Result<WindAnalysis> {
    validate_wind_config(config)?;
    let sector = |start, end, radius| wind_sector(center, start, end, radius, config.arc_step_degrees);

    let analysis = WindAnalysis {
        direction_degrees: config.direction_degrees,
        speed_kmh: config.speed_kmh,
        primary_sector: sector(config.primary_start, config.primary_end, config.sector_radius_deg)?,
        secondary_sector: sector(
            config.secondary_start,
            config.secondary_end,
            config.sector_radius_deg,
        )?,
        primary_area: sector(
            config.primary_start,
            config.primary_end,
            config.primary_area_radius_deg,
        )?,
        secondary_area: sector(
            config.secondary_start,
            config.secondary_end,
            config.secondary_area_radius_deg,
        )?,
        arrows: arrow_anchors(center, config.arrow_radius_deg, config.arrow_count)?,
    };
    debug!(
        direction = analysis.direction_degrees,
        arrows = analysis.arrows.len(),
        "built wind analysis"
    );
    Ok(analysis)
}
