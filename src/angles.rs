use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike};
use tracing::{trace, warn};

use crate::error::{Result, SiteError};
use crate::types::SolarPosition;

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

pub fn hour_angle(hour: f64) -> f64 {
    DEGREES_PER_HOUR * (hour - 12.0)
}

pub fn solar_declination(n: u32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * ((284 + n) as f64 / 365.0)).sin()
}

pub fn solar_elevation(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_elev = lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(sin_elev.clamp(-1.0, 1.0).asin())
}

/// Azimuth in the map-marker convention: `atan2(..) + 180`, range `(0, 360]`.
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let y = ha_rad.sin();
    let x = lat_rad.cos() * dec_rad.tan() - lat_rad.sin() * ha_rad.cos();
    rad_to_deg(y.atan2(x)) + 180.0
}

fn check_latitude(latitude: f64) -> Result<()> {
    if latitude.is_finite() && (-90.0..=90.0).contains(&latitude) {
        Ok(())
    } else {
        warn!(latitude, "latitude outside [-90, 90]");
        Err(SiteError::InvalidInput(format!(
            "latitude {latitude} is outside [-90, 90]"
        )))
    }
}

fn check_hour(hour: f64) -> Result<()> {
    if hour.is_finite() && (0.0..=24.0).contains(&hour) {
        Ok(())
    } else {
        warn!(hour, "hour outside [0, 24]");
        Err(SiteError::InvalidInput(format!("hour {hour} is outside [0, 24]")))
    }
}

/// Sun position for a latitude, calendar date and local solar hour.
///
/// Returns `Ok(None)` when the sun is below the horizon.
pub fn sun_position(latitude: f64, date: NaiveDate, hour: f64) -> Result<Option<SolarPosition>> {
    check_latitude(latitude)?;
    check_hour(hour)?;

    let n = day_of_year(date);
    let decl = solar_declination(n);
    let ha = hour_angle(hour);
    let elevation = solar_elevation(latitude, decl, ha);
    if elevation < 0.0 {
        trace!(latitude, %date, hour, elevation, "sun below horizon");
        return Ok(None);
    }
    let azimuth = solar_azimuth(latitude, decl, ha);
    trace!(latitude, %date, hour, elevation, azimuth, "sun position");
    Ok(Some(SolarPosition {
        elevation_degrees: elevation,
        azimuth_degrees: azimuth,
    }))
}

/// Same as [`sun_position`], reading the date and fractional hour off the
/// local wall clock of `dt`, taken as local solar time.
pub fn sun_position_at<Tz: TimeZone>(
    latitude: f64,
    dt: &DateTime<Tz>,
) -> Result<Option<SolarPosition>> {
    let local = dt.naive_local();
    let hour = local.hour() as f64 + local.minute() as f64 / 60.0 + local.second() as f64 / 3600.0;
    sun_position(latitude, local.date(), hour)
}
