use chrono::{NaiveDate, TimeZone};
use chrono_tz::Europe::Lisbon;

use site_geometry::angles::*;
use site_geometry::error::SiteError;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── DayOfYear ──

#[test]
fn test_day_of_year_known_dates() {
    assert_eq!(day_of_year(date(2026, 1, 1)), 1);
    assert_eq!(day_of_year(date(2026, 3, 21)), 80);
    assert_eq!(day_of_year(date(2026, 12, 31)), 365);
}

#[test]
fn test_day_of_year_leap_year() {
    assert_eq!(day_of_year(date(2024, 2, 29)), 60);
    assert_eq!(day_of_year(date(2024, 12, 21)), 356);
    assert_eq!(day_of_year(date(2024, 12, 31)), 366);
}

// ── SolarDeclination ──

#[test]
fn test_solar_declination_solstices_equinoxes() {
    assert_approx!(solar_declination(172), 23.45, 0.5);
    assert_approx!(solar_declination(355), -23.45, 0.5);
    assert_approx!(solar_declination(81), 0.0, 0.5);
    assert_approx!(solar_declination(264), 0.0, 1.0);
}

#[test]
fn test_solar_declination_bounded_all_days() {
    for n in 1..=366 {
        let decl = solar_declination(n);
        assert!((-23.45..=23.45).contains(&decl), "Day {}: {}", n, decl);
    }
}

// ── HourAngle ──

#[test]
fn test_hour_angle_known_values() {
    assert_approx!(hour_angle(12.0), 0.0, 1e-12);
    assert_approx!(hour_angle(13.0), 15.0, 1e-12);
    assert_approx!(hour_angle(7.0), -75.0, 1e-12);
    assert_approx!(hour_angle(0.0), -180.0, 1e-12);
    assert_approx!(hour_angle(24.0), 180.0, 1e-12);
}

// ── DegRad roundtrip ──

#[test]
fn test_deg_rad_roundtrip() {
    for &deg in &[0.0, 45.0, 90.0, 180.0, 270.0, 360.0, -45.0, -180.0, 123.456] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-10);
    }
}

// ── Equator at equinox ──

#[test]
fn test_equator_equinox_sun_near_zenith() {
    // Day 81 of a non-leap year.
    let pos = sun_position(0.0, date(2026, 3, 22), 12.0).unwrap().unwrap();
    assert_approx!(pos.elevation_degrees, 90.0, 1.0);
}

// ── Mid-latitude noon ──

#[test]
fn test_mid_latitude_equinox_noon() {
    let pos = sun_position(39.8, date(2026, 3, 21), 12.0).unwrap().unwrap();
    assert_approx!(pos.elevation_degrees, 50.0, 1.0);
    // atan2(0, negative) + 180: the marker convention points noon at 360.
    assert_approx!(pos.azimuth_degrees, 360.0, 1e-9);
}

#[test]
fn test_summer_higher_than_winter() {
    let summer = sun_position(39.8, date(2026, 6, 21), 12.0).unwrap().unwrap();
    let winter = sun_position(39.8, date(2026, 12, 21), 12.0).unwrap().unwrap();
    assert_approx!(summer.elevation_degrees, 90.0 - 39.8 + 23.45, 0.5);
    assert_approx!(winter.elevation_degrees, 90.0 - 39.8 - 23.45, 0.5);
}

#[test]
fn test_southern_hemisphere_reversed_seasons() {
    let jun = sun_position(-33.9, date(2026, 6, 21), 12.0).unwrap().unwrap();
    let dec = sun_position(-33.9, date(2026, 12, 21), 12.0).unwrap().unwrap();
    assert!(jun.elevation_degrees < dec.elevation_degrees);
}

// ── Morning/afternoon symmetry ──

#[test]
fn test_morning_afternoon_symmetry() {
    let am = sun_position(39.8, date(2026, 3, 21), 9.0).unwrap().unwrap();
    let pm = sun_position(39.8, date(2026, 3, 21), 15.0).unwrap().unwrap();
    assert_approx!(am.elevation_degrees, pm.elevation_degrees, 1e-9);
    assert!(am.azimuth_degrees < 90.0, "am azimuth={}", am.azimuth_degrees);
    assert!(pm.azimuth_degrees > 270.0, "pm azimuth={}", pm.azimuth_degrees);
    assert_approx!(am.azimuth_degrees + pm.azimuth_degrees, 360.0, 1e-9);
}

// ── Below horizon ──

#[test]
fn test_midnight_below_horizon() {
    assert_eq!(sun_position(39.8, date(2026, 3, 21), 0.0).unwrap(), None);
    assert_eq!(sun_position(39.8, date(2026, 3, 21), 24.0).unwrap(), None);
}

#[test]
fn test_polar_night_noon_below_horizon() {
    assert_eq!(sun_position(80.0, date(2026, 12, 21), 12.0).unwrap(), None);
}

#[test]
fn test_polar_day_midnight_above_horizon() {
    let pos = sun_position(80.0, date(2026, 6, 21), 0.0).unwrap().unwrap();
    assert!(pos.elevation_degrees > 10.0, "elevation={}", pos.elevation_degrees);
}

#[test]
fn test_positions_never_below_horizon() {
    for lat in [-90.0, -66.5, -33.9, 0.0, 23.45, 51.5, 78.2, 90.0] {
        for month in 1..=12 {
            for half_hours in 0..=48 {
                let hour = half_hours as f64 / 2.0;
                if let Some(pos) = sun_position(lat, date(2026, month, 15), hour).unwrap() {
                    assert!(pos.elevation_degrees >= 0.0);
                    assert!(
                        pos.azimuth_degrees >= 0.0 && pos.azimuth_degrees <= 360.0 + 1e-9,
                        "azimuth={} lat={} month={} hour={}",
                        pos.azimuth_degrees, lat, month, hour
                    );
                }
            }
        }
    }
}

// ── Input validation ──

#[test]
fn test_latitude_out_of_range_rejected() {
    for lat in [90.5, -91.0, f64::NAN, f64::INFINITY] {
        let err = sun_position(lat, date(2026, 3, 21), 12.0).unwrap_err();
        assert!(matches!(err, SiteError::InvalidInput(_)), "lat={}", lat);
    }
}

#[test]
fn test_hour_out_of_range_rejected() {
    for hour in [-0.5, 24.01, f64::NAN] {
        let err = sun_position(45.0, date(2026, 3, 21), hour).unwrap_err();
        assert!(matches!(err, SiteError::InvalidInput(_)), "hour={}", hour);
    }
}

#[test]
fn test_latitude_poles_accepted() {
    assert!(sun_position(90.0, date(2026, 6, 21), 12.0).is_ok());
    assert!(sun_position(-90.0, date(2026, 6, 21), 12.0).is_ok());
}

// ── Zoned datetimes ──

#[test]
fn test_sun_position_at_uses_local_wall_clock() {
    let dt = Lisbon.with_ymd_and_hms(2026, 7, 4, 14, 30, 0).unwrap();
    let zoned = sun_position_at(38.7, &dt).unwrap();
    let direct = sun_position(38.7, date(2026, 7, 4), 14.5).unwrap();
    assert_eq!(zoned, direct);
}

#[test]
fn test_sun_position_at_night() {
    let dt = Lisbon.with_ymd_and_hms(2026, 1, 10, 23, 0, 0).unwrap();
    assert_eq!(sun_position_at(38.7, &dt).unwrap(), None);
}
