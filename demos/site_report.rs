use chrono::TimeZone;
use chrono_tz::Europe::Lisbon;

use site_geometry::{
    aoi_statistics, bbox_query, pond_volume, sample_sun_path, seasonal_markers, sun_position_at,
    to_project_json, wind_analysis, LngLat, SiteConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };

    // A small hillside plot in the Alentejo.
    let ring: Vec<LngLat> = [
        [-8.0610, 38.5710],
        [-8.0565, 38.5714],
        [-8.0558, 38.5681],
        [-8.0603, 38.5676],
        [-8.0610, 38.5710],
    ]
    .into_iter()
    .map(LngLat::from)
    .collect();

    let stats = aoi_statistics(&ring)?;
    let center = LngLat::from(stats.centroid);

    println!("=== Area of Interest ===");
    println!(
        "Area: {:.0} m² ({:.2} ha, {:.2} ac)",
        stats.area_square_meters,
        stats.hectares(),
        stats.acres()
    );
    println!("Perimeter: {:.2} km", stats.perimeter_kilometers());
    println!("Centre: {:.5}°N, {:.5}°E", stats.centroid.lat, stats.centroid.lng);
    println!("Vertices: {}", stats.vertex_count);
    println!("bbox query: {}", bbox_query(&stats.bounding_box));
    println!();

    let now = Lisbon.with_ymd_and_hms(2026, 3, 21, 12, 0, 0).single().ok_or("ambiguous time")?;
    println!("=== Sun at {} ===", now);
    match sun_position_at(center.lat, &now)? {
        Some(pos) => println!(
            "Elevation {:.2}°, azimuth {:.2}°",
            pos.elevation_degrees, pos.azimuth_degrees
        ),
        None => println!("Below horizon"),
    }
    println!();

    println!("--- Sun path ---");
    for sample in sample_sun_path(center.lat, now.date_naive(), &config.sun_path)? {
        match sample.position {
            Some(pos) => println!(
                "{:>5.1}h  elev {:>6.2}°  az {:>6.2}°",
                sample.hour, pos.elevation_degrees, pos.azimuth_degrees
            ),
            None => println!("{:>5.1}h  below horizon", sample.hour),
        }
    }
    println!();

    println!("--- Seasonal markers ---");
    for marker in seasonal_markers(center, &config.seasonal)? {
        println!(
            "{:<15} [{:.5}, {:.5}]  elev {:.1}°",
            marker.event.label(),
            marker.point.lng,
            marker.point.lat,
            marker.position.elevation_degrees
        );
    }
    println!();

    let wind = wind_analysis(center, &config.wind)?;
    println!(
        "--- Wind: {} km/h from {}° ({} arrows) ---",
        wind.speed_kmh,
        wind.direction_degrees,
        wind.arrows.len()
    );
    println!();

    let pond = pond_volume(400.0, 1.5)?;
    println!(
        "Pond 400 m² x 1.5 m: {:.0} m³, {:.0} L, excavate {:.0} m³",
        pond.volume_cubic_meters, pond.volume_liters, pond.estimated_excavation
    );
    println!();

    println!("Project JSON: {}", to_project_json(&stats)?);
    Ok(())
}
