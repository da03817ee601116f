use std::collections::HashSet;

use tracing::{debug, warn};

use crate::angles::deg_to_rad;
use crate::error::{Result, SiteError};
use crate::types::{AoiStatistics, BoundingBox, Centroid, LngLat};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;
pub const ACRES_PER_SQUARE_METER: f64 = 0.000247105;
pub const METERS_PER_KILOMETER: f64 = 1_000.0;

pub fn square_meters_to_hectares(m2: f64) -> f64 {
    m2 / SQUARE_METERS_PER_HECTARE
}

pub fn square_meters_to_acres(m2: f64) -> f64 {
    m2 * ACRES_PER_SQUARE_METER
}

pub fn meters_to_kilometers(m: f64) -> f64 {
    m / METERS_PER_KILOMETER
}

pub fn haversine_distance_meters(a: LngLat, b: LngLat) -> f64 {
    let lat1 = deg_to_rad(a.lat);
    let lat2 = deg_to_rad(b.lat);
    let d_lat = lat2 - lat1;
    let d_lon = deg_to_rad(b.lng - a.lng);
    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Spherical-excess approximation of the area enclosed by a ring, in m².
///
/// Accumulates `Δlon * (2 + sin(lat1) + sin(lat2))` over every edge and scales
/// the absolute sum by `R² / 2`. Good for site-scale polygons; it drifts at
/// high latitude and for very large extents. The ring is expected to be closed.
pub fn ring_area_square_meters(ring: &[LngLat]) -> f64 {
    let sum: f64 = ring
        .windows(2)
        .map(|edge| {
            let (p1, p2) = (edge[0], edge[1]);
            let d_lon = deg_to_rad(p2.lng) - deg_to_rad(p1.lng);
            d_lon * (2.0 + deg_to_rad(p1.lat).sin() + deg_to_rad(p2.lat).sin())
        })
        .sum();
    sum.abs() * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0
}

pub fn ring_perimeter_meters(ring: &[LngLat]) -> f64 {
    ring.windows(2)
        .map(|edge| haversine_distance_meters(edge[0], edge[1]))
        .sum()
}

/// Unweighted mean of the ring's vertices, closing point excluded.
///
/// This is not the area centroid. Concave or very irregular rings will pull it
/// towards densely digitised edges.
pub fn vertex_centroid(ring: &[LngLat]) -> Option<Centroid> {
    let vertices = open_vertices(ring);
    if vertices.is_empty() {
        return None;
    }
    let n = vertices.len() as f64;
    let (lat_sum, lng_sum) = vertices
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
    Some(Centroid {
        lat: lat_sum / n,
        lng: lng_sum / n,
    })
}

pub fn bounding_box(points: &[LngLat]) -> Option<BoundingBox> {
    let first = points.first()?;
    let init = BoundingBox {
        min_lat: first.lat,
        max_lat: first.lat,
        min_lng: first.lng,
        max_lng: first.lng,
    };
    Some(points.iter().skip(1).fold(init, |bb, p| BoundingBox {
        min_lat: bb.min_lat.min(p.lat),
        max_lat: bb.max_lat.max(p.lat),
        min_lng: bb.min_lng.min(p.lng),
        max_lng: bb.max_lng.max(p.lng),
    }))
}

fn open_vertices(ring: &[LngLat]) -> &[LngLat] {
    match ring {
        [first, .., last] if first == last => &ring[..ring.len() - 1],
        _ => ring,
    }
}

fn distinct_vertex_count(vertices: &[LngLat]) -> usize {
    // +0.0 folds -0.0 into 0.0 so both hash alike.
    vertices
        .iter()
        .map(|p| ((p.lng + 0.0).to_bits(), (p.lat + 0.0).to_bits()))
        .collect::<HashSet<_>>()
        .len()
}

fn reject(reason: String) -> SiteError {
    warn!(%reason, "rejected AOI ring");
    SiteError::InvalidGeometry(reason)
}

pub fn validate_ring(ring: &[LngLat]) -> Result<()> {
    if let Some(idx) = ring.iter().position(|p| !p.is_finite()) {
        return Err(reject(format!("coordinate {idx} is not finite")));
    }
    if ring.len() < 4 {
        return Err(reject(format!(
            "ring needs at least 4 points (3 vertices + closing point), got {}",
            ring.len()
        )));
    }
    if ring.first() != ring.last() {
        return Err(reject("ring is not closed: first and last points differ".into()));
    }
    let distinct = distinct_vertex_count(open_vertices(ring));
    if distinct < 3 {
        return Err(reject(format!(
            "ring needs at least 3 distinct vertices, got {distinct}"
        )));
    }
    Ok(())
}

pub fn aoi_statistics(ring: &[LngLat]) -> Result<AoiStatistics> {
    validate_ring(ring)?;

    let vertices = open_vertices(ring);
    let centroid = vertex_centroid(ring)
        .ok_or_else(|| SiteError::InvalidGeometry("ring has no vertices".into()))?;
    let bounding_box = bounding_box(ring)
        .ok_or_else(|| SiteError::InvalidGeometry("ring has no vertices".into()))?;

    let stats = AoiStatistics {
        area_square_meters: ring_area_square_meters(ring),
        perimeter_meters: ring_perimeter_meters(ring),
        centroid,
        bounding_box,
        vertex_count: vertices.len(),
    };
    debug!(
        area_m2 = stats.area_square_meters,
        perimeter_m = stats.perimeter_meters,
        vertices = stats.vertex_count,
        "computed AOI statistics"
    );
    Ok(stats)
}
