use serde::{Deserialize, Serialize};

/// A map coordinate, degrees. Serializes as a GeoJSON `[lng, lat]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn is_finite(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(p: LngLat) -> Self {
        [p.lng, p.lat]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn corner_ring(&self) -> Vec<LngLat> {
        vec![
            LngLat::new(self.min_lng, self.min_lat),
            LngLat::new(self.max_lng, self.min_lat),
            LngLat::new(self.max_lng, self.max_lat),
            LngLat::new(self.min_lng, self.max_lat),
            LngLat::new(self.min_lng, self.min_lat),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub lat: f64,
    pub lng: f64,
}

impl From<Centroid> for LngLat {
    fn from(c: Centroid) -> Self {
        LngLat::new(c.lng, c.lat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AoiStatistics {
    pub area_square_meters: f64,
    pub perimeter_meters: f64,
    pub centroid: Centroid,
    pub bounding_box: BoundingBox,
    pub vertex_count: usize,
}

impl AoiStatistics {
    pub fn hectares(&self) -> f64 {
        crate::geometry::square_meters_to_hectares(self.area_square_meters)
    }

    pub fn acres(&self) -> f64 {
        crate::geometry::square_meters_to_acres(self.area_square_meters)
    }

    pub fn perimeter_kilometers(&self) -> f64 {
        crate::geometry::meters_to_kilometers(self.perimeter_meters)
    }
}

/// Sun position above the horizon.
///
/// `azimuth_degrees` keeps the map-marker convention `atan2(..) + 180`, so it
/// lies in `(0, 360]` and is not a compass bearing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarPosition {
    pub elevation_degrees: f64,
    pub azimuth_degrees: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunPathSample {
    pub hour: f64,
    pub position: Option<SolarPosition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeasonalEvent {
    WinterSunrise,
    WinterSunset,
    SummerSunrise,
    SummerSunset,
}

impl SeasonalEvent {
    pub const ALL: [SeasonalEvent; 4] = [
        SeasonalEvent::WinterSunrise,
        SeasonalEvent::WinterSunset,
        SeasonalEvent::SummerSunrise,
        SeasonalEvent::SummerSunset,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SeasonalEvent::WinterSunrise => "Winter Sunrise",
            SeasonalEvent::WinterSunset => "Winter Sunset",
            SeasonalEvent::SummerSunrise => "Summer Sunrise",
            SeasonalEvent::SummerSunset => "Summer Sunset",
        }
    }

    pub fn is_winter(&self) -> bool {
        matches!(self, SeasonalEvent::WinterSunrise | SeasonalEvent::WinterSunset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalMarker {
    pub event: SeasonalEvent,
    pub position: SolarPosition,
    pub point: LngLat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindAnalysis {
    pub direction_degrees: f64,
    pub speed_kmh: f64,
    pub primary_sector: Vec<LngLat>,
    pub secondary_sector: Vec<LngLat>,
    pub primary_area: Vec<LngLat>,
    pub secondary_area: Vec<LngLat>,
    pub arrows: Vec<LngLat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PondVolume {
    pub volume_cubic_meters: f64,
    pub volume_liters: f64,
    pub volume_gallons: f64,
    pub estimated_excavation: f64,
}
