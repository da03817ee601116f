use serde::{Deserialize, Serialize};

use crate::geometry::{meters_to_kilometers, square_meters_to_acres, square_meters_to_hectares};
use crate::types::{AoiStatistics, BoundingBox, Centroid};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaMeasure {
    pub square_meters: f64,
    pub hectares: f64,
    pub acres: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerimeterMeasure {
    pub meters: f64,
    pub kilometers: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub area: AreaMeasure,
    pub perimeter: PerimeterMeasure,
    pub center: Centroid,
    pub bbox: BoundingBox,
    pub vertices: usize,
}

impl From<&AoiStatistics> for ProjectStats {
    fn from(stats: &AoiStatistics) -> Self {
        Self {
            area: AreaMeasure {
                square_meters: stats.area_square_meters,
                hectares: square_meters_to_hectares(stats.area_square_meters),
                acres: square_meters_to_acres(stats.area_square_meters),
            },
            perimeter: PerimeterMeasure {
                meters: stats.perimeter_meters,
                kilometers: meters_to_kilometers(stats.perimeter_meters),
            },
            center: stats.centroid,
            bbox: stats.bounding_box,
            vertices: stats.vertex_count,
        }
    }
}

impl From<ProjectStats> for AoiStatistics {
    fn from(p: ProjectStats) -> Self {
        Self {
            area_square_meters: p.area.square_meters,
            perimeter_meters: p.perimeter.meters,
            centroid: p.center,
            bounding_box: p.bbox,
            vertex_count: p.vertices,
        }
    }
}

pub fn to_project_json(stats: &AoiStatistics) -> serde_json::Result<String> {
    serde_json::to_string(&ProjectStats::from(stats))
}

pub fn from_project_json(json: &str) -> serde_json::Result<AoiStatistics> {
    serde_json::from_str::<ProjectStats>(json).map(AoiStatistics::from)
}

/// `minLng,minLat,maxLng,maxLat`
pub fn bbox_query(bbox: &BoundingBox) -> String {
    format!(
        "{},{},{},{}",
        bbox.min_lng, bbox.min_lat, bbox.max_lng, bbox.max_lat
    )
}
