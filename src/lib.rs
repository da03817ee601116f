pub mod angles;
pub mod config;
pub mod error;
pub mod geometry;
pub mod pond;
pub mod project;
pub mod sun_path;
pub mod types;
pub mod wind;

pub use angles::{
    day_of_year, deg_to_rad, hour_angle, rad_to_deg, solar_azimuth, solar_declination,
    solar_elevation, sun_position, sun_position_at, DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
};

pub use config::{ConfigError, SeasonalConfig, SiteConfig, SunPathConfig, WindConfig};

pub use error::{Result, SiteError};

pub use geometry::{
    aoi_statistics, bounding_box, haversine_distance_meters, meters_to_kilometers,
    ring_area_square_meters, ring_perimeter_meters, square_meters_to_acres,
    square_meters_to_hectares, validate_ring, vertex_centroid, EARTH_RADIUS_M,
};

pub use pond::pond_volume;

pub use project::{bbox_query, from_project_json, to_project_json, ProjectStats};

pub use sun_path::{
    project_marker, sample_hours, sample_sun_path, seasonal_instant, seasonal_markers,
    summer_solstice, winter_solstice,
};

pub use types::{
    AoiStatistics, BoundingBox, Centroid, LngLat, PondVolume, SeasonalEvent, SeasonalMarker,
    SolarPosition, SunPathSample, WindAnalysis,
};

pub use wind::{arrow_anchors, wind_analysis, wind_sector};
