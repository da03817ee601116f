use crate::error::{Result, SiteError};
use crate::types::PondVolume;

pub const LITERS_PER_CUBIC_METER: f64 = 1_000.0;
pub const US_GALLONS_PER_CUBIC_METER: f64 = 264.172;
/// Dig 30% more than the finished volume.
pub const EXCAVATION_FACTOR: f64 = 1.3;

pub fn pond_volume(area_square_meters: f64, depth_meters: f64) -> Result<PondVolume> {
    for (name, value) in [("area", area_square_meters), ("depth", depth_meters)] {
        if !(value.is_finite() && value > 0.0) {
            tracing::warn!(name, value, "rejected pond dimension");
            return Err(SiteError::InvalidInput(format!(
                "pond {name} {value} must be a positive number"
            )));
        }
    }
    let volume = area_square_meters * depth_meters;
    Ok(PondVolume {
        volume_cubic_meters: volume,
        volume_liters: volume * LITERS_PER_CUBIC_METER,
        volume_gallons: volume * US_GALLONS_PER_CUBIC_METER,
        estimated_excavation: volume * EXCAVATION_FACTOR,
    })
}
