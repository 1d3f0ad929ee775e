//! Overall soil health rating

use crate::models::{NpkReading, SoilHealth};

/// pH band (inclusive) required for an excellent rating
pub const EXCELLENT_PH_RANGE: (f64, f64) = (6.0, 7.5);

/// Classify soil health from the nutrient average and pH.
///
/// Only the excellent tier looks at pH; the lower tiers depend on the
/// average alone, so a rich but alkaline soil still rates as good.
pub fn classify_soil_health(nitrogen: f64, phosphorus: f64, potassium: f64, ph: f64) -> SoilHealth {
    health_of(&NpkReading::new(nitrogen, phosphorus, potassium, ph))
}

pub fn health_of(reading: &NpkReading) -> SoilHealth {
    let avg = reading.nutrient_average();
    let (ph_min, ph_max) = EXCELLENT_PH_RANGE;
    let ph_in_band = reading.ph >= ph_min && reading.ph <= ph_max;

    if avg > 35.0 && ph_in_band {
        SoilHealth::Excellent
    } else if avg > 25.0 {
        SoilHealth::Good
    } else if avg > 15.0 {
        SoilHealth::Moderate
    } else {
        SoilHealth::Poor
    }
}
