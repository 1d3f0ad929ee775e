//! Soil recommendation engine
//!
//! A pure function of its input: no state is kept between calls and the
//! same sample always yields the same recommendation. Callers validate
//! the sample first (see [`crate::validation`]); non-finite readings are
//! not guarded against here.

mod advisory;
mod crop_rules;
mod nutrients;
mod soil_health;

pub use advisory::*;
pub use crop_rules::*;
pub use nutrients::*;
pub use soil_health::*;

use crate::models::{Recommendation, SoilSample};

/// Build a full recommendation for `sample`
pub fn recommend(sample: &SoilSample) -> Recommendation {
    let reading = sample.reading();
    let CropMatch { crop, confidence } = classify_reading(&reading);
    let advisory = advisory_for(crop);

    Recommendation {
        crop,
        confidence,
        soil_health: health_of(&reading),
        nutrients: classify_nutrients(sample.nitrogen, sample.phosphorus, sample.potassium),
        tips: generate_tips(crop),
        companion_crop: Some(advisory.companion_crop()),
        organic_fertilizers: advisory.fertilizers(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Crop, NutrientTier, SoilHealth};

    #[test]
    fn test_end_to_end_rice() {
        let sample = SoilSample::new(45.0, 30.0, 25.0, 6.5, 35.0);
        let rec = recommend(&sample);

        assert_eq!(rec.crop, Crop::Rice);
        assert_eq!(rec.confidence, 92);
        assert_eq!(rec.soil_health, SoilHealth::Good);
        assert_eq!(rec.nutrients.nitrogen, NutrientTier::Optimal);
        assert_eq!(rec.nutrients.phosphorus, NutrientTier::Adequate);
        assert_eq!(rec.nutrients.potassium, NutrientTier::Adequate);
        assert_eq!(rec.tips[0], "Maintain pH levels between 6.0-7.0 for optimal rice growth");
        assert_eq!(rec.companion_crop.as_ref().map(|c| c.name.as_str()), Some("Azolla"));
        assert_eq!(rec.organic_fertilizers.len(), 3);
    }

    #[test]
    fn test_city_does_not_change_result() {
        let plain = SoilSample::new(12.0, 8.0, 40.0, 6.8, 20.0);
        let located = plain.clone().with_city("Nashik");
        assert_eq!(recommend(&plain), recommend(&located));
    }

    #[test]
    fn test_json_shape() {
        let rec = recommend(&SoilSample::new(10.0, 10.0, 10.0, 6.0, 50.0));
        let json = serde_json::to_value(&rec).unwrap();

        assert_eq!(json["crop"], "Wheat");
        assert_eq!(json["confidence"], 85);
        assert_eq!(json["soilHealth"], "poor");
        assert_eq!(json["nutrients"]["nitrogen"], "Low");
        assert_eq!(json["companionCrop"]["name"], "White Clover");
        assert_eq!(json["organicFertilizers"][1], "Neem cake");
    }
}
