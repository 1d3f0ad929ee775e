//! Soil sample models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A soil measurement submitted for analysis.
///
/// Nutrient values are in kg/ha. The engine reads only N, P, K and pH;
/// `moisture`, `city` and `organic_carbon` travel with the sample so the
/// same body can be forwarded to a remote prediction service unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SoilSample {
    #[validate(range(min = 0.0, message = "Nitrogen cannot be negative"))]
    pub nitrogen: f64,
    #[validate(range(min = 0.0, message = "Phosphorus cannot be negative"))]
    pub phosphorus: f64,
    #[validate(range(min = 0.0, message = "Potassium cannot be negative"))]
    pub potassium: f64,
    #[validate(range(min = 0.0, max = 14.0, message = "pH must be between 0 and 14"))]
    pub ph: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Moisture must be between 0 and 100%"))]
    pub moisture: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 100.0, message = "Organic carbon must be between 0 and 100%"))]
    pub organic_carbon: Option<f64>,
}

impl SoilSample {
    pub fn new(nitrogen: f64, phosphorus: f64, potassium: f64, ph: f64, moisture: f64) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
            ph,
            moisture,
            city: None,
            organic_carbon: None,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// The four readings the classifiers depend on
    pub fn reading(&self) -> NpkReading {
        NpkReading {
            nitrogen: self.nitrogen,
            phosphorus: self.phosphorus,
            potassium: self.potassium,
            ph: self.ph,
        }
    }
}

/// Nitrogen, phosphorus, potassium and pH of a sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpkReading {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
}

impl NpkReading {
    pub fn new(nitrogen: f64, phosphorus: f64, potassium: f64, ph: f64) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
            ph,
        }
    }

    /// Mean of the three macronutrients
    pub fn nutrient_average(&self) -> f64 {
        (self.nitrogen + self.phosphorus + self.potassium) / 3.0
    }
}

/// Raw form input, every field as typed by the user
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SoilForm {
    #[serde(default)]
    pub nitrogen: String,
    #[serde(default)]
    pub phosphorus: String,
    #[serde(default)]
    pub potassium: String,
    #[serde(default)]
    pub ph: String,
    #[serde(default)]
    pub moisture: String,
    #[serde(default)]
    pub city: String,
    /// Optional; left blank on the basic form
    #[serde(default, rename = "organicCarbon")]
    pub organic_carbon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_json_field_names() {
        let sample = SoilSample::new(45.0, 30.0, 25.0, 6.5, 35.0).with_city("Pune");
        let json = serde_json::to_value(&sample).unwrap();

        assert_eq!(json["nitrogen"], 45.0);
        assert_eq!(json["ph"], 6.5);
        assert_eq!(json["city"], "Pune");
        assert!(json.get("organicCarbon").is_none());
    }

    #[test]
    fn test_sample_accepts_organic_carbon_without_city() {
        let json = r#"{"nitrogen":10,"phosphorus":12,"potassium":8,"ph":6.8,"moisture":40,"organicCarbon":0.75}"#;
        let sample: SoilSample = serde_json::from_str(json).unwrap();

        assert_eq!(sample.city, None);
        assert_eq!(sample.organic_carbon, Some(0.75));
    }

    #[test]
    fn test_nutrient_average() {
        let reading = NpkReading::new(45.0, 30.0, 25.0, 6.5);
        let avg = reading.nutrient_average();
        assert!((avg - 33.333_333).abs() < 0.001);
    }
}
