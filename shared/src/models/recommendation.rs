//! Crop recommendation models

use serde::{Deserialize, Serialize};

/// Crops the engine can recommend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Crop {
    Wheat,
    Rice,
    Corn,
    Potato,
}

impl Crop {
    pub const ALL: [Crop; 4] = [Crop::Wheat, Crop::Rice, Crop::Corn, Crop::Potato];

    pub fn name(&self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Rice => "Rice",
            Crop::Corn => "Corn",
            Crop::Potato => "Potato",
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Overall soil health rating, best first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SoilHealth {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl SoilHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilHealth::Excellent => "excellent",
            SoilHealth::Good => "good",
            SoilHealth::Moderate => "moderate",
            SoilHealth::Poor => "poor",
        }
    }

    /// Badge text shown next to a recommendation, e.g. "Excellent Soil"
    pub fn label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("{}{} Soil", first.to_ascii_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }
}

impl std::fmt::Display for SoilHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status tier of a single nutrient, best first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NutrientTier {
    Optimal,
    Adequate,
    Low,
}

impl std::fmt::Display for NutrientTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NutrientTier::Optimal => write!(f, "Optimal"),
            NutrientTier::Adequate => write!(f, "Adequate"),
            NutrientTier::Low => write!(f, "Low"),
        }
    }
}

/// Per-nutrient status of a sample
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutrientStatus {
    pub nitrogen: NutrientTier,
    pub phosphorus: NutrientTier,
    pub potassium: NutrientTier,
}

/// Secondary crop grown alongside the recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanionCrop {
    pub name: String,
    pub description: String,
    pub note: String,
}

/// Result of a soil analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub crop: Crop,
    /// Percentage fixed by the matched rule
    pub confidence: u8,
    pub soil_health: SoilHealth,
    pub nutrients: NutrientStatus,
    pub tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companion_crop: Option<CompanionCrop>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organic_fertilizers: Vec<String>,
}

/// Where a recommendation came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    /// Upstream prediction service
    Remote,
    /// Local rule engine (offline / demo mode)
    Local,
}

impl AnalysisSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisSource::Remote => "remote",
            AnalysisSource::Local => "local",
        }
    }

    pub fn notice_title(&self) -> &'static str {
        match self {
            AnalysisSource::Remote => "Analysis Complete",
            AnalysisSource::Local => "Demo Mode",
        }
    }

    pub fn notice_description(&self) -> &'static str {
        match self {
            AnalysisSource::Remote => "Your soil has been analyzed successfully!",
            AnalysisSource::Local => {
                "Showing sample recommendation. Connect your backend API for real results."
            }
        }
    }
}

impl std::fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soil_health_ordering() {
        assert!(SoilHealth::Excellent < SoilHealth::Good);
        assert!(SoilHealth::Good < SoilHealth::Moderate);
        assert!(SoilHealth::Moderate < SoilHealth::Poor);
    }

    #[test]
    fn test_soil_health_label() {
        assert_eq!(SoilHealth::Excellent.label(), "Excellent Soil");
        assert_eq!(SoilHealth::Poor.label(), "Poor Soil");
    }

    #[test]
    fn test_analysis_source_notices() {
        assert_eq!(AnalysisSource::Remote.notice_title(), "Analysis Complete");
        assert_eq!(
            AnalysisSource::Remote.notice_description(),
            "Your soil has been analyzed successfully!"
        );
        assert_eq!(AnalysisSource::Local.notice_title(), "Demo Mode");
        assert_eq!(
            AnalysisSource::Local.notice_description(),
            "Showing sample recommendation. Connect your backend API for real results."
        );
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Crop::Potato).unwrap(), "\"Potato\"");
        assert_eq!(serde_json::to_string(&SoilHealth::Moderate).unwrap(), "\"moderate\"");
        assert_eq!(serde_json::to_string(&NutrientTier::Adequate).unwrap(), "\"Adequate\"");
    }

    #[test]
    fn test_remote_shape_without_extensions() {
        let json = r#"{
            "crop": "Corn",
            "confidence": 88,
            "soilHealth": "good",
            "nutrients": {"nitrogen": "Adequate", "phosphorus": "Low", "potassium": "Optimal"},
            "tips": ["Water early"]
        }"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();

        assert_eq!(rec.crop, Crop::Corn);
        assert_eq!(rec.nutrients.phosphorus, NutrientTier::Low);
        assert!(rec.companion_crop.is_none());
        assert!(rec.organic_fertilizers.is_empty());
    }
}
