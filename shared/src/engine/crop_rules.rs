//! Ordered crop rules
//!
//! Rules are evaluated top to bottom and the first match wins. A sample
//! that matches none of them gets [`DEFAULT_MATCH`]. All comparisons are
//! strict, so readings sitting exactly on a threshold (pH 6.0, pH 7.5)
//! fall through to later rules.

use serde::Serialize;

use crate::models::{Crop, NpkReading};

/// Crop chosen for a sample together with its fixed confidence
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CropMatch {
    pub crop: Crop,
    pub confidence: u8,
}

/// A single (predicate, outcome) rule
#[derive(Clone, Copy)]
pub struct CropRule {
    pub id: &'static str,
    pub description: &'static str,
    pub crop: Crop,
    pub confidence: u8,
    pub matches: fn(&NpkReading) -> bool,
}

impl std::fmt::Debug for CropRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CropRule")
            .field("id", &self.id)
            .field("crop", &self.crop)
            .field("confidence", &self.confidence)
            .finish()
    }
}

impl CropRule {
    pub fn outcome(&self) -> CropMatch {
        CropMatch {
            crop: self.crop,
            confidence: self.confidence,
        }
    }
}

pub const CROP_RULES: &[CropRule] = &[
    CropRule {
        id: "rice_high_n_p",
        description: "nitrogen > 40 and phosphorus > 25",
        crop: Crop::Rice,
        confidence: 92,
        matches: high_nitrogen_and_phosphorus,
    },
    CropRule {
        id: "corn_neutral_ph_high_k",
        description: "6 < pH < 7.5 and potassium > 30",
        crop: Crop::Corn,
        confidence: 88,
        matches: neutral_ph_high_potassium,
    },
    CropRule {
        id: "potato_acidic",
        description: "pH < 6",
        crop: Crop::Potato,
        confidence: 79,
        matches: acidic,
    },
];

fn high_nitrogen_and_phosphorus(r: &NpkReading) -> bool {
    r.nitrogen > 40.0 && r.phosphorus > 25.0
}

fn neutral_ph_high_potassium(r: &NpkReading) -> bool {
    r.ph > 6.0 && r.ph < 7.5 && r.potassium > 30.0
}

fn acidic(r: &NpkReading) -> bool {
    r.ph < 6.0
}

pub const DEFAULT_MATCH: CropMatch = CropMatch {
    crop: Crop::Wheat,
    confidence: 85,
};

/// Find the first rule matching `reading`, if any
pub fn matching_rule(reading: &NpkReading) -> Option<&'static CropRule> {
    CROP_RULES.iter().find(|rule| (rule.matches)(reading))
}

/// Classify the crop for a sample's readings
pub fn classify_crop(nitrogen: f64, phosphorus: f64, potassium: f64, ph: f64) -> CropMatch {
    classify_reading(&NpkReading::new(nitrogen, phosphorus, potassium, ph))
}

pub fn classify_reading(reading: &NpkReading) -> CropMatch {
    matching_rule(reading)
        .map(CropRule::outcome)
        .unwrap_or(DEFAULT_MATCH)
}

/// Serializable view of the rule list, default last
#[derive(Debug, Clone, Serialize)]
pub struct RuleCatalog {
    pub rules: Vec<RuleEntry>,
    pub default: CropMatch,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleEntry {
    pub priority: usize,
    pub id: &'static str,
    pub condition: &'static str,
    pub crop: Crop,
    pub confidence: u8,
}

pub fn rule_catalog() -> RuleCatalog {
    RuleCatalog {
        rules: CROP_RULES
            .iter()
            .enumerate()
            .map(|(i, rule)| RuleEntry {
                priority: i + 1,
                id: rule.id,
                condition: rule.description,
                crop: rule.crop,
                confidence: rule.confidence,
            })
            .collect(),
        default: DEFAULT_MATCH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule_in_isolation() {
        assert_eq!(classify_crop(41.0, 26.0, 0.0, 8.0).crop, Crop::Rice);
        assert_eq!(classify_crop(0.0, 0.0, 31.0, 6.5).crop, Crop::Corn);
        assert_eq!(classify_crop(0.0, 0.0, 0.0, 5.5).crop, Crop::Potato);
        assert_eq!(classify_crop(0.0, 0.0, 0.0, 8.0), DEFAULT_MATCH);
    }

    #[test]
    fn test_rice_wins_over_corn() {
        let m = classify_crop(50.0, 30.0, 35.0, 6.5);
        assert_eq!(m, CropMatch { crop: Crop::Rice, confidence: 92 });
    }

    #[test]
    fn test_rice_wins_over_potato() {
        assert_eq!(classify_crop(50.0, 30.0, 0.0, 5.0).crop, Crop::Rice);
    }

    #[test]
    fn test_ph_boundaries_fall_through() {
        // pH 6.0 is neither inside (6, 7.5) nor below 6
        assert_eq!(classify_crop(10.0, 10.0, 10.0, 6.0), DEFAULT_MATCH);
        assert_eq!(classify_crop(10.0, 10.0, 40.0, 6.0), DEFAULT_MATCH);
        assert_eq!(classify_crop(10.0, 10.0, 40.0, 7.5), DEFAULT_MATCH);
    }

    #[test]
    fn test_nutrient_boundaries_fall_through() {
        assert_eq!(classify_crop(40.0, 30.0, 0.0, 7.0).crop, Crop::Wheat);
        assert_eq!(classify_crop(45.0, 25.0, 0.0, 7.0).crop, Crop::Wheat);
        assert_eq!(classify_crop(0.0, 0.0, 30.0, 7.0).crop, Crop::Wheat);
    }

    #[test]
    fn test_catalog_order() {
        let catalog = rule_catalog();
        let crops: Vec<Crop> = catalog.rules.iter().map(|r| r.crop).collect();

        assert_eq!(crops, vec![Crop::Rice, Crop::Corn, Crop::Potato]);
        assert_eq!(catalog.rules[0].priority, 1);
        assert_eq!(catalog.default.crop, Crop::Wheat);
    }
}
