//! Per-nutrient status tiers

use crate::models::{NutrientStatus, NutrientTier};

/// Lower bounds (exclusive) for the Optimal and Adequate tiers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThresholds {
    pub optimal_above: f64,
    pub adequate_above: f64,
}

impl TierThresholds {
    pub fn tier(&self, value: f64) -> NutrientTier {
        if value > self.optimal_above {
            NutrientTier::Optimal
        } else if value > self.adequate_above {
            NutrientTier::Adequate
        } else {
            NutrientTier::Low
        }
    }
}

pub const NITROGEN_TIERS: TierThresholds = TierThresholds {
    optimal_above: 35.0,
    adequate_above: 20.0,
};

pub const PHOSPHORUS_TIERS: TierThresholds = TierThresholds {
    optimal_above: 30.0,
    adequate_above: 15.0,
};

pub const POTASSIUM_TIERS: TierThresholds = TierThresholds {
    optimal_above: 25.0,
    adequate_above: 12.0,
};

/// Classify each nutrient against its own thresholds
pub fn classify_nutrients(nitrogen: f64, phosphorus: f64, potassium: f64) -> NutrientStatus {
    NutrientStatus {
        nitrogen: NITROGEN_TIERS.tier(nitrogen),
        phosphorus: PHOSPHORUS_TIERS.tier(phosphorus),
        potassium: POTASSIUM_TIERS.tier(potassium),
    }
}
