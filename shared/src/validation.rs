//! Validation utilities for soil samples
//!
//! The engine trusts its input, so every caller runs samples through
//! [`validate_soil_sample`] or [`SoilForm::parse`] first.

use thiserror::Error;
use validator::Validate;

use crate::models::{SoilForm, SoilSample};

/// Why a soil sample was rejected
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SampleError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be a number, got {value:?}")]
    NotNumeric { field: &'static str, value: String },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{message}")]
    OutOfRange { field: &'static str, message: String },
}

impl SampleError {
    pub fn field(&self) -> &'static str {
        match self {
            SampleError::Missing { field }
            | SampleError::NotNumeric { field, .. }
            | SampleError::NotFinite { field }
            | SampleError::OutOfRange { field, .. } => field,
        }
    }
}

/// Fields in the order errors are reported
const NUMERIC_FIELDS: [&str; 6] = [
    "nitrogen",
    "phosphorus",
    "potassium",
    "ph",
    "moisture",
    "organic_carbon",
];

// ============================================================================
// Sample Validation
// ============================================================================

/// Validate that every reading is finite and inside its physical range
pub fn validate_soil_sample(sample: &SoilSample) -> Result<(), SampleError> {
    let values = [
        Some(sample.nitrogen),
        Some(sample.phosphorus),
        Some(sample.potassium),
        Some(sample.ph),
        Some(sample.moisture),
        sample.organic_carbon,
    ];
    for (field, value) in NUMERIC_FIELDS.into_iter().zip(values) {
        if let Some(v) = value {
            if !v.is_finite() {
                return Err(SampleError::NotFinite { field });
            }
        }
    }

    let errors = match sample.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };
    let field_errors = errors.field_errors();
    for field in NUMERIC_FIELDS {
        if let Some(first) = field_errors.get(field).and_then(|errs| errs.first()) {
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is out of range", field));
            return Err(SampleError::OutOfRange { field, message });
        }
    }

    Err(SampleError::OutOfRange {
        field: "sample",
        message: errors.to_string(),
    })
}

// ============================================================================
// Form Parsing
// ============================================================================

fn parse_field(field: &'static str, raw: &str) -> Result<f64, SampleError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SampleError::Missing { field });
    }
    let value: f64 = trimmed.parse().map_err(|_| SampleError::NotNumeric {
        field,
        value: trimmed.to_string(),
    })?;
    if !value.is_finite() {
        return Err(SampleError::NotFinite { field });
    }
    Ok(value)
}

impl SoilForm {
    /// Parse and validate the form into a sample ready for the engine
    pub fn parse(&self) -> Result<SoilSample, SampleError> {
        let city = self.city.trim();
        let organic_carbon = match self.organic_carbon.trim() {
            "" => None,
            raw => Some(parse_field("organic_carbon", raw)?),
        };
        let sample = SoilSample {
            nitrogen: parse_field("nitrogen", &self.nitrogen)?,
            phosphorus: parse_field("phosphorus", &self.phosphorus)?,
            potassium: parse_field("potassium", &self.potassium)?,
            ph: parse_field("ph", &self.ph)?,
            moisture: parse_field("moisture", &self.moisture)?,
            city: (!city.is_empty()).then(|| city.to_string()),
            organic_carbon,
        };
        validate_soil_sample(&sample)?;
        Ok(sample)
    }
}
