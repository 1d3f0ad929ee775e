//! WebAssembly module for AgroSense
//!
//! Runs the soil recommendation engine in the browser so the analysis
//! form keeps working when the backend cannot be reached:
//! - Full recommendations from JSON samples or raw form input
//! - Demo-mode fallback with a console notice
//! - Notice text for the toast shown after each analysis
//! - Individual classifiers for live form feedback

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;

fn recommend_sample_json(sample_json: &str) -> Result<String, String> {
    let sample: SoilSample =
        serde_json::from_str(sample_json).map_err(|e| format!("Invalid sample JSON: {}", e))?;
    validate_soil_sample(&sample).map_err(|e| e.to_string())?;
    to_json(&shared::recommend(&sample))
}

fn recommend_form_json(form_json: &str) -> Result<String, String> {
    let form: SoilForm =
        serde_json::from_str(form_json).map_err(|e| format!("Invalid form JSON: {}", e))?;
    let sample = form.parse().map_err(|e| e.to_string())?;
    to_json(&shared::recommend(&sample))
}

/// Toast shown once an analysis finishes
#[derive(serde::Serialize)]
struct Notice {
    title: &'static str,
    description: &'static str,
}

fn parse_source(source: &str) -> Result<AnalysisSource, String> {
    match source.trim() {
        "remote" => Ok(AnalysisSource::Remote),
        "local" => Ok(AnalysisSource::Local),
        other => Err(format!("Unknown analysis source: {:?}", other)),
    }
}

fn notice_json(source: &str) -> Result<String, String> {
    let source = parse_source(source)?;
    to_json(&Notice {
        title: source.notice_title(),
        description: source.notice_description(),
    })
}

fn notice_line(source: AnalysisSource) -> String {
    format!("{}: {}", source.notice_title(), source.notice_description())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Failed to serialize: {}", e))
}

/// Recommend a crop for a JSON soil sample, returning the recommendation as JSON
#[wasm_bindgen]
pub fn recommend(sample_json: &str) -> Result<String, JsValue> {
    recommend_sample_json(sample_json).map_err(|e| JsValue::from_str(&e))
}

/// Recommend a crop straight from the string-valued form fields
#[wasm_bindgen]
pub fn recommend_from_form(form_json: &str) -> Result<String, JsValue> {
    recommend_form_json(form_json).map_err(|e| JsValue::from_str(&e))
}

/// Offline fallback used when the analysis API call fails
#[wasm_bindgen]
pub fn demo_recommendation(form_json: &str) -> Result<String, JsValue> {
    web_sys::console::warn_1(&JsValue::from_str(&notice_line(AnalysisSource::Local)));
    recommend_from_form(form_json)
}

/// Notice for the `x-analysis-source` value ("remote" or "local") as JSON
#[wasm_bindgen]
pub fn analysis_notice(source: &str) -> Result<String, JsValue> {
    notice_json(source).map_err(|e| JsValue::from_str(&e))
}

/// Crop name the rules pick for these readings
#[wasm_bindgen]
pub fn classify_crop_name(nitrogen: f64, phosphorus: f64, potassium: f64, ph: f64) -> String {
    shared::classify_crop(nitrogen, phosphorus, potassium, ph)
        .crop
        .to_string()
}

/// Confidence attached to the rule these readings match
#[wasm_bindgen]
pub fn crop_confidence(nitrogen: f64, phosphorus: f64, potassium: f64, ph: f64) -> u8 {
    shared::classify_crop(nitrogen, phosphorus, potassium, ph).confidence
}

/// Soil health badge text, e.g. "Good Soil"
#[wasm_bindgen]
pub fn classify_soil_health_label(nitrogen: f64, phosphorus: f64, potassium: f64, ph: f64) -> String {
    shared::classify_soil_health(nitrogen, phosphorus, potassium, ph).label()
}

/// Per-nutrient tiers as JSON
#[wasm_bindgen]
pub fn nutrient_status_json(nitrogen: f64, phosphorus: f64, potassium: f64) -> String {
    let status = shared::classify_nutrients(nitrogen, phosphorus, potassium);
    to_json(&status).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_crop_name() {
        assert_eq!(classify_crop_name(50.0, 30.0, 35.0, 6.5), "Rice");
        assert_eq!(classify_crop_name(10.0, 10.0, 40.0, 6.8), "Corn");
        assert_eq!(classify_crop_name(10.0, 10.0, 10.0, 5.0), "Potato");
        assert_eq!(classify_crop_name(10.0, 10.0, 10.0, 6.0), "Wheat");
    }

    #[test]
    fn test_crop_confidence() {
        assert_eq!(crop_confidence(50.0, 30.0, 35.0, 6.5), 92);
        assert_eq!(crop_confidence(10.0, 10.0, 10.0, 6.0), 85);
    }

    #[test]
    fn test_soil_health_label() {
        assert_eq!(classify_soil_health_label(40.0, 40.0, 40.0, 7.0), "Excellent Soil");
        assert_eq!(classify_soil_health_label(40.0, 40.0, 40.0, 9.0), "Good Soil");
        assert_eq!(classify_soil_health_label(1.0, 1.0, 1.0, 7.0), "Poor Soil");
    }

    #[test]
    fn test_nutrient_status_json() {
        assert_eq!(
            nutrient_status_json(36.0, 10.0, 13.0),
            r#"{"nitrogen":"Optimal","phosphorus":"Low","potassium":"Adequate"}"#
        );
    }

    #[test]
    fn test_recommend_sample_json() {
        let json = recommend_sample_json(
            r#"{"nitrogen":45,"phosphorus":30,"potassium":25,"ph":6.5,"moisture":35}"#,
        )
        .unwrap();
        let rec: Recommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(rec.crop, Crop::Rice);
        assert_eq!(rec.soil_health, SoilHealth::Good);
    }

    #[test]
    fn test_recommend_sample_json_rejects_bad_ph() {
        let err = recommend_sample_json(
            r#"{"nitrogen":45,"phosphorus":30,"potassium":25,"ph":-1,"moisture":35}"#,
        )
        .unwrap_err();
        assert_eq!(err, "pH must be between 0 and 14");
    }

    #[test]
    fn test_recommend_form_json() {
        let json = recommend_form_json(
            r#"{"nitrogen":"10","phosphorus":"10","potassium":"10","ph":"5.5","moisture":"30","city":""}"#,
        )
        .unwrap();
        let rec: Recommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(rec.crop, Crop::Potato);
        assert_eq!(rec.confidence, 79);
    }

    #[test]
    fn test_recommend_form_json_with_organic_carbon() {
        let form = r#"{"nitrogen":"10","phosphorus":"12","potassium":"8","ph":"6.8","moisture":"40","organicCarbon":"150"}"#;
        assert_eq!(
            recommend_form_json(form).unwrap_err(),
            "Organic carbon must be between 0 and 100%"
        );
    }

    #[test]
    fn test_notice_json() {
        assert_eq!(
            notice_json("remote").unwrap(),
            r#"{"title":"Analysis Complete","description":"Your soil has been analyzed successfully!"}"#
        );
        let local: serde_json::Value = serde_json::from_str(&notice_json("local").unwrap()).unwrap();
        assert_eq!(local["title"], "Demo Mode");
        assert!(notice_json("cloud").is_err());
    }

    #[test]
    fn test_demo_notice_line() {
        assert_eq!(
            notice_line(AnalysisSource::Local),
            "Demo Mode: Showing sample recommendation. Connect your backend API for real results."
        );
    }

    #[test]
    fn test_recommend_form_json_missing_field() {
        let err = recommend_form_json(r#"{"nitrogen":"10","phosphorus":"10"}"#).unwrap_err();
        assert_eq!(err, "potassium is required");
    }
}
