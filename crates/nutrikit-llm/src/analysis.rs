//! Food-analysis contract: describe a meal in prose, get estimated macros.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Analysis errors.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("invalid response format: {0}")]
    InvalidFormat(String),

    /// The provider reported quota exhaustion (HTTP 429 or equivalent).
    /// Shown to the user as a distinct message; never retried here.
    #[error("AI quota exceeded")]
    QuotaExceeded,

    #[error("inference failed: {0}")]
    Inference(String),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Input to the food-analysis flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Natural-language description of a meal, including quantities
    pub description: String,
    /// Optional user-provided serving size (e.g. "150g", "250ml")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
}

/// Estimated nutrition for the described food, already scaled to the
/// reported serving size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnalysis {
    /// Short descriptive name, e.g. "Oatmeal with blueberries"
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// The serving the values correspond to; echoes the user's value when
    /// one was supplied
    pub serving_size: String,
}

/// Slice the outermost JSON object out of raw model text, which sometimes
/// wraps the payload in prose or code fences.
pub(crate) fn extract_json(raw: &str) -> AnalysisResult<&str> {
    let start = raw
        .find('{')
        .ok_or_else(|| AnalysisError::InvalidFormat("no JSON object found in response".into()))?;
    let end = raw
        .rfind('}')
        .ok_or_else(|| AnalysisError::InvalidFormat("no closing brace found in response".into()))?;
    if end < start {
        return Err(AnalysisError::InvalidFormat(
            "malformed JSON object in response".into(),
        ));
    }
    if start > 0 || end + 1 < raw.len() {
        tracing::warn!("model response carried text outside the JSON payload");
    }
    Ok(&raw[start..=end])
}

/// Parse raw model output into a food analysis.
pub fn parse_analysis_output(raw: &str) -> AnalysisResult<FoodAnalysis> {
    Ok(serde_json::from_str(extract_json(raw)?)?)
}

/// Map a raw transport/provider failure message onto the error taxonomy.
///
/// Quota exhaustion is pattern-matched from the text; everything else stays
/// a generic inference failure the user can retry manually.
pub fn classify_failure(message: &str) -> AnalysisError {
    let lower = message.to_lowercase();
    if lower.contains("429") || lower.contains("quota") || lower.contains("rate limit") {
        AnalysisError::QuotaExceeded
    } else {
        tracing::warn!(error = %message, "unrecognized AI failure, surfacing as retryable");
        AnalysisError::Inference(message.to_string())
    }
}

/// The injected analysis capability.
///
/// The production implementation wraps the external inference client and
/// feeds it [`crate::prompts::make_analysis_prompt`]; tests substitute
/// [`MockAnalyzer`].
pub trait FoodAnalyzer {
    fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult<FoodAnalysis>;
}

/// Keyword-table estimates for common test meals:
/// (keyword, calories, protein, carbs, fat, serving).
const MOCK_TABLE: &[(&str, f64, f64, f64, f64, &str)] = &[
    ("oatmeal", 320.0, 9.0, 58.0, 6.0, "250g"),
    ("chicken", 330.0, 62.0, 0.0, 7.2, "200g"),
    ("salad", 150.0, 3.0, 12.0, 10.0, "300g"),
    ("smoothie", 210.0, 5.0, 45.0, 2.0, "500ml"),
    ("pizza", 570.0, 24.0, 72.0, 20.0, "285g"),
];

/// Fallback estimate when no keyword matches.
const MOCK_DEFAULT: (f64, f64, f64, f64, &str) = (250.0, 10.0, 30.0, 9.0, "250g");

/// Deterministic analyzer for testing without the external service.
pub struct MockAnalyzer;

impl FoodAnalyzer for MockAnalyzer {
    fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult<FoodAnalysis> {
        let description = request.description.trim();
        if description.is_empty() {
            return Err(AnalysisError::InvalidFormat("empty description".into()));
        }

        let lower = description.to_lowercase();
        let (calories, protein, carbs, fat, serving) = MOCK_TABLE
            .iter()
            .find(|(keyword, ..)| lower.contains(keyword))
            .map(|&(_, c, p, cb, f, s)| (c, p, cb, f, s))
            .unwrap_or(MOCK_DEFAULT);

        Ok(FoodAnalysis {
            name: description.to_string(),
            calories,
            protein,
            carbs,
            fat,
            serving_size: request
                .serving_size
                .clone()
                .unwrap_or_else(|| serving.to_string()),
        })
    }
}
