//! Dietary-suggestion and custom meal-plan contracts.

use serde::{Deserialize, Serialize};

use crate::analysis::{extract_json, AnalysisError, AnalysisResult};

/// Input to the dietary-suggestion flow.
///
/// The string fields are plain-text summaries prepared by the caller
/// (nutrikit-core's `export` module renders them from the domain types).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    /// Profile summary: age, sex, height, weight, activity level
    pub profile: String,
    /// Summary of the day's logged food and totals
    pub dietary_logs: String,
    /// Health and fitness goals
    pub goals: String,
    /// Extra context, e.g. text extracted from an uploaded report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_text: Option<String>,
}

/// Markdown suggestions returned by the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionOutput {
    pub suggestions: String,
}

/// Parse raw model output into suggestions.
///
/// Prefers the JSON contract shape; a response that is not JSON at all is
/// taken verbatim as the markdown body, since suggestion models often
/// answer in plain prose.
pub fn parse_suggestion_output(raw: &str) -> AnalysisResult<SuggestionOutput> {
    if let Ok(json) = extract_json(raw) {
        if let Ok(output) = serde_json::from_str::<SuggestionOutput>(json) {
            return Ok(output);
        }
    }

    let body = raw.trim();
    if body.is_empty() {
        return Err(AnalysisError::InvalidFormat("empty response".into()));
    }
    Ok(SuggestionOutput {
        suggestions: body.to_string(),
    })
}

/// Input to the custom meal-plan flow.
///
/// Field tokens follow the external profile contract ("male"/"female",
/// camelCase activity levels and goals); the caller renders its enums
/// before crossing this boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    pub age: u32,
    pub sex: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: String,
    pub goal: String,
    /// Preferences or restrictions, free text
    pub dietary_preferences: String,
    pub number_of_meals: u32,
}

/// Detailed meal plan returned by the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanOutput {
    pub meal_plan: String,
}

/// Parse raw model output into a meal plan, with the same plain-prose
/// fallback as [`parse_suggestion_output`].
pub fn parse_meal_plan_output(raw: &str) -> AnalysisResult<MealPlanOutput> {
    if let Ok(json) = extract_json(raw) {
        if let Ok(output) = serde_json::from_str::<MealPlanOutput>(json) {
            return Ok(output);
        }
    }

    let body = raw.trim();
    if body.is_empty() {
        return Err(AnalysisError::InvalidFormat("empty response".into()));
    }
    Ok(MealPlanOutput {
        meal_plan: body.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_suggestions() {
        let raw = r###"{"suggestions":"## Eat more protein\n- add eggs at breakfast"}"###;
        let output = parse_suggestion_output(raw).unwrap();
        assert!(output.suggestions.starts_with("## Eat more protein"));
    }

    #[test]
    fn test_plain_prose_falls_back_to_body() {
        let raw = "Consider swapping white rice for brown rice at dinner.";
        let output = parse_suggestion_output(raw).unwrap();
        assert_eq!(output.suggestions, raw);
    }

    #[test]
    fn test_empty_response_is_an_error() {
        assert!(parse_suggestion_output("   ").is_err());
        assert!(parse_meal_plan_output("").is_err());
    }

    #[test]
    fn test_parse_meal_plan_json() {
        let raw = r#"{"mealPlan":"Breakfast: oats. Lunch: chicken and rice."}"#;
        let output = parse_meal_plan_output(raw).unwrap();
        assert!(output.meal_plan.contains("Lunch"));
    }

    #[test]
    fn test_request_wire_names() {
        let request = SuggestionRequest {
            profile: "30 year old male".into(),
            dietary_logs: "No food logged today.".into(),
            goals: "weightLoss".into(),
            document_text: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["dietaryLogs"], "No food logged today.");
        assert!(json.get("documentText").is_none());
    }
}
