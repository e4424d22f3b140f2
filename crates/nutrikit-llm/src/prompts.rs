//! Prompt templates for the external nutrition AI.
//!
//! Each flow gets a `make_*_prompt` builder; the surrounding application
//! sends the result to its inference client and feeds the raw response to
//! the matching parser in [`crate::analysis`] / [`crate::suggestions`].

use crate::analysis::AnalysisRequest;
use crate::suggestions::{MealPlanRequest, SuggestionRequest};

/// System prompt for the food-analysis flow.
pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are an expert nutritionist. \
Analyze the user's food description and provide an estimate of its \
nutritional content. Return a single JSON object with the fields name, \
calories, protein, carbs, fat, and servingSize.";

/// Build the food-analysis prompt.
///
/// A user-supplied serving size takes priority and must be echoed back in
/// the output; otherwise the model estimates one (grams for solid foods,
/// milliliters for liquids).
pub fn make_analysis_prompt(request: &AnalysisRequest) -> String {
    let mut prompt = format!("Food Description: {}\n\n", request.description);

    match &request.serving_size {
        Some(serving) => {
            prompt.push_str(&format!(
                "The user has specified a serving size. Calculate the nutritional \
                 information for the following serving size: {}.\n\
                 The 'servingSize' field in your output JSON should match this \
                 user-provided value.\n",
                serving
            ));
        }
        None => {
            prompt.push_str(
                "The user has not specified a serving size. Estimate the serving \
                 size based on the description. Use grams (g) for solid foods and \
                 milliliters (ml) for liquids. The 'servingSize' field in your \
                 output JSON should be your estimate.\n",
            );
        }
    }

    prompt.push_str("\nReturn a single JSON object with your analysis.");
    prompt
}

/// Build the dietary-suggestion prompt from caller-prepared summaries.
pub fn make_suggestion_prompt(request: &SuggestionRequest) -> String {
    let mut prompt = format!(
        "You are a personal nutrition assistant. Based on the user's profile, \
         dietary logs, and goals, generate personalized dietary suggestions in \
         markdown.\n\n\
         User Profile: {}\n\
         Dietary Logs: {}\n\
         Goals: {}\n",
        request.profile, request.dietary_logs, request.goals
    );

    if let Some(document) = &request.document_text {
        prompt.push_str(&format!("Additional Context: {}\n", document));
    }

    prompt.push_str("\nSuggestions:");
    prompt
}

/// Build the custom meal-plan prompt.
pub fn make_meal_plan_prompt(request: &MealPlanRequest) -> String {
    format!(
        "You are a nutrition expert who specializes in creating personalized \
         meal plans.\n\n\
         Based on the user's profile and goals, create a custom meal plan \
         tailored to their needs and preferences. The meal plan should include \
         specific meal suggestions, portion sizes, and nutritional information.\n\n\
         User Profile:\n\
         - Age: {}\n\
         - Sex: {}\n\
         - Height: {} cm\n\
         - Weight: {} kg\n\
         - Activity Level: {}\n\
         - Goal: {}\n\
         - Dietary Preferences: {}\n\
         - Number of Meals: {}\n\n\
         Generate a detailed meal plan that includes:\n\
         - Specific meal suggestions for each meal\n\
         - Portion sizes for each food item\n\
         - Total calories and macros (protein, carbs, fat) for each meal.",
        request.age,
        request.sex,
        request.height_cm,
        request.weight_kg,
        request.activity_level,
        request.goal,
        request.dietary_preferences,
        request.number_of_meals,
    )
}
