//! External-contract shapes and prompt summaries.
//!
//! The document store persists each logged item as a flat camelCase
//! document; the dietary-suggestion flow consumes plain-text summaries of
//! the profile and the day's log. Both renderings live here so the
//! surrounding application never reaches into the domain types directly.

use serde::{Deserialize, Serialize};

use crate::aggregate::day_totals;
use crate::models::{DailyLog, LoggedItem, MealType, Profile};

/// A logged item in the shape the external document store persists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntryDoc {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub serving_size: String,
    pub meal_type: MealType,
    /// RFC 3339; the store replaces this with its server timestamp
    pub created_at: String,
}

impl LogEntryDoc {
    /// Flatten a logged item into the persisted document shape.
    pub fn from_item(item: &LoggedItem) -> Self {
        Self {
            name: item.food.name.clone(),
            calories: item.food.calories,
            protein: item.food.protein,
            carbs: item.food.carbs,
            fat: item.food.fat,
            serving_size: item.food.serving_size.clone(),
            meal_type: item.meal_type,
            created_at: item.created_at.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// One-line profile summary for the suggestion prompt.
pub fn profile_summary(profile: &Profile) -> String {
    format!(
        "{} year old {}, {:.0} cm, {:.1} kg, activity level {}, goal {}, health issue {}",
        profile.age,
        profile.sex,
        profile.height,
        profile.weight,
        profile.activity_level,
        profile.goal,
        profile.health_issue,
    )
}

/// Multi-line log summary for the suggestion prompt: one line per logged
/// item grouped by meal, plus the day total.
pub fn log_summary(log: &DailyLog) -> String {
    if log.is_empty() {
        return "No food logged today.".to_string();
    }

    let mut out = String::new();
    for (meal, items) in log.meals() {
        if items.is_empty() {
            continue;
        }
        out.push_str(meal.as_str());
        out.push_str(":\n");
        for item in items {
            out.push_str(&format!(
                "  - {} ({} x {}): {:.0} kcal, {:.1} g protein, {:.1} g carbs, {:.1} g fat\n",
                item.food.name,
                item.quantity,
                item.food.serving_size,
                item.food.calories,
                item.food.protein,
                item.food.carbs,
                item.food.fat,
            ));
        }
    }

    let total = day_totals(log).total;
    out.push_str(&format!(
        "Day total: {:.0} kcal, {:.1} g protein, {:.1} g carbs, {:.1} g fat",
        total.calories, total.protein, total.carbs, total.fat,
    ));
    out
}
