//! Daily log aggregation: per-meal and per-day nutrient totals, and
//! progress against the day's targets.
//!
//! Pure reductions over immutable input. Summation is order-independent;
//! presentation rounds to whole kcal and grams, so floating-point order
//! differences never surface.

use serde::{Deserialize, Serialize};

use crate::models::{CalorieNeeds, DailyLog, LoggedItem, MealType};

/// Summed nutrient values for a meal or a day.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutrientTotals {
    fn accumulate(&mut self, item: &LoggedItem) {
        self.calories += item.food.calories;
        self.protein += item.food.protein;
        self.carbs += item.food.carbs;
        self.fat += item.food.fat;
    }

    fn merge(self, other: NutrientTotals) -> NutrientTotals {
        NutrientTotals {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

fn sum_items(items: &[LoggedItem]) -> NutrientTotals {
    let mut totals = NutrientTotals::default();
    for item in items {
        totals.accumulate(item);
    }
    totals
}

/// Sum one meal slot. Stored values already reflect the logged quantity.
pub fn meal_totals(log: &DailyLog, meal: MealType) -> NutrientTotals {
    sum_items(log.meal(meal))
}

/// Per-meal totals plus the grand total for a day.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DayTotals {
    pub breakfast: NutrientTotals,
    pub lunch: NutrientTotals,
    pub dinner: NutrientTotals,
    pub snacks: NutrientTotals,
    pub total: NutrientTotals,
}

/// Sum every meal slot and the whole day.
pub fn day_totals(log: &DailyLog) -> DayTotals {
    let breakfast = sum_items(&log.breakfast);
    let lunch = sum_items(&log.lunch);
    let dinner = sum_items(&log.dinner);
    let snacks = sum_items(&log.snacks);

    DayTotals {
        breakfast,
        lunch,
        dinner,
        snacks,
        total: breakfast.merge(lunch).merge(dinner).merge(snacks),
    }
}

/// Percentage of a target consumed.
///
/// A zero goal yields 0 rather than dividing. Values over 100 are reported
/// as-is; only display clamps.
pub fn progress(consumed: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        consumed / goal * 100.0
    } else {
        0.0
    }
}

/// Clamp a progress value to the 0-100 range a progress bar can render.
/// The true ratio stays available from [`progress`].
pub fn bar_fill(progress: f64) -> f64 {
    progress.clamp(0.0, 100.0)
}

/// Progress for each tracked nutrient against the daily targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProgressReport {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Compare consumed totals to the day's targets.
pub fn progress_report(consumed: &NutrientTotals, needs: &CalorieNeeds) -> ProgressReport {
    ProgressReport {
        calories: progress(consumed.calories, needs.goal_calories),
        protein: progress(consumed.protein, needs.protein),
        carbs: progress(consumed.carbs, needs.carbs),
        fat: progress(consumed.fat, needs.fat),
    }
}
