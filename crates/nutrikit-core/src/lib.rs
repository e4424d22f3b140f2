//! Nutrikit Core Library
//!
//! Nutritional computation engine for a personal nutrition tracker: pure
//! functions from a user profile to daily calorie/macro targets, plus
//! aggregation of the daily food log against those targets.
//!
//! # Architecture
//!
//! ```text
//! Profile ──► Nutrition Calculator ──► CalorieNeeds (daily targets)
//!                                               │
//! Food Catalog ──► manual entry ──┐             ▼
//!                                 ├──► DailyLog ──► Aggregator ──► totals vs targets
//! AI estimator (external) ────────┘
//! ```
//!
//! All computation here is synchronous and side-effect-free. The
//! surrounding application owns authentication, persistence, and the LLM
//! calls; their data contracts live in [`export`] and in the companion
//! `nutrikit-llm` crate.
//!
//! # Modules
//!
//! - [`constants`]: activity multipliers, calorie adjustments, macro presets
//! - [`models`]: domain types (Profile, FoodItem, DailyLog, ...)
//! - [`calculator`]: BMI, BMR, and daily target computation
//! - [`aggregate`]: per-meal/per-day totals and progress against targets
//! - [`catalog`]: static food reference table with fuzzy name search
//! - [`export`]: prompt summaries and the persisted log-entry shape

pub mod aggregate;
pub mod calculator;
pub mod catalog;
pub mod constants;
pub mod export;
pub mod models;

// Re-export commonly used types
pub use aggregate::{
    bar_fill, day_totals, meal_totals, progress, progress_report, DayTotals, NutrientTotals,
    ProgressReport,
};
pub use calculator::{
    calculate_bmi, calculate_bmr, calculate_calorie_needs, CalcError, CalcResult,
};
pub use models::{
    ActivityLevel, BmiCategory, BmiResult, CalorieNeeds, DailyLog, FoodItem, Goal, HealthIssue,
    LoggedItem, MacroRatio, MealType, Profile, Sex,
};
