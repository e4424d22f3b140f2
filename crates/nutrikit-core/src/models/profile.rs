//! User profile models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Biological sex, as used by the Harris-Benedict equation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sex::Male => "male",
            Sex::Female => "female",
        })
    }
}

/// Exercise frequency tier scaling BMR to maintenance energy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little to no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    LightlyActive,
    /// Exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise and a physical job
    ExtraActive,
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightlyActive",
            ActivityLevel::ModeratelyActive => "moderatelyActive",
            ActivityLevel::VeryActive => "veryActive",
            ActivityLevel::ExtraActive => "extraActive",
        })
    }
}

/// Weight goal driving the calorie adjustment and the macro preset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    WeightLoss,
    MaintainWeight,
    WeightGain,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Goal::WeightLoss => "weightLoss",
            Goal::MaintainWeight => "maintainWeight",
            Goal::WeightGain => "weightGain",
        })
    }
}

/// Health condition carrying a macro-ratio override.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum HealthIssue {
    #[default]
    None,
    Diabetes,
    HeartDisease,
}

impl HealthIssue {
    /// Whether this condition overrides the goal-based macro preset.
    pub fn overrides_goal(self) -> bool {
        !matches!(self, HealthIssue::None)
    }
}

impl fmt::Display for HealthIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HealthIssue::None => "none",
            HealthIssue::Diabetes => "diabetes",
            HealthIssue::HeartDisease => "heartDisease",
        })
    }
}

/// A user's body and activity profile.
///
/// Height and weight must be positive before any calorie calculation; the
/// calculator rejects non-positive values with an explicit error instead of
/// propagating NaN/Infinity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Age in years
    pub age: u32,
    pub sex: Sex,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    /// Absent in profiles stored before the field existed
    #[serde(default)]
    pub health_issue: HealthIssue,
}
