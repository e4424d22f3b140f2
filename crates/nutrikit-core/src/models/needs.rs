//! Derived nutrition results: BMI classification and daily targets.

use serde::{Deserialize, Serialize};

/// BMI weight category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value against the standard thresholds.
    ///
    /// Boundaries are inclusive on the lower edge: 18.5 is Normal, 25.0 is
    /// Overweight, 30.0 is Obese.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Display label for the category.
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Computed BMI with its category. Purely a function of height and weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Fractional split of total calories across protein/carbs/fat.
///
/// Every preset ratio sums to 1.0, which is what makes the grams-to-energy
/// reconstitution exact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroRatio {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroRatio {
    pub const fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    /// Sum of the three fractions.
    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Daily calorie and macronutrient targets derived from a profile.
///
/// Recomputed whenever the profile changes; never stored or mutated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalorieNeeds {
    /// Maintenance calories (BMR scaled by the activity multiplier)
    pub maintenance: f64,
    /// Maintenance adjusted for the weight goal
    pub goal_calories: f64,
    /// Target protein in grams
    pub protein: f64,
    /// Target carbohydrates in grams
    pub carbs: f64,
    /// Target fat in grams
    pub fat: f64,
}
