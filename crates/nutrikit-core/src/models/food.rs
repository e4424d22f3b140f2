//! Food item models.

use serde::{Deserialize, Serialize};

/// A food with macro values for one serving.
///
/// Catalog entries describe a single serving and are scaled by a quantity
/// multiplier at log time. An AI-analyzed item arrives already scaled to
/// the described portion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Free-text serving label (e.g. "100g", "1 cup")
    pub serving_size: String,
}

impl FoodItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        serving_size: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            calories,
            protein,
            carbs,
            fat,
            serving_size: serving_size.into(),
        }
    }

    /// Copy of this food with all macro values scaled by a serving
    /// multiplier. The serving label is left untouched.
    pub fn scaled(&self, quantity: f64) -> FoodItem {
        FoodItem {
            id: self.id.clone(),
            name: self.name.clone(),
            calories: self.calories * quantity,
            protein: self.protein * quantity,
            carbs: self.carbs * quantity,
            fat: self.fat * quantity,
            serving_size: self.serving_size.clone(),
        }
    }
}
