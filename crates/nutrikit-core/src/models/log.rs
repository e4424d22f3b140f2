//! Daily log models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::food::FoodItem;

/// Meal slot a logged item belongs to: the log's partition key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    /// All four slots in display order.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snacks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snacks => "snacks",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A food item logged to a meal slot.
///
/// The embedded food's macro values are already scaled by `quantity`, so
/// aggregation sums stored values directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggedItem {
    /// Local UUID, generated at log time
    pub id: String,
    pub food: FoodItem,
    /// Number of servings (fixed at 1.0 for AI-analyzed items)
    pub quantity: f64,
    pub meal_type: MealType,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

impl LoggedItem {
    /// Log a catalog food at a serving multiplier.
    pub fn from_catalog(food: &FoodItem, quantity: f64, meal_type: MealType) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            food: food.scaled(quantity),
            quantity,
            meal_type,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Log an AI-analyzed item whole; its values already describe the
    /// portion that was eaten.
    pub fn from_analysis(food: FoodItem, meal_type: MealType) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            food,
            quantity: 1.0,
            meal_type,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// One tracked day: a fixed record of the four meal slots.
///
/// A fixed struct rather than a keyed map, so no slot can be silently
/// missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyLog {
    pub breakfast: Vec<LoggedItem>,
    pub lunch: Vec<LoggedItem>,
    pub dinner: Vec<LoggedItem>,
    pub snacks: Vec<LoggedItem>,
}

impl DailyLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in one meal slot.
    pub fn meal(&self, meal: MealType) -> &[LoggedItem] {
        match meal {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snacks => &self.snacks,
        }
    }

    fn meal_mut(&mut self, meal: MealType) -> &mut Vec<LoggedItem> {
        match meal {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snacks => &mut self.snacks,
        }
    }

    /// Append an item to the slot named by its meal type.
    pub fn add(&mut self, item: LoggedItem) {
        self.meal_mut(item.meal_type).push(item);
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove(&mut self, meal: MealType, id: &str) -> Option<LoggedItem> {
        let items = self.meal_mut(meal);
        let idx = items.iter().position(|item| item.id == id)?;
        Some(items.remove(idx))
    }

    /// Total number of logged items across all slots.
    pub fn len(&self) -> usize {
        MealType::ALL.iter().map(|m| self.meal(*m).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the four slots in display order.
    pub fn meals(&self) -> impl Iterator<Item = (MealType, &[LoggedItem])> + '_ {
        MealType::ALL.iter().map(move |m| (*m, self.meal(*m)))
    }
}
