//! Static food catalog for manual log entry.
//!
//! A fixed, read-only reference list with per-serving macro values. The AI
//! estimation path does not consult it.

use std::sync::OnceLock;

use strsim::jaro_winkler;

use crate::models::FoodItem;

/// Minimum fuzzy score for a non-substring match to be returned.
const MIN_SCORE: f64 = 0.6;

fn foods() -> &'static [FoodItem] {
    static FOODS: OnceLock<Vec<FoodItem>> = OnceLock::new();
    FOODS.get_or_init(|| {
        vec![
            FoodItem::new("1", "Apple", 95.0, 0.5, 25.0, 0.3, "1 medium"),
            FoodItem::new("2", "Chicken Breast (cooked)", 165.0, 31.0, 0.0, 3.6, "100g"),
            FoodItem::new("3", "Brown Rice (cooked)", 130.0, 2.7, 27.0, 1.0, "1 cup"),
            FoodItem::new("4", "Broccoli (steamed)", 55.0, 3.7, 11.2, 0.6, "1 cup"),
            FoodItem::new("5", "Salmon (baked)", 206.0, 22.0, 0.0, 12.0, "100g"),
            FoodItem::new("6", "Almonds", 164.0, 6.0, 6.0, 14.0, "1/4 cup"),
            FoodItem::new("7", "Whole Egg (large)", 78.0, 6.0, 0.6, 5.0, "1 egg"),
            FoodItem::new("8", "Greek Yogurt (plain, non-fat)", 100.0, 17.0, 6.0, 0.0, "1 cup"),
            FoodItem::new("9", "Olive Oil", 119.0, 0.0, 0.0, 13.5, "1 tbsp"),
            FoodItem::new("10", "Banana", 105.0, 1.3, 27.0, 0.4, "1 medium"),
            FoodItem::new("11", "Oats (dry)", 150.0, 5.0, 27.0, 2.5, "1/2 cup"),
            FoodItem::new("12", "Whole Wheat Bread", 81.0, 3.6, 13.8, 1.1, "1 slice"),
            FoodItem::new("13", "Avocado", 240.0, 3.0, 13.0, 22.0, "1 medium"),
            FoodItem::new("14", "Sweet Potato (baked)", 103.0, 2.3, 23.6, 0.2, "1 medium"),
            FoodItem::new("15", "Milk (whole)", 149.0, 8.0, 12.0, 8.0, "1 cup"),
        ]
    })
}

/// Every catalog entry, in id order.
pub fn all() -> &'static [FoodItem] {
    foods()
}

/// Look up an entry by id.
pub fn get(id: &str) -> Option<&'static FoodItem> {
    foods().iter().find(|f| f.id == id)
}

/// Case-insensitive name search.
///
/// Substring hits score 1.0; anything else falls back to Jaro-Winkler
/// similarity and must clear [`MIN_SCORE`]. Results are ranked best-first
/// and capped at `limit`. An empty query matches nothing.
pub fn search(query: &str, limit: usize) -> Vec<&'static FoodItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &FoodItem)> = foods()
        .iter()
        .filter_map(|food| {
            let name = food.name.to_lowercase();
            let score = if name.contains(&query) {
                1.0
            } else {
                jaro_winkler(&query, &name)
            };
            (score >= MIN_SCORE).then_some((score, food))
        })
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().take(limit).map(|(_, f)| f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_complete() {
        assert_eq!(all().len(), 15);
    }

    #[test]
    fn test_get_by_id() {
        let chicken = get("2").unwrap();
        assert_eq!(chicken.name, "Chicken Breast (cooked)");
        assert_eq!(chicken.protein, 31.0);

        assert!(get("99").is_none());
    }

    #[test]
    fn test_substring_search_ranks_first() {
        let results = search("chicken", 5);
        assert_eq!(results[0].id, "2");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let results = search("BANANA", 5);
        assert_eq!(results[0].id, "10");
    }

    #[test]
    fn test_fuzzy_fallback_catches_typos() {
        let results = search("avocadoo", 5);
        assert!(results.iter().any(|f| f.id == "13"));
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        assert!(search("", 5).is_empty());
        assert!(search("   ", 5).is_empty());
    }

    #[test]
    fn test_limit_caps_results() {
        // "a" is a substring of many names
        let results = search("a", 3);
        assert!(results.len() <= 3);
    }
}
