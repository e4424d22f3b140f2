//! Static lookup tables: activity multipliers, goal calorie adjustments,
//! and macro-ratio presets with their health-condition overrides.

use crate::models::{ActivityLevel, Goal, HealthIssue, MacroRatio};

/// Energy density of protein (kcal per gram).
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
/// Energy density of carbohydrates (kcal per gram).
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
/// Energy density of fat (kcal per gram).
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Factor scaling BMR to total daily maintenance energy.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtraActive => 1.9,
    }
}

/// Calorie delta applied on top of maintenance for a weight goal.
pub fn calorie_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => -500.0,
        Goal::MaintainWeight => 0.0,
        Goal::WeightGain => 500.0,
    }
}

/// Goal-based macro split.
pub fn goal_macro_ratio(goal: Goal) -> MacroRatio {
    match goal {
        Goal::WeightLoss => MacroRatio::new(0.35, 0.40, 0.25),
        Goal::MaintainWeight => MacroRatio::new(0.25, 0.50, 0.25),
        Goal::WeightGain => MacroRatio::new(0.30, 0.50, 0.20),
    }
}

/// Health-condition macro override, if the condition carries one.
pub fn health_macro_ratio(issue: HealthIssue) -> Option<MacroRatio> {
    match issue {
        HealthIssue::None => None,
        // Lower carb
        HealthIssue::Diabetes => Some(MacroRatio::new(0.30, 0.40, 0.30)),
        // Lower fat
        HealthIssue::HeartDisease => Some(MacroRatio::new(0.30, 0.55, 0.15)),
    }
}

/// Macro split for a profile: a health override always wins over the goal
/// preset. Fixed precedence, never a blend.
pub fn macro_ratio_for(goal: Goal, issue: HealthIssue) -> MacroRatio {
    health_macro_ratio(issue).unwrap_or_else(|| goal_macro_ratio(goal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_sum_to_one() {
        let goals = [Goal::WeightLoss, Goal::MaintainWeight, Goal::WeightGain];
        for goal in goals {
            assert!((goal_macro_ratio(goal).total() - 1.0).abs() < 1e-12);
        }
        for issue in [HealthIssue::Diabetes, HealthIssue::HeartDisease] {
            let ratio = health_macro_ratio(issue).unwrap();
            assert!((ratio.total() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(activity_multiplier(ActivityLevel::Sedentary), 1.2);
        assert_eq!(activity_multiplier(ActivityLevel::ExtraActive), 1.9);
    }

    #[test]
    fn test_health_override_precedence() {
        // Diabetes wins over the weightLoss preset
        let ratio = macro_ratio_for(Goal::WeightLoss, HealthIssue::Diabetes);
        assert_eq!(ratio, MacroRatio::new(0.30, 0.40, 0.30));

        // No condition falls back to the goal preset
        let ratio = macro_ratio_for(Goal::WeightLoss, HealthIssue::None);
        assert_eq!(ratio, MacroRatio::new(0.35, 0.40, 0.25));
    }
}
