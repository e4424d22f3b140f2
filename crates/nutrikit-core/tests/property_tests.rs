//! Property tests for the calculator and the daily log aggregator.

use proptest::prelude::*;

use nutrikit_core::models::{
    ActivityLevel, DailyLog, FoodItem, Goal, HealthIssue, LoggedItem, MealType, Profile, Sex,
};
use nutrikit_core::{calculate_bmi, calculate_calorie_needs, day_totals, progress};

fn arb_profile() -> impl Strategy<Value = Profile> {
    (
        1u32..100,
        prop::bool::ANY,
        120.0f64..220.0,
        35.0f64..200.0,
        0usize..5,
        0usize..3,
        0usize..3,
    )
        .prop_map(|(age, male, height, weight, level, goal, issue)| Profile {
            age,
            sex: if male { Sex::Male } else { Sex::Female },
            height,
            weight,
            activity_level: [
                ActivityLevel::Sedentary,
                ActivityLevel::LightlyActive,
                ActivityLevel::ModeratelyActive,
                ActivityLevel::VeryActive,
                ActivityLevel::ExtraActive,
            ][level],
            goal: [Goal::WeightLoss, Goal::MaintainWeight, Goal::WeightGain][goal],
            health_issue: [
                HealthIssue::None,
                HealthIssue::Diabetes,
                HealthIssue::HeartDisease,
            ][issue],
        })
}

fn arb_items() -> impl Strategy<Value = Vec<LoggedItem>> {
    prop::collection::vec(
        (0.0f64..1500.0, 0.0f64..100.0, 0.0f64..200.0, 0.0f64..100.0, 0usize..4),
        0..20,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(calories, protein, carbs, fat, meal)| {
                let food = FoodItem::new("", "food", calories, protein, carbs, fat, "100g");
                LoggedItem::from_analysis(food, MealType::ALL[meal])
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn bmi_increases_with_weight(profile in arb_profile(), delta in 0.5f64..50.0) {
        let mut heavier = profile.clone();
        heavier.weight += delta;

        let a = calculate_bmi(&profile).unwrap();
        let b = calculate_bmi(&heavier).unwrap();
        prop_assert!(b.bmi > a.bmi);
    }

    #[test]
    fn bmi_decreases_with_height(profile in arb_profile(), delta in 0.5f64..50.0) {
        let mut taller = profile.clone();
        taller.height += delta;

        let a = calculate_bmi(&profile).unwrap();
        let b = calculate_bmi(&taller).unwrap();
        prop_assert!(b.bmi < a.bmi);
    }

    #[test]
    fn macro_energy_reconstitutes_goal_calories(profile in arb_profile()) {
        let needs = calculate_calorie_needs(&profile).unwrap();
        let energy = needs.protein * 4.0 + needs.carbs * 4.0 + needs.fat * 9.0;
        let tolerance = 1e-9 * needs.goal_calories.abs().max(1.0);
        prop_assert!((energy - needs.goal_calories).abs() < tolerance);
    }

    #[test]
    fn aggregation_is_order_independent(items in arb_items()) {
        let mut forward = DailyLog::new();
        for item in items.iter().cloned() {
            forward.add(item);
        }

        let mut reverse = DailyLog::new();
        for item in items.into_iter().rev() {
            reverse.add(item);
        }

        let a = day_totals(&forward).total;
        let b = day_totals(&reverse).total;
        prop_assert!((a.calories - b.calories).abs() < 1e-6);
        prop_assert!((a.protein - b.protein).abs() < 1e-6);
        prop_assert!((a.carbs - b.carbs).abs() < 1e-6);
        prop_assert!((a.fat - b.fat).abs() < 1e-6);
    }

    #[test]
    fn totals_match_arithmetic_sum(items in arb_items()) {
        let expected: f64 = items.iter().map(|i| i.food.calories).sum();

        let mut log = DailyLog::new();
        for item in items {
            log.add(item);
        }

        prop_assert!((day_totals(&log).total.calories - expected).abs() < 1e-6);
    }

    #[test]
    fn progress_never_divides_by_zero(consumed in 0.0f64..5000.0) {
        prop_assert_eq!(progress(consumed, 0.0), 0.0);
        prop_assert_eq!(progress(consumed, -10.0), 0.0);
    }
}
