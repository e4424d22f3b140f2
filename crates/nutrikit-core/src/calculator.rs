//! Nutrition calculator: BMI classification and daily calorie/macro
//! targets from a user profile.

use thiserror::Error;

use crate::constants::{
    activity_multiplier, calorie_adjustment, macro_ratio_for, CARBS_KCAL_PER_GRAM,
    FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM,
};
use crate::models::{BmiCategory, BmiResult, CalorieNeeds, Profile, Sex};

/// Calculator errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("height must be positive, got {0}")]
    NonPositiveHeight(f64),

    #[error("weight must be positive, got {0}")]
    NonPositiveWeight(f64),
}

pub type CalcResult<T> = Result<T, CalcError>;

// The negated comparison also rejects NaN.
fn check_measurements(profile: &Profile) -> CalcResult<()> {
    if !(profile.height > 0.0) {
        return Err(CalcError::NonPositiveHeight(profile.height));
    }
    if !(profile.weight > 0.0) {
        return Err(CalcError::NonPositiveWeight(profile.weight));
    }
    Ok(())
}

/// Body Mass Index (weight / height_m²) with its category.
pub fn calculate_bmi(profile: &Profile) -> CalcResult<BmiResult> {
    check_measurements(profile)?;

    let height_m = profile.height / 100.0;
    let bmi = profile.weight / (height_m * height_m);

    Ok(BmiResult {
        bmi,
        category: BmiCategory::from_bmi(bmi),
    })
}

/// Basal Metabolic Rate via the sex-branched Harris-Benedict equation.
pub fn calculate_bmr(profile: &Profile) -> CalcResult<f64> {
    check_measurements(profile)?;

    let age = f64::from(profile.age);
    Ok(match profile.sex {
        Sex::Male => 88.362 + 13.397 * profile.weight + 4.799 * profile.height - 5.677 * age,
        Sex::Female => 447.593 + 9.247 * profile.weight + 3.098 * profile.height - 4.330 * age,
    })
}

/// Daily calorie and macronutrient targets.
///
/// Maintenance scales BMR by the activity multiplier, the goal delta is
/// applied on top, and the selected macro split is converted to grams at
/// the 4/4/9 kcal-per-gram densities. A health-condition override takes
/// precedence over the goal preset.
pub fn calculate_calorie_needs(profile: &Profile) -> CalcResult<CalorieNeeds> {
    let bmr = calculate_bmr(profile)?;
    let maintenance = bmr * activity_multiplier(profile.activity_level);
    let goal_calories = maintenance + calorie_adjustment(profile.goal);
    let ratio = macro_ratio_for(profile.goal, profile.health_issue);

    Ok(CalorieNeeds {
        maintenance,
        goal_calories,
        protein: goal_calories * ratio.protein / PROTEIN_KCAL_PER_GRAM,
        carbs: goal_calories * ratio.carbs / CARBS_KCAL_PER_GRAM,
        fat: goal_calories * ratio.fat / FAT_KCAL_PER_GRAM,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Goal, HealthIssue};

    fn base_profile() -> Profile {
        Profile {
            age: 30,
            sex: Sex::Male,
            height: 175.0,
            weight: 70.0,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::MaintainWeight,
            health_issue: HealthIssue::None,
        }
    }

    #[test]
    fn test_bmr_reference_value() {
        // 88.362 + 13.397*70 + 4.799*175 - 5.677*30 = 1695.667
        let bmr = calculate_bmr(&base_profile()).unwrap();
        assert!((bmr - 1695.667).abs() < 0.01);
    }

    #[test]
    fn test_bmr_female_branch() {
        let mut profile = base_profile();
        profile.sex = Sex::Female;

        let expected = 447.593 + 9.247 * 70.0 + 3.098 * 175.0 - 4.330 * 30.0;
        assert_eq!(calculate_bmr(&profile).unwrap(), expected);
    }

    #[test]
    fn test_bmi_value_and_category() {
        let result = calculate_bmi(&base_profile()).unwrap();
        // 70 / 1.75² = 22.857
        assert!((result.bmi - 22.857).abs() < 0.001);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_zero_height_rejected() {
        let mut profile = base_profile();
        profile.height = 0.0;

        assert_eq!(
            calculate_bmi(&profile),
            Err(CalcError::NonPositiveHeight(0.0))
        );
        assert!(calculate_calorie_needs(&profile).is_err());
    }

    #[test]
    fn test_zero_weight_rejected() {
        let mut profile = base_profile();
        profile.weight = 0.0;

        assert_eq!(
            calculate_bmr(&profile),
            Err(CalcError::NonPositiveWeight(0.0))
        );
    }

    #[test]
    fn test_maintain_weight_keeps_maintenance() {
        let needs = calculate_calorie_needs(&base_profile()).unwrap();
        assert_eq!(needs.goal_calories, needs.maintenance);
    }

    #[test]
    fn test_goal_adjustments() {
        let mut profile = base_profile();

        profile.goal = Goal::WeightLoss;
        let loss = calculate_calorie_needs(&profile).unwrap();
        assert_eq!(loss.goal_calories, loss.maintenance - 500.0);

        profile.goal = Goal::WeightGain;
        let gain = calculate_calorie_needs(&profile).unwrap();
        assert_eq!(gain.goal_calories, gain.maintenance + 500.0);
    }

    #[test]
    fn test_macro_energy_reconstitutes_goal_calories() {
        let needs = calculate_calorie_needs(&base_profile()).unwrap();
        let energy = needs.protein * 4.0 + needs.carbs * 4.0 + needs.fat * 9.0;
        assert!((energy - needs.goal_calories).abs() < 1e-6);
    }

    #[test]
    fn test_diabetes_overrides_weight_loss_ratio() {
        let mut profile = base_profile();
        profile.goal = Goal::WeightLoss;
        profile.health_issue = HealthIssue::Diabetes;

        let needs = calculate_calorie_needs(&profile).unwrap();
        // Diabetes split is 30/40/30, not the weightLoss 35/40/25
        assert!((needs.protein - needs.goal_calories * 0.30 / 4.0).abs() < 1e-9);
        assert!((needs.fat - needs.goal_calories * 0.30 / 9.0).abs() < 1e-9);
    }
}
