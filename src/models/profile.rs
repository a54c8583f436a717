use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Formula selector for the Mifflin-St Jeor constant offset.
///
/// Picks the equation variant only; not a gender-identity claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SexForFormula {
    Male,
    Female,
}

impl SexForFormula {
    pub const ALL: [SexForFormula; 2] = [SexForFormula::Male, SexForFormula::Female];

    pub fn title(&self) -> &'static str {
        match self {
            SexForFormula::Male => "Male",
            SexForFormula::Female => "Female",
        }
    }
}

/// Activity tier for TDEE. The multiplier lives on the variant so the
/// label and the number can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// TDEE multiplier applied to BMR.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.20,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little/no exercise)",
            ActivityLevel::Light => "Light (1-3x/wk)",
            ActivityLevel::Moderate => "Moderate (3-5x/wk)",
            ActivityLevel::Active => "Active (6-7x/wk)",
            ActivityLevel::VeryActive => "Very Active (hard daily/2x day)",
        }
    }
}

/// Direction of body-weight change.
///
/// Recomp carries no distinct branch: it signs like maintain and uses the
/// non-cut protein default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Cut,
    Maintain,
    Gain,
    Recomp,
}

impl Goal {
    pub const ALL: [Goal; 4] = [Goal::Cut, Goal::Maintain, Goal::Gain, Goal::Recomp];

    /// Sign of the daily calorie delta derived from a weekly rate.
    pub fn sign(&self) -> f64 {
        match self {
            Goal::Cut => -1.0,
            Goal::Gain => 1.0,
            Goal::Maintain | Goal::Recomp => 0.0,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Goal::Cut => "Cut",
            Goal::Maintain => "Maintain",
            Goal::Gain => "Gain",
            Goal::Recomp => "Recomp",
        }
    }
}

/// Formula-ready body stats. Always metric; unit conversion happens at the
/// prompt boundary before this is constructed.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age: u32,
    pub sex_for_formula: SexForFormula,
    pub activity: ActivityLevel,
}

impl UserProfile {
    /// Build a profile, rejecting non-positive or non-finite height/weight.
    /// The planner assumes these invariants and does not re-check them.
    pub fn new(
        height_cm: f64,
        weight_kg: f64,
        age: u32,
        sex_for_formula: SexForFormula,
        activity: ActivityLevel,
    ) -> Result<Self> {
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(TrackerError::InvalidProfile(format!(
                "height must be positive, got {} cm",
                height_cm
            )));
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(TrackerError::InvalidProfile(format!(
                "weight must be positive, got {} kg",
                weight_kg
            )));
        }

        Ok(Self {
            height_cm,
            weight_kg,
            age,
            sex_for_formula,
            activity,
        })
    }
}

/// Last-used planner inputs, kept in the units the user typed them.
/// Restored as prompt defaults on the next planning session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerDefaults {
    pub sex: SexForFormula,
    pub age: u32,
    pub height_ft: u32,
    pub height_in: u32,
    pub weight_lb: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
    pub rate_lb_per_week: f64,
}

impl Default for PlannerDefaults {
    fn default() -> Self {
        Self {
            sex: SexForFormula::Male,
            age: 30,
            height_ft: 5,
            height_in: 10,
            weight_lb: 170.0,
            activity: ActivityLevel::Moderate,
            goal: Goal::Cut,
            rate_lb_per_week: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_rejects_nonpositive_dimensions() {
        assert!(
            UserProfile::new(0.0, 70.0, 30, SexForFormula::Male, ActivityLevel::Moderate).is_err()
        );
        assert!(
            UserProfile::new(175.0, -1.0, 30, SexForFormula::Male, ActivityLevel::Moderate)
                .is_err()
        );
        assert!(
            UserProfile::new(
                175.0,
                f64::NAN,
                30,
                SexForFormula::Male,
                ActivityLevel::Moderate
            )
            .is_err()
        );
    }

    #[test]
    fn test_profile_accepts_valid_dimensions() {
        let profile =
            UserProfile::new(175.0, 70.0, 30, SexForFormula::Female, ActivityLevel::Light)
                .unwrap();
        assert_eq!(profile.age, 30);
        assert_eq!(profile.activity, ActivityLevel::Light);
    }

    #[test]
    fn test_activity_multipliers_are_ordered() {
        for window in ActivityLevel::ALL.windows(2) {
            assert!(window[0].multiplier() < window[1].multiplier());
        }
    }

    #[test]
    fn test_goal_signs() {
        assert_eq!(Goal::Cut.sign(), -1.0);
        assert_eq!(Goal::Gain.sign(), 1.0);
        assert_eq!(Goal::Maintain.sign(), 0.0);
        assert_eq!(Goal::Recomp.sign(), 0.0);
    }
}
