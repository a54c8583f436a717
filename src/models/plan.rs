use serde::{Deserialize, Serialize};

/// Result of one planning run. Gram targets are non-negative multiples
/// of 5; calories are reported unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputedPlan {
    pub calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
}

/// The durable "current plan" record the dashboard measures progress
/// against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroPlan {
    pub protein_target: f64,
    pub carb_target: f64,
    pub fat_target: f64,
    pub calorie_target: f64,
}

impl MacroPlan {
    /// Manual targets: calories derived from the gram targets.
    pub fn from_grams(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein_target: protein,
            carb_target: carbs,
            fat_target: fat,
            calorie_target: protein * 4.0 + carbs * 4.0 + fat * 9.0,
        }
    }

    /// Adopt a planner result, keeping its calorie figure (which may sit
    /// above the macro sum after the consistency guardrail).
    pub fn from_computed(plan: &ComputedPlan) -> Self {
        Self {
            protein_target: f64::from(plan.protein_g),
            carb_target: f64::from(plan.carbs_g),
            fat_target: f64::from(plan.fat_g),
            calorie_target: f64::from(plan.calories),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_grams_derives_calories() {
        let plan = MacroPlan::from_grams(150.0, 200.0, 60.0);
        assert_eq!(plan.calorie_target, 150.0 * 4.0 + 200.0 * 4.0 + 60.0 * 9.0);
    }

    #[test]
    fn test_from_computed_keeps_calorie_figure() {
        let computed = ComputedPlan {
            calories: 1340,
            protein_g: 200,
            carbs_g: 0,
            fat_g: 60,
        };
        let plan = MacroPlan::from_computed(&computed);
        assert_eq!(plan.calorie_target, 1340.0);
        assert_eq!(plan.protein_target, 200.0);
    }
}
