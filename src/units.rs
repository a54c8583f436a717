//! Imperial-to-metric conversion at the prompt boundary. Everything past
//! here runs in metric; the planner never sees user-facing units.

use crate::models::Goal;

pub const CM_PER_INCH: f64 = 2.54;
pub const KG_PER_LB: f64 = 0.453_592_37;
pub const LB_PER_KG: f64 = 2.204_622_62;

/// Approximate energy content of one pound of body mass (kcal).
pub const KCAL_PER_LB_BODYWEIGHT: f64 = 3500.0;

/// Convert a feet + inches height to centimeters.
pub fn feet_inches_to_cm(feet: u32, inches: u32) -> f64 {
    f64::from(feet * 12 + inches) * CM_PER_INCH
}

/// Carry overflowing inches into feet (e.g. 5 ft 14 in -> 6 ft 2 in).
pub fn normalize_height(feet: u32, inches: u32) -> (u32, u32) {
    (feet + inches / 12, inches % 12)
}

pub fn lb_to_kg(lb: f64) -> f64 {
    lb * KG_PER_LB
}

/// Convert a per-pound density (g/lb) to per-kilogram (g/kg).
pub fn per_lb_to_per_kg(g_per_lb: f64) -> f64 {
    g_per_lb * LB_PER_KG
}

/// Daily kcal offset for a weekly rate of weight change, signed by the
/// goal direction. Roughly 500 kcal/day per 1 lb/week.
pub fn daily_calorie_delta(goal: Goal, rate_lb_per_week: f64) -> f64 {
    goal.sign() * rate_lb_per_week * KCAL_PER_LB_BODYWEIGHT / 7.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_feet_inches_to_cm() {
        assert_float_absolute_eq!(feet_inches_to_cm(5, 10), 177.8, 1e-9);
        assert_float_absolute_eq!(feet_inches_to_cm(6, 0), 182.88, 1e-9);
    }

    #[test]
    fn test_normalize_height_carries_inches() {
        assert_eq!(normalize_height(5, 14), (6, 2));
        assert_eq!(normalize_height(5, 11), (5, 11));
        assert_eq!(normalize_height(5, 12), (6, 0));
    }

    #[test]
    fn test_lb_to_kg() {
        assert_float_absolute_eq!(lb_to_kg(170.0), 77.1107029, 1e-6);
    }

    #[test]
    fn test_per_lb_to_per_kg_roundtrip() {
        // 0.82 g/lb is the display default for the ~1.8 g/kg protein default.
        assert_float_absolute_eq!(per_lb_to_per_kg(0.82), 1.8077905, 1e-6);
        assert_float_absolute_eq!(KG_PER_LB * LB_PER_KG, 1.0, 1e-8);
    }

    #[test]
    fn test_daily_calorie_delta_signed_by_goal() {
        assert_float_absolute_eq!(daily_calorie_delta(Goal::Cut, 1.0), -500.0, 1e-9);
        assert_float_absolute_eq!(daily_calorie_delta(Goal::Gain, 0.5), 250.0, 1e-9);
        assert_float_absolute_eq!(daily_calorie_delta(Goal::Maintain, 2.0), 0.0, 1e-9);
        assert_float_absolute_eq!(daily_calorie_delta(Goal::Recomp, 2.0), 0.0, 1e-9);
    }
}
