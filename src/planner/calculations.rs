use crate::models::{ComputedPlan, Goal, SexForFormula, UserProfile};
use crate::planner::constants::*;

/// Per-run planning knobs. `None` overrides fall back to the documented
/// defaults, never to a sentinel value.
#[derive(Debug, Clone)]
pub struct PlannerOptions {
    pub goal: Goal,

    /// Signed daily kcal offset from maintenance, precomputed from the
    /// goal rate (see `units::daily_calorie_delta`).
    pub daily_calorie_delta: f64,

    /// Protein density override (g per kg bodyweight).
    pub protein_g_per_kg: Option<f64>,

    /// Fat density override (g per kg bodyweight).
    pub fat_g_per_kg: Option<f64>,
}

/// Compute a daily calorie/macro plan from body stats and goal options.
///
/// Pure and total: any profile satisfying the `UserProfile` invariants
/// produces a structurally valid plan. Guardrails run in a fixed order:
/// fat is trimmed (never protein) before carbs are floored, then calories
/// are raised to the macro sum if the grams imply more energy than the
/// stated target.
pub fn make_plan(profile: &UserProfile, options: &PlannerOptions) -> ComputedPlan {
    let bmr = mifflin_st_jeor_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.sex_for_formula,
    );
    let tdee = bmr * profile.activity.multiplier();
    let mut calories = (tdee + options.daily_calorie_delta).round() as i32;

    let protein_g = protein_target(profile.weight_kg, options.goal, options.protein_g_per_kg);
    let mut fat_g = fat_target(profile.weight_kg, options.fat_g_per_kg);
    let mut carbs_g = carbs_from_remainder(calories, protein_g, fat_g);

    if carbs_g < 0 {
        let min_fat = (FAT_FLOOR_G_PER_KG * profile.weight_kg).round() as i32;
        if fat_g > min_fat {
            // Give back only as much fat as the carb gap needs, never
            // dropping below the absolute floor.
            let delta = (fat_g - min_fat).min(carbs_g.abs() * KCAL_PER_G_CARBS / KCAL_PER_G_FAT + 1);
            fat_g -= delta;
            carbs_g = carbs_from_remainder(calories, protein_g, fat_g);
        }
        carbs_g = carbs_g.max(0);
    }

    let macro_calories =
        KCAL_PER_G_PROTEIN * protein_g + KCAL_PER_G_FAT * fat_g + KCAL_PER_G_CARBS * carbs_g;
    if macro_calories > calories {
        calories = macro_calories;
    }

    ComputedPlan {
        calories,
        protein_g: round5(protein_g),
        carbs_g: round5(carbs_g),
        fat_g: round5(fat_g),
    }
}

/// Mifflin-St Jeor resting energy estimate:
/// `10*kg + 6.25*cm - 5*age + S`, with `S` +5 (male) or -161 (female).
pub fn mifflin_st_jeor_bmr(weight_kg: f64, height_cm: f64, age: u32, sex: SexForFormula) -> f64 {
    let s = match sex {
        SexForFormula::Male => 5.0,
        SexForFormula::Female => -161.0,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + s
}

/// Rounded percentage breakdown (protein, carbs, fat) of a plan's
/// calories. Returns zeros for a degenerate zero-calorie plan.
pub fn macro_percentages(plan: &ComputedPlan) -> (i32, i32, i32) {
    if plan.calories <= 0 {
        return (0, 0, 0);
    }
    let calories = f64::from(plan.calories);
    let pct = |grams: i32, kcal_per_g: i32| {
        (f64::from(grams * kcal_per_g) / calories * 100.0).round() as i32
    };
    (
        pct(plan.protein_g, KCAL_PER_G_PROTEIN),
        pct(plan.carbs_g, KCAL_PER_G_CARBS),
        pct(plan.fat_g, KCAL_PER_G_FAT),
    )
}

fn protein_target(weight_kg: f64, goal: Goal, override_per_kg: Option<f64>) -> i32 {
    if let Some(per_kg) = override_per_kg {
        return (per_kg * weight_kg).round() as i32;
    }
    // Slightly higher default on cuts; the cap applies to defaults only.
    let per_kg_default = if goal == Goal::Cut {
        PROTEIN_CUT_G_PER_KG
    } else {
        PROTEIN_DEFAULT_G_PER_KG
    };
    (PROTEIN_CAP_G_PER_KG.min(per_kg_default) * weight_kg).round() as i32
}

fn fat_target(weight_kg: f64, override_per_kg: Option<f64>) -> i32 {
    let per_kg = override_per_kg.unwrap_or(FAT_DEFAULT_G_PER_KG);
    let grams = (FAT_FLOOR_G_PER_KG * weight_kg).max(per_kg * weight_kg);
    grams.round() as i32
}

/// Carbs fill whatever energy is left after protein and fat.
fn carbs_from_remainder(calories: i32, protein_g: i32, fat_g: i32) -> i32 {
    let remainder = f64::from(calories)
        - f64::from(KCAL_PER_G_PROTEIN * protein_g)
        - f64::from(KCAL_PER_G_FAT * fat_g);
    (remainder / f64::from(KCAL_PER_G_CARBS)).round() as i32
}

/// Round to the nearest multiple of 5, halves away from zero.
fn round5(x: i32) -> i32 {
    (f64::from(x) / f64::from(GRAM_STEP)).round() as i32 * GRAM_STEP
}
