/// Energy density per gram of each macro (kcal/g).
pub const KCAL_PER_G_PROTEIN: i32 = 4;
pub const KCAL_PER_G_CARBS: i32 = 4;
pub const KCAL_PER_G_FAT: i32 = 9;

/// Default protein density (g per kg bodyweight) when no override is given.
/// Cuts run slightly higher; both are capped before use.
pub const PROTEIN_CUT_G_PER_KG: f64 = 2.0;
pub const PROTEIN_DEFAULT_G_PER_KG: f64 = 1.8;

/// Cap applied to the default protein density. Explicit overrides bypass it.
pub const PROTEIN_CAP_G_PER_KG: f64 = 2.2;

/// Default fat density (g per kg bodyweight) when no override is given.
pub const FAT_DEFAULT_G_PER_KG: f64 = 0.8;

/// Absolute fat floor (g per kg bodyweight), independent of any override.
pub const FAT_FLOOR_G_PER_KG: f64 = 0.6;

/// Granularity of displayed gram targets.
pub const GRAM_STEP: i32 = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Prompt ranges and display defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Plausible age range accepted by the planner prompts.
pub const AGE_MIN: u32 = 13;
pub const AGE_MAX: u32 = 89;

/// Weekly rate of weight change accepted by the prompts (lb/week).
pub const RATE_MAX_LB_PER_WEEK: f64 = 2.0;

/// Advanced baseline prompt defaults and ranges, in the user's units (g/lb).
pub const PROTEIN_DISPLAY_G_PER_LB: f64 = 0.82;
pub const PROTEIN_PER_LB_MIN: f64 = 0.60;
pub const PROTEIN_PER_LB_MAX: f64 = 1.20;
pub const FAT_DISPLAY_G_PER_LB: f64 = 0.36;
pub const FAT_PER_LB_MIN: f64 = 0.27;
pub const FAT_PER_LB_MAX: f64 = 0.55;

/// Fallback manual targets shown when no plan exists yet.
pub const MANUAL_PROTEIN_DEFAULT_G: f64 = 150.0;
pub const MANUAL_CARBS_DEFAULT_G: f64 = 200.0;
pub const MANUAL_FAT_DEFAULT_G: f64 = 60.0;
