pub mod entry;
pub mod plan;
pub mod profile;

pub use entry::FoodEntry;
pub use plan::{ComputedPlan, MacroPlan};
pub use profile::{ActivityLevel, Goal, PlannerDefaults, SexForFormula, UserProfile};
