pub mod calculations;
pub mod constants;

pub use calculations::{macro_percentages, make_plan, mifflin_st_jeor_bmr, PlannerOptions};
pub use constants::*;
