pub mod prompts;
pub mod render;

pub use prompts::{
    collect_planner_inputs, prompt_food_entry, prompt_targets, prompt_yes_no, PlannerInputs,
};
pub use render::{display_dashboard, display_log, display_plan};
