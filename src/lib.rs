pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;
pub mod units;

pub use error::{Result, TrackerError};
pub use models::{ComputedPlan, FoodEntry, MacroPlan, UserProfile};
