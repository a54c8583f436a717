pub mod manager;
pub mod persistence;

pub use manager::{DayTotals, Progress, TrackerState, TrackerStateManager};
pub use persistence::{load_state, save_state};
