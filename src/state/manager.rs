use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{FoodEntry, MacroPlan, PlannerDefaults};

/// Everything the tracker persists between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerState {
    #[serde(default)]
    pub plan: Option<MacroPlan>,

    #[serde(default)]
    pub entries: Vec<FoodEntry>,

    #[serde(default)]
    pub defaults: Option<PlannerDefaults>,
}

/// Macro totals for one day of logged entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayTotals {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub calories: f64,
}

/// Progress toward the current plan, each as a fraction clamped to 0..1.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub calories: f64,
}

/// Owns the tracker state in memory: the food log, the current plan, and
/// the last-used planner inputs.
pub struct TrackerStateManager {
    state: TrackerState,
}

impl TrackerStateManager {
    pub fn new(state: TrackerState) -> Self {
        Self { state }
    }

    /// Borrow the state for persistence.
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn plan(&self) -> Option<&MacroPlan> {
        self.state.plan.as_ref()
    }

    pub fn set_plan(&mut self, plan: MacroPlan) {
        self.state.plan = Some(plan);
    }

    pub fn clear_plan(&mut self) {
        self.state.plan = None;
    }

    pub fn defaults(&self) -> Option<&PlannerDefaults> {
        self.state.defaults.as_ref()
    }

    pub fn set_defaults(&mut self, defaults: PlannerDefaults) {
        self.state.defaults = Some(defaults);
    }

    pub fn clear_defaults(&mut self) {
        self.state.defaults = None;
    }

    pub fn add_entry(&mut self, entry: FoodEntry) {
        self.state.entries.push(entry);
    }

    /// Remove and return the most recently logged entry.
    pub fn undo_last_entry(&mut self) -> Option<FoodEntry> {
        let latest = self
            .state
            .entries
            .iter()
            .enumerate()
            .max_by_key(|(_, e)| e.logged_at)?
            .0;
        Some(self.state.entries.remove(latest))
    }

    pub fn entries(&self) -> &[FoodEntry] {
        &self.state.entries
    }

    /// Entries logged on a given local date, newest first.
    pub fn entries_on(&self, date: NaiveDate) -> Vec<&FoodEntry> {
        let mut entries: Vec<&FoodEntry> = self
            .state
            .entries
            .iter()
            .filter(|e| e.logged_at.date_naive() == date)
            .collect();
        entries.sort_by_key(|e| std::cmp::Reverse(e.logged_at));
        entries
    }

    pub fn today_entries(&self) -> Vec<&FoodEntry> {
        self.entries_on(Local::now().date_naive())
    }

    pub fn totals_on(&self, date: NaiveDate) -> DayTotals {
        let mut totals = DayTotals::default();
        for entry in self.entries_on(date) {
            totals.protein += entry.protein;
            totals.carbs += entry.carbs;
            totals.fat += entry.fat;
            totals.calories += entry.calories;
        }
        totals
    }

    pub fn today_totals(&self) -> DayTotals {
        self.totals_on(Local::now().date_naive())
    }

    /// Progress fractions against the current plan. `None` without a plan;
    /// a zero target reads as zero progress rather than dividing by it.
    pub fn progress(&self, totals: &DayTotals) -> Option<Progress> {
        let plan = self.plan()?;
        let pct = |value: f64, target: f64| {
            if target == 0.0 {
                0.0
            } else {
                (value / target).clamp(0.0, 1.0)
            }
        };
        Some(Progress {
            protein: pct(totals.protein, plan.protein_target),
            carbs: pct(totals.carbs, plan.carb_target),
            fat: pct(totals.fat, plan.fat_target),
            calories: pct(totals.calories, plan.calorie_target),
        })
    }

    /// Latest entry per distinct food name (case-insensitive), most recent
    /// first. Feeds the quick-add recall prompt.
    pub fn recent_unique_entries(&self) -> Vec<&FoodEntry> {
        let mut sorted: Vec<&FoodEntry> = self.state.entries.iter().collect();
        sorted.sort_by_key(|e| std::cmp::Reverse(e.logged_at));

        let mut seen = std::collections::HashSet::new();
        sorted.retain(|e| seen.insert(e.key()));
        sorted
    }

    pub fn reset_log(&mut self) {
        self.state.entries.clear();
    }

    pub fn entry_count(&self) -> usize {
        self.state.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};

    fn at(date: (i32, u32, u32), hour: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(date.0, date.1, date.2, hour, 0, 0)
            .unwrap()
    }

    fn sample_state() -> TrackerState {
        TrackerState {
            plan: Some(MacroPlan::from_grams(150.0, 200.0, 60.0)),
            entries: vec![
                FoodEntry::new("Oats".to_string(), 10.0, 50.0, 5.0, at((2026, 3, 2), 8)),
                FoodEntry::new(
                    "Chicken breast".to_string(),
                    40.0,
                    0.0,
                    5.0,
                    at((2026, 3, 2), 13),
                ),
                FoodEntry::new("Oats".to_string(), 12.0, 55.0, 6.0, at((2026, 3, 3), 8)),
            ],
            defaults: None,
        }
    }

    #[test]
    fn test_entries_on_filters_by_day_newest_first() {
        let manager = TrackerStateManager::new(sample_state());
        let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

        let entries = manager.entries_on(day);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Chicken breast");
        assert_eq!(entries[1].name, "Oats");
    }

    #[test]
    fn test_totals_on_sums_macros() {
        let manager = TrackerStateManager::new(sample_state());
        let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

        let totals = manager.totals_on(day);
        assert_eq!(totals.protein, 50.0);
        assert_eq!(totals.carbs, 50.0);
        assert_eq!(totals.fat, 10.0);
        assert_eq!(totals.calories, 50.0 * 4.0 + 50.0 * 4.0 + 10.0 * 9.0);
    }

    #[test]
    fn test_progress_clamps_and_handles_zero_targets() {
        let mut manager = TrackerStateManager::new(sample_state());

        let overshoot = DayTotals {
            protein: 500.0,
            carbs: 100.0,
            fat: 30.0,
            calories: 2000.0,
        };
        let progress = manager.progress(&overshoot).unwrap();
        assert_eq!(progress.protein, 1.0);
        assert_eq!(progress.carbs, 0.5);
        assert_eq!(progress.fat, 0.5);

        manager.set_plan(MacroPlan::from_grams(0.0, 0.0, 0.0));
        let progress = manager.progress(&overshoot).unwrap();
        assert_eq!(progress.protein, 0.0);
        assert_eq!(progress.calories, 0.0);
    }

    #[test]
    fn test_progress_none_without_plan() {
        let mut manager = TrackerStateManager::new(sample_state());
        manager.clear_plan();
        assert!(manager.progress(&DayTotals::default()).is_none());
    }

    #[test]
    fn test_recent_unique_entries_dedupes_by_name() {
        let manager = TrackerStateManager::new(sample_state());
        let recent = manager.recent_unique_entries();

        assert_eq!(recent.len(), 2);
        // The later Oats entry wins the dedup.
        assert_eq!(recent[0].name, "Oats");
        assert_eq!(recent[0].protein, 12.0);
        assert_eq!(recent[1].name, "Chicken breast");
    }

    #[test]
    fn test_undo_last_entry_removes_latest() {
        let mut manager = TrackerStateManager::new(sample_state());

        let removed = manager.undo_last_entry().unwrap();
        assert_eq!(removed.name, "Oats");
        assert_eq!(removed.protein, 12.0);
        assert_eq!(manager.entry_count(), 2);
    }

    #[test]
    fn test_reset_log_clears_entries_only() {
        let mut manager = TrackerStateManager::new(sample_state());
        manager.reset_log();
        assert_eq!(manager.entry_count(), 0);
        assert!(manager.plan().is_some());
    }
}
