use chrono::{Local, NaiveDate, TimeZone};
use tempfile::NamedTempFile;

use macro_pal_rs::models::{FoodEntry, MacroPlan, PlannerDefaults};
use macro_pal_rs::state::{load_state, save_state, TrackerState, TrackerStateManager};

fn entry(name: &str, protein: f64, carbs: f64, fat: f64, day: u32, hour: u32) -> FoodEntry {
    FoodEntry::new(
        name.to_string(),
        protein,
        carbs,
        fat,
        Local.with_ymd_and_hms(2026, 4, day, hour, 30, 0).unwrap(),
    )
}

fn sample_state() -> TrackerState {
    TrackerState {
        plan: Some(MacroPlan::from_grams(150.0, 200.0, 60.0)),
        entries: vec![
            entry("Oats", 10.0, 50.0, 5.0, 6, 8),
            entry("Chicken breast", 40.0, 0.0, 5.0, 6, 13),
            entry("Rice", 5.0, 60.0, 1.0, 6, 13),
            entry("Oats", 12.0, 55.0, 6.0, 7, 8),
        ],
        defaults: Some(PlannerDefaults::default()),
    }
}

#[test]
fn test_state_roundtrips_through_disk() {
    let file = NamedTempFile::new().unwrap();
    save_state(file.path(), &sample_state()).unwrap();

    let reloaded = load_state(file.path()).unwrap();
    assert_eq!(reloaded.entries.len(), 4);
    assert_eq!(reloaded.plan.as_ref().unwrap().calorie_target, 1940.0);
    assert_eq!(reloaded.defaults.as_ref().unwrap().height_ft, 5);

    // Timestamps survive with day-level filtering intact.
    let manager = TrackerStateManager::new(reloaded);
    let day = NaiveDate::from_ymd_opt(2026, 4, 6).unwrap();
    assert_eq!(manager.entries_on(day).len(), 3);
}

#[test]
fn test_day_totals_feed_progress() {
    let manager = TrackerStateManager::new(sample_state());
    let day = NaiveDate::from_ymd_opt(2026, 4, 6).unwrap();

    let totals = manager.totals_on(day);
    assert_eq!(totals.protein, 55.0);
    assert_eq!(totals.carbs, 110.0);
    assert_eq!(totals.fat, 11.0);

    let progress = manager.progress(&totals).unwrap();
    assert!((progress.protein - 55.0 / 150.0).abs() < 1e-9);
    assert!((progress.carbs - 110.0 / 200.0).abs() < 1e-9);
    assert!(progress.calories < 1.0);
}

#[test]
fn test_recall_list_prefers_latest_entry() {
    let manager = TrackerStateManager::new(sample_state());
    let recent = manager.recent_unique_entries();

    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].name, "Oats");
    // The day-7 Oats entry shadows the day-6 one.
    assert_eq!(recent[0].protein, 12.0);
}

#[test]
fn test_undo_then_save_drops_the_entry() {
    let file = NamedTempFile::new().unwrap();
    let mut manager = TrackerStateManager::new(sample_state());

    let removed = manager.undo_last_entry().unwrap();
    assert_eq!(removed.name, "Oats");
    assert_eq!(removed.protein, 12.0);

    save_state(file.path(), manager.state()).unwrap();
    let reloaded = load_state(file.path()).unwrap();
    assert_eq!(reloaded.entries.len(), 3);
    assert!(reloaded.entries.iter().all(|e| e.protein != 12.0));
}

#[test]
fn test_fresh_state_has_no_plan_or_entries() {
    let manager = TrackerStateManager::new(TrackerState::default());
    assert!(manager.plan().is_none());
    assert_eq!(manager.entry_count(), 0);
    assert!(manager.progress(&manager.today_totals()).is_none());
    assert!(manager.recent_unique_entries().is_empty());
}
