use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A logged food with its macro grams. Calories are derived at
/// construction (4/4/9 kcal per gram) and stored with the entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub calories: f64,
    pub logged_at: DateTime<Local>,
}

impl FoodEntry {
    pub fn new(name: String, protein: f64, carbs: f64, fat: f64, logged_at: DateTime<Local>) -> Self {
        Self {
            name,
            protein,
            carbs,
            fat,
            calories: protein * 4.0 + carbs * 4.0 + fat * 9.0,
            logged_at,
        }
    }

    /// Canonical key for recall lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
