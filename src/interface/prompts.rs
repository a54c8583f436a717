use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{Result, TrackerError};
use crate::models::{ActivityLevel, FoodEntry, Goal, MacroPlan, PlannerDefaults, SexForFormula};
use crate::planner::constants::{
    AGE_MAX, AGE_MIN, FAT_DISPLAY_G_PER_LB, FAT_PER_LB_MAX, FAT_PER_LB_MIN,
    MANUAL_CARBS_DEFAULT_G, MANUAL_FAT_DEFAULT_G, MANUAL_PROTEIN_DEFAULT_G,
    PROTEIN_DISPLAY_G_PER_LB, PROTEIN_PER_LB_MAX, PROTEIN_PER_LB_MIN, RATE_MAX_LB_PER_WEEK,
};
use crate::units;

/// Everything a planning session collects. The defaults half is persisted
/// for next time; the per-lb baselines stay session-only.
#[derive(Debug, Clone)]
pub struct PlannerInputs {
    pub defaults: PlannerDefaults,
    pub protein_g_per_lb: Option<f64>,
    pub fat_g_per_lb: Option<f64>,
}

/// Walk the user through the smart-planner inputs, seeded with the
/// last-used values.
pub fn collect_planner_inputs(seed: PlannerDefaults) -> Result<PlannerInputs> {
    let sex_labels: Vec<&str> = SexForFormula::ALL.iter().map(|s| s.title()).collect();
    let sex_default = SexForFormula::ALL.iter().position(|s| *s == seed.sex).unwrap_or(0);
    let sex = SexForFormula::ALL[Select::new()
        .with_prompt("Sex (formula)")
        .items(&sex_labels)
        .default(sex_default)
        .interact()?];

    let age: u32 = parse_input("Age", &seed.age.to_string())?;
    if !(AGE_MIN..=AGE_MAX).contains(&age) {
        return Err(TrackerError::InvalidInput(format!(
            "Age must be between {} and {}",
            AGE_MIN, AGE_MAX
        )));
    }

    let height_ft: u32 = parse_input("Height (ft)", &seed.height_ft.to_string())?;
    let height_in: u32 = parse_input("Height (in)", &seed.height_in.to_string())?;
    let (height_ft, height_in) = units::normalize_height(height_ft, height_in);

    let weight_lb: f64 = parse_input("Weight (lb)", &format!("{}", seed.weight_lb))?;
    if !(weight_lb.is_finite() && weight_lb > 0.0) {
        return Err(TrackerError::InvalidInput(
            "Weight must be positive".to_string(),
        ));
    }

    let activity_labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let activity_default = ActivityLevel::ALL
        .iter()
        .position(|a| *a == seed.activity)
        .unwrap_or(2);
    let activity = ActivityLevel::ALL[Select::new()
        .with_prompt("Activity level")
        .items(&activity_labels)
        .default(activity_default)
        .interact()?];

    let goal_labels: Vec<&str> = Goal::ALL.iter().map(|g| g.title()).collect();
    let goal_default = Goal::ALL.iter().position(|g| *g == seed.goal).unwrap_or(0);
    let goal = Goal::ALL[Select::new()
        .with_prompt("Goal")
        .items(&goal_labels)
        .default(goal_default)
        .interact()?];

    // Rate only matters when the goal has a direction.
    let rate_lb_per_week = if goal.sign() != 0.0 {
        let rate: f64 = parse_input("Rate (lb/week)", &format!("{:.1}", seed.rate_lb_per_week))?;
        if !(0.0..=RATE_MAX_LB_PER_WEEK).contains(&rate) {
            return Err(TrackerError::InvalidInput(format!(
                "Rate must be between 0 and {} lb/week",
                RATE_MAX_LB_PER_WEEK
            )));
        }
        rate
    } else {
        0.0
    };

    let (protein_g_per_lb, fat_g_per_lb) = if prompt_yes_no("Adjust advanced baselines (g per lb)?", false)? {
        let protein: f64 = parse_input(
            "Protein (g/lb)",
            &format!("{:.2}", PROTEIN_DISPLAY_G_PER_LB),
        )?;
        if !(PROTEIN_PER_LB_MIN..=PROTEIN_PER_LB_MAX).contains(&protein) {
            return Err(TrackerError::InvalidInput(format!(
                "Protein baseline must be between {} and {} g/lb",
                PROTEIN_PER_LB_MIN, PROTEIN_PER_LB_MAX
            )));
        }

        let fat: f64 = parse_input("Fat (g/lb)", &format!("{:.2}", FAT_DISPLAY_G_PER_LB))?;
        if !(FAT_PER_LB_MIN..=FAT_PER_LB_MAX).contains(&fat) {
            return Err(TrackerError::InvalidInput(format!(
                "Fat baseline must be between {} and {} g/lb",
                FAT_PER_LB_MIN, FAT_PER_LB_MAX
            )));
        }

        (Some(protein), Some(fat))
    } else {
        (None, None)
    };

    Ok(PlannerInputs {
        defaults: PlannerDefaults {
            sex,
            age,
            height_ft,
            height_in,
            weight_lb,
            activity,
            goal,
            rate_lb_per_week,
        },
        protein_g_per_lb,
        fat_g_per_lb,
    })
}

/// Prompt for a food entry: name plus macro grams. Previously logged
/// names are recalled with fuzzy matching so repeat foods prefill.
pub fn prompt_food_entry(recent: &[&FoodEntry]) -> Result<(String, f64, f64, f64)> {
    let input: String = Input::new().with_prompt("Food name").interact_text()?;
    let input = input.trim().to_string();
    if input.is_empty() {
        return Err(TrackerError::InvalidInput(
            "Food name cannot be empty".to_string(),
        ));
    }

    let matched = find_recall_match(&input, recent)?;
    let (name, prefill) = match matched {
        Some(entry) => (
            entry.name.clone(),
            Some((entry.protein, entry.carbs, entry.fat)),
        ),
        None => (input, None),
    };

    if let Some((protein, carbs, fat)) = prefill {
        let reuse = prompt_yes_no(
            &format!(
                "Use the last logged macros for '{}' (P {:.0} / C {:.0} / F {:.0})?",
                name, protein, carbs, fat
            ),
            true,
        )?;
        if reuse {
            return Ok((name, protein, carbs, fat));
        }
    }

    let (dp, dc, df) = prefill.unwrap_or((0.0, 0.0, 0.0));
    let protein = prompt_grams("Protein (g)", dp)?;
    let carbs = prompt_grams("Carbs (g)", dc)?;
    let fat = prompt_grams("Fat (g)", df)?;

    Ok((name, protein, carbs, fat))
}

/// Prompt for manual daily targets, seeded from the current plan when one
/// exists.
pub fn prompt_targets(current: Option<&MacroPlan>) -> Result<(f64, f64, f64)> {
    let (dp, dc, df) = match current {
        Some(plan) => (plan.protein_target, plan.carb_target, plan.fat_target),
        None => (
            MANUAL_PROTEIN_DEFAULT_G,
            MANUAL_CARBS_DEFAULT_G,
            MANUAL_FAT_DEFAULT_G,
        ),
    };

    let protein = prompt_grams("Protein target (g)", dp)?;
    let carbs = prompt_grams("Carbs target (g)", dc)?;
    let fat = prompt_grams("Fat target (g)", df)?;

    Ok((protein, carbs, fat))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Resolve a typed name against the recall list: exact match first, then
/// fuzzy candidates the user confirms or picks from.
fn find_recall_match<'a>(input: &str, recent: &[&'a FoodEntry]) -> Result<Option<&'a FoodEntry>> {
    let exact = recent.iter().find(|e| e.key() == input.to_lowercase()).copied();
    if let Some(entry) = exact {
        return Ok(Some(entry));
    }

    let mut candidates: Vec<(&FoodEntry, f64)> = recent
        .iter()
        .map(|e| (*e, jaro_winkler(&e.key(), &input.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let entry = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", entry.name))
            .default(true)
            .interact()?;
        return Ok(if confirm { Some(entry) } else { None });
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(e, _)| e.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(candidates[selection].0))
    } else {
        Ok(None)
    }
}

fn prompt_grams(prompt: &str, default: f64) -> Result<f64> {
    let grams: f64 = parse_input(prompt, &format!("{:.0}", default))?;
    if !(grams.is_finite() && grams >= 0.0) {
        return Err(TrackerError::InvalidInput(
            "Grams must be non-negative".to_string(),
        ));
    }
    Ok(grams)
}

fn parse_input<T: std::str::FromStr>(prompt: &str, default: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidInput(format!("Invalid value for {}", prompt)))
}
