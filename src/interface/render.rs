use crate::models::{ComputedPlan, FoodEntry, MacroPlan};
use crate::planner::macro_percentages;
use crate::state::{DayTotals, Progress};

const BAR_WIDTH: usize = 20;

/// Display a computed plan with its percentage breakdown.
pub fn display_plan(plan: &ComputedPlan) {
    let (protein_pct, carbs_pct, fat_pct) = macro_percentages(plan);

    println!();
    println!("=== Your Plan ===");
    println!();
    println!("{} kcal/day", plan.calories);
    println!("  Protein: {:>4} g ({}%)", plan.protein_g, protein_pct);
    println!("  Carbs:   {:>4} g ({}%)", plan.carbs_g, carbs_pct);
    println!("  Fat:     {:>4} g ({}%)", plan.fat_g, fat_pct);
    println!();
}

/// Display today's totals against the current targets.
pub fn display_dashboard(totals: &DayTotals, plan: Option<&MacroPlan>, progress: Option<&Progress>) {
    println!();
    println!("=== Today ===");
    println!();

    match (plan, progress) {
        (Some(plan), Some(progress)) => {
            println!(
                "Protein  {} {:>4.0} / {:>4.0} g",
                bar(progress.protein),
                totals.protein,
                plan.protein_target
            );
            println!(
                "Carbs    {} {:>4.0} / {:>4.0} g",
                bar(progress.carbs),
                totals.carbs,
                plan.carb_target
            );
            println!(
                "Fat      {} {:>4.0} / {:>4.0} g",
                bar(progress.fat),
                totals.fat,
                plan.fat_target
            );
            println!(
                "Calories {} {:>4.0} / {:>4.0} kcal",
                bar(progress.calories),
                totals.calories,
                plan.calorie_target
            );
        }
        _ => {
            println!(
                "Logged so far: P {:.0} / C {:.0} / F {:.0} - {:.0} kcal",
                totals.protein, totals.carbs, totals.fat, totals.calories
            );
            println!("No targets set. Run 'plan' or 'targets' to set them.");
        }
    }

    println!();
}

/// Display a day's log entries, newest first.
pub fn display_log(entries: &[&FoodEntry]) {
    if entries.is_empty() {
        println!("Nothing logged today.");
        return;
    }

    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{:>3}. {} [{}] - P {:.0} / C {:.0} / F {:.0} - {:.0} kcal",
            i + 1,
            entry.name,
            entry.logged_at.format("%H:%M"),
            entry.protein,
            entry.carbs,
            entry.fat,
            entry.calories
        );
    }
}

fn bar(fraction: f64) -> String {
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
