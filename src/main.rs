use chrono::Local;
use clap::Parser;
use std::path::Path;

use macro_pal_rs::cli::{Cli, Command};
use macro_pal_rs::error::Result;
use macro_pal_rs::interface::{
    collect_planner_inputs, display_dashboard, display_log, display_plan, prompt_food_entry,
    prompt_targets, prompt_yes_no,
};
use macro_pal_rs::models::{FoodEntry, MacroPlan, UserProfile};
use macro_pal_rs::planner::{make_plan, PlannerOptions};
use macro_pal_rs::state::{load_state, save_state, TrackerStateManager};
use macro_pal_rs::units;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Today => cmd_today(&cli.file),
        Command::Plan => cmd_plan(&cli.file),
        Command::Targets {
            protein,
            carbs,
            fat,
        } => cmd_targets(&cli.file, protein, carbs, fat),
        Command::Log { undo } => cmd_log(&cli.file, undo),
        Command::Export { output } => cmd_export(&cli.file, &output),
        Command::Reset {
            log,
            plan,
            defaults,
        } => cmd_reset(&cli.file, log, plan, defaults),
    }
}

/// Show today's totals and progress toward the current targets.
fn cmd_today(file_path: &str) -> Result<()> {
    let state = load_state(Path::new(file_path))?;
    let manager = TrackerStateManager::new(state);

    let totals = manager.today_totals();
    let progress = manager.progress(&totals);

    display_dashboard(&totals, manager.plan(), progress.as_ref());
    display_log(&manager.today_entries());

    Ok(())
}

/// Run an interactive smart-planner session.
fn cmd_plan(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);
    let state = load_state(path)?;
    let mut manager = TrackerStateManager::new(state);

    let seed = manager.defaults().cloned().unwrap_or_default();
    let inputs = collect_planner_inputs(seed)?;
    let d = &inputs.defaults;

    // Imperial prompts, metric planner.
    let height_cm = units::feet_inches_to_cm(d.height_ft, d.height_in);
    let weight_kg = units::lb_to_kg(d.weight_lb);

    let profile = UserProfile::new(height_cm, weight_kg, d.age, d.sex, d.activity)?;
    let options = PlannerOptions {
        goal: d.goal,
        daily_calorie_delta: units::daily_calorie_delta(d.goal, d.rate_lb_per_week),
        protein_g_per_kg: inputs.protein_g_per_lb.map(units::per_lb_to_per_kg),
        fat_g_per_kg: inputs.fat_g_per_lb.map(units::per_lb_to_per_kg),
    };

    let plan = make_plan(&profile, &options);
    display_plan(&plan);

    // Remember the inputs even if the plan is discarded.
    manager.set_defaults(inputs.defaults.clone());

    if prompt_yes_no("Apply this plan as your daily targets?", true)? {
        manager.set_plan(MacroPlan::from_computed(&plan));
        println!("Targets updated.");
    }

    save_state(path, manager.state())?;
    Ok(())
}

/// Set daily targets manually, deriving calories from the grams.
fn cmd_targets(
    file_path: &str,
    protein: Option<f64>,
    carbs: Option<f64>,
    fat: Option<f64>,
) -> Result<()> {
    let path = Path::new(file_path);
    let state = load_state(path)?;
    let mut manager = TrackerStateManager::new(state);

    let (protein, carbs, fat) = match (protein, carbs, fat) {
        (Some(p), Some(c), Some(f)) => (p, c, f),
        _ => prompt_targets(manager.plan())?,
    };

    let plan = MacroPlan::from_grams(protein, carbs, fat);
    println!(
        "Targets: P {:.0} / C {:.0} / F {:.0} - {:.0} kcal",
        plan.protein_target, plan.carb_target, plan.fat_target, plan.calorie_target
    );

    manager.set_plan(plan);
    save_state(path, manager.state())?;
    Ok(())
}

/// Log a food entry, or undo the most recent one.
fn cmd_log(file_path: &str, undo: bool) -> Result<()> {
    let path = Path::new(file_path);
    let state = load_state(path)?;
    let mut manager = TrackerStateManager::new(state);

    if undo {
        match manager.undo_last_entry() {
            Some(entry) => {
                println!("Removed {} ({:.0} kcal).", entry.name, entry.calories);
                save_state(path, manager.state())?;
            }
            None => println!("Nothing to undo."),
        }
        return Ok(());
    }

    let (name, protein, carbs, fat) = {
        let recent = manager.recent_unique_entries();
        prompt_food_entry(&recent)?
    };

    let entry = FoodEntry::new(name, protein, carbs, fat, Local::now());
    println!("Logged {} ({:.0} kcal).", entry.name, entry.calories);
    manager.add_entry(entry);

    let totals = manager.today_totals();
    if let Some(plan) = manager.plan() {
        println!(
            "Today: {:.0} / {:.0} kcal",
            totals.calories, plan.calorie_target
        );
    }

    save_state(path, manager.state())?;
    Ok(())
}

/// Export the full food log as CSV.
fn cmd_export(file_path: &str, output: &str) -> Result<()> {
    let state = load_state(Path::new(file_path))?;
    let manager = TrackerStateManager::new(state);

    if manager.entries().is_empty() {
        println!("Nothing to export.");
        return Ok(());
    }

    let mut wtr = csv::Writer::from_path(output)?;
    wtr.write_record(["date", "time", "name", "protein_g", "carbs_g", "fat_g", "calories"])?;

    for entry in manager.entries() {
        wtr.write_record([
            entry.logged_at.format("%Y-%m-%d").to_string(),
            entry.logged_at.format("%H:%M").to_string(),
            entry.name.clone(),
            format!("{:.1}", entry.protein),
            format!("{:.1}", entry.carbs),
            format!("{:.1}", entry.fat),
            format!("{:.0}", entry.calories),
        ])?;
    }

    wtr.flush()?;
    println!("Exported {} entries to {}", manager.entry_count(), output);

    Ok(())
}

/// Reset various state values.
fn cmd_reset(file_path: &str, log: bool, plan: bool, defaults: bool) -> Result<()> {
    if !log && !plan && !defaults {
        println!("Please specify at least one reset option:");
        println!("  --log      Clear the food log");
        println!("  --plan     Clear the current targets");
        println!("  --defaults Forget the saved planner inputs");
        return Ok(());
    }

    let path = Path::new(file_path);
    let state = load_state(path)?;
    let mut manager = TrackerStateManager::new(state);

    if log {
        manager.reset_log();
        println!("Cleared the food log.");
    }

    if plan {
        manager.clear_plan();
        println!("Cleared the current targets.");
    }

    if defaults {
        manager.clear_defaults();
        println!("Cleared the saved planner inputs.");
    }

    save_state(path, manager.state())?;
    println!("Tracker state saved.");

    Ok(())
}
