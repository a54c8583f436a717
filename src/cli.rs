use clap::{Parser, Subcommand};

/// MacroPal — a macro tracking CLI that plans daily targets and logs food.
#[derive(Parser, Debug)]
#[command(name = "macro_pal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the tracker state JSON file.
    #[arg(short, long, default_value = "tracker_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show today's totals and progress toward your targets.
    Today,

    /// Compute calorie/macro targets from your stats (interactive).
    Plan,

    /// Set daily targets manually; calories derive from the grams.
    Targets {
        /// Protein target in grams.
        #[arg(long)]
        protein: Option<f64>,

        /// Carb target in grams.
        #[arg(long)]
        carbs: Option<f64>,

        /// Fat target in grams.
        #[arg(long)]
        fat: Option<f64>,
    },

    /// Log a food entry (interactive).
    Log {
        /// Remove the most recently logged entry instead.
        #[arg(long)]
        undo: bool,
    },

    /// Export the full food log as CSV.
    Export {
        /// Output CSV path.
        #[arg(short, long, default_value = "food_log.csv")]
        output: String,
    },

    /// Reset parts of the tracker state.
    Reset {
        /// Clear the food log.
        #[arg(long)]
        log: bool,

        /// Clear the current targets.
        #[arg(long)]
        plan: bool,

        /// Forget the saved planner inputs.
        #[arg(long)]
        defaults: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Today
    }
}
