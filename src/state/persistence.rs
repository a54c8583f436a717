use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::state::manager::TrackerState;

/// Load tracker state from a JSON file.
///
/// A missing file is a fresh start, not an error.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<TrackerState> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(TrackerState::default());
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save tracker state to a JSON file.
pub fn save_state<P: AsRef<Path>>(path: P, state: &TrackerState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}
