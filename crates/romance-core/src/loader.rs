//! JSON settings loader.
//!
//! # Format
//!
//! Any subset of [`RomanceSettings`] fields; missing fields take their
//! defaults.
//!
//! ```json
//! {
//!   "cheat_chance": 50,
//!   "kinds": [
//!     { "name": "human",
//!       "sexuality": { "asexual_chance": 5, "bisexual_chance": 25,
//!                      "gay_chance": 10, "straight_chance": 60 } }
//!   ]
//! }
//! ```
//!
//! Loading validates the result and logs every diagnostic; the diagnostics
//! are also returned so a host can show them in its own UI.

use std::io::Read;
use std::path::Path;

use crate::{Diagnostic, RomanceError, RomanceSettings};

/// Load and validate settings from a JSON file.
pub fn load_settings_json(path: &Path) -> Result<(RomanceSettings, Vec<Diagnostic>), RomanceError> {
    let file = std::fs::File::open(path)?;
    load_settings_reader(file)
}

/// Like [`load_settings_json`] but accepts any `Read` source.
pub fn load_settings_reader<R: Read>(
    reader: R,
) -> Result<(RomanceSettings, Vec<Diagnostic>), RomanceError> {
    let mut settings: RomanceSettings = serde_json::from_reader(reader)?;
    let diagnostics = settings.validate();
    for d in &diagnostics {
        d.log();
    }
    tracing::info!(
        kinds = settings.kinds.len(),
        diagnostics = diagnostics.len(),
        "romance settings loaded"
    );
    Ok((settings, diagnostics))
}
