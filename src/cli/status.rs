//! Status command implementation

use std::path::Path;

use anyhow::Result;

use piggy::config::Config;
use piggy::render;
use piggy::store::StateStore;

/// Show goal progress, level, XP, and the achievement count
pub fn status_command(data_dir: &Path, config: &Config) -> Result<()> {
    let store = StateStore::new(data_dir);
    let state = store.load_or_default()?;

    render::render_status(&state, &config.settings);
    Ok(())
}
