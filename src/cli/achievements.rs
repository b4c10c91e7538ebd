//! Achievements command implementation

use std::path::Path;

use anyhow::Result;

use piggy::render;
use piggy::store::StateStore;

/// List every achievement, locked ones included
pub fn achievements_command(data_dir: &Path) -> Result<()> {
    let store = StateStore::new(data_dir);
    let state = store.load_or_default()?;

    render::render_achievements(&state);
    Ok(())
}
