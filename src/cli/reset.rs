//! Reset command implementation

use std::path::Path;

use anyhow::Result;

use piggy::store::StateStore;

/// Delete all progress. The next command starts from defaults.
///
/// This is also the recovery path for a corrupt state file, so it never
/// tries to read the existing contents.
pub fn reset_command(data_dir: &Path, force: bool) -> Result<()> {
    if !force {
        eprintln!("This deletes all progress. Re-run with --force to confirm.");
        return Ok(());
    }

    let store = StateStore::new(data_dir);
    store.remove()?;
    println!("Progress reset.");

    Ok(())
}
