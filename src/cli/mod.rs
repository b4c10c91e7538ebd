//! CLI command implementations

pub mod achievements;
pub mod deposit;
pub mod goal;
pub mod init;
pub mod reset;
pub mod status;

use std::path::{Path, PathBuf};

use anyhow::Result;

use piggy::config::Config;
use piggy::domain::{Effect, ProgressState};
use piggy::render;
use piggy::store::StateStore;

/// Load the config, honoring an explicit --config path
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
}

/// Resolve the state directory: --data-dir beats config, config beats ~/.piggy
pub fn resolve_data_dir(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.unwrap_or_else(|| config.data_dir())
}

/// Parse a user-supplied dollar amount.
///
/// Returns None for anything that is not a positive finite number. Bad
/// input is ignored rather than reported, so callers just return early.
pub fn parse_positive_amount(raw: &str) -> Option<f64> {
    let amount: f64 = raw.trim().parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

/// Run the effects returned by the engine, in order
pub fn run_effects(
    effects: &[Effect],
    state: &ProgressState,
    store: &StateStore,
    config: &Config,
) -> Result<()> {
    for effect in effects {
        match effect {
            Effect::UnlockAnimation(id) => {
                if config.settings.celebrations {
                    render::render_unlock(*id);
                }
            }
            Effect::LevelUpAnimation { level } => {
                if config.settings.celebrations {
                    render::render_level_up(*level);
                }
            }
            Effect::Persist => store.save(state)?,
            Effect::Render => render::render_status(state, &config.settings),
        }
    }
    Ok(())
}
