//! Goal command implementation

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use piggy::config::Config;
use piggy::domain::Event;
use piggy::render;
use piggy::rewards::{self, Moment};
use piggy::store::StateStore;

use super::{parse_positive_amount, run_effects};

/// Show the current goal, or replace it when an amount is given
pub fn goal_command(data_dir: &Path, config: &Config, raw_amount: Option<&str>) -> Result<()> {
    let store = StateStore::new(data_dir);
    let mut state = store.load_or_default()?;

    let Some(raw) = raw_amount else {
        println!("Current goal: {}", render::format_amount(state.goal));
        return Ok(());
    };

    let Some(goal) = parse_positive_amount(raw) else {
        debug!("Ignoring invalid goal amount: {:?}", raw);
        return Ok(());
    };

    let effects = rewards::apply(&mut state, Event::SetGoal { goal }, &Moment::now());
    run_effects(&effects, &state, &store, config)
}
