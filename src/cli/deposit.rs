//! Deposit command implementation

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use piggy::config::Config;
use piggy::domain::Event;
use piggy::rewards::{self, Moment};
use piggy::store::StateStore;

use super::{parse_positive_amount, run_effects};

/// Add money toward the goal and run the unlock cascade
pub fn deposit_command(data_dir: &Path, config: &Config, raw_amount: &str) -> Result<()> {
    let Some(amount) = parse_positive_amount(raw_amount) else {
        // Invalid amounts are ignored, not reported
        debug!("Ignoring invalid deposit amount: {:?}", raw_amount);
        return Ok(());
    };

    let store = StateStore::new(data_dir);
    let mut state = store.load_or_default()?;

    let effects = rewards::apply(&mut state, Event::Deposit { amount }, &Moment::now());
    run_effects(&effects, &state, &store, config)
}
