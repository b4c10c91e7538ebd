//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Print unlock and level-up banners after a deposit
    /// When false, deposits still earn achievements and XP but only the
    /// status summary is printed
    #[serde(default = "default_celebrations")]
    pub celebrations: bool,

    /// Width of the progress bars, in characters
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,

    /// Override the directory holding state.json
    /// Defaults to the config directory (~/.piggy)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_celebrations() -> bool {
    true
}

fn default_bar_width() -> usize {
    40
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            celebrations: default_celebrations(),
            bar_width: default_bar_width(),
            data_dir: None,
        }
    }
}
