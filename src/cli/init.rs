//! Init command implementation

use std::path::PathBuf;

use anyhow::{Result, bail};

use piggy::config::Config;

/// Default configuration content for piggy init
pub const DEFAULT_CONFIG: &str = r#"# Piggy configuration
#
# Available options:
#   celebrations - Print unlock and level-up banners after a deposit (default: true)
#   bar_width    - Width of the progress bars, in characters (default: 40)
#   data_dir     - Override the directory holding state.json (default: ~/.piggy)

[settings]
celebrations = true
bar_width = 40
# data_dir = "/path/to/elsewhere"
"#;

/// Initialize a new Piggy configuration.
/// By default creates the global config at ~/.piggy/config.toml.
/// Use --config to choose a custom path.
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
