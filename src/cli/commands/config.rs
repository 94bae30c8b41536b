//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use crate::error::{HylleError, Result};

/// Run the config command.
pub fn run_config(action: &ConfigAction, settings: Settings) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let content = toml::to_string_pretty(&settings)
                .map_err(|e| HylleError::Config(e.to_string()))?;
            println!("{}", content);
        }
        ConfigAction::Path => {
            println!("{}", Settings::default_config_path().display());
        }
    }

    Ok(())
}
