use crate::config::Config;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load and parse configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<Config> {
    info!("Loading configuration from: {:?}", config_path);

    // Open the configuration file
    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open configuration '{}'", config_path.display()))?;

    // Parse the YAML content
    let config: Config = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse configuration '{}'", config_path.display()))?;

    info!(
        "Configuration declares {} players on {} topology ({} player setting(s), {})",
        config.player_count(),
        config.environment.topology,
        config.players.settings.len(),
        if config.players.settings_enabled { "enabled" } else { "disabled" }
    );

    // Validate the configuration
    config.validate()?;

    Ok(config)
}

/// CLI arguments that can override YAML settings
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub players: Option<usize>,
    pub topology: Option<String>,
    pub settings_enabled: Option<bool>,
}

/// Apply CLI overrides to a configuration
pub fn apply_overrides(config: &mut Config, overrides: &ConfigOverrides) -> Result<()> {
    if let Some(players) = overrides.players {
        info!("Overriding player count: {} -> {}", config.environment.unit, players);
        config.environment.unit = players;
    }

    if let Some(topology) = &overrides.topology {
        info!("Overriding topology: {} -> {}", config.environment.topology, topology);
        config.environment.topology = topology.clone();
    }

    if let Some(enabled) = overrides.settings_enabled {
        info!("Player settings {} from command line", if enabled { "enabled" } else { "disabled" });
        config.players.settings_enabled = enabled;
    }

    // Re-validate after applying overrides
    config.validate()?;

    Ok(())
}
