//! Configuration management CLI commands.
//!
//! Provides `config get`, `config set`, `config list`, `config path` and
//! `config init` for viewing and modifying configuration settings from the
//! command line.

use clap::Subcommand;
use powderpath::config::{config_file_path, ConfigFile, ConfigKey};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key in format section.key (e.g., sweep.step)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key in format section.key (e.g., sweep.step)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,

    /// Create the configuration file with defaults if it does not exist
    Init,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => run_get(&key),
        ConfigCommands::Set { key, value } => run_set(&key, &value),
        ConfigCommands::List => run_list(),
        ConfigCommands::Path => run_path(),
        ConfigCommands::Init => run_init(),
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Use 'powderpath config list' to see available keys.",
            key
        ))
    })
}

/// Get a configuration value.
fn run_get(key: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;
    let config = ConfigFile::load()?;
    let value = config_key.get(&config);

    if value.is_empty() {
        println!("(not set)");
    } else {
        println!("{}", value);
    }

    Ok(())
}

/// Set a configuration value.
fn run_set(key: &str, value: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;
    let mut config = ConfigFile::load()?;
    config_key.set(&mut config, value)?;
    config.save()?;

    println!("Set {} = {}", config_key.name(), config_key.get(&config));

    Ok(())
}

/// List all configuration settings.
fn run_list() -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    print!("{}", format_listing(&config));
    Ok(())
}

/// Renders every key grouped by section.
fn format_listing(config: &ConfigFile) -> String {
    let mut out = String::from("Configuration Settings\n======================\n");
    let mut current_section = "";

    for key in ConfigKey::all() {
        let section = key.section();

        // Print section header when section changes
        if section != current_section {
            out.push_str(&format!("\n[{}]\n", section));
            current_section = section;
        }

        let value = key.get(config);
        let shown = if value.is_empty() {
            "(not set)"
        } else if *key == ConfigKey::MapboxAccessToken {
            "(set)"
        } else {
            value.as_str()
        };
        out.push_str(&format!("  {} = {}\n", key.key_name(), shown));
    }

    out
}

/// Show the configuration file path.
fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}

/// Create the default configuration file.
fn run_init() -> Result<(), CliError> {
    let existed = config_file_path().exists();
    let path = ConfigFile::ensure_exists()?;

    if existed {
        println!("Configuration already exists at {}", path.display());
    } else {
        println!("Created configuration at {}", path.display());
        println!("Set your Mapbox token with: powderpath config set mapbox.access_token <token>");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_unknown() {
        let err = parse_key("cache.directory").unwrap_err();
        assert!(err.to_string().contains("powderpath config list"));
    }

    #[test]
    fn test_listing_groups_sections() {
        let listing = format_listing(&ConfigFile::default());

        assert!(listing.contains("\n[mapbox]\n  access_token = (not set)\n"));
        assert!(listing.contains("\n[sweep]\n  bbox = 6.568,45.296,6.585,45.305\n"));
        assert!(listing.contains("\n[server]\n  host = 0.0.0.0\n  port = 5001\n"));
    }

    #[test]
    fn test_listing_hides_token() {
        let mut config = ConfigFile::default();
        config.mapbox.access_token = Some("pk.secret".to_string());

        let listing = format_listing(&config);
        assert!(listing.contains("access_token = (set)"));
        assert!(!listing.contains("pk.secret"));
    }
}
