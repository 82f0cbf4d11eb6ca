//! Config commands

use super::CommandResult;
use crate::config::Config;
use crate::ConfigCommands;

pub async fn handle(action: ConfigCommands, profile: Option<&str>) -> CommandResult {
    match action {
        ConfigCommands::Init => {
            let path = Config::default().save(profile).map_err(|e| e.to_string())?;
            println!("Configuration initialized at {}", path.display());
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load(profile).unwrap_or_default();
            config.set(&key, value).map_err(|e| e.to_string())?;
            config.save(profile).map_err(|e| e.to_string())?;
            println!("Set {} successfully", key);
        }
        ConfigCommands::Get { key } => {
            let config = Config::load(profile).unwrap_or_default();
            let value = config.get(&key).map_err(|e| e.to_string())?;
            println!("{}: {}", key, value.unwrap_or_else(|| "(not set)".into()));
        }
        ConfigCommands::List => {
            let config = Config::load(profile).unwrap_or_default();
            for key in Config::KEYS {
                let value = config.get(key).ok().flatten();
                println!("{}: {}", key, value.unwrap_or_else(|| "(not set)".into()));
            }
        }
    }
    Ok(())
}
