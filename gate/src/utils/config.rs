use crate::utils::logging::*;
use crate::utils::static_files::StaticFiles;
use lazy_static::lazy_static;
use serde::Deserialize;

lazy_static! {
    static ref CONFIG: Config = Config::new();
}

#[derive(Debug, Deserialize)]
struct ConfigTable {
    #[serde(rename = "Config")]
    config: Config,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub allowed_user: String,
    pub console_level: LogLevel,
}

impl Config {
    fn new() -> Self {
        //Embedded at build time, nothing to fall back on.
        let toml_string = match StaticFiles::get("gate.toml") {
            Some(file) => String::from_utf8_lossy(&file.data).into_owned(),
            None => {
                logging_console!(emergency_entry!("Config", SystemEntry::ConfigNotFound));
                panic!("Configuration not found");
            }
        };
        match Self::parse(&toml_string) {
            Ok(config) => config,
            Err(err) => {
                logging_console!(emergency_entry!("Config", SystemEntry::InvalidConfig, format!("Err: {err}")));
                panic!("Invalid configuration");
            }
        }
    }

    pub fn now() -> &'static Config {
        &CONFIG
    }

    pub fn parse(toml_string: &str) -> Result<Config, SystemEntry> {
        let config_table = toml::from_str::<ConfigTable>(toml_string).map_err(SystemEntry::ConfigParseError)?;
        let config = config_table.config;
        Self::validate(&config)?;
        Ok(config)
    }

    pub fn validate(config: &Config) -> Result<(), SystemEntry> {
        Self::validate_user(&config.allowed_user)
    }

    fn validate_user(user: &str) -> Result<(), SystemEntry> {
        if user.is_empty() {
            return Err(SystemEntry::EmptyAllowedUser);
        }
        if user.trim() != user {
            return Err(SystemEntry::PaddedAllowedUser);
        }
        Ok(())
    }
}
