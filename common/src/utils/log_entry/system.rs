use thiserror::Error;
use toml::de::Error as TomlError;

#[derive(Error, Debug)]
pub enum SystemEntry {
    #[error("Online now")]
    Online,
    #[error("Invalid configuration")]
    InvalidConfig,
    #[error("Configuration not found")]
    ConfigNotFound,
    #[error("Unable to parse configuration: {0}")]
    ConfigParseError(TomlError),
    #[error("Allowed user must not be empty")]
    EmptyAllowedUser,
    #[error("Allowed user must not carry surrounding whitespace")]
    PaddedAllowedUser,
}

impl From<SystemEntry> for String {
    #[inline(always)]
    fn from(value: SystemEntry) -> Self {
        value.to_string()
    }
}
