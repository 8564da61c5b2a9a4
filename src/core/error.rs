use thiserror::Error;

#[derive(Error, Debug)]
pub enum SproutError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown climate: {0}")]
    UnknownClimate(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SproutError>;
