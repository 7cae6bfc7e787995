use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProgressionError {
    #[error("Quest not found: {0}")]
    QuestNotFound(String),

    #[error("Invalid quantity for quest {quest}: {quantity}")]
    InvalidQuantity { quest: String, quantity: f64 },

    #[error("Quest {0} needs a quantity")]
    MissingQuantity(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProgressionError>;
