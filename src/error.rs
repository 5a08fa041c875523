use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("column '{column}' holds a malformed list literal: {value}")]
    Decode { column: String, value: String },
}

pub type Result<T> = std::result::Result<T, TransformError>;
