use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown weapon kind: {0}")]
    UnknownWeapon(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
