pub mod config;
pub mod error;
pub mod types;

pub use config::{EngineConfig, WeaponProfile};
pub use error::{EngineError, Result};
pub use types::{AgentId, Seconds, Vec2};
