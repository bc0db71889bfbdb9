//! Gunhand - fuzzy-logic combat decision engine for autonomous agents

pub mod agent;
pub mod aiming;
pub mod armory;
pub mod core;
pub mod fuzzy;
