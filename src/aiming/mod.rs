pub mod accuracy;
pub mod controller;

pub use controller::{AimOutcome, HoldReason, WeaponSystem};
