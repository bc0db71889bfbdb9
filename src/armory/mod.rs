pub mod desirability;
pub mod inventory;
pub mod weapon;

pub use inventory::WeaponInventory;
pub use weapon::{AimMode, Weapon, WeaponKind};
