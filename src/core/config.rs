//! Engine configuration with documented constants
//!
//! All tuning numbers the decision engine consumes are collected here.
//! The struct is built once (from defaults or an external settings source)
//! and passed by reference into each component's constructor.

use crate::armory::WeaponKind;
use crate::core::error::{EngineError, Result};

/// Static tuning data for one weapon kind
///
/// These mirror the per-weapon constants the simulation's settings source
/// supplies: ammo capacity, rate of fire, projectile physics and the
/// payload numbers handed to the messaging collaborator on discharge.
#[derive(Debug, Clone)]
pub struct WeaponProfile {
    /// Rounds loaded when the weapon is first acquired
    pub default_rounds: u32,

    /// Hard cap on carried rounds; pickups top up to this and no further
    pub max_rounds: u32,

    /// Shots per second the weapon can sustain
    pub firing_freq: f32,

    /// Distance at which this weapon performs best (world units)
    pub ideal_range: f32,

    /// Speed of the projectile this weapon launches (world units/sec)
    ///
    /// Drives the predictive-aim lookahead. Hitscan weapons still carry a
    /// nominal value but are aimed directly, so it never enters the math.
    pub max_projectile_speed: f32,

    /// Damage inflicted per round, reported in the hit payload
    pub damage: u32,

    /// Radius within which other agents hear the shot
    pub sound_range: f32,
}

impl WeaponProfile {
    /// Seconds between shots (`1 / firing_freq`)
    pub fn fire_interval(&self) -> f32 {
        1.0 / self.firing_freq
    }
}

/// Configuration for the combat decision engine
///
/// Values are tuned against an arena roughly 1000 world units across,
/// matching the membership-function breakpoints baked into the per-weapon
/// desirability tables.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    // === AIMING ===
    /// Seconds a target must be continuously visible before the agent is
    /// allowed to fire at it
    ///
    /// Models human-like reaction delay. Lower = deadlier agents.
    pub reaction_time: f32,

    /// Upper bound on the angular aim error injected per shot (radians)
    ///
    /// The actual deviation per shot is this bound scaled by the fuzzy
    /// shot-accuracy score, so it is reached only for the worst shots.
    pub aim_accuracy: f32,

    /// Seconds the agent keeps tracking a target after losing sight of it
    ///
    /// Without this, a target dodging briefly behind cover would instantly
    /// reset the agent's aim.
    pub aim_persistence: f32,

    // === ARMORY ===
    pub blaster: WeaponProfile,
    pub shotgun: WeaponProfile,
    pub rail_gun: WeaponProfile,
    pub rocket_launcher: WeaponProfile,
    pub grenade_launcher: WeaponProfile,
    pub knife: WeaponProfile,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reaction_time: 0.2,
            aim_accuracy: 0.04,
            aim_persistence: 1.0,

            blaster: WeaponProfile {
                default_rounds: 1,
                max_rounds: 1,
                firing_freq: 3.0,
                ideal_range: 50.0,
                max_projectile_speed: 25.0,
                damage: 1,
                sound_range: 200.0,
            },
            shotgun: WeaponProfile {
                default_rounds: 15,
                max_rounds: 30,
                firing_freq: 1.0,
                ideal_range: 100.0,
                max_projectile_speed: 35.0,
                damage: 10,
                sound_range: 400.0,
            },
            rail_gun: WeaponProfile {
                default_rounds: 15,
                max_rounds: 30,
                firing_freq: 1.0,
                ideal_range: 200.0,
                max_projectile_speed: 200.0,
                damage: 10,
                sound_range: 400.0,
            },
            rocket_launcher: WeaponProfile {
                default_rounds: 15,
                max_rounds: 50,
                firing_freq: 1.5,
                ideal_range: 150.0,
                max_projectile_speed: 10.0,
                damage: 10,
                sound_range: 400.0,
            },
            grenade_launcher: WeaponProfile {
                default_rounds: 10,
                max_rounds: 40,
                firing_freq: 1.0,
                ideal_range: 250.0,
                max_projectile_speed: 8.0,
                damage: 15,
                sound_range: 400.0,
            },
            knife: WeaponProfile {
                default_rounds: 6,
                max_rounds: 12,
                firing_freq: 2.0,
                ideal_range: 30.0,
                max_projectile_speed: 20.0,
                damage: 5,
                sound_range: 50.0,
            },
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Tuning data for one weapon kind
    pub fn profile(&self, kind: WeaponKind) -> &WeaponProfile {
        match kind {
            WeaponKind::Blaster => &self.blaster,
            WeaponKind::Shotgun => &self.shotgun,
            WeaponKind::RailGun => &self.rail_gun,
            WeaponKind::RocketLauncher => &self.rocket_launcher,
            WeaponKind::GrenadeLauncher => &self.grenade_launcher,
            WeaponKind::Knife => &self.knife,
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.reaction_time < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "reaction_time ({}) must be >= 0",
                self.reaction_time
            )));
        }

        if self.aim_accuracy < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "aim_accuracy ({}) must be >= 0 radians",
                self.aim_accuracy
            )));
        }

        if self.aim_persistence < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "aim_persistence ({}) must be >= 0",
                self.aim_persistence
            )));
        }

        for kind in WeaponKind::ALL {
            let profile = self.profile(kind);

            if profile.firing_freq <= 0.0 {
                return Err(EngineError::InvalidConfig(format!(
                    "{}: firing_freq ({}) must be positive",
                    kind.name(),
                    profile.firing_freq
                )));
            }

            if profile.max_projectile_speed <= 0.0 {
                return Err(EngineError::InvalidConfig(format!(
                    "{}: max_projectile_speed ({}) must be positive",
                    kind.name(),
                    profile.max_projectile_speed
                )));
            }

            if profile.default_rounds > profile.max_rounds {
                return Err(EngineError::InvalidConfig(format!(
                    "{}: default_rounds ({}) exceeds max_rounds ({})",
                    kind.name(),
                    profile.default_rounds,
                    profile.max_rounds
                )));
            }
        }

        Ok(())
    }
}
