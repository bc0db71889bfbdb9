//! Weapon entities
//!
//! Each weapon owns its ammo count, its rate-of-fire gate and an embedded
//! fuzzy module that scores the weapon's desirability from distance to
//! target and remaining ammo. Weapon kinds are a closed enum; behavior
//! differences dispatch on the tag rather than through inheritance.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::agent::{CombatMessenger, ShotFired, SoundEmitted};
use crate::armory::desirability::{self, VAR_AMMO, VAR_DESIRABILITY, VAR_DISTANCE};
use crate::core::config::EngineConfig;
use crate::core::error::EngineError;
use crate::core::types::{AgentId, Seconds, Vec2};
use crate::fuzzy::FuzzyModule;

/// The closed set of weapon kinds
///
/// Declaration order is the deterministic iteration order everywhere the
/// armory walks all kinds, which makes weapon-selection tie-breaks stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Blaster,
    Shotgun,
    RailGun,
    RocketLauncher,
    GrenadeLauncher,
    Knife,
}

/// How the aiming controller leads the target for this weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AimMode {
    /// Hitscan: aim at the target's current position
    Direct,
    /// Finite projectile speed: aim where the target will be
    Predictive,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 6] = [
        WeaponKind::Blaster,
        WeaponKind::Shotgun,
        WeaponKind::RailGun,
        WeaponKind::RocketLauncher,
        WeaponKind::GrenadeLauncher,
        WeaponKind::Knife,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Blaster => "blaster",
            Self::Shotgun => "shotgun",
            Self::RailGun => "rail_gun",
            Self::RocketLauncher => "rocket_launcher",
            Self::GrenadeLauncher => "grenade_launcher",
            Self::Knife => "knife",
        }
    }

    /// Whether this kind's projectile travels slowly enough to need
    /// predictive aiming
    ///
    /// Decided by projectile physics: bolts, rockets, grenades and thrown
    /// knives all travel, so their aim point must lead the target. The
    /// shotgun blast and rail slug resolve instantly.
    pub fn aim_mode(&self) -> AimMode {
        match self {
            Self::Blaster | Self::RocketLauncher | Self::GrenadeLauncher | Self::Knife => {
                AimMode::Predictive
            }
            Self::Shotgun | Self::RailGun => AimMode::Direct,
        }
    }

    /// Whether firing depletes the magazine (the blaster's charge is
    /// effectively unlimited)
    pub fn consumes_ammo(&self) -> bool {
        !matches!(self, Self::Blaster)
    }
}

impl FromStr for WeaponKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeaponKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| EngineError::UnknownWeapon(s.to_string()))
    }
}

/// One weapon in an agent's inventory
#[derive(Debug, Clone)]
pub struct Weapon {
    kind: WeaponKind,
    /// Non-owning back-reference to the carrying agent
    owner: AgentId,
    rounds: u32,
    max_rounds: u32,
    fire_interval: f32,
    /// Earliest simulation time the next shot may leave the barrel
    next_available: Seconds,
    max_projectile_speed: f32,
    damage: u32,
    sound_range: f32,
    desirability: FuzzyModule,
    last_desirability: f32,
}

impl Weapon {
    pub fn new(kind: WeaponKind, owner: AgentId, config: &EngineConfig) -> Self {
        let profile = config.profile(kind);
        Self {
            kind,
            owner,
            rounds: profile.default_rounds,
            max_rounds: profile.max_rounds,
            fire_interval: profile.fire_interval(),
            next_available: 0.0,
            max_projectile_speed: profile.max_projectile_speed,
            damage: profile.damage,
            sound_range: profile.sound_range,
            desirability: desirability::desirability_module(kind),
            last_desirability: 0.0,
        }
    }

    pub fn kind(&self) -> WeaponKind {
        self.kind
    }

    pub fn rounds_remaining(&self) -> u32 {
        self.rounds
    }

    pub fn max_projectile_speed(&self) -> f32 {
        self.max_projectile_speed
    }

    /// Top up ammo from a pickup, clamped at the carry cap
    pub fn increment_rounds(&mut self, rounds: u32) {
        self.rounds = (self.rounds + rounds).min(self.max_rounds);
    }

    /// True once the rate-of-fire gate has reopened
    pub fn is_ready(&self, now: Seconds) -> bool {
        now >= self.next_available
    }

    /// Fuzzy desirability of wielding this weapon at the given distance,
    /// 0-100
    ///
    /// Purely advisory: no effect on ammo or cooldown. An empty magazine
    /// short-circuits to 0 so an empty weapon is never selected over one
    /// with ammo.
    pub fn desirability(&mut self, dist_to_target: f32) -> f32 {
        if self.kind.consumes_ammo() && self.rounds == 0 {
            self.last_desirability = 0.0;
        } else {
            self.desirability.fuzzify(VAR_DISTANCE, dist_to_target);
            if self.kind.consumes_ammo() {
                self.desirability.fuzzify(VAR_AMMO, self.rounds as f32);
            }
            self.last_desirability = self.desirability.defuzzify(VAR_DESIRABILITY);
        }

        self.last_desirability
    }

    /// Score from the most recent desirability evaluation
    pub fn last_desirability(&self) -> f32 {
        self.last_desirability
    }

    /// Discharge a round at `target`, gated on ammo and rate of fire
    ///
    /// On success the projectile and sound payloads are handed to the
    /// messenger and true is returned. A gated shot is a silent no-op.
    pub fn shoot_at(
        &mut self,
        origin: Vec2,
        target: Vec2,
        now: Seconds,
        messenger: &mut dyn CombatMessenger,
    ) -> bool {
        if self.rounds == 0 || !self.is_ready(now) {
            return false;
        }

        if self.kind.consumes_ammo() {
            self.rounds -= 1;
        }
        self.next_available = now + f64::from(self.fire_interval);

        messenger.projectile_fired(ShotFired {
            shooter: self.owner,
            weapon: self.kind,
            origin,
            target,
            damage: self.damage,
        });
        messenger.sound_emitted(SoundEmitted {
            source: self.owner,
            position: origin,
            range: self.sound_range,
        });

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingMessenger {
        shots: Vec<ShotFired>,
        sounds: Vec<SoundEmitted>,
    }

    impl RecordingMessenger {
        fn new() -> Self {
            Self {
                shots: Vec::new(),
                sounds: Vec::new(),
            }
        }
    }

    impl CombatMessenger for RecordingMessenger {
        fn projectile_fired(&mut self, shot: ShotFired) {
            self.shots.push(shot);
        }

        fn sound_emitted(&mut self, sound: SoundEmitted) {
            self.sounds.push(sound);
        }
    }

    fn rocket_launcher() -> Weapon {
        Weapon::new(
            WeaponKind::RocketLauncher,
            AgentId::new(),
            &EngineConfig::default(),
        )
    }

    #[test]
    fn test_kind_name_round_trip() {
        for kind in WeaponKind::ALL {
            assert_eq!(kind.name().parse::<WeaponKind>().unwrap(), kind);
        }
        assert!("bazooka".parse::<WeaponKind>().is_err());
    }

    #[test]
    fn test_empty_weapon_has_zero_desirability() {
        let mut weapon = rocket_launcher();
        weapon.rounds = 0;
        assert_eq!(weapon.desirability(150.0), 0.0);
        assert_eq!(weapon.desirability(5.0), 0.0);
        assert_eq!(weapon.desirability(900.0), 0.0);
    }

    #[test]
    fn test_desirability_cached() {
        let mut weapon = rocket_launcher();
        let score = weapon.desirability(150.0);
        assert!(score > 0.0);
        assert_eq!(weapon.last_desirability(), score);
    }

    #[test]
    fn test_increment_rounds_clamps_at_cap() {
        let config = EngineConfig::default();
        let mut weapon = Weapon::new(WeaponKind::RocketLauncher, AgentId::new(), &config);
        weapon.increment_rounds(config.rocket_launcher.max_rounds * 2);
        assert_eq!(weapon.rounds_remaining(), config.rocket_launcher.max_rounds);
    }

    #[test]
    fn test_shoot_consumes_ammo_and_dispatches() {
        let mut weapon = rocket_launcher();
        let mut messenger = RecordingMessenger::new();
        let before = weapon.rounds_remaining();

        let fired = weapon.shoot_at(Vec2::ZERO, Vec2::new(100.0, 0.0), 1.0, &mut messenger);

        assert!(fired);
        assert_eq!(weapon.rounds_remaining(), before - 1);
        assert_eq!(messenger.shots.len(), 1);
        assert_eq!(messenger.sounds.len(), 1);
        assert_eq!(messenger.shots[0].damage, EngineConfig::default().rocket_launcher.damage);
        assert_eq!(
            messenger.sounds[0].range,
            EngineConfig::default().rocket_launcher.sound_range
        );
    }

    #[test]
    fn test_fire_rate_gate() {
        let mut weapon = rocket_launcher();
        let mut messenger = RecordingMessenger::new();
        let interval = f64::from(EngineConfig::default().rocket_launcher.fire_interval());

        assert!(weapon.shoot_at(Vec2::ZERO, Vec2::X, 10.0, &mut messenger));
        // Within the firing interval: gated
        assert!(!weapon.shoot_at(Vec2::ZERO, Vec2::X, 10.0 + interval * 0.5, &mut messenger));
        // After the interval: gate reopens
        assert!(weapon.shoot_at(Vec2::ZERO, Vec2::X, 10.0 + interval, &mut messenger));
        assert_eq!(messenger.shots.len(), 2);
    }

    #[test]
    fn test_blaster_never_runs_dry() {
        let mut blaster = Weapon::new(WeaponKind::Blaster, AgentId::new(), &EngineConfig::default());
        let mut messenger = RecordingMessenger::new();
        let mut now = 0.0;
        for _ in 0..50 {
            assert!(blaster.shoot_at(Vec2::ZERO, Vec2::X, now, &mut messenger));
            now += 1.0;
        }
        assert!(blaster.rounds_remaining() > 0);
        assert!(blaster.desirability(50.0) > 0.0);
    }
}
