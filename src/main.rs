//! Scripted skirmish demo
//!
//! Drives one agent through a few seconds of decision ticks against a
//! scripted target so the engine's choices can be watched through tracing
//! output: weapon swaps as the target closes in, held fire while rotating,
//! shots once every gate opens.

use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use gunhand::agent::{
    AgentState, CombatMessenger, ShotFired, SoundEmitted, SteeringProvider, TargetSensor,
    WorldGeometry,
};
use gunhand::aiming::WeaponSystem;
use gunhand::armory::WeaponKind;
use gunhand::core::config::EngineConfig;
use gunhand::core::types::{AgentId, Vec2};

/// Scripted target: runs a straight strafing line, always visible
struct ScriptedTarget {
    position: Vec2,
    velocity: Vec2,
    time_visible: f32,
}

impl TargetSensor for ScriptedTarget {
    fn is_target_present(&self) -> bool {
        true
    }

    fn is_target_shootable(&self) -> bool {
        true
    }

    fn time_out_of_view(&self) -> f32 {
        0.0
    }

    fn time_visible(&self) -> f32 {
        self.time_visible
    }

    fn target_position(&self) -> Vec2 {
        self.position
    }

    fn target_velocity(&self) -> Vec2 {
        self.velocity
    }

    fn target_max_speed(&self) -> f32 {
        15.0
    }
}

/// Steering that takes one tick to swing onto a new aim point
struct LaggySteering {
    last_point: Option<Vec2>,
}

impl SteeringProvider for LaggySteering {
    fn rotate_facing_toward(&mut self, point: Vec2) -> bool {
        let aligned = self
            .last_point
            .is_some_and(|last| last.distance(point) < 50.0);
        self.last_point = Some(point);
        aligned
    }
}

/// Open arena
struct OpenArena;

impl WorldGeometry for OpenArena {
    fn has_line_of_sight(&self, _from: Vec2, _to: Vec2) -> bool {
        true
    }
}

/// Logs every payload instead of delivering it
struct LoggingMessenger;

impl CombatMessenger for LoggingMessenger {
    fn projectile_fired(&mut self, shot: ShotFired) {
        tracing::info!(
            weapon = shot.weapon.name(),
            target = ?shot.target,
            damage = shot.damage,
            "projectile fired"
        );
    }

    fn sound_emitted(&mut self, sound: SoundEmitted) {
        tracing::info!(range = sound.range, "shot heard");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let config = EngineConfig::default();
    config.validate().expect("default config is consistent");

    let agent = AgentState {
        id: AgentId::new(),
        position: Vec2::ZERO,
        heading: Vec2::X,
    };

    let mut system = WeaponSystem::new(agent.id, &config);
    system.inventory_mut().add_weapon(WeaponKind::Shotgun, &config);
    system
        .inventory_mut()
        .add_weapon(WeaponKind::RocketLauncher, &config);

    // Target strafes across the arena while closing in
    let mut target = ScriptedTarget {
        position: Vec2::new(400.0, 50.0),
        velocity: Vec2::new(-12.0, 2.0),
        time_visible: 0.0,
    };

    let mut steering = LaggySteering { last_point: None };
    let arena = OpenArena;
    let mut messenger = LoggingMessenger;
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);

    let dt = 0.25;
    for tick in 0..120 {
        let now = f64::from(dt) * f64::from(tick);

        let wielded = system.select_weapon(&agent, &target);
        let outcome = system.take_aim_and_shoot(
            &agent,
            &target,
            &mut steering,
            &arena,
            &mut messenger,
            &mut rng,
            now,
        );
        tracing::debug!(tick, wielded = wielded.name(), ?outcome, "decision tick");

        target.position += target.velocity * dt;
        target.time_visible += dt;
        if target.position.x < 20.0 {
            target.velocity = Vec2::ZERO;
        }
    }
}
