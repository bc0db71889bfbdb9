//! Aiming controller
//!
//! Per decision tick: re-select the wielded weapon, compute an aim point
//! (direct or predicted ahead of the target), gate firing on rotation,
//! reaction time and line of sight, perturb the aim with fuzzy-scaled
//! noise, and delegate the shot to the wielded weapon.

use rand::Rng;

use crate::agent::{AgentState, CombatMessenger, SteeringProvider, TargetSensor, WorldGeometry};
use crate::aiming::accuracy::{
    accuracy_module, VAR_SHOT_DESIRABILITY, VAR_SHOT_DISTANCE, VAR_TARGET_SPEED_SQ,
    VAR_TIME_VISIBLE,
};
use crate::armory::{AimMode, WeaponInventory, WeaponKind};
use crate::core::config::EngineConfig;
use crate::core::types::{rotate_about, AgentId, Seconds, Vec2};
use crate::fuzzy::FuzzyModule;

/// Why the controller withheld fire this tick
///
/// Holding fire is ordinary behavior (still rotating to bear, still
/// reacting), never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldReason {
    /// Facing has not yet swung onto the aim point
    StillRotating,
    /// Target has not been visible longer than the reaction time
    ReactionTime,
    /// No clear line to the predicted aim point
    NoLineOfSight,
}

/// Result of one aim-and-shoot tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AimOutcome {
    /// No engageable target; facing realigned with the heading
    NoTarget,
    /// Target engaged but conditions to fire not yet met
    HeldFire(HoldReason),
    /// Trigger pulled at the (noise-perturbed) aim point
    Fired { aim_point: Vec2 },
}

/// Weapon selection and aiming for one agent
///
/// Owns the agent's inventory and the shared shot-accuracy rule base. All
/// world knowledge arrives through the collaborator traits each call.
#[derive(Debug)]
pub struct WeaponSystem {
    inventory: WeaponInventory,
    accuracy: FuzzyModule,
    reaction_time: f32,
    aim_accuracy: f32,
    aim_persistence: f32,
}

impl WeaponSystem {
    pub fn new(owner: AgentId, config: &EngineConfig) -> Self {
        Self {
            inventory: WeaponInventory::new(owner, config),
            accuracy: accuracy_module(config.reaction_time),
            reaction_time: config.reaction_time,
            aim_accuracy: config.aim_accuracy,
            aim_persistence: config.aim_persistence,
        }
    }

    pub fn inventory(&self) -> &WeaponInventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut WeaponInventory {
        &mut self.inventory
    }

    /// Re-evaluate which owned weapon to wield
    ///
    /// Desirability is only computed when a target is present; an
    /// untargeted agent falls back to the blaster without any inference.
    pub fn select_weapon(&mut self, agent: &AgentState, sensor: &impl TargetSensor) -> WeaponKind {
        let dist = sensor
            .is_target_present()
            .then(|| agent.position.distance(sensor.target_position()));
        self.inventory.select_weapon(dist)
    }

    /// Aim the wielded weapon and fire it if every gate passes
    #[allow(clippy::too_many_arguments)]
    pub fn take_aim_and_shoot(
        &mut self,
        agent: &AgentState,
        sensor: &impl TargetSensor,
        steering: &mut impl SteeringProvider,
        geometry: &impl WorldGeometry,
        messenger: &mut impl CombatMessenger,
        rng: &mut impl Rng,
        now: Seconds,
    ) -> AimOutcome {
        // Keep tracking a target that only very recently broke line of
        // sight (it may just have dodged behind cover)
        let engageable = sensor.is_target_shootable()
            || (sensor.is_target_present() && sensor.time_out_of_view() < self.aim_persistence);

        if !engageable {
            steering.rotate_facing_toward(agent.position + agent.heading);
            return AimOutcome::NoTarget;
        }

        let weapon = self.inventory.current();
        let aim_mode = weapon.kind().aim_mode();
        let projectile_speed = weapon.max_projectile_speed();

        let aim_point = match aim_mode {
            AimMode::Predictive => predict_future_position(agent.position, projectile_speed, sensor),
            AimMode::Direct => sensor.target_position(),
        };

        if !steering.rotate_facing_toward(aim_point) {
            return AimOutcome::HeldFire(HoldReason::StillRotating);
        }

        if sensor.time_visible() <= self.reaction_time {
            return AimOutcome::HeldFire(HoldReason::ReactionTime);
        }

        // A travel-time shot needs a clear line to where the projectile
        // will arrive, not just to where the target is now
        if aim_mode == AimMode::Predictive
            && !geometry.has_line_of_sight(agent.position, aim_point)
        {
            return AimOutcome::HeldFire(HoldReason::NoLineOfSight);
        }

        let aim_point = self.add_noise_to_aim(agent.position, aim_point, sensor, rng);
        let discharged =
            self.inventory
                .current_mut()
                .shoot_at(agent.position, aim_point, now, messenger);
        tracing::debug!(
            weapon = self.inventory.current_kind().name(),
            ?aim_point,
            discharged,
            "trigger pulled"
        );

        AimOutcome::Fired { aim_point }
    }

    /// Perturb the aim point by a fuzzy-scaled random rotation about the
    /// agent
    ///
    /// A second, independent inference pass over the shared accuracy
    /// module: favorable shots (close, slow, long-tracked) score high and
    /// the allowed deviation shrinks toward zero accordingly.
    fn add_noise_to_aim(
        &mut self,
        agent_pos: Vec2,
        aim_point: Vec2,
        sensor: &impl TargetSensor,
        rng: &mut impl Rng,
    ) -> Vec2 {
        self.accuracy
            .fuzzify(VAR_SHOT_DISTANCE, agent_pos.distance(aim_point));
        self.accuracy
            .fuzzify(VAR_TARGET_SPEED_SQ, sensor.target_velocity().length_squared());
        self.accuracy
            .fuzzify(VAR_TIME_VISIBLE, sensor.time_visible());

        let score = self.accuracy.defuzzify(VAR_SHOT_DESIRABILITY);
        let allowed_deviation = (1.0 - score / 100.0) * self.aim_accuracy;

        let angle = rng.gen_range(-allowed_deviation..=allowed_deviation);
        rotate_about(agent_pos, aim_point, angle)
    }
}

/// Predict where the target will be when the projectile arrives
///
/// Pursuit-style interception: lookahead time is the current separation
/// over the closing speed (projectile speed plus the target's top
/// speed), and the target is assumed to hold its current velocity.
pub fn predict_future_position(
    agent_pos: Vec2,
    projectile_speed: f32,
    sensor: &impl TargetSensor,
) -> Vec2 {
    let to_target = sensor.target_position() - agent_pos;
    let lookahead = to_target.length() / (projectile_speed + sensor.target_max_speed());
    sensor.target_position() + sensor.target_velocity() * lookahead
}
