//! Collaborator contracts the decision engine depends on
//!
//! The engine never moves agents, tests walls, or delivers messages itself.
//! Sensing, steering, world geometry and message dispatch stay behind these
//! traits; the simulation supplies real implementations and the test suites
//! supply scripted doubles.

use serde::{Deserialize, Serialize};

use crate::armory::WeaponKind;
use crate::core::types::{AgentId, Vec2};

/// Read-only snapshot of the deciding agent for one tick
#[derive(Debug, Clone, Copy)]
pub struct AgentState {
    pub id: AgentId,
    pub position: Vec2,
    /// Unit vector in the direction of movement
    pub heading: Vec2,
}

/// Target/sensory provider: what the agent currently knows about its target
///
/// Duration queries are only meaningful while a target is present; callers
/// check `is_target_present` first.
pub trait TargetSensor {
    fn is_target_present(&self) -> bool;
    /// Present, in range and not obscured by the target itself
    fn is_target_shootable(&self) -> bool;
    /// Seconds since the target was last visible
    fn time_out_of_view(&self) -> f32;
    /// Seconds the target has been continuously visible
    fn time_visible(&self) -> f32;
    fn target_position(&self) -> Vec2;
    fn target_velocity(&self) -> Vec2;
    fn target_max_speed(&self) -> f32;
}

/// Movement/steering provider
pub trait SteeringProvider {
    /// Rotate the agent's facing toward `point`; true once aligned within
    /// the steering subsystem's tolerance
    fn rotate_facing_toward(&mut self, point: Vec2) -> bool;
}

/// Geometry/world provider
pub trait WorldGeometry {
    fn has_line_of_sight(&self, from: Vec2, to: Vec2) -> bool;
}

/// Payload describing one discharged round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotFired {
    pub shooter: AgentId,
    pub weapon: WeaponKind,
    pub origin: Vec2,
    pub target: Vec2,
    pub damage: u32,
}

/// Payload describing the noise a shot makes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoundEmitted {
    pub source: AgentId,
    pub position: Vec2,
    pub range: f32,
}

/// Fire-and-forget message dispatch
///
/// The engine only produces the payloads; delivery, damage application and
/// hearing checks belong to the surrounding simulation.
pub trait CombatMessenger {
    fn projectile_fired(&mut self, shot: ShotFired);
    fn sound_emitted(&mut self, sound: SoundEmitted);
}
