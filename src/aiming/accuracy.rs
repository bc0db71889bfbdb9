//! Shot-accuracy rule base
//!
//! A single module, shared across all weapons an agent carries, scoring how
//! favorable the shot being lined up is: close, slow-moving targets that
//! have been visible for a while make for good shots. The crisp 0-100
//! output scales the angular noise injected into the aim vector.

use crate::fuzzy::{FuzzyModule, TermRef};

pub(crate) const VAR_SHOT_DISTANCE: &str = "shot_distance";
pub(crate) const VAR_TARGET_SPEED_SQ: &str = "target_speed_sq";
pub(crate) const VAR_TIME_VISIBLE: &str = "time_visible";
pub(crate) const VAR_SHOT_DESIRABILITY: &str = "shot_desirability";

/// Build the shot-accuracy rule base
///
/// The visibility bands sit relative to the agent's reaction time: a target
/// only counts as "long visible" once it has been in view well past the
/// point the agent is allowed to fire at all.
pub fn accuracy_module(reaction_time: f32) -> FuzzyModule {
    let mut fm = FuzzyModule::new();
    let rt = reaction_time;

    let dist = fm.create_variable(VAR_SHOT_DISTANCE);
    let dist_close = fm.add_left_shoulder(dist, "close", 0.0, 25.0, 150.0);
    let dist_medium = fm.add_triangular(dist, "medium", 25.0, 150.0, 300.0);
    let dist_far = fm.add_right_shoulder(dist, "far", 150.0, 300.0, 1000.0);

    // Input is the squared speed, so the bands square the intended speed
    // thresholds (5 and 15 world units/sec)
    let speed = fm.create_variable(VAR_TARGET_SPEED_SQ);
    let slow = fm.add_left_shoulder(speed, "slow", 0.0, 25.0, 100.0);
    let moving = fm.add_triangular(speed, "moving", 25.0, 100.0, 225.0);
    let fast = fm.add_right_shoulder(speed, "fast", 100.0, 225.0, 2500.0);

    let visible = fm.create_variable(VAR_TIME_VISIBLE);
    let briefly = fm.add_left_shoulder(visible, "briefly", 0.0, rt + 2.0, rt + 5.0);
    let a_while = fm.add_triangular(visible, "a_while", rt + 2.0, rt + 5.0, rt + 8.0);
    let long = fm.add_right_shoulder(visible, "long", rt + 5.0, rt + 8.0, rt + 100.0);

    let desire = fm.create_variable(VAR_SHOT_DESIRABILITY);
    let poor = fm.add_left_shoulder(desire, "poor", 0.0, 25.0, 50.0);
    let fair = fm.add_triangular(desire, "fair", 25.0, 50.0, 75.0);
    let good = fm.add_right_shoulder(desire, "good", 50.0, 75.0, 100.0);

    let table: [(TermRef, TermRef, [TermRef; 3]); 9] = [
        (dist_close, slow, [fair, good, good]),
        (dist_close, moving, [fair, good, good]),
        (dist_close, fast, [fair, fair, good]),
        (dist_medium, slow, [fair, fair, good]),
        (dist_medium, moving, [poor, fair, good]),
        (dist_medium, fast, [poor, poor, fair]),
        (dist_far, slow, [poor, fair, fair]),
        (dist_far, moving, [poor, poor, fair]),
        (dist_far, fast, [poor, poor, poor]),
    ];

    for (d, s, by_visibility) in table {
        for (v, outcome) in [briefly, a_while, long].into_iter().zip(by_visibility) {
            fm.add_rule([d, s, v], outcome);
        }
    }

    fm
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(dist: f32, speed_sq: f32, visible: f32) -> f32 {
        let mut fm = accuracy_module(0.2);
        fm.fuzzify(VAR_SHOT_DISTANCE, dist);
        fm.fuzzify(VAR_TARGET_SPEED_SQ, speed_sq);
        fm.fuzzify(VAR_TIME_VISIBLE, visible);
        fm.defuzzify(VAR_SHOT_DESIRABILITY)
    }

    #[test]
    fn test_ideal_shot_scores_high() {
        // Close, stationary, long visible
        assert!(score(20.0, 0.0, 20.0) >= 70.0);
    }

    #[test]
    fn test_snap_shot_at_sprinter_scores_low() {
        // Far, fast, barely seen
        assert!(score(500.0, 400.0, 0.5) <= 30.0);
    }

    #[test]
    fn test_visibility_improves_score() {
        let snap = score(150.0, 50.0, 0.5);
        let tracked = score(150.0, 50.0, 20.0);
        assert!(tracked > snap);
    }
}
