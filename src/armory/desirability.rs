//! Per-kind weapon desirability rule bases
//!
//! Each weapon kind embeds a fuzzy module scoring how attractive the weapon
//! is at a given distance with its current ammo load. The tables are fixed
//! design-time data encoding domain knowledge: rockets shine at medium
//! range and splash back at the shooter up close, the rail gun rewards
//! distance, knives are only worth drawing in someone's face.

use crate::armory::weapon::WeaponKind;
use crate::fuzzy::{fairly, very, FuzzyModule, TermRef};

pub(crate) const VAR_DISTANCE: &str = "distance_to_target";
pub(crate) const VAR_AMMO: &str = "ammo_status";
pub(crate) const VAR_DESIRABILITY: &str = "desirability";

/// Build the desirability rule base for one weapon kind
pub fn desirability_module(kind: WeaponKind) -> FuzzyModule {
    match kind {
        WeaponKind::Blaster => blaster(),
        WeaponKind::Shotgun => shotgun(),
        WeaponKind::RailGun => rail_gun(),
        WeaponKind::RocketLauncher => rocket_launcher(),
        WeaponKind::GrenadeLauncher => grenade_launcher(),
        WeaponKind::Knife => knife(),
    }
}

/// The standard three-band output variable, 0-100
fn output_bands(fm: &mut FuzzyModule) -> (TermRef, TermRef, TermRef) {
    let desire = fm.create_variable(VAR_DESIRABILITY);
    let undesirable = fm.add_left_shoulder(desire, "undesirable", 0.0, 25.0, 50.0);
    let desirable = fm.add_triangular(desire, "desirable", 25.0, 50.0, 75.0);
    let very_desirable = fm.add_right_shoulder(desire, "very_desirable", 50.0, 75.0, 100.0);
    (undesirable, desirable, very_desirable)
}

/// The standard three-band distance variable for a ~1000-unit arena
fn distance_bands(fm: &mut FuzzyModule) -> (TermRef, TermRef, TermRef) {
    let dist = fm.create_variable(VAR_DISTANCE);
    let close = fm.add_left_shoulder(dist, "target_close", 0.0, 25.0, 150.0);
    let medium = fm.add_triangular(dist, "target_medium", 25.0, 150.0, 300.0);
    let far = fm.add_right_shoulder(dist, "target_far", 150.0, 300.0, 1000.0);
    (close, medium, far)
}

/// Fallback sidearm: ammo-free, decent only up close
fn blaster() -> FuzzyModule {
    let mut fm = FuzzyModule::new();
    let (close, medium, far) = distance_bands(&mut fm);
    let (undesirable, desirable, _very_desirable) = output_bands(&mut fm);

    fm.add_rule([close], desirable);
    fm.add_rule([medium], undesirable);
    fm.add_rule([far], undesirable);

    fm
}

/// Devastating up close, worthless past medium range
fn shotgun() -> FuzzyModule {
    let mut fm = FuzzyModule::new();
    let (close, medium, far) = distance_bands(&mut fm);
    let (undesirable, desirable, very_desirable) = output_bands(&mut fm);

    let ammo = fm.create_variable(VAR_AMMO);
    let low = fm.add_triangular(ammo, "ammo_low", 0.0, 0.0, 10.0);
    let okay = fm.add_triangular(ammo, "ammo_okay", 0.0, 10.0, 30.0);
    let loads = fm.add_right_shoulder(ammo, "ammo_loads", 10.0, 30.0, 100.0);

    fm.add_rule([close, loads], very_desirable);
    fm.add_rule([close, okay], very_desirable);
    fm.add_rule([close, low], desirable);

    fm.add_rule([medium, loads], desirable);
    fm.add_rule([medium, okay], desirable);
    fm.add_rule([medium, low], undesirable);

    fm.add_rule([far, loads], undesirable);
    fm.add_rule([far, okay], undesirable);
    fm.add_rule([far, low], very(undesirable));

    fm
}

/// Sniping weapon: rewards range, wasted in a brawl
fn rail_gun() -> FuzzyModule {
    let mut fm = FuzzyModule::new();
    let (close, medium, far) = distance_bands(&mut fm);
    let (undesirable, desirable, very_desirable) = output_bands(&mut fm);

    let ammo = fm.create_variable(VAR_AMMO);
    let low = fm.add_triangular(ammo, "ammo_low", 0.0, 0.0, 10.0);
    let okay = fm.add_triangular(ammo, "ammo_okay", 0.0, 10.0, 30.0);
    let loads = fm.add_right_shoulder(ammo, "ammo_loads", 10.0, 30.0, 100.0);

    fm.add_rule([close, loads], fairly(desirable));
    fm.add_rule([close, okay], fairly(desirable));
    fm.add_rule([close, low], undesirable);

    fm.add_rule([medium, loads], very_desirable);
    fm.add_rule([medium, okay], desirable);
    fm.add_rule([medium, low], undesirable);

    fm.add_rule([far, loads], very(very_desirable));
    fm.add_rule([far, okay], very_desirable);
    fm.add_rule([far, low], fairly(desirable));

    fm
}

/// Five-band rocket table: splash damage makes point-blank use suicidal and
/// long flight time makes extreme range a waste
fn rocket_launcher() -> FuzzyModule {
    let mut fm = FuzzyModule::new();

    let dist = fm.create_variable(VAR_DISTANCE);
    let very_close = fm.add_left_shoulder(dist, "target_very_close", 0.0, 25.0, 100.0);
    let close = fm.add_triangular(dist, "target_close", 25.0, 100.0, 150.0);
    let medium = fm.add_triangular(dist, "target_medium", 100.0, 150.0, 300.0);
    let far = fm.add_triangular(dist, "target_far", 150.0, 300.0, 500.0);
    let very_far = fm.add_right_shoulder(dist, "target_very_far", 300.0, 500.0, 1000.0);

    let desire = fm.create_variable(VAR_DESIRABILITY);
    let undesirable = fm.add_left_shoulder(desire, "undesirable", 0.0, 20.0, 30.0);
    let little = fm.add_triangular(desire, "little_desirable", 20.0, 30.0, 50.0);
    let desirable = fm.add_triangular(desire, "desirable", 30.0, 50.0, 60.0);
    let quite = fm.add_triangular(desire, "quite_desirable", 50.0, 60.0, 80.0);
    let very_desirable = fm.add_right_shoulder(desire, "very_desirable", 80.0, 90.0, 100.0);

    let ammo = fm.create_variable(VAR_AMMO);
    let very_low = fm.add_triangular(ammo, "ammo_very_low", 0.0, 0.0, 5.0);
    let low = fm.add_triangular(ammo, "ammo_low", 0.0, 5.0, 10.0);
    let okay = fm.add_triangular(ammo, "ammo_okay", 5.0, 10.0, 40.0);
    let a_few = fm.add_triangular(ammo, "ammo_a_few", 10.0, 40.0, 60.0);
    let loads = fm.add_right_shoulder(ammo, "ammo_loads", 40.0, 60.0, 100.0);

    for ammo_band in [loads, a_few, okay, low, very_low] {
        fm.add_rule([very_close, ammo_band], undesirable);
    }

    fm.add_rule([close, loads], little);
    fm.add_rule([close, a_few], undesirable);
    fm.add_rule([close, okay], undesirable);
    fm.add_rule([close, low], undesirable);
    fm.add_rule([close, very_low], undesirable);

    fm.add_rule([medium, loads], very_desirable);
    fm.add_rule([medium, a_few], very_desirable);
    fm.add_rule([medium, okay], very_desirable);
    fm.add_rule([medium, low], quite);
    fm.add_rule([medium, very_low], desirable);

    fm.add_rule([far, loads], quite);
    fm.add_rule([far, a_few], quite);
    fm.add_rule([far, okay], desirable);
    fm.add_rule([far, low], undesirable);
    fm.add_rule([far, very_low], undesirable);

    fm.add_rule([very_far, loads], desirable);
    fm.add_rule([very_far, a_few], desirable);
    fm.add_rule([very_far, okay], little);
    fm.add_rule([very_far, low], undesirable);
    fm.add_rule([very_far, very_low], undesirable);

    fm
}

/// Lobbed over cover: best at medium-far range, hedged rules soften the
/// close-range and dry-magazine penalties
fn grenade_launcher() -> FuzzyModule {
    let mut fm = FuzzyModule::new();
    let (close, medium, far) = distance_bands(&mut fm);
    let (undesirable, desirable, very_desirable) = output_bands(&mut fm);

    let ammo = fm.create_variable(VAR_AMMO);
    let low = fm.add_triangular(ammo, "ammo_low", 0.0, 0.0, 15.0);
    let okay = fm.add_triangular(ammo, "ammo_okay", 0.0, 15.0, 30.0);
    let loads = fm.add_right_shoulder(ammo, "ammo_loads", 15.0, 30.0, 100.0);

    fm.add_rule([close, loads], fairly(desirable));
    fm.add_rule([close, okay], fairly(desirable));
    fm.add_rule([close, low], undesirable);

    fm.add_rule([medium, loads], very_desirable);
    fm.add_rule([medium, okay], desirable);
    fm.add_rule([medium, low], desirable);

    fm.add_rule([far, loads], very(very_desirable));
    fm.add_rule([far, okay], very(very_desirable));
    fm.add_rule([far, fairly(low)], very_desirable);

    fm
}

/// Thrown knives: only compelling in someone's face
fn knife() -> FuzzyModule {
    let mut fm = FuzzyModule::new();

    let dist = fm.create_variable(VAR_DISTANCE);
    let very_close = fm.add_left_shoulder(dist, "target_very_close", 0.0, 10.0, 40.0);
    let close = fm.add_triangular(dist, "target_close", 10.0, 40.0, 100.0);
    let far = fm.add_right_shoulder(dist, "target_far", 40.0, 100.0, 1000.0);

    let (undesirable, desirable, very_desirable) = output_bands(&mut fm);

    let ammo = fm.create_variable(VAR_AMMO);
    let low = fm.add_triangular(ammo, "ammo_low", 0.0, 0.0, 4.0);
    let okay = fm.add_triangular(ammo, "ammo_okay", 0.0, 4.0, 8.0);
    let loads = fm.add_right_shoulder(ammo, "ammo_loads", 4.0, 8.0, 12.0);

    fm.add_rule([very_close, loads], very_desirable);
    fm.add_rule([very_close, okay], very_desirable);
    fm.add_rule([very_close, low], desirable);

    fm.add_rule([close, loads], desirable);
    fm.add_rule([close, okay], desirable);
    fm.add_rule([close, low], undesirable);

    fm.add_rule([far, loads], undesirable);
    fm.add_rule([far, okay], undesirable);
    fm.add_rule([far, low], very(undesirable));

    fm
}
