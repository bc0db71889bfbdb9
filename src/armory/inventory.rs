//! Per-agent weapon inventory
//!
//! One fixed slot per weapon kind; the blaster is always present and acts
//! as the baseline weapon when nothing better is owned or no target exists.
//! The currently wielded kind is always a valid, present slot.

use ordered_float::OrderedFloat;

use crate::armory::weapon::{Weapon, WeaponKind};
use crate::core::config::EngineConfig;
use crate::core::types::AgentId;

/// Mapping from weapon kind to owned weapon, plus the wielded kind
#[derive(Debug, Clone)]
pub struct WeaponInventory {
    owner: AgentId,
    slots: [Option<Weapon>; WeaponKind::ALL.len()],
    current: WeaponKind,
}

impl WeaponInventory {
    /// New inventory holding only the baseline blaster, wielded
    pub fn new(owner: AgentId, config: &EngineConfig) -> Self {
        let mut slots: [Option<Weapon>; WeaponKind::ALL.len()] = Default::default();
        slots[Self::slot(WeaponKind::Blaster)] =
            Some(Weapon::new(WeaponKind::Blaster, owner, config));

        Self {
            owner,
            slots,
            current: WeaponKind::Blaster,
        }
    }

    fn slot(kind: WeaponKind) -> usize {
        WeaponKind::ALL
            .iter()
            .position(|k| *k == kind)
            .expect("kind missing from WeaponKind::ALL")
    }

    /// The wielded weapon (always present)
    pub fn current(&self) -> &Weapon {
        self.slots[Self::slot(self.current)]
            .as_ref()
            .expect("current weapon slot empty")
    }

    pub fn current_mut(&mut self) -> &mut Weapon {
        self.slots[Self::slot(self.current)]
            .as_mut()
            .expect("current weapon slot empty")
    }

    pub fn current_kind(&self) -> WeaponKind {
        self.current
    }

    pub fn weapon(&self, kind: WeaponKind) -> Option<&Weapon> {
        self.slots[Self::slot(kind)].as_ref()
    }

    /// Acquire a weapon of `kind`
    ///
    /// A duplicate acquisition never creates a second entry: the new
    /// instance's starting ammo tops up the existing one instead. A fresh
    /// kind becomes selectable but is not automatically wielded.
    pub fn add_weapon(&mut self, kind: WeaponKind, config: &EngineConfig) {
        let incoming = Weapon::new(kind, self.owner, config);

        match &mut self.slots[Self::slot(kind)] {
            Some(present) => present.increment_rounds(incoming.rounds_remaining()),
            slot @ None => *slot = Some(incoming),
        }
    }

    /// Explicit wield override; returns false (and changes nothing) for
    /// unowned kinds
    pub fn change_weapon(&mut self, kind: WeaponKind) -> bool {
        if self.slots[Self::slot(kind)].is_some() {
            self.current = kind;
            true
        } else {
            false
        }
    }

    /// Re-evaluate desirability across every owned weapon and wield the
    /// winner
    ///
    /// With no engageable target the baseline blaster is forced without
    /// spending any fuzzy inference. Ties go to the earliest kind in
    /// declaration order.
    pub fn select_weapon(&mut self, dist_to_target: Option<f32>) -> WeaponKind {
        let Some(dist) = dist_to_target else {
            self.current = WeaponKind::Blaster;
            return self.current;
        };

        let mut best: Option<(OrderedFloat<f32>, WeaponKind)> = None;
        for slot in self.slots.iter_mut() {
            let Some(weapon) = slot else { continue };
            let score = OrderedFloat(weapon.desirability(dist));
            tracing::trace!(
                weapon = weapon.kind().name(),
                score = score.0,
                "weapon desirability"
            );

            // Strictly greater: first seen wins ties
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, weapon.kind()));
            }
        }

        if let Some((_, kind)) = best {
            if kind != self.current {
                tracing::debug!(
                    previous = self.current.name(),
                    next = kind.name(),
                    "weapon swap"
                );
            }
            self.current = kind;
        }

        self.current
    }

    /// Rounds left for `kind`; 0 when the weapon is absent
    pub fn ammo_remaining(&self, kind: WeaponKind) -> u32 {
        self.weapon(kind).map_or(0, Weapon::rounds_remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> (WeaponInventory, EngineConfig) {
        let config = EngineConfig::default();
        (WeaponInventory::new(AgentId::new(), &config), config)
    }

    #[test]
    fn test_starts_with_wielded_blaster() {
        let (inv, _) = inventory();
        assert_eq!(inv.current_kind(), WeaponKind::Blaster);
        assert!(inv.weapon(WeaponKind::Blaster).is_some());
        assert!(inv.weapon(WeaponKind::RocketLauncher).is_none());
    }

    #[test]
    fn test_add_weapon_twice_merges_ammo() {
        let (mut inv, config) = inventory();
        let per_pickup = config.rocket_launcher.default_rounds;

        inv.add_weapon(WeaponKind::RocketLauncher, &config);
        inv.add_weapon(WeaponKind::RocketLauncher, &config);

        assert_eq!(
            inv.ammo_remaining(WeaponKind::RocketLauncher),
            (per_pickup * 2).min(config.rocket_launcher.max_rounds)
        );
        // Still exactly one entry, and acquisition did not auto-wield
        assert_eq!(inv.current_kind(), WeaponKind::Blaster);
    }

    #[test]
    fn test_change_weapon_to_unowned_is_silent_noop() {
        let (mut inv, _) = inventory();
        assert!(!inv.change_weapon(WeaponKind::RailGun));
        assert_eq!(inv.current_kind(), WeaponKind::Blaster);
    }

    #[test]
    fn test_change_weapon_to_owned() {
        let (mut inv, config) = inventory();
        inv.add_weapon(WeaponKind::Shotgun, &config);
        assert!(inv.change_weapon(WeaponKind::Shotgun));
        assert_eq!(inv.current_kind(), WeaponKind::Shotgun);
    }

    #[test]
    fn test_select_without_target_forces_blaster() {
        let (mut inv, config) = inventory();
        inv.add_weapon(WeaponKind::Shotgun, &config);
        inv.change_weapon(WeaponKind::Shotgun);

        assert_eq!(inv.select_weapon(None), WeaponKind::Blaster);
        assert_eq!(inv.current_kind(), WeaponKind::Blaster);
    }

    #[test]
    fn test_select_prefers_shotgun_up_close() {
        let (mut inv, config) = inventory();
        inv.add_weapon(WeaponKind::Shotgun, &config);
        assert_eq!(inv.select_weapon(Some(20.0)), WeaponKind::Shotgun);
    }

    #[test]
    fn test_ammo_remaining_absent_weapon_is_zero() {
        let (inv, _) = inventory();
        assert_eq!(inv.ammo_remaining(WeaponKind::GrenadeLauncher), 0);
    }
}
