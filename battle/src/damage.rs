//! Damage and heal formulas.
//!
//! All arithmetic is integer fixed-point. The reference formulas are
//! `floor(base * multiplier)` over halves (`base = 5 + strength * 1.5`)
//! and tenths (elemental multipliers), so computing with `base x2` and
//! `multiplier x100` and dividing once at the end is exact.

use crate::elements::effectiveness_x10;
use crate::types::Element;

/// A critical doubles the attack base.
pub const CRIT_BASE_FACTOR: i32 = 2;
/// A critical additionally scales the elemental multiplier by 1.2.
pub const CRIT_MULTIPLIER_X10: i32 = 12;

/// Resolved outcome of one basic attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackHit {
    pub damage: i32,
    /// Effective multiplier x100, crit scaling included.
    pub multiplier_x100: i32,
    pub critical: bool,
}

impl AttackHit {
    /// The UI flags a hit whenever the effective multiplier exceeds 1.0.
    /// Note a same-type critical (1.0 * 1.2) qualifies.
    pub fn super_effective(&self) -> bool {
        self.multiplier_x100 > 100
    }
}

/// Player basic attack: `floor(base * effectiveness * crit)` with
/// `base = 5 + strength * 1.5`.
pub fn attack_damage(
    strength: i32,
    attacker: Element,
    defender: Element,
    critical: bool,
) -> AttackHit {
    let mut base_x2 = 10 + 3 * strength;
    let mut multiplier_x100 = effectiveness_x10(attacker, defender) * 10;

    if critical {
        base_x2 *= CRIT_BASE_FACTOR;
        multiplier_x100 = multiplier_x100 * CRIT_MULTIPLIER_X10 / 10;
    }

    AttackHit {
        damage: base_x2 * multiplier_x100 / 200,
        multiplier_x100,
        critical,
    }
}

/// Ultimate: `floor(20 + intellect * 2)`, elemental effectiveness does
/// not apply.
pub fn ultimate_damage(intellect: i32) -> i32 {
    20 + 2 * intellect
}

/// Enemy basic attack. `attack_power` is fixed at battle start
/// (`10 + evolution_stage * 2`); a defending player takes half, floored.
/// The dodge roll is a separate, mutually exclusive path handled by the
/// turn resolution.
pub fn enemy_attack_damage(attack_power: i32, player_defending: bool) -> i32 {
    if player_defending {
        attack_power / 2
    } else {
        attack_power
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_attack_with_advantage() {
        // base = 5 + 5 * 1.5 = 12.5, x1.5 -> floor(18.75) = 18
        let hit = attack_damage(5, Element::Fire, Element::Nature, false);
        assert_eq!(hit.damage, 18);
        assert_eq!(hit.multiplier_x100, 150);
        assert!(hit.super_effective());
        assert!(!hit.critical);
    }

    #[test]
    fn critical_doubles_base_and_scales_multiplier() {
        // base 12.5 -> 25, multiplier 1.5 * 1.2 = 1.8 -> floor(45.0) = 45
        let hit = attack_damage(5, Element::Fire, Element::Nature, true);
        assert_eq!(hit.damage, 45);
        assert_eq!(hit.multiplier_x100, 180);
        assert!(hit.super_effective());
    }

    #[test]
    fn same_type_critical_counts_as_super_effective() {
        let hit = attack_damage(5, Element::Ice, Element::Ice, true);
        assert_eq!(hit.multiplier_x100, 120);
        assert!(hit.super_effective());
        // 25 * 1.2 = 30
        assert_eq!(hit.damage, 30);
    }

    #[test]
    fn resisted_critical_stays_below_neutral() {
        // 0.8 * 1.2 = 0.96 never flags as super effective
        let hit = attack_damage(5, Element::Fire, Element::Ice, true);
        assert_eq!(hit.multiplier_x100, 96);
        assert!(!hit.super_effective());
        // floor(25 * 0.96) = 24
        assert_eq!(hit.damage, 24);
    }

    #[test]
    fn resisted_attack_floors() {
        // base = 5 + 3 * 1.5 = 9.5, x0.8 -> floor(7.6) = 7
        let hit = attack_damage(3, Element::Fire, Element::Ice, false);
        assert_eq!(hit.damage, 7);
        assert!(!hit.super_effective());
    }

    #[test]
    fn ultimate_ignores_elements() {
        assert_eq!(ultimate_damage(5), 30);
        assert_eq!(ultimate_damage(0), 20);
    }

    #[test]
    fn defending_halves_with_floor() {
        assert_eq!(enemy_attack_damage(14, true), 7);
        assert_eq!(enemy_attack_damage(15, true), 7);
        assert_eq!(enemy_attack_damage(15, false), 15);
    }
}
