//! Elemental type-effectiveness table.

use crate::types::Element;

/// Damage multiplier x10 for an attacker/defender pairing.
///
/// Advantage cycle: Fire -> Nature -> Ice -> Fire (15 = super effective).
/// Same element is neutral (10); every remaining pair is resisted (8).
/// Total over the full 4x4 grid; there are no error cases.
pub fn effectiveness_x10(attacker: Element, defender: Element) -> i32 {
    if attacker == defender {
        return 10;
    }

    let advantage = match attacker {
        Element::Fire => Some(Element::Nature),
        Element::Nature => Some(Element::Ice),
        Element::Ice => Some(Element::Fire),
        Element::Normal => None,
    };

    if advantage == Some(defender) {
        15
    } else {
        8
    }
}
