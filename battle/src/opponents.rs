//! Enemy generation and the enemy decision policy.

use alloc::string::String;

use crate::rng::BattleRng;
use crate::state::{
    EnemyFighter, ENEMY_ATTACK_PER_STAGE, ENEMY_BASE_ATTACK, ENEMY_BASE_HP,
    ENEMY_HEAL_CHANCE_PERCENT, ENEMY_HP_PER_STAGE,
};
use crate::types::{Combatant, Element, Side};

/// What the enemy does with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAction {
    Heal,
    Attack,
}

/// Roll a fresh opponent scaled to the player's evolution stage.
/// Element is drawn from the three attacking types; Normal is reserved
/// for the player side.
pub fn generate_enemy(evolution_stage: i32, rng: &mut impl BattleRng) -> EnemyFighter {
    let element = match rng.gen_range(3) {
        0 => Element::Fire,
        1 => Element::Ice,
        _ => Element::Nature,
    };
    let name = match element {
        Element::Fire => "Alev Ruhu",
        Element::Ice => "Buz Golemi",
        Element::Nature => "Orman Bekçisi",
        Element::Normal => "Gölge",
    };
    let max_hp = ENEMY_BASE_HP + evolution_stage * ENEMY_HP_PER_STAGE;
    let attack_power = ENEMY_BASE_ATTACK + evolution_stage * ENEMY_ATTACK_PER_STAGE;

    EnemyFighter {
        combatant: Combatant::new(Side::Enemy, String::from(name), element, max_hp),
        attack_power,
    }
}

/// Decision procedure evaluated once per enemy turn: heal with 70%
/// probability when low on HP, otherwise attack. The roll is only
/// consumed on the low-HP path.
pub fn choose_enemy_action(enemy: &EnemyFighter, rng: &mut impl BattleRng) -> EnemyAction {
    if enemy.is_low_hp() && rng.chance_percent(ENEMY_HEAL_CHANCE_PERCENT) {
        EnemyAction::Heal
    } else {
        EnemyAction::Attack
    }
}
