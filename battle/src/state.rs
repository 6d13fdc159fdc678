//! Battle state: the single mutable record owned by the arena.

use alloc::string::String;
use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::types::{Combatant, Stats};

/// Action point ceiling.
pub const AP_MAX: i32 = 5;
/// AP granted when the turn comes back to the player.
pub const AP_REGEN: i32 = 2;
/// AP cost of a basic attack.
pub const ATTACK_AP_COST: i32 = 2;
/// AP cost of defending.
pub const DEFEND_AP_COST: i32 = 1;
/// AP granted by Focus (which itself costs nothing).
pub const FOCUS_AP_GAIN: i32 = 1;
/// Minimum AP to unleash an Ultimate. It then consumes ALL remaining AP.
pub const ULTIMATE_AP_REQUIRED: i32 = 3;
/// Combo count gating the Ultimate.
pub const ULTIMATE_COMBO_REQUIRED: i32 = 3;

/// The action log keeps only the most recent lines.
pub const ACTION_LOG_CAP: usize = 4;

pub const PLAYER_BASE_HP: i32 = 50;
pub const PLAYER_HP_PER_VITALITY: i32 = 10;

pub const ENEMY_BASE_HP: i32 = 50;
pub const ENEMY_HP_PER_STAGE: i32 = 30;
pub const ENEMY_BASE_ATTACK: i32 = 10;
pub const ENEMY_ATTACK_PER_STAGE: i32 = 2;
pub const ENEMY_HEAL_AMOUNT: i32 = 10;
/// Below this share of max HP the enemy starts considering a heal.
pub const ENEMY_LOW_HP_PERCENT: i32 = 20;
/// Probability of the heal branch once low.
pub const ENEMY_HEAL_CHANCE_PERCENT: u32 = 70;

/// Presentation pause between a player action and the enemy response.
/// The embedding UI owns the timer; state is read when it elapses.
pub const ENEMY_TURN_DELAY_MS: u32 = 1500;
/// Presentation pause before the terminal outcome is collected.
pub const OUTCOME_DELAY_MS: u32 = 1500;

/// Whose turn it is. Terminal state is `Finished`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Turn {
    PlayerTurn,
    EnemyTurn,
    Finished,
}

/// Terminal result, set exactly once on the transition to `Finished`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Win,
    Lose,
}

/// The player's side of the arena: combatant plus the per-battle
/// resources the command economy runs on.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerFighter {
    pub combatant: Combatant,
    pub stats: Stats,
    /// Action points, always within `0..=AP_MAX`.
    pub ap: i32,
    /// Consecutive-attack counter gating the Ultimate.
    pub combo: i32,
    /// One-shot critical flag set by Focus, cleared by the next resolved
    /// Attack.
    pub crit_next: bool,
    /// Set by a resolved Defend; unconditionally cleared at the end of
    /// the next enemy-turn resolution. Lives here, not in any timer
    /// closure, so the resolution always reads the current value.
    pub defending: bool,
}

/// The enemy's side. Stateless apart from HP; its attack power is fixed
/// at battle start.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyFighter {
    pub combatant: Combatant,
    pub attack_power: i32,
}

impl EnemyFighter {
    /// Low-HP check for the AI policy: strictly under
    /// `ENEMY_LOW_HP_PERCENT` of max.
    pub fn is_low_hp(&self) -> bool {
        self.combatant.hp * 100 < self.combatant.max_hp * ENEMY_LOW_HP_PERCENT
    }
}

/// Complete state of one battle. Created fresh on arena entry, mutated
/// only by the two turn-resolution procedures, discarded after the
/// outcome is reported.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleState {
    pub turn: Turn,
    pub outcome: Option<Outcome>,
    pub player: PlayerFighter,
    pub enemy: EnemyFighter,
    /// Human-readable feed for the UI, newest first, capped at
    /// `ACTION_LOG_CAP` lines. Older lines are dropped.
    pub action_log: Vec<String>,
}

impl BattleState {
    /// Prepend a line, dropping anything past the cap.
    pub fn push_log(&mut self, line: String) {
        self.action_log.insert(0, line);
        self.action_log.truncate(ACTION_LOG_CAP);
    }
}
