//! View types for UI serialization.
//!
//! Shaped snapshots sent to the frontend; the session structs stay
//! private to Rust.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use draco_battle::{BattleState, Element, Outcome, Turn};

use crate::items::find_item;
use crate::pet::DragonStage;
use crate::quests::QuestId;
use crate::session::{GameSession, HomeUpgrades, Weather};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntry {
    pub id: String,
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestView {
    pub id: QuestId,
    pub text: String,
    pub completed: bool,
    pub reward_claimed: bool,
}

/// The main screen snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub name: String,
    pub stage: DragonStage,
    pub element: Element,
    pub hunger: f32,
    pub happiness: f32,
    pub hygiene: f32,
    pub energy: f32,
    pub health: f32,
    pub xp: i32,
    pub max_xp: i32,
    pub evolution_stage: i32,
    pub age: f32,
    pub is_sleeping: bool,
    pub poops: u32,
    pub equipped_accessory: Option<String>,
    pub currency: i32,
    pub weather: Weather,
    pub upgrades: HomeUpgrades,
    pub inventory: Vec<InventoryEntry>,
    pub quests: Vec<QuestView>,
    pub has_unclaimed_quest: bool,
    pub in_battle: bool,
}

impl GameView {
    pub fn from_session(session: &GameSession) -> Self {
        let state = session.state();
        let dragon = &state.dragon;

        let inventory = state
            .inventory
            .iter()
            .map(|(id, count)| InventoryEntry {
                id: id.clone(),
                name: find_item(id)
                    .map(|item| String::from(item.name))
                    .unwrap_or_else(|| id.clone()),
                count: *count,
            })
            .collect();

        let quests = state
            .quests
            .quests()
            .iter()
            .map(|quest| QuestView {
                id: quest.id,
                text: String::from(quest.id.text()),
                completed: quest.completed,
                reward_claimed: quest.reward_claimed,
            })
            .collect();

        Self {
            name: dragon.name.clone(),
            stage: dragon.stage,
            element: dragon.element,
            hunger: dragon.hunger,
            happiness: dragon.happiness,
            hygiene: dragon.hygiene,
            energy: dragon.energy,
            health: dragon.health,
            xp: dragon.xp,
            max_xp: dragon.max_xp,
            evolution_stage: dragon.evolution_stage,
            age: dragon.age,
            is_sleeping: dragon.is_sleeping,
            poops: dragon.poops,
            equipped_accessory: dragon.equipped_accessory.clone(),
            currency: state.currency,
            weather: state.weather,
            upgrades: state.upgrades,
            inventory,
            quests,
            has_unclaimed_quest: state.quests.has_unclaimed_reward(),
            in_battle: session.in_battle(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterView {
    pub name: String,
    pub element: Element,
    pub hp: i32,
    pub max_hp: i32,
}

/// The arena screen snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleView {
    pub turn: Turn,
    pub outcome: Option<Outcome>,
    pub player: FighterView,
    pub ap: i32,
    pub combo: i32,
    pub crit_next: bool,
    pub defending: bool,
    pub enemy: FighterView,
    /// Newest first, at most four lines.
    pub action_log: Vec<String>,
}

impl BattleView {
    pub fn from_state(state: &BattleState) -> Self {
        Self {
            turn: state.turn,
            outcome: state.outcome,
            player: FighterView {
                name: state.player.combatant.name.clone(),
                element: state.player.combatant.element,
                hp: state.player.combatant.hp,
                max_hp: state.player.combatant.max_hp,
            },
            ap: state.player.ap,
            combo: state.player.combo,
            crit_next: state.player.crit_next,
            defending: state.player.defending,
            enemy: FighterView {
                name: state.enemy.combatant.name.clone(),
                element: state.enemy.combatant.element,
                hp: state.enemy.combatant.hp,
                max_hp: state.enemy.combatant.max_hp,
            },
            action_log: state.action_log.clone(),
        }
    }
}
