mod events;
mod invariants;
mod scenarios;

use alloc::string::String;
use alloc::vec::Vec;

use crate::arena::BattleArena;
use crate::rng::BattleRng;
use crate::state::EnemyFighter;
use crate::types::{Combatant, Element, Loadout, Side, Stats};

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

/// RNG that replays a fixed list of rolls. Each queued value is returned
/// raw from `next_u32`, so queue the post-modulo roll you want (rolls
/// below 100 pass through `gen_range(100)` unchanged). Panics when a
/// test consumes more rolls than it scripted, which doubles as an
/// assertion that a code path consumed no randomness.
pub(crate) struct ScriptedRng {
    rolls: Vec<u32>,
    at: usize,
}

impl ScriptedRng {
    pub(crate) fn new(rolls: &[u32]) -> Self {
        Self {
            rolls: rolls.to_vec(),
            at: 0,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(&[])
    }
}

impl BattleRng for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let roll = *self
            .rolls
            .get(self.at)
            .expect("scripted rng exhausted: unexpected roll");
        self.at += 1;
        roll
    }
}

pub(crate) fn draco_loadout(stats: Stats) -> Loadout {
    Loadout {
        name: String::from("Draco"),
        element: Element::Fire,
        evolution_stage: 2,
        stats,
    }
}

pub(crate) fn default_stats() -> Stats {
    Stats {
        strength: 5,
        vitality: 5,
        intellect: 5,
        agility: 0,
    }
}

pub(crate) fn enemy(element: Element, max_hp: i32, attack_power: i32) -> EnemyFighter {
    let name = String::from("Orman Bekçisi");
    EnemyFighter {
        combatant: Combatant::new(Side::Enemy, name, element, max_hp),
        attack_power,
    }
}

/// Fire player (str/vit/int 5, agi 0) against a 100 HP Nature enemy that
/// hits for a nominal 14.
pub(crate) fn fire_vs_nature() -> BattleArena {
    BattleArena::new(
        draco_loadout(default_stats()),
        enemy(Element::Nature, 100, 14),
    )
}
