//! The running game: one pet, one purse, one quest book, and at most
//! one active arena battle.
//!
//! The session is the only owner of the battle arena and of the RNG that
//! feeds it. Battle outcomes are applied to the economy exactly once,
//! when the embedding UI collects the result after its feedback delay.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, info};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use draco_battle::{
    generate_enemy, BattleArena, BattleEvent, BattleRng, BattleState, Loadout, Outcome,
    PlayerCommand, XorShiftRng,
};

use crate::error::{GameError, GameResult};
use crate::items::{find_item, ItemKind};
use crate::pet::{DecayModifiers, DragonState, NEED_MAX};
use crate::quests::{QuestBook, QuestId};

pub const STARTING_GOLD: i32 = 150;
pub const BATTLE_REWARD_WIN: i32 = 50;
pub const BATTLE_REWARD_LOSE: i32 = 10;

pub const PET_HAPPINESS: f32 = 5.0;
pub const EQUIP_HAPPINESS: f32 = 5.0;
pub const HAPPY_QUEST_THRESHOLD: f32 = 80.0;

pub const CLEAN_GOLD_CHANCE_PERCENT: u32 = 20;
pub const CLEAN_GOLD_AMOUNT: i32 = 50;

/// Chance per tick, in permille.
pub const WEATHER_FLIP_CHANCE_PERMILLE: u32 = 5;
pub const POOP_CHANCE_PERMILLE: u32 = 2;
pub const POOP_HUNGER_THRESHOLD: f32 = 80.0;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Weather {
    Sunny,
    Rain,
}

/// One-time home purchases that tweak decay or weather.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo,
    Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct HomeUpgrades {
    pub forest: bool,
    pub clean_kit: bool,
    pub weather_station: bool,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum HomeUpgrade {
    Forest,
    CleanKit,
    WeatherStation,
}

impl HomeUpgrade {
    pub fn price(self) -> i32 {
        match self {
            HomeUpgrade::Forest => 500,
            HomeUpgrade::CleanKit => 300,
            HomeUpgrade::WeatherStation => 1000,
        }
    }
}

/// Result reported by the mini-game collaborator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MiniGameResult {
    Win,
    Draw,
    Lose,
}

/// The persistent half of a session: everything that survives a page
/// reload. A running battle deliberately does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub dragon: DragonState,
    pub currency: i32,
    pub inventory: BTreeMap<String, u32>,
    pub quests: QuestBook,
    pub upgrades: HomeUpgrades,
    pub weather: Weather,
}

impl SessionState {
    fn new(name: String) -> Self {
        let mut inventory = BTreeMap::new();
        inventory.insert(String::from("apple"), 2);
        inventory.insert(String::from("fish"), 1);
        inventory.insert(String::from("ball"), 1);
        Self {
            dragon: DragonState::hatchling(name),
            currency: STARTING_GOLD,
            inventory,
            quests: QuestBook::new(),
            upgrades: HomeUpgrades::default(),
            weather: Weather::Sunny,
        }
    }
}

pub struct GameSession {
    state: SessionState,
    rng: XorShiftRng,
    arena: Option<BattleArena>,
    pending_outcome: Option<Outcome>,
}

impl GameSession {
    pub fn new(name: String, seed: u64) -> Self {
        info!("new session seeded with {}", seed);
        Self {
            state: SessionState::new(name),
            rng: XorShiftRng::seed_from_u64(seed),
            arena: None,
            pending_outcome: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Replace the persistent state (load). Any in-flight battle is
    /// dropped; battles never survive a reload.
    pub fn restore(&mut self, state: SessionState) {
        self.state = state;
        self.arena = None;
        self.pending_outcome = None;
    }

    pub fn dragon(&self) -> &DragonState {
        &self.state.dragon
    }

    pub fn currency(&self) -> i32 {
        self.state.currency
    }

    // ── Pet care ─────────────────────────────────────────────────────

    pub fn hatch(&mut self) {
        self.state.dragon.hatch();
    }

    /// One second of game time: weather, need decay, random poops.
    pub fn tick(&mut self) {
        if !self.state.dragon.is_hatched() {
            return;
        }

        if self.state.upgrades.weather_station {
            self.state.weather = Weather::Sunny;
        } else if self.rng.gen_range(1000) < WEATHER_FLIP_CHANCE_PERMILLE {
            self.state.weather = match self.state.weather {
                Weather::Sunny => Weather::Rain,
                Weather::Rain => Weather::Sunny,
            };
        }

        let mods = self.decay_modifiers();
        self.state.dragon.tick(&mods);

        let dragon = &self.state.dragon;
        let can_poop = !dragon.is_sleeping && dragon.hunger < POOP_HUNGER_THRESHOLD;
        if can_poop && self.rng.gen_range(1000) < POOP_CHANCE_PERMILLE {
            self.state.dragon.poops += 1;
        }

        self.check_happy_quest();
    }

    pub fn toggle_sleep(&mut self) {
        self.state.dragon.is_sleeping = !self.state.dragon.is_sleeping;
    }

    /// A pat on the head.
    pub fn pet_dragon(&mut self) {
        self.state.dragon.adjust_happiness(PET_HAPPINESS);
        self.check_happy_quest();
    }

    /// Wash the dragon. Returns true when gold turned up in the mess.
    pub fn clean(&mut self) -> bool {
        let had_mess = self.state.dragon.poops > 0;
        self.state.dragon.hygiene = NEED_MAX;
        self.state.dragon.poops = 0;

        let mut found_gold = false;
        if had_mess {
            if self.rng.chance_percent(CLEAN_GOLD_CHANCE_PERCENT) {
                self.state.currency += CLEAN_GOLD_AMOUNT;
                found_gold = true;
            }
            self.state.quests.complete(QuestId::WashOnce);
        }
        found_gold
    }

    // ── Market & inventory ───────────────────────────────────────────

    pub fn buy_item(&mut self, id: &str) -> GameResult<()> {
        let item = find_item(id).ok_or(GameError::UnknownItem)?;
        if self.state.currency < item.price {
            return Err(GameError::NotEnoughGold {
                have: self.state.currency,
                need: item.price,
            });
        }
        self.state.currency -= item.price;
        *self.state.inventory.entry(String::from(id)).or_insert(0) += 1;
        debug!("bought {} for {}", id, item.price);
        Ok(())
    }

    /// Use an item from the inventory. Food is consumed, toys are not,
    /// accessories are worn.
    pub fn use_item(&mut self, id: &str) -> GameResult<()> {
        let item = find_item(id).ok_or(GameError::UnknownItem)?;
        if self.state.inventory.get(id).copied().unwrap_or(0) == 0 {
            return Err(GameError::ItemNotOwned);
        }

        if item.kind == ItemKind::Accessory {
            self.state.dragon.adjust_happiness(item.effect.happiness);
            self.toggle_accessory(id);
            self.check_happy_quest();
            return Ok(());
        }

        if item.kind == ItemKind::Food {
            if let Some(count) = self.state.inventory.get_mut(id) {
                *count -= 1;
                if *count == 0 {
                    self.state.inventory.remove(id);
                }
            }
        }

        self.state.dragon.adjust_hunger(item.effect.hunger);
        self.state.dragon.adjust_happiness(item.effect.happiness);
        self.state.dragon.adjust_health(item.effect.health);
        self.state.dragon.adjust_energy(item.effect.energy);
        self.check_happy_quest();
        Ok(())
    }

    /// Equip or take off an accessory.
    pub fn equip_accessory(&mut self, id: &str) -> GameResult<()> {
        let item = find_item(id).ok_or(GameError::UnknownItem)?;
        if item.kind != ItemKind::Accessory {
            return Err(GameError::NotAnAccessory);
        }
        if self.state.inventory.get(id).copied().unwrap_or(0) == 0 {
            return Err(GameError::ItemNotOwned);
        }
        self.toggle_accessory(id);
        Ok(())
    }

    fn toggle_accessory(&mut self, id: &str) {
        if self.state.dragon.equipped_accessory.as_deref() == Some(id) {
            self.state.dragon.equipped_accessory = None;
        } else {
            self.state.dragon.equipped_accessory = Some(String::from(id));
            self.state.dragon.adjust_happiness(EQUIP_HAPPINESS);
        }
    }

    pub fn buy_upgrade(&mut self, upgrade: HomeUpgrade) -> GameResult<()> {
        let owned = match upgrade {
            HomeUpgrade::Forest => self.state.upgrades.forest,
            HomeUpgrade::CleanKit => self.state.upgrades.clean_kit,
            HomeUpgrade::WeatherStation => self.state.upgrades.weather_station,
        };
        if owned {
            return Err(GameError::UpgradeAlreadyOwned);
        }
        let price = upgrade.price();
        if self.state.currency < price {
            return Err(GameError::NotEnoughGold {
                have: self.state.currency,
                need: price,
            });
        }
        self.state.currency -= price;
        match upgrade {
            HomeUpgrade::Forest => self.state.upgrades.forest = true,
            HomeUpgrade::CleanKit => self.state.upgrades.clean_kit = true,
            HomeUpgrade::WeatherStation => self.state.upgrades.weather_station = true,
        }
        Ok(())
    }

    // ── Quests & mini-games ──────────────────────────────────────────

    pub fn claim_quest(&mut self, id: QuestId) -> GameResult<i32> {
        let reward = self.state.quests.claim(id)?;
        self.state.currency += reward;
        Ok(reward)
    }

    /// Bookkeeping for a finished mini-game; the games themselves live
    /// in the UI.
    pub fn record_minigame_result(&mut self, result: MiniGameResult) {
        let (gold, mood, xp) = match result {
            MiniGameResult::Win => (50, 20.0, 20),
            MiniGameResult::Draw => (20, 10.0, 10),
            MiniGameResult::Lose => (5, 5.0, 5),
        };
        self.state.currency += gold;
        self.state.dragon.adjust_happiness(mood);
        self.state.dragon.adjust_energy(-10.0);
        self.state.dragon.gain_xp(xp);
        if result == MiniGameResult::Win {
            self.state.quests.complete(QuestId::WinMinigame);
        }
        self.check_happy_quest();
    }

    fn check_happy_quest(&mut self) {
        if self.state.dragon.happiness >= HAPPY_QUEST_THRESHOLD {
            self.state.quests.complete(QuestId::Happy80);
        }
    }

    fn decay_modifiers(&self) -> DecayModifiers {
        let mut mods = DecayModifiers::default();
        if self.state.upgrades.forest {
            mods.hunger_factor *= 0.9;
            mods.happiness_factor *= 0.9;
        }
        if self.state.upgrades.clean_kit {
            mods.hygiene_factor *= 0.6;
        }
        if self.state.dragon.equipped_accessory.as_deref() == Some("glasses") {
            mods.happiness_factor *= 0.7;
        }
        mods
    }

    // ── Battle arena ─────────────────────────────────────────────────

    pub fn in_battle(&self) -> bool {
        self.arena.is_some()
    }

    pub fn arena_state(&self) -> Option<&BattleState> {
        self.arena.as_ref().map(|arena| arena.state())
    }

    pub fn has_pending_outcome(&self) -> bool {
        self.pending_outcome.is_some()
    }

    /// Snapshot the profile and start a battle against a fresh enemy.
    pub fn enter_arena(&mut self) -> GameResult<()> {
        if !self.state.dragon.is_hatched() {
            return Err(GameError::StillAnEgg);
        }
        if self.arena.is_some() || self.pending_outcome.is_some() {
            return Err(GameError::BattleInProgress);
        }

        let dragon = &self.state.dragon;
        let loadout = Loadout {
            name: dragon.name.clone(),
            element: dragon.element,
            evolution_stage: dragon.evolution_stage,
            stats: dragon.stats,
        };
        let enemy = generate_enemy(dragon.evolution_stage, &mut self.rng);
        info!(
            "entering arena: {} vs {} ({} hp)",
            loadout.name, enemy.combatant.name, enemy.combatant.max_hp
        );
        self.arena = Some(BattleArena::new(loadout, enemy));
        Ok(())
    }

    /// Forward one player command to the arena.
    pub fn battle_command(&mut self, command: PlayerCommand) -> GameResult<Vec<BattleEvent>> {
        let arena = self.arena.as_mut().ok_or(GameError::NoActiveBattle)?;
        let events = arena.player_command(command)?;
        self.note_battle_end(&events);
        Ok(events)
    }

    /// Resolve the delayed enemy turn. State is read now, not when the
    /// UI scheduled the delay.
    pub fn resolve_enemy_turn(&mut self) -> GameResult<Vec<BattleEvent>> {
        let arena = self.arena.as_mut().ok_or(GameError::NoActiveBattle)?;
        let events = arena.resolve_enemy_turn(&mut self.rng)?;
        self.note_battle_end(&events);
        Ok(events)
    }

    /// Collect a finished battle: pay the reward, notify the quest book,
    /// tear down the arena. Yields the outcome exactly once.
    pub fn collect_battle_result(&mut self) -> GameResult<Outcome> {
        let outcome = self
            .pending_outcome
            .take()
            .ok_or(GameError::NoPendingOutcome)?;
        self.arena = None;

        match outcome {
            Outcome::Win => {
                self.state.currency += BATTLE_REWARD_WIN;
                // The quest book hears about battles only on a win.
                self.state.quests.complete(QuestId::PlayBattle);
                self.state.quests.complete(QuestId::WinBattle);
            }
            Outcome::Lose => {
                self.state.currency += BATTLE_REWARD_LOSE;
            }
        }
        info!("battle collected: {:?}", outcome);
        Ok(outcome)
    }

    fn note_battle_end(&mut self, events: &[BattleEvent]) {
        for event in events {
            if let BattleEvent::BattleEnded { outcome } = event {
                self.pending_outcome = Some(*outcome);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn state_mut_for_tests(&mut self) -> &mut SessionState {
        &mut self.state
    }

    #[cfg(test)]
    pub(crate) fn enter_arena_with(&mut self, enemy: draco_battle::EnemyFighter) {
        let dragon = &self.state.dragon;
        let loadout = Loadout {
            name: dragon.name.clone(),
            element: dragon.element,
            evolution_stage: dragon.evolution_stage,
            stats: dragon.stats,
        };
        self.arena = Some(BattleArena::new(loadout, enemy));
    }

    #[cfg(test)]
    pub(crate) fn force_pending_outcome(&mut self, outcome: Outcome) {
        self.pending_outcome = Some(outcome);
    }
}
