//! The dragon itself: needs on 0-100 scales, sleep, evolution.
//!
//! Need decay is plain clamped arithmetic driven by a once-per-second
//! tick. Everything random (poops, weather, found gold) stays in the
//! session so this model is fully deterministic.

use alloc::string::String;

use serde::{Deserialize, Serialize};

use draco_battle::{Element, Stats};

pub const NEED_MAX: f32 = 100.0;

pub const HUNGER_DECAY: f32 = 0.2;
pub const HUNGER_DECAY_SLEEPING: f32 = 0.05;
pub const HYGIENE_DECAY: f32 = 0.05;
pub const ENERGY_DECAY: f32 = 0.1;
pub const ENERGY_RECOVERY_SLEEPING: f32 = 1.5;
pub const HAPPINESS_DECAY: f32 = 0.1;
/// Extra happiness decay while hungry or dirty.
pub const HAPPINESS_PENALTY: f32 = 0.2;
pub const HUNGRY_THRESHOLD: f32 = 20.0;
pub const DIRTY_THRESHOLD: f32 = 40.0;

pub const AGE_PER_TICK: f32 = 0.01;

pub const BASE_MAX_XP: i32 = 100;
/// Each evolution raises the next threshold by this much.
pub const MAX_XP_STEP: i32 = 100;
pub const MAX_EVOLUTION_STAGE: i32 = 5;

/// Growth stages of the dragon. The egg only hatches; it does not tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DragonStage {
    Egg,
    Baby,
    Teen,
    Adult,
    Elder,
}

/// Per-tick decay multipliers derived from home upgrades and the
/// equipped accessory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayModifiers {
    pub hunger_factor: f32,
    pub hygiene_factor: f32,
    pub happiness_factor: f32,
}

impl Default for DecayModifiers {
    fn default() -> Self {
        Self {
            hunger_factor: 1.0,
            hygiene_factor: 1.0,
            happiness_factor: 1.0,
        }
    }
}

/// Persistent state of the pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragonState {
    pub name: String,
    pub stage: DragonStage,
    /// 100 is full.
    pub hunger: f32,
    pub happiness: f32,
    pub hygiene: f32,
    pub energy: f32,
    pub health: f32,
    pub xp: i32,
    pub max_xp: i32,
    pub stats: Stats,
    pub element: Element,
    /// 1..=5; drives battle scaling.
    pub evolution_stage: i32,
    /// In days; advances a little every tick.
    pub age: f32,
    pub is_sleeping: bool,
    pub poops: u32,
    pub equipped_accessory: Option<String>,
}

impl DragonState {
    pub fn hatchling(name: String) -> Self {
        Self {
            name,
            stage: DragonStage::Egg,
            hunger: 60.0,
            happiness: 50.0,
            hygiene: 50.0,
            energy: 50.0,
            health: 100.0,
            xp: 0,
            max_xp: BASE_MAX_XP,
            stats: Stats {
                strength: 5,
                vitality: 5,
                intellect: 5,
                agility: 5,
            },
            element: Element::Fire,
            evolution_stage: 1,
            age: 0.0,
            is_sleeping: false,
            poops: 0,
            equipped_accessory: None,
        }
    }

    pub fn is_hatched(&self) -> bool {
        self.stage != DragonStage::Egg
    }

    pub fn hatch(&mut self) {
        if self.stage == DragonStage::Egg {
            self.stage = DragonStage::Baby;
        }
    }

    /// One second of need decay. Eggs are inert.
    pub fn tick(&mut self, mods: &DecayModifiers) {
        if self.stage == DragonStage::Egg {
            return;
        }

        let hunger_decay = if self.is_sleeping {
            HUNGER_DECAY_SLEEPING
        } else {
            HUNGER_DECAY
        } * mods.hunger_factor;
        self.hunger = (self.hunger - hunger_decay).max(0.0);

        self.energy = if self.is_sleeping {
            (self.energy + ENERGY_RECOVERY_SLEEPING).min(NEED_MAX)
        } else {
            (self.energy - ENERGY_DECAY).max(0.0)
        };

        self.hygiene = (self.hygiene - HYGIENE_DECAY * mods.hygiene_factor).max(0.0);

        if !self.is_sleeping {
            let mut happiness_decay = HAPPINESS_DECAY;
            if self.hunger < HUNGRY_THRESHOLD {
                happiness_decay += HAPPINESS_PENALTY;
            }
            if self.hygiene < DIRTY_THRESHOLD {
                happiness_decay += HAPPINESS_PENALTY;
            }
            happiness_decay *= mods.happiness_factor;
            self.happiness = (self.happiness - happiness_decay).max(0.0);
        }

        self.age += AGE_PER_TICK;
    }

    pub fn adjust_hunger(&mut self, amount: f32) {
        self.hunger = (self.hunger + amount).clamp(0.0, NEED_MAX);
    }

    pub fn adjust_happiness(&mut self, amount: f32) {
        self.happiness = (self.happiness + amount).clamp(0.0, NEED_MAX);
    }

    pub fn adjust_energy(&mut self, amount: f32) {
        self.energy = (self.energy + amount).clamp(0.0, NEED_MAX);
    }

    pub fn adjust_health(&mut self, amount: f32) {
        self.health = (self.health + amount).clamp(0.0, NEED_MAX);
    }

    /// Add experience, evolving through as many thresholds as the amount
    /// crosses. Each evolution bumps every core stat by one and raises
    /// the next threshold.
    pub fn gain_xp(&mut self, amount: i32) -> bool {
        self.xp += amount;
        let mut evolved = false;
        while self.xp >= self.max_xp && self.evolution_stage < MAX_EVOLUTION_STAGE {
            self.xp -= self.max_xp;
            self.max_xp += MAX_XP_STEP;
            self.evolution_stage += 1;
            self.stats.strength += 1;
            self.stats.vitality += 1;
            self.stats.intellect += 1;
            self.stats.agility += 1;
            self.stage = stage_for(self.evolution_stage);
            evolved = true;
        }
        // Past the last threshold xp just accumulates.
        if self.evolution_stage == MAX_EVOLUTION_STAGE && self.xp > self.max_xp {
            self.xp = self.max_xp;
        }
        evolved
    }
}

fn stage_for(evolution_stage: i32) -> DragonStage {
    match evolution_stage {
        i32::MIN..=1 => DragonStage::Baby,
        2 => DragonStage::Teen,
        3 => DragonStage::Adult,
        _ => DragonStage::Elder,
    }
}
