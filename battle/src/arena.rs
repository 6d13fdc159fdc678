//! The battle state machine: player-turn commands and enemy-turn
//! resolution.
//!
//! Both entry points mutate the single [`BattleState`] record and return
//! the ordered [`BattleEvent`] list the presentation layer plays back.
//! Out-of-turn calls are rejected before any state is touched, so the
//! UI's feedback timers can fire late (or never) without corrupting a
//! battle.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::damage::{attack_damage, enemy_attack_damage, ultimate_damage};
use crate::error::{ArenaError, ArenaResult};
use crate::opponents::{choose_enemy_action, EnemyAction};
use crate::rng::BattleRng;
use crate::state::{
    BattleState, EnemyFighter, Outcome, PlayerFighter, Turn, AP_MAX, AP_REGEN, ATTACK_AP_COST,
    DEFEND_AP_COST, ENEMY_HEAL_AMOUNT, FOCUS_AP_GAIN, PLAYER_BASE_HP, PLAYER_HP_PER_VITALITY,
    ULTIMATE_AP_REQUIRED, ULTIMATE_COMBO_REQUIRED,
};
use crate::types::{Combatant, Loadout, Side};

/// AP the player opens the battle with.
pub const AP_START: i32 = 3;

/// Commands available while it is the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerCommand {
    Attack,
    Defend,
    Focus,
    Ultimate,
}

/// Events generated during one resolution, in order, for UI playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum BattleEvent {
    #[serde(rename_all = "camelCase")]
    PlayerAttack {
        damage: i32,
        multiplier_x100: i32,
        critical: bool,
        super_effective: bool,
        enemy_hp: i32,
    },
    PlayerDefend,
    #[serde(rename_all = "camelCase")]
    PlayerFocus { ap: i32 },
    #[serde(rename_all = "camelCase")]
    PlayerUltimate { damage: i32, enemy_hp: i32 },
    /// Precondition failed: nothing was spent, nothing happened beyond
    /// the feedback line.
    #[serde(rename_all = "camelCase")]
    CommandRejected {
        command: PlayerCommand,
        ap: i32,
        combo: i32,
    },
    #[serde(rename_all = "camelCase")]
    EnemyAttack {
        damage: i32,
        blocked: bool,
        player_hp: i32,
    },
    EnemyMiss,
    #[serde(rename_all = "camelCase")]
    EnemyHeal { amount: i32, enemy_hp: i32 },
    #[serde(rename_all = "camelCase")]
    TurnStarted { turn: Turn, ap: i32 },
    #[serde(rename_all = "camelCase")]
    BattleEnded { outcome: Outcome },
}

/// One battle from entry to outcome. Owns the state record exclusively;
/// collaborators only ever see snapshots and events.
#[derive(Debug, Clone)]
pub struct BattleArena {
    state: BattleState,
}

impl BattleArena {
    /// Build the initial state from the profile snapshot and a generated
    /// enemy. Player max HP derives from vitality.
    pub fn new(loadout: Loadout, enemy: EnemyFighter) -> Self {
        let max_hp = PLAYER_BASE_HP + loadout.stats.vitality * PLAYER_HP_PER_VITALITY;
        let combatant = Combatant::new(Side::Player, loadout.name, loadout.element, max_hp);
        let mut state = BattleState {
            turn: Turn::PlayerTurn,
            outcome: None,
            player: PlayerFighter {
                combatant,
                stats: loadout.stats,
                ap: AP_START,
                combo: 0,
                crit_next: false,
                defending: false,
            },
            enemy,
            action_log: Vec::new(),
        };
        state.push_log(format!("{} belirdi!", state.enemy.combatant.name));
        Self { state }
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut BattleState {
        &mut self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.state.turn == Turn::Finished
    }

    /// Resolve one player command. Out-of-turn calls error out without
    /// touching state; failed preconditions resolve to a
    /// [`BattleEvent::CommandRejected`] and leave the turn with the
    /// player.
    pub fn player_command(&mut self, command: PlayerCommand) -> ArenaResult<Vec<BattleEvent>> {
        match self.state.turn {
            Turn::Finished => return Err(ArenaError::BattleOver),
            Turn::EnemyTurn => return Err(ArenaError::NotPlayerTurn),
            Turn::PlayerTurn => {}
        }

        let mut events = Vec::new();
        let acted = match command {
            PlayerCommand::Attack => self.resolve_attack(&mut events),
            PlayerCommand::Defend => self.resolve_defend(&mut events),
            PlayerCommand::Focus => self.resolve_focus(&mut events),
            PlayerCommand::Ultimate => self.resolve_ultimate(&mut events),
        };
        debug!(
            "player command {:?}: acted={} ap={} combo={}",
            command, acted, self.state.player.ap, self.state.player.combo
        );

        if acted {
            if self.state.enemy.combatant.is_defeated() {
                self.finish(Outcome::Win, &mut events);
            } else {
                self.state.turn = Turn::EnemyTurn;
                events.push(BattleEvent::TurnStarted {
                    turn: Turn::EnemyTurn,
                    ap: self.state.player.ap,
                });
            }
        }
        Ok(events)
    }

    /// Resolve the enemy's turn. The embedding layer calls this after the
    /// feedback delay; everything here reads state as it is *now*, not as
    /// it was when the delay was scheduled.
    pub fn resolve_enemy_turn<R: BattleRng>(&mut self, rng: &mut R) -> ArenaResult<Vec<BattleEvent>> {
        match self.state.turn {
            Turn::Finished => return Err(ArenaError::BattleOver),
            Turn::PlayerTurn => return Err(ArenaError::EnemyTurnNotDue),
            Turn::EnemyTurn => {}
        }

        let mut events = Vec::new();
        match choose_enemy_action(&self.state.enemy, rng) {
            EnemyAction::Heal => self.resolve_enemy_heal(&mut events),
            EnemyAction::Attack => self.resolve_enemy_attack(rng, &mut events),
        }

        // Defend never survives past one enemy resolution, no matter
        // which branch ran.
        self.state.player.defending = false;

        if self.state.player.combatant.is_defeated() {
            self.finish(Outcome::Lose, &mut events);
        } else {
            self.state.turn = Turn::PlayerTurn;
            self.state.player.ap = (self.state.player.ap + AP_REGEN).min(AP_MAX);
            events.push(BattleEvent::TurnStarted {
                turn: Turn::PlayerTurn,
                ap: self.state.player.ap,
            });
        }
        debug!(
            "enemy turn resolved: player_hp={} enemy_hp={}",
            self.state.player.combatant.hp, self.state.enemy.combatant.hp
        );
        Ok(events)
    }

    fn resolve_attack(&mut self, events: &mut Vec<BattleEvent>) -> bool {
        if self.state.player.ap < ATTACK_AP_COST {
            return self.reject(PlayerCommand::Attack, events);
        }
        self.state.player.ap -= ATTACK_AP_COST;

        // The one-shot crit flag is consumed the moment the attack
        // resolves, hit or not.
        let critical = core::mem::take(&mut self.state.player.crit_next);
        let hit = attack_damage(
            self.state.player.stats.strength,
            self.state.player.combatant.element,
            self.state.enemy.combatant.element,
            critical,
        );
        self.state.enemy.combatant.apply_damage(hit.damage);
        self.state.player.combo += 1;

        let name = self.state.player.combatant.name.clone();
        let mut line = if critical {
            format!("KRİTİK! {} {} hasar verdi!", name, hit.damage)
        } else {
            format!("{} {} hasar verdi!", name, hit.damage)
        };
        if hit.super_effective() {
            line.push_str(" süper etkili!");
        }
        self.state.push_log(line);

        events.push(BattleEvent::PlayerAttack {
            damage: hit.damage,
            multiplier_x100: hit.multiplier_x100,
            critical,
            super_effective: hit.super_effective(),
            enemy_hp: self.state.enemy.combatant.hp,
        });
        true
    }

    fn resolve_defend(&mut self, events: &mut Vec<BattleEvent>) -> bool {
        if self.state.player.ap < DEFEND_AP_COST {
            return self.reject(PlayerCommand::Defend, events);
        }
        self.state.player.ap -= DEFEND_AP_COST;
        self.state.player.defending = true;
        self.state.player.combo = 0;

        let line = format!("{} savunmaya geçti!", self.state.player.combatant.name);
        self.state.push_log(line);
        events.push(BattleEvent::PlayerDefend);
        true
    }

    fn resolve_focus(&mut self, events: &mut Vec<BattleEvent>) -> bool {
        self.state.player.crit_next = true;
        self.state.player.ap = (self.state.player.ap + FOCUS_AP_GAIN).min(AP_MAX);

        let line = format!("{} odaklandı! Sıradaki vuruş kritik!", self.state.player.combatant.name);
        self.state.push_log(line);
        events.push(BattleEvent::PlayerFocus {
            ap: self.state.player.ap,
        });
        true
    }

    fn resolve_ultimate(&mut self, events: &mut Vec<BattleEvent>) -> bool {
        let player = &self.state.player;
        if player.ap < ULTIMATE_AP_REQUIRED || player.combo < ULTIMATE_COMBO_REQUIRED {
            return self.reject(PlayerCommand::Ultimate, events);
        }

        // The ultimate drains everything, not just the gate cost.
        self.state.player.ap = 0;
        self.state.player.combo = 0;

        let damage = ultimate_damage(self.state.player.stats.intellect);
        self.state.enemy.combatant.apply_damage(damage);

        let line = format!(
            "{} ULTİMATE kullandı! {} hasar!",
            self.state.player.combatant.name, damage
        );
        self.state.push_log(line);
        events.push(BattleEvent::PlayerUltimate {
            damage,
            enemy_hp: self.state.enemy.combatant.hp,
        });
        true
    }

    fn reject(&mut self, command: PlayerCommand, events: &mut Vec<BattleEvent>) -> bool {
        self.state.push_log(String::from("YETERSİZ AP!"));
        events.push(BattleEvent::CommandRejected {
            command,
            ap: self.state.player.ap,
            combo: self.state.player.combo,
        });
        false
    }

    fn resolve_enemy_heal(&mut self, events: &mut Vec<BattleEvent>) {
        self.state.enemy.combatant.heal(ENEMY_HEAL_AMOUNT);
        let line = format!(
            "{} kendini iyileştirdi! (+{} HP)",
            self.state.enemy.combatant.name, ENEMY_HEAL_AMOUNT
        );
        self.state.push_log(line);
        events.push(BattleEvent::EnemyHeal {
            amount: ENEMY_HEAL_AMOUNT,
            enemy_hp: self.state.enemy.combatant.hp,
        });
    }

    fn resolve_enemy_attack<R: BattleRng>(&mut self, rng: &mut R, events: &mut Vec<BattleEvent>) {
        let defending = self.state.player.defending;
        let player_name = self.state.player.combatant.name.clone();

        // A defending player always takes a halved hit; the dodge roll
        // only exists on the undefended path.
        if !defending {
            let agility = self.state.player.stats.agility.clamp(0, 100) as u32;
            if rng.chance_percent(agility) {
                self.state.push_log(format!("{} saldırıyı savuşturdu!", player_name));
                events.push(BattleEvent::EnemyMiss);
                return;
            }
        }

        let damage = enemy_attack_damage(self.state.enemy.attack_power, defending);
        self.state.player.combatant.apply_damage(damage);

        let line = if defending {
            format!("{} savundu! Sadece {} hasar aldı!", player_name, damage)
        } else {
            format!("{} {} hasar aldı!", player_name, damage)
        };
        self.state.push_log(line);
        events.push(BattleEvent::EnemyAttack {
            damage,
            blocked: defending,
            player_hp: self.state.player.combatant.hp,
        });
    }

    fn finish(&mut self, outcome: Outcome, events: &mut Vec<BattleEvent>) {
        self.state.turn = Turn::Finished;
        self.state.outcome = Some(outcome);
        let line = match outcome {
            Outcome::Win => "KAZANDIN!",
            Outcome::Lose => "KAYBETTİN...",
        };
        self.state.push_log(String::from(line));
        events.push(BattleEvent::BattleEnded { outcome });
    }
}
