//! End-to-end scenarios with the reference numbers.

use super::*;
use crate::arena::{BattleEvent, PlayerCommand};
use crate::error::ArenaError;
use crate::state::{Outcome, Turn};

/// Fire player (str 5) attacks a Nature enemy with 3 AP:
/// base 12.5, x1.5 elemental -> 18 damage, AP 3 -> 1, combo 0 -> 1.
#[test]
fn plain_attack_with_advantage() {
    let mut arena = fire_vs_nature();
    assert_eq!(arena.state().player.ap, 3);

    arena.player_command(PlayerCommand::Attack).unwrap();

    let state = arena.state();
    assert_eq!(state.enemy.combatant.max_hp - state.enemy.combatant.hp, 18);
    assert_eq!(state.player.ap, 1);
    assert_eq!(state.player.combo, 1);
}

/// Same attack with the crit flag armed: base doubles to 25, multiplier
/// becomes 1.5 * 1.2 = 1.8 -> 45 damage, and the flag clears.
#[test]
fn crit_attack_with_advantage() {
    let mut arena = fire_vs_nature();
    arena.state_mut().player.crit_next = true;

    arena.player_command(PlayerCommand::Attack).unwrap();

    let state = arena.state();
    assert_eq!(state.enemy.combatant.max_hp - state.enemy.combatant.hp, 45);
    assert!(!state.player.crit_next);
}

/// Ultimate at combo 3 / AP 3 with intellect 5: 30 damage, everything
/// resets.
#[test]
fn ultimate_at_exact_gates() {
    let mut arena = fire_vs_nature();
    arena.state_mut().player.ap = 3;
    arena.state_mut().player.combo = 3;

    arena.player_command(PlayerCommand::Ultimate).unwrap();

    let state = arena.state();
    assert_eq!(state.enemy.combatant.max_hp - state.enemy.combatant.hp, 30);
    assert_eq!(state.player.ap, 0);
    assert_eq!(state.player.combo, 0);
}

/// Enemy at 15% HP takes the heal branch: +10 HP, no damage to the
/// player, turn comes back with +2 AP.
#[test]
fn cornered_enemy_heals() {
    let mut arena = fire_vs_nature();
    arena.player_command(PlayerCommand::Attack).unwrap(); // ap 3 -> 1
    arena.state_mut().enemy.combatant.hp = 15;

    let mut rng = ScriptedRng::new(&[0]);
    arena.resolve_enemy_turn(&mut rng).unwrap();

    let state = arena.state();
    assert_eq!(state.enemy.combatant.hp, 25);
    assert_eq!(state.player.combatant.hp, state.player.combatant.max_hp);
    assert_eq!(state.turn, Turn::PlayerTurn);
    assert_eq!(state.player.ap, 3);
}

/// Defend, then a nominal 14-damage enemy attack lands for 7; the defend
/// flag is gone for every later turn until Defend is issued again.
#[test]
fn defend_halves_the_counterattack() {
    let mut arena = fire_vs_nature();
    arena.player_command(PlayerCommand::Defend).unwrap();

    let mut rng = ScriptedRng::empty();
    arena.resolve_enemy_turn(&mut rng).unwrap();

    let state = arena.state();
    assert_eq!(state.player.combatant.max_hp - state.player.combatant.hp, 7);
    assert!(!state.player.defending);

    // Next enemy attack is undefended again (dodge roll fails, full 14).
    arena.player_command(PlayerCommand::Attack).unwrap();
    let mut rng = ScriptedRng::new(&[99]);
    arena.resolve_enemy_turn(&mut rng).unwrap();
    assert_eq!(
        arena.state().player.combatant.max_hp - arena.state().player.combatant.hp,
        21
    );
}

/// Lethal damage wins exactly once; the arena is inert afterwards.
#[test]
fn win_is_terminal() {
    let mut arena = BattleArena::new(
        draco_loadout(default_stats()),
        enemy(Element::Nature, 18, 14),
    );

    let events = arena.player_command(PlayerCommand::Attack).unwrap();
    assert!(matches!(
        events.last().unwrap(),
        BattleEvent::BattleEnded {
            outcome: Outcome::Win,
        }
    ));
    assert_eq!(arena.outcome(), Some(Outcome::Win));
    assert_eq!(arena.state().action_log[0], "KAZANDIN!");

    let frozen = arena.state().clone();
    assert_eq!(
        arena.player_command(PlayerCommand::Attack).unwrap_err(),
        ArenaError::BattleOver
    );
    let mut rng = ScriptedRng::empty();
    assert_eq!(
        arena.resolve_enemy_turn(&mut rng).unwrap_err(),
        ArenaError::BattleOver
    );
    assert_eq!(arena.state(), &frozen);
}
