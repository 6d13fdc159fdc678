use alloc::vec::Vec;

use super::*;
use crate::arena::PlayerCommand;
use crate::rng::XorShiftRng;
use crate::state::{Turn, AP_MAX};

fn assert_bounds(arena: &BattleArena) {
    let state = arena.state();
    assert!((0..=AP_MAX).contains(&state.player.ap));
    assert!(state.player.combatant.hp >= 0);
    assert!(state.player.combatant.hp <= state.player.combatant.max_hp);
    assert!(state.enemy.combatant.hp >= 0);
    assert!(state.enemy.combatant.hp <= state.enemy.combatant.max_hp);
    assert!(state.player.combo >= 0);
}

/// Drive whole battles with pseudo-random command choices and check the
/// resource bounds after every single resolution.
#[test]
fn bounds_hold_for_arbitrary_command_sequences() {
    const COMMANDS: [PlayerCommand; 4] = [
        PlayerCommand::Attack,
        PlayerCommand::Defend,
        PlayerCommand::Focus,
        PlayerCommand::Ultimate,
    ];

    for seed in 0..25u64 {
        let mut driver = XorShiftRng::seed_from_u64(seed);
        let mut rolls = XorShiftRng::seed_from_u64(seed ^ 0xdead_beef);
        let mut arena = fire_vs_nature();

        for _ in 0..200 {
            match arena.state().turn {
                Turn::PlayerTurn => {
                    let command = COMMANDS[driver.gen_range(4) as usize];
                    arena.player_command(command).unwrap();
                }
                Turn::EnemyTurn => {
                    arena.resolve_enemy_turn(&mut rolls).unwrap();
                }
                Turn::Finished => break,
            }
            assert_bounds(&arena);
        }
    }
}

/// A completed battle alternates strictly: player, enemy, player, ...
/// finished. Rejected commands do not advance the turn and are not
/// transitions.
#[test]
fn turns_alternate_until_finished() {
    let mut rolls = XorShiftRng::seed_from_u64(3);
    let mut arena = fire_vs_nature();
    let mut seen = Vec::new();
    seen.push(arena.state().turn);

    for _ in 0..300 {
        let before = arena.state().turn;
        match before {
            Turn::PlayerTurn => {
                arena.player_command(PlayerCommand::Attack).unwrap();
            }
            Turn::EnemyTurn => {
                arena.resolve_enemy_turn(&mut rolls).unwrap();
            }
            Turn::Finished => break,
        }
        let after = arena.state().turn;
        if after != before {
            seen.push(after);
        }
    }

    assert_eq!(seen[0], Turn::PlayerTurn);
    assert_eq!(*seen.last().unwrap(), Turn::Finished);
    for pair in seen.windows(2) {
        assert_ne!(pair[0], pair[1], "no transition revisits its own state");
    }
    // Finished is terminal and only entered once.
    assert_eq!(seen.iter().filter(|t| **t == Turn::Finished).count(), 1);
}

#[test]
fn crit_affects_exactly_one_attack() {
    let mut arena = fire_vs_nature();
    let mut rolls = ScriptedRng::new(&[99, 99]);

    arena.player_command(PlayerCommand::Focus).unwrap();
    assert!(arena.state().player.crit_next);
    arena.resolve_enemy_turn(&mut rolls).unwrap();
    assert!(
        arena.state().player.crit_next,
        "crit is not consumed by the enemy turn"
    );

    // First attack consumes the flag: crit damage 45 vs plain 18.
    let hp_before = arena.state().enemy.combatant.hp;
    arena.player_command(PlayerCommand::Attack).unwrap();
    assert_eq!(hp_before - arena.state().enemy.combatant.hp, 45);
    assert!(!arena.state().player.crit_next);

    // Second attack is back to normal.
    arena.resolve_enemy_turn(&mut rolls).unwrap();
    let hp_before = arena.state().enemy.combatant.hp;
    arena.player_command(PlayerCommand::Attack).unwrap();
    assert_eq!(hp_before - arena.state().enemy.combatant.hp, 18);
}

#[test]
fn combo_survives_attack_and_focus_only() {
    let mut arena = fire_vs_nature();
    let mut rolls = ScriptedRng::new(&[99, 99, 99]);

    arena.player_command(PlayerCommand::Attack).unwrap(); // combo 1
    arena.resolve_enemy_turn(&mut rolls).unwrap();
    arena.player_command(PlayerCommand::Focus).unwrap(); // combo stays
    assert_eq!(arena.state().player.combo, 1);
    arena.resolve_enemy_turn(&mut rolls).unwrap();
    arena.player_command(PlayerCommand::Attack).unwrap(); // combo 2
    assert_eq!(arena.state().player.combo, 2);
    arena.resolve_enemy_turn(&mut rolls).unwrap();
    arena.player_command(PlayerCommand::Defend).unwrap();
    assert_eq!(arena.state().player.combo, 0, "defend resets the combo");
}

#[test]
fn defending_is_scoped_to_one_enemy_resolution() {
    let mut arena = fire_vs_nature();
    assert!(!arena.state().player.defending);

    arena.player_command(PlayerCommand::Defend).unwrap();
    assert!(arena.state().player.defending, "set between defend and enemy turn");

    let mut rolls = ScriptedRng::empty();
    arena.resolve_enemy_turn(&mut rolls).unwrap();
    assert!(!arena.state().player.defending, "cleared immediately after");

    // And it stays false through an ordinary exchange.
    arena.player_command(PlayerCommand::Attack).unwrap();
    assert!(!arena.state().player.defending);
}
