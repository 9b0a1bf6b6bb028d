use rand::rngs::StdRng;

use crate::io::{InputReader, OutputWriter};
use crate::models::errors::GameResult;
use crate::models::monster::Monster;
use crate::models::player::Player;
use crate::ui::presenters::CombatPresenter;

/// What the player asked for this turn. Free text is trimmed and
/// lowercased; anything that is not an attack or a retreat is tagged
/// `Unrecognized` and the loop decides what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnIntent {
    Attack,
    Run,
    Unrecognized,
}

pub fn parse_intent(raw: &str) -> TurnIntent {
    match raw.trim().to_lowercase().as_str() {
        "attack" => TurnIntent::Attack,
        "run" => TurnIntent::Run,
        _ => TurnIntent::Unrecognized,
    }
}

/// How a duel ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelOutcome {
    Victory,
    Defeat,
    Disengaged,
}

/// Resolve one duel to completion.
///
/// Each turn reads one intent. An attack strikes the monster; if the
/// monster survives it retaliates with exactly one roster attack. A run
/// ends the duel immediately. Unrecognized input re-prompts without
/// costing a turn; the monster does not act.
///
/// A duel that is already decided when the loop starts returns the
/// decided outcome without reading input.
pub fn run_duel(
    player: &mut Player,
    monster: &mut Monster,
    rng: &mut StdRng,
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<DuelOutcome> {
    loop {
        if monster.is_defeated() {
            return Ok(DuelOutcome::Victory);
        }
        if !player.is_alive() {
            return Ok(DuelOutcome::Defeat);
        }

        let line = input.read_line("What will you do? (attack/run)")?;
        match parse_intent(&line) {
            TurnIntent::Attack => {
                let report = player.attack(monster, rng);
                CombatPresenter::show_player_attack(&report, output);
                if monster.is_defeated() {
                    CombatPresenter::show_monster_down(monster.name(), output);
                    return Ok(DuelOutcome::Victory);
                }

                let report = monster.attack(player, rng);
                CombatPresenter::show_monster_attack(&report, output);
                if !player.is_alive() {
                    CombatPresenter::show_player_down(output);
                    return Ok(DuelOutcome::Defeat);
                }

                CombatPresenter::show_standing(player, monster, output);
            }
            TurnIntent::Run => {
                CombatPresenter::show_disengage(monster.name(), output);
                return Ok(DuelOutcome::Disengaged);
            }
            TurnIntent::Unrecognized => {
                output.writeln("You can attack or run.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::{MockInput, MockOutput};
    use crate::models::monster::{AttackDef, MonsterSpec};
    use rand::SeedableRng;

    const SURE_HIT_20: AttackDef = AttackDef {
        label: "thrust",
        verb: "thrust at",
        power_range: (100, 100),
        damage_range: (20, 20),
    };

    const BRUTE: MonsterSpec = MonsterSpec {
        name: "brute",
        base_health: 50,
        health_variance: 0,
        attacks: &[AttackDef {
            label: "club",
            verb: "clubs",
            power_range: (100, 100),
            damage_range: (10, 10),
        }],
    };

    fn fixed_player() -> Player {
        Player::with_attacks(100, vec![SURE_HIT_20])
    }

    #[test]
    fn parse_intent_normalizes_case_and_whitespace() {
        assert_eq!(parse_intent("  ATTACK \n"), TurnIntent::Attack);
        assert_eq!(parse_intent("Run"), TurnIntent::Run);
        assert_eq!(parse_intent("dance"), TurnIntent::Unrecognized);
        assert_eq!(parse_intent(""), TurnIntent::Unrecognized);
    }

    #[test]
    fn three_attacks_defeat_a_50_hp_monster() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut player = fixed_player();
        let mut monster = Monster::from_spec(&BRUTE, &mut rng);
        let mut input = MockInput::new(vec!["attack", "attack", "attack"]);
        let mut output = MockOutput::new();

        let outcome = run_duel(&mut player, &mut monster, &mut rng, &mut input, &mut output);

        assert!(matches!(outcome, Ok(DuelOutcome::Victory)));
        // 50 -> 30 -> 10 -> -10; two retaliations: 100 -> 90 -> 80
        assert_eq!(monster.health(), -10);
        assert_eq!(player.health(), 80);
    }

    #[test]
    fn run_disengages_without_damage() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut player = fixed_player();
        let mut monster = Monster::from_spec(&BRUTE, &mut rng);
        let mut input = MockInput::new(vec!["run"]);
        let mut output = MockOutput::new();

        let outcome = run_duel(&mut player, &mut monster, &mut rng, &mut input, &mut output);

        assert!(matches!(outcome, Ok(DuelOutcome::Disengaged)));
        assert_eq!(player.health(), 100);
        assert_eq!(monster.health(), 50);
    }

    #[test]
    fn unrecognized_input_reprompts_without_a_monster_turn() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut player = fixed_player();
        let mut monster = Monster::from_spec(&BRUTE, &mut rng);
        let mut input = MockInput::new(vec!["dance", "sing", "run"]);
        let mut output = MockOutput::new();

        let outcome = run_duel(&mut player, &mut monster, &mut rng, &mut input, &mut output);

        assert!(matches!(outcome, Ok(DuelOutcome::Disengaged)));
        // Two garbage turns cost the player nothing
        assert_eq!(player.health(), 100);
        assert!(output.saw("You can attack or run."));
    }

    #[test]
    fn outmatched_player_is_defeated() {
        let mut rng = StdRng::seed_from_u64(0);
        let weak_jab = AttackDef {
            label: "jab",
            verb: "jab at",
            power_range: (100, 100),
            damage_range: (5, 5),
        };
        let mut player = Player::with_attacks(25, vec![weak_jab]);
        let mut monster = Monster::from_spec(&BRUTE, &mut rng);
        let mut input = MockInput::new(vec!["attack", "attack", "attack"]);
        let mut output = MockOutput::new();

        let outcome = run_duel(&mut player, &mut monster, &mut rng, &mut input, &mut output);

        // Monster 50 -> 45 -> 40 -> 35; player 25 -> 15 -> 5 -> -5
        assert!(matches!(outcome, Ok(DuelOutcome::Defeat)));
        assert!(!player.is_alive());
        assert!(output.saw("world goes dark"));
    }

    #[test]
    fn decided_duel_returns_without_reading_input() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut player = fixed_player();
        let mut monster = Monster::from_spec(&BRUTE, &mut rng);
        monster.set_health(0);
        // No scripted input: any read would fail the test with an EOF error
        let mut input = MockInput::new(vec![]);
        let mut output = MockOutput::new();

        let outcome = run_duel(&mut player, &mut monster, &mut rng, &mut input, &mut output);

        assert!(matches!(outcome, Ok(DuelOutcome::Victory)));
    }
}
