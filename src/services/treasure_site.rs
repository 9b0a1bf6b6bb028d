//! The treasure site: riddle gate, then the final boss.

use rand::rngs::StdRng;

use crate::io::{InputReader, OutputWriter};
use crate::models::errors::GameResult;
use crate::models::item::Item;
use crate::models::monster::{AttackDef, Monster, MonsterSpec};
use crate::models::player::Player;
use crate::services::combat::{run_duel, DuelOutcome};
use crate::services::encounter::RewardDef;
use crate::services::puzzle::solve_puzzle;

const BOSS_ATTACKS: &[AttackDef] = &[
    AttackDef {
        label: "saber",
        verb: "runs his spectral saber through",
        power_range: (40, 60),
        damage_range: (10, 20),
    },
    AttackDef {
        label: "grasp",
        verb: "clutches",
        power_range: (50, 70),
        damage_range: (5, 12),
    },
    AttackDef {
        label: "wail",
        verb: "rattles",
        power_range: (35, 55),
        damage_range: (8, 16),
    },
];

const BOSS: MonsterSpec = MonsterSpec {
    name: "revenant captain",
    base_health: 90,
    health_variance: 10,
    attacks: BOSS_ATTACKS,
};

/// The loot behind the door. Fixed; the site grants no map fragment.
pub const SITE_LOOT: &[RewardDef] = &[
    RewardDef {
        name: "golden cutlass",
        value: 100,
    },
    RewardDef {
        name: "chest of doubloons",
        value: 150,
    },
];

pub struct TreasureSite {
    boss: Monster,
    claimed: bool,
}

impl TreasureSite {
    pub fn new(rng: &mut StdRng) -> Self {
        TreasureSite {
            boss: Monster::from_spec(&BOSS, rng),
            claimed: false,
        }
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    pub fn boss(&self) -> &Monster {
        &self.boss
    }

    /// Enter the hollow. The riddle gate comes first; exhausting it ends
    /// the visit without combat, and a later visit gets a fresh three
    /// attempts. Solving it proceeds unconditionally to the boss duel.
    pub fn enter(
        &mut self,
        player: &mut Player,
        rng: &mut StdRng,
        input: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> GameResult<Option<DuelOutcome>> {
        if self.claimed {
            output.writeln("The hollow is empty. You already carried the treasure out.");
            return Ok(None);
        }

        output.writeln(
            "The assembled map leads you to a hollow at the heart of the island, \
walled by a sealed stone door.",
        );

        if !solve_puzzle(input, output)? {
            return Ok(None);
        }

        let outcome = self.fight_final_boss(player, rng, input, output)?;
        Ok(Some(outcome))
    }

    fn fight_final_boss(
        &mut self,
        player: &mut Player,
        rng: &mut StdRng,
        input: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> GameResult<DuelOutcome> {
        output.writeln(&format!(
            "Beyond the door, a {} rises from the treasure pile.",
            self.boss.name()
        ));

        let outcome = run_duel(player, &mut self.boss, rng, input, output)?;
        if outcome == DuelOutcome::Victory {
            for reward in SITE_LOOT {
                output.writeln(&format!("You take the {}.", reward.name));
                player.add_to_inventory(Item::new(reward.name, reward.value));
            }
            self.claimed = true;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::{MockInput, MockOutput};
    use rand::SeedableRng;

    fn sure_hit_player() -> Player {
        Player::with_attacks(
            1000,
            vec![AttackDef {
                label: "thrust",
                verb: "thrust at",
                power_range: (100, 100),
                damage_range: (50, 50),
            }],
        )
    }

    #[test]
    fn riddle_failure_skips_combat() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut site = TreasureSite::new(&mut rng);
        let mut player = sure_hit_player();
        let mut input = MockInput::new(vec!["wind", "sea", "gull"]);
        let mut output = MockOutput::new();

        let result = site
            .enter(&mut player, &mut rng, &mut input, &mut output)
            .unwrap();

        assert!(result.is_none());
        assert!(!site.is_claimed());
        assert_eq!(site.boss().health(), site.boss().max_health());
        assert!(player.inventory().is_empty());
    }

    #[test]
    fn boss_victory_claims_fixed_loot() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut site = TreasureSite::new(&mut rng);
        let mut player = sure_hit_player();
        // 50 damage per hit finishes a <=100 hp boss in two or three turns
        let mut input = MockInput::new(vec!["echo", "attack", "attack", "attack"]);
        let mut output = MockOutput::new();

        let result = site
            .enter(&mut player, &mut rng, &mut input, &mut output)
            .unwrap();

        assert_eq!(result, Some(DuelOutcome::Victory));
        assert!(site.is_claimed());
        assert!(player.has_item("golden cutlass"));
        assert!(player.has_item("chest of doubloons"));
    }

    #[test]
    fn claimed_site_has_nothing_left() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut site = TreasureSite::new(&mut rng);
        let mut player = sure_hit_player();

        let mut input = MockInput::new(vec!["echo", "attack", "attack", "attack"]);
        let mut output = MockOutput::new();
        site.enter(&mut player, &mut rng, &mut input, &mut output)
            .unwrap();
        let haul = player.inventory().len();

        let mut input = MockInput::new(vec![]);
        let mut output = MockOutput::new();
        let result = site
            .enter(&mut player, &mut rng, &mut input, &mut output)
            .unwrap();

        assert!(result.is_none());
        assert_eq!(player.inventory().len(), haul);
        assert!(output.saw("empty"));
    }

    #[test]
    fn riddle_can_be_retried_on_a_later_visit() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut site = TreasureSite::new(&mut rng);
        let mut player = sure_hit_player();

        let mut input = MockInput::new(vec!["wind", "sea", "gull"]);
        let mut output = MockOutput::new();
        assert!(site
            .enter(&mut player, &mut rng, &mut input, &mut output)
            .unwrap()
            .is_none());

        let mut input = MockInput::new(vec!["echo", "run"]);
        let mut output = MockOutput::new();
        let result = site
            .enter(&mut player, &mut rng, &mut input, &mut output)
            .unwrap();

        assert_eq!(result, Some(DuelOutcome::Disengaged));
    }
}
