//! The island
//!
//! Owns the four gated sub-locations, the treasure site, the shared
//! treasure map, and the expedition's RNG. Resolves destination names
//! and enforces the map-completeness gate on the treasure site.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::io::{InputReader, OutputWriter};
use crate::models::errors::{GameError, GameResult};
use crate::models::monster::{AttackDef, MonsterSpec};
use crate::models::player::Player;
use crate::models::treasure_map::TreasureMap;
use crate::services::combat::DuelOutcome;
use crate::services::encounter::{Encounter, EncounterConfig, RewardDef};
use crate::services::treasure_site::TreasureSite;

pub const TREASURE_SITE_NAME: &str = "hollow";

const CAVE_ATTACKS: &[AttackDef] = &[
    AttackDef {
        label: "claw",
        verb: "rakes",
        power_range: (35, 50),
        damage_range: (5, 15),
    },
    AttackDef {
        label: "bite",
        verb: "bites",
        power_range: (40, 55),
        damage_range: (3, 10),
    },
];

const CLIFF_ATTACKS: &[AttackDef] = &[
    AttackDef {
        label: "slash 1",
        verb: "slashes",
        power_range: (35, 50),
        damage_range: (5, 15),
    },
    AttackDef {
        label: "slash 2",
        verb: "slashes",
        power_range: (35, 50),
        damage_range: (1, 10),
    },
    AttackDef {
        label: "shank",
        verb: "shanks",
        power_range: (35, 50),
        damage_range: (1, 10),
    },
];

const JUNGLE_ATTACKS: &[AttackDef] = &[
    AttackDef {
        label: "pounce",
        verb: "pounces on",
        power_range: (40, 60),
        damage_range: (6, 14),
    },
    AttackDef {
        label: "claw",
        verb: "claws",
        power_range: (45, 60),
        damage_range: (3, 9),
    },
];

const LAGOON_ATTACKS: &[AttackDef] = &[
    AttackDef {
        label: "coil",
        verb: "coils around",
        power_range: (35, 55),
        damage_range: (7, 16),
    },
    AttackDef {
        label: "lash",
        verb: "lashes",
        power_range: (40, 55),
        damage_range: (2, 8),
    },
];

/// The four gated sub-locations, in the discovery order their fragment
/// indices encode (north, south, east, west).
const ENCOUNTERS: [EncounterConfig; 4] = [
    EncounterConfig {
        name: "cave",
        arrival: "You enter a dark cave. Water drips somewhere far overhead.",
        monster: MonsterSpec {
            name: "cave horror",
            base_health: 50,
            health_variance: 5,
            attacks: CAVE_ATTACKS,
        },
        fragment_index: 0,
        rewards: &[
            RewardDef {
                name: "rusted cutlass",
                value: 15,
            },
            RewardDef {
                name: "hide buckler",
                value: 10,
            },
        ],
    },
    EncounterConfig {
        name: "cliff",
        arrival: "You climb a wind-scoured cliff path above the breakers.",
        monster: MonsterSpec {
            name: "skeletal deckhand",
            base_health: 75,
            health_variance: 10,
            attacks: CLIFF_ATTACKS,
        },
        fragment_index: 1,
        rewards: &[],
    },
    EncounterConfig {
        name: "jungle",
        arrival: "You push into dense jungle. The bird calls stop all at once.",
        monster: MonsterSpec {
            name: "shadow panther",
            base_health: 55,
            health_variance: 5,
            attacks: JUNGLE_ATTACKS,
        },
        fragment_index: 2,
        rewards: &[
            RewardDef {
                name: "boarding axe",
                value: 20,
            },
            RewardDef {
                name: "tortoiseshell cuirass",
                value: 25,
            },
        ],
    },
    EncounterConfig {
        name: "lagoon",
        arrival: "You wade into a still lagoon. Something long moves under the surface.",
        monster: MonsterSpec {
            name: "lagoon serpent",
            base_health: 70,
            health_variance: 10,
            attacks: LAGOON_ATTACKS,
        },
        fragment_index: 3,
        rewards: &[],
    },
];

pub struct Island {
    encounters: Vec<Encounter>,
    treasure_site: TreasureSite,
    map: TreasureMap,
    rng: StdRng,
}

impl Island {
    /// Build the island from a seed. Same seed, same monsters.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let encounters = ENCOUNTERS
            .iter()
            .map(|config| Encounter::new(*config, &mut rng))
            .collect();
        let treasure_site = TreasureSite::new(&mut rng);
        Island {
            encounters,
            treasure_site,
            map: TreasureMap::new(),
            rng,
        }
    }

    pub fn map(&self) -> &TreasureMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut TreasureMap {
        &mut self.map
    }

    pub fn encounters(&self) -> &[Encounter] {
        &self.encounters
    }

    pub fn treasure_claimed(&self) -> bool {
        self.treasure_site.is_claimed()
    }

    /// Every destination the beach paths lead to, treasure site last.
    pub fn location_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.encounters.iter().map(|e| e.name()).collect();
        names.push(TREASURE_SITE_NAME);
        names
    }

    /// Travel to a named sub-location with the given player.
    ///
    /// The treasure site stays barred until the map is complete; that
    /// gate lives here, not in the site itself. Returns `None` when no
    /// duel took place (barred site, failed riddle, cleared hollow).
    pub fn visit(
        &mut self,
        name: &str,
        player: &mut Player,
        input: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> GameResult<Option<DuelOutcome>> {
        let Island {
            encounters,
            treasure_site,
            map,
            rng,
        } = self;

        if name == TREASURE_SITE_NAME {
            if !map.is_complete() {
                output.writeln(
                    "You wander inland but the trails loop back on themselves. \
Without the full map you cannot find the hollow.",
                );
                return Ok(None);
            }
            return treasure_site.enter(player, rng, input, output);
        }

        match encounters.iter_mut().find(|e| e.name() == name) {
            Some(encounter) => encounter.enter(player, map, rng, input, output).map(Some),
            None => Err(GameError::InvalidInput(format!(
                "no path leads to '{}'",
                name
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::{MockInput, MockOutput};
    use crate::models::constants::FRAGMENT_COUNT;

    #[test]
    fn island_has_four_encounters_and_a_site() {
        let island = Island::new(0);
        assert_eq!(island.encounters().len(), 4);
        assert_eq!(
            island.location_names(),
            vec!["cave", "cliff", "jungle", "lagoon", TREASURE_SITE_NAME]
        );
        assert!(!island.treasure_claimed());
    }

    #[test]
    fn fragment_indices_cover_the_whole_map() {
        let mut seen = [false; FRAGMENT_COUNT];
        for config in &ENCOUNTERS {
            seen[config.fragment_index] = true;
        }
        assert!(seen.iter().all(|s| *s), "every fragment needs an encounter");
    }

    #[test]
    fn same_seed_spawns_identical_monsters() {
        let a = Island::new(99);
        let b = Island::new(99);
        for (x, y) in a.encounters().iter().zip(b.encounters()) {
            assert_eq!(x.monster().max_health(), y.monster().max_health());
        }
    }

    #[test]
    fn unknown_destination_is_an_error() {
        let mut island = Island::new(0);
        let mut player = Player::new();
        let mut input = MockInput::new(vec![]);
        let mut output = MockOutput::new();

        let result = island.visit("volcano", &mut player, &mut input, &mut output);
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }

    #[test]
    fn treasure_site_is_barred_until_map_complete() {
        let mut island = Island::new(0);
        let mut player = Player::new();
        let mut input = MockInput::new(vec![]);
        let mut output = MockOutput::new();

        let result = island
            .visit(TREASURE_SITE_NAME, &mut player, &mut input, &mut output)
            .unwrap();

        assert!(result.is_none());
        assert!(output.saw("cannot find the hollow"));
    }

    #[test]
    fn complete_map_opens_the_way_to_the_riddle() {
        let mut island = Island::new(0);
        let mut player = Player::new();
        let mut scratch = MockOutput::new();
        for i in 0..FRAGMENT_COUNT {
            island.map_mut().fragment_at_mut(i).unwrap().find(&mut scratch);
        }

        // Fail the riddle so no duel starts; reaching it proves the gate opened
        let mut input = MockInput::new(vec!["wind", "sea", "gull"]);
        let mut output = MockOutput::new();
        let result = island
            .visit(TREASURE_SITE_NAME, &mut player, &mut input, &mut output)
            .unwrap();

        assert!(result.is_none());
        assert!(output.saw("sealed stone door"));
    }
}
