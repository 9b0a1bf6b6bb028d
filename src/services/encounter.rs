//! Gated sub-locations
//!
//! Each encounter pairs one monster with one reward set, built from a
//! single data-driven configuration record. The player and the shared
//! treasure map are handed in at entry time, never stored.

use rand::rngs::StdRng;

use crate::io::{InputReader, OutputWriter};
use crate::models::errors::GameResult;
use crate::models::item::Item;
use crate::models::monster::{Monster, MonsterSpec};
use crate::models::player::Player;
use crate::models::treasure_map::TreasureMap;
use crate::services::combat::{run_duel, DuelOutcome};

/// A reward granted on victory.
#[derive(Debug, Clone, Copy)]
pub struct RewardDef {
    pub name: &'static str,
    pub value: i32,
}

/// Everything that distinguishes one sub-location from another.
#[derive(Debug, Clone, Copy)]
pub struct EncounterConfig {
    pub name: &'static str,
    pub arrival: &'static str,
    pub monster: MonsterSpec,
    /// Positional index into the treasure map, in discovery order.
    pub fragment_index: usize,
    pub rewards: &'static [RewardDef],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterState {
    Unvisited,
    Entered,
    Resolved(DuelOutcome),
}

pub struct Encounter {
    config: EncounterConfig,
    monster: Monster,
    state: EncounterState,
}

impl Encounter {
    pub fn new(config: EncounterConfig, rng: &mut StdRng) -> Self {
        let monster = Monster::from_spec(&config.monster, rng);
        Encounter {
            config,
            monster,
            state: EncounterState::Unvisited,
        }
    }

    pub fn name(&self) -> &'static str {
        self.config.name
    }

    pub fn state(&self) -> EncounterState {
        self.state
    }

    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    /// Enter the sub-location and fight its guardian.
    ///
    /// A lair whose duel was already won stays cleared; nothing is fought
    /// or granted again. After a defeat or retreat the duel restarts with
    /// the monster at its current, possibly already-damaged, health.
    pub fn enter(
        &mut self,
        player: &mut Player,
        map: &mut TreasureMap,
        rng: &mut StdRng,
        input: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> GameResult<DuelOutcome> {
        if self.state == EncounterState::Resolved(DuelOutcome::Victory) {
            output.writeln(&format!(
                "The {} is quiet. Nothing stirs where the {} fell.",
                self.config.name,
                self.monster.name()
            ));
            return Ok(DuelOutcome::Victory);
        }

        output.writeln(self.config.arrival);
        output.writeln(&format!(
            "A {} blocks your path. Prepare to fight!",
            self.monster.name()
        ));
        self.state = EncounterState::Entered;

        let outcome = run_duel(player, &mut self.monster, rng, input, output)?;
        if outcome == DuelOutcome::Victory {
            self.grant_rewards(player, map, output);
        }
        self.state = EncounterState::Resolved(outcome);
        Ok(outcome)
    }

    fn grant_rewards(
        &self,
        player: &mut Player,
        map: &mut TreasureMap,
        output: &mut dyn OutputWriter,
    ) {
        if let Some(fragment) = map.fragment_at_mut(self.config.fragment_index) {
            if fragment.find(output) {
                player.add_to_inventory(fragment.as_item());
            }
        }
        for reward in self.config.rewards {
            output.writeln(&format!("You take the {}.", reward.name));
            player.add_to_inventory(Item::new(reward.name, reward.value));
        }
    }
}
