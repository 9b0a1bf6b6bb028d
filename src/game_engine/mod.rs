//! Expedition state machine
//!
//! Tracks the overall outcome of a visit to the island. The Expedition
//! owns the Island and the Player and reports when the trip is decided:
//! the treasure claimed, or the player slain.

use crate::io::{InputReader, OutputWriter};
use crate::models::errors::GameResult;
use crate::models::player::Player;
use crate::services::combat::DuelOutcome;
use crate::services::island::Island;

pub struct Expedition {
    island: Island,
    player: Player,
    state: ExpeditionState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpeditionState {
    Exploring,
    TreasureClaimed,
    Slain,
}

impl Expedition {
    /// A fresh expedition with a seeded island and a new player.
    pub fn new(seed: u64) -> Self {
        Expedition {
            island: Island::new(seed),
            player: Player::new(),
            state: ExpeditionState::Exploring,
        }
    }

    pub fn island(&self) -> &Island {
        &self.island
    }

    pub fn island_mut(&mut self) -> &mut Island {
        &mut self.island
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn state(&self) -> &ExpeditionState {
        &self.state
    }

    /// Travel to a sub-location with the expedition's player.
    pub fn visit(
        &mut self,
        name: &str,
        input: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> GameResult<Option<DuelOutcome>> {
        self.island.visit(name, &mut self.player, input, output)
    }

    /// Check whether the expedition is decided and update the state.
    ///
    /// Returns `Some(state)` once the treasure has been claimed or the
    /// player's health has reached zero, and is stable across repeated
    /// calls; `None` while exploration continues.
    pub fn check_expedition_over(&mut self) -> Option<ExpeditionState> {
        if self.state != ExpeditionState::Exploring {
            return Some(self.state.clone());
        }

        if self.island.treasure_claimed() {
            self.state = ExpeditionState::TreasureClaimed;
            return Some(self.state.clone());
        }

        if !self.player.is_alive() {
            self.state = ExpeditionState::Slain;
            return Some(self.state.clone());
        }

        None
    }
}
