use rand::rngs::StdRng;
use rand::Rng;

use super::constants::{PLAYER_BASE_ATTACKS, PLAYER_INITIAL_HEALTH};
use super::item::Item;
use super::monster::{AttackDef, AttackOutcome, AttackReport, Monster};

/// The castaway exploring the island.
pub struct Player {
    health: i32,
    attacks: Vec<AttackDef>,
    inventory: Vec<Item>,
}

impl Player {
    pub fn new() -> Self {
        Player {
            health: PLAYER_INITIAL_HEALTH,
            attacks: PLAYER_BASE_ATTACKS.to_vec(),
            inventory: Vec::new(),
        }
    }

    /// A player with a custom health pool and attack roster. Scenario
    /// tests use this with fixed-damage rosters.
    pub fn with_attacks(health: i32, attacks: Vec<AttackDef>) -> Self {
        Player {
            health,
            attacks,
            inventory: Vec::new(),
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.health -= damage;
    }

    /// Strike the monster with one attack drawn uniformly from the roster.
    pub fn attack(&self, target: &mut Monster, rng: &mut StdRng) -> AttackReport {
        let def = self.attacks[rng.gen_range(0..self.attacks.len())];
        let outcome = def.resolve(rng);
        if let AttackOutcome::Hit { damage } = outcome {
            target.take_damage(damage);
        }
        AttackReport {
            attacker: "you".to_string(),
            target: target.name().to_string(),
            verb: def.verb,
            outcome,
        }
    }

    pub fn add_to_inventory(&mut self, item: Item) {
        self.inventory.push(item);
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|i| i.name == name)
    }

    #[cfg(test)]
    pub fn set_health(&mut self, health: i32) {
        self.health = health;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
