//! Monsters and attack resolution
//!
//! Attack rosters are declarative tables; power and damage are rolled when
//! an attack resolves, never frozen at construction, so repeated duels get
//! fresh randomness. All health and damage values are integers.

use rand::rngs::StdRng;
use rand::Rng;

use super::player::Player;

/// One entry in an attack roster. `power_range` is the hit chance in
/// percent, itself rolled per attack; `damage_range` is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackDef {
    pub label: &'static str,
    pub verb: &'static str,
    pub power_range: (i32, i32),
    pub damage_range: (i32, i32),
}

/// Declarative monster definition. `health_variance` widens `max_health`
/// by a small random amount at creation.
#[derive(Debug, Clone, Copy)]
pub struct MonsterSpec {
    pub name: &'static str,
    pub base_health: i32,
    pub health_variance: i32,
    pub attacks: &'static [AttackDef],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    Hit { damage: i32 },
    Miss,
}

/// What happened when one attack resolved; consumed by the combat
/// presenter for narration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    pub attacker: String,
    pub target: String,
    pub verb: &'static str,
    pub outcome: AttackOutcome,
}

fn roll(rng: &mut StdRng, (lo, hi): (i32, i32)) -> i32 {
    if lo >= hi {
        lo
    } else {
        rng.gen_range(lo..=hi)
    }
}

impl AttackDef {
    /// Resolve this attack: roll power, test it against a d100, roll
    /// damage on a hit.
    pub fn resolve(&self, rng: &mut StdRng) -> AttackOutcome {
        let power = roll(rng, self.power_range);
        if rng.gen_range(1..=100) <= power {
            AttackOutcome::Hit {
                damage: roll(rng, self.damage_range),
            }
        } else {
            AttackOutcome::Miss
        }
    }
}

/// A single-use encounter guardian.
pub struct Monster {
    name: String,
    health: i32,
    max_health: i32,
    attacks: Vec<AttackDef>,
}

impl Monster {
    pub fn new(name: impl Into<String>, health: i32, attacks: Vec<AttackDef>) -> Self {
        Monster {
            name: name.into(),
            health,
            max_health: health,
            attacks,
        }
    }

    pub fn from_spec(spec: &MonsterSpec, rng: &mut StdRng) -> Self {
        let variance = if spec.health_variance > 0 {
            rng.gen_range(-spec.health_variance..=spec.health_variance)
        } else {
            0
        };
        Monster::new(
            spec.name,
            spec.base_health + variance,
            spec.attacks.to_vec(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.health -= damage;
    }

    /// Retaliate with exactly one attack drawn uniformly from the roster.
    pub fn attack(&self, target: &mut Player, rng: &mut StdRng) -> AttackReport {
        let def = self.attacks[rng.gen_range(0..self.attacks.len())];
        let outcome = def.resolve(rng);
        if let AttackOutcome::Hit { damage } = outcome {
            target.take_damage(damage);
        }
        AttackReport {
            attacker: self.name.clone(),
            target: "you".to_string(),
            verb: def.verb,
            outcome,
        }
    }

    #[cfg(test)]
    pub fn set_health(&mut self, health: i32) {
        self.health = health;
    }
}
