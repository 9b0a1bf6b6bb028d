//! Combat system
//!
//! The turn-based duel loop between the player and one monster, plus the
//! turn-intent parser.

mod duel;

pub use duel::{parse_intent, run_duel, DuelOutcome, TurnIntent};
