//! Echo Isle
//!
//! A single explorable island for a text adventure: four sub-locations
//! reached from a beach landing, each gated by a turn-based duel against
//! a unique monster. Victories reveal fragments of a treasure map; the
//! complete map unlocks a riddle-sealed hollow and a final boss.
//!
//! # Modules
//!
//! - [`game_engine`] - Expedition state machine (claimed / slain / exploring)
//! - [`models`] - Domain models (fragments, treasure map, monsters, player)
//! - [`services`] - Game services (combat loop, encounters, riddle gate, island)
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation of narrative text
//!
//! # Example
//!
//! ```rust,no_run
//! use echoisle::Expedition;
//!
//! let mut expedition = Expedition::new(42);
//! // Drive visits through expedition.visit(...)
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{Expedition, ExpeditionState};
pub use services::combat::DuelOutcome;
