//! Game services
//!
//! Business logic for the island: the combat loop, encounters, the
//! riddle gate, the treasure site, and the outer beach loop.

pub mod combat;
pub mod encounter;
pub mod game;
pub mod island;
pub mod puzzle;
pub mod treasure_site;
