//! Domain models
//!
//! Pure data structures with minimal logic: items, map fragments, the
//! treasure map, monsters, and the player.

pub mod constants;
pub mod errors;
pub mod fragment;
pub mod item;
pub mod monster;
pub mod player;
pub mod treasure_map;
