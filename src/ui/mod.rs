//! User interface and presentation
//!
//! Presenters format narrative text for the player, keeping wording out
//! of the combat and island logic.

pub mod presenters;
