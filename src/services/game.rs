//! The beach loop
//!
//! The outer command loop: arrive on the beach, pick destinations, check
//! the map, and leave for the ship when done.

use crate::game_engine::{Expedition, ExpeditionState};
use crate::io::{InputReader, OutputWriter, TerminalIO};
use crate::models::errors::GameResult;
use crate::ui::presenters::{IslandPresenter, MapPresenter};

pub struct Game {
    expedition: Expedition,
    io: TerminalIO,
    output: TerminalIO,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Game {
            expedition: Expedition::new(seed),
            io: TerminalIO,
            output: TerminalIO,
        }
    }

    pub fn run(&mut self) -> GameResult<()> {
        let locations = self.expedition.island().location_names();
        IslandPresenter::show_briefing(&locations, &mut self.output);

        loop {
            let line = self.io.read_line("Command")?;
            let line = line.trim().to_lowercase();
            let mut words = line.split_whitespace();

            let result = match (words.next(), words.next()) {
                (Some("go"), Some(destination)) => self
                    .expedition
                    .visit(destination, &mut self.io, &mut self.output)
                    .map(|_| ()),
                (Some("map"), _) => {
                    MapPresenter::show_map_status(self.expedition.island().map(), &mut self.output);
                    Ok(())
                }
                (Some("assemble"), _) => {
                    self.expedition
                        .island()
                        .map()
                        .assemble(&mut self.output);
                    Ok(())
                }
                (Some("south"), _) | (Some("leave"), _) => {
                    self.output.writeln("You row back out to your ship.");
                    break;
                }
                _ => {
                    Self::print_command_menu(&locations, &mut self.output);
                    Ok(())
                }
            };

            // Player-driven errors (unknown destinations) print and continue
            if let Err(e) = result {
                self.output.writeln(&format!("Error: {}", e));
            }

            if let Some(state) = self.expedition.check_expedition_over() {
                match state {
                    ExpeditionState::TreasureClaimed => {
                        IslandPresenter::show_victory(self.expedition.player(), &mut self.output)
                    }
                    ExpeditionState::Slain => IslandPresenter::show_defeat(&mut self.output),
                    ExpeditionState::Exploring => {}
                }
                break;
            }
        }
        Ok(())
    }

    fn print_command_menu(locations: &[&str], output: &mut dyn OutputWriter) {
        output.writeln("   go <place>  - head inland (one of: the list below)");
        for name in locations {
            output.writeln(&format!("      {}", name));
        }
        output.writeln("   map         - look over the fragments you hold");
        output.writeln("   assemble    - try to piece the map together");
        output.writeln("   south       - return to your ship");
    }
}
