use crate::io::OutputWriter;
use crate::models::monster::{AttackOutcome, AttackReport, Monster};
use crate::models::player::Player;
use crate::models::treasure_map::TreasureMap;

pub struct CombatPresenter;

impl CombatPresenter {
    pub fn show_player_attack(report: &AttackReport, output: &mut dyn OutputWriter) {
        match report.outcome {
            AttackOutcome::Hit { damage } => output.writeln(&format!(
                "You {} the {} for {} damage.",
                report.verb, report.target, damage
            )),
            AttackOutcome::Miss => output.writeln(&format!(
                "You {} at the {} and miss.",
                report.verb, report.target
            )),
        }
    }

    pub fn show_monster_attack(report: &AttackReport, output: &mut dyn OutputWriter) {
        match report.outcome {
            AttackOutcome::Hit { damage } => output.writeln(&format!(
                "The {} {} you for {} damage.",
                report.attacker, report.verb, damage
            )),
            AttackOutcome::Miss => output.writeln(&format!(
                "The {} lashes out, but you dodge aside.",
                report.attacker
            )),
        }
    }

    pub fn show_standing(player: &Player, monster: &Monster, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "   (you: {} hp, {}: {} hp)",
            player.health().max(0),
            monster.name(),
            monster.health().max(0)
        ));
    }

    pub fn show_monster_down(name: &str, output: &mut dyn OutputWriter) {
        output.writeln(&format!("The {} collapses. The way is clear.", name));
    }

    pub fn show_player_down(output: &mut dyn OutputWriter) {
        output.writeln("Your legs give out and the world goes dark.");
    }

    pub fn show_disengage(name: &str, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "You break off and retreat before the {} can follow.",
            name
        ));
    }
}

pub struct MapPresenter;

impl MapPresenter {
    pub fn show_map_status(map: &TreasureMap, output: &mut dyn OutputWriter) {
        output.writeln("Your treasure map so far:");
        for fragment in map.fragments() {
            let mark = if fragment.is_found() { "x" } else { " " };
            output.writeln(&format!(
                "   [{}] fragment {}: {}",
                mark,
                fragment.id(),
                fragment.description()
            ));
        }
    }
}

pub struct IslandPresenter;

impl IslandPresenter {
    pub fn show_briefing(locations: &[&str], output: &mut dyn OutputWriter) {
        output.writeln("You wade ashore on Echo Isle. Your ship rides at anchor in a small bay to the south.");
        output.writeln(&format!(
            "Paths lead inland toward the {}.",
            locations.join(", the ")
        ));
        output.writeln("Rumor holds that four map fragments mark the way to the island's treasure.");
    }

    pub fn show_victory(player: &Player, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("The treasure of Echo Isle is yours.");
        let haul: i32 = player.inventory().iter().map(|i| i.value).sum();
        output.writeln(&format!("Your haul is worth {} doubloons.", haul));
    }

    pub fn show_defeat(output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("Echo Isle keeps its treasure, and now it keeps you too.");
    }
}
