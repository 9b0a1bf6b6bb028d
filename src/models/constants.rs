use super::monster::AttackDef;

pub const PLAYER_INITIAL_HEALTH: i32 = 100;
pub const FRAGMENT_COUNT: usize = 4;
pub const FRAGMENT_VALUE: i32 = 5;

pub const RIDDLE_ANSWER: &str = "echo";
pub const RIDDLE_ATTEMPTS: u32 = 3;

/// The castaway's roster. Reward weapons are loot, not stat changes;
/// the player's damage stays fixed for the whole expedition.
pub const PLAYER_BASE_ATTACKS: &[AttackDef] = &[
    AttackDef {
        label: "cutlass",
        verb: "slash",
        power_range: (60, 85),
        damage_range: (8, 18),
    },
    AttackDef {
        label: "boot",
        verb: "kick",
        power_range: (70, 90),
        damage_range: (3, 9),
    },
];
