//! The riddle gate before the final boss.

use crate::io::{InputReader, OutputWriter};
use crate::models::constants::{RIDDLE_ANSWER, RIDDLE_ATTEMPTS};
use crate::models::errors::GameResult;

const RIDDLE: &str = "I speak without a mouth and hear without ears. \
I have no body, but I come alive with wind. What am I?";

/// Pose the riddle and consume up to three attempts. The answer is
/// matched case-insensitively with surrounding whitespace ignored.
/// Exhaustion is a normal failure, not an error.
pub fn solve_puzzle(
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<bool> {
    output.writeln("A voice rolls out of the sealed stone door:");
    output.writeln(&format!("\"{}\"", RIDDLE));

    let mut attempts = RIDDLE_ATTEMPTS;
    while attempts > 0 {
        let answer = input.read_line("Your answer")?;
        attempts -= 1;
        if answer.trim().eq_ignore_ascii_case(RIDDLE_ANSWER) {
            output.writeln("The voice repeats your answer back, fainter each time, and the door grinds open.");
            return Ok(true);
        }
        if attempts > 0 {
            output.writeln(&format!(
                "The door does not move. ({} attempt(s) left)",
                attempts
            ));
        }
    }

    output.writeln("The voice falls silent. The door stays sealed.");
    Ok(false)
}
