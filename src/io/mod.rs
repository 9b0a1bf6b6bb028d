//! Input/output abstractions
//!
//! Traits for reading player commands and announcing narrative text.
//! Mock implementations let tests script a whole visit and assert on
//! every line the player would have seen.

use std::io::{self, Write};

/// Trait for reading player input
pub trait InputReader {
    /// Read a line of input from the player with a prompt
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error>;
}

/// Trait for announcing text to the player
pub trait OutputWriter {
    /// Write a message without a newline
    #[allow(dead_code)]
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error> {
        print!("{}> ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input)
    }
}

impl OutputWriter for TerminalIO {
    fn write(&mut self, message: &str) {
        print!("{}", message);
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
