// src/input/parser.rs

use serde_yaml;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::DiffusionResult;
use crate::input::InputDeck;

/// Parses the input deck from a YAML file.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML input file.
///
/// # Returns
///
/// * `Ok(InputDeck)` if reading, parsing and validation succeed.
/// * `Err` if an error occurs during file reading, parsing or validation.
pub fn parse_input_deck<P: AsRef<Path>>(file_path: P) -> DiffusionResult<InputDeck> {
    let mut file = File::open(file_path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    parse_input_deck_str(&contents)
}

/// Parses and validates an input deck held in memory.
pub fn parse_input_deck_str(contents: &str) -> DiffusionResult<InputDeck> {
    let input_deck: InputDeck = serde_yaml::from_str(contents)?;
    input_deck.validate()?;
    Ok(input_deck)
}
