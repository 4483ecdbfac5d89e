//! Sheet parser — one statement per line.
//!
//! A line is one of four things: a comment (first non-space character is
//! `#`), a blank line, a configuration assignment (`BPM 120`,
//! `NAME Ode to Joy`, ...), or a note declaration
//! (`DO4 QUARTER [DOTTED ...]`). Parsing is strictly sequential and stops
//! at the first invalid line; the resulting note order equals source
//! order with comments, blanks, and configuration lines excluded.

use std::str::FromStr;

use crate::error::{ParseError, SheetError, ValidateError};
use crate::note::Note;
use crate::song::{Song, UNKNOWN};

/// Configuration variables a sheet may assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigVar {
    Bpm,
    Name,
    Composer,
    ArrangedBy,
}

impl ConfigVar {
    const NAMES: [&'static str; 4] = ["BPM", "NAME", "COMPOSER", "ARRANGED_BY"];

    /// Whether a first token puts the line in the configuration branch.
    fn is_config(token: &str) -> bool {
        Self::NAMES.contains(&token)
    }
}

impl FromStr for ConfigVar {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BPM" => Ok(ConfigVar::Bpm),
            "NAME" => Ok(ConfigVar::Name),
            "COMPOSER" => Ok(ConfigVar::Composer),
            "ARRANGED_BY" => Ok(ConfigVar::ArrangedBy),
            _ => Err(()),
        }
    }
}

/// Parse a full sheet source into a validated [`Song`].
pub fn parse_sheet(source: &str) -> Result<Song, SheetError> {
    let mut parser = SheetParser::new();
    for (idx, raw) in source.lines().enumerate() {
        parser.parse_line(idx + 1, raw)?;
    }
    Ok(parser.finish()?)
}

struct SheetParser {
    tempo: u32,
    title: String,
    composer: String,
    arranger: String,
    notes: Vec<Note>,
}

impl SheetParser {
    fn new() -> Self {
        SheetParser {
            tempo: 0,
            title: UNKNOWN.to_string(),
            composer: UNKNOWN.to_string(),
            arranger: UNKNOWN.to_string(),
            notes: Vec::new(),
        }
    }

    fn parse_line(&mut self, line: usize, raw: &str) -> Result<(), ParseError> {
        if raw.trim_start().starts_with('#') {
            return Ok(());
        }

        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.is_empty() {
            return Ok(());
        }

        if tokens.len() < 2 {
            return Err(ParseError::MalformedLine {
                line,
                text: raw.to_string(),
            });
        }

        if ConfigVar::is_config(tokens[0]) {
            self.parse_config_line(line, &tokens)
        } else {
            self.parse_note_line(line, raw, &tokens)
        }
    }

    fn parse_config_line(&mut self, line: usize, tokens: &[&str]) -> Result<(), ParseError> {
        // is_config and from_str share the variable list, so the error arm
        // only fires if the two ever diverge.
        let var: ConfigVar = tokens[0].parse().map_err(|_| ParseError::UnknownVariable {
            line,
            name: tokens[0].to_string(),
        })?;

        match var {
            ConfigVar::Bpm => {
                self.tempo = tokens[1].parse().map_err(|_| ParseError::InvalidTempo {
                    line,
                    value: tokens[1].to_string(),
                })?;
            }
            ConfigVar::Name => self.title = tokens[1..].join(" "),
            ConfigVar::Composer => self.composer = tokens[1..].join(" "),
            ConfigVar::ArrangedBy => self.arranger = tokens[1..].join(" "),
        }

        Ok(())
    }

    fn parse_note_line(&mut self, line: usize, raw: &str, tokens: &[&str]) -> Result<(), ParseError> {
        let note = Note::new(tokens[0], tokens[1], &tokens[2..]).map_err(|source| {
            ParseError::Note {
                line,
                text: raw.to_string(),
                source,
            }
        })?;

        self.notes.push(note);
        Ok(())
    }

    fn finish(self) -> Result<Song, ValidateError> {
        Song::from_parts(self.tempo, self.title, self.composer, self.arranger, self.notes)
    }
}
