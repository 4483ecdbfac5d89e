//! Note model — pitch and duration tables plus the alteration engine.
//!
//! A `Note` is built once from its textual parts and is immutable after
//! construction: either every lookup succeeds and the alterations apply
//! cleanly, or construction fails with a typed error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoteError;

/// Frequency ratio of one equal-temperament semitone.
pub const SEMITONE_RATIO: f64 = 1.059463;

/// Pitch identifiers across three octaves, plus a silent rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pitch {
    Do2,
    Re2,
    Mi2,
    Fa2,
    Sol2,
    La2,
    Si2,
    Do3,
    Re3,
    Mi3,
    Fa3,
    Sol3,
    La3,
    Si3,
    Do4,
    Re4,
    Mi4,
    Fa4,
    Sol4,
    La4,
    Si4,
    Rest,
}

impl Pitch {
    /// Base frequency in hertz. A rest is silent.
    pub fn frequency(self) -> f64 {
        match self {
            Pitch::Do2 => 65.41,
            Pitch::Re2 => 73.42,
            Pitch::Mi2 => 82.41,
            Pitch::Fa2 => 87.31,
            Pitch::Sol2 => 98.00,
            Pitch::La2 => 110.00,
            Pitch::Si2 => 123.47,
            Pitch::Do3 => 130.81,
            Pitch::Re3 => 146.83,
            Pitch::Mi3 => 164.81,
            Pitch::Fa3 => 174.61,
            Pitch::Sol3 => 196.00,
            Pitch::La3 => 220.00,
            Pitch::Si3 => 246.94,
            Pitch::Do4 => 261.63,
            Pitch::Re4 => 293.66,
            Pitch::Mi4 => 329.63,
            Pitch::Fa4 => 349.23,
            Pitch::Sol4 => 392.0,
            Pitch::La4 => 440.0,
            Pitch::Si4 => 493.88,
            Pitch::Rest => 0.0,
        }
    }

    /// The sheet-file spelling of this pitch.
    pub fn as_str(self) -> &'static str {
        match self {
            Pitch::Do2 => "DO2",
            Pitch::Re2 => "RE2",
            Pitch::Mi2 => "MI2",
            Pitch::Fa2 => "FA2",
            Pitch::Sol2 => "SOL2",
            Pitch::La2 => "LA2",
            Pitch::Si2 => "SI2",
            Pitch::Do3 => "DO3",
            Pitch::Re3 => "RE3",
            Pitch::Mi3 => "MI3",
            Pitch::Fa3 => "FA3",
            Pitch::Sol3 => "SOL3",
            Pitch::La3 => "LA3",
            Pitch::Si3 => "SI3",
            Pitch::Do4 => "DO4",
            Pitch::Re4 => "RE4",
            Pitch::Mi4 => "MI4",
            Pitch::Fa4 => "FA4",
            Pitch::Sol4 => "SOL4",
            Pitch::La4 => "LA4",
            Pitch::Si4 => "SI4",
            Pitch::Rest => "REST",
        }
    }
}

impl FromStr for Pitch {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DO2" => Ok(Pitch::Do2),
            "RE2" => Ok(Pitch::Re2),
            "MI2" => Ok(Pitch::Mi2),
            "FA2" => Ok(Pitch::Fa2),
            "SOL2" => Ok(Pitch::Sol2),
            "LA2" => Ok(Pitch::La2),
            "SI2" => Ok(Pitch::Si2),
            "DO3" => Ok(Pitch::Do3),
            "RE3" => Ok(Pitch::Re3),
            "MI3" => Ok(Pitch::Mi3),
            "FA3" => Ok(Pitch::Fa3),
            "SOL3" => Ok(Pitch::Sol3),
            "LA3" => Ok(Pitch::La3),
            "SI3" => Ok(Pitch::Si3),
            "DO4" => Ok(Pitch::Do4),
            "RE4" => Ok(Pitch::Re4),
            "MI4" => Ok(Pitch::Mi4),
            "FA4" => Ok(Pitch::Fa4),
            "SOL4" => Ok(Pitch::Sol4),
            "LA4" => Ok(Pitch::La4),
            "SI4" => Ok(Pitch::Si4),
            "REST" => Ok(Pitch::Rest),
            _ => Err(NoteError::UnknownPitch(s.to_string())),
        }
    }
}

/// Note duration classes, in beats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Duration {
    Whole,
    Half,
    Quarter,
    Eighth,
}

impl Duration {
    pub fn beats(self) -> f64 {
        match self {
            Duration::Whole => 4.0,
            Duration::Half => 2.0,
            Duration::Quarter => 1.0,
            Duration::Eighth => 0.5,
        }
    }
}

impl FromStr for Duration {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WHOLE" => Ok(Duration::Whole),
            "HALF" => Ok(Duration::Half),
            "QUARTER" => Ok(Duration::Quarter),
            "EIGHTH" => Ok(Duration::Eighth),
            _ => Err(NoteError::UnknownDuration(s.to_string())),
        }
    }
}

/// A named modifier applied to a note at construction time.
///
/// Alterations are order-sensitive only in that repeats of the same kind
/// compound; `Dotted` touches beats while the pitch alterations touch
/// frequency, so mixing kinds commutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alteration {
    /// Lengthen by half the current duration.
    Dotted,
    /// Raise the pitch one semitone.
    Sharpened,
    /// Lower the pitch one semitone.
    Flattened,
}

impl FromStr for Alteration {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DOTTED" => Ok(Alteration::Dotted),
            "SHARPENED" => Ok(Alteration::Sharpened),
            "FLATTENED" => Ok(Alteration::Flattened),
            _ => Err(NoteError::UnknownAlteration(s.to_string())),
        }
    }
}

/// One note of the sheet: resolved frequency and duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub pitch: Pitch,
    /// Frequency in hertz after alterations; 0 for a rest.
    pub frequency: f64,
    /// Duration in beats after alterations; always positive.
    pub beats: f64,
}

impl Note {
    /// Build a note from its sheet-file tokens. Fails on the first token
    /// that is not in the pitch, duration, or alteration tables.
    pub fn new(name: &str, duration: &str, alterations: &[&str]) -> Result<Note, NoteError> {
        let pitch: Pitch = name.parse()?;
        let duration: Duration = duration.parse()?;

        let mut frequency = pitch.frequency();
        let mut beats = duration.beats();

        for alt in alterations {
            match alt.parse::<Alteration>()? {
                Alteration::Dotted => beats += beats * 0.5,
                Alteration::Sharpened => frequency *= SEMITONE_RATIO,
                Alteration::Flattened => frequency /= SEMITONE_RATIO,
            }
        }

        Ok(Note {
            pitch,
            frequency,
            beats,
        })
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Note {} with {} Hz and {} beat(s)",
            self.pitch.as_str(),
            self.frequency,
            self.beats
        )
    }
}
