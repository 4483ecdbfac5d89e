//! Song aggregate — global metadata plus the ordered note sequence.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidateError;
use crate::note::Note;

/// Sentinel for metadata the sheet never set.
pub const UNKNOWN: &str = "Unknown";

/// A fully parsed and validated song, ready for encoding.
///
/// Construction goes through [`Song::from_parts`], which enforces the
/// whole-song invariants; there is no way to hold a `Song` with a zero
/// tempo or an empty sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Tempo in beats per minute, always nonzero.
    pub tempo: u32,
    pub title: String,
    pub composer: String,
    pub arranger: String,
    /// Notes in playback order, never empty.
    pub notes: Vec<Note>,
}

impl Song {
    /// Assemble a song from parsed parts, checking the aggregate
    /// invariants. Defaulted metadata is not an error.
    pub fn from_parts(
        tempo: u32,
        title: String,
        composer: String,
        arranger: String,
        notes: Vec<Note>,
    ) -> Result<Song, ValidateError> {
        if tempo == 0 {
            return Err(ValidateError::MissingTempo);
        }
        if notes.is_empty() {
            return Err(ValidateError::EmptySheet);
        }

        Ok(Song {
            tempo,
            title,
            composer,
            arranger,
            notes,
        })
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Song name: {}", self.title)?;
        writeln!(f, "Composer: {}", self.composer)?;
        writeln!(f, "Arranged by: {}", self.arranger)?;
        writeln!(f, "Sheet:")?;
        for note in &self.notes {
            writeln!(f, "{note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter(name: &str) -> Note {
        Note::new(name, "QUARTER", &[]).unwrap()
    }

    #[test]
    fn test_zero_tempo_is_rejected() {
        let result = Song::from_parts(
            0,
            UNKNOWN.into(),
            UNKNOWN.into(),
            UNKNOWN.into(),
            vec![quarter("DO4")],
        );
        match result {
            Err(ValidateError::MissingTempo) => {}
            other => panic!("Expected MissingTempo, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_sheet_is_rejected() {
        let result = Song::from_parts(120, UNKNOWN.into(), UNKNOWN.into(), UNKNOWN.into(), vec![]);
        match result {
            Err(ValidateError::EmptySheet) => {}
            other => panic!("Expected EmptySheet, got {other:?}"),
        }
    }

    #[test]
    fn test_default_metadata_is_not_an_error() {
        let song = Song::from_parts(
            90,
            UNKNOWN.into(),
            UNKNOWN.into(),
            UNKNOWN.into(),
            vec![quarter("LA3")],
        )
        .unwrap();
        assert_eq!(song.title, UNKNOWN);
        assert_eq!(song.composer, UNKNOWN);
        assert_eq!(song.arranger, UNKNOWN);
    }

    #[test]
    fn test_display_lists_metadata_then_notes() {
        let song = Song::from_parts(
            120,
            "Scale".into(),
            "Trad.".into(),
            UNKNOWN.into(),
            vec![quarter("DO4"), quarter("RE4")],
        )
        .unwrap();

        let listing = song.to_string();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines[0], "Song name: Scale");
        assert_eq!(lines[1], "Composer: Trad.");
        assert_eq!(lines[2], "Arranged by: Unknown");
        assert_eq!(lines[3], "Sheet:");
        assert_eq!(lines[4], "Note DO4 with 261.63 Hz and 1 beat(s)");
        assert_eq!(lines.len(), 6);
    }
}
