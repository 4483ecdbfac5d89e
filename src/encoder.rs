//! Binary encoder — fixed-width record layout for the playback device.
//!
//! Layout, native byte order throughout:
//!
//! ```text
//! struct Header     { u32 tempo; u32 note_count; }
//! struct NoteRecord { u32 frequency_hz; u32 beats_x100; }
//! ```
//!
//! followed by `note_count` records in playback order. Frequencies are
//! rounded up as-is; beat counts are scaled by 100 before rounding up so
//! that quarter and eighth notes never collapse to the same integer.
//!
//! The encoder trusts an already-validated [`Song`] and performs no
//! checks of its own.

use std::io::{self, Write};

use byteorder::{NativeEndian, WriteBytesExt};

use crate::note::Note;
use crate::song::Song;

/// Beats are multiplied by this before the integer round-up.
pub const DURATION_SCALE_FACTOR: f64 = 100.0;

/// Header size in bytes.
pub const HEADER_SIZE: usize = 8;

/// Size of one encoded note in bytes.
pub const NOTE_RECORD_SIZE: usize = 8;

/// Write the encoded song to a writer.
pub fn write_song<W: Write>(song: &Song, writer: &mut W) -> io::Result<()> {
    writer.write_u32::<NativeEndian>(song.tempo)?;
    writer.write_u32::<NativeEndian>(song.notes.len() as u32)?;

    for note in &song.notes {
        write_note(note, writer)?;
    }

    Ok(())
}

/// Encode the song to a byte vector.
pub fn encode(song: &Song) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_SIZE + NOTE_RECORD_SIZE * song.notes.len());
    write_song(song, &mut buffer)?;
    Ok(buffer)
}

fn write_note<W: Write>(note: &Note, writer: &mut W) -> io::Result<()> {
    writer.write_u32::<NativeEndian>(note.frequency.ceil() as u32)?;
    writer.write_u32::<NativeEndian>((note.beats * DURATION_SCALE_FACTOR).ceil() as u32)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_sheet;
    use pretty_assertions::assert_eq;

    fn read_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_ne_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_header_and_record_layout() {
        let song = parse_sheet("BPM 120\nDO4 QUARTER\nREST HALF\n").unwrap();
        let bytes = encode(&song).unwrap();

        assert_eq!(bytes.len(), 24);
        assert_eq!(read_u32(&bytes, 0), 120); // tempo
        assert_eq!(read_u32(&bytes, 4), 2); // note count
        assert_eq!(read_u32(&bytes, 8), 262); // ceil(261.63)
        assert_eq!(read_u32(&bytes, 12), 100); // ceil(1.0 * 100)
        assert_eq!(read_u32(&bytes, 16), 0); // rest is silent
        assert_eq!(read_u32(&bytes, 20), 200); // ceil(2.0 * 100)
    }

    #[test]
    fn test_eighth_and_quarter_never_collapse() {
        let song = parse_sheet("BPM 60\nLA4 QUARTER\nLA4 EIGHTH\n").unwrap();
        let bytes = encode(&song).unwrap();

        assert_eq!(read_u32(&bytes, 12), 100);
        assert_eq!(read_u32(&bytes, 20), 50);
    }

    #[test]
    fn test_sharpened_frequency_rounds_up_deterministically() {
        let song = parse_sheet("BPM 60\nDO4 QUARTER SHARPENED\n").unwrap();
        let bytes = encode(&song).unwrap();

        let expected = (261.63_f64 * crate::note::SEMITONE_RATIO).ceil() as u32;
        assert_eq!(read_u32(&bytes, 8), expected);
    }

    #[test]
    fn test_dotted_eighth_rounds_up() {
        // 0.5 * 1.5 * 100 = 75, exact
        let song = parse_sheet("BPM 60\nSI3 EIGHTH DOTTED\n").unwrap();
        let bytes = encode(&song).unwrap();
        assert_eq!(read_u32(&bytes, 12), 75);
    }

    #[test]
    fn test_total_size_follows_note_count() {
        let song = parse_sheet("BPM 100\nDO2 WHOLE\nRE2 HALF\nMI2 QUARTER\nFA2 EIGHTH\n").unwrap();
        let bytes = encode(&song).unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE + NOTE_RECORD_SIZE * 4);
    }

    #[test]
    fn test_encoding_is_idempotent_over_reparse() {
        let source = "# anthem\nBPM 120\nNAME Fragment\nSOL3 HALF DOTTED\nREST QUARTER\nSOL3 EIGHTH\n";
        let a = encode(&parse_sheet(source).unwrap()).unwrap();
        let b = encode(&parse_sheet(source).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_write_song_to_file_sink() {
        let song = parse_sheet("BPM 120\nDO4 QUARTER\nREST HALF\n").unwrap();

        let mut sink = tempfile::NamedTempFile::new().unwrap();
        write_song(&song, &mut sink).unwrap();

        let bytes = std::fs::read(sink.path()).unwrap();
        assert_eq!(bytes, encode(&song).unwrap());
    }

    #[test]
    fn test_write_song_matches_encode() {
        let song = parse_sheet("BPM 80\nMI4 QUARTER\n").unwrap();
        let mut via_writer = Vec::new();
        write_song(&song, &mut via_writer).unwrap();
        assert_eq!(via_writer, encode(&song).unwrap());
    }
}
