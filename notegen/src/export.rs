// JSON export of generated sequences.
//
// Serializes one generation run to a flat JSON document: the run
// parameters, a note count, and the note list. Each note record carries
// the derived display name and frequency alongside the stored fields, so
// a consumer can drive a synth or a display without redoing the pitch
// math.
//
// Uses `serde_json` for writing. Document construction is separate from
// file IO; only the document builder is exercised by tests.

use crate::note::Note;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One exported note, with derived fields materialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRecord {
    pub pitch: i32,
    pub velocity: f64,
    pub start_time: f64,
    pub duration: f64,
    pub octave: i32,
    pub note_name: String,
    pub frequency: f64,
}

impl NoteRecord {
    fn from_note(note: &Note) -> Self {
        NoteRecord {
            pitch: note.pitch,
            velocity: note.velocity,
            start_time: note.start_time,
            duration: note.duration,
            octave: note.octave,
            note_name: note.note_name(),
            frequency: note.frequency(),
        }
    }
}

/// The full document for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub style: String,
    pub tempo: f64,
    pub duration: f64,
    pub note_count: usize,
    pub notes: Vec<NoteRecord>,
}

/// Build the export document for a run.
pub fn notes_to_document(
    style: &str,
    tempo: f64,
    duration: f64,
    notes: &[Note],
) -> ExportDocument {
    ExportDocument {
        style: style.to_string(),
        tempo,
        duration,
        note_count: notes.len(),
        notes: notes.iter().map(NoteRecord::from_note).collect(),
    }
}

/// Serialize a run to pretty-printed JSON and write it to a file.
pub fn write_json(
    style: &str,
    tempo: f64,
    duration: f64,
    notes: &[Note],
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = notes_to_document(style, tempo, duration, notes);
    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::MusicGenerator;

    #[test]
    fn test_document_mirrors_notes() {
        let generator = MusicGenerator::seeded(5);
        let notes = generator.generate("jazz", 120.0, 10.0).unwrap();
        let document = notes_to_document("jazz", 120.0, 10.0, &notes);

        assert_eq!(document.style, "jazz");
        assert_eq!(document.tempo, 120.0);
        assert_eq!(document.duration, 10.0);
        assert_eq!(document.note_count, notes.len());
        assert_eq!(document.notes.len(), notes.len());

        for (record, note) in document.notes.iter().zip(&notes) {
            assert_eq!(record.pitch, note.pitch);
            assert_eq!(record.velocity, note.velocity);
            assert_eq!(record.start_time, note.start_time);
            assert_eq!(record.duration, note.duration);
            assert_eq!(record.octave, note.octave);
            assert_eq!(record.note_name, note.note_name());
            assert_eq!(record.frequency, note.frequency());
        }
    }

    #[test]
    fn test_empty_run_exports_empty_list() {
        let document = notes_to_document("ambient", 120.0, 0.0, &[]);
        assert_eq!(document.note_count, 0);
        assert!(document.notes.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let generator = MusicGenerator::seeded(5);
        let notes = generator.generate("rock", 120.0, 10.0).unwrap();
        let document = notes_to_document("rock", 120.0, 10.0, &notes);
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string_pretty(&document).unwrap()).unwrap();

        assert_eq!(value["style"], "rock");
        assert_eq!(value["note_count"], notes.len());
        let first = &value["notes"][0];
        for field in [
            "pitch",
            "velocity",
            "start_time",
            "duration",
            "octave",
            "note_name",
            "frequency",
        ] {
            assert!(!first[field].is_null(), "missing field {field}");
        }
    }

    #[test]
    fn test_document_round_trip() {
        let generator = MusicGenerator::seeded(5);
        let notes = generator.generate("cinematic", 90.0, 12.0).unwrap();
        let document = notes_to_document("cinematic", 90.0, 12.0, &notes);
        let json = serde_json::to_string(&document).unwrap();
        let back: ExportDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back.note_count, document.note_count);
        assert_eq!(back.notes.len(), document.notes.len());
        assert_eq!(back.style, document.style);
    }
}
