//! Output document persistence.

use crate::lens::OutputDocument;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialise output: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Serialises the document as indented JSON at the given path, creating any
/// missing parent directories. An existing file is replaced.
pub fn write_document(document: &OutputDocument, path: &Path) -> Result<(), WriterError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens::LensResult;

    fn sample_document() -> OutputDocument {
        OutputDocument::new(vec![LensResult {
            id: "ai-privacy".to_string(),
            title: "AI + privacy".to_string(),
            summary: "hi".to_string(),
            key_points: vec!["a".to_string()],
            recommended_terms: vec!["privacy".to_string()],
            source_notes: Vec::new(),
        }])
    }

    #[test]
    fn creates_parent_directories_and_writes_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("resume_lenses.json");
        write_document(&sample_document(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("{\n  \"generated_at\""));

        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["lenses"][0]["id"], "ai-privacy");
        assert_eq!(parsed["lenses"][0]["key_points"][0], "a");
        assert!(parsed["model_hint"]
            .as_str()
            .unwrap()
            .contains("Hugging Face"));
    }

    #[test]
    fn overwrites_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "stale").unwrap();

        write_document(&sample_document(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        assert!(written.contains("\"lenses\""));
    }

    #[test]
    fn field_order_matches_the_published_shape() {
        let json = serde_json::to_string_pretty(&sample_document()).unwrap();
        let generated_at = json.find("\"generated_at\"").unwrap();
        let model_hint = json.find("\"model_hint\"").unwrap();
        let lenses = json.find("\"lenses\"").unwrap();
        assert!(generated_at < model_hint && model_hint < lenses);
    }
}
