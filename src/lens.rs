//! Lens definitions and result records.
//!
//! A lens is one named point of view on the résumé: a fixed instruction that
//! the model turns into a summary plus bullet points. The table lives here as
//! plain data and is passed explicitly to the pipeline.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Provenance line embedded in every output document.
const MODEL_HINT: &str =
    "Generated via Hugging Face Inference API (default mistralai/Mistral-7B-Instruct-v0.3).";

/// A single configured lens.
#[derive(Debug, Clone)]
pub struct LensSpec {
    /// Stable identifier, unique within the table
    pub id: &'static str,
    /// Display title for the website
    pub title: &'static str,
    /// Instruction handed to the model
    pub instruction: &'static str,
    /// Terms the website highlights alongside this lens
    pub recommended_terms: &'static [&'static str],
    /// Optional provenance notes carried through to the output
    pub source_notes: &'static [&'static str],
}

/// The lenses to generate; tweak instructions or add new ones here.
pub fn builtin_lenses() -> Vec<LensSpec> {
    vec![
        LensSpec {
            id: "ai-privacy",
            title: "AI + privacy",
            instruction: "Summarise how George Larson applies AI while protecting privacy and \
                regulated data. Focus on applied systems, leadership signals, and measurable \
                outcomes. Return bullet points that show real projects, not generic traits.",
            recommended_terms: &["privacy", "AI", "OCR", "security", "tabletop"],
            source_notes: &[],
        },
        LensSpec {
            id: "manufacturing-ops",
            title: "Manufacturing operations",
            instruction: "Summarise George Larson's experience with manufacturing, firmware, and \
                production systems. Highlight uptime improvements, hardware labs, and PLC or \
                robotics work.",
            recommended_terms: &["manufacturing", "TiVo", "PLC", "conveyors", "uptime"],
            source_notes: &[],
        },
        LensSpec {
            id: "technology-leadership",
            title: "Technology leadership",
            instruction: "Summarise George Larson's leadership style. Cover roadmaps, mixed \
                teams, communication, and how he balances hands-on work with management.",
            recommended_terms: &["roadmap", "team", "Agile", "mentorship", "leadership"],
            source_notes: &[],
        },
    ]
}

/// The generated content for one lens, assembled once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LensResult {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// At most three bullet points
    pub key_points: Vec<String>,
    pub recommended_terms: Vec<String>,
    pub source_notes: Vec<String>,
}

/// The consolidated document written at the end of a successful run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputDocument {
    /// UTC timestamp, second precision, `Z` suffix
    pub generated_at: String,
    pub model_hint: String,
    pub lenses: Vec<LensResult>,
}

impl OutputDocument {
    /// Stamp the results with the generation time and provenance hint.
    pub fn new(lenses: Vec<LensResult>) -> Self {
        Self {
            generated_at: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            model_hint: MODEL_HINT.to_string(),
            lenses,
        }
    }
}
