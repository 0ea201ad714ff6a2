//! Generation pipeline: one model call per configured lens.

use crate::extract::{self, ExtractError, LensFields};
use crate::hf::{HfError, TextGenerator};
use crate::lens::{LensResult, LensSpec};
use crate::prompt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("LLM request failed: {0}")]
    Request(#[from] HfError),
    #[error("failed to parse response: {0}")]
    Parse(#[from] ExtractError),
}

/// Runs one lens end to end: prompt, model call, JSON recovery, assembly.
pub async fn generate_lens(
    generator: &dyn TextGenerator,
    resume_text: &str,
    spec: &LensSpec,
) -> Result<LensResult, AgentError> {
    let prompt = prompt::build_prompt(resume_text, spec);
    let raw = generator.generate(&prompt).await?;
    let payload = extract::extract_json_block(&raw)?;
    let fields = LensFields::from_value(&payload)?;

    Ok(LensResult {
        id: spec.id.to_string(),
        title: spec.title.to_string(),
        summary: fields.summary,
        key_points: fields.key_points,
        recommended_terms: spec
            .recommended_terms
            .iter()
            .map(|term| term.to_string())
            .collect(),
        source_notes: spec.source_notes.iter().map(|n| n.to_string()).collect(),
    })
}

/// Processes every lens in table order, one at a time. The first failure
/// aborts the run; no partial results escape.
pub async fn generate_all(
    generator: &dyn TextGenerator,
    resume_text: &str,
    lenses: &[LensSpec],
) -> Result<Vec<LensResult>, AgentError> {
    let mut results = Vec::with_capacity(lenses.len());
    for spec in lenses {
        results.push(generate_lens(generator, resume_text, spec).await?);
    }
    Ok(results)
}
