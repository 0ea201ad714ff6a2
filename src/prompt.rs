//! Prompt assembly for lens generation.

use crate::lens::LensSpec;

const SYSTEM_PREAMBLE: &str = "You generate concise JSON summaries for professional résumés. \
    Do not include commentary outside JSON.";

/// Worked example of the expected reply shape. Shown to the model as a format
/// hint, never parsed.
const FORMAT_HINT: &str = r#"{
  "summary": "<80-120 word paragraph>",
  "bullets": [
    "bullet one",
    "bullet two",
    "bullet three"
  ]
}"#;

/// Concatenates the preamble, the full résumé text, the lens instruction and
/// the format hint into one prompt.
pub fn build_prompt(resume_text: &str, lens: &LensSpec) -> String {
    format!(
        "System:\n{SYSTEM_PREAMBLE}\n\nResume:\n{resume_text}\n\nInstruction:\n{instruction}\n\nFormat:\n{FORMAT_HINT}",
        instruction = lens.instruction
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens::builtin_lenses;

    #[test]
    fn prompt_contains_resume_and_instruction_verbatim() {
        let resume = "Two decades of firmware and platform work.\nLine two.";
        for lens in builtin_lenses() {
            let prompt = build_prompt(resume, &lens);
            assert!(prompt.contains(resume));
            assert!(prompt.contains(lens.instruction));
        }
    }

    #[test]
    fn prompt_shows_the_expected_reply_shape() {
        let lens = &builtin_lenses()[0];
        let prompt = build_prompt("resume body", lens);
        assert!(prompt.contains("\"summary\""));
        assert!(prompt.contains("\"bullets\""));
    }
}
