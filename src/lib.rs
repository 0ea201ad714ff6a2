//! # lensgen
//!
//! One-shot CLI that renders a plain-text résumé through a fixed set of
//! "lenses" via the Hugging Face Inference API, and writes the consolidated
//! JSON document the website build consumes.
//!
//! ## Pipeline
//!
//! - **Load**: read the résumé source as plain text
//! - **Generate**: one prompt and one model call per configured lens
//! - **Extract**: recover the JSON object embedded in the model's reply
//! - **Write**: serialise every lens result into `data/resume_lenses.json`
//!
//! Any failure aborts the whole run before the output file is touched.

pub mod agent;
pub mod config;
pub mod extract;
pub mod hf;
pub mod lens;
pub mod prompt;
pub mod resume;
pub mod writer;

pub use config::Config;
pub use hf::{HfClient, TextGenerator};
pub use lens::{LensResult, LensSpec, OutputDocument};
