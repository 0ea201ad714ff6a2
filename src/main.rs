//! lensgen CLI - résumé lens generation
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use clap::{Parser, Subcommand};
use colored::Colorize;
use lensgen::{agent, lens, prompt, resume, writer, Config, HfClient, OutputDocument};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lensgen")]
#[command(author, version, about = "Generate résumé lens summaries for the website build", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every configured lens and write the output document
    Generate {
        /// Résumé source file (overrides config)
        #[arg(long)]
        resume: Option<PathBuf>,
        /// Output document path (overrides config)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print each lens prompt instead of calling the inference API
        #[arg(long)]
        dry_run: bool,
    },
    /// List the configured lenses
    Lenses,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate {
            resume,
            out,
            dry_run,
        }) => generate(resume, out, dry_run).await?,
        Some(Commands::Lenses) => {
            for spec in lens::builtin_lenses() {
                println!(
                    "{}  {} ({} recommended terms)",
                    spec.id.bold(),
                    spec.title,
                    spec.recommended_terms.len()
                );
            }
        }
        // Default: run the full generation with configured paths
        None => generate(None, None, false).await?,
    }

    Ok(())
}

async fn generate(
    resume_override: Option<PathBuf>,
    out_override: Option<PathBuf>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let lenses = lens::builtin_lenses();
    let resume_path = resume_override.unwrap_or_else(|| config.paths.resume.clone());
    let output_path = out_override.unwrap_or_else(|| config.paths.output.clone());

    let resume_text = resume::load_resume(&resume_path)?;

    if dry_run {
        for spec in &lenses {
            println!("=== {} ===\n", spec.id.bold());
            println!("{}\n", prompt::build_prompt(&resume_text, spec));
        }
        return Ok(());
    }

    // Resolve the credential up front so a missing token fails before any
    // network call.
    let token = config.api_token()?;
    let model = config.model();
    let client = HfClient::new(token, model);

    println!(
        "Generating {} lenses with {} ({} resume characters)...",
        lenses.len(),
        model,
        resume_text.len()
    );
    let results = agent::generate_all(&client, &resume_text, &lenses).await?;

    let document = OutputDocument::new(results);
    writer::write_document(&document, &output_path)?;
    println!("{} {}", "Wrote".green().bold(), output_path.display());

    Ok(())
}
