//! intake - client intake questionnaire for a fitness coaching business
//!
//! CLI binary that walks a prospective client through the multi-step form
//! and submits the finished record.

use anyhow::Result;
use clap::Parser;
use fit_intake::types::{DEFAULT_COACH_EMAIL, SubmissionOptions};
use std::path::PathBuf;
use std::time::Duration;

mod cli;

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "Client intake questionnaire for fitness coaching")]
#[command(version)]
struct Cli {
    /// Prefilled answers file (JSON); runs the form non-interactively
    #[arg(long)]
    answers: Option<PathBuf>,

    /// Photo to attach (used with --answers)
    #[arg(long, requires = "answers")]
    photo: Option<PathBuf>,

    /// Render the submission without sending it
    #[arg(long, requires = "answers")]
    dry_run: bool,

    /// Recipient override (defaults to the email on the form)
    #[arg(long)]
    to: Option<String>,

    /// Coach address cc'd on every submission
    #[arg(long, default_value = DEFAULT_COACH_EMAIL)]
    coach_email: String,

    /// Simulated gateway delay in milliseconds
    #[arg(long, default_value_t = 1500)]
    delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let opts = SubmissionOptions {
        to: cli.to,
        coach_email: cli.coach_email,
    };
    let delay = Duration::from_millis(cli.delay_ms);

    match cli.answers {
        Some(path) => {
            cli::run_answers(&path, cli.photo.as_deref(), &opts, cli.dry_run, delay).await?;
        }
        None => {
            cli::run_wizard(&opts, delay).await?;
        }
    }

    Ok(())
}
