//! Non-interactive run from a prefilled answers file
//!
//! Loads a JSON record, walks it through every gate in order, and submits
//! from Review exactly as the interactive wizard would. With `--dry-run`
//! the rendered message is printed and the gateway is never invoked.

use crate::cli::style::{Stylize, check};
use anstream::println;
use fit_intake::error::Result;
use fit_intake::gateway::SimulatedGateway;
use fit_intake::render::render_message;
use fit_intake::types::{Attachment, IntakeRecord, Step, SubmissionOptions};
use fit_intake::wizard::{WizardState, advance, submit};
use std::path::Path;
use std::time::Duration;

/// Run the wizard non-interactively from an answers file
pub async fn run_answers(
    answers: &Path,
    photo: Option<&Path>,
    opts: &SubmissionOptions,
    dry_run: bool,
    delay: Duration,
) -> Result<()> {
    let json = std::fs::read_to_string(answers)?;
    let mut record: IntakeRecord = serde_json::from_str(&json)?;

    if let Some(path) = photo {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        record.set_photo(Attachment { file_name, bytes });
    }

    // Walk the gates in screen order so the same validation errors surface
    // as in the interactive flow.
    let mut state = WizardState::with_record(record);
    while state.step != Step::Review {
        state = advance(&state)?;
    }

    if dry_run {
        let message = render_message(&state.record, opts);
        println!("{}", "Dry run - nothing will be sent".muted());
        println!("To: {}", message.to.accent());
        if let Some(cc) = &message.cc {
            println!("Cc: {}", cc.accent());
        }
        println!("Subject: {}", message.subject.accent());
        if let Some(attachment) = &message.attachment {
            println!("Attachment: {}", attachment.file_name.accent());
        }
        println!();
        println!("{}", message.body);
        return Ok(());
    }

    let gateway = SimulatedGateway::with_delay(delay);
    let state = submit(&state, &gateway, opts).await?;
    debug_assert!(state.step.is_terminal());

    println!(
        "{} {}",
        check(),
        "Form Submitted! Your information has been sent. We'll be in touch soon!".success()
    );
    Ok(())
}
