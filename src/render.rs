//! Record rendering
//!
//! Turns the intake record into the message handed to the submission gateway
//! and into the printable plain-text form view. Fields render in on-screen
//! stage order (contact → medical → nutrition → preferences) so submissions
//! read the same way the form does.

use crate::types::{
    EmailMessage, Field, IntakeRecord, MessageAttachment, Step, SubmissionOptions,
};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::Utc;
use std::fmt::Write;

/// Heading shown for each section of the rendered body
const fn section_heading(step: Step) -> &'static str {
    match step {
        Step::Contact => "Contact Information",
        _ => step.title(),
    }
}

/// Render the full record as a plain-text message body
///
/// Every field appears, blank or not, under its stage heading, so the coach
/// can see unanswered questions too.
#[must_use]
pub fn render_body(record: &IntakeRecord) -> String {
    let mut body = String::from("Fitness Intake Form Submission\n");
    let mut current_section = None;

    for field in Field::ALL {
        let step = field.step();
        if current_section != Some(step) {
            let _ = write!(body, "\n## {}\n", section_heading(step));
            current_section = Some(step);
        }
        let value = record.get(field);
        let shown = if value.trim().is_empty() {
            "(not answered)"
        } else {
            value
        };
        let _ = writeln!(body, "{}: {shown}", field.label());
    }

    let _ = write!(
        body,
        "\nDisclaimer acknowledged: {}\n",
        if record.disclaimer { "yes" } else { "no" }
    );

    match &record.photo {
        Some(photo) => {
            let _ = writeln!(body, "Photo attached: {}", photo.file_name);
        }
        None => {
            let _ = writeln!(body, "Photo attached: none");
        }
    }

    body
}

/// Subject line for a submission
#[must_use]
pub fn render_subject(record: &IntakeRecord) -> String {
    format!(
        "Fitness Intake Form - {} ({})",
        record.full_name,
        Utc::now().format("%Y-%m-%d")
    )
}

/// Assemble the complete gateway message for a record
///
/// The recipient defaults to the client's own email (they receive a copy of
/// their submission) with the coach address on cc; both can be overridden
/// via [`SubmissionOptions`]. The photo, if selected, is base64-encoded into
/// the payload.
#[must_use]
pub fn render_message(record: &IntakeRecord, opts: &SubmissionOptions) -> EmailMessage {
    let to = opts
        .to
        .clone()
        .unwrap_or_else(|| record.email.clone());

    let attachment = record.photo.as_ref().map(|photo| MessageAttachment {
        file_name: photo.file_name.clone(),
        content_base64: BASE64.encode(&photo.bytes),
    });

    EmailMessage {
        to,
        cc: Some(opts.coach_email.clone()),
        subject: render_subject(record),
        body: render_body(record),
        attachment,
    }
}

/// Render the printable form view
///
/// Unstyled plain text covering the whole form regardless of the current
/// stage, suitable for piping to a printer or a file.
#[must_use]
pub fn render_printable(record: &IntakeRecord) -> String {
    let mut doc = String::new();
    let _ = writeln!(doc, "{:=^60}", " Fitness Intake Form ");

    let mut current_section = None;
    for field in Field::ALL {
        let step = field.step();
        if current_section != Some(step) {
            let _ = write!(doc, "\n{}\n{:-<60}\n", section_heading(step), "");
            current_section = Some(step);
        }
        let _ = writeln!(doc, "  {}", field.prompt());
        let value = record.get(field);
        if value.trim().is_empty() {
            let _ = writeln!(doc, "    (not answered)");
        } else {
            let _ = writeln!(doc, "    {value}");
        }
    }

    let _ = write!(
        doc,
        "\nDisclaimer acknowledged: {}\n",
        if record.disclaimer { "yes" } else { "no" }
    );
    if let Some(photo) = &record.photo {
        let _ = writeln!(doc, "Photo: {}", photo.file_name);
    }
    let _ = writeln!(doc, "{:=<60}", "");

    doc
}
