//! Interactive wizard - one screen per step, dialoguer prompts

use crate::cli::style::{Stylize, check, cross, spinner_style};
use anstream::{eprintln, println};
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use fit_intake::error::{Error, Result};
use fit_intake::gateway::{SimulatedGateway, SubmissionGateway};
use fit_intake::print::{PagePrinter, PrintMode, StdoutPrinter, print_view};
use fit_intake::render::render_printable;
use fit_intake::types::{Attachment, Field, Step, SubmissionOptions};
use fit_intake::wizard::{WizardState, advance, retreat, submit};
use std::path::Path;
use std::time::Duration;

/// Liability disclaimer shown on the Preferences step
const DISCLAIMER: &str = "I am not a medical doctor. My fitness knowledge is based on 25 years \
of personal experience. Please do not rely on my advice over that of a qualified medical or \
fitness practitioner. Always seek professional medical advice when in doubt. By continuing, \
you acknowledge the risks associated with physical activity and agree that I am not \
personally liable for any injuries.";

/// Upload affordance hint; nothing is enforced beyond this text
const PHOTO_HINT: &str = "PNG, JPG or JPEG (MAX. 10MB)";

/// An action chosen from a step's footer menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Next,
    Previous,
    Submit,
    Print,
}

/// Run the interactive wizard against the simulated gateway
pub async fn run_wizard(opts: &SubmissionOptions, delay: Duration) -> Result<()> {
    let gateway = SimulatedGateway::with_delay(delay);
    run_with_gateway(&gateway, opts).await
}

/// Drive the wizard loop with any gateway
async fn run_with_gateway(
    gateway: &dyn SubmissionGateway,
    opts: &SubmissionOptions,
) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut state = WizardState::new();
    let mut print_mode = PrintMode::new();
    let mut printer = StdoutPrinter;

    loop {
        render_header(&state);

        match state.step {
            Step::Contact | Step::Medical | Step::Nutrition | Step::Preferences => {
                prompt_step_fields(&theme, &mut state)?;
                if state.step == Step::Nutrition {
                    prompt_photo(&theme, &mut state)?;
                }
                if state.step == Step::Preferences {
                    prompt_disclaimer(&theme, &mut state)?;
                }

                match choose_action(&theme, state.step)? {
                    Action::Next => match advance(&state) {
                        Ok(next) => state = next,
                        Err(e) => report_blocked(&e),
                    },
                    Action::Previous => state = retreat(&state),
                    // Submit is only offered at Review
                    Action::Print | Action::Submit => {
                        print_form(&mut print_mode, &mut printer, &state)?;
                    }
                }
            }
            Step::Review => {
                render_review(&state, opts);
                match choose_action(&theme, state.step)? {
                    Action::Submit => {
                        match submit_with_spinner(&state, gateway, opts).await {
                            Ok(next) => state = next,
                            Err(e) => report_blocked(&e),
                        }
                    }
                    Action::Previous => state = retreat(&state),
                    // Next is not offered at Review
                    Action::Print | Action::Next => {
                        print_form(&mut print_mode, &mut printer, &state)?;
                    }
                }
            }
            Step::Complete => {
                render_complete();
                let wants_print = Confirm::with_theme(&theme)
                    .with_prompt("Print your submission?")
                    .default(false)
                    .interact()?;
                if wants_print {
                    print_form(&mut print_mode, &mut printer, &state)?;
                }
                return Ok(());
            }
        }
    }
}

/// Progress header, the terminal version of the progress bar
fn render_header(state: &WizardState) {
    println!();
    if state.step.is_terminal() {
        println!("{}", "Complete".muted());
        println!("{}", state.step.title().emphasis());
    } else {
        println!(
            "{}",
            format!(
                "Step {} of {} ({}%)",
                state.step.number(),
                Step::INTERACTIVE_STEPS,
                state.progress_percent()
            )
            .muted()
        );
        println!(
            "{}",
            format!("STEP {}: {}", state.step.number(), state.step.title()).emphasis()
        );
    }
    println!("{}", state.step.description().muted());
    println!();
}

/// Prompt every field belonging to the current step, prefilled with the
/// current answers so retreating and re-editing works
fn prompt_step_fields(theme: &ColorfulTheme, state: &mut WizardState) -> Result<()> {
    let step = state.step;
    for field in Field::ALL.into_iter().filter(|f| f.step() == step) {
        // Validation happens at the step gate, not per keystroke
        let value: String = Input::with_theme(theme)
            .with_prompt(field.prompt())
            .allow_empty(true)
            .default(state.record.get(field).to_string())
            .show_default(false)
            .interact_text()?;
        state.edit(field, value);
    }

    if state.step == Step::Contact {
        println!("{}", "Your information will be kept confidential.".muted());
    }
    Ok(())
}

/// Optional photo selection by path; an unreadable path warns and leaves the
/// attachment unset, it never blocks the step
fn prompt_photo(theme: &ColorfulTheme, state: &mut WizardState) -> Result<()> {
    println!("{}", format!("(Optional) Upload a recent photo. {PHOTO_HINT}").muted());
    let path: String = Input::with_theme(theme)
        .with_prompt("Photo path (leave empty to skip)")
        .allow_empty(true)
        .interact_text()?;

    let path = path.trim();
    if path.is_empty() {
        return Ok(());
    }

    match std::fs::read(path) {
        Ok(bytes) => {
            let file_name = Path::new(path)
                .file_name()
                .map_or_else(|| path.to_string(), |n| n.to_string_lossy().into_owned());
            println!("Selected: {}", file_name.accent());
            state.select_photo(Attachment { file_name, bytes });
        }
        Err(e) => {
            eprintln!(
                "{}",
                format!("Could not read {path}: {e}. Continuing without a photo.").warn()
            );
        }
    }
    Ok(())
}

/// Disclaimer paragraph plus the consent checkbox
fn prompt_disclaimer(theme: &ColorfulTheme, state: &mut WizardState) -> Result<()> {
    println!();
    println!("{}", "Disclaimer:".emphasis());
    println!("{}", DISCLAIMER.muted());
    let checked = Confirm::with_theme(theme)
        .with_prompt("I acknowledge and accept this disclaimer")
        .default(state.record.disclaimer)
        .interact()?;
    state.toggle_consent(checked);
    Ok(())
}

/// Footer action menu for the current step
fn choose_action(theme: &ColorfulTheme, step: Step) -> Result<Action> {
    let mut actions = Vec::new();
    if step == Step::Review {
        actions.push(("Submit Form", Action::Submit));
    } else {
        actions.push(("Next", Action::Next));
    }
    if step.previous().is_some() {
        actions.push(("Previous", Action::Previous));
    }
    actions.push(("Print Form", Action::Print));

    let labels: Vec<&str> = actions.iter().map(|(label, _)| *label).collect();
    let choice = Select::with_theme(theme)
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(actions[choice].1)
}

/// Review screen: every answer so far plus the recipient summary
fn render_review(state: &WizardState, opts: &SubmissionOptions) {
    for field in Field::ALL {
        let value = state.record.get(field);
        if value.trim().is_empty() {
            println!("  {}: {}", field.label(), "(not answered)".muted());
        } else {
            println!("  {}: {}", field.label(), value.accent());
        }
    }
    match &state.record.photo {
        Some(photo) => println!("  Photo: {}", photo.file_name.accent()),
        None => println!("  Photo: {}", "none".muted()),
    }
    println!();

    let to = opts.to.as_deref().unwrap_or(&state.record.email);
    println!(
        "When you submit this form, a copy will be sent to {} and to {}.",
        to.accent(),
        opts.coach_email.accent()
    );
    println!(
        "{}",
        "One last check: have you reviewed all your answers and made sure they're complete and accurate?"
            .muted()
    );
    println!();
}

/// Thank-you screen
fn render_complete() {
    println!(
        "{} {}",
        check(),
        "Thank you for completing the intake form. We've sent a confirmation email to your address."
            .emphasis()
    );
    println!("We'll be in touch shortly to discuss the next steps in your fitness journey.");
    println!();
}

/// Submit with a spinner while the gateway call is in flight
async fn submit_with_spinner(
    state: &WizardState,
    gateway: &dyn SubmissionGateway,
    opts: &SubmissionOptions,
) -> Result<WizardState> {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message("Sending your information...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let outcome = submit(state, gateway, opts).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(next) => {
            println!(
                "{} {}",
                check(),
                "Form Submitted! Your information has been sent. We'll be in touch soon!".success()
            );
            Ok(next)
        }
        Err(e) => Err(e),
    }
}

/// Print the full form, restoring print mode on every path
fn print_form(
    mode: &mut PrintMode,
    printer: &mut dyn PagePrinter,
    state: &WizardState,
) -> Result<()> {
    let document = render_printable(&state.record);
    print_view(mode, printer, &document)
}

/// Show a blocked transition without moving the cursor
fn report_blocked(error: &Error) {
    eprintln!("{} {}", cross(), error.to_string().error());
}
