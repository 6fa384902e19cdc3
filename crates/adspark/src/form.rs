// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `adspark run` command implementation.
//!
//! Collects the campaign form field by field over readline, runs the
//! submission pipeline, and renders the outcome with colored output.
//! Each completed form is one independent submission; the loop repeats
//! until the user quits.

use adspark_campaign::{SubmissionForm, SubmissionOutcome, run_submission};
use adspark_config::AdsparkConfig;
use adspark_core::{AdsparkError, GenerationStatus};
use adspark_gemini::GeminiProvider;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

/// What a single field prompt produced.
enum FieldInput {
    /// The entered value (possibly empty).
    Value(String),
    /// The user asked to leave (`/quit`, Ctrl-C, Ctrl-D).
    Quit,
}

/// Runs the interactive campaign form.
pub async fn run_form(config: AdsparkConfig) -> Result<(), AdsparkError> {
    // Initialize the Gemini provider. A missing API key refuses startup.
    let provider = GeminiProvider::new(&config.gemini).inspect_err(|_| {
        eprintln!(
            "error: Gemini API key required. Set gemini.api_key in adspark.toml or the GEMINI_API_KEY / GOOGLE_API_KEY environment variable."
        );
    })?;

    let mut rl = DefaultEditor::new()
        .map_err(|e| AdsparkError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "adspark".bold().green());
    println!("Generate 3 post ideas + 2 captions per idea, and estimate results (budget / CPR).");
    println!("Type {} at any prompt to exit.\n", "/quit".yellow());
    print_example();

    loop {
        println!("{}", "Campaign settings".bold());
        let Some(form) = collect_form(&mut rl)? else {
            break;
        };

        match run_submission(&provider, &config, &form).await {
            Ok(SubmissionOutcome::Report(report)) => {
                println!();
                println!("{}", "Ideas & Captions".bold().green());
                if report.status == GenerationStatus::Ok {
                    println!("{}\n", report.ideas);
                } else {
                    println!(
                        "{}",
                        "The response came back without usable text. Try a more direct tone and shorter captions."
                            .yellow()
                    );
                    println!("{}\n", report.ideas.dimmed());
                }

                println!("{}", "Estimate".bold().green());
                println!("{}", report.estimate.render(&report.unit_label));
                println!(
                    "{}\n",
                    "Note: the estimate is an approximation, not a performance guarantee.".dimmed()
                );
            }
            Ok(SubmissionOutcome::Incomplete { missing }) => {
                println!(
                    "{}\n",
                    format!(
                        "Fill in all fields before generating. Missing: {}.",
                        missing.join(", ")
                    )
                    .yellow()
                );
            }
            Err(e @ AdsparkError::Validation { .. }) => {
                println!("{}\n", e.to_string().red());
            }
            Err(e) => {
                // Unexpected failure: opaque diagnostic, no retry.
                println!("{}: {e}\n", "error".red());
                debug!(error = %e, "submission failed");
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Prompts for all seven fields. Returns `None` when the user quits.
fn collect_form(rl: &mut DefaultEditor) -> Result<Option<SubmissionForm>, AdsparkError> {
    let mut fields = [
        ("Topic/Niche", String::new()),
        ("Audience", String::new()),
        ("Offer/Angle", String::new()),
        ("Tone of voice", String::new()),
        ("Budget", String::new()),
        ("CPR - cost per result", String::new()),
        ("Result counted by the CPR (e.g. clicks, leads, sales)", String::new()),
    ];

    for (label, value) in &mut fields {
        match prompt_field(rl, *label)? {
            FieldInput::Value(v) => *value = v,
            FieldInput::Quit => return Ok(None),
        }
    }

    let [topic, audience, offer, tone, budget, cost_per_result, unit_label] =
        fields.map(|(_, value)| value);

    Ok(Some(SubmissionForm {
        topic,
        audience,
        offer,
        tone,
        budget,
        cost_per_result,
        unit_label,
    }))
}

/// Reads one field from the user.
fn prompt_field(rl: &mut DefaultEditor, label: &str) -> Result<FieldInput, AdsparkError> {
    let prompt = format!("{}> ", label.cyan());
    match rl.readline(&prompt) {
        Ok(line) => {
            if line.trim() == "/quit" || line.trim() == "/exit" {
                return Ok(FieldInput::Quit);
            }
            let _ = rl.add_history_entry(&line);
            Ok(FieldInput::Value(line))
        }
        // Ctrl+C or Ctrl+D both leave the form.
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(FieldInput::Quit),
        Err(e) => Err(AdsparkError::Internal(format!("readline failed: {e}"))),
    }
}

/// Prints a filled-in example for reference, fields left for the user.
fn print_example() {
    println!("{}", "Example (reference only):".dimmed());
    println!(
        "{}",
        "  Topic/Niche: Executive lunch (delivery for offices)\n  \
           Audience: Workers on lunch break in the city center\n  \
           Offer/Angle: Daily combo + drink for $9.90 - delivered in 20 min\n  \
           Tone of voice: direct, friendly, focused on convenience\n  \
           Budget: 60 | CPR: 3 | Result: clicks"
            .dimmed()
    );
    println!(
        "{} {} {}\n",
        "[clear offer]".dimmed(),
        "[objective CTA]".dimmed(),
        "[no performance promises]".dimmed()
    );
}
