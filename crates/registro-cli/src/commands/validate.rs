//! Validate command - check records against a section's rules.

use std::path::PathBuf;

use colored::Colorize;
use registro::{EngineConfig, ErrorMap, RegistroError, Section, UnknownSectionPolicy, ValidationEngine};

use crate::cli::InputFormat;

pub fn run(
    file: PathBuf,
    section: String,
    format: InputFormat,
    now: Option<String>,
    json_output: bool,
    permissive: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    check_section(&section, permissive)?;
    let now = super::parse_now(now.as_deref())?;
    let records = super::load_records(&file, format)?;

    let engine = ValidationEngine::with_config(EngineConfig {
        unknown_section: if permissive {
            UnknownSectionPolicy::Permissive
        } else {
            UnknownSectionPolicy::FailClosed
        },
    });

    let results: Vec<ErrorMap> = records
        .iter()
        .map(|record| engine.validate_named(record, &section, now))
        .collect();
    let failed = results.iter().filter(|e| !e.is_empty()).count();

    if json_output {
        let report = serde_json::json!({
            "file": file.display().to_string(),
            "section": section,
            "evaluated_at": now.to_rfc3339(),
            "records": results.len(),
            "failed": failed,
            "errors": results,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {} {} {}",
            "Validating".cyan().bold(),
            file.display().to_string().white(),
            "as".cyan(),
            section.white().bold()
        );
        println!();

        for (idx, errors) in results.iter().enumerate() {
            if errors.is_empty() {
                if verbose {
                    println!("  {} record {}", "✓".green(), idx + 1);
                }
                continue;
            }

            println!("  {} record {}", "✗".red(), idx + 1);
            for (field, message) in errors.iter() {
                println!("      {:24} {}", field.yellow(), message);
            }
        }

        if failed == 0 {
            println!(
                "{}",
                format!("All {} record(s) are ready to submit", results.len()).green()
            );
        } else {
            println!();
            println!(
                "{} of {} record(s) have errors",
                failed.to_string().red().bold(),
                results.len()
            );
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} record(s) failed validation", failed, results.len()).into());
    }

    Ok(())
}

/// Reject an unknown section before any record is read, unless permissive.
fn check_section(name: &str, permissive: bool) -> Result<(), RegistroError> {
    if !permissive {
        name.parse::<Section>()?;
    }
    Ok(())
}
