//! Sections command - list rule tables.

use colored::Colorize;
use registro::{Section, section_rules};

pub fn run(
    section: Option<String>,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let sections: Vec<Section> = match section {
        Some(name) => vec![name.parse()?],
        None => Section::all().to_vec(),
    };

    if json_output {
        let listing: Vec<_> = sections
            .iter()
            .map(|s| {
                let table = section_rules(*s);
                serde_json::json!({
                    "section": s,
                    "label": s.label(),
                    "required": table.required_fields().collect::<Vec<_>>(),
                    "rules": table
                        .rules
                        .iter()
                        .map(|r| serde_json::json!({
                            "field": r.field,
                            "check": r.check.to_string(),
                            "message": r.message,
                        }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for s in &sections {
        let table = section_rules(*s);
        println!("{} {}", s.as_str().cyan().bold(), format!("({})", s.label()).white());

        for rule in table.rules {
            let check = rule.check.to_string();
            let check = if rule.is_required() {
                check.red()
            } else {
                check.yellow()
            };
            println!("  {:24} {:28} {}", rule.field, check, rule.message.dimmed());
        }
        println!();
    }

    Ok(())
}
