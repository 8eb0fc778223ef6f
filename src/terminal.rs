//! Console rendering for the `recommend` and `chat` commands.

use comfy_table::{modifiers, presets, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use terminal_size::{terminal_size, Width};
use yansi::Paint;

use crate::flow::{FlowOutcome, Rejection};
use crate::models::toast::FETCH_FAILED_DESCRIPTION;
use crate::models::Assessment;
use crate::templates::views::{NO_MATCHES_HEADING, RESULTS_HEADING};

pub fn terminal_width() -> Option<u16> {
    terminal_size().map(|(Width(w), _)| w)
}

/// One row per assessment, in the order the service returned them.
pub fn assessment_table(assessments: &[Assessment], width: Option<u16>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if let Some(w) = width {
        table.set_width(w.saturating_sub(4));
    }

    table.set_header(vec!["#", "Assessment", "Duration", "Remote", "Adaptive", "Test types", "URL"]);
    for (i, a) in assessments.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            a.product_name.clone(),
            a.duration_label(),
            a.remote_support.clone(),
            a.adaptive_support.clone(),
            a.test_types_label(),
            a.url.clone(),
        ]);
    }
    table
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print what a finished flow produced. Returns false for failures.
pub fn print_outcome(outcome: &FlowOutcome) -> bool {
    match outcome {
        FlowOutcome::Results(response) => {
            println!("{}", Paint::new(RESULTS_HEADING).green().bold());
            if !response.message.trim().is_empty() {
                println!("{}", response.message);
            }
            println!("\n{}\n", assessment_table(&response.recommended_assessments, terminal_width()));
            true
        }
        FlowOutcome::NoMatches(response) => {
            let heading = if response.is_success() { RESULTS_HEADING } else { NO_MATCHES_HEADING };
            println!("{}", Paint::new(heading).yellow().bold());
            println!("{}", response.message);
            true
        }
        FlowOutcome::Failed(e) => {
            eprintln!("{}: {}", Paint::new("Error").red().bold(), FETCH_FAILED_DESCRIPTION);
            eprintln!("{}", Paint::new(e.to_string()).dim());
            false
        }
        FlowOutcome::Cancelled => {
            eprintln!("{}", Paint::new("Request cancelled").yellow());
            true
        }
        FlowOutcome::Rejected(Rejection::Empty) => {
            eprintln!("{}", Paint::new("Please enter a query").red());
            false
        }
        FlowOutcome::Rejected(Rejection::Busy) => {
            eprintln!("{}", Paint::new("A request is already in progress").yellow());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment(id: &str, name: &str) -> Assessment {
        Assessment {
            product_id: id.into(),
            product_name: name.into(),
            url: format!("https://example.com/{}", id),
            adaptive_support: "No".into(),
            description: String::new(),
            duration: Some(30),
            remote_support: "Yes".into(),
            test_type: vec!["Knowledge & Skills".into()],
        }
    }

    #[test]
    fn test_table_keeps_service_order() {
        let table = assessment_table(&[assessment("b", "Zeta"), assessment("a", "Alpha")], None);
        let out = table.to_string();
        let zeta = out.find("Zeta").expect("first row");
        let alpha = out.find("Alpha").expect("second row");
        assert!(zeta < alpha);
        assert!(out.contains("30 minutes"));
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let out = assessment_table(&[], None).to_string();
        assert!(out.contains("Assessment"));
        assert!(!out.contains("minutes"));
    }
}
