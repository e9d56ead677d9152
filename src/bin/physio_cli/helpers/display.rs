// ABOUTME: Output formatting helpers for physio-cli
// ABOUTME: JSON report output and a compact text summary of metrics, categories and sensitivity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use physio_core::errors::AppResult;
use physio_sandbox::session::Report;

fn number(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "n/a".to_owned()
    }
}

/// Print the full report as pretty JSON
pub fn print_report_json(report: &Report) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Print derived metrics, categories and the top sensitivity entries
pub fn print_summary(report: &Report) {
    println!("Derived metrics");
    println!("{}", "=".repeat(40));
    for (metric, value) in report.derived.iter() {
        println!("   {:<6} {:>10}", metric.code(), number(value));
    }

    println!("\nCategories");
    println!("{}", "=".repeat(40));
    for entry in &report.categories {
        println!(
            "   {:<20} {} ({:?})",
            entry.metric, entry.badge.label, entry.badge.severity
        );
    }

    if !report.sensitivity.items.is_empty() {
        println!("\nSensitivity");
        println!("{}", "=".repeat(40));
        if let Some(field) = report.sensitivity.last_changed {
            println!("   last change: {field}");
        }
        for item in &report.sensitivity.items {
            println!(
                "   {:<6} {:>10} score {}",
                item.metric.code(),
                number(item.delta),
                number(item.score)
            );
        }
    }
}

/// Print the scenario names, one per line
pub fn print_scenarios(names: &[&str]) {
    println!("Scenarios:");
    for name in names {
        println!("   {name}");
    }
}

/// Print a one-line status message
pub fn print_status(message: &str) {
    println!("{message}");
}

/// Print an error without aborting
pub fn print_error(message: &str) {
    eprintln!("Error: {message}");
}
