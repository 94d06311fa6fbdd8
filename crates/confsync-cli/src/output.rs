//! Diff rendering for the terminal

use colored::Colorize;
use serde_json::Value;

use confsync_core::DiffReport;

/// Print the three diff groups in list order.
pub fn print_report(report: &DiffReport) {
    if report.is_empty() {
        println!("No configuration differences");
        return;
    }

    println!("{}", "Configuration differences".bold());

    for entry in &report.added {
        println!(
            "  {} {}: {}",
            "ADDED".green().bold(),
            entry.key,
            format_value(&entry.value)
        );
    }

    for entry in &report.removed {
        println!(
            "  {} {}: {}",
            "REMOVED".red().bold(),
            entry.key,
            format_value(&entry.value)
        );
    }

    for entry in &report.updated {
        println!(
            "  {} {}: {} => {}",
            "UPDATED".yellow().bold(),
            entry.key,
            format_value(&entry.old_value),
            format_value(&entry.new_value)
        );
    }
}

/// Strings print bare; everything else prints as compact JSON.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
