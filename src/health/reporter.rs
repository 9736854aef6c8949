//! Formatting and reporting for health check results

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::runner::HealthCheckReport;

/// Formats a health check report as a pretty table
pub fn format_report(report: &HealthCheckReport) -> String {
    let mut builder = Builder::default();

    builder.push_record(["System", "Status", "Duration", "Message"]);
    for (name, result) in &report.results {
        builder.push_record([
            name.as_str(),
            &result.status.as_colored_str(),
            &format!("{:.2?}", result.duration),
            &result.message,
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    format!("{table}\n{}", format_summary(report))
}

/// Formats the summary section of the report
fn format_summary(report: &HealthCheckReport) -> String {
    let mut summary = String::new();

    summary.push_str(&format!("\n{}\n", "Summary".bold().underline()));
    summary.push_str(&format!("  Total checks: {}\n", report.total));
    summary.push_str(&format!("  {} Passed: {}\n", "✓".green(), report.passed));

    if report.warned > 0 {
        summary.push_str(&format!("  {} Warned: {}\n", "⚠".yellow(), report.warned));
    }

    if report.failed > 0 {
        summary.push_str(&format!("  {} Failed: {}\n", "✗".red(), report.failed));
    }

    summary.push('\n');
    let overall = if !report.is_healthy() {
        "Overall: UNHEALTHY".red().bold()
    } else if report.has_warnings() {
        "Overall: HEALTHY (with warnings)".yellow().bold()
    } else {
        "Overall: HEALTHY".green().bold()
    };
    summary.push_str(&format!("  {overall}\n"));

    summary
}

/// Prints a health check report to stdout
pub fn print_report(report: &HealthCheckReport) {
    println!("{}", format_report(report));

    // Print details for any checks that have them
    for (name, result) in &report.results {
        if let Some(details) = &result.details {
            println!("\n{} Details:", name.bold());
            println!("{}", details);
        }
    }
}
