// src/output.rs
use std::io::Write;

use user_stats_domain::{analytics::Tally, model::UserRecord};
use user_stats_shared_kernel::PresentationResult;

use crate::{
    config::OutputFormat,
    operation::{Report, Summary},
};

/// Emit a report in the configured output format.
pub fn emit(
    report: &Report<'_>,
    format: OutputFormat,
    out: &mut impl Write,
) -> PresentationResult<()> {
    match format {
        OutputFormat::Text => output_text(report, out)?,
        OutputFormat::Json => output_json(report, out)?,
    }
    out.flush()?;
    Ok(())
}

fn output_text(report: &Report<'_>, out: &mut impl Write) -> std::io::Result<()> {
    match report {
        Report::Summary(summary) => output_summary(summary, out),
        Report::Filter { filtered_count } => writeln!(out, "Filtered count: {filtered_count}"),
        Report::Group { countries } => {
            writeln!(out, "Users per country:")?;
            write_tally(countries, "", out)
        }
        Report::Avg { average_age } => writeln!(out, "Average age: {average_age:.1}"),
        Report::Top { oldest } => write_users(oldest, "", out),
        Report::Region { regions } => {
            writeln!(out, "Users per region:")?;
            write_tally(regions, "  ", out)
        }
    }
}

fn output_summary(summary: &Summary<'_>, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Total users: {}", summary.total_users)?;
    writeln!(out, "Filtered count: {}", summary.filtered_count)?;
    writeln!(out, "Users per country:")?;
    write_tally(&summary.countries, "  ", out)?;
    writeln!(out, "Average age: {:.1}", summary.average_age)?;
    writeln!(out, "Top {} oldest users:", summary.top_n)?;
    write_users(&summary.oldest, "  ", out)
}

fn output_json(report: &Report<'_>, out: &mut impl Write) -> PresentationResult<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

fn write_tally<K: std::fmt::Display>(
    tally: &Tally<K>,
    indent: &str,
    out: &mut impl Write,
) -> std::io::Result<()> {
    for (key, count) in tally.iter() {
        writeln!(out, "{indent}{key}: {count}")?;
    }
    Ok(())
}

// Ages are echoed as written in the file.
fn write_users(
    users: &[&UserRecord],
    indent: &str,
    out: &mut impl Write,
) -> std::io::Result<()> {
    for user in users {
        writeln!(out, "{indent}{} ({})", user.name, user.age)?;
    }
    Ok(())
}
