use crate::error::Result;
use crate::ledger::{Minute, Report};
use chrono::NaiveTime;
use comfy_table::{Cell, CellAlignment, Table, presets};
use std::io::Write;

const MINUTES_PER_DAY: Minute = 24 * 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn from_flags(json: bool, csv: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if csv {
            OutputFormat::Csv
        } else {
            OutputFormat::Table
        }
    }
}

pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    source: &str,
    report: &Report,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, source, report),
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Csv => write_csv(out, report),
    }
}

pub fn write_json<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Receipts only, one row per completed stay
pub fn write_csv<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    writeln!(out, "plate,minutes,fee,exited_at")?;
    for receipt in &report.receipts {
        writeln!(
            out,
            "{},{},{},{}",
            csv_field(&receipt.plate),
            receipt.minutes,
            receipt.fee,
            receipt.exited_at
        )?;
    }
    Ok(())
}

pub fn write_table<W: Write>(out: &mut W, source: &str, report: &Report) -> Result<()> {
    let summary = report.summary();

    // Header comment
    writeln!(out, "# {}", source)?;
    writeln!(
        out,
        "# Events: {} | Receipts: {} ({} paid) | Inside: {} | Denied: {} | Revenue: {} ({})",
        summary.events,
        summary.receipts,
        summary.paid,
        summary.still_inside,
        summary.denied(),
        summary.revenue,
        format_cents(summary.revenue)
    )?;
    if !summary.denials.is_empty() {
        let breakdown = summary
            .denials
            .iter()
            .map(|(kind, n)| format!("{}: {}", kind.as_str(), n))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "# Denied by reason: {}", breakdown)?;
    }
    writeln!(out)?;

    if report.receipts.is_empty() {
        writeln!(out, "No completed stays.")?;
    } else {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .set_header(vec!["PLATE", "MINUTES", "FEE", "EXITED"]);
        for receipt in &report.receipts {
            table.add_row(vec![
                Cell::new(&receipt.plate),
                Cell::new(receipt.minutes).set_alignment(CellAlignment::Right),
                Cell::new(format_cents(receipt.fee)).set_alignment(CellAlignment::Right),
                Cell::new(format_minute(receipt.exited_at)).set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(out, "{table}")?;
    }

    if !report.inside.is_empty() {
        writeln!(out)?;
        writeln!(out, "Still inside:")?;
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .set_header(vec!["PLATE", "SINCE"]);
        for (plate, parked) in &report.inside {
            table.add_row(vec![
                Cell::new(plate),
                Cell::new(format_minute(parked.since)).set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(out, "{table}")?;
    }

    if !report.errors.is_empty() {
        writeln!(out)?;
        writeln!(out, "Denied events:")?;
        for error in &report.errors {
            writeln!(out, "  {}", error)?;
        }
    }

    Ok(())
}

/// Format currency units as `d.cc`
pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Show a minute timestamp, with the wall clock when it falls inside one day
pub fn format_minute(minute: Minute) -> String {
    if (0..MINUTES_PER_DAY).contains(&minute)
        && let Some(clock) = NaiveTime::from_num_seconds_from_midnight_opt(minute as u32 * 60, 0)
    {
        return format!("{} ({})", minute, clock.format("%H:%M"));
    }
    minute.to_string()
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
