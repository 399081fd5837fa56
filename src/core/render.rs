use crate::core::{Program, ProgramEntry};
use crate::utils::error::{ProgramError, Result};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Serialize)]
struct ProgramRow<'a> {
    series: &'a str,
    number_in_series: Option<u32>,
    start_time: String,
    performance_order: u32,
    performance_id: &'a str,
    performer: &'a str,
    instrument: &'a str,
    accompanist: &'a str,
    titles: String,
    lottery_code: &'a str,
    chair_override: bool,
}

impl<'a> From<&'a ProgramEntry> for ProgramRow<'a> {
    fn from(entry: &'a ProgramEntry) -> Self {
        ProgramRow {
            series: &entry.assignment.resolved_series,
            number_in_series: entry.assignment.number_in_series,
            start_time: entry
                .start_time
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            performance_order: entry.assignment.performance_order,
            performance_id: &entry.assignment.performance_id,
            performer: &entry.details.performer_name,
            instrument: &entry.details.instrument,
            accompanist: entry.details.accompanist.as_deref().unwrap_or(""),
            titles: entry.details.titles.join("; "),
            lottery_code: &entry.lottery_code,
            chair_override: entry.chair_override,
        }
    }
}

pub fn to_csv(program: &Program) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for entry in &program.entries {
        writer.serialize(ProgramRow::from(entry))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ProgramError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        ProgramError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Printable program, one block per slot in print order.
pub fn to_text(program: &Program) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Festival program {}", program.edition);

    let mut current: Option<(&str, Option<u32>)> = None;
    let mut position = 0;

    for entry in &program.entries {
        let key = (
            entry.assignment.resolved_series.as_str(),
            entry.assignment.number_in_series,
        );
        if current != Some(key) {
            current = Some(key);
            position = 0;
            out.push('\n');
            match (key.1, entry.start_time) {
                (Some(number), Some(start)) => {
                    let _ = writeln!(
                        out,
                        "{} #{} ({})",
                        key.0,
                        number,
                        start.format("%a %Y-%m-%d %H:%M")
                    );
                }
                (Some(number), None) => {
                    let _ = writeln!(out, "{} #{}", key.0, number);
                }
                (None, _) => {
                    let _ = writeln!(out, "{}", key.0);
                }
            }
        }

        position += 1;
        let _ = write!(
            out,
            "  {:>2}. {}",
            position, entry.details.performer_name
        );
        if !entry.details.instrument.is_empty() {
            let _ = write!(out, ", {}", entry.details.instrument);
        }
        if let Some(accompanist) = &entry.details.accompanist {
            let _ = write!(out, " (with {})", accompanist);
        }
        if !entry.details.titles.is_empty() {
            let _ = write!(out, ": {}", entry.details.titles.join("; "));
        }
        let _ = writeln!(out, " [{}]", entry.lottery_code);
    }

    out
}
