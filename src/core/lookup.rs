use crate::core::lottery_code;
use crate::core::{Program, ProgramEntry};
use crate::utils::error::{ProgramError, Result};

/// Performer self-lookup by public lottery code.
///
/// Input is trimmed and upper-cased before decoding. A malformed code and a
/// code with no entries both come back as [`ProgramError::CodeNotFound`].
pub fn find_by_code<'p>(program: &'p Program, code: &str) -> Result<Vec<&'p ProgramEntry>> {
    let normalized = code.trim().to_ascii_uppercase();
    let lottery_number = lottery_code::decode(&normalized).map_err(|e| {
        tracing::debug!("Lookup rejected: {}", e);
        ProgramError::CodeNotFound
    })?;

    let entries: Vec<&ProgramEntry> = program
        .entries
        .iter()
        .filter(|entry| entry.lottery_number == lottery_number)
        .collect();

    if entries.is_empty() {
        return Err(ProgramError::CodeNotFound);
    }
    Ok(entries)
}
