use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::export::to_delimited_text;
use crate::store::{StorageBackend, StudentStore};
use std::fs;
use std::path::Path;

/// Writes the whole roster as CSV to `dest`.
pub fn run<B: StorageBackend>(store: &StudentStore<B>, dest: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.is_empty() {
        result.add_message(CmdMessage::warning("No students to export!"));
        return Ok(result);
    }

    let csv = to_delimited_text(store.students());
    fs::write(dest, csv).map_err(RosterError::Io)?;

    result.add_message(CmdMessage::success("Students exported successfully!"));
    result.add_message(CmdMessage::info(format!(
        "Wrote {} students to {}",
        store.len(),
        dest.display()
    )));
    Ok(result.with_output_path(dest.to_path_buf()))
}
