use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::export::to_printable_document;
use crate::store::{StorageBackend, StudentStore};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

/// Renders the printable report. With a destination the document is written
/// there; without one it is handed back in [`CmdResult::document`].
pub fn run<B: StorageBackend>(
    store: &StudentStore<B>,
    school_name: &str,
    dest: Option<&Path>,
    generated_at: DateTime<Local>,
) -> Result<CmdResult> {
    let html = to_printable_document(store.students(), school_name, generated_at)?;

    let Some(dest) = dest else {
        return Ok(CmdResult::default().with_document(html));
    };

    fs::write(dest, html).map_err(RosterError::Io)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Report written to {}",
        dest.display()
    )));
    result.add_message(CmdMessage::info("Open it in a browser to print."));
    Ok(result.with_output_path(dest.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn returns_document_without_destination() {
        let store = StudentStore::open(MemBackend::new(), true).unwrap();
        let result = run(&store, "Springfield High", None, Local::now()).unwrap();

        let html = result.document.unwrap();
        assert!(html.contains("Springfield High - Students Report"));
        assert!(html.contains("David Wilson"));
        assert!(result.output_path.is_none());
    }

    #[test]
    fn writes_document_to_destination() {
        let temp = tempfile::tempdir().unwrap();
        let dest = temp.path().join("report.html");
        let store = StudentStore::open(MemBackend::new(), true).unwrap();

        let result = run(&store, "Springfield High", Some(&dest), Local::now()).unwrap();

        assert!(result.document.is_none());
        assert_eq!(result.output_path.as_deref(), Some(dest.as_path()));
        assert!(fs::read_to_string(&dest).unwrap().contains("window.print()"));
    }

    #[test]
    fn empty_roster_still_renders_headers() {
        let store = StudentStore::open(MemBackend::new(), false).unwrap();
        let html = run(&store, "X", None, Local::now()).unwrap().document.unwrap();
        assert!(html.contains("<th>Email</th>"));
        assert!(!html.contains("<td>"));
    }
}
