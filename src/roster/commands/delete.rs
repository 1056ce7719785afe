use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentId;
use crate::store::{StorageBackend, StudentStore};

/// Removes a student for good. Confirmation is the caller's job.
pub fn run<B: StorageBackend>(store: &mut StudentStore<B>, id: StudentId) -> Result<CmdResult> {
    let removed = store.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Student deleted successfully!"));
    Ok(result.with_affected_students(vec![removed]))
}
