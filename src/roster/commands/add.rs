use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewStudent;
use crate::store::{StorageBackend, StudentStore};
use crate::validation::validate;
use log::debug;

pub fn run<B: StorageBackend>(store: &mut StudentStore<B>, draft: NewStudent) -> Result<CmdResult> {
    let draft = draft.trimmed();
    validate(store.students(), &draft.name, &draft.email, &draft.grade, None)?;

    let student = store.add(draft)?;
    debug!("added student {} ({})", student.id, student.email);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Student added successfully!"));
    Ok(result.with_affected_students(vec![student]))
}
