use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::StudentId;
use crate::store::{StorageBackend, StudentStore};

pub fn run<B: StorageBackend>(store: &StudentStore<B>, id: StudentId) -> Result<CmdResult> {
    let student = store.find(id)?.clone();
    Ok(CmdResult::default().with_listed_students(vec![student], store.len()))
}
