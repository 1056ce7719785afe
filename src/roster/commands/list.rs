use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::StudentFilter;
use crate::store::{StorageBackend, StudentStore};

pub fn run<B: StorageBackend>(store: &StudentStore<B>, filter: &StudentFilter) -> Result<CmdResult> {
    let listed = filter.apply(store.students()).into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed_students(listed, store.len()))
}
