//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every UI talks
//! to the roster through [`RosterApi`].
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (partial edits are merged over the current record,
//!   default output paths come from config)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no terminal I/O and no formatting.
//!
//! `RosterApi<B: StorageBackend>` is generic over the storage backend:
//! `FsBackend` in production, `MemBackend` in tests.

use crate::commands;
use crate::config::RosterConfig;
use crate::error::Result;
use crate::filter::StudentFilter;
use crate::model::{NewStudent, StudentId};
use crate::store::{StorageBackend, StudentStore};
use chrono::Local;
use std::path::{Path, PathBuf};

pub struct RosterApi<B: StorageBackend> {
    store: StudentStore<B>,
    config: RosterConfig,
    data_dir: PathBuf,
}

impl<B: StorageBackend> RosterApi<B> {
    /// Opens the roster in `backend`, seeding it on first run when the
    /// configuration allows.
    pub fn open(backend: B, config: RosterConfig, data_dir: PathBuf) -> Result<Self> {
        let store = StudentStore::open(backend, config.seed_sample_data)?;
        Ok(Self {
            store,
            config,
            data_dir,
        })
    }

    pub fn add_student(&mut self, draft: NewStudent) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn edit_student(
        &mut self,
        id: StudentId,
        changes: StudentChanges,
    ) -> Result<commands::CmdResult> {
        let patch = changes.merged_over(self.store.find(id)?);
        commands::edit::run(&mut self.store, id, patch)
    }

    pub fn delete_student(&mut self, id: StudentId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn view_student(&self, id: StudentId) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn list_students(&self, filter: &StudentFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    /// Exports to `dest`, or to the configured export file under the data dir.
    pub fn export_students(&self, dest: Option<PathBuf>) -> Result<commands::CmdResult> {
        let dest = dest.unwrap_or_else(|| self.data_dir.join(&self.config.export_file));
        commands::export::run(&self.store, &dest)
    }

    /// Renders the printable report. `ReportTarget::Inline` hands the document back
    /// instead of writing it.
    pub fn print_report(&self, target: ReportTarget) -> Result<commands::CmdResult> {
        let dest = match target {
            ReportTarget::Inline => None,
            ReportTarget::File(path) => Some(path),
            ReportTarget::Default => Some(self.data_dir.join(&self.config.report_file)),
        };
        commands::print::run(
            &self.store,
            &self.config.school_name,
            dest.as_deref(),
            Local::now(),
        )
    }

    /// Re-reads the roster from storage, dropping the in-memory copy.
    pub fn reload(&mut self) -> Result<()> {
        self.store.reload()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn store(&self) -> &StudentStore<B> {
        &self.store
    }
}

/// Reads or changes settings in `data_dir`.
///
/// Needs no open roster, so changing `seed-sample-data` before the first
/// run takes effect on that run.
pub fn configure(data_dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(data_dir, action)
}

/// Where `print_report` sends the document.
#[derive(Debug, Clone)]
pub enum ReportTarget {
    Default,
    File(PathBuf),
    Inline,
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::edit::StudentChanges;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
