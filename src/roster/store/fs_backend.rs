use super::backend::StorageBackend;
use super::STORAGE_KEY;
use crate::error::{Result, RosterError};
use crate::model::Student;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed storage: `<root>/studentsData.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(format!("{}.json", STORAGE_KEY))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RosterError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Option<Vec<Student>>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            debug!("no roster at {}", data_file.display());
            return Ok(None);
        }
        let content = fs::read_to_string(&data_file).map_err(RosterError::Io)?;
        let students: Vec<Student> =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        debug!("loaded {} students from {}", students.len(), data_file.display());
        Ok(Some(students))
    }

    fn save(&self, students: &[Student]) -> Result<()> {
        self.ensure_dir()?;

        let data_file = self.data_file();
        let content = serde_json::to_string_pretty(students).map_err(RosterError::Serialization)?;

        // Write beside the target then rename, so readers never see half a file
        let tmp_file = self.root.join(format!(".{}-{}.tmp", STORAGE_KEY, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(RosterError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(RosterError::Io(e));
        }

        debug!("saved {} students to {}", students.len(), data_file.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.data_file().display().to_string()
    }
}
