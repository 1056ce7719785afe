use crate::error::Result;
use crate::model::Student;

/// Abstract interface for raw roster I/O.
///
/// A backend only moves the whole collection in and out of durable storage.
/// Id allocation, validation and write-through live in
/// [`StudentStore`](super::StudentStore).
pub trait StorageBackend {
    /// Load the stored roster.
    /// Returns Ok(None) when nothing has been stored yet (first run).
    /// Malformed content is an error, never an empty roster.
    fn load(&self) -> Result<Option<Vec<Student>>>;

    /// Replace the stored roster.
    /// MUST be all-or-nothing: a failed save leaves the previous blob intact.
    fn save(&self, students: &[Student]) -> Result<()>;

    /// Human-readable location of the blob, for messages and logs.
    fn location(&self) -> String;
}
