//! # Storage Layer
//!
//! The roster lives in one serialized blob under a fixed key. Two layers
//! split the work:
//!
//! - [`StorageBackend`]: the "how". Loads and saves the whole collection,
//!   nothing else. No partial writes, no migrations, no versioning.
//! - [`StudentStore`]: the "what". Owns the in-memory roster for a session,
//!   allocates ids, writes every mutation through and rolls back when the
//!   write fails.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production storage, `<data dir>/studentsData.json`
//! - [`mem_backend::MemBackend`]: in-memory blob for tests, with write-failure
//!   simulation
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── studentsData.json   # JSON array of students
//! └── config.json         # Settings (see config.rs)
//! ```
//!
//! Record fields: `id, name, email, grade, date, status, phone, dob, address?`.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod student_store;

pub use backend::StorageBackend;
pub use student_store::StudentStore;

/// Key the roster is stored under.
pub const STORAGE_KEY: &str = "studentsData";
