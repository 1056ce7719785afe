use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::{default_roster, NewStudent, Student, StudentId, StudentPatch, ID_FLOOR};
use chrono::{NaiveDate, Utc};
use log::{debug, warn};

/// The session's authoritative roster.
///
/// Every mutation is computed on a copy, written through to the backend and
/// only then swapped in. A failed save leaves the in-memory roster exactly as
/// it was before the call.
pub struct StudentStore<B: StorageBackend> {
    backend: B,
    students: Vec<Student>,
}

impl<B: StorageBackend> StudentStore<B> {
    /// Hydrates from the backend. With `seed` set, a first run writes the
    /// sample roster before returning.
    pub fn open(backend: B, seed: bool) -> Result<Self> {
        let students = match backend.load()? {
            Some(students) => students,
            None if seed => {
                let roster = default_roster();
                backend.save(&roster)?;
                debug!("seeded {} sample students at {}", roster.len(), backend.location());
                roster
            }
            None => Vec::new(),
        };
        Ok(Self { backend, students })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn find(&self, id: StudentId) -> Result<&Student> {
        self.get(id).ok_or(RosterError::StudentNotFound(id))
    }

    /// One more than the highest current id, never below 1001.
    ///
    /// Only live records count: removing the highest id frees it for reuse.
    pub fn next_id(&self) -> Result<StudentId> {
        let max = self
            .students
            .iter()
            .map(|s| s.id.0)
            .fold(ID_FLOOR, u64::max);
        max.checked_add(1)
            .map(StudentId)
            .ok_or_else(|| RosterError::Store("id space exhausted".to_string()))
    }

    /// Appends a new student, enrolled today with status Active.
    pub fn add(&mut self, draft: NewStudent) -> Result<Student> {
        self.add_enrolled_on(draft, Utc::now().date_naive())
    }

    pub(crate) fn add_enrolled_on(&mut self, draft: NewStudent, date: NaiveDate) -> Result<Student> {
        let student = draft.into_student(self.next_id()?, date);
        let mut next = self.students.clone();
        next.push(student.clone());
        self.commit(next)?;
        Ok(student)
    }

    pub fn update(&mut self, id: StudentId, patch: StudentPatch) -> Result<Student> {
        let pos = self.position(id)?;
        let mut next = self.students.clone();
        next[pos].apply(patch);
        let updated = next[pos].clone();
        self.commit(next)?;
        Ok(updated)
    }

    pub fn remove(&mut self, id: StudentId) -> Result<Student> {
        let pos = self.position(id)?;
        let mut next = self.students.clone();
        let removed = next.remove(pos);
        self.commit(next)?;
        Ok(removed)
    }

    /// Discards the in-memory roster and reads the backend again.
    pub fn reload(&mut self) -> Result<()> {
        self.students = self.backend.load()?.unwrap_or_default();
        Ok(())
    }

    fn position(&self, id: StudentId) -> Result<usize> {
        self.students
            .iter()
            .position(|s| s.id == id)
            .ok_or(RosterError::StudentNotFound(id))
    }

    fn commit(&mut self, next: Vec<Student>) -> Result<()> {
        self.ensure_not_stale()?;
        if let Err(e) = self.backend.save(&next) {
            warn!("write to {} failed, mutation dropped: {}", self.backend.location(), e);
            return Err(e);
        }
        debug!("committed {} students to {}", next.len(), self.backend.location());
        self.students = next;
        Ok(())
    }

    /// Refuses to overwrite a blob that changed since this store last
    /// loaded or saved it. A missing blob is fine to recreate.
    fn ensure_not_stale(&self) -> Result<()> {
        match self.backend.load()? {
            Some(stored) if stored != self.students => {
                warn!("{} changed underneath this session", self.backend.location());
                Err(RosterError::Conflict)
            }
            _ => Ok(()),
        }
    }
}
