use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Status, Student, StudentId, StudentPatch};
use crate::store::{StorageBackend, StudentStore};
use crate::validation::validate;

/// A partial edit: fields left as `None` keep their current value. A blank
/// status counts as no change.
#[derive(Debug, Clone, Default)]
pub struct StudentChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub grade: Option<String>,
    pub status: Option<Status>,
}

impl StudentChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.grade.is_none() && self.status().is_none()
    }

    fn status(&self) -> Option<&Status> {
        self.status
            .as_ref()
            .filter(|status| !status.as_str().trim().is_empty())
    }

    pub fn merged_over(self, current: &Student) -> StudentPatch {
        let base = StudentPatch::from(current);
        let status = self.status().cloned();
        StudentPatch {
            name: self.name.unwrap_or(base.name),
            email: self.email.unwrap_or(base.email),
            grade: self.grade.unwrap_or(base.grade),
            status: status.unwrap_or(base.status),
        }
    }
}

pub fn run<B: StorageBackend>(
    store: &mut StudentStore<B>,
    id: StudentId,
    patch: StudentPatch,
) -> Result<CmdResult> {
    store.find(id)?;

    let patch = patch.trimmed();
    validate(store.students(), &patch.name, &patch.email, &patch.grade, Some(id))?;

    let updated = store.update(id, patch)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Student updated successfully!"));
    Ok(result.with_affected_students(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::store::mem_backend::MemBackend;
    use crate::validation::ValidationErrorKind;

    fn seeded() -> StudentStore<MemBackend> {
        StudentStore::open(MemBackend::new(), true).unwrap()
    }

    #[test]
    fn keeping_own_email_is_allowed() {
        let mut store = seeded();
        let mut patch = StudentPatch::from(store.get(StudentId(1001)).unwrap());
        patch.grade = "Grade 11".into();
        patch.status = Status::Inactive;

        let result = run(&mut store, StudentId(1001), patch).unwrap();

        let john = &result.affected_students[0];
        assert_eq!(john.grade, "Grade 11");
        assert_eq!(john.status, Status::Inactive);
        assert_eq!(john.email, "john.smith@school.edu");
    }

    #[test]
    fn own_email_with_different_case_is_allowed() {
        let mut store = seeded();
        let mut patch = StudentPatch::from(store.get(StudentId(1001)).unwrap());
        patch.email = "JOHN.SMITH@school.edu".into();

        assert!(run(&mut store, StudentId(1001), patch).is_ok());
    }

    #[test]
    fn taking_another_students_email_is_rejected() {
        let mut store = seeded();
        let mut patch = StudentPatch::from(store.get(StudentId(1001)).unwrap());
        patch.email = "david.w@school.edu".into();

        let err = run(&mut store, StudentId(1001), patch).unwrap_err();
        let RosterError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.contains(ValidationErrorKind::EmailDuplicate));
        assert_eq!(store.get(StudentId(1001)).unwrap().email, "john.smith@school.edu");
    }

    #[test]
    fn missing_student_is_not_found() {
        let mut store = seeded();
        let patch = StudentPatch::from(store.get(StudentId(1001)).unwrap());
        let err = run(&mut store, StudentId(2000), patch).unwrap_err();
        assert!(matches!(err, RosterError::StudentNotFound(StudentId(2000))));
    }

    #[test]
    fn enrollment_date_and_contact_fields_are_untouched() {
        let mut store = seeded();
        let before = store.get(StudentId(1003)).unwrap().clone();
        let mut patch = StudentPatch::from(&before);
        patch.name = "Mike Brown".into();

        run(&mut store, StudentId(1003), patch).unwrap();

        let after = store.get(StudentId(1003)).unwrap();
        assert_eq!(after.name, "Mike Brown");
        assert_eq!(after.enrollment_date, before.enrollment_date);
        assert_eq!(after.phone, before.phone);
        assert_eq!(after.date_of_birth, before.date_of_birth);
    }

    #[test]
    fn changes_merge_over_current_values() {
        let store = seeded();
        let changes = StudentChanges {
            grade: Some("Grade 12".into()),
            ..Default::default()
        };

        let patch = changes.merged_over(store.get(StudentId(1002)).unwrap());

        assert_eq!(patch.name, "Emma Johnson");
        assert_eq!(patch.grade, "Grade 12");
        assert_eq!(patch.status, Status::Active);
    }

    #[test]
    fn padded_status_is_normalized() {
        let mut store = seeded();
        let mut patch = StudentPatch::from(store.get(StudentId(1001)).unwrap());
        patch.status = Status::Other(" Graduated ".into());

        run(&mut store, StudentId(1001), patch).unwrap();

        let stored = store.get(StudentId(1001)).unwrap();
        assert_eq!(stored.status, Status::Graduated);
        assert!(store.backend().raw().unwrap().contains(r#""status":"Graduated""#));
    }

    #[test]
    fn blank_status_keeps_current_value() {
        let mut store = seeded();
        let changes = StudentChanges {
            status: Some(Status::Other("  ".into())),
            ..Default::default()
        };
        assert!(changes.is_empty());

        let patch = changes.merged_over(store.get(StudentId(1004)).unwrap());
        assert_eq!(patch.status, Status::Graduated);

        run(&mut store, StudentId(1004), patch).unwrap();
        assert_eq!(store.get(StudentId(1004)).unwrap().status, Status::Graduated);
    }
}
