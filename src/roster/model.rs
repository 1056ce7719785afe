use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grade levels offered by the add and edit forms.
pub const GRADE_LEVELS: [&str; 4] = ["Grade 9", "Grade 10", "Grade 11", "Grade 12"];

/// Ids are allocated above this floor, so the first student gets 1001.
pub const ID_FLOOR: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(StudentId)
    }
}

/// Enrollment status. The set is open: anything the UI offers beyond the
/// known values is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    Active,
    Inactive,
    Graduated,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
            Status::Graduated => "Graduated",
            Status::Other(s) => s,
        }
    }
}

impl From<String> for Status {
    /// Surrounding whitespace is dropped; a blank value means Active.
    fn from(s: String) -> Self {
        match s.trim() {
            "" | "Active" => Status::Active,
            "Inactive" => Status::Inactive,
            "Graduated" => Status::Graduated,
            other => Status::Other(other.to_string()),
        }
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        Status::from(s.to_string())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student record as persisted under the `studentsData` key.
///
/// Field names on the wire are fixed (`date`, `dob`); changing them breaks
/// every existing roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub grade: String,
    #[serde(rename = "date")]
    pub enrollment_date: NaiveDate,
    pub status: Status,
    #[serde(default)]
    pub phone: String,
    #[serde(default, rename = "dob")]
    pub date_of_birth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Input for creating a student. Id, status and enrollment date are
/// assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub grade: String,
    pub phone: String,
    pub date_of_birth: String,
    pub address: String,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, email: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            grade: grade.into(),
            ..Self::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_date_of_birth(mut self, dob: impl Into<String>) -> Self {
        self.date_of_birth = dob.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Trims every field, the way form input is read.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            grade: self.grade.trim().to_string(),
            phone: self.phone.trim().to_string(),
            date_of_birth: self.date_of_birth.trim().to_string(),
            address: self.address.trim().to_string(),
        }
    }

    pub(crate) fn into_student(self, id: StudentId, enrollment_date: NaiveDate) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            grade: self.grade,
            enrollment_date,
            status: Status::Active,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            address: if self.address.is_empty() {
                None
            } else {
                Some(self.address)
            },
        }
    }
}

/// The editable subset of a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: String,
    pub email: String,
    pub grade: String,
    pub status: Status,
}

impl StudentPatch {
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            grade: self.grade.trim().to_string(),
            status: Status::from(String::from(self.status)),
        }
    }
}

impl From<&Student> for StudentPatch {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            grade: student.grade.clone(),
            status: student.status.clone(),
        }
    }
}

impl Student {
    pub(crate) fn apply(&mut self, patch: StudentPatch) {
        self.name = patch.name;
        self.email = patch.email;
        self.grade = patch.grade;
        self.status = patch.status;
    }
}

/// The sample roster written on first run.
pub fn default_roster() -> Vec<Student> {
    let enrolled = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap_or(NaiveDate::MIN);
    let sample = |id: u64, name: &str, email: &str, grade: &str, status: Status, phone: &str, dob: &str| {
        Student {
            id: StudentId(id),
            name: name.to_string(),
            email: email.to_string(),
            grade: grade.to_string(),
            enrollment_date: enrolled,
            status,
            phone: phone.to_string(),
            date_of_birth: dob.to_string(),
            address: None,
        }
    };

    vec![
        sample(1001, "John Smith", "john.smith@school.edu", "Grade 10", Status::Active, "555-0101", "2008-05-15"),
        sample(1002, "Emma Johnson", "emma.j@school.edu", "Grade 11", Status::Active, "555-0102", "2007-03-22"),
        sample(1003, "Michael Brown", "michael.b@school.edu", "Grade 9", Status::Active, "555-0103", "2009-07-30"),
        sample(1004, "Sarah Davis", "sarah.d@school.edu", "Grade 12", Status::Graduated, "555-0104", "2006-11-12"),
        sample(1005, "David Wilson", "david.w@school.edu", "Grade 10", Status::Active, "555-0105", "2008-01-08"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_uses_legacy_field_names() {
        let student = default_roster().remove(0);
        let json = serde_json::to_value(&student).unwrap();

        assert_eq!(json["id"], 1001);
        assert_eq!(json["date"], "2023-09-01");
        assert_eq!(json["dob"], "2008-05-15");
        assert_eq!(json["status"], "Active");
        assert!(json.get("address").is_none());
    }

    #[test]
    fn parses_legacy_record_without_optional_fields() {
        let json = r#"{"id":1009,"name":"Ann Lee","email":"ann@school.edu","grade":"Grade 9","date":"2024-01-02","status":"Suspended"}"#;
        let student: Student = serde_json::from_str(json).unwrap();

        assert_eq!(student.id, StudentId(1009));
        assert_eq!(student.status, Status::Other("Suspended".into()));
        assert_eq!(student.phone, "");
        assert_eq!(student.address, None);
    }

    #[test]
    fn status_keeps_unknown_values() {
        assert_eq!(Status::from("Graduated"), Status::Graduated);
        assert_eq!(Status::from("On Leave").as_str(), "On Leave");
        assert_eq!(String::from(Status::Inactive), "Inactive");
    }

    #[test]
    fn status_ignores_padding_and_blank() {
        assert_eq!(Status::from(" Graduated "), Status::Graduated);
        assert_eq!(Status::from(" On Leave\t"), Status::Other("On Leave".into()));
        assert_eq!(Status::from("   "), Status::Active);

        let json = r#"{"id":1009,"name":"Ann Lee","email":"ann@school.edu","grade":"Grade 9","date":"2024-01-02","status":""}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.status, Status::Active);
    }

    #[test]
    fn new_student_trims_and_drops_empty_address() {
        let draft = NewStudent::new("  Ann ", " ann@school.edu ", "Grade 9").with_address("   ");
        let student = draft
            .trimmed()
            .into_student(StudentId(1001), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        assert_eq!(student.name, "Ann");
        assert_eq!(student.email, "ann@school.edu");
        assert_eq!(student.status, Status::Active);
        assert_eq!(student.address, None);
    }

    #[test]
    fn student_id_parses_with_whitespace() {
        assert_eq!(" 1002 ".parse::<StudentId>().unwrap(), StudentId(1002));
        assert!("abc".parse::<StudentId>().is_err());
    }
}
