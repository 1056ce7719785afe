use crate::model::Student;

/// Search box plus the grade and status selects.
///
/// Empty strings and `None` are both "no filter". The query is a
/// case-insensitive substring match over name, email and the decimal id;
/// grade and status must match exactly. A student is kept only when all
/// three hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub query: String,
    pub grade: Option<String>,
    pub status: Option<String>,
}

impl StudentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && active(&self.grade).is_none() && active(&self.status).is_none()
    }

    pub fn matches(&self, student: &Student) -> bool {
        self.matches_query(student)
            && active(&self.grade).map_or(true, |g| student.grade == g)
            && active(&self.status).map_or(true, |s| student.status.as_str() == s)
    }

    /// Returns the matching students in their original order.
    pub fn apply<'a>(&self, students: &'a [Student]) -> Vec<&'a Student> {
        students.iter().filter(|s| self.matches(s)).collect()
    }

    fn matches_query(&self, student: &Student) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        student.name.to_lowercase().contains(&needle)
            || student.email.to_lowercase().contains(&needle)
            || student.id.to_string().contains(&needle)
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
