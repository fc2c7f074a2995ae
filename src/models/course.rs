//! Course model.

use super::handles::StudentId;

/// A course and its roster.
///
/// The roster keeps insertion order and does not deduplicate: a student
/// enrolled twice appears twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Course name.
    pub name: String,
    enrolled_students: Vec<StudentId>,
}

impl Course {
    /// Creates a course with an empty roster.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enrolled_students: Vec::new(),
        }
    }

    /// Appends a student to the roster unconditionally.
    pub fn add_student(&mut self, student: StudentId) {
        self.enrolled_students.push(student);
    }

    /// The roster in insertion order.
    pub fn enrolled_students(&self) -> &[StudentId] {
        &self.enrolled_students
    }
}
