//! Department model.

use chrono::NaiveDate;

use super::handles::{CourseId, InstructorId};

/// A department offering a catalog of courses.
///
/// The budget window is informational and not validated. The head is set
/// through [`Campus::appoint_head`](crate::campus::Campus::appoint_head) so
/// that the instructor side stays in step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    /// Department name.
    pub name: String,
    /// First day of the budget window.
    pub budget_start_date: NaiveDate,
    /// Last day of the budget window.
    pub budget_end_date: NaiveDate,
    pub(crate) head: Option<InstructorId>,
    offered_courses: Vec<CourseId>,
}

impl Department {
    /// Creates a department with no head and no courses.
    pub fn new(
        name: impl Into<String>,
        budget_start_date: NaiveDate,
        budget_end_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            budget_start_date,
            budget_end_date,
            head: None,
            offered_courses: Vec::new(),
        }
    }

    /// The head instructor, if one has been appointed.
    pub fn head(&self) -> Option<InstructorId> {
        self.head
    }

    /// Appends a course to the catalog. Duplicates are kept.
    pub fn add_course(&mut self, course: CourseId) {
        self.offered_courses.push(course);
    }

    /// The catalog in insertion order.
    pub fn offered_courses(&self) -> &[CourseId] {
        &self.offered_courses
    }
}
