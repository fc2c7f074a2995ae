//! Seed types for building a campus from a file.
//!
//! These are plain deserialization targets. Every entity carries a `key`
//! that is only meaningful inside the seed, used by later entries to refer
//! to it (a department's courses, an enrollment's student).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Grade;

/// Fields shared by every person-like seed entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonSeed {
    /// Key used to refer to this entry elsewhere in the seed.
    pub key: String,
    /// Full name.
    pub name: String,
    /// Date of birth (`YYYY-MM-DD`).
    pub date_of_birth: NaiveDate,
    /// Base salary; defaults to zero. Negative values are rejected when building.
    #[serde(default)]
    pub salary: Decimal,
    /// Addresses in order.
    #[serde(default)]
    pub addresses: Vec<String>,
}

/// A student entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentSeed {
    /// The student's person fields.
    #[serde(flatten)]
    pub person: PersonSeed,
}

/// An instructor entry.
#[derive(Debug, Clone, Deserialize)]
pub struct InstructorSeed {
    /// The instructor's person fields.
    #[serde(flatten)]
    pub person: PersonSeed,
    /// Date the instructor joined (`YYYY-MM-DD`).
    pub join_date: NaiveDate,
    /// Key of the department the instructor belongs to.
    #[serde(default)]
    pub department: Option<String>,
}

/// A course entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseSeed {
    /// Key used to refer to this course elsewhere in the seed.
    pub key: String,
    /// Course name.
    pub name: String,
}

/// A department entry.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentSeed {
    /// Key used to refer to this department elsewhere in the seed.
    pub key: String,
    /// Department name.
    pub name: String,
    /// First day of the budget window.
    pub budget_start_date: NaiveDate,
    /// Last day of the budget window.
    pub budget_end_date: NaiveDate,
    /// Key of the head instructor.
    #[serde(default)]
    pub head: Option<String>,
    /// Keys of offered courses, in catalog order.
    #[serde(default)]
    pub courses: Vec<String>,
}

/// An enrollment of a student in a course.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentSeed {
    /// Student key.
    pub student: String,
    /// Course key.
    pub course: String,
    /// Single-letter grade.
    pub grade: Grade,
}

/// The complete seed file.
///
/// Every section is optional. Enrollments are applied in order after all
/// entities exist.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CampusSeed {
    /// People who are neither students nor instructors.
    #[serde(default)]
    pub people: Vec<PersonSeed>,
    /// Students.
    #[serde(default)]
    pub students: Vec<StudentSeed>,
    /// Instructors.
    #[serde(default)]
    pub instructors: Vec<InstructorSeed>,
    /// Courses.
    #[serde(default)]
    pub courses: Vec<CourseSeed>,
    /// Departments.
    #[serde(default)]
    pub departments: Vec<DepartmentSeed>,
    /// Enrollments.
    #[serde(default)]
    pub enrollments: Vec<EnrollmentSeed>,
}
