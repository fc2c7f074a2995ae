//! Core data models for the campus.
//!
//! This module contains the person-derived entities, courses, departments,
//! the typed handles that link them, and the ball simulator's value objects.

mod ball;
mod course;
mod department;
mod grade;
mod handles;
mod instructor;
mod person;
mod student;

pub use ball::{Ball, Color};
pub use course::Course;
pub use department::Department;
pub use grade::Grade;
pub use handles::{CourseId, DepartmentId, InstructorId, PersonId, StudentId};
pub use instructor::Instructor;
pub use person::{Person, PersonProfile};
pub use student::Student;
