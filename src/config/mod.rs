//! Seed configuration for the campus model.
//!
//! This module loads a [`Campus`](crate::campus::Campus) from a YAML or JSON
//! seed file describing people, students, instructors, courses, departments
//! and enrollments.
//!
//! # Example
//!
//! ```no_run
//! use campus_model::config::SeedLoader;
//!
//! let seeded = SeedLoader::load("./config/sample/campus.yaml").unwrap();
//! println!("Loaded {} students", seeded.campus().students().count());
//! ```

mod loader;
mod types;

pub use loader::{SeedLoader, SeededCampus};
pub use types::{
    CampusSeed, CourseSeed, DepartmentSeed, EnrollmentSeed, InstructorSeed, PersonSeed,
    StudentSeed,
};
