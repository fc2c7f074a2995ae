//! Error types for the campus model and the ball simulator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the entity model, the seed loader, and the simulator
//! session can report.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the campus model.
///
/// All fallible operations on entities, the [`Campus`](crate::campus::Campus)
/// arena, and the seed loader return this error type.
///
/// # Example
///
/// ```
/// use campus_model::error::CampusError;
///
/// let error = CampusError::ConfigNotFound {
///     path: "/missing/campus.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Seed file not found: /missing/campus.yaml");
/// ```
#[derive(Debug, Error)]
pub enum CampusError {
    /// An argument failed a field guard (for example a negative salary).
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The field the argument was meant for.
        field: String,
        /// A description of why the value was rejected.
        message: String,
    },

    /// A student handle did not resolve to an entity in the campus.
    #[error("Student not found: {id}")]
    StudentNotFound {
        /// Display rendering of the handle.
        id: String,
    },

    /// An instructor handle did not resolve to an entity in the campus.
    #[error("Instructor not found: {id}")]
    InstructorNotFound {
        /// Display rendering of the handle.
        id: String,
    },

    /// A course handle did not resolve to an entity in the campus.
    #[error("Course not found: {id}")]
    CourseNotFound {
        /// Display rendering of the handle.
        id: String,
    },

    /// A department handle did not resolve to an entity in the campus.
    #[error("Department not found: {id}")]
    DepartmentNotFound {
        /// Display rendering of the handle.
        id: String,
    },

    /// Seed file was not found at the specified path.
    #[error("Seed file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Seed file could not be parsed.
    #[error("Failed to parse seed file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A seed entry referred to a key that was never declared.
    #[error("Unknown {kind} '{key}' referenced in seed")]
    UnknownReference {
        /// The kind of entity that was referenced (e.g. "course").
        kind: String,
        /// The key that could not be resolved.
        key: String,
    },

    /// Two seed entries of the same kind share a key.
    #[error("Duplicate {kind} key '{key}' in seed")]
    DuplicateKey {
        /// The kind of entity the key belongs to.
        kind: String,
        /// The repeated key.
        key: String,
    },
}

impl CampusError {
    /// Builds the error returned when a negative salary is assigned.
    pub fn negative_salary(value: Decimal) -> Self {
        Self::InvalidArgument {
            field: "salary".to_string(),
            message: format!("cannot be negative (got {})", value),
        }
    }
}

/// A type alias for Results that return CampusError.
pub type CampusResult<T> = Result<T, CampusError>;

/// Errors that end a ball simulator session.
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// Reading the console or writing the prompt failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A line that should have held an integer did not parse.
    #[error("Expected a whole number for {prompt}, got '{input}'")]
    InvalidNumber {
        /// What was being asked for.
        prompt: String,
        /// The raw line that was read.
        input: String,
    },
}
