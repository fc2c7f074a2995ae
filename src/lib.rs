//! Campus entity model and console ball simulator.
//!
//! This crate models people, students, instructors, courses and departments
//! with their derived computations (age, salary with seniority bonus, GPA,
//! enrollment bookkeeping), and ships a small interactive ball simulator.

#![warn(missing_docs)]

pub mod calculation;
pub mod campus;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod simulator;
