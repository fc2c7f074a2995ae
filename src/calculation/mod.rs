//! Derived computations for the campus model.
//!
//! This module contains the anniversary-aware year counting used for age
//! and years of experience, the seniority bonus applied to instructor
//! salaries, and the grade point average.

mod gpa;
mod salary;
mod tenure;

pub use gpa::calculate_gpa;
pub use salary::{SalaryBreakdown, apply_seniority_bonus, seniority_bonus_per_year};
pub use tenure::{completed_years, today};
