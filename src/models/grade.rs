//! Letter grades.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single-letter course grade.
///
/// Any character is accepted. The letters `A` to `D` and `F` carry
/// grade points; every other character (including lowercase letters)
/// is scored as 0.0.
///
/// Serialized as a one-character string.
///
/// # Example
///
/// ```
/// use campus_model::models::Grade;
///
/// assert_eq!(Grade::B.points(), 3.0);
/// assert_eq!(Grade::new('X').points(), 0.0);
/// assert!(!Grade::new('X').is_recognized());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grade(char);

impl Grade {
    /// Excellent, 4.0 points.
    pub const A: Grade = Grade('A');
    /// Good, 3.0 points.
    pub const B: Grade = Grade('B');
    /// Satisfactory, 2.0 points.
    pub const C: Grade = Grade('C');
    /// Passing, 1.0 point.
    pub const D: Grade = Grade('D');
    /// Failing, 0.0 points.
    pub const F: Grade = Grade('F');

    /// Wraps any letter as a grade.
    pub const fn new(letter: char) -> Self {
        Self(letter)
    }

    /// The letter as given.
    pub fn letter(self) -> char {
        self.0
    }

    /// Grade-point value of this letter.
    pub fn points(self) -> f64 {
        match self.0 {
            'A' => 4.0,
            'B' => 3.0,
            'C' => 2.0,
            'D' => 1.0,
            _ => 0.0,
        }
    }

    /// Returns true for the letters A, B, C, D and F.
    pub fn is_recognized(self) -> bool {
        matches!(self.0, 'A' | 'B' | 'C' | 'D' | 'F')
    }
}

impl From<char> for Grade {
    fn from(letter: char) -> Self {
        Self(letter)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
