//! Student model.

use std::collections::HashMap;

use crate::calculation::calculate_gpa;

use super::grade::Grade;
use super::handles::CourseId;
use super::person::{Person, PersonProfile};

/// A person enrolled in courses, holding one grade per course.
///
/// Grades are recorded through
/// [`Campus::enroll_in_course`](crate::campus::Campus::enroll_in_course), which
/// also updates the course roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    person: Person,
    grades: HashMap<CourseId, Grade>,
}

impl Student {
    /// Creates a student with no enrollments.
    pub fn new(person: Person) -> Self {
        Self {
            person,
            grades: HashMap::new(),
        }
    }

    /// Mutable access to the base person.
    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    /// Records `grade` for `course`, replacing any earlier grade.
    ///
    /// Returns the replaced grade.
    pub(crate) fn record_grade(&mut self, course: CourseId, grade: Grade) -> Option<Grade> {
        self.grades.insert(course, grade)
    }

    /// The grade held for `course`, if enrolled.
    pub fn grade_for(&self, course: CourseId) -> Option<Grade> {
        self.grades.get(&course).copied()
    }

    /// All grades keyed by course.
    pub fn grades(&self) -> &HashMap<CourseId, Grade> {
        &self.grades
    }

    /// Mean grade-point value over all enrollments; 0.0 with none.
    pub fn calculate_gpa(&self) -> f64 {
        calculate_gpa(self.grades.values())
    }
}

impl PersonProfile for Student {
    fn person(&self) -> &Person {
        &self.person
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use generational_arena::Index;
    use rust_decimal::Decimal;

    fn course(slot: usize) -> CourseId {
        CourseId(Index::from_raw_parts(slot, 0))
    }

    fn create_test_student() -> Student {
        Student::new(Person::new(
            "Katherine",
            NaiveDate::from_ymd_opt(2003, 8, 26).unwrap(),
        ))
    }

    #[test]
    fn test_gpa_without_enrollments_is_zero() {
        assert_eq!(create_test_student().calculate_gpa(), 0.0);
    }

    #[test]
    fn test_gpa_is_mean_of_grade_points() {
        let mut student = create_test_student();
        student.record_grade(course(0), Grade::A);
        student.record_grade(course(1), Grade::B);
        student.record_grade(course(2), Grade::C);
        assert_eq!(student.calculate_gpa(), 3.0);
    }

    #[test]
    fn test_record_grade_overwrites_existing() {
        let mut student = create_test_student();
        assert_eq!(student.record_grade(course(0), Grade::C), None);
        assert_eq!(student.record_grade(course(0), Grade::A), Some(Grade::C));

        assert_eq!(student.grades().len(), 1);
        assert_eq!(student.grade_for(course(0)), Some(Grade::A));
        assert_eq!(student.calculate_gpa(), 4.0);
    }

    #[test]
    fn test_unknown_grade_lowers_gpa() {
        let mut student = create_test_student();
        student.record_grade(course(0), Grade::A);
        student.record_grade(course(1), Grade::new('?'));
        assert_eq!(student.calculate_gpa(), 2.0);
    }

    #[test]
    fn test_student_salary_is_base_salary() {
        let mut student = create_test_student();
        student.person_mut().set_salary(Decimal::new(1200, 0)).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(student.calculate_salary_on(today), Decimal::new(1200, 0));
    }
}
