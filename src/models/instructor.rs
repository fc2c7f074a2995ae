//! Instructor model.

use chrono::NaiveDate;

use crate::calculation::{SalaryBreakdown, apply_seniority_bonus, completed_years, today};

use super::handles::DepartmentId;
use super::person::{Person, PersonProfile};

/// A person employed to teach, paid a seniority bonus on top of their base salary.
///
/// The department link and head flag are maintained by
/// [`Campus::assign_department`](crate::campus::Campus::assign_department) and
/// [`Campus::appoint_head`](crate::campus::Campus::appoint_head).
///
/// # Example
///
/// ```
/// use campus_model::models::{Instructor, Person, PersonProfile};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let person = Person::with_salary(
///     "Alan",
///     NaiveDate::from_ymd_opt(1980, 6, 23).unwrap(),
///     Decimal::new(50000, 0),
/// )
/// .unwrap();
/// let instructor = Instructor::new(person, NaiveDate::from_ymd_opt(2019, 9, 1).unwrap());
///
/// let today = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
/// assert_eq!(instructor.years_of_experience_on(today), 5);
/// assert_eq!(instructor.calculate_salary_on(today), Decimal::new(55000, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Instructor {
    person: Person,
    /// The date the instructor joined.
    pub join_date: NaiveDate,
    pub(crate) is_head_of_department: bool,
    pub(crate) department: Option<DepartmentId>,
}

impl Instructor {
    /// Creates an instructor with no department.
    pub fn new(person: Person, join_date: NaiveDate) -> Self {
        Self {
            person,
            join_date,
            is_head_of_department: false,
            department: None,
        }
    }

    /// Mutable access to the base person, e.g. to change the salary.
    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    /// Whether the instructor currently heads a department.
    pub fn is_head_of_department(&self) -> bool {
        self.is_head_of_department
    }

    /// The department the instructor belongs to, if any.
    pub fn department(&self) -> Option<DepartmentId> {
        self.department
    }

    /// Completed years since the join date as of `today`.
    pub fn years_of_experience_on(&self, today: NaiveDate) -> u32 {
        completed_years(self.join_date, today)
    }

    /// Completed years since the join date as of the local calendar date.
    pub fn years_of_experience(&self) -> u32 {
        self.years_of_experience_on(today())
    }
}

impl PersonProfile for Instructor {
    fn person(&self) -> &Person {
        &self.person
    }

    /// Base salary plus the seniority bonus as of `today`.
    fn salary_breakdown_on(&self, today: NaiveDate) -> SalaryBreakdown {
        apply_seniority_bonus(self.person.salary(), self.years_of_experience_on(today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_instructor(base: &str, join_date: NaiveDate) -> Instructor {
        let person = Person::with_salary("Edsger", date(1970, 5, 11), dec(base)).unwrap();
        Instructor::new(person, join_date)
    }

    #[test]
    fn test_new_instructor_has_no_department() {
        let instructor = create_test_instructor("50000", date(2020, 1, 1));
        assert!(!instructor.is_head_of_department());
        assert_eq!(instructor.department(), None);
    }

    #[test]
    fn test_salary_adds_one_thousand_per_year() {
        let instructor = create_test_instructor("50000", date(2019, 3, 10));
        assert_eq!(instructor.calculate_salary_on(date(2024, 3, 10)), dec("55000"));
    }

    #[test]
    fn test_year_not_counted_before_join_anniversary() {
        let instructor = create_test_instructor("50000", date(2019, 3, 10));
        assert_eq!(instructor.years_of_experience_on(date(2024, 3, 9)), 4);
        assert_eq!(instructor.calculate_salary_on(date(2024, 3, 9)), dec("54000"));
    }

    #[test]
    fn test_salary_follows_base_salary_changes() {
        let mut instructor = create_test_instructor("50000", date(2014, 1, 1));
        instructor.person_mut().set_salary(dec("60000")).unwrap();

        let breakdown = instructor.salary_breakdown_on(date(2024, 1, 1));
        assert_eq!(breakdown.base, dec("60000"));
        assert_eq!(breakdown.bonus, dec("10000"));
        assert_eq!(breakdown.total, dec("70000"));
    }

    #[test]
    fn test_rejected_salary_keeps_previous_base() {
        let mut instructor = create_test_instructor("50000", date(2024, 1, 1));
        assert!(instructor.person_mut().set_salary(dec("-1")).is_err());
        assert_eq!(instructor.calculate_salary_on(date(2024, 6, 1)), dec("50000"));
    }

    #[test]
    fn test_age_comes_from_base_person() {
        let instructor = create_test_instructor("0", date(2000, 1, 1));
        assert_eq!(instructor.age_on(date(2024, 5, 10)), 53);
        assert_eq!(instructor.age_on(date(2024, 5, 11)), 54);
    }
}
