//! Person model and the capability shared by every person-like entity.
//!
//! [`Person`] holds identity, salary and addresses. [`Student`](super::Student)
//! and [`Instructor`](super::Instructor) embed a `Person` and expose it through
//! [`PersonProfile`], overriding only the salary computation where needed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::calculation::{SalaryBreakdown, completed_years, today};
use crate::error::{CampusError, CampusResult};

/// Age, salary and address reporting for anything that is a person.
///
/// Implementors provide access to their embedded [`Person`] and may override
/// [`salary_breakdown_on`](PersonProfile::salary_breakdown_on) to add pay on
/// top of the base salary. Everything else is derived from the base.
pub trait PersonProfile {
    /// The embedded base person.
    fn person(&self) -> &Person;

    /// Salary components as of `today`. Only the base salary by default.
    fn salary_breakdown_on(&self, _today: NaiveDate) -> SalaryBreakdown {
        SalaryBreakdown::base_only(self.person().salary())
    }

    /// Salary as of `today`.
    fn calculate_salary_on(&self, today: NaiveDate) -> Decimal {
        self.salary_breakdown_on(today).total
    }

    /// Age in completed years as of `today`.
    fn age_on(&self, today: NaiveDate) -> u32 {
        completed_years(self.person().date_of_birth, today)
    }

    /// Age in completed years as of the local calendar date.
    fn calculate_age(&self) -> u32 {
        self.age_on(today())
    }

    /// Salary as of the local calendar date.
    fn calculate_salary(&self) -> Decimal {
        self.calculate_salary_on(today())
    }

    /// Addresses in the order they were added.
    fn addresses(&self) -> &[String] {
        self.person().addresses()
    }
}

/// A person known to the campus.
///
/// The salary is never negative: [`Person::set_salary`] rejects negative
/// values and leaves the previous salary in place.
///
/// # Example
///
/// ```
/// use campus_model::models::{Person, PersonProfile};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut person = Person::new("Grace", NaiveDate::from_ymd_opt(2000, 6, 15).unwrap());
/// person.set_salary(Decimal::new(40000, 0)).unwrap();
/// person.add_address("1 Main St");
///
/// assert_eq!(person.age_on(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()), 23);
/// assert_eq!(person.salary(), Decimal::new(40000, 0));
/// assert!(person.set_salary(Decimal::new(-1, 0)).is_err());
/// assert_eq!(person.salary(), Decimal::new(40000, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Full name.
    pub name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    salary: Decimal,
    addresses: Vec<String>,
}

impl Person {
    /// Creates a person with a zero salary and no addresses.
    pub fn new(name: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
            salary: Decimal::ZERO,
            addresses: Vec::new(),
        }
    }

    /// Creates a person with the given salary.
    ///
    /// Fails with [`CampusError::InvalidArgument`] when `salary` is negative.
    pub fn with_salary(
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        salary: Decimal,
    ) -> CampusResult<Self> {
        let mut person = Self::new(name, date_of_birth);
        person.set_salary(salary)?;
        Ok(person)
    }

    /// The stored salary.
    pub fn salary(&self) -> Decimal {
        self.salary
    }

    /// Replaces the salary.
    ///
    /// Negative values are rejected with [`CampusError::InvalidArgument`]
    /// and the stored salary is unchanged.
    pub fn set_salary(&mut self, value: Decimal) -> CampusResult<()> {
        if value < Decimal::ZERO {
            warn!(person = %self.name, salary = %value, "Rejected negative salary");
            return Err(CampusError::negative_salary(value));
        }
        self.salary = value;
        Ok(())
    }

    /// Appends an address. No deduplication or format checks are made.
    pub fn add_address(&mut self, address: impl Into<String>) {
        self.addresses.push(address.into());
    }

    /// Addresses in insertion order.
    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }
}

impl PersonProfile for Person {
    fn person(&self) -> &Person {
        self
    }
}
