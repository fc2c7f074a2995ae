//! Seniority bonus calculation.
//!
//! Instructors earn their base salary plus a fixed bonus for every
//! completed year since they joined.

use rust_decimal::Decimal;

/// Returns the bonus paid for each completed year of experience.
///
/// The bonus is 1000 currency units per year.
pub fn seniority_bonus_per_year() -> Decimal {
    Decimal::new(1000, 0)
}

/// The result of a salary calculation, split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryBreakdown {
    /// The salary produced by the base computation.
    pub base: Decimal,
    /// Completed years used to compute the bonus.
    pub years_of_experience: u32,
    /// The seniority bonus on top of the base.
    pub bonus: Decimal,
    /// `base + bonus`.
    pub total: Decimal,
}

impl SalaryBreakdown {
    /// A breakdown with no bonus component.
    pub fn base_only(base: Decimal) -> Self {
        Self {
            base,
            years_of_experience: 0,
            bonus: Decimal::ZERO,
            total: base,
        }
    }
}

/// Applies the seniority bonus to an already computed base salary.
///
/// The base is taken as given so that whatever produced it (today a plain
/// field read) composes with the bonus.
///
/// # Examples
///
/// ```
/// use campus_model::calculation::apply_seniority_bonus;
/// use rust_decimal::Decimal;
///
/// let breakdown = apply_seniority_bonus(Decimal::new(50000, 0), 5);
/// assert_eq!(breakdown.bonus, Decimal::new(5000, 0));
/// assert_eq!(breakdown.total, Decimal::new(55000, 0));
/// ```
pub fn apply_seniority_bonus(base: Decimal, years_of_experience: u32) -> SalaryBreakdown {
    let bonus = Decimal::from(years_of_experience) * seniority_bonus_per_year();
    SalaryBreakdown {
        base,
        years_of_experience,
        bonus,
        total: base + bonus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_bonus_per_year_is_one_thousand() {
        assert_eq!(seniority_bonus_per_year(), dec("1000"));
    }

    #[test]
    fn test_zero_years_adds_nothing() {
        let breakdown = apply_seniority_bonus(dec("42000.50"), 0);
        assert_eq!(breakdown.bonus, Decimal::ZERO);
        assert_eq!(breakdown.total, dec("42000.50"));
    }

    #[test]
    fn test_bonus_scales_with_years() {
        let breakdown = apply_seniority_bonus(dec("50000"), 12);
        assert_eq!(breakdown.years_of_experience, 12);
        assert_eq!(breakdown.bonus, dec("12000"));
        assert_eq!(breakdown.total, dec("62000"));
    }

    #[test]
    fn test_base_only_has_no_bonus() {
        let breakdown = SalaryBreakdown::base_only(dec("30000"));
        assert_eq!(breakdown.total, breakdown.base);
        assert_eq!(breakdown.years_of_experience, 0);
    }
}
