//! Grade point average calculation.

use crate::models::Grade;

/// Computes the mean grade-point value of a set of grades.
///
/// Returns 0.0 when there are no grades. Unrecognized letters contribute
/// 0.0 points but still count towards the number of grades.
///
/// # Examples
///
/// ```
/// use campus_model::calculation::calculate_gpa;
/// use campus_model::models::Grade;
///
/// assert_eq!(calculate_gpa(&[Grade::A, Grade::B, Grade::C]), 3.0);
/// let none: [Grade; 0] = [];
/// assert_eq!(calculate_gpa(&none), 0.0);
/// ```
pub fn calculate_gpa<'a, I>(grades: I) -> f64
where
    I: IntoIterator<Item = &'a Grade>,
{
    let (total_points, count) = grades
        .into_iter()
        .fold((0.0, 0usize), |(points, count), grade| {
            (points + grade.points(), count + 1)
        });

    if count == 0 {
        return 0.0;
    }

    total_points / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_grades_is_zero() {
        let grades: Vec<Grade> = Vec::new();
        assert_eq!(calculate_gpa(&grades), 0.0);
    }

    #[test]
    fn test_mean_of_a_b_c() {
        assert_eq!(calculate_gpa(&[Grade::A, Grade::B, Grade::C]), 3.0);
    }

    #[test]
    fn test_single_f_is_zero() {
        assert_eq!(calculate_gpa(&[Grade::F]), 0.0);
    }

    #[test]
    fn test_unrecognized_letter_counts_as_zero() {
        let grades = [Grade::A, Grade::new('Z')];
        assert_eq!(calculate_gpa(&grades), 2.0);
    }

    #[test]
    fn test_lowercase_letter_is_unrecognized() {
        assert_eq!(calculate_gpa(&[Grade::new('a')]), 0.0);
    }

    #[test]
    fn test_all_recognized_letters() {
        let grades = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];
        assert_eq!(calculate_gpa(&grades), 2.0);
    }
}
