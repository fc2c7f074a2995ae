//! Seed loading functionality.
//!
//! This module provides the [`SeedLoader`] type for reading campus seeds
//! from YAML or JSON files, and [`SeededCampus`], the built campus together
//! with the handles assigned to each seed key.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::hash::Hash;
use std::path::Path;

use tracing::info;

use crate::campus::Campus;
use crate::error::{CampusError, CampusResult};
use crate::models::{
    Course, CourseId, Department, DepartmentId, Instructor, InstructorId, Person, PersonId,
    Student, StudentId,
};

use super::types::{CampusSeed, PersonSeed};

/// Reads campus seeds and builds campuses from them.
///
/// Files ending in `.json` are parsed as JSON; anything else as YAML.
///
/// # Seed Format
///
/// ```text
/// students:
///   - key: ada
///     name: Ada Lovelace
///     date_of_birth: 2003-12-10
/// courses:
///   - key: cs101
///     name: Introduction to Programming
/// enrollments:
///   - student: ada
///     course: cs101
///     grade: A
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedLoader;

impl SeedLoader {
    /// Loads a seed file and builds a campus from it.
    ///
    /// # Returns
    ///
    /// Returns the seeded campus, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file does not parse (`ConfigParseError`)
    /// - An entry refers to an undeclared key (`UnknownReference`)
    /// - A key is declared twice for one entity kind (`DuplicateKey`)
    /// - A salary is negative (`InvalidArgument`)
    pub fn load<P: AsRef<Path>>(path: P) -> CampusResult<SeededCampus> {
        let path = path.as_ref();
        let seed = Self::read_seed(path)?;
        let seeded = SeededCampus::build(&seed)?;
        info!(
            path = %path.display(),
            students = seeded.students.len(),
            instructors = seeded.instructors.len(),
            courses = seeded.courses.len(),
            departments = seeded.departments.len(),
            enrollments = seed.enrollments.len(),
            "Loaded campus seed"
        );
        Ok(seeded)
    }

    /// Parses a seed file without building it.
    pub fn read_seed<P: AsRef<Path>>(path: P) -> CampusResult<CampusSeed> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CampusError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| CampusError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })
        } else {
            Self::parse_yaml(&content, &path_str)
        }
    }

    /// Builds a campus from YAML seed text.
    pub fn from_yaml_str(content: &str) -> CampusResult<SeededCampus> {
        let seed = Self::parse_yaml(content, "<inline>")?;
        SeededCampus::build(&seed)
    }

    fn parse_yaml(content: &str, path: &str) -> CampusResult<CampusSeed> {
        serde_yaml::from_str(content).map_err(|e| CampusError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

/// A campus built from a seed, with the handle assigned to every seed key.
#[derive(Debug, Default)]
pub struct SeededCampus {
    campus: Campus,
    people: HashMap<String, PersonId>,
    students: HashMap<String, StudentId>,
    instructors: HashMap<String, InstructorId>,
    courses: HashMap<String, CourseId>,
    departments: HashMap<String, DepartmentId>,
}

impl SeededCampus {
    /// Builds a campus through the public campus operations.
    ///
    /// Entities are created first, then departments get their catalogs,
    /// instructors their departments, department heads are appointed, and
    /// finally enrollments are applied in seed order.
    pub fn build(seed: &CampusSeed) -> CampusResult<Self> {
        let mut seeded = Self::default();

        for entry in &seed.people {
            let person = person_from(entry)?;
            let id = seeded.campus.add_person(person);
            register(&mut seeded.people, "person", &entry.key, id)?;
        }

        for entry in &seed.students {
            let student = Student::new(person_from(&entry.person)?);
            let id = seeded.campus.add_student(student);
            register(&mut seeded.students, "student", &entry.person.key, id)?;
        }

        for entry in &seed.instructors {
            let instructor = Instructor::new(person_from(&entry.person)?, entry.join_date);
            let id = seeded.campus.add_instructor(instructor);
            register(&mut seeded.instructors, "instructor", &entry.person.key, id)?;
        }

        for entry in &seed.courses {
            let id = seeded.campus.add_course(Course::new(entry.name.clone()));
            register(&mut seeded.courses, "course", &entry.key, id)?;
        }

        for entry in &seed.departments {
            let department = Department::new(
                entry.name.clone(),
                entry.budget_start_date,
                entry.budget_end_date,
            );
            let id = seeded.campus.add_department(department);
            register(&mut seeded.departments, "department", &entry.key, id)?;
        }

        for entry in &seed.departments {
            let department = lookup(&seeded.departments, "department", &entry.key)?;
            for course_key in &entry.courses {
                let course = lookup(&seeded.courses, "course", course_key)?;
                seeded.campus.offer_course(department, course)?;
            }
        }

        for entry in &seed.instructors {
            if let Some(department_key) = &entry.department {
                let instructor = lookup(&seeded.instructors, "instructor", &entry.person.key)?;
                let department = lookup(&seeded.departments, "department", department_key)?;
                seeded.campus.assign_department(instructor, department)?;
            }
        }

        for entry in &seed.departments {
            if let Some(head_key) = &entry.head {
                let department = lookup(&seeded.departments, "department", &entry.key)?;
                let instructor = lookup(&seeded.instructors, "instructor", head_key)?;
                seeded.campus.appoint_head(department, instructor)?;
            }
        }

        for entry in &seed.enrollments {
            let student = lookup(&seeded.students, "student", &entry.student)?;
            let course = lookup(&seeded.courses, "course", &entry.course)?;
            seeded.campus.enroll_in_course(student, course, entry.grade)?;
        }

        Ok(seeded)
    }

    /// The built campus.
    pub fn campus(&self) -> &Campus {
        &self.campus
    }

    /// Mutable access to the built campus.
    pub fn campus_mut(&mut self) -> &mut Campus {
        &mut self.campus
    }

    /// Gives up the key maps and returns the campus.
    pub fn into_campus(self) -> Campus {
        self.campus
    }

    /// Handle of the person declared under `key`.
    pub fn person(&self, key: &str) -> Option<PersonId> {
        self.people.get(key).copied()
    }

    /// Handle of the student declared under `key`.
    pub fn student(&self, key: &str) -> Option<StudentId> {
        self.students.get(key).copied()
    }

    /// Handle of the instructor declared under `key`.
    pub fn instructor(&self, key: &str) -> Option<InstructorId> {
        self.instructors.get(key).copied()
    }

    /// Handle of the course declared under `key`.
    pub fn course(&self, key: &str) -> Option<CourseId> {
        self.courses.get(key).copied()
    }

    /// Handle of the department declared under `key`.
    pub fn department(&self, key: &str) -> Option<DepartmentId> {
        self.departments.get(key).copied()
    }
}

fn person_from(entry: &PersonSeed) -> CampusResult<Person> {
    let mut person = Person::with_salary(entry.name.clone(), entry.date_of_birth, entry.salary)?;
    for address in &entry.addresses {
        person.add_address(address.clone());
    }
    Ok(person)
}

fn register<T>(keys: &mut HashMap<String, T>, kind: &str, key: &str, id: T) -> CampusResult<()> {
    match keys.entry(key.to_string()) {
        Entry::Occupied(_) => Err(CampusError::DuplicateKey {
            kind: kind.to_string(),
            key: key.to_string(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(id);
            Ok(())
        }
    }
}

fn lookup<T: Copy + Eq + Hash>(keys: &HashMap<String, T>, kind: &str, key: &str) -> CampusResult<T> {
    keys.get(key)
        .copied()
        .ok_or_else(|| CampusError::UnknownReference {
            kind: kind.to_string(),
            key: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Grade, PersonProfile};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_path() -> &'static str {
        "./config/sample/campus.yaml"
    }

    const SMALL_SEED: &str = r#"
students:
  - key: ada
    name: Ada Lovelace
    date_of_birth: 2003-12-10
    addresses: ["12 St James's Square"]
instructors:
  - key: babbage
    name: Charles Babbage
    date_of_birth: 1971-12-26
    salary: "50000"
    join_date: 2015-09-01
courses:
  - key: engines
    name: Analytical Engines
departments:
  - key: maths
    name: Mathematics
    budget_start_date: 2024-07-01
    budget_end_date: 2025-06-30
    head: babbage
    courses: [engines]
enrollments:
  - student: ada
    course: engines
    grade: A
"#;

    #[test]
    fn test_from_yaml_str_builds_all_links() {
        let seeded = SeedLoader::from_yaml_str(SMALL_SEED).unwrap();
        let campus = seeded.campus();

        let ada = seeded.student("ada").unwrap();
        let babbage = seeded.instructor("babbage").unwrap();
        let engines = seeded.course("engines").unwrap();
        let maths = seeded.department("maths").unwrap();

        assert_eq!(campus.student(ada).unwrap().grade_for(engines), Some(Grade::A));
        assert_eq!(campus.course(engines).unwrap().enrolled_students(), [ada]);
        assert_eq!(campus.department(maths).unwrap().offered_courses(), [engines]);
        assert_eq!(campus.department(maths).unwrap().head(), Some(babbage));

        let instructor = campus.instructor(babbage).unwrap();
        assert!(instructor.is_head_of_department());
        assert_eq!(instructor.department(), Some(maths));
        assert_eq!(
            instructor.calculate_salary_on(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()),
            dec("60000")
        );
    }

    #[test]
    fn test_addresses_and_default_salary() {
        let seeded = SeedLoader::from_yaml_str(SMALL_SEED).unwrap();
        let ada = seeded.campus().student(seeded.student("ada").unwrap()).unwrap();
        assert_eq!(ada.addresses(), ["12 St James's Square"]);
        assert_eq!(ada.person().salary(), Decimal::ZERO);
    }

    #[test]
    fn test_empty_seed_builds_empty_campus() {
        let seeded = SeedLoader::from_yaml_str("{}").unwrap();
        assert_eq!(seeded.campus().students().count(), 0);
        assert_eq!(seeded.campus().courses().count(), 0);
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let seed = r#"
people:
  - key: visitor
    name: Visitor
    date_of_birth: 1990-01-01
    salary: "-1"
"#;
        let result = SeedLoader::from_yaml_str(seed);
        assert!(matches!(result, Err(CampusError::InvalidArgument { .. })));
    }

    #[test]
    fn test_unknown_course_in_enrollment() {
        let seed = r#"
students:
  - key: ada
    name: Ada
    date_of_birth: 2003-12-10
enrollments:
  - student: ada
    course: missing
    grade: B
"#;
        match SeedLoader::from_yaml_str(seed) {
            Err(CampusError::UnknownReference { kind, key }) => {
                assert_eq!(kind, "course");
                assert_eq!(key, "missing");
            }
            other => panic!("Expected UnknownReference, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_course_key() {
        let seed = r#"
courses:
  - key: cs101
    name: One
  - key: cs101
    name: Two
"#;
        assert!(matches!(
            SeedLoader::from_yaml_str(seed),
            Err(CampusError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let result = SeedLoader::from_yaml_str("students: [unterminated");
        assert!(matches!(result, Err(CampusError::ConfigParseError { .. })));
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        match SeedLoader::load("./config/does-not-exist.yaml") {
            Err(CampusError::ConfigNotFound { path }) => {
                assert!(path.contains("does-not-exist.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_sample_seed() {
        let result = SeedLoader::load(sample_path());
        assert!(result.is_ok(), "Failed to load seed: {:?}", result.err());

        let seeded = result.unwrap();
        assert!(seeded.campus().students().count() > 0);
        assert!(seeded.campus().departments().count() > 0);
    }

    #[test]
    fn test_load_sample_json_seed() {
        let result = SeedLoader::load("./config/sample/campus.json");
        assert!(result.is_ok(), "Failed to load seed: {:?}", result.err());
        assert_eq!(result.unwrap().campus().courses().count(), 2);
    }
}
