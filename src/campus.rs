//! The campus arena.
//!
//! A [`Campus`] owns every person, student, instructor, course and department
//! and hands out typed handles for them. Cross references between entities are
//! handles, so resolving a roster or a catalog is a lookup here rather than a
//! pointer dereference.
//!
//! # Example
//!
//! ```
//! use campus_model::campus::Campus;
//! use campus_model::models::{Course, Grade, Person, Student};
//! use chrono::NaiveDate;
//!
//! let mut campus = Campus::new();
//! let born = NaiveDate::from_ymd_opt(2004, 2, 1).unwrap();
//! let student = campus.add_student(Student::new(Person::new("Linus", born)));
//! let course = campus.add_course(Course::new("Operating Systems"));
//!
//! campus.enroll_in_course(student, course, Grade::A)?;
//! assert_eq!(campus.student(student).unwrap().calculate_gpa(), 4.0);
//! assert_eq!(campus.course(course).unwrap().enrolled_students(), [student]);
//! # Ok::<(), campus_model::error::CampusError>(())
//! ```

use generational_arena::Arena;
use tracing::{debug, warn};

use crate::error::{CampusError, CampusResult};
use crate::models::{
    Course, CourseId, Department, DepartmentId, Grade, Instructor, InstructorId, Person, PersonId,
    Student, StudentId,
};

/// Owner of all campus entities.
///
/// Entities are never removed, so every handle returned by an `add_*` method
/// stays valid for the lifetime of the campus. Handles from a different
/// campus may resolve to the wrong entity or to nothing.
#[derive(Debug, Default)]
pub struct Campus {
    people: Arena<Person>,
    students: Arena<Student>,
    instructors: Arena<Instructor>,
    courses: Arena<Course>,
    departments: Arena<Department>,
}

impl Campus {
    /// Creates an empty campus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a person who is neither a student nor an instructor.
    pub fn add_person(&mut self, person: Person) -> PersonId {
        let id = PersonId(self.people.insert(person));
        debug!(%id, "Added person");
        id
    }

    /// Adds a student.
    pub fn add_student(&mut self, student: Student) -> StudentId {
        let id = StudentId(self.students.insert(student));
        debug!(%id, "Added student");
        id
    }

    /// Adds an instructor.
    pub fn add_instructor(&mut self, instructor: Instructor) -> InstructorId {
        let id = InstructorId(self.instructors.insert(instructor));
        debug!(%id, "Added instructor");
        id
    }

    /// Adds a course.
    pub fn add_course(&mut self, course: Course) -> CourseId {
        let id = CourseId(self.courses.insert(course));
        debug!(%id, "Added course");
        id
    }

    /// Adds a department.
    pub fn add_department(&mut self, department: Department) -> DepartmentId {
        let id = DepartmentId(self.departments.insert(department));
        debug!(%id, "Added department");
        id
    }

    /// Looks up a person.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id.0)
    }

    /// Looks up a person for mutation.
    pub fn person_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        self.people.get_mut(id.0)
    }

    /// Looks up a student.
    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.get(id.0)
    }

    /// Looks up a student for mutation.
    pub fn student_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.get_mut(id.0)
    }

    /// Looks up an instructor.
    pub fn instructor(&self, id: InstructorId) -> Option<&Instructor> {
        self.instructors.get(id.0)
    }

    /// Looks up an instructor for mutation.
    pub fn instructor_mut(&mut self, id: InstructorId) -> Option<&mut Instructor> {
        self.instructors.get_mut(id.0)
    }

    /// Looks up a course.
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(id.0)
    }

    /// Looks up a course for mutation.
    pub fn course_mut(&mut self, id: CourseId) -> Option<&mut Course> {
        self.courses.get_mut(id.0)
    }

    /// Looks up a department.
    pub fn department(&self, id: DepartmentId) -> Option<&Department> {
        self.departments.get(id.0)
    }

    /// Looks up a department for mutation.
    pub fn department_mut(&mut self, id: DepartmentId) -> Option<&mut Department> {
        self.departments.get_mut(id.0)
    }

    /// Iterates over all plain people.
    pub fn people(&self) -> impl Iterator<Item = (PersonId, &Person)> {
        self.people.iter().map(|(idx, p)| (PersonId(idx), p))
    }

    /// Iterates over all students.
    pub fn students(&self) -> impl Iterator<Item = (StudentId, &Student)> {
        self.students.iter().map(|(idx, s)| (StudentId(idx), s))
    }

    /// Iterates over all instructors.
    pub fn instructors(&self) -> impl Iterator<Item = (InstructorId, &Instructor)> {
        self.instructors.iter().map(|(idx, i)| (InstructorId(idx), i))
    }

    /// Iterates over all courses.
    pub fn courses(&self) -> impl Iterator<Item = (CourseId, &Course)> {
        self.courses.iter().map(|(idx, c)| (CourseId(idx), c))
    }

    /// Iterates over all departments.
    pub fn departments(&self) -> impl Iterator<Item = (DepartmentId, &Department)> {
        self.departments.iter().map(|(idx, d)| (DepartmentId(idx), d))
    }

    /// Enrolls a student in a course with a grade.
    ///
    /// Records the grade on the student (replacing an earlier grade for the
    /// same course) and appends the student to the course roster. Both
    /// handles are checked before anything changes, so a failed call leaves
    /// the campus untouched.
    ///
    /// Enrolling the same student twice leaves one grade but two roster
    /// entries.
    pub fn enroll_in_course(
        &mut self,
        student: StudentId,
        course: CourseId,
        grade: Grade,
    ) -> CampusResult<()> {
        if !self.courses.contains(course.0) {
            return Err(CampusError::CourseNotFound {
                id: course.to_string(),
            });
        }
        let student_entry =
            self.students
                .get_mut(student.0)
                .ok_or_else(|| CampusError::StudentNotFound {
                    id: student.to_string(),
                })?;

        if !grade.is_recognized() {
            warn!(%student, %course, %grade, "Unrecognized grade letter counts as 0 points");
        }
        let previous = student_entry.record_grade(course, grade);
        if let Some(course_entry) = self.courses.get_mut(course.0) {
            course_entry.add_student(student);
        }

        debug!(
            %student,
            %course,
            %grade,
            regraded = previous.is_some(),
            "Enrolled student in course"
        );
        Ok(())
    }

    /// Appends a student to a course roster without recording a grade.
    pub fn add_student_to_course(
        &mut self,
        course: CourseId,
        student: StudentId,
    ) -> CampusResult<()> {
        if !self.students.contains(student.0) {
            return Err(CampusError::StudentNotFound {
                id: student.to_string(),
            });
        }
        self.courses
            .get_mut(course.0)
            .ok_or_else(|| CampusError::CourseNotFound {
                id: course.to_string(),
            })?
            .add_student(student);
        Ok(())
    }

    /// Adds a course to a department's catalog. Duplicates are kept.
    pub fn offer_course(&mut self, department: DepartmentId, course: CourseId) -> CampusResult<()> {
        if !self.courses.contains(course.0) {
            return Err(CampusError::CourseNotFound {
                id: course.to_string(),
            });
        }
        self.departments
            .get_mut(department.0)
            .ok_or_else(|| CampusError::DepartmentNotFound {
                id: department.to_string(),
            })?
            .add_course(course);
        Ok(())
    }

    /// Sets an instructor's department back-link.
    ///
    /// An instructor who heads some other department stops heading it, so a
    /// head never belongs to a department they do not lead.
    pub fn assign_department(
        &mut self,
        instructor: InstructorId,
        department: DepartmentId,
    ) -> CampusResult<()> {
        if !self.departments.contains(department.0) {
            return Err(CampusError::DepartmentNotFound {
                id: department.to_string(),
            });
        }
        if !self.instructors.contains(instructor.0) {
            return Err(CampusError::InstructorNotFound {
                id: instructor.to_string(),
            });
        }

        let still_head = self.release_headships(instructor, department);
        if let Some(entry) = self.instructors.get_mut(instructor.0) {
            entry.is_head_of_department = still_head;
            entry.department = Some(department);
        }
        debug!(%instructor, %department, still_head, "Assigned instructor to department");
        Ok(())
    }

    /// Makes an instructor the head of a department.
    ///
    /// The instructor joins the department and is flagged as head. A previous
    /// head of the department loses the flag, and any other department
    /// headed by this instructor is left without a head.
    pub fn appoint_head(
        &mut self,
        department: DepartmentId,
        instructor: InstructorId,
    ) -> CampusResult<()> {
        if !self.departments.contains(department.0) {
            return Err(CampusError::DepartmentNotFound {
                id: department.to_string(),
            });
        }
        if !self.instructors.contains(instructor.0) {
            return Err(CampusError::InstructorNotFound {
                id: instructor.to_string(),
            });
        }

        self.release_headships(instructor, department);

        let previous_head = self
            .departments
            .get_mut(department.0)
            .and_then(|entry| entry.head.replace(instructor));
        if let Some(previous) = previous_head.filter(|previous| *previous != instructor) {
            if let Some(previous_entry) = self.instructors.get_mut(previous.0) {
                previous_entry.is_head_of_department = false;
            }
        }

        if let Some(entry) = self.instructors.get_mut(instructor.0) {
            entry.is_head_of_department = true;
            entry.department = Some(department);
        }

        debug!(%department, %instructor, "Appointed department head");
        Ok(())
    }

    /// Clears the head of every department led by `instructor` except `keep`.
    /// Returns whether the instructor still heads `keep`.
    fn release_headships(&mut self, instructor: InstructorId, keep: DepartmentId) -> bool {
        let mut kept = false;
        for (index, entry) in self.departments.iter_mut() {
            if entry.head != Some(instructor) {
                continue;
            }
            if DepartmentId(index) == keep {
                kept = true;
            } else {
                entry.head = None;
                debug!(department = %DepartmentId(index), %instructor, "Department left without a head");
            }
        }
        kept
    }

    /// Resolves a course roster to students, in roster order.
    pub fn enrolled_students(&self, course: CourseId) -> CampusResult<Vec<&Student>> {
        let entry = self.course(course).ok_or_else(|| CampusError::CourseNotFound {
            id: course.to_string(),
        })?;
        Ok(entry
            .enrolled_students()
            .iter()
            .filter_map(|id| self.student(*id))
            .collect())
    }

    /// Resolves a department catalog to courses, in catalog order.
    pub fn offered_courses(&self, department: DepartmentId) -> CampusResult<Vec<&Course>> {
        let entry = self
            .department(department)
            .ok_or_else(|| CampusError::DepartmentNotFound {
                id: department.to_string(),
            })?;
        Ok(entry
            .offered_courses()
            .iter()
            .filter_map(|id| self.course(*id))
            .collect())
    }
}
