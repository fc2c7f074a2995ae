//! Typed handles for entities owned by a [`Campus`](crate::campus::Campus).
//!
//! Cross references between entities (a course roster, a department's
//! catalog, an instructor's department) are stored as these handles rather
//! than as owning pointers. Resolving a handle is a lookup in the campus.

use std::fmt;

use generational_arena::Index;

macro_rules! entity_handle {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) Index);

        impl $name {
            /// Returns the underlying arena index.
            pub fn index(self) -> Index {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let (slot, generation) = self.0.into_raw_parts();
                write!(f, "{}#{}.{}", $label, slot, generation)
            }
        }
    };
}

entity_handle!(
    /// Handle to a plain [`Person`](super::Person).
    PersonId,
    "person"
);
entity_handle!(
    /// Handle to a [`Student`](super::Student).
    StudentId,
    "student"
);
entity_handle!(
    /// Handle to an [`Instructor`](super::Instructor).
    InstructorId,
    "instructor"
);
entity_handle!(
    /// Handle to a [`Course`](super::Course).
    CourseId,
    "course"
);
entity_handle!(
    /// Handle to a [`Department`](super::Department).
    DepartmentId,
    "department"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_slot_and_generation() {
        let id = CourseId(Index::from_raw_parts(3, 0));
        assert_eq!(id.to_string(), "course#3.0");
    }

    #[test]
    fn test_handles_compare_by_index() {
        let a = StudentId(Index::from_raw_parts(1, 0));
        let b = StudentId(Index::from_raw_parts(1, 0));
        let c = StudentId(Index::from_raw_parts(2, 0));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
