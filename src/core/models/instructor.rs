//! Instructor model

use indexmap::IndexMap;

/// One row of the instructors report: an (instructor, course) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstructorRow {
    /// Instructor campus-wide ID.
    pub cwid: String,
    /// Instructor name.
    pub name: String,
    /// Department.
    pub department: String,
    /// Course identifier.
    pub course: String,
    /// Number of students recorded for this course.
    pub students: u32,
}

/// An instructor's identity and per-course student counts.
#[derive(Debug, Clone)]
pub struct Instructor {
    cwid: String,
    name: String,
    department: String,
    // Course to student count; insertion order drives report row order.
    courses: IndexMap<String, u32>,
}

impl Instructor {
    /// Create a new instructor with an empty teaching ledger.
    #[must_use]
    pub fn new(cwid: String, name: String, department: String) -> Self {
        Self {
            cwid,
            name,
            department,
            courses: IndexMap::new(),
        }
    }

    /// Campus-wide ID (the instructor's unique key in the directory).
    #[must_use]
    pub fn cwid(&self) -> &str {
        &self.cwid
    }

    /// Instructor name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Department.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Record one more student taught in `course`.
    pub fn add_course(&mut self, course: String) {
        *self.courses.entry(course).or_insert(0) += 1;
    }

    /// Produce one report row per distinct course taught, in the order the
    /// courses were first recorded. Recomputed from current state each call.
    pub fn taught_rows(&self) -> impl Iterator<Item = InstructorRow> + '_ {
        self.courses.iter().map(|(course, students)| InstructorRow {
            cwid: self.cwid.clone(),
            name: self.name.clone(),
            department: self.department.clone(),
            course: course.clone(),
            students: *students,
        })
    }
}
