//! Major model

use super::Grade;
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Classification of a course requirement within a major.
///
/// Decided at the parsing boundary: the majors file codes requirements as
/// `R`/`E`, and anything else never reaches [`Major::add_course`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseKind {
    /// The course is required for the degree.
    Required,
    /// The course counts toward the elective requirement.
    Elective,
}

impl CourseKind {
    /// Parse the one-letter requirement code used in the majors file.
    ///
    /// # Returns
    /// `Some(CourseKind)` for `R` or `E`, `None` for anything else.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "R" => Some(Self::Required),
            "E" => Some(Self::Elective),
            _ => None,
        }
    }
}

/// Remaining-requirement summary for one student's grades against a major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemainingCourses {
    /// Courses the student has passed (any course, requirement or not).
    pub passed: BTreeSet<String>,
    /// Required courses not yet passed, sorted.
    pub required: Vec<String>,
    /// Elective courses still owed, sorted; empty once any elective passes.
    pub electives: Vec<String>,
}

/// Summary row for the majors report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorRow {
    /// Major name.
    pub name: String,
    /// Required courses, sorted.
    pub required: Vec<String>,
    /// Elective courses, sorted.
    pub electives: Vec<String>,
}

/// A degree program's required and elective course sets.
///
/// Populated while the majors file loads, then read-only for the rest of the
/// directory's life; students hold shared handles to it. A course may sit in
/// both sets if the file lists it under both kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Major {
    name: String,
    required: BTreeSet<String>,
    electives: BTreeSet<String>,
}

impl Major {
    /// Create a new major with empty course sets.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            required: BTreeSet::new(),
            electives: BTreeSet::new(),
        }
    }

    /// Major name (its unique key in the directory).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a course under the given requirement kind.
    pub fn add_course(&mut self, kind: CourseKind, course: String) {
        match kind {
            CourseKind::Required => {
                self.required.insert(course);
            }
            CourseKind::Elective => {
                self.electives.insert(course);
            }
        }
    }

    /// Compute which requirements remain for one student's course grades.
    ///
    /// `passed` is every course whose grade is in the fixed passing set.
    /// Required courses are owed individually: `required − passed`. The
    /// elective requirement is all-or-nothing: passing any one elective
    /// clears it, otherwise the full elective set is still owed.
    #[must_use]
    pub fn remaining_courses(&self, course_grades: &IndexMap<String, Grade>) -> RemainingCourses {
        let passed: BTreeSet<String> = course_grades
            .iter()
            .filter(|(_, grade)| grade.is_passing())
            .map(|(course, _)| course.clone())
            .collect();

        let required: Vec<String> = self.required.difference(&passed).cloned().collect();

        let electives: Vec<String> = if self.electives.is_disjoint(&passed) {
            self.electives.iter().cloned().collect()
        } else {
            Vec::new()
        };

        RemainingCourses {
            passed,
            required,
            electives,
        }
    }

    /// Produce this major's row for the majors report.
    #[must_use]
    pub fn summary_row(&self) -> MajorRow {
        MajorRow {
            name: self.name.clone(),
            required: self.required.iter().cloned().collect(),
            electives: self.electives.iter().cloned().collect(),
        }
    }
}
