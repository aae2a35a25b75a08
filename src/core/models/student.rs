//! Student model

use super::{Grade, Major};
use indexmap::IndexMap;
use std::rc::Rc;

/// Summary row for the students report.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    /// Campus-wide ID, preserved exactly as read (zero-padding matters).
    pub cwid: String,
    /// Student name.
    pub name: String,
    /// Courses with a recorded grade, sorted.
    pub completed: Vec<String>,
    /// Required courses not yet passed, sorted.
    pub remaining_required: Vec<String>,
    /// Elective courses still owed, sorted.
    pub remaining_electives: Vec<String>,
    /// Grade-point average, `None` when no courses are recorded.
    pub gpa: Option<f64>,
}

/// A student's identity, declared major, and course/grade ledger.
///
/// The major handle is shared with the directory and with any other student
/// in the same program; it is never mutated through a student.
#[derive(Debug, Clone)]
pub struct Student {
    cwid: String,
    name: String,
    major: Rc<Major>,
    // Course to grade, in recording order. Re-adding a course overwrites.
    courses: IndexMap<String, Grade>,
}

impl Student {
    /// Create a new student bound to an existing major.
    #[must_use]
    pub fn new(cwid: String, name: String, major: Rc<Major>) -> Self {
        Self {
            cwid,
            name,
            major,
            courses: IndexMap::new(),
        }
    }

    /// Campus-wide ID (the student's unique key in the directory).
    #[must_use]
    pub fn cwid(&self) -> &str {
        &self.cwid
    }

    /// Student name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The major this student is enrolled in.
    #[must_use]
    pub fn major(&self) -> &Major {
        &self.major
    }

    /// Record a grade for a course. Last write wins for a repeated course.
    pub fn add_course(&mut self, course: String, grade: Grade) {
        self.courses.insert(course, grade);
    }

    /// Course-to-grade ledger in recording order.
    #[must_use]
    pub const fn courses(&self) -> &IndexMap<String, Grade> {
        &self.courses
    }

    /// Grade-point average over all recorded courses, rounded to 2 decimal
    /// places (half away from zero). `None` when no courses are recorded.
    #[must_use]
    pub fn gpa(&self) -> Option<f64> {
        if self.courses.is_empty() {
            return None;
        }
        let total: f64 = self.courses.values().map(|grade| grade.points()).sum();
        #[allow(clippy::cast_precision_loss)]
        let mean = total / self.courses.len() as f64;
        Some((mean * 100.0).round() / 100.0)
    }

    /// Produce this student's row for the students report.
    ///
    /// Requirement computation is delegated to the referenced major using the
    /// ledger's current state.
    #[must_use]
    pub fn summary_row(&self) -> StudentRow {
        let mut completed: Vec<String> = self.courses.keys().cloned().collect();
        completed.sort_unstable();

        let remaining = self.major.remaining_courses(&self.courses);

        StudentRow {
            cwid: self.cwid.clone(),
            name: self.name.clone(),
            completed,
            remaining_required: remaining.required,
            remaining_electives: remaining.electives,
            gpa: self.gpa(),
        }
    }
}
