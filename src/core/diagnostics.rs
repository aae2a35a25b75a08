//! Structured diagnostics for non-fatal load conditions
//!
//! Every per-record validation failure during directory construction is
//! recorded as a `Diagnostic` and the record is skipped; the directory stays
//! fully usable. Fatal conditions use [`RepositoryError`] instead.
//!
//! [`RepositoryError`]: crate::core::error::RepositoryError

use std::fmt;
use std::path::PathBuf;

/// A reported-and-skipped input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A line whose field count did not match the file's expected arity.
    MalformedLine {
        /// File the line came from.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Arity the file is expected to have.
        expected: usize,
        /// Number of fields actually found.
        found: usize,
    },
    /// A student record naming a major the majors file never defined.
    UnknownMajor {
        /// CWID of the skipped student.
        cwid: String,
        /// The undefined major name.
        major: String,
    },
    /// A grade record naming an instructor CWID not in the directory.
    UnknownInstructor {
        /// The unknown instructor CWID.
        instructor_cwid: String,
        /// Student CWID on the same record.
        student_cwid: String,
        /// Course on the same record.
        course: String,
    },
    /// A grade record naming a student CWID not in the directory.
    UnknownStudent {
        /// The unknown student CWID.
        student_cwid: String,
        /// Course on the same record.
        course: String,
        /// Instructor CWID on the same record.
        instructor_cwid: String,
    },
    /// A majors-file record with a requirement code other than `R`/`E`.
    InvalidCourseKind {
        /// The unrecognized code.
        kind: String,
        /// Course the code applied to.
        course: String,
        /// Major the course would have been added to.
        major: String,
    },
    /// A grade record whose grade column is not a recognized letter grade.
    InvalidGrade {
        /// The unrecognized grade string.
        grade: String,
        /// Student CWID on the record.
        student_cwid: String,
        /// Course on the record.
        course: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine {
                path,
                line,
                expected,
                found,
            } => write!(
                f,
                "{} line {line} has {found} fields but is expected to have {expected} fields. Skipping this line.",
                path.display()
            ),
            Self::UnknownMajor { cwid, major } => {
                write!(f, "{major} is not a valid major. Skipping student {cwid}.")
            }
            Self::UnknownInstructor {
                instructor_cwid, ..
            } => write!(
                f,
                "{instructor_cwid} is not a valid instructor CWID. Skipping grade."
            ),
            Self::UnknownStudent { student_cwid, .. } => write!(
                f,
                "{student_cwid} is not a valid student CWID. Skipping grade."
            ),
            Self::InvalidCourseKind {
                kind,
                course,
                major,
            } => write!(
                f,
                "{kind} is an invalid requirement kind for course {course}. Not adding course to major {major}."
            ),
            Self::InvalidGrade {
                grade,
                student_cwid,
                course,
            } => write!(
                f,
                "{grade} is not a recognized grade for {course}. Skipping grade for student {student_cwid}."
            ),
        }
    }
}
