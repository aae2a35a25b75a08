//! Student-grades report sourced from a relational database
//!
//! Unlike the text-file reports, this report reads a small SQLite database
//! holding `students`, `grades`, and `instructors` tables. Access is
//! strictly read-only; the database is never created or modified here.

use crate::core::error::RepositoryError;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// One row of the student-grades report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentGradeRow {
    /// Student name.
    pub student_name: String,
    /// Student campus-wide ID.
    pub cwid: String,
    /// Course identifier.
    pub course: String,
    /// Letter grade as stored.
    pub grade: String,
    /// Instructor name.
    pub instructor_name: String,
}

/// Query used for the report: students joined to their grades and to the
/// instructor who recorded each grade, ordered by student name.
const STUDENT_GRADES_SQL: &str = "\
    SELECT s.Name, s.CWID, g.Course, g.Grade, i.Name \
    FROM students s \
    JOIN grades g ON s.CWID = g.StudentCWID \
    JOIN instructors i ON g.InstructorCWID = i.CWID \
    ORDER BY s.Name";

/// Run the student-grades join against the database at `path`.
///
/// The database is opened read-only, so a missing file is an error rather
/// than an implicitly created empty database.
///
/// # Errors
/// [`RepositoryError::FileNotFound`] when `path` does not exist;
/// [`RepositoryError::Database`] when the open or the query fails.
pub fn student_grades(path: &Path) -> Result<Vec<StudentGradeRow>, RepositoryError> {
    if !path.is_file() {
        return Err(RepositoryError::FileNotFound(path.to_path_buf()));
    }

    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    let mut stmt = conn.prepare(STUDENT_GRADES_SQL)?;
    let rows = stmt.query_map([], |row| {
        Ok(StudentGradeRow {
            student_name: row.get(0)?,
            cwid: row.get(1)?,
            course: row.get(2)?,
            grade: row.get(3)?,
            instructor_name: row.get(4)?,
        })
    })?;

    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}
