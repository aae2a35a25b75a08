//! Tabular report rendering
//!
//! Renders the directory's report rows as aligned text tables. The row
//! shapes come from the models; this module only formats.

use crate::core::db::StudentGradeRow;
use crate::core::models::University;
use std::fmt::Write;

/// An aligned text table under construction.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given column headers.
    #[must_use]
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append one row. Short rows are padded with empty cells.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render the table with `+---+` borders and space-padded cells.
    #[must_use]
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(String::len).collect();
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                if idx < widths.len() {
                    widths[idx] = widths[idx].max(cell.len());
                }
            }
        }

        let mut out = String::new();
        let border = Self::border(&widths);

        out.push_str(&border);
        Self::write_row(&mut out, &self.headers, &widths);
        out.push_str(&border);
        for row in &self.rows {
            Self::write_row(&mut out, row, &widths);
        }
        out.push_str(&border);
        out
    }

    fn border(widths: &[usize]) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    }

    fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
        out.push('|');
        for (idx, &width) in widths.iter().enumerate() {
            let cell = cells.get(idx).map_or("", String::as_str);
            let _ = write!(out, " {cell:<width$} |");
        }
        out.push('\n');
    }
}

/// Join a sorted course list into one cell.
fn join_courses(courses: &[String]) -> String {
    courses.join(", ")
}

/// Format an optional GPA; `n/a` means no recorded courses.
fn format_gpa(gpa: Option<f64>) -> String {
    gpa.map_or_else(|| "n/a".to_string(), |value| format!("{value:.2}"))
}

/// Render the majors report.
#[must_use]
pub fn majors_table(university: &University) -> String {
    let mut table = Table::new(&["Major", "Required Courses", "Electives"]);
    for row in university.major_rows() {
        table.add_row(vec![
            row.name,
            join_courses(&row.required),
            join_courses(&row.electives),
        ]);
    }
    table.render()
}

/// Render the students report.
#[must_use]
pub fn students_table(university: &University) -> String {
    let mut table = Table::new(&[
        "CWID",
        "Name",
        "Completed Courses",
        "Remaining Required",
        "Remaining Electives",
        "GPA",
    ]);
    for row in university.student_rows() {
        table.add_row(vec![
            row.cwid,
            row.name,
            join_courses(&row.completed),
            join_courses(&row.remaining_required),
            join_courses(&row.remaining_electives),
            format_gpa(row.gpa),
        ]);
    }
    table.render()
}

/// Render the instructors report, one row per (instructor, course) pair.
#[must_use]
pub fn instructors_table(university: &University) -> String {
    let mut table = Table::new(&["CWID", "Name", "Dept", "Course", "Students"]);
    for row in university.instructor_rows() {
        table.add_row(vec![
            row.cwid,
            row.name,
            row.department,
            row.course,
            row.students.to_string(),
        ]);
    }
    table.render()
}

/// Render the database-backed student-grades report.
#[must_use]
pub fn student_grades_table(rows: &[StudentGradeRow]) -> String {
    let mut table = Table::new(&["Name", "CWID", "Course", "Grade", "Instructor"]);
    for row in rows {
        table.add_row(vec![
            row.student_name.clone(),
            row.cwid.clone(),
            row.course.clone(),
            row.grade.clone(),
            row.instructor_name.clone(),
        ]);
    }
    table.render()
}
