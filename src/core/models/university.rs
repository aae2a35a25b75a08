//! University directory model
//!
//! The linking engine: joins the four input files into one cross-referenced
//! in-memory model and is the sole entry point for every derived report.

use super::{CourseKind, Grade, Instructor, InstructorRow, Major, MajorRow, Student, StudentRow};
use crate::core::diagnostics::Diagnostic;
use crate::core::error::RepositoryError;
use crate::core::reader::DelimitedReader;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Majors input file name.
const MAJORS_FILE: &str = "majors.txt";
/// Students input file name.
const STUDENTS_FILE: &str = "students.txt";
/// Instructors input file name.
const INSTRUCTORS_FILE: &str = "instructors.txt";
/// Grades input file name.
const GRADES_FILE: &str = "grades.txt";

/// All four files are tab-delimited with a header line.
const DELIMITER: char = '\t';

/// A university's linked data repository.
///
/// Construction via [`University::load`] reads the four input files in
/// dependency order: majors first (no dependencies), then students (each must
/// name a known major), then instructors, then grades (each must name a known
/// student and instructor). Records that fail validation are skipped and
/// recorded in the diagnostics collector; a missing directory or missing
/// input file aborts construction entirely.
#[derive(Debug)]
pub struct University {
    directory: PathBuf,
    // Major name to shared major handle; students clone the Rc.
    majors: IndexMap<String, Rc<Major>>,
    // CWID to student, in file order.
    students: IndexMap<String, Student>,
    // CWID to instructor, in file order.
    instructors: IndexMap<String, Instructor>,
    diagnostics: Vec<Diagnostic>,
}

impl University {
    /// Load a university repository from its base directory.
    ///
    /// # Errors
    /// [`RepositoryError::DirectoryNotFound`] when `directory` is not an
    /// existing directory; [`RepositoryError::FileNotFound`] when any of the
    /// four input files is missing; [`RepositoryError::Io`] for other read
    /// failures. Per-record problems never fail the load — they are
    /// collected and available from [`diagnostics`](Self::diagnostics).
    pub fn load<P: AsRef<Path>>(directory: P) -> Result<Self, RepositoryError> {
        let directory = directory.as_ref().to_path_buf();
        if !directory.is_dir() {
            return Err(RepositoryError::DirectoryNotFound(directory));
        }

        let mut university = Self {
            directory,
            majors: IndexMap::new(),
            students: IndexMap::new(),
            instructors: IndexMap::new(),
            diagnostics: Vec::new(),
        };

        university.load_majors()?;
        university.load_students()?;
        university.load_instructors()?;
        university.load_grades()?;

        Ok(university)
    }

    /// Open one input file with the shared delimiter/header convention.
    fn reader(&self, file_name: &str, arity: usize) -> Result<DelimitedReader, RepositoryError> {
        DelimitedReader::open(&self.directory.join(file_name), arity, DELIMITER, true)
    }

    /// Phase 1: build the major registry from (major, kind, course) records.
    fn load_majors(&mut self) -> Result<(), RepositoryError> {
        let mut majors: IndexMap<String, Major> = IndexMap::new();

        for record in self.reader(MAJORS_FILE, 3)? {
            let fields = match record {
                Ok(fields) => fields,
                Err(diagnostic) => {
                    self.diagnostics.push(diagnostic);
                    continue;
                }
            };
            let Ok([name, kind, course]) = <[String; 3]>::try_from(fields) else {
                continue;
            };

            // The major is created on first reference even when the kind code
            // turns out to be invalid. The kind itself is decided here, at
            // the parsing boundary; Major::add_course never sees a bad one.
            let major = majors
                .entry(name.clone())
                .or_insert_with(|| Major::new(name.clone()));
            match CourseKind::from_code(&kind) {
                Some(parsed) => major.add_course(parsed, course),
                None => self.diagnostics.push(Diagnostic::InvalidCourseKind {
                    kind,
                    course,
                    major: name,
                }),
            }
        }

        // Majors are immutable from here on; wrap them for shared ownership.
        self.majors = majors
            .into_iter()
            .map(|(name, major)| (name, Rc::new(major)))
            .collect();
        Ok(())
    }

    /// Phase 2: register students, each bound to an already-known major.
    fn load_students(&mut self) -> Result<(), RepositoryError> {
        for record in self.reader(STUDENTS_FILE, 3)? {
            let fields = match record {
                Ok(fields) => fields,
                Err(diagnostic) => {
                    self.diagnostics.push(diagnostic);
                    continue;
                }
            };
            let Ok([cwid, name, major_name]) = <[String; 3]>::try_from(fields) else {
                continue;
            };

            match self.majors.get(&major_name) {
                Some(major) => {
                    self.students
                        .insert(cwid.clone(), Student::new(cwid, name, Rc::clone(major)));
                }
                None => self.diagnostics.push(Diagnostic::UnknownMajor {
                    cwid,
                    major: major_name,
                }),
            }
        }
        Ok(())
    }

    /// Phase 3: register instructors unconditionally.
    fn load_instructors(&mut self) -> Result<(), RepositoryError> {
        for record in self.reader(INSTRUCTORS_FILE, 3)? {
            let fields = match record {
                Ok(fields) => fields,
                Err(diagnostic) => {
                    self.diagnostics.push(diagnostic);
                    continue;
                }
            };
            let Ok([cwid, name, department]) = <[String; 3]>::try_from(fields) else {
                continue;
            };

            self.instructors
                .insert(cwid.clone(), Instructor::new(cwid, name, department));
        }
        Ok(())
    }

    /// Phase 4: cross-link grades into both the student and the instructor.
    fn load_grades(&mut self) -> Result<(), RepositoryError> {
        for record in self.reader(GRADES_FILE, 4)? {
            let fields = match record {
                Ok(fields) => fields,
                Err(diagnostic) => {
                    self.diagnostics.push(diagnostic);
                    continue;
                }
            };
            let Ok([student_cwid, course, grade, instructor_cwid]) =
                <[String; 4]>::try_from(fields)
            else {
                continue;
            };

            // The instructor check precedes the student check; a record
            // unknown on both sides is reported once, for the instructor.
            if !self.instructors.contains_key(&instructor_cwid) {
                self.diagnostics.push(Diagnostic::UnknownInstructor {
                    instructor_cwid,
                    student_cwid,
                    course,
                });
                continue;
            }
            if !self.students.contains_key(&student_cwid) {
                self.diagnostics.push(Diagnostic::UnknownStudent {
                    student_cwid,
                    course,
                    instructor_cwid,
                });
                continue;
            }
            let parsed = match grade.parse::<Grade>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    self.diagnostics.push(Diagnostic::InvalidGrade {
                        grade,
                        student_cwid,
                        course,
                    });
                    continue;
                }
            };

            if let Some(student) = self.students.get_mut(&student_cwid) {
                student.add_course(course.clone(), parsed);
            }
            if let Some(instructor) = self.instructors.get_mut(&instructor_cwid) {
                instructor.add_course(course);
            }
        }
        Ok(())
    }

    /// The base directory this repository was loaded from.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Every per-record problem recorded during the load, in load order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Look up a major by name.
    #[must_use]
    pub fn major(&self, name: &str) -> Option<&Major> {
        self.majors.get(name).map(Rc::as_ref)
    }

    /// Look up a student by CWID.
    #[must_use]
    pub fn student(&self, cwid: &str) -> Option<&Student> {
        self.students.get(cwid)
    }

    /// Look up an instructor by CWID.
    #[must_use]
    pub fn instructor(&self, cwid: &str) -> Option<&Instructor> {
        self.instructors.get(cwid)
    }

    /// Number of registered students.
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Rows for the majors report, in majors-file order.
    pub fn major_rows(&self) -> impl Iterator<Item = MajorRow> + '_ {
        self.majors.values().map(|major| major.summary_row())
    }

    /// Rows for the students report, in students-file order.
    pub fn student_rows(&self) -> impl Iterator<Item = StudentRow> + '_ {
        self.students.values().map(Student::summary_row)
    }

    /// Rows for the instructors report: one per (instructor, course) pair,
    /// instructors in file order, courses in first-recorded order.
    pub fn instructor_rows(&self) -> impl Iterator<Item = InstructorRow> + '_ {
        self.instructors.values().flat_map(Instructor::taught_rows)
    }
}
