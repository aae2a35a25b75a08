//! Integration tests for university repository loading and reporting

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use uni_registry::core::diagnostics::Diagnostic;
use uni_registry::core::error::RepositoryError;
use uni_registry::models::University;

const MAJORS: &str = "Major\tKind\tCourse\n\
    SFEN\tR\tSSW 540\n\
    SFEN\tR\tSSW 564\n\
    SFEN\tE\tCS 501\n";

const STUDENTS: &str = "CWID\tName\tMajor\n\
    10103\tBaldwin, C\tSFEN\n";

const INSTRUCTORS: &str = "CWID\tName\tDept\n\
    98764\tFeynman, R\tSFEN\n";

const GRADES: &str = "StudentCWID\tCourse\tGrade\tInstructorCWID\n\
    10103\tCS 501\tB\t98764\n\
    10103\tSSW 564\tA-\t98764\n";

/// Write the four repository files into `dir`.
fn write_repository(dir: &Path, majors: &str, students: &str, instructors: &str, grades: &str) {
    fs::write(dir.join("majors.txt"), majors).expect("write majors.txt");
    fs::write(dir.join("students.txt"), students).expect("write students.txt");
    fs::write(dir.join("instructors.txt"), instructors).expect("write instructors.txt");
    fs::write(dir.join("grades.txt"), grades).expect("write grades.txt");
}

#[test]
fn test_end_to_end_summary_row() {
    let dir = TempDir::new().expect("temp dir");
    write_repository(dir.path(), MAJORS, STUDENTS, INSTRUCTORS, GRADES);

    let university = University::load(dir.path()).expect("load");
    assert!(university.diagnostics().is_empty());

    let rows: Vec<_> = university.student_rows().collect();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.cwid, "10103");
    assert_eq!(row.name, "Baldwin, C");
    assert_eq!(
        row.completed,
        vec!["CS 501".to_string(), "SSW 564".to_string()]
    );
    assert_eq!(row.remaining_required, vec!["SSW 540".to_string()]);
    assert!(row.remaining_electives.is_empty());
    assert_eq!(row.gpa, Some(3.38));
}

#[test]
fn test_majors_report() {
    let dir = TempDir::new().expect("temp dir");
    write_repository(dir.path(), MAJORS, STUDENTS, INSTRUCTORS, GRADES);

    let university = University::load(dir.path()).expect("load");
    let rows: Vec<_> = university.major_rows().collect();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "SFEN");
    assert_eq!(
        rows[0].required,
        vec!["SSW 540".to_string(), "SSW 564".to_string()]
    );
    assert_eq!(rows[0].electives, vec!["CS 501".to_string()]);
}

#[test]
fn test_instructor_report_one_row_per_course() {
    let dir = TempDir::new().expect("temp dir");
    write_repository(dir.path(), MAJORS, STUDENTS, INSTRUCTORS, GRADES);

    let university = University::load(dir.path()).expect("load");
    let rows: Vec<_> = university.instructor_rows().collect();

    assert_eq!(rows.len(), 2);
    // Courses come out in the order the grades file first recorded them.
    assert_eq!(rows[0].cwid, "98764");
    assert_eq!(rows[0].name, "Feynman, R");
    assert_eq!(rows[0].department, "SFEN");
    assert_eq!(rows[0].course, "CS 501");
    assert_eq!(rows[0].students, 1);
    assert_eq!(rows[1].course, "SSW 564");
    assert_eq!(rows[1].students, 1);
}

#[test]
fn test_student_with_unknown_major_is_skipped() {
    let dir = TempDir::new().expect("temp dir");
    let students = "CWID\tName\tMajor\n\
        10103\tBaldwin, C\tSFEN\n\
        10172\tForbes, I\tSYEN\n";
    write_repository(dir.path(), MAJORS, students, INSTRUCTORS, GRADES);

    let university = University::load(dir.path()).expect("load");
    assert!(university.student("10103").is_some());
    assert!(university.student("10172").is_none());
    assert_eq!(
        university.diagnostics(),
        &[Diagnostic::UnknownMajor {
            cwid: "10172".to_string(),
            major: "SYEN".to_string(),
        }]
    );
}

#[test]
fn test_grade_with_unknown_instructor_mutates_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let grades = "StudentCWID\tCourse\tGrade\tInstructorCWID\n\
        10103\tSSW 564\tA\t99999\n";
    write_repository(dir.path(), MAJORS, STUDENTS, INSTRUCTORS, grades);

    let university = University::load(dir.path()).expect("load");

    let student = university.student("10103").expect("student exists");
    assert!(student.courses().is_empty());
    assert_eq!(university.instructor_rows().count(), 0);
    assert_eq!(
        university.diagnostics(),
        &[Diagnostic::UnknownInstructor {
            instructor_cwid: "99999".to_string(),
            student_cwid: "10103".to_string(),
            course: "SSW 564".to_string(),
        }]
    );
}

#[test]
fn test_grade_with_unknown_student_skips_instructor_count() {
    let dir = TempDir::new().expect("temp dir");
    let grades = "StudentCWID\tCourse\tGrade\tInstructorCWID\n\
        99999\tSSW 564\tA\t98764\n";
    write_repository(dir.path(), MAJORS, STUDENTS, INSTRUCTORS, grades);

    let university = University::load(dir.path()).expect("load");

    assert_eq!(university.instructor_rows().count(), 0);
    assert_eq!(
        university.diagnostics(),
        &[Diagnostic::UnknownStudent {
            student_cwid: "99999".to_string(),
            course: "SSW 564".to_string(),
            instructor_cwid: "98764".to_string(),
        }]
    );
}

#[test]
fn test_grade_unknown_on_both_sides_reported_once_for_instructor() {
    let dir = TempDir::new().expect("temp dir");
    let grades = "StudentCWID\tCourse\tGrade\tInstructorCWID\n\
        99998\tSSW 564\tA\t99999\n";
    write_repository(dir.path(), MAJORS, STUDENTS, INSTRUCTORS, grades);

    let university = University::load(dir.path()).expect("load");

    assert_eq!(university.diagnostics().len(), 1);
    assert!(matches!(
        &university.diagnostics()[0],
        Diagnostic::UnknownInstructor { instructor_cwid, .. } if instructor_cwid == "99999"
    ));
}

#[test]
fn test_unrecognized_grade_is_skipped() {
    let dir = TempDir::new().expect("temp dir");
    let grades = "StudentCWID\tCourse\tGrade\tInstructorCWID\n\
        10103\tSSW 564\tQ\t98764\n\
        10103\tCS 501\tB\t98764\n";
    write_repository(dir.path(), MAJORS, STUDENTS, INSTRUCTORS, grades);

    let university = University::load(dir.path()).expect("load");

    let student = university.student("10103").expect("student exists");
    assert_eq!(student.courses().len(), 1);
    assert!(student.courses().get("SSW 564").is_none());
    assert_eq!(
        university.diagnostics(),
        &[Diagnostic::InvalidGrade {
            grade: "Q".to_string(),
            student_cwid: "10103".to_string(),
            course: "SSW 564".to_string(),
        }]
    );
}

#[test]
fn test_invalid_requirement_kind_is_reported_not_added() {
    let dir = TempDir::new().expect("temp dir");
    let majors = "Major\tKind\tCourse\n\
        SFEN\tR\tSSW 540\n\
        SFEN\tR\tSSW 564\n\
        SFEN\tE\tCS 501\n\
        SFEN\tX\tCS 546\n";
    write_repository(dir.path(), majors, STUDENTS, INSTRUCTORS, GRADES);

    let university = University::load(dir.path()).expect("load");

    let row = university.major_rows().next().expect("SFEN row");
    assert!(!row.required.contains(&"CS 546".to_string()));
    assert!(!row.electives.contains(&"CS 546".to_string()));
    assert_eq!(
        university.diagnostics(),
        &[Diagnostic::InvalidCourseKind {
            kind: "X".to_string(),
            course: "CS 546".to_string(),
            major: "SFEN".to_string(),
        }]
    );
}

#[test]
fn test_student_passing_no_electives_owes_all_of_them() {
    let dir = TempDir::new().expect("temp dir");
    let majors = "Major\tKind\tCourse\n\
        SFEN\tR\tSSW 540\n\
        SFEN\tE\tCS 501\n\
        SFEN\tE\tCS 513\n";
    let grades = "StudentCWID\tCourse\tGrade\tInstructorCWID\n\
        10103\tSSW 540\tA\t98764\n";
    write_repository(dir.path(), majors, STUDENTS, INSTRUCTORS, grades);

    let university = University::load(dir.path()).expect("load");
    let row = university.student_rows().next().expect("student row");

    assert!(row.remaining_required.is_empty());
    assert_eq!(
        row.remaining_electives,
        vec!["CS 501".to_string(), "CS 513".to_string()]
    );
}

#[test]
fn test_malformed_lines_are_reported_and_processing_continues() {
    let dir = TempDir::new().expect("temp dir");
    let grades = "StudentCWID\tCourse\tGrade\tInstructorCWID\n\
        10103\tSSW 564\n\
        10103\tCS 501\tB\t98764\n";
    write_repository(dir.path(), MAJORS, STUDENTS, INSTRUCTORS, grades);

    let university = University::load(dir.path()).expect("load");

    let student = university.student("10103").expect("student exists");
    assert_eq!(student.courses().len(), 1);

    assert_eq!(university.diagnostics().len(), 1);
    match &university.diagnostics()[0] {
        Diagnostic::MalformedLine {
            path,
            line,
            expected,
            found,
        } => {
            assert!(path.ends_with("grades.txt"));
            assert_eq!(*line, 2);
            assert_eq!(*expected, 4);
            assert_eq!(*found, 2);
        }
        other => panic!("unexpected diagnostic: {other:?}"),
    }
}

#[test]
fn test_cwid_strings_are_preserved_exactly() {
    let dir = TempDir::new().expect("temp dir");
    let students = "CWID\tName\tMajor\n\
        01003\tOakes, M\tSFEN\n";
    write_repository(dir.path(), MAJORS, students, INSTRUCTORS, "header\ta\tb\tc\n");

    let university = University::load(dir.path()).expect("load");
    assert!(university.student("01003").is_some());
    assert!(university.student("1003").is_none());
}

#[test]
fn test_nonexistent_directory_fails() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("Binghamton");

    match University::load(&missing) {
        Err(RepositoryError::DirectoryNotFound(path)) => assert_eq!(path, missing),
        other => panic!("expected DirectoryNotFound, got {other:?}"),
    }
}

#[test]
fn test_missing_grades_file_names_the_file() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("majors.txt"), MAJORS).expect("write majors.txt");
    fs::write(dir.path().join("students.txt"), STUDENTS).expect("write students.txt");
    fs::write(dir.path().join("instructors.txt"), INSTRUCTORS).expect("write instructors.txt");

    match University::load(dir.path()) {
        Err(RepositoryError::FileNotFound(path)) => {
            assert_eq!(path, dir.path().join("grades.txt"));
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn test_sample_repository_loads_cleanly() {
    let samples = Path::new(env!("CARGO_MANIFEST_DIR")).join("samples/university");

    let university = University::load(&samples).expect("load samples");
    assert!(university.diagnostics().is_empty());
    assert_eq!(university.student_count(), 4);
    assert_eq!(university.major_rows().count(), 2);

    let baldwin = university.student("10103").expect("student 10103");
    assert_eq!(baldwin.gpa(), Some(3.38));
}
