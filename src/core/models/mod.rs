//! Data models for the university repository

pub mod grade;
pub mod instructor;
pub mod major;
pub mod student;
pub mod university;

pub use grade::Grade;
pub use instructor::{Instructor, InstructorRow};
pub use major::{CourseKind, Major, MajorRow, RemainingCourses};
pub use student::{Student, StudentRow};
pub use university::University;
