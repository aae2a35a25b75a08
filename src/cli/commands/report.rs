//! Report command handler

use logger::{error, info, warn};
use std::path::{Path, PathBuf};
use uni_registry::config::Config;
use uni_registry::core::{db, models::University, report};

/// Run the report command.
///
/// Loads the university directory, prints the majors, students, and
/// instructors tables, then the database-backed student-grades table when a
/// database path is available (CLI argument wins over config).
///
/// # Arguments
/// * `directory` - University data directory; falls back to config `data_dir`
/// * `database` - Optional student-grades database path
/// * `config` - Loaded configuration
/// * `verbose` - Whether to show load confirmation on stdout
pub fn run(directory: Option<&Path>, database: Option<&Path>, config: &Config, verbose: bool) {
    let data_dir = directory.map_or_else(
        || PathBuf::from(&config.paths.data_dir),
        Path::to_path_buf,
    );

    let university = match University::load(&data_dir) {
        Ok(university) => university,
        Err(err) => {
            error!("Failed to load university repository: {err}");
            eprintln!("✗ Failed to load {}: {err}", data_dir.display());
            return;
        }
    };

    // Per-record problems were collected during the load; surface them here.
    for diagnostic in university.diagnostics() {
        warn!("{diagnostic}");
    }

    if verbose {
        println!(
            "✓ University repository loaded from: {} ({} students)",
            data_dir.display(),
            university.student_count()
        );
    } else {
        info!("University repository loaded: {}", data_dir.display());
    }

    println!("Summary for {} majors.", data_dir.display());
    print!("{}", report::majors_table(&university));

    println!("Summary for {} students.", data_dir.display());
    print!("{}", report::students_table(&university));

    println!("Summary for {} instructors.", data_dir.display());
    print!("{}", report::instructors_table(&university));

    let db_path = database.map(Path::to_path_buf).or_else(|| {
        if config.database.path.is_empty() {
            None
        } else {
            Some(PathBuf::from(&config.database.path))
        }
    });

    if let Some(db_path) = db_path {
        match db::student_grades(&db_path) {
            Ok(rows) => {
                println!("Summary for {} student grades.", db_path.display());
                print!("{}", report::student_grades_table(&rows));
            }
            Err(err) => {
                error!("Student-grades query failed: {err}");
                eprintln!("✗ Failed to query {}: {err}", db_path.display());
            }
        }
    }
}
