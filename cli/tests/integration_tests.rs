use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use rusqlite::{Connection, params};

const BIN: &str = env!("CARGO_BIN_EXE_extract-bible-data");

const FORMAT_TEXT: &str = "\
MyBible modules format

Books are listed below.

#ccccff
10
Быт
Бытие
Gen
Genesis
Note: first book of the Law
#ccccff
20
Исх
Исход
Exo
Exodus
#ffffff
not a number
#ffcc99
730
Откр
Откровение
Rev
Revelation
#ffcc99
740
";

/// Writes the module format text file.
fn write_format(dir: &Path) -> PathBuf {
    let path = dir.join("format.txt");
    fs::write(&path, FORMAT_TEXT).expect("failed to write format file");
    path
}

/// Writes a plan database with two days of readings.
fn write_plan_db(dir: &Path) -> PathBuf {
    let path = dir.join("plan.SQLite3");
    let conn = Connection::open(&path).expect("failed to create plan db");
    conn.execute_batch(
        "CREATE TABLE info (name TEXT, value TEXT);
         CREATE TABLE reading_plan (day NUMERIC, evening NUMERIC, item NUMERIC,
             book_number NUMERIC, start_chapter NUMERIC, start_verse NUMERIC,
             end_chapter NUMERIC, end_verse NUMERIC);
         INSERT INTO info VALUES ('description', 'Библия за год');
         INSERT INTO info VALUES ('language', 'ru');",
    )
    .expect("failed to create plan tables");
    for row in [
        (2, 0, 1, 42, 1, 1, 1, 4),
        (1, 0, 2, 41, 1, 1, 1, 3),
        (1, 0, 1, 40, 1, 1, 1, 5),
    ] {
        conn.execute(
            "INSERT INTO reading_plan VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![row.0, row.1, row.2, row.3, row.4, row.5, row.6, row.7],
        )
        .expect("failed to insert plan row");
    }
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env_remove("BIBLE_PLAN_LOG")
        .output()
        .expect("failed to run extract-bible-data")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is UTF-8")
}

#[test]
fn writes_books_and_plan() {
    let dir = tempfile::tempdir().unwrap();
    let format = write_format(dir.path());
    let db = write_plan_db(dir.path());
    let out = dir.path().join("nested").join("data");

    let output = run(&[
        "--format-file",
        path_str(&format),
        "--plan-db",
        path_str(&db),
        "--output-dir",
        path_str(&out),
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Extracting books..."));
    assert!(stdout.contains("Extracted 3 books."));
    assert!(stdout.contains("Extracting plan..."));
    assert!(stdout.trim_end().ends_with("Done!"));

    let books_text = fs::read_to_string(out.join("books.json")).unwrap();
    assert!(books_text.contains("\"long_ru\": \"Бытие\""));
    assert!(books_text.starts_with("{\n  \""));

    let books: BTreeMap<String, serde_json::Value> = serde_json::from_str(&books_text).unwrap();
    let mut keys: Vec<u32> = books.keys().map(|k| k.parse().unwrap()).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec![10, 20, 730]);
    assert_eq!(
        books["730"],
        serde_json::json!({
            "book_number": 730,
            "color": "#ffcc99",
            "short_ru": "Откр",
            "long_ru": "Откровение",
            "short_en": "Rev",
            "long_en": "Revelation"
        })
    );

    let plan_text = fs::read_to_string(out.join("plan.json")).unwrap();
    assert!(plan_text.contains("Библия за год"));
    let plan: serde_json::Value = serde_json::from_str(&plan_text).unwrap();
    assert_eq!(plan["info"]["language"], "ru");
    assert_eq!(plan["plan"].as_array().unwrap().len(), 2);
    assert_eq!(plan["plan"][0]["day"], 1);
    assert_eq!(plan["plan"][0]["readings"][0]["book_number"], 40);
    assert_eq!(plan["plan"][0]["readings"][1]["book_number"], 41);
    assert_eq!(plan["plan"][1]["readings"][0]["end_verse"], 4);
}

#[test]
fn existing_output_dir_is_reused() {
    let dir = tempfile::tempdir().unwrap();
    let format = write_format(dir.path());
    let db = write_plan_db(dir.path());
    let out = dir.path().join("data");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("books.json"), "stale").unwrap();

    let args = [
        "--format-file",
        path_str(&format),
        "--plan-db",
        path_str(&db),
        "--output-dir",
        path_str(&out),
    ];
    assert!(run(&args).status.success());
    assert!(run(&args).status.success());

    let books: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("books.json")).unwrap()).unwrap();
    assert_eq!(books.as_object().unwrap().len(), 3);
}

#[test]
fn missing_format_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db = write_plan_db(dir.path());
    let out = dir.path().join("data");

    let output = run(&[
        "--format-file",
        path_str(&dir.path().join("absent.txt")),
        "--plan-db",
        path_str(&db),
        "--output-dir",
        path_str(&out),
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: Failed to read format file"));
    assert!(!out.join("plan.json").exists());
}

#[test]
fn missing_database_fails_after_books() {
    let dir = tempfile::tempdir().unwrap();
    let format = write_format(dir.path());
    let out = dir.path().join("data");

    let output = run(&[
        "--format-file",
        path_str(&format),
        "--plan-db",
        path_str(&dir.path().join("absent.SQLite3")),
        "--output-dir",
        path_str(&out),
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to extract plan"));
    assert!(out.join("books.json").exists());
    assert!(!out.join("plan.json").exists());
}

#[test]
fn skip_plan_only_writes_books() {
    let dir = tempfile::tempdir().unwrap();
    let format = write_format(dir.path());
    let out = dir.path().join("data");

    let output = run(&[
        "--format-file",
        path_str(&format),
        "--output-dir",
        path_str(&out),
        "--skip-plan",
    ]);
    assert!(output.status.success());
    assert!(out.join("books.json").exists());
    assert!(!out.join("plan.json").exists());
}

#[test]
fn config_file_sets_locations() {
    let dir = tempfile::tempdir().unwrap();
    let db = write_plan_db(dir.path());
    let out = dir.path().join("public");
    let config = dir.path().join("extract.yaml");
    fs::write(
        &config,
        format!(
            "plan_db: {}\noutput_dir: {}\nplan_file: reading-plan.json\n",
            path_str(&db),
            path_str(&out)
        ),
    )
    .unwrap();

    let output = run(&["--config", path_str(&config), "--skip-books"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(out.join("reading-plan.json").exists());
    assert!(!out.join("books.json").exists());
}

#[test]
fn skip_flags_conflict() {
    let output = run(&["--skip-books", "--skip-plan"]);
    assert!(!output.status.success());
}

#[test]
fn malformed_block_is_logged_and_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let format = dir.path().join("format.txt");
    fs::write(
        &format,
        "#111111\n99999999999\na\nb\nc\nd\n#222222\n3\nx\ny\nz\nw\n",
    )
    .unwrap();
    let out = dir.path().join("data");

    let output = run(&[
        "--format-file",
        path_str(&format),
        "--output-dir",
        path_str(&out),
        "--skip-plan",
    ]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Extracted 1 books."));
    assert!(String::from_utf8_lossy(&output.stderr).contains("skipping book block"));
}
