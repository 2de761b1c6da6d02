use assert_cmd::Command;
use predicates::prelude::*;

use crate::fixtures::{JAVA_SOURCE, write_java};

fn jversion() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jversion"))
}

#[test]
fn get_prints_declared_version() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_java(dir.path(), "Library.java", JAVA_SOURCE);

    jversion()
        .arg("get")
        .arg(&file)
        .assert()
        .success()
        .stdout("0.16.14\n");
}

#[test]
fn get_reports_missing_declaration() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_java(dir.path(), "Empty.java", "public class Empty {}\n");

    jversion()
        .arg("get")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("declaration not found"));
}

#[test]
fn set_rewrites_only_the_declaration() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_java(dir.path(), "Library.java", JAVA_SOURCE);

    jversion()
        .arg("set")
        .arg(&file)
        .arg("1.0.0")
        .assert()
        .success()
        .stdout("");

    let written = std::fs::read_to_string(&file).unwrap();
    assert_eq!(written, JAVA_SOURCE.replace("\"0.16.14\"", "\"1.0.0\""));
}

#[test]
fn set_without_declaration_is_a_no_op_unless_strict() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_java(dir.path(), "Empty.java", "public class Empty {}\n");

    jversion().arg("set").arg(&file).arg("1.0.0").assert().success();
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "public class Empty {}\n");

    jversion()
        .args(["set", "--strict"])
        .arg(&file)
        .arg("1.0.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("declaration not found"));
}

#[test]
fn bump_updates_file_and_prints_next_version() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_java(dir.path(), "Library.java", JAVA_SOURCE);

    jversion()
        .arg("bump")
        .arg(&file)
        .assert()
        .success()
        .stdout("0.16.15\n");
    jversion()
        .args(["bump", "--level", "major"])
        .arg(&file)
        .assert()
        .success()
        .stdout("1.0.0\n");

    jversion().arg("get").arg(&file).assert().success().stdout("1.0.0\n");
}

#[test]
fn dry_run_prints_contents_and_keeps_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_java(dir.path(), "Library.java", JAVA_SOURCE);

    jversion()
        .args(["--dry-run", "bump", "--level", "minor"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("String VERSION = \"0.17.0\";"))
        .stdout(predicate::str::contains("package de.example.base;"));

    assert_eq!(std::fs::read_to_string(&file).unwrap(), JAVA_SOURCE);
}

#[test]
fn bump_rejects_non_numeric_components() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_java(dir.path(), "Odd.java", "String VERSION = \"1..2\";\n");

    jversion()
        .arg("bump")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid version '1..2'"));
}

#[test]
fn lenient_set_warns_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_java(dir.path(), "Empty.java", "public class Empty {}\n");

    jversion()
        .env_remove("RUST_LOG")
        .arg("set")
        .arg(&file)
        .arg("1.0.0")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("nothing to set"));
}
