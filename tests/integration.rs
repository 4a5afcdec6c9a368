use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_doxcov")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// -- summary format (default) --

#[test]
fn basic_summary_is_half_documented() {
    let assert = cmd().arg(fixture_path("basic")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(
        output,
        "Stats for source file: foo.h\n \
         --- No docstring for type <function>: void Foo::bar\n \
         +++ foo.h: 1/2 documented\n\
         Documented code: 1/2 (50%)\n"
    );
}

#[test]
fn no_functions_excludes_the_member() {
    let assert = cmd()
        .arg("--no-functions")
        .arg(fixture_path("basic"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(
        output,
        "Stats for source file: foo.h\n \
         +++ foo.h: 1/1 documented\n\
         Documented code: 1/1 (100%)\n"
    );
}

#[test]
fn no_classes_excludes_the_compound() {
    cmd()
        .arg("--no-classes")
        .arg(fixture_path("basic"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Documented code: 0/1 (0%)"));
}

#[test]
fn project_summary_aggregates_across_files() {
    let assert = cmd().arg(fixture_path("project")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(
        output,
        "Stats for source file: vec2.h\n \
         --- No docstring for type <variable>: float geom::Vec2::x\n \
         --- No docstring for type <enum>: Axis\n \
         --- No docstring for type <file>: vec2.h\n \
         +++ vec2.h: 4/7 documented\n\
         Stats for source file: math.cpp\n \
         --- No docstring for type <file>: math.cpp\n \
         --- No docstring for type <function>: float dot(Vec2 a, Vec2 b)\n \
         +++ math.cpp: 0/2 documented\n\
         Documented code: 4/9 (44%)\n"
    );
}

#[test]
fn project_kind_flags_compose() {
    // Dropping variables and enums removes the two vec2.h offenders.
    cmd()
        .args(["--no-variables", "--no-enums"])
        .arg(fixture_path("project"))
        .assert()
        .success()
        .stdout(predicate::str::contains(" +++ vec2.h: 4/5 documented"))
        .stdout(predicate::str::contains("Documented code: 4/7 (57%)"));
}

#[test]
fn dir_compound_never_appears() {
    // The project index lists a dir compound whose XML file does not even
    // exist; the run must still succeed and never mention it.
    cmd()
        .arg(fixture_path("project"))
        .assert()
        .success()
        .stdout(predicate::str::contains("dir").not())
        .stdout(predicate::str::contains("src").not());
}

#[test]
fn namespace_without_location_contributes_nothing() {
    cmd()
        .arg(fixture_path("project"))
        .assert()
        .success()
        .stdout(predicate::str::contains("namespace").not());
}

// -- raw format --

#[test]
fn raw_format_dumps_every_symbol() {
    let assert = cmd()
        .args(["-f", "raw"])
        .arg(fixture_path("basic"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(
        output,
        "Source file: foo.h\n \
         -- Symbol: Foo: class, true\n \
         -- Symbol: void Foo::bar: function, false\n"
    );
}

#[test]
fn unknown_format_fails() {
    cmd()
        .args(["-f", "xml"])
        .arg(fixture_path("basic"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

// -- error handling --

#[test]
fn missing_index_fails_with_path() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("index.xml not found in path"));
}

#[test]
fn empty_index_reports_zero_percent() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("index.xml"),
        "<doxygenindex version=\"1.9.8\"></doxygenindex>",
    )
    .unwrap();

    let assert = cmd().arg(dir.path()).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, "Documented code: 0/0 (0%)\n");
}

#[test]
fn malformed_index_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.xml"), "<doxygenindex").unwrap();

    cmd()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn broken_compound_file_does_not_abort_the_run() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("index.xml"),
        r#"<doxygenindex version="1.9.8">
            <compound refid="broken" kind="class"><name>Broken</name></compound>
            <compound refid="classFoo" kind="class"><name>Foo</name></compound>
        </doxygenindex>"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("broken.xml"), "<doxygen><compounddef").unwrap();
    std::fs::write(
        dir.path().join("classFoo.xml"),
        std::fs::read(fixture_path("basic/classFoo.xml")).unwrap(),
    )
    .unwrap();

    // Symbols from the intact compound still make it into the report.
    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Documented code: 1/2 (50%)"));
}

#[test]
fn missing_compound_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("index.xml"),
        r#"<doxygenindex version="1.9.8">
            <compound refid="ghost" kind="class"><name>Ghost</name></compound>
        </doxygenindex>"#,
    )
    .unwrap();

    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Documented code: 0/0 (0%)"));
}
