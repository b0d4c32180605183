mod common;
use common::TestFixture;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_set_then_show() {
    let fixture = TestFixture::new();

    // Given: a day with two tasks and a note
    fixture
        .command()
        .args(["set", "2025-08-10", "--task", "  Write report  ", "--task", "Gym"])
        .args(["--notes", "Bring\nshoes"])
        .assert()
        .success();

    // When: showing it
    // Then: tasks are trimmed, the empty slot shows a placeholder
    fixture
        .command()
        .args(["show", "2025-08-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunday, August 10, 2025 (2025-08-10)"))
        .stdout(predicate::str::contains("  1. Write report\n"))
        .stdout(predicate::str::contains("  2. Gym\n"))
        .stdout(predicate::str::contains("  3. —\n"))
        .stdout(predicate::str::contains("  Bring\n  shoes"));
}

#[test]
fn test_set_keeps_omitted_fields() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["set", "2025-08-10", "--task", "Gym", "--notes", "first"])
        .assert()
        .success();
    fixture
        .command()
        .args(["set", "2025-08-10", "--notes", "second"])
        .assert()
        .success();

    fixture
        .command()
        .args(["show", "2025-08-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. Gym\n"))
        .stdout(predicate::str::contains("  second"))
        .stdout(predicate::str::contains("first").not());
}

#[test]
fn test_set_rejects_more_than_three_tasks() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["set", "2025-08-10"])
        .args(["--task", "a", "--task", "b", "--task", "c", "--task", "d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 3 tasks"));

    assert!(!fixture.calendar_path().exists());
}

#[test]
fn test_show_empty_day_prints_placeholders() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["show", "2025-08-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Friday, August 1, 2025"))
        .stdout(predicate::str::contains("Notes:\n  —"));

    // Reading never creates the record file
    assert!(!fixture.calendar_path().exists());
}

#[test]
fn test_malformed_date_is_rejected() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["show", "2025-8-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

#[test]
fn test_export_writes_sorted_document() -> anyhow::Result<()> {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["set", "2025-09-02", "--task", "later"])
        .assert()
        .success();
    fixture
        .command()
        .args(["set", "2025-08-15", "--task", "earlier"])
        .assert()
        .success();

    let output = fixture.scratch_path("backup.json");
    fixture
        .command()
        .arg("export")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output)?;
    let earlier = text.find("2025-08-15").expect("earlier day exported");
    let later = text.find("2025-09-02").expect("later day exported");
    assert!(earlier < later);

    let document: serde_json::Value = serde_json::from_str(&text)?;
    assert_eq!(document["2025-08-15"]["tasks"][0], "earlier");
    assert_eq!(document["2025-08-15"]["tasks"][1], "");
    Ok(())
}

#[test]
fn test_export_to_stdout() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["set", "2025-08-15", "--notes", "hello"])
        .assert()
        .success();

    fixture
        .command()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"2025-08-15\": {"))
        .stdout(predicate::str::contains("\"notes\": \"hello\""));
}

#[test]
fn test_import_replaces_all_records() -> anyhow::Result<()> {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["set", "2025-08-01", "--task", "old"])
        .assert()
        .success();

    let file = fixture.scratch_path("import.json");
    fs::write(
        &file,
        r#"{"2025-08-20": {"tasks": ["Imported", null], "notes": "from backup"}}"#,
    )?;

    fixture
        .command()
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Import complete!"));

    fixture
        .command()
        .args(["show", "2025-08-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. Imported\n"))
        .stdout(predicate::str::contains("  from backup"));

    // The old record is gone
    fixture
        .command()
        .args(["show", "2025-08-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("old").not());
    Ok(())
}

#[test]
fn test_import_invalid_file_keeps_records() -> anyhow::Result<()> {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["set", "2025-08-01", "--task", "keep me"])
        .assert()
        .success();
    let before = fs::read_to_string(fixture.calendar_path())?;

    let file = fixture.scratch_path("broken.json");
    fs::write(&file, "not json at all")?;

    fixture
        .command()
        .arg("import")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import failed: invalid file."));

    assert_eq!(fs::read_to_string(fixture.calendar_path())?, before);
    Ok(())
}

#[test]
fn test_window_seeds_around_today() -> anyhow::Result<()> {
    let fixture = TestFixture::new();
    fixture.write_config("[range]\nmin_date = \"2025-08-01\"\n")?;

    // Nine days of history exist before the anchor, so the window starts
    // at the lower bound and reaches 120 days past the anchor.
    fixture
        .command()
        .args(["window", "--today", "2025-08-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bounds: 2025-08-01 .. (unbounded)"))
        .stdout(predicate::str::contains("Anchor: 2025-08-10"))
        .stdout(predicate::str::contains(
            "Window: 2025-08-01 .. 2025-12-08 (130 days)",
        ));
    Ok(())
}

#[test]
fn test_window_clamps_to_max_date() -> anyhow::Result<()> {
    let fixture = TestFixture::new();
    fixture.write_config(
        "[range]\nmin_date = \"2025-08-01\"\nmax_date = \"2025-08-31\"\n",
    )?;

    fixture
        .command()
        .args(["window", "--today", "2025-09-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anchor: 2025-08-31"))
        .stdout(predicate::str::contains(
            "Window: 2025-08-01 .. 2025-08-31 (31 days)",
        ));
    Ok(())
}

#[test]
fn test_inverted_config_fails() -> anyhow::Result<()> {
    let fixture = TestFixture::new();
    fixture.write_config(
        "[range]\nmin_date = \"2025-09-01\"\nmax_date = \"2025-08-01\"\n",
    )?;

    fixture
        .command()
        .arg("window")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
    Ok(())
}

#[test]
fn test_browse_without_terminal_prints_initial_window() -> anyhow::Result<()> {
    let fixture = TestFixture::new();
    fixture.write_config(
        "[range]\nmin_date = \"2025-08-01\"\nmax_date = \"2025-08-12\"\n",
    )?;
    fixture
        .command()
        .args(["set", "2025-08-05", "--task", "Dentist", "--notes", "10am"])
        .assert()
        .success();

    // stdout is a pipe here, so the plain tile listing is used
    fixture
        .command()
        .args(["browse", "--today", "2025-08-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Friday, August 1, 2025\n  — · — · —\n  —\n"))
        .stdout(predicate::str::contains(
            "Tuesday, August 5, 2025\n  Dentist · — · —\n  10am\n",
        ))
        .stdout(predicate::str::contains("Tuesday, August 12, 2025"))
        .stdout(predicate::str::contains("August 13").not());
    Ok(())
}
