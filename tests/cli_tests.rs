mod common;

use anyhow::Result;
use assert_cmd::Command;
use common::TestTrees;
use predicates::prelude::*;
use std::fs;

fn treediff(trees: &TestTrees) -> Result<Command> {
    let mut cmd = Command::cargo_bin("treediff")?;
    cmd.current_dir(trees.path())
        .env_remove("TREEDIFF_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    Ok(cmd)
}

#[test]
fn test_default_layout_run() -> Result<()> {
    let trees = TestTrees::new()?;
    trees.write_a("a.tbl", "x=1\n")?;
    trees.write_a("b.txt", "hello\n")?;
    trees.write_b("a.tbl", "x=2\n")?;

    treediff(&trees)?
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Done! 1 different files were found, and 1 files were not found in directory B",
        ))
        .stdout(predicate::str::contains("Files not found in directory B: b.txt"))
        .stdout(predicate::str::contains("Different files in directory B: a.tbl"));

    let patch = fs::read_to_string(trees.diffs().join("a.tbl.diff"))?;
    assert!(patch.contains("--- a.tbl.dirA"));
    assert!(patch.contains("+++ a.tbl.dirB"));

    Ok(())
}

#[test]
fn test_missing_root_fails_without_summary() -> Result<()> {
    let trees = TestTrees::new()?;
    fs::remove_dir(trees.dir_b())?;

    treediff(&trees)?
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Path Not Found"))
        .stdout(predicate::str::contains("Done!").not());

    Ok(())
}

#[test]
fn test_missing_diffs_dir_fails() -> Result<()> {
    let trees = TestTrees::new()?;
    trees.write_a("a.lua", "1\n")?;
    trees.write_b("a.lua", "2\n")?;
    fs::remove_dir(trees.diffs())?;

    treediff(&trees)?
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output Write Error"));

    Ok(())
}

#[test]
fn test_explicit_paths_and_config_file() -> Result<()> {
    let trees = TestTrees::new()?;
    trees.write_a("data.tbl/readme.txt", "a\n")?;
    trees.write_b("data.tbl/readme.txt", "b\n")?;

    let config_path = trees.path().join("treediff.toml");
    fs::write(
        &config_path,
        "[diff]\nmatch_mode = \"suffix\"\ncreate_parent_dirs = true\n",
    )?;

    let mut cmd = Command::cargo_bin("treediff")?;
    cmd.env("NO_COLOR", "1")
        .arg("--dir-a")
        .arg(trees.dir_a())
        .arg("--dir-b")
        .arg(trees.dir_b())
        .arg("--diffs")
        .arg(trees.diffs())
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Different files in directory B: data.tbl/readme.txt"));

    // Suffix matching ignores the marker in the directory name
    assert!(!trees.diffs().join("data.tbl/readme.txt.diff").exists());

    Ok(())
}

#[test]
fn test_unknown_config_field_warns() -> Result<()> {
    let trees = TestTrees::new()?;
    let config_path = trees.path().join("treediff.toml");
    fs::write(&config_path, "[diff]\ncolour = true\n")?;

    treediff(&trees)?
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown configuration field: diff.colour"));

    Ok(())
}

#[test]
fn test_missing_config_file_fails() -> Result<()> {
    let trees = TestTrees::new()?;

    treediff(&trees)?
        .args(["--config", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));

    Ok(())
}

#[test]
fn test_completions() -> Result<()> {
    let trees = TestTrees::new()?;

    treediff(&trees)?
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("treediff"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_prints_no_summary() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let trees = TestTrees::new()?;
    let locked = trees.write_a("maps/zone.tbl", "x\n")?;
    let locked = locked.parent().expect("file has a parent").to_path_buf();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    // Permission bits do not apply to root
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        return Ok(());
    }

    let assert = treediff(&trees)?.assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

    assert
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Not Readable"))
        .stderr(predicate::str::contains("maps"))
        .stdout(predicate::str::contains("Done!").not());

    Ok(())
}

#[test]
fn test_verbose_prints_run_settings() -> Result<()> {
    let trees = TestTrees::new()?;

    treediff(&trees)?
        .args(["-v", "--legacy-fingerprint"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Fingerprint: Legacy, mode: Batch"));

    treediff(&trees)?
        .assert()
        .success()
        .stderr(predicate::str::contains("Fingerprint:").not());

    Ok(())
}
