use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use filetime::FileTime;
use predicates::prelude::*;
use std::fs;

#[test]
fn fixes_every_file_under_cwd() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("missing.txt").write_str("abc")?;
    temp.child("ok.txt").write_str("abc\n")?;
    temp.child("extra.txt").write_str("abc\n\n\n")?;
    temp.child("empty.txt").touch()?;
    temp.child("nested/deep/code.rs").write_str("fn main() {}\n\n")?;

    let mut cmd = cargo_bin_cmd!("newline");
    cmd.current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    temp.child("missing.txt").assert("abc\n");
    temp.child("ok.txt").assert("abc\n");
    temp.child("extra.txt").assert("abc\n");
    temp.child("empty.txt").assert("");
    temp.child("nested/deep/code.rs").assert("fn main() {}\n");
    Ok(())
}

#[test]
fn verbose_flag_lists_relative_paths() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("a.txt").write_str("a")?;
    temp.child("b/c.txt").write_str("c")?;

    let mut cmd = cargo_bin_cmd!("newline");
    let assert = cmd.current_dir(temp.path()).arg("-v").assert().success();
    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["Processing ./a.txt", "Processing ./b/c.txt"]);
    Ok(())
}

#[test]
fn verbose_flag_only_counts_in_first_position() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("a.txt").write_str("a")?;

    let mut cmd = cargo_bin_cmd!("newline");
    cmd.current_dir(temp.path())
        .args(["extra", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    temp.child("a.txt").assert("a\n");
    Ok(())
}

#[test]
fn help_and_version_flags_still_normalize() -> Result<(), Box<dyn std::error::Error>> {
    for flag in ["-h", "--help", "-V", "--version"] {
        let temp = TempDir::new()?;
        temp.child("a.txt").write_str("a\n\n")?;

        cargo_bin_cmd!("newline")
            .current_dir(temp.path())
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
        temp.child("a.txt").assert("a\n");
    }
    Ok(())
}

#[test]
fn clustered_vv_is_not_verbose() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("a.txt").write_str("a")?;

    cargo_bin_cmd!("newline")
        .current_dir(temp.path())
        .arg("-vv")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    temp.child("a.txt").assert("a\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn symlinked_file_target_is_normalized() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let outside = TempDir::new()?;
    outside.child("t.txt").write_str("x")?;
    std::os::unix::fs::symlink(outside.child("t.txt").path(), temp.child("link.txt").path())?;

    cargo_bin_cmd!("newline")
        .current_dir(temp.path())
        .arg("-v")
        .assert()
        .success()
        .stdout("Processing ./link.txt\n");

    outside.child("t.txt").assert("x\n");
    assert!(fs::symlink_metadata(temp.child("link.txt").path())?.file_type().is_symlink());
    Ok(())
}

#[test]
fn second_run_changes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("a.txt").write_str("line\n\n\n\n")?;
    temp.child("b.txt").write_str("no newline")?;

    cargo_bin_cmd!("newline").current_dir(temp.path()).assert().success();
    let first_a = fs::read(temp.child("a.txt").path())?;
    let first_b = fs::read(temp.child("b.txt").path())?;

    cargo_bin_cmd!("newline").current_dir(temp.path()).assert().success();
    assert_eq!(fs::read(temp.child("a.txt").path())?, first_a);
    assert_eq!(fs::read(temp.child("b.txt").path())?, first_b);
    Ok(())
}

#[test]
fn only_excluded_files_fails_without_touching_them() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child(".git/config").write_str("[core]\n\n\n")?;

    let mut cmd = cargo_bin_cmd!("newline");
    cmd.current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: no files found to format"));

    temp.child(".git/config").assert("[core]\n\n\n");
    let entries: Vec<_> = fs::read_dir(temp.path())?.collect();
    assert_eq!(entries.len(), 1, "no new files should appear");
    Ok(())
}

#[test]
fn excluded_files_keep_bytes_and_mtime() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let excluded = temp.child(".git/HEAD");
    excluded.write_str("ref: refs/heads/main")?;
    temp.child("src/lib.rs").write_str("pub fn f() {}")?;

    let old = FileTime::from_unix_time(1_000_000_000, 0);
    filetime::set_file_mtime(excluded.path(), old)?;

    cargo_bin_cmd!("newline").current_dir(temp.path()).assert().success();

    excluded.assert("ref: refs/heads/main");
    let meta = fs::metadata(excluded.path())?;
    assert_eq!(FileTime::from_last_modification_time(&meta), old);
    temp.child("src/lib.rs").assert("pub fn f() {}\n");
    Ok(())
}

#[test]
fn running_inside_styleguide_dir_walks_parent() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("styleguide/newline.cfg").write_str("x")?;
    temp.child("README.md").write_str("readme\n\n")?;

    let mut cmd = cargo_bin_cmd!("newline");
    cmd.current_dir(temp.child("styleguide").path())
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing ../README.md"))
        .stdout(predicate::str::contains("Processing ../styleguide/newline.cfg"));

    temp.child("README.md").assert("readme\n");
    temp.child("styleguide/newline.cfg").assert("x\n");
    Ok(())
}

#[test]
fn invalid_settings_file_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child(".styleguide.toml").write_str("exclude = [")?;
    temp.child("a.txt").write_str("a")?;

    cargo_bin_cmd!("newline")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load settings"));

    temp.child("a.txt").assert("a");
    Ok(())
}
