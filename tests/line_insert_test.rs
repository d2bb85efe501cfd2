use anyhow::Result;
use line_insert::core::lines::split_lines;
use line_insert::{
    run, ErrorPolicy, InsertConfig, InsertError, LinePrepender, LocalFileStore, TomlConfig,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> Result<()> {
    fs::write(dir.join(name), contents)?;
    Ok(())
}

fn read(dir: &Path, name: &str) -> Result<String> {
    Ok(fs::read_to_string(dir.join(name))?)
}

#[test]
fn test_only_matching_files_are_rewritten() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    write(dir, "a.txt", "X\nY\n")?;
    write(dir, "b.py", "1\n2\n")?;

    run(dir, ".py", "Z\n")?;

    assert_eq!(read(dir, "a.txt")?, "X\nY\n");
    assert_eq!(split_lines(&read(dir, "b.py")?), vec!["1\n", "Z\n", "2\n"]);
    Ok(())
}

#[test]
fn test_original_lines_shift_down_by_one() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    let original = "#!/usr/bin/env python\nimport os\n\ndef main():\n    pass\n";
    write(dir, "tool.py", original)?;

    run(dir, ".py", "from dodesign.show import show\n")?;

    let old_lines = split_lines(original);
    let updated = read(dir, "tool.py")?;
    let new_lines = split_lines(&updated);

    assert_eq!(new_lines[0], old_lines[0]);
    assert_eq!(new_lines[1], "from dodesign.show import show\n");
    assert_eq!(&new_lines[2..], &old_lines[1..]);
    Ok(())
}

#[test]
fn test_single_line_file_gets_line_appended() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    write(dir, "c.py", "only\n")?;

    run(dir, ".py", "Z\n")?;

    assert_eq!(split_lines(&read(dir, "c.py")?), vec!["only\n", "Z\n"]);
    Ok(())
}

#[test]
fn test_empty_file_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    write(dir, "d.py", "")?;

    let err = run(dir, ".py", "Z\n").unwrap_err();

    assert!(matches!(err, InsertError::EmptyFile { .. }));
    assert_eq!(err.path(), Some(dir.join("d.py").as_path()));
    assert_eq!(read(dir, "d.py")?, "");
    Ok(())
}

#[test]
fn test_second_run_inserts_second_copy() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    write(dir, "b.py", "1\n2\n")?;

    run(dir, ".py", "Z\n")?;
    run(dir, ".py", "Z\n")?;

    assert_eq!(
        split_lines(&read(dir, "b.py")?),
        vec!["1\n", "Z\n", "Z\n", "2\n"]
    );
    Ok(())
}

#[test]
fn test_subdirectories_are_not_descended() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    fs::create_dir(dir.join("pkg"))?;
    write(&dir.join("pkg"), "inner.py", "1\n2\n")?;
    write(dir, "outer.py", "1\n2\n")?;

    run(dir, ".py", "Z\n")?;

    assert_eq!(read(&dir.join("pkg"), "inner.py")?, "1\n2\n");
    assert_eq!(read(dir, "outer.py")?, "1\nZ\n2\n");
    Ok(())
}

#[test]
fn test_directory_with_matching_name_fails_read() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    fs::create_dir(dir.join("pkg.py"))?;

    let err = run(dir, ".py", "Z\n").unwrap_err();

    assert!(matches!(err, InsertError::ReadError { .. }));
    Ok(())
}

#[test]
fn test_continue_policy_processes_the_rest() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    write(dir, "a.py", "1\n2\n")?;
    fs::create_dir(dir.join("b.py"))?;
    write(dir, "c.py", "")?;
    write(dir, "d.py", "1\n")?;

    let config = InsertConfig::new(dir, ".py", "Z\n");
    let report = LinePrepender::new(LocalFileStore::new(), &config)
        .with_policy(ErrorPolicy::Continue)
        .run()?;

    assert_eq!(report.candidates, 4);
    assert_eq!(report.modified.len(), 2);
    assert!(!report.is_success());

    let failed: Vec<_> = report.failed.iter().map(|f| f.path.clone()).collect();
    assert_eq!(failed, vec![dir.join("b.py"), dir.join("c.py")]);

    assert_eq!(read(dir, "a.py")?, "1\nZ\n2\n");
    assert_eq!(read(dir, "c.py")?, "");
    assert_eq!(read(dir, "d.py")?, "1\nZ\n");
    Ok(())
}

#[test]
fn test_dry_run_leaves_files_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    write(dir, "a.py", "1\n2\n")?;

    let config = InsertConfig::new(dir, ".py", "Z\n");
    let report = LinePrepender::new(LocalFileStore::new(), &config)
        .with_dry_run(true)
        .run()?;

    assert_eq!(report.modified.len(), 1);
    assert!(!report.modified[0].written);
    assert_eq!(read(dir, "a.py")?, "1\n2\n");
    Ok(())
}

#[test]
fn test_missing_directory_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nope");

    let err = run(&missing, ".py", "Z\n").unwrap_err();

    assert!(matches!(err, InsertError::DirectoryError { .. }));
    assert_eq!(err.exit_code(), 3);
    Ok(())
}

#[test]
fn test_toml_config_drives_a_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    write(dir, "a.rs", "//! crate docs\nfn main() {}\n")?;
    write(dir, "b.py", "1\n2\n")?;

    let normalized_path = dir.to_str().unwrap().replace('\\', "/");
    let config = TomlConfig::from_toml_str(&format!(
        r##"
[target]
directory = "{}"
suffix = ".rs"

[insert]
line = "#![allow(dead_code)]"
"##,
        normalized_path
    ))?;

    let report = LinePrepender::new(LocalFileStore::new(), &config).run()?;

    assert_eq!(report.candidates, 1);
    assert_eq!(
        read(dir, "a.rs")?,
        "//! crate docs\n#![allow(dead_code)]\nfn main() {}\n"
    );
    assert_eq!(read(dir, "b.py")?, "1\n2\n");
    Ok(())
}

#[test]
fn test_report_serializes_to_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    write(dir, "a.py", "1\n")?;

    let config = InsertConfig::new(dir, ".py", "Z\n");
    let report = LinePrepender::new(LocalFileStore::new(), &config).run()?;
    let json: serde_json::Value = serde_json::from_str(&report.to_json()?)?;

    assert_eq!(json["candidates"], 1);
    assert_eq!(json["suffix"], ".py");
    assert_eq!(json["modified"][0]["original_lines"], 1);
    assert_eq!(json["modified"][0]["written"], true);
    assert_eq!(json["aborted"], false);
    Ok(())
}

#[test]
fn test_crlf_file_keeps_crlf_endings() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    write(dir, "win.py", "1\r\n2\r\n")?;
    write(dir, "single.py", "only")?;

    run(dir, ".py", "Z")?;

    assert_eq!(read(dir, "win.py")?, "1\r\nZ\r\n2\r\n");
    assert_eq!(read(dir, "single.py")?, "only\nZ\n");
    Ok(())
}
