use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_missing_scan_directory() -> Result<()> {
    let test = CliTest::with_template("greeting = \"Hello\"\n")?;

    let mut cmd = test.command();
    cmd.arg("no-such-dir").arg("-t").arg(test.template_path());
    let out = run(cmd)?;

    assert_eq!(out.code, Some(2));
    assert_eq!(out.stdout, "");
    assert!(out.stderr.starts_with("Error: cannot scan directory"));
    assert!(out.stderr.contains("no-such-dir"));

    Ok(())
}

#[test]
fn test_malformed_template() -> Result<()> {
    let test = CliTest::with_template("greeting = \"unterminated\n")?;
    test.write_file("scripts/app.js", "greeting\n")?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(2));
    assert_eq!(out.stdout, "");
    assert!(out.stderr.starts_with("Error: failed to load template"));

    Ok(())
}

#[test]
fn test_missing_template() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["scripts", "-t", "common/missing.toml"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(2));
    assert_eq!(out.stdout, "");
    assert!(out.stderr.contains("missing.toml"));

    Ok(())
}

#[test]
fn test_default_template_location_is_used_without_flag() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("scripts");
    let out = run(cmd)?;

    // The built binary has no template two levels above it.
    assert_eq!(out.code, Some(2));
    assert!(
        out.stderr
            .contains(&format!("common{}template.toml", std::path::MAIN_SEPARATOR)),
        "stderr: {}",
        out.stderr
    );

    Ok(())
}

#[test]
fn test_missing_entry_template() -> Result<()> {
    let test = CliTest::with_template("greeting = \"Hello\"\n")?;
    fs::remove_file(test.root().join("index.template.html"))?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(2));
    assert_eq!(out.stdout, "");
    assert!(out.stderr.contains("index.template.html"));

    Ok(())
}

#[test]
fn test_undecodable_source_file() -> Result<()> {
    let test = CliTest::with_template("greeting = \"Hello\"\n")?;
    fs::write(test.root().join("scripts/blob.js"), [0xc3, 0x28, b'\n'])?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(2));
    assert_eq!(out.stdout, "");
    assert!(out.stderr.starts_with("Error: failed to read"));
    assert!(out.stderr.contains("blob.js"));

    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_failed_stdout_write_is_fatal() -> Result<()> {
    let full = std::path::Path::new("/dev/full");
    if !full.exists() {
        return Ok(());
    }
    let test = CliTest::with_template("farewell = \"Bye\"\n")?;

    let mut cmd = test.check_command();
    cmd.stdout(fs::OpenOptions::new().write(true).open(full)?);
    let out = cmd.output()?;

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8(out.stderr)?.contains("Failed to write unused keys"));

    Ok(())
}
