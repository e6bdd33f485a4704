use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const DOC: &str = r#"
// form.name.label:Name
// form.name.tooltip:start
Shown in lists.
// form.name.tooltip:stop
// form.external:https://example.com/docs
"#;

#[test]
fn test_check_passes() -> Result<()> {
    let test = CliTest::with_file("form.adoc", DOC)?;
    test.write_file("keys.json", r#"["form.name.label", "form.name.tooltip"]"#)?;

    let output = test
        .command()
        .args(["form.adoc", "-k", "keys.json", "-o", "tips.json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "\u{2713} All 2 expected keys documented\n");
    assert!(test.root().join("tips.json").exists());

    Ok(())
}

#[test]
fn test_check_reports_missing_then_extra() -> Result<()> {
    let test = CliTest::with_file("form.adoc", DOC)?;
    test.write_file(
        "keys.json",
        r#"["form.name.label", "form.name.placeholder", "form.id.label"]"#,
    )?;

    let output = test
        .command()
        .args(["form.adoc", "--expected-keys", "keys.json", "-o", "tips.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stdout(&output).trim_end(), @r"
    missing key: form.id.label
    missing key: form.name.placeholder
    extra key: form.name.tooltip
    ✘ Key check failed: 2 missing, 1 extra
    ");
    // The document is still written
    assert!(test.root().join("tips.json").exists());

    Ok(())
}

#[test]
fn test_check_with_object_keys_file() -> Result<()> {
    let test = CliTest::with_file("a.adoc", "// a.b:1\n// a.c:2\n")?;
    test.write_file("keys.json", r#"{ "a.b": "", "a.c": "" }"#)?;

    let output = test
        .command()
        .args(["a.adoc", "-k", "keys.json", "-o", "tips.json"])
        .output()?;

    assert!(output.status.success(), "stdout: {}", stdout(&output));

    Ok(())
}

#[test]
fn test_check_extra_key_fails() -> Result<()> {
    let test = CliTest::with_file("a.adoc", "// a.b:1\n// a.c:2\n")?;
    test.write_file("keys.json", r#"["a.b"]"#)?;

    let output = test.command().args(["a.adoc", "-k", "keys.json"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    // JSON on stdout, report on stderr
    let err = stderr(&output);
    assert!(err.contains("extra key: a.c"));
    assert!(!err.contains("missing key:"));
    assert!(stdout(&output).starts_with('{'));

    Ok(())
}

#[test]
fn test_check_with_unreadable_keys_file() -> Result<()> {
    let test = CliTest::with_file("a.adoc", "// a.b:1\n")?;

    let output = test
        .command()
        .args(["a.adoc", "-k", "nope.json", "-o", "tips.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error: Failed to read expected keys file: nope.json"));
    assert!(test.root().join("tips.json").exists());

    Ok(())
}

#[test]
fn test_check_with_invalid_keys_file() -> Result<()> {
    let test = CliTest::with_file("a.adoc", "// a.b:1\n")?;
    test.write_file("keys.json", r#""a.b""#)?;

    let output = test
        .command()
        .args(["a.adoc", "-k", "keys.json", "-o", "tips.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid expected keys file: keys.json"));

    Ok(())
}
