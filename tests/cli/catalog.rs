use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_invalid_json_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        "Sources/App.swift",
        r#"let s = NSLocalizedString("Hello", comment: "")"#,
    )?;
    test.write_file("Localizable.xcstrings", r#"{"strings": "#)?;

    let output = test
        .drift_command("Sources", "Localizable.xcstrings")
        .output()?;

    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("failed to parse string catalog"));

    // No drift sections once the catalog fails to load.
    let stdout = String::from_utf8(output.stdout)?;
    assert!(!stdout.contains("missing from the string catalog"));
    assert!(!stdout.contains("unused in Swift"));

    Ok(())
}

#[test]
fn test_missing_strings_field_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file("Sources/.gitkeep", "")?;
    test.write_file("Localizable.xcstrings", r#"{"foo": {}}"#)?;

    let output = test
        .drift_command("Sources", "Localizable.xcstrings")
        .output()?;

    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("\"strings\""));

    Ok(())
}

#[test]
fn test_strings_field_of_wrong_type_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file("Sources/.gitkeep", "")?;
    test.write_file("Localizable.xcstrings", r#"{"strings": "not-a-map"}"#)?;

    let output = test
        .drift_command("Sources", "Localizable.xcstrings")
        .output()?;

    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("\"strings\""));

    Ok(())
}

#[test]
fn test_missing_catalog_file_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file("Sources/.gitkeep", "")?;

    let output = test
        .drift_command("Sources", "Localizable.xcstrings")
        .output()?;

    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("failed to read string catalog"));

    Ok(())
}
