use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const FOO: &str = "src/com/app/Foo.properties";

#[test]
fn test_generates_interface() -> Result<()> {
    let test = CliTest::with_file(
        FOO,
        r#"# Greetings
greeting=Hello {0}, you have {1} items
foo.bar.baz=Plain text
typed={0,number,integer} of {1}
"#,
    )?;

    let output = test.generate("src", &[FOO])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Generating com.app.Foo...\n");
    assert_eq!(stderr(&output), "");

    let content = test.read_file("src/com/app/Foo.java")?;
    insta::with_settings!({filters => vec![
        (r"Generated by i18nsync on .+", "Generated by i18nsync on [TIMESTAMP]"),
    ]}, {
        insta::assert_snapshot!(content, @r#"
        //
        // Generated by i18nsync on [TIMESTAMP]

        package com.app;

        public interface Foo
            extends com.google.gwt.i18n.client.Messages
        {
            @Key("greeting")
            String greeting (String arg0, String arg1);

            @Key("foo.bar.baz")
            String foo_bar_baz ();

            @Key("typed")
            String typed (String arg0, String arg1);
        }
        "#);
    });

    Ok(())
}

#[test]
fn test_second_run_does_not_rewrite() -> Result<()> {
    let test = CliTest::with_file(FOO, "a=b\n")?;

    test.generate("src", &[FOO])?;
    let first = test.modified("src/com/app/Foo.java")?;

    let output = test.generate("src", &[FOO])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "");
    assert_eq!(test.modified("src/com/app/Foo.java")?, first);

    Ok(())
}

#[test]
fn test_verbose_reports_up_to_date() -> Result<()> {
    let test = CliTest::with_file(FOO, "a=b\n")?;
    test.generate("src", &[FOO])?;

    let output = test.command().args(["-v", "src", FOO]).output()?;
    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("info: Up to date: src/com/app/Foo.java"), "{err}");
    assert!(stdout(&output).contains("Processed 1 file: 0 generated, 1 up to date, 0 ignored"));

    Ok(())
}

#[test]
fn test_modified_input_regenerates() -> Result<()> {
    let test = CliTest::with_file(FOO, "a=b\n")?;
    test.generate("src", &[FOO])?;

    test.write_file(FOO, "a=b\nwelcome=Hi {0}\n")?;
    test.touch_ahead(FOO, 60)?;

    let output = test.generate("src", &[FOO])?;
    assert_eq!(stdout(&output), "Generating com.app.Foo...\n");
    assert!(
        test.read_file("src/com/app/Foo.java")?
            .contains("    String welcome (String arg0);\n")
    );

    Ok(())
}

#[test]
fn test_non_properties_file_is_ignored() -> Result<()> {
    let test = CliTest::with_file("src/com/app/Foo.txt", "a=b\n")?;

    let output = test.generate("src", &["src/com/app/Foo.txt"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        stderr(&output),
        "info: Ignoring non-properties file: src/com/app/Foo.txt  non-properties\n"
    );
    assert!(!test.exists("src/com/app/Foo.java"));

    Ok(())
}

#[test]
fn test_file_outside_root_is_ignored() -> Result<()> {
    let test = CliTest::with_file("other/Foo.properties", "a=b\n")?;
    test.write_file("src/.keep", "")?;

    let output = test.generate("src", &["other/Foo.properties"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Ignoring properties file outside root: other/Foo.properties"));
    assert!(!test.exists("other/Foo.java"));

    Ok(())
}

#[test]
fn test_sibling_directory_with_root_prefix_is_outside_root() -> Result<()> {
    let test = CliTest::with_file("src2/Foo.properties", "a=b\n")?;
    test.write_file("src/.keep", "")?;

    let output = test.generate("src", &["src2/Foo.properties"])?;
    assert!(stderr(&output).contains("outside root"));
    assert!(!test.exists("src2/Foo.java"));

    Ok(())
}

#[test]
fn test_parent_components_cannot_escape_root() -> Result<()> {
    let test = CliTest::with_file("other/Foo.properties", "a=b\n")?;
    test.write_file("src/com/app/Bar.properties", "b=c\n")?;

    let output = test.generate(
        "src",
        &["src/../other/Foo.properties", "src/../src/com/app/Bar.properties"],
    )?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains(
        "Ignoring properties file outside root: src/../other/Foo.properties"
    ));
    assert!(!test.exists("other/Foo.java"));
    assert!(stdout(&output).contains("Generating com.app.Bar..."));
    assert!(test.read_file("src/com/app/Bar.java")?.contains("package com.app;"));

    Ok(())
}

#[test]
fn test_failed_file_does_not_stop_batch() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a/First.properties", "one=1\n")?;
    test.write_file("src/a/Third.properties", "three=3\n")?;

    let output = test.generate(
        "src",
        &[
            "src/a/First.properties",
            "src/a/Missing.properties",
            "src/a/Third.properties",
        ],
    )?;

    assert_eq!(output.status.code(), Some(255));
    assert_eq!(
        stdout(&output),
        "Generating a.First...\nGenerating a.Third...\n"
    );
    let err = stderr(&output);
    assert!(
        err.starts_with("error: Error processing 'src/a/Missing.properties': "),
        "{err}"
    );
    assert!(err.trim_end().ends_with("io-error"));
    assert!(test.exists("src/a/First.java"));
    assert!(test.exists("src/a/Third.java"));

    Ok(())
}

#[test]
fn test_malformed_escape_fails_file() -> Result<()> {
    let test = CliTest::with_file(FOO, "ok=1\nbad=\\u00zz\n")?;

    let output = test.generate("src", &[FOO])?;
    assert_eq!(output.status.code(), Some(255));
    let err = stderr(&output);
    assert!(err.contains("line 2: malformed"), "{err}");
    assert!(err.contains("parse-error"));
    assert!(!test.exists("src/com/app/Foo.java"));

    Ok(())
}

#[test]
fn test_name_collision_warning() -> Result<()> {
    let test = CliTest::with_file(FOO, "foo.bar=One\nfoo_bar=Two\n")?;

    let output = test.generate("src", &[FOO])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stderr(&output),
        "warning: Keys 'foo.bar', 'foo_bar' in src/com/app/Foo.properties all map to method 'foo_bar'  name-collision\n"
    );
    let content = test.read_file("src/com/app/Foo.java")?;
    assert_eq!(content.matches("String foo_bar ();").count(), 2);

    Ok(())
}

#[test]
fn test_file_in_root_has_default_package() -> Result<()> {
    let test = CliTest::with_file("src/Root.properties", "title=Title\n")?;

    let output = test.generate("src", &["src/Root.properties"])?;
    assert_eq!(stdout(&output), "Generating Root...\n");
    let content = test.read_file("src/Root.java")?;
    assert!(!content.contains("package"));
    assert!(content.contains("public interface Root\n"));

    Ok(())
}

#[test]
fn test_absolute_paths() -> Result<()> {
    let test = CliTest::with_file(FOO, "a=b\n")?;
    let root = test.root().join("src");
    let file = test.root().join(FOO);

    let output = test
        .command()
        .arg(&root)
        .arg(&file)
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Generating com.app.Foo...\n");

    Ok(())
}

#[test]
fn test_no_arguments_prints_usage() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(255));
    assert!(stderr(&output).starts_with("Usage: i18nsync <ROOT_DIR>"));
    assert_eq!(stdout(&output), "");

    Ok(())
}

#[test]
fn test_root_without_files_prints_usage() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/.keep", "")?;

    let output = test.command().arg("src").output()?;
    assert_eq!(output.status.code(), Some(255));
    assert!(stderr(&output).starts_with("Usage: i18nsync <ROOT_DIR>"));

    Ok(())
}

#[test]
fn test_invalid_root() -> Result<()> {
    let test = CliTest::with_file(FOO, "a=b\n")?;

    let output = test.generate("missing", &[FOO])?;
    assert_eq!(output.status.code(), Some(255));
    assert_eq!(stderr(&output), "error: Invalid root directory: missing\n");
    assert!(!test.exists("src/com/app/Foo.java"));

    let output = test.generate(FOO, &[FOO])?;
    assert_eq!(output.status.code(), Some(255));
    assert!(stderr(&output).contains("Invalid root directory"));

    Ok(())
}

#[test]
fn test_unknown_flag_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["--bogus", "src", FOO]).output()?;
    assert_eq!(output.status.code(), Some(255));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("<ROOT_DIR>"));
    assert!(out.contains("--scan"));
    assert!(out.contains("--key-order"));

    Ok(())
}
