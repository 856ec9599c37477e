use modsmith::error::Error;
use modsmith::template::{copy_and_replace, substitute_content, substitute_name};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_substitute_content_replaces_bracketed_tokens() {
    let text = "namespace = <your_mod_name_here>\n# <your_long_mod_name_here>\n";
    assert_eq!(
        substitute_content(text, "foo", "Foo Mod"),
        "namespace = foo\n# Foo Mod\n"
    );
}

#[test]
fn test_substitute_name_replaces_bare_tokens() {
    assert_eq!(substitute_name("your_mod_name_here_extra", "foo", "Foo Mod"), "foo_extra");
    assert_eq!(
        substitute_name("your_long_mod_name_here.txt", "foo", "Foo Mod"),
        "Foo Mod.txt"
    );
    assert_eq!(substitute_name("plain.txt", "foo", "Foo Mod"), "plain.txt");
}

#[test]
fn test_copy_substitutes_names_and_contents() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("template");
    let destination = temp_dir.path().join("out");

    let nested = source.join("your_mod_name_here_extra");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        nested.join("your_mod_name_here_events.txt"),
        "namespace = <your_mod_name_here>\n",
    )
    .unwrap();

    copy_and_replace(&source, &destination, "foo", "Foo Mod").unwrap();

    let copied = destination.join("foo_extra").join("foo_events.txt");
    assert!(copied.is_file());
    assert_eq!(fs::read_to_string(&copied).unwrap(), "namespace = foo\n");
}

#[test]
fn test_copy_preserves_files_without_tokens() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("template");
    let destination = temp_dir.path().join("out");

    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("readme.txt"), "no tokens here { braces stay }\n").unwrap();

    copy_and_replace(&source, &destination, "foo", "Foo Mod").unwrap();

    assert_eq!(
        fs::read_to_string(destination.join("readme.txt")).unwrap(),
        "no tokens here { braces stay }\n"
    );
}

#[test]
fn test_missing_source_is_a_template_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = copy_and_replace(
        &temp_dir.path().join("missing"),
        &temp_dir.path().join("out"),
        "foo",
        "Foo Mod",
    );

    match result {
        Err(Error::TemplateError(message)) => assert!(message.contains("missing")),
        other => panic!("Expected TemplateError, got {other:?}"),
    }
}

#[test]
fn test_non_utf8_file_aborts_the_copy() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("template");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("binary.bin"), [0xff, 0xfe, 0x00, 0x01]).unwrap();

    let result =
        copy_and_replace(&source, &temp_dir.path().join("out"), "foo", "Foo Mod");
    assert!(matches!(result, Err(Error::TemplateError(_))));
}

#[test]
fn test_bundled_essentials_tree_round_trips() {
    // The tree shipped with the crate must itself copy cleanly.
    let source = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("essentials");
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("out");

    copy_and_replace(&source, &destination, "foo", "Foo Mod").unwrap();

    let events = destination.join("events").join("foo_events.txt");
    assert!(events.is_file());
    let content = fs::read_to_string(&events).unwrap();
    assert!(content.contains("namespace = foo"));
    assert!(content.contains("Foo Mod"));
    assert!(!content.contains("your_mod_name_here"));
}
