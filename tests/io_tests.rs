//! Integration tests for the publication, YAML and save helpers.

use publication_io::{ErrorCode, load_publication, load_yaml_config, save_text_to_file};
use publication_io::io::load_publication_from;
use serde_yaml::Value;
use std::fs;
use tempfile::TempDir;

const SEPARATOR_LINE: &str = "# ==================================================";

#[test]
fn fixed_publication_path_missing_is_not_found() {
    // The crate root has no data/publication.md
    let err = load_publication().unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert!(err.to_string().contains("data/publication.md"));
}

#[test]
fn publication_missing_is_not_found() {
    let temp = TempDir::new().unwrap();
    let err = load_publication_from(temp.path().join("nope.md")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[test]
fn publication_read_through_relative_components() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(temp.path().join("data/publication.md"), "# Title\n").unwrap();

    let path = temp.path().join("data/../data/./publication.md");
    assert_eq!(load_publication_from(path).unwrap(), "# Title\n");
}

#[test]
fn yaml_valid_mapping() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "a: 1\nb: two").unwrap();

    let mapping = load_yaml_config(&path).unwrap();

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.get("a").and_then(Value::as_i64), Some(1));
    assert_eq!(mapping.get("b"), Some(&Value::String("two".to_string())));
}

#[test]
fn yaml_accepts_str_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "llm:\n  model: gpt-4o\n  max_tokens: 512\ntags: [a, b]\n").unwrap();

    let mapping = load_yaml_config(path.to_str().unwrap()).unwrap();

    let llm = mapping.get("llm").and_then(Value::as_mapping).unwrap();
    assert_eq!(llm.get("model").and_then(Value::as_str), Some("gpt-4o"));
    assert_eq!(llm.get("max_tokens").and_then(Value::as_u64), Some(512));
    assert_eq!(
        mapping.get("tags").and_then(Value::as_sequence).map(Vec::len),
        Some(2)
    );
}

#[test]
fn yaml_invalid_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.yaml");
    fs::write(&path, "a: [1, 2\nb: : :\n").unwrap();

    let err = load_yaml_config(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ParseError);
}

#[test]
fn yaml_missing_is_not_found() {
    let temp = TempDir::new().unwrap();
    let err = load_yaml_config(temp.path().join("missing.yaml")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[test]
fn save_with_header_creates_nested_dirs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("outputs/run-1/summary.md");

    save_text_to_file("hello", &path, Some("Title")).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(&format!("Title\n\n{SEPARATOR_LINE}\n\nhello")));
    assert_eq!(content, format!("Title\n\n{SEPARATOR_LINE}\n\nhello"));
}

#[test]
fn save_without_header_writes_raw_text() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("raw.txt");

    save_text_to_file("line one\nline two\n", &path, None).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two\n");
}

#[test]
fn save_overwrites_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.md");

    save_text_to_file("first version with more text", &path, Some("Old")).unwrap();
    save_text_to_file("second", &path, None).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "second");
}

#[test]
fn save_under_a_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not-a-dir");
    fs::write(&blocker, "x").unwrap();

    let err = save_text_to_file("hello", blocker.join("out.md"), None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::IoError);
}

#[test]
fn saved_file_round_trips_through_publication_loader() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pub.md");

    save_text_to_file("body", &path, Some("Header")).unwrap();

    let loaded = load_publication_from(&path).unwrap();
    assert!(loaded.ends_with("\n\nbody"));
}

#[cfg(unix)]
#[test]
fn parent_component_follows_symlink_target() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("real/inner")).unwrap();
    std::os::unix::fs::symlink(root.join("real/inner"), root.join("link")).unwrap();
    fs::write(root.join("real/pub.md"), "through-symlink").unwrap();
    fs::write(root.join("pub.md"), "beside-link").unwrap();

    // link/.. is real/, not the directory holding the link
    let loaded = load_publication_from(root.join("link/../pub.md")).unwrap();
    assert_eq!(loaded, "through-symlink");

    save_text_to_file("saved", root.join("link/../out.md"), None).unwrap();
    assert_eq!(fs::read_to_string(root.join("real/out.md")).unwrap(), "saved");
    assert!(!root.join("out.md").exists());
}
