use novelseed_core::store::dir_store::{CONTENT_DIR, MANIFEST_FILE};
use novelseed_core::{ConvertError, ConvertOptions, ConvertService};
use std::fs;
use std::path::Path;

const OUTLINE_JSON: &str = r#"{
    "label": "Harbor Lights",
    "note": "A smuggling story.",
    "children": [
        {
            "label": "Cast",
            "icons": ["full-1"],
            "children": [
                {"label": "Alice", "note": "captain"},
                {"label": "Bob"}
            ]
        },
        {
            "label": "Act I",
            "children": [
                {
                    "label": "Ch1",
                    "children": [
                        {"label": "S1"},
                        {"label": "S2"}
                    ]
                }
            ]
        }
    ]
}"#;

fn write_outline(dir: &Path) -> std::path::PathBuf {
    let source = dir.join("harbor-lights.json");
    fs::write(&source, OUTLINE_JSON).expect("outline fixture");
    source
}

fn manifest(output: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(output.join(MANIFEST_FILE)).expect("manifest read"))
        .expect("manifest json")
}

#[test]
fn converts_outline_file_into_project_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = write_outline(dir.path());
    let output = dir.path().join("harbor-lights.novel");

    let outcome = ConvertService::new(ConvertOptions::default())
        .convert_file(&source, &output)
        .expect("conversion should succeed");

    assert_eq!(outcome.output_path, output);
    assert_eq!(outcome.backup_path, None);
    assert_eq!(outcome.chapter_count, 1);
    assert_eq!(outcome.scene_count, 2);
    assert_eq!(outcome.entity_count, 2);

    let manifest = manifest(&output);
    assert_eq!(manifest["title"], "Harbor Lights");
    assert_eq!(manifest["description"], "A smuggling story.");
    let titles: Vec<&str> = manifest["items"]
        .as_array()
        .expect("items")
        .iter()
        .map(|item| item["title"].as_str().expect("title"))
        .collect();
    assert_eq!(
        titles,
        vec![
            "Act I",
            "Ch1",
            "S1",
            "S2",
            "Main characters",
            "Alice",
            "Bob",
            "Minor characters",
            "Locations",
            "Items",
        ]
    );

    // One content file per item; the four groups get none.
    let content_files = fs::read_dir(output.join(CONTENT_DIR))
        .expect("content dir")
        .count();
    assert_eq!(content_files, 6);
}

#[test]
fn second_run_backs_up_the_first_project_intact() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = write_outline(dir.path());
    let output = dir.path().join("harbor-lights.novel");
    let service = ConvertService::new(ConvertOptions::default());

    service
        .convert_file(&source, &output)
        .expect("first conversion");
    let first_manifest = fs::read_to_string(output.join(MANIFEST_FILE)).expect("first manifest");

    let outcome = service
        .convert_file(&source, &output)
        .expect("second conversion");
    let backup = outcome.backup_path.expect("backup path");

    // The prior project moved wholesale and kept its content.
    assert_eq!(
        fs::read_to_string(backup.join(MANIFEST_FILE)).expect("backup manifest"),
        first_manifest
    );
    // The output path holds a fresh project again.
    assert!(output.join(MANIFEST_FILE).exists());
    assert!(output.join(CONTENT_DIR).is_dir());
}

#[test]
fn missing_source_is_an_input_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = ConvertService::new(ConvertOptions::default())
        .convert_file(&dir.path().join("absent.json"), &dir.path().join("out"))
        .expect_err("missing source must fail");
    assert!(matches!(err, ConvertError::Input { .. }));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn invalid_source_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = dir.path().join("broken.json");
    fs::write(&source, "{not json").expect("fixture");

    let err = ConvertService::new(ConvertOptions::default())
        .convert_file(&source, &dir.path().join("out"))
        .expect_err("invalid source must fail");
    assert!(matches!(err, ConvertError::Parse { .. }));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn suppressed_parts_emit_chapters_at_top_level() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = write_outline(dir.path());
    let output = dir.path().join("flat.novel");
    let options = ConvertOptions {
        suppress_normal_parts: true,
        ..ConvertOptions::default()
    };

    ConvertService::new(options)
        .convert_file(&source, &output)
        .expect("conversion");

    let manifest = manifest(&output);
    let items = manifest["items"].as_array().expect("items");
    assert!(!items.iter().any(|item| item["title"] == "Act I"));
    let chapter = items
        .iter()
        .find(|item| item["title"] == "Ch1")
        .expect("chapter entry");
    assert!(chapter.get("parent").is_none() || chapter["parent"].is_null());
}
