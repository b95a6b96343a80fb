//! Integration tests for kitbag
//!
//! These tests exercise the public surface against a real temporary
//! filesystem: text and JSON round-trips, backup rotation, merge-then-save
//! configuration flows, and the pure helpers working together.

use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

use kitbag::args::OptionsSchema;
use kitbag::json::SaveOptions;
use kitbag::size::{SizeBase, SizeOptions};

/// Helper function to create a temporary directory for testing
fn create_test_directory() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a file with specified content
fn create_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(path, content).expect("Failed to write file");
}

#[test]
fn test_text_file_lifecycle() {
    let dir = create_test_directory();
    let file = dir.path().join("notes").join("todo.txt");

    // Write into a directory that doesn't exist yet.
    kitbag::fs::save_file(&file, "first line\n").expect("Failed to save file");
    assert!(kitbag::fs::file_exists(&file));
    assert!(kitbag::fs::directory_exists(&dir.path().join("notes")));
    assert_eq!(kitbag::fs::load_file(&file), "first line\n");

    kitbag::fs::remove_file(&file);
    assert!(!kitbag::fs::file_exists(&file));
    assert_eq!(kitbag::fs::load_file(&file), "");
}

#[test]
fn test_json_round_trip_preserves_structure() {
    let dir = create_test_directory();
    let file = dir.path().join("state.json");
    let value = json!({
        "profile": {"name": "kitbag", "tags": ["a", "b"]},
        "limits": {"size": 1024, "ratio": 0.25},
        "enabled": true,
        "note": null
    });

    kitbag::save_to_json_file(&value, &file, &SaveOptions::default()).expect("Failed to save");
    assert_eq!(kitbag::load_from_json_file(&file), value);
}

#[test]
fn test_json_backup_rotation() {
    let dir = create_test_directory();
    let file = dir.path().join("config.json");
    let opts = SaveOptions { backup: true };

    kitbag::save_to_json_file(&json!({"rev": 1}), &file, &opts).expect("save rev 1");
    kitbag::save_to_json_file(&json!({"rev": 2}), &file, &opts).expect("save rev 2");
    kitbag::save_to_json_file(&json!({"rev": 3}), &file, &opts).expect("save rev 3");

    // Only one backup generation is kept.
    assert_eq!(kitbag::load_from_json_file(&file), json!({"rev": 3}));
    assert_eq!(
        kitbag::load_from_json_file(&dir.path().join("config.json.bak")),
        json!({"rev": 2})
    );
    assert!(!kitbag::fs::file_exists(&dir.path().join("config.json.bak.bak")));
}

#[test]
fn test_load_merge_save_configuration_flow() {
    let dir = create_test_directory();
    let file = dir.path().join("app").join("settings.json");

    create_file(
        &file,
        r#"{"log": {"level": "info", "file": "app.log"}, "retries": 3}"#,
    );

    let mut settings = kitbag::load_from_json_file(&file);
    let overrides = json!({"log": {"level": "debug"}, "cache": {"size": "10KB"}});
    kitbag::update_object(&mut settings, &overrides, false);

    assert_eq!(
        settings,
        json!({
            "log": {"level": "debug", "file": "app.log"},
            "retries": 3,
            "cache": {"size": "10KB"}
        })
    );

    // Persist and read back the merged document.
    kitbag::save_to_json_file(&settings, &file, &SaveOptions::default()).expect("Failed to save");
    let reloaded = kitbag::load_from_json_file(&file);
    assert_eq!(reloaded, settings);

    // The merged size value parses with the size helper.
    let cache_size = reloaded["cache"]["size"].as_str().expect("size string");
    assert_eq!(kitbag::parse_size(cache_size), 10240.0);
}

#[test]
fn test_missing_json_file_yields_usable_empty_object() {
    let dir = create_test_directory();
    let loaded = kitbag::load_from_json_file(&dir.path().join("nope.json"));

    assert!(kitbag::is_obj_empty(&loaded));

    // The empty default is a valid merge target.
    let mut base = loaded;
    kitbag::update_object(&mut base, &json!({"fresh": true}), false);
    assert_eq!(base, json!({"fresh": true}));
}

#[test]
fn test_argument_parsing_end_to_end() {
    let schema = OptionsSchema::new()
        .integer("threads")
        .float("min-ratio")
        .array("skip-dirs");

    let args: Vec<String> = [
        "input.json",
        "--threads=4",
        "--min-ratio=0.5",
        "--skip-dirs=.git,target,node_modules",
        "--dry-run",
        "output.json",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    let parsed = kitbag::parse_options(&args, &schema);

    assert_eq!(parsed.get_int("threads"), Some(4));
    assert_eq!(parsed.get_float("min_ratio"), Some(0.5));
    assert_eq!(
        parsed.get_list("skip_dirs"),
        Some(
            &[
                ".git".to_string(),
                "target".to_string(),
                "node_modules".to_string()
            ][..]
        )
    );
    assert!(parsed.is_set("dry_run"));
    assert_eq!(parsed.argv, vec!["input.json", "output.json"]);
}

#[test]
fn test_size_parsing_matrix() {
    // Default (binary) units.
    assert_eq!(kitbag::parse_size("10KB"), 10240.0);
    assert_eq!(kitbag::parse_size("1.5MB"), 1_572_864.0);

    // Decimal units.
    let base10 = SizeOptions {
        base: SizeBase::Base10,
        ..SizeOptions::default()
    };
    assert_eq!(kitbag::parse_size_with("10KB", &base10), 10000.0);

    // Bit units override the base.
    let bits = SizeOptions {
        bits: true,
        ..SizeOptions::default()
    };
    assert_eq!(kitbag::parse_size_with("5bit", &bits), 5.0);

    // Failure sentinel.
    assert!(kitbag::parse_size("").is_nan());
    assert!(kitbag::parse_size("abcKB").is_nan());
}

#[test]
fn test_string_and_digest_helpers_compose() {
    let label = kitbag::strings::pad_right("id", 5, '-');
    assert_eq!(label, "id---");
    assert_eq!(kitbag::strings::pad_left("7", 3, '0'), "007");

    let long_path = "/very/long/path/to/some/deeply/nested/file/with/a/long/name.txt";
    let shortened = kitbag::strings::ellipsis_middle(long_path, 30, 12, 8);
    assert_eq!(shortened, "/very/long/p...name.txt");

    // Digest of the shortened label is stable across calls.
    assert_eq!(
        kitbag::hash::md5_hash(&shortened),
        kitbag::hash::md5_hash(&shortened)
    );
    assert_eq!(kitbag::hash::sha512_hash("token", "pepper").len(), 128);
}

#[test]
fn test_url_helpers() {
    let endpoint = "https://api.example.com:8443/v1/items?page=2";

    assert!(kitbag::url::is_http_url(endpoint));
    assert_eq!(
        kitbag::url::url_get_host(endpoint),
        "https://api.example.com:8443"
    );
    assert_eq!(kitbag::url::url_get_hostname(endpoint), "api.example.com");

    assert!(!kitbag::url::is_http_url("file:///tmp/x"));
    assert_eq!(kitbag::url::url_get_host("not a url"), "");
}

#[test]
fn test_user_home_exists_on_test_machine() {
    // CI and dev machines always have a home directory.
    if let Some(home) = kitbag::user_home() {
        assert!(kitbag::fs::directory_exists(&home));
    }
}
