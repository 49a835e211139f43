//! End-to-end tests for `devshelf config` commands.

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let dir = temp_config_dir();
    let output = run(&["config", "show"], dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Page Size: 6"));
    assert!(stdout.contains("Persist Submissions: false"));
}

#[test]
fn test_config_show_json_schema() {
    let dir = temp_config_dir();
    let result = run_json(&["config", "show", "--json"], dir.path());

    assert!(result["storage"]["data_file"]
        .as_str()
        .unwrap()
        .ends_with("storage.json"));
    assert_eq!(result["browse"]["page_size"], 6);
    assert_eq!(result["browse"]["trending_limit"], 6);
    assert_eq!(result["browse"]["search_debounce_ms"], 300);
    assert_eq!(result["catalog"]["persist_submissions"], false);
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_page_size_changes_listing() {
    let dir = temp_config_dir();
    let output = run(&["config", "set", "--page-size", "3"], dir.path());
    assert_eq!(output.status.code(), Some(0));

    let result = run_json(&["config", "show", "--json"], dir.path());
    assert_eq!(result["browse"]["page_size"], 3);

    let listing = run_json(&["list", "--json"], dir.path());
    assert_eq!(listing["totalPages"], 3);
    assert_eq!(json_ids(&listing), ["1", "2", "3"]);
}

#[test]
fn test_config_set_trending_limit() {
    let dir = temp_config_dir();
    run(&["config", "set", "--trending-limit", "2"], dir.path());
    let result = run_json(&["trending", "--json"], dir.path());
    assert_eq!(json_ids(&result), ["6", "4"]);
}

#[test]
fn test_config_set_data_file() {
    let dir = temp_config_dir();
    let data_file = dir.path().join("elsewhere").join("prefs.json");
    let data_file_str = data_file.to_str().unwrap();

    let output = run(&["config", "set", "--data-file", data_file_str], dir.path());
    assert_eq!(output.status.code(), Some(0));

    run_json(&["like", "4", "--json"], dir.path());
    assert!(data_file.exists());
}

#[test]
fn test_config_set_requires_option() {
    let dir = temp_config_dir();
    let output = run(&["config", "set"], dir.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_rejects_zero_page_size() {
    let dir = temp_config_dir();
    let output = run(&["config", "set", "--page-size", "0"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_invalid_config_file_reports_io_error() {
    let dir = temp_config_dir();
    std::fs::write(dir.path().join("config.toml"), "[browse]\npage_size = 0\n").unwrap();
    let output = run(&["list"], dir.path());
    assert_eq!(output.status.code(), Some(2));
}
