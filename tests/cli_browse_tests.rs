//! End-to-end tests for `devshelf list`, `show`, `featured`, `trending`, and category commands.

mod fixtures;
use fixtures::*;

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_first_page() {
    let dir = temp_config_dir();
    let result = run_json(&["list", "--json"], dir.path());

    assert_eq!(result["page"], 1);
    assert_eq!(result["totalPages"], 2);
    assert_eq!(result["totalItems"], 8);
    assert_eq!(json_ids(&result), ["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_list_second_page() {
    let dir = temp_config_dir();
    let result = run_json(&["list", "--page", "2", "--json"], dir.path());
    assert_eq!(json_ids(&result), ["7", "8"]);
}

#[test]
fn test_list_sort_by_likes() {
    let dir = temp_config_dir();
    let result = run_json(&["list", "--sort", "likes", "--json"], dir.path());

    let tools = result["tools"].as_array().unwrap();
    assert_eq!(tools[0]["id"], "6");
    assert_eq!(tools[0]["likes"], 937);
    assert_eq!(result["filters"]["sortBy"], "likes");
}

#[test]
fn test_list_category_slug() {
    let dir = temp_config_dir();
    let result = run_json(&["list", "--category", "react-tools", "--json"], dir.path());
    assert_eq!(json_ids(&result), ["1"]);
    assert_eq!(result["filters"]["category"], "React Tools");
}

#[test]
fn test_list_unknown_category_is_empty() {
    let dir = temp_config_dir();
    let result = run_json(&["list", "--category", "Games", "--json"], dir.path());
    assert_eq!(result["totalItems"], 0);
    assert_eq!(result["totalPages"], 0);
}

#[test]
fn test_list_search() {
    let dir = temp_config_dir();
    let result = run_json(&["list", "--search", "REACT", "--json"], dir.path());
    assert_eq!(json_ids(&result), ["1", "4", "7"]);
}

#[test]
fn test_list_human_readable() {
    let dir = temp_config_dir();
    let output = run(&["list"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("page 1 of 2"));
    assert!(stdout.contains("React Query"));
    assert!(!stdout.contains("Turborepo"));
}

#[test]
fn test_list_invalid_sort() {
    let dir = temp_config_dir();
    let output = run(&["list", "--sort", "rating"], dir.path());
    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_list_page_zero_rejected() {
    let dir = temp_config_dir();
    let output = run(&["list", "--page", "0"], dir.path());
    assert_eq!(output.status.code(), Some(1));
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_show_tool_json() {
    let dir = temp_config_dir();
    let result = run_json(&["show", "1", "--json"], dir.path());

    assert_eq!(result["name"], "React Query");
    assert_eq!(result["createdAt"], "2023-01-15");
    assert_eq!(result["liked"], false);
    assert_eq!(result["screenshots"].as_array().unwrap().len(), 2);
}

#[test]
fn test_show_tool_human_readable() {
    let dir = temp_config_dir();
    let output = run(&["show", "3"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("JSONPlaceholder"));
    assert!(stdout.contains("https://jsonplaceholder.typicode.com"));
}

#[test]
fn test_show_unknown_tool() {
    let dir = temp_config_dir();
    let output = run(&["show", "999"], dir.path());

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
}

// ============================================================================
// Featured / Trending / Category Tests
// ============================================================================

#[test]
fn test_featured() {
    let dir = temp_config_dir();
    let result = run_json(&["featured", "--json"], dir.path());
    assert_eq!(json_ids(&result), ["1", "2", "4", "8"]);
    assert_eq!(result["count"], 4);
}

#[test]
fn test_trending_by_likes() {
    let dir = temp_config_dir();
    let result = run_json(&["trending", "--json"], dir.path());
    assert_eq!(json_ids(&result), ["6", "4", "1", "5", "3", "8"]);
}

#[test]
fn test_trending_by_score() {
    let dir = temp_config_dir();
    let result = run_json(&["trending", "--by-score", "--json"], dir.path());
    assert_eq!(json_ids(&result), ["6", "4", "3", "1", "5", "8", "2", "7"]);
}

#[test]
fn test_categories_overview() {
    let dir = temp_config_dir();
    let result = run_json(&["categories", "--json"], dir.path());

    let categories = result["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 8);
    assert_eq!(categories[0]["category"], "React Tools");
    assert_eq!(categories[0]["count"], 1);
    assert_eq!(categories[0]["preview"][0], "React Query");
}

#[test]
fn test_category_command() {
    let dir = temp_config_dir();
    let result = run_json(&["category", "ui-kits", "--json"], dir.path());
    assert_eq!(json_ids(&result), ["4"]);
}

#[test]
fn test_category_command_unknown() {
    let dir = temp_config_dir();
    let output = run(&["category", "Games"], dir.path());
    assert_ne!(output.status.code(), Some(0));
}
