//! Integration tests for the waypath CLI
//!
//! These tests run the waypath binary against edge-list files in a
//! temporary directory and check its output and exit codes.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const TRIANGLE: &str = "A\tB\t10\nB\tC\t5\nA\tC\t20\n";

/// Get a Command for waypath, isolated from any ambient configuration
fn waypath(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("waypath");
    cmd.current_dir(dir)
        .env_remove("WAYPATH_CONFIG")
        .env_remove("WAYPATH_GRAPH")
        .env_remove("WAYPATH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Temp directory holding `cities.txt` with the given contents
fn workspace_with(edges: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cities.txt"), edges).unwrap();
    dir
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    waypath(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: waypath"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("neighbors"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    waypath(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("waypath"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .args(["--format", "yaml", "graph"])
        .assert()
        .code(2);
}

// ============================================================================
// Graph listing
// ============================================================================

#[test]
fn test_graph_listing() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "From A:\n  To C, Distance: 20km\n  To B, Distance: 10km\n",
        ))
        .stdout(predicate::str::contains("From C:\n  No outgoing edges.\n"));
}

#[test]
fn test_graph_json() {
    let dir = workspace_with(TRIANGLE);
    let output = waypath(dir.path())
        .args(["--format", "json", "graph"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let locations = json["locations"].as_array().unwrap();
    assert_eq!(locations.len(), 3);
    assert_eq!(locations[0]["name"], "A");
    assert_eq!(locations[0]["roads"][0]["to"], "C");
    assert_eq!(locations[0]["roads"][0]["distance"], 20);
}

#[test]
fn test_graph_records() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .args(["--format", "records", "graph"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H waypath=1 records=1 mode=graph locations=3 edges=3\n",
        ))
        .stdout(predicate::str::contains("N 2 \"C\""))
        .stdout(predicate::str::contains("E \"B\" \"C\" 5"));
}

#[test]
fn test_graph_file_override_flag() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("roads.tsv"), "Jenin\tNablus\t42\n").unwrap();
    waypath(dir.path())
        .args(["--graph", "roads.tsv", "graph"])
        .assert()
        .success()
        .stdout(predicate::str::contains("To Nablus, Distance: 42km"));
}

#[test]
fn test_config_file_sets_unit() {
    let dir = workspace_with(TRIANGLE);
    fs::write(dir.path().join("waypath.toml"), "distance_unit = \"mi\"\n").unwrap();
    waypath(dir.path())
        .arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains("To B, Distance: 10mi"));
}

#[test]
fn test_missing_graph_file_exit_code_1() {
    let dir = tempdir().unwrap();
    waypath(dir.path())
        .arg("graph")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to open graph file"));
}

#[test]
fn test_malformed_line_exit_code_3() {
    let dir = workspace_with("A\tB\t10\nA\tB\tfar\n");
    waypath(dir.path())
        .arg("graph")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed edge on line 2"));
}

#[test]
fn test_empty_graph_file_exit_code_3() {
    let dir = workspace_with("\n\n");
    waypath(dir.path())
        .arg("graph")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no locations loaded"));
}

// ============================================================================
// Neighbors
// ============================================================================

#[test]
fn test_neighbors_listing() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .args(["neighbors", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A (index 0) direct neighbors:"))
        .stdout(predicate::str::contains("C (20km)\nB (10km)\n"));
}

#[test]
fn test_neighbors_of_sink() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .args(["neighbors", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No outgoing edges."));
}

#[test]
fn test_neighbors_unknown_location_exit_code_3() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .args(["neighbors", "Atlantis"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("location not found: Atlantis"));
}

#[test]
fn test_location_names_are_case_sensitive() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .args(["neighbors", "a"])
        .assert()
        .code(3);
}

// ============================================================================
// Path
// ============================================================================

#[test]
fn test_path_reports_both_searches() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .args(["path", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Shortest path from A to C using BFS:\nC <- A\nDistance: 20km\n",
        ))
        .stdout(predicate::str::contains(
            "Shortest path from A to C using Dijkstra:\nC <- B <- A\nDistance: 15km\n",
        ));
}

#[test]
fn test_path_single_algorithm() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .args(["path", "A", "C", "--algorithm", "dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("using Dijkstra"))
        .stdout(predicate::str::contains("using BFS").not());
}

#[test]
fn test_path_unreachable() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .args(["path", "C", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from C to A using BFS."))
        .stdout(predicate::str::contains(
            "No path found from C to A using Dijkstra.",
        ));
}

#[test]
fn test_path_json() {
    let dir = workspace_with(TRIANGLE);
    let output = waypath(dir.path())
        .args(["--format", "json", "path", "A", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["algorithm"], "bfs");
    assert_eq!(reports[0]["distance"], 20);
    assert_eq!(reports[1]["algorithm"], "dijkstra");
    assert_eq!(reports[1]["distance"], 15);
    assert_eq!(reports[1]["path"], serde_json::json!(["A", "B", "C"]));
}

#[test]
fn test_path_json_unreachable_omits_distance() {
    let dir = workspace_with(TRIANGLE);
    let output = waypath(dir.path())
        .args(["--format", "json", "path", "C", "A", "-a", "bfs"])
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["found"], false);
    assert!(json[0].get("distance").is_none());
}

#[test]
fn test_path_records() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .args(["--format", "records", "path", "A", "C", "-a", "dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H waypath=1 records=1 mode=path algorithm=dijkstra from=\"A\" to=\"C\" found=true distance=15 hops=2\n",
        ))
        .stdout(predicate::str::contains("E \"B\" \"C\" 5"));
}

#[test]
fn test_path_unknown_destination_json_error() {
    let dir = workspace_with(TRIANGLE);
    let output = waypath(dir.path())
        .args(["--format", "json", "path", "A", "Nowhere"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "location_not_found");
}

#[test]
fn test_usage_error_json_envelope() {
    let dir = workspace_with(TRIANGLE);
    let output = waypath(dir.path())
        .args(["--format", "json", "path", "A"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
}

#[test]
fn test_inline_json_format_parse_failure_envelope() {
    let dir = workspace_with(TRIANGLE);
    let output = waypath(dir.path())
        .args(["--format=json", "neighbors", "A", "B"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_parse_failure_without_json_is_plain_text() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .args(["path", "A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"error\"").not());
}

#[test]
fn test_path_save_appends() {
    let dir = workspace_with(TRIANGLE);
    for _ in 0..2 {
        waypath(dir.path())
            .args(["path", "A", "C", "--save"])
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Saved results to shortest_distance.txt",
            ));
    }

    let saved = fs::read_to_string(dir.path().join("shortest_distance.txt")).unwrap();
    let once = "Shortest path from A to C using BFS:\nC <- A\nDistance: 20km\n\
                Shortest path from A to C using Dijkstra:\nC <- B <- A\nDistance: 15km\n";
    assert_eq!(saved, format!("{once}{once}"));
}

#[test]
fn test_path_save_to_custom_results_file() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .args(["--quiet", "--results", "out.txt", "path", "A", "B", "--save"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let saved = fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert!(saved.contains("Shortest path from A to B using BFS:\nB <- A\nDistance: 10km\n"));
}

#[test]
fn test_path_save_with_single_algorithm_is_usage_error() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .args(["path", "A", "C", "--save", "--algorithm", "bfs"])
        .assert()
        .code(2);
    assert!(!dir.path().join("shortest_distance.txt").exists());
}

// ============================================================================
// Init
// ============================================================================

#[test]
fn test_init_writes_resolved_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("roads.tsv"), "Jenin\tNablus\t42\n").unwrap();

    waypath(dir.path())
        .args(["--graph", "roads.tsv", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Wrote "))
        .stdout(predicate::str::contains("waypath.toml"));

    let written = fs::read_to_string(dir.path().join("waypath.toml")).unwrap();
    assert!(written.contains("graph_file = \"roads.tsv\""));

    // later runs pick the graph up without the flag
    waypath(dir.path())
        .arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains("To Nablus, Distance: 42km"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("waypath.toml"), "distance_unit = \"mi\"\n").unwrap();

    waypath(dir.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(
        fs::read_to_string(dir.path().join("waypath.toml")).unwrap(),
        "distance_unit = \"mi\"\n"
    );
}

#[test]
fn test_init_force_keeps_loaded_settings() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("waypath.toml"), "distance_unit = \"mi\"\n").unwrap();

    waypath(dir.path())
        .args(["--results", "log.txt", "--format", "json", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""));

    let written = fs::read_to_string(dir.path().join("waypath.toml")).unwrap();
    assert!(written.contains("distance_unit = \"mi\""));
    assert!(written.contains("results_file = \"log.txt\""));
}

// ============================================================================
// Interactive menu
// ============================================================================

#[test]
fn test_menu_session_over_stdin() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .write_stdin("1\n2\nA\n3\nC\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1-Load locations"))
        .stdout(predicate::str::contains("Location A has index 0"))
        .stdout(predicate::str::contains("C <- B <- A"))
        .stdout(predicate::str::contains("Exiting program."));

    let saved = fs::read_to_string(dir.path().join("shortest_distance.txt")).unwrap();
    assert!(saved.contains("using BFS"));
    assert!(saved.contains("using Dijkstra"));
}

#[test]
fn test_menu_end_of_input_does_not_save() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .arg("menu")
        .write_stdin("1\n2\nA\n3\nC\n")
        .assert()
        .success();
    assert!(!dir.path().join("shortest_distance.txt").exists());
}

#[test]
fn test_menu_rejects_json_format() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .args(["--format", "json", "menu"])
        .write_stdin("5\n")
        .assert()
        .code(2);
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_log_level_debug_emits_to_stderr() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .args(["--log-level", "debug", "graph"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_logging_is_quiet() {
    let dir = workspace_with(TRIANGLE);
    waypath(dir.path())
        .arg("graph")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
