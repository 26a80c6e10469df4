//! Integration tests for hyperion


use assert_cmd::Command;
use harness::{TestTree, run_hyperion};
use predicates::prelude::*;

#[test]
fn test_folders_only_by_default() {
    let tree = TestTree::new();
    tree.add_file("main.rs", "fn main() {}");
    tree.add_file("src/lib.rs", "pub mod foo;");

    let (stdout, _stderr, success) = run_hyperion(tree.path(), &[]);
    assert!(success, "hyperion should succeed");
    assert!(stdout.starts_with(".\n"), "root line first: {}", stdout);
    assert!(stdout.contains("└── src"), "should show src: {}", stdout);
    assert!(!stdout.contains("main.rs"), "files hidden without --show-files");
}

#[test]
fn test_show_files() {
    let tree = TestTree::new();
    tree.add_file("main.rs", "fn main() {}");
    tree.add_file("src/lib.rs", "pub mod foo;");

    let (stdout, _stderr, success) = run_hyperion(tree.path(), &["--show-files"]);
    assert!(success);
    assert!(stdout.contains("├── src"), "{}", stdout);
    assert!(stdout.contains("│   └── lib.rs"), "{}", stdout);
    assert!(stdout.contains("└── main.rs"), "{}", stdout);
}

#[test]
fn test_node_modules_excluded_by_default() {
    let tree = TestTree::new();
    tree.add_file("node_modules/pkg/index.js", "module.exports = {}");
    tree.add_file("src/app.js", "console.log(1)");

    let (stdout, _stderr, success) = run_hyperion(tree.path(), &["--show-files"]);
    assert!(success);
    assert!(stdout.contains("app.js"));
    assert!(!stdout.contains("node_modules"), "{}", stdout);
    assert!(!stdout.contains("index.js"));
}

#[test]
fn test_exclude_folders_overrides_default() {
    let tree = TestTree::new();
    tree.add_file("node_modules/index.js", "x");
    tree.add_file("bin/tool", "x");

    let (stdout, _stderr, success) =
        run_hyperion(tree.path(), &["--exclude-folders", "bin", "--show-files"]);
    assert!(success);
    assert!(stdout.contains("node_modules"), "{}", stdout);
    assert!(!stdout.contains("bin"), "{}", stdout);
}

#[test]
fn test_exclude_files_and_names() {
    let tree = TestTree::new();
    tree.add_file("app.exe", "binary");
    tree.add_file("lib.DLL", "binary");
    tree.add_file("README.md", "docs");
    tree.add_file("notes.txt", "notes");

    let (stdout, _stderr, success) = run_hyperion(
        tree.path(),
        &[
            "--show-files",
            "--exclude-files",
            ".exe,.dll",
            "--exclude-names",
            "README.md",
        ],
    );
    assert!(success);
    assert!(stdout.contains("notes.txt"));
    assert!(!stdout.contains("app.exe"));
    assert!(!stdout.contains("lib.DLL"));
    assert!(!stdout.contains("README.md"));
}

#[test]
fn test_max_depth() {
    let tree = TestTree::new();
    tree.add_file("top.rs", "fn top() {}");
    tree.add_file("level1/mid.rs", "fn mid() {}");
    tree.add_file("level1/level2/deep.rs", "fn deep() {}");

    let (stdout, _stderr, success) =
        run_hyperion(tree.path(), &["--show-files", "--max-depth", "0"]);
    assert!(success);
    assert!(stdout.contains("top.rs"));
    assert!(stdout.contains("level1"));
    assert!(!stdout.contains("mid.rs"), "{}", stdout);
    assert!(!stdout.contains("level2"), "{}", stdout);
}

#[test]
fn test_ascii_compact_mode() {
    let tree = TestTree::new();
    tree.add_file("a/b.txt", "b");
    tree.add_file("c.txt", "c");

    let (stdout, _stderr, success) = run_hyperion(
        tree.path(),
        &["--show-files", "--unicode=false", "--compact"],
    );
    assert!(success);
    assert_eq!(stdout, ".\n+a\n|`b.txt\n`c.txt\n");
}

#[test]
fn test_show_stats() {
    let tree = TestTree::new();
    tree.add_sized_file("a.txt", 5);
    tree.add_sized_file("sub/b.txt", 10);
    tree.add_sized_file("node_modules/ignored.txt", 99);

    let (stdout, _stderr, success) =
        run_hyperion(tree.path(), &["--show-files", "--show-stats"]);
    assert!(success);
    assert!(stdout.contains("📊 Statistics:"));
    assert!(stdout.contains("  - Total Directories: 1\n"), "{}", stdout);
    assert!(stdout.contains("  - Total Files: 2\n"), "{}", stdout);
    assert!(stdout.contains("  - Total Size: 15 B\n"), "{}", stdout);
    assert!(stdout.contains("🗂️ File Type Distribution:"));
    assert!(stdout.contains(".txt"));
    assert!(stdout.contains("100.0%"));
}

#[test]
fn test_stat_table_lists_relative_paths() {
    let tree = TestTree::new();
    tree.add_sized_file("small.txt", 10);
    tree.add_sized_file("deep/big.bin", 4096);
    tree.add_sized_file("deep/medium.md", 2048);

    let (stdout, _stderr, success) = run_hyperion(
        tree.path(),
        &["--show-files", "--stat-table", "--stats-count", "2"],
    );
    assert!(success);
    assert!(stdout.contains("📈 Largest Files:"));
    assert!(stdout.contains("4.0 KB   deep/big.bin"), "{}", stdout);
    assert!(stdout.contains("2.0 KB   deep/medium.md"), "{}", stdout);
    // Only the top two appear in the table; the type table still lists .txt.
    let table_end = stdout.find("🗂️").unwrap();
    assert!(!stdout[..table_end].contains("10 B"));
}

#[test]
fn test_chart_styles() {
    let tree = TestTree::new();
    tree.add_sized_file("a.txt", 50);
    tree.add_sized_file("b.go", 30);

    let (stdout, _stderr, success) = run_hyperion(tree.path(), &["--show-files", "--chart"]);
    assert!(success);
    assert!(stdout.contains("📊 File Size Distribution Chart:"));
    assert!(stdout.contains(&"█".repeat(50)));

    let (stdout, _stderr, success) =
        run_hyperion(tree.path(), &["--show-files", "--chart", "--unicode=false"]);
    assert!(success);
    assert!(stdout.contains("# File Size Distribution Chart:"));
    assert!(stdout.contains(&"#".repeat(30)));

    let (stdout, _stderr, success) = run_hyperion(
        tree.path(),
        &["--show-files", "--chart", "--chart-style", "sparkline"],
    );
    assert!(success);
    assert!(stdout.contains("⚡ File Size Distribution Sparklines:"));
}

#[test]
fn test_json_report() {
    let tree = TestTree::new();
    tree.add_sized_file("a.txt", 30);
    tree.add_sized_file("b/c.rs", 10);

    let (stdout, _stderr, success) =
        run_hyperion(tree.path(), &["--show-files", "--stat-table", "--json"]);
    assert!(success);

    let json_start = stdout.find('{').expect("json object in output");
    let value: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(value["total_files"], 2);
    assert_eq!(value["total_dirs"], 1);
    assert_eq!(value["total_size"], 40);
    assert_eq!(value["largest_files"][0]["path"], "a.txt");
}

#[test]
fn test_missing_path_fails() {
    let tree = TestTree::new();

    Command::cargo_bin("hyperion")
        .unwrap()
        .current_dir(tree.path())
        .args(["--path", "does-not-exist"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error accessing path does-not-exist"));
}

#[test]
fn test_path_flag_names_root() {
    let tree = TestTree::new();
    tree.add_file("project/src/main.rs", "fn main() {}");

    Command::cargo_bin("hyperion")
        .unwrap()
        .current_dir(tree.path())
        .args(["--path", "project"])
        .assert()
        .success()
        .stdout("project\n└── src\n");
}

#[test]
fn test_about_and_version() {
    Command::cargo_bin("hyperion")
        .unwrap()
        .arg("--about")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hyperion - Advanced Directory Tree Visualizer"));

    Command::cargo_bin("hyperion")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Basic usage (folders only)"));

    Command::cargo_bin("hyperion")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("hyperion "));
}
