//! Integration tests for lsr
//!
//! Stdout is a pipe here, so the binary renders one plain name per line
//! with icons and colors off (unless forced), which keeps output stable.


use harness::{TestDir, run_lsr};

#[test]
fn test_lists_one_name_per_line_when_piped() {
    let dir = TestDir::new();
    dir.add_file("alpha.txt", "");
    dir.add_file("beta.txt", "");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &[]);
    assert!(success, "lsr should succeed");
    assert_eq!(stdout, "alpha.txt\nbeta.txt\n");
}

#[test]
fn test_hidden_entries_need_all_flag() {
    let dir = TestDir::new();
    dir.add_file("shown.txt", "");
    dir.add_file(".hidden", "");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &[]);
    assert!(success);
    assert!(!stdout.contains(".hidden"), "hidden file leaked: {stdout}");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-a"]);
    assert!(success);
    assert!(stdout.contains(".hidden"), "-a should reveal: {stdout}");
}

#[test]
fn test_names_sort_case_insensitively() {
    let dir = TestDir::new();
    dir.add_file("banana", "");
    dir.add_file("Apple", "");
    dir.add_file("cherry", "");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &[]);
    assert!(success);
    assert_eq!(stdout, "Apple\nbanana\ncherry\n");
}

#[test]
fn test_long_format_reports_total_first() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "12345");
    dir.add_file("b.txt", "123");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-l"]);
    assert!(success);
    let first = stdout.lines().next().expect("expected output");
    assert_eq!(first, "total 8 B  ");
    assert!(stdout.contains("a.txt"));
    assert!(stdout.contains("b.txt"));
}

#[test]
fn test_byte_sizes_with_bytes_flag() {
    let dir = TestDir::new();
    dir.add_file("five.txt", "hello");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-l", "-b"]);
    assert!(success);
    assert!(stdout.starts_with("total 5\n"), "got: {stdout}");
    assert!(stdout.contains("5 B"));
}

#[test]
fn test_extended_listing_shows_permissions() {
    let dir = TestDir::new();
    dir.add_file("x.txt", "");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-ll"]);
    assert!(success);
    let entry_line = stdout
        .lines()
        .find(|l| l.contains("x.txt"))
        .expect("entry line");
    assert!(
        entry_line.starts_with('-'),
        "expected a mode string, got: {entry_line}"
    );
    assert!(entry_line.contains("rw"), "got: {entry_line}");
}

#[test]
fn test_sort_by_size_and_reverse() {
    let dir = TestDir::new();
    dir.add_file("small", "1");
    dir.add_file("large", "123456789");
    dir.add_file("medium", "12345");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-s", "size"]);
    assert!(success);
    assert_eq!(stdout, "small\nmedium\nlarge\n");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-s", "size", "-r"]);
    assert!(success);
    assert_eq!(stdout, "large\nmedium\nsmall\n");
}

#[test]
fn test_unknown_sort_key_falls_back_to_name() {
    let dir = TestDir::new();
    dir.add_file("b", "");
    dir.add_file("a", "");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-s", "sideways"]);
    assert!(success, "an unknown key is not an error");
    assert_eq!(stdout, "a\nb\n");
}

#[test]
fn test_multiple_paths_print_headers() {
    let dir = TestDir::new();
    dir.add_file("one/a.txt", "");
    dir.add_file("two/b.txt", "");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["one", "two"]);
    assert!(success);
    assert_eq!(stdout, "one:\na.txt\ntwo:\nb.txt\n");
}

#[test]
fn test_single_path_prints_no_header() {
    let dir = TestDir::new();
    dir.add_file("one/a.txt", "");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["one"]);
    assert!(success);
    assert_eq!(stdout, "a.txt\n");
}

#[test]
fn test_missing_path_is_reported_but_not_fatal() {
    let dir = TestDir::new();
    dir.add_file("real/a.txt", "");

    let (stdout, stderr, success) = run_lsr(dir.path(), &["no-such-dir", "real"]);
    assert!(success, "one surviving path keeps the exit code zero");
    assert!(stderr.contains("no-such-dir"), "stderr: {stderr}");
    assert!(stdout.contains("a.txt"));
}

#[test]
fn test_all_paths_failing_exits_nonzero() {
    let dir = TestDir::new();

    let (_stdout, stderr, success) = run_lsr(dir.path(), &["ghost-one", "ghost-two"]);
    assert!(!success, "every path failed");
    assert!(stderr.contains("ghost-one"));
    assert!(stderr.contains("ghost-two"));
}

#[test]
fn test_tree_draws_connectors() {
    let dir = TestDir::new();
    dir.add_file("sub/inner.txt", "");
    dir.add_file("leaf.txt", "");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-t", "."]);
    assert!(success);
    assert!(stdout.contains("├──leaf.txt"), "got: {stdout}");
    assert!(stdout.contains("└──sub"), "got: {stdout}");
    assert!(stdout.contains("   └──inner.txt"), "got: {stdout}");
}

#[test]
fn test_tree_of_missing_root_fails() {
    let dir = TestDir::new();

    let (stdout, stderr, success) = run_lsr(dir.path(), &["-t", "nowhere"]);
    assert!(!success);
    assert!(stderr.contains("nowhere"));
    assert!(stdout.is_empty(), "no header for a failed root: {stdout}");
}

#[test]
fn test_glob_groups_by_parent() {
    let dir = TestDir::new();
    dir.add_file("a/f1.txt", "");
    dir.add_file("b/f2.txt", "");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["*/f*.txt"]);
    assert!(success);
    assert_eq!(stdout, "a:\nf1.txt\nb:\nf2.txt\n");
}

#[test]
fn test_glob_without_matches_prints_nothing() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["*.nothing"]);
    assert!(success);
    assert!(stdout.is_empty());
}

#[test]
fn test_forced_color_emits_escapes() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["--color", "always"]);
    assert!(success);
    assert!(
        stdout.contains('\u{1b}'),
        "expected ANSI escapes with --color always"
    );
}

#[test]
fn test_version_flag() {
    assert_cmd::Command::cargo_bin("lsr")
        .expect("binary")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains("lsr"));
}

#[test]
fn test_help_documents_tree_flag() {
    assert_cmd::Command::cargo_bin("lsr")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("--tree"));
}
