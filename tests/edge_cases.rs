//! Edge case and error handling tests for fsearch


use harness::{TestTree, lines, run_fsearch};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_directory_is_not_followed() {
    let tree = TestTree::new();
    tree.add_file("realdir/file.txt", 1);
    tree.add_symlink("realdir", "linkdir");

    let (stdout, _stderr, success) = run_fsearch(tree.path(), &["-r", "-f", "file.txt"]);
    assert!(success);
    assert_eq!(lines(&stdout), vec!["./realdir/file.txt"]);
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.txt", 1);
    symlink("..", tree.path().join("subdir").join("parent")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_fsearch(tree.path(), &["-r"]);
    assert!(success, "fsearch should not hang on parent symlink");
    assert!(stdout.contains("./subdir/parent"));
    assert!(stdout.contains("./subdir/file.txt"));
}

#[test]
fn test_broken_symlink_is_listed() {
    let tree = TestTree::new();
    symlink("nonexistent.txt", tree.path().join("broken")).expect("Failed to create symlink");

    let (stdout, stderr, success) = run_fsearch(tree.path(), &["-t", "l"]);
    assert!(success, "broken links are still entries: {}", stderr);
    assert_eq!(lines(&stdout), vec!["./broken"]);
}

#[test]
fn test_self_referential_symlink() {
    let tree = TestTree::new();
    tree.add_file("file.txt", 1);
    symlink("selfref", tree.path().join("selfref")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_fsearch(tree.path(), &["-r"]);
    assert!(success);
    assert!(stdout.contains("./selfref"));
    assert!(stdout.contains("./file.txt"));
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
#[cfg(unix)]
fn test_unreadable_directory_is_skipped() {
    let tree = TestTree::new();
    tree.add_file("readable/file.txt", 1);
    let unreadable = tree.add_dir("unreadable");
    fs::write(unreadable.join("hidden.txt"), "x").expect("Failed to write file");

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");

    // Running as root ignores the mode, in which case there is nothing to test.
    let enforced = fs::read_dir(&unreadable).is_err();

    let (stdout, stderr, success) = run_fsearch(tree.path(), &["-r"]);

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    assert!(success, "one bad subtree must not abort the walk");
    assert!(stdout.contains("./readable/file.txt"));
    assert!(stdout.contains("./unreadable"));
    if enforced {
        assert!(!stdout.contains("hidden.txt"));
        assert!(stderr.contains("fsearch: '.': Permission denied"), "{}", stderr);
        assert!(!stderr.contains("os error"), "{}", stderr);
    }
}

// ============================================================================
// Special Filenames
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let tree = TestTree::new();
    tree.add_file("file with spaces.txt", 1);

    let (stdout, _stderr, success) = run_fsearch(tree.path(), &["-f", "FILE WITH SPACES.TXT"]);
    assert!(success);
    assert_eq!(lines(&stdout), vec!["./file with spaces.txt"]);
}

#[test]
fn test_filename_with_unicode() {
    let tree = TestTree::new();
    tree.add_file("日本語.txt", 1);
    tree.add_file("émoji_🎉.txt", 1);

    let (stdout, _stderr, success) = run_fsearch(tree.path(), &["-f", "ÉMOJI_+🎉"]);
    assert!(success);
    assert_eq!(lines(&stdout), vec!["./émoji_🎉.txt"]);

    let (stdout, _stderr, success) = run_fsearch(tree.path(), &["-f", "日本+語"]);
    assert!(success);
    assert_eq!(lines(&stdout), vec!["./日本語.txt"]);
}

#[test]
fn test_token_pattern_rejects_gap() {
    let tree = TestTree::new();
    tree.add_file("lost_file.txt", 1);
    tree.add_file("lostttfile.txt", 1);

    let (stdout, _stderr, success) = run_fsearch(tree.path(), &["-f", "lost+file"]);
    assert!(success);
    assert_eq!(lines(&stdout), vec!["./lostttfile.txt"]);
}

#[test]
fn test_leading_plus_matches_nothing() {
    let tree = TestTree::new();
    tree.add_file("file.txt", 1);

    let (stdout, _stderr, success) = run_fsearch(tree.path(), &["-f", "+file"]);
    assert!(!success);
    assert!(stdout.contains("No file found"));
}

// ============================================================================
// Root Handling
// ============================================================================

#[test]
fn test_trailing_slash_root_is_not_doubled() {
    let tree = TestTree::new();
    tree.add_file("sub/f.txt", 1);

    let (stdout, _stderr, success) = run_fsearch(tree.path(), &["-d", "sub/"]);
    assert!(success);
    assert_eq!(lines(&stdout), vec!["sub/f.txt"]);
}

#[test]
fn test_root_that_is_a_file() {
    let tree = TestTree::new();
    tree.add_file("plain.txt", 1);

    let (_stdout, stderr, success) = run_fsearch(tree.path(), &["-d", "plain.txt"]);
    assert!(!success);
    assert!(stderr.contains("fsearch: 'plain.txt'"), "{}", stderr);
}

#[test]
fn test_tree_mode_with_nested_root() {
    let tree = TestTree::new();
    tree.add_file("outer/inner/leaf.txt", 1);

    let (stdout, _stderr, success) =
        run_fsearch(tree.path(), &["-d", "outer/inner", "-i", "2", "-f", "leaf.txt"]);
    assert!(success);
    assert_eq!(lines(&stdout), vec!["outer", "|--inner", "|----leaf.txt"]);
}

#[test]
fn test_unwritable_output_file_does_not_fail_search() {
    let tree = TestTree::new();
    tree.add_file("a.txt", 1);

    let (stdout, _stderr, success) =
        run_fsearch(tree.path(), &["-o", "missing-dir/out.txt"]);
    assert!(success);
    assert_eq!(lines(&stdout), vec!["./a.txt"]);
    assert!(!tree.path().join("missing-dir").exists());
}
