//! Tests for PathTree path operations: find, insert, delete, enumeration.

use std::collections::BTreeSet;

use rstest::{fixture, rstest};

use pathtree::domain::{DomainError, PathKind, PathTree};

fn assert_ordered(tree: &PathTree) {
    assert!(
        tree.root().is_ordered(),
        "siblings must be strictly increasing: {:?}",
        tree.all_paths()
    );
}

/// dir1/file1.txt, dir1/file2.txt, dir2/sub/file3.txt, inserted with their parents.
#[fixture]
fn sample_tree() -> PathTree {
    let mut tree = PathTree::new();
    for (path, is_dir) in [
        ("dir2", true),
        ("dir1", true),
        ("dir2/sub", true),
        ("dir1/file2.txt", false),
        ("dir2/sub/file3.txt", false),
        ("dir1/file1.txt", false),
    ] {
        tree.insert(path, is_dir).unwrap();
        assert_ordered(&tree);
    }
    tree
}

// ============================================================
// Search
// ============================================================

#[rstest]
#[case("dir1", PathKind::Directory)]
#[case("dir1/file1.txt", PathKind::File)]
#[case("dir2/sub", PathKind::Directory)]
#[case("dir2/sub/file3.txt", PathKind::File)]
#[case("dir3", PathKind::Absent)]
#[case("dir1/file3.txt", PathKind::Absent)]
#[case("dir1/file1.txt/deeper", PathKind::Absent)]
#[case("/dir1//file2.txt/", PathKind::File)]
#[case("", PathKind::Directory)]
fn given_sample_tree_when_find_then_classifies(
    sample_tree: PathTree,
    #[case] path: &str,
    #[case] expected: PathKind,
) {
    assert_eq!(sample_tree.find(path), expected);
}

#[rstest]
fn given_sample_tree_when_all_paths_then_sorted_preorder(sample_tree: PathTree) {
    assert_eq!(
        sample_tree.all_paths(),
        vec![
            "dir1",
            "dir1/file1.txt",
            "dir1/file2.txt",
            "dir2",
            "dir2/sub",
            "dir2/sub/file3.txt",
        ]
    );
    assert_eq!(
        sample_tree.all_directories(),
        vec!["dir1", "dir2", "dir2/sub"]
    );
}

#[rstest]
fn given_sample_tree_when_stats_then_counts_match(sample_tree: PathTree) {
    let stats = sample_tree.stats();
    assert_eq!(stats.node_count, 6);
    assert_eq!(stats.file_count, 3);
    assert_eq!(stats.directory_count, 3);
    assert_eq!(stats.height, 3);
    assert_eq!(sample_tree.node_count(), 6);
    assert_eq!(sample_tree.file_count(), 3);
}

// ============================================================
// Insert
// ============================================================

#[test]
fn given_empty_tree_when_insert_under_missing_parent_then_parent_not_found() {
    let mut tree = PathTree::new();
    assert_eq!(
        tree.insert("missing/x.txt", false),
        Err(DomainError::ParentNotFound("missing/x.txt".to_string()))
    );
    assert!(tree.is_empty());
}

#[rstest]
#[case("")]
#[case("/")]
#[case("///")]
fn given_path_without_components_when_insert_then_invalid_path(#[case] path: &str) {
    let mut tree = PathTree::new();
    assert_eq!(
        tree.insert(path, false),
        Err(DomainError::InvalidPath(path.to_string()))
    );
}

#[rstest]
fn given_existing_path_when_insert_twice_then_already_exists_and_unchanged(
    mut sample_tree: PathTree,
) {
    sample_tree.insert("dir1/new.txt", false).unwrap();
    let snapshot = sample_tree.clone();

    assert_eq!(
        sample_tree.insert("dir1/new.txt", false),
        Err(DomainError::AlreadyExists("dir1/new.txt".to_string()))
    );
    assert_eq!(sample_tree, snapshot);
}

#[rstest]
fn given_file_when_inserting_beneath_then_becomes_directory(mut sample_tree: PathTree) {
    assert_eq!(sample_tree.find("dir1/file1.txt"), PathKind::File);
    sample_tree.insert("dir1/file1.txt/child", false).unwrap();
    assert_eq!(sample_tree.find("dir1/file1.txt"), PathKind::Directory);
    assert_eq!(sample_tree.find("dir1/file1.txt/child"), PathKind::File);
}

#[test]
fn given_directory_hint_when_insert_then_kind_still_derived() {
    let mut tree = PathTree::new();
    tree.insert("empty_dir", true).unwrap();
    assert_eq!(tree.find("empty_dir"), PathKind::File);
}

#[test]
fn given_many_siblings_in_random_order_when_insert_then_sorted() {
    let mut tree = PathTree::new();
    let names = ["k", "b", "z", "a", "m", "c", "y", "B", "0", "kk"];
    for name in names {
        tree.insert(name, false).unwrap();
        assert_ordered(&tree);
    }
    let mut expected: Vec<&str> = names.to_vec();
    expected.sort();
    assert_eq!(tree.all_paths(), expected);
}

// ============================================================
// Delete
// ============================================================

#[rstest]
fn given_inserted_path_when_deleted_then_tree_restored(mut sample_tree: PathTree) {
    let before_count = sample_tree.node_count();
    let before_paths: BTreeSet<String> = sample_tree.all_paths().into_iter().collect();

    sample_tree.insert("dir2/sub/extra.txt", false).unwrap();
    assert_eq!(sample_tree.node_count(), before_count + 1);

    sample_tree.delete("dir2/sub/extra.txt").unwrap();
    assert_ordered(&sample_tree);

    let after_paths: BTreeSet<String> = sample_tree.all_paths().into_iter().collect();
    assert_eq!(sample_tree.node_count(), before_count);
    assert_eq!(after_paths, before_paths);
}

#[test]
fn given_nested_path_when_deleting_ancestor_then_subtree_gone() {
    let mut tree = PathTree::new();
    tree.insert("a", true).unwrap();
    tree.insert("a/b", true).unwrap();
    tree.insert("a/b/c", false).unwrap();

    let removed = tree.delete("a").unwrap();
    assert_eq!(removed.name(), "a");
    assert_eq!(removed.descendant_count(), 2);

    assert_eq!(tree.find("a/b/c"), PathKind::Absent);
    assert_eq!(tree.find("a"), PathKind::Absent);
    assert!(tree.is_empty());
}

#[rstest]
#[case("dir3")]
#[case("dir3/file.txt")]
#[case("dir1/nothing.txt")]
fn given_missing_path_when_delete_then_not_found(
    mut sample_tree: PathTree,
    #[case] path: &str,
) {
    let snapshot = sample_tree.clone();
    assert_eq!(
        sample_tree.delete(path),
        Err(DomainError::NotFound(path.to_string()))
    );
    assert_eq!(sample_tree, snapshot);
}

#[test]
fn given_empty_path_when_delete_then_invalid_path_and_root_kept() {
    let mut tree = PathTree::new();
    tree.insert("x", false).unwrap();
    assert_eq!(
        tree.delete(""),
        Err(DomainError::InvalidPath(String::new()))
    );
    assert_eq!(tree.find("x"), PathKind::File);
}

#[rstest]
fn given_last_child_deleted_when_find_parent_then_file(mut sample_tree: PathTree) {
    sample_tree.delete("dir2/sub/file3.txt").unwrap();
    assert_eq!(sample_tree.find("dir2/sub"), PathKind::File);
    assert_eq!(sample_tree.all_directories(), vec!["dir1", "dir2"]);
}

// ============================================================
// Display
// ============================================================

#[rstest]
fn given_sample_tree_when_display_then_labels_kinds(sample_tree: PathTree) {
    let rendered = sample_tree.to_display_tree(3).to_string();
    assert!(rendered.starts_with("root (directory, 2 children)"));
    assert!(rendered.contains("dir1 (directory, 2 children)"));
    assert!(rendered.contains("file3.txt (file)"));
}
