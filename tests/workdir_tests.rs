//! Integration tests for the scoped working-directory guard.

use rstest::rstest;
use serial_test::serial;
use test_support::tree::EnvTree;
use whichpy::workdir::WorkDirGuard;

#[rstest]
#[serial]
fn enters_and_restores() {
    let tree = EnvTree::new();
    tree.create_dir("inner");
    let before = std::env::current_dir().expect("cwd");
    {
        let guard = WorkDirGuard::enter(tree.path("inner")).expect("enter");
        assert_eq!(guard.original(), before);
        let now = std::env::current_dir().expect("cwd");
        assert_eq!(
            now.canonicalize().expect("canonicalize"),
            tree.path("inner")
                .as_std_path()
                .canonicalize()
                .expect("canonicalize")
        );
    }
    assert_eq!(std::env::current_dir().expect("cwd"), before);
}

#[rstest]
#[serial]
fn restores_after_a_panic_in_the_nested_operation() {
    let tree = EnvTree::new();
    tree.create_dir("inner");
    let inner = tree.path("inner");
    let before = std::env::current_dir().expect("cwd");
    let result = std::panic::catch_unwind(move || {
        let _guard = WorkDirGuard::enter(inner).expect("enter");
        panic!("nested operation failed");
    });
    assert!(result.is_err());
    assert_eq!(std::env::current_dir().expect("cwd"), before);
}

#[rstest]
#[serial]
fn entering_a_missing_directory_fails_without_side_effects() {
    let tree = EnvTree::new();
    let before = std::env::current_dir().expect("cwd");
    WorkDirGuard::enter(tree.path("missing")).expect_err("no such directory");
    assert_eq!(std::env::current_dir().expect("cwd"), before);
}
