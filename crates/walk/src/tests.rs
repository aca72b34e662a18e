use super::*;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use test_support::{TreeFixture, sorted_strings, to_strings};

fn relative_paths(outcome: &WalkOutcome) -> Vec<PathBuf> {
    outcome
        .entries
        .iter()
        .map(|entry| entry.relative_path().to_path_buf())
        .collect()
}

fn position(paths: &[String], wanted: &str) -> usize {
    paths
        .iter()
        .position(|path| path == wanted)
        .unwrap_or_else(|| panic!("{wanted} missing from {paths:?}"))
}

#[test]
fn walk_errors_when_root_missing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let missing = temp.path().join("absent");
    let error = match WalkBuilder::new(&missing).build() {
        Ok(_) => panic!("missing root should fail"),
        Err(error) => error,
    };
    assert!(matches!(error.kind(), TraversalErrorKind::RootMetadata { .. }));
    assert_eq!(error.path(), missing);
    assert_eq!(
        error.io_error().map(std::io::Error::kind),
        Some(std::io::ErrorKind::NotFound)
    );
}

#[test]
fn walk_errors_when_root_is_a_file() {
    let fixture = TreeFixture::new(&["file.txt"]).expect("fixture");
    let error = match WalkBuilder::new(fixture.path("file.txt")).build() {
        Ok(_) => panic!("file root should fail"),
        Err(error) => error,
    };
    assert!(matches!(
        error.kind(),
        TraversalErrorKind::NotADirectory { .. }
    ));
    assert_eq!(error.path(), fixture.path("file.txt"));
}

#[test]
fn empty_root_yields_nothing() {
    let fixture = TreeFixture::new(&[]).expect("fixture");
    let outcome = WalkBuilder::new(fixture.root()).run().expect("walk");
    assert!(outcome.entries.is_empty());
    assert!(outcome.is_complete());
}

#[test]
fn only_regular_files_are_emitted() {
    let fixture = TreeFixture::new(&["a.txt", "empty/", "dir/b.txt", "dir/deeper/"])
        .expect("fixture");
    let outcome = WalkBuilder::new(fixture.root()).run().expect("walk");
    assert_eq!(
        sorted_strings(relative_paths(&outcome)),
        ["a.txt", "dir/b.txt"]
    );
}

#[test]
fn paths_take_the_root_form() {
    let fixture = TreeFixture::new(&["dir/file.txt"]).expect("fixture");
    let outcome = WalkBuilder::new(fixture.root()).run().expect("walk");
    let entry = &outcome.entries[0];
    assert_eq!(entry.path(), fixture.root().join("dir").join("file.txt"));
    assert_eq!(entry.relative_path(), Path::new("dir/file.txt"));
    assert_eq!(entry.depth(), 2);
    assert_eq!(entry.file_name(), Some(std::ffi::OsStr::new("file.txt")));
}

#[test]
fn subdirectory_contents_precede_next_sibling() {
    let fixture = TreeFixture::new(&[
        "a/x.txt",
        "a/sub/y.txt",
        "a/z.txt",
        "b.txt",
        "c/w.txt",
    ])
    .expect("fixture");
    let outcome = WalkBuilder::new(fixture.root()).run().expect("walk");
    let paths = to_strings(relative_paths(&outcome));
    assert_eq!(paths.len(), 5);

    let block: Vec<usize> = paths
        .iter()
        .enumerate()
        .filter(|(_, path)| path.starts_with("a/"))
        .map(|(index, _)| index)
        .collect();
    assert_eq!(block.len(), 3);
    assert_eq!(block[2] - block[0], 2, "a/ subtree interleaved: {paths:?}");

    let sub = position(&paths, "a/sub/y.txt");
    assert!(block.contains(&sub));
}

#[test]
fn siblings_follow_enumeration_order() {
    let names = ["m.txt", "a.txt", "z.txt", "k.txt", "b.txt"];
    let fixture = TreeFixture::new(&names).expect("fixture");

    let enumerated: Vec<OsString> = fs::read_dir(fixture.root())
        .expect("read_dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    let outcome = WalkBuilder::new(fixture.root()).run().expect("walk");
    let emitted: Vec<OsString> = outcome
        .entries
        .iter()
        .filter_map(|entry| entry.file_name().map(OsString::from))
        .collect();

    assert_eq!(emitted, enumerated);
}

#[test]
fn excluded_directory_is_never_opened() {
    let fixture = TreeFixture::new(&[
        "src/index.ts",
        "node_modules/pkg/index.ts",
        "node_modules/pkg/deep/other.ts",
    ])
    .expect("fixture");

    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);
    let outcome = WalkBuilder::new(fixture.root())
        .exclude(move |name| {
            recorder
                .lock()
                .expect("lock")
                .push(name.to_string_lossy().into_owned());
            name == "node_modules"
        })
        .run()
        .expect("walk");

    assert_eq!(to_strings(relative_paths(&outcome)), ["src/index.ts"]);
    let seen = seen.lock().expect("lock");
    assert!(seen.iter().any(|name| name == "node_modules"));
    assert!(!seen.iter().any(|name| name == "pkg" || name == "deep"));
}

#[test]
fn exclude_applies_to_files_too() {
    let fixture = TreeFixture::new(&["keep.ts", "skip.ts"]).expect("fixture");
    let outcome = WalkBuilder::new(fixture.root())
        .exclude(|name| name == "skip.ts")
        .run()
        .expect("walk");
    assert_eq!(to_strings(relative_paths(&outcome)), ["keep.ts"]);
}

#[test]
fn include_sees_root_form_path_of_files_only() {
    let fixture = TreeFixture::new(&["a.ts", "b.js", "dir.ts/c.js"]).expect("fixture");
    let root = fixture.root().to_path_buf();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);

    let outcome = WalkBuilder::new(&root)
        .include(move |path| {
            recorder.lock().expect("lock").push(path.to_path_buf());
            path.to_string_lossy().ends_with(".ts")
        })
        .run()
        .expect("walk");

    assert_eq!(to_strings(relative_paths(&outcome)), ["a.ts"]);
    let seen = seen.lock().expect("lock");
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|path| path.starts_with(&root)));
    assert!(!seen.contains(&root.join("dir.ts")));
}

#[test]
fn cancelled_token_stops_before_first_entry() {
    let fixture = TreeFixture::new(&["a.txt", "dir/b.txt"]).expect("fixture");
    let token = CancelToken::new();
    token.cancel();

    let outcome = WalkBuilder::new(fixture.root())
        .cancel_token(token)
        .run()
        .expect("walk");
    assert!(outcome.entries.is_empty());
    assert!(outcome.cancelled);
    assert!(!outcome.is_complete());
}

#[test]
fn cancelling_mid_walk_keeps_collected_entries() {
    let fixture = TreeFixture::new(&["a.txt", "b.txt", "c.txt"]).expect("fixture");
    let token = CancelToken::new();
    let mut walker = WalkBuilder::new(fixture.root())
        .cancel_token(token.clone())
        .build()
        .expect("build");

    assert!(walker.next().is_some());
    token.cancel();
    assert!(walker.next().is_none());
    assert!(walker.is_cancelled());
    assert!(walker.soft_errors().is_empty());
}

#[test]
fn vanished_sibling_is_a_soft_error() {
    let fixture =
        TreeFixture::new(&["a/one.txt", "b/two.txt", "c/three.txt"]).expect("fixture");
    let mut walker = WalkBuilder::new(fixture.root()).build().expect("build");

    let first = walker.next().expect("first entry");
    let entered = to_strings([first.relative_path()])[0]
        .split('/')
        .next()
        .map(str::to_owned)
        .expect("directory component");
    let removed = ["a", "b", "c"]
        .into_iter()
        .find(|name| *name != entered)
        .expect("unvisited sibling");
    fs::remove_dir_all(fixture.path(removed)).expect("remove sibling");

    let rest: Vec<WalkEntry> = walker.by_ref().collect();
    assert_eq!(rest.len(), 1);
    let mut emitted = to_strings(
        std::iter::once(first.relative_path()).chain(rest.iter().map(WalkEntry::relative_path)),
    );
    emitted.sort();
    let survivors: Vec<&str> = ["a/one.txt", "b/two.txt", "c/three.txt"]
        .into_iter()
        .filter(|path| !path.starts_with(removed))
        .collect();
    assert_eq!(emitted, survivors);

    let errors = walker.soft_errors();
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0].kind(),
        TraversalErrorKind::Metadata { .. } | TraversalErrorKind::ReadDir { .. }
    ));
    assert_eq!(errors[0].path(), fixture.path(removed));
    assert_eq!(
        errors[0].io_error().map(std::io::Error::kind),
        Some(std::io::ErrorKind::NotFound)
    );
    assert!(!walker.is_cancelled());
}

#[cfg(unix)]
mod unix {
    use super::*;
    use test_support::deny_access;

    #[test]
    fn symlink_cycle_terminates() {
        let fixture = TreeFixture::new(&["top.txt", "a/inner.txt"]).expect("fixture");
        fixture.symlink(fixture.root(), "a/back").expect("symlink");

        let outcome = WalkBuilder::new(fixture.root()).run().expect("walk");
        assert_eq!(
            sorted_strings(relative_paths(&outcome)),
            ["a/inner.txt", "top.txt"]
        );
        assert!(outcome.soft_errors.is_empty());
    }

    #[test]
    fn symlinked_directory_is_descended_once() {
        let fixture = TreeFixture::new(&["real/file.txt"]).expect("fixture");
        fixture.symlink("real", "alias").expect("symlink");

        let outcome = WalkBuilder::new(fixture.root()).run().expect("walk");
        let paths = to_strings(relative_paths(&outcome));
        assert_eq!(paths.len(), 1, "aliased directory listed twice: {paths:?}");
        assert!(paths[0] == "real/file.txt" || paths[0] == "alias/file.txt");
    }

    #[test]
    fn symlink_to_outside_directory_is_followed() {
        let fixture = TreeFixture::new(&["local.txt"]).expect("fixture");
        let outside = fixture.outside().join("shared");
        fs::create_dir(&outside).expect("outside dir");
        fs::write(outside.join("lib.ts"), b"").expect("outside file");
        fixture.symlink(&outside, "linked").expect("symlink");

        let outcome = WalkBuilder::new(fixture.root()).run().expect("walk");
        assert_eq!(
            sorted_strings(relative_paths(&outcome)),
            ["linked/lib.ts", "local.txt"]
        );
        let linked = outcome
            .entries
            .iter()
            .find(|entry| entry.relative_path() == Path::new("linked/lib.ts"))
            .expect("linked entry");
        assert_eq!(linked.path(), fixture.path("linked/lib.ts"));
    }

    #[test]
    fn symlink_to_file_is_emitted_as_file() {
        let fixture = TreeFixture::new(&["target.txt"]).expect("fixture");
        fixture.symlink("target.txt", "link.txt").expect("symlink");

        let outcome = WalkBuilder::new(fixture.root()).run().expect("walk");
        assert_eq!(
            sorted_strings(relative_paths(&outcome)),
            ["link.txt", "target.txt"]
        );
    }

    #[test]
    fn dangling_symlink_is_a_soft_error() {
        let fixture = TreeFixture::new(&["ok.txt"]).expect("fixture");
        fixture.symlink("missing-target", "broken").expect("symlink");

        let outcome = WalkBuilder::new(fixture.root()).run().expect("walk");
        assert_eq!(to_strings(relative_paths(&outcome)), ["ok.txt"]);
        assert_eq!(outcome.soft_errors.len(), 1);
        let error = &outcome.soft_errors[0];
        assert!(matches!(
            error.kind(),
            TraversalErrorKind::DanglingSymlink { .. }
        ));
        assert_eq!(error.path(), fixture.path("broken"));
    }

    #[test]
    fn disabled_symlink_following_skips_links() {
        let fixture = TreeFixture::new(&["real/file.txt", "target.txt"]).expect("fixture");
        fixture.symlink("real", "alias").expect("dir symlink");
        fixture.symlink("target.txt", "link.txt").expect("file symlink");
        fixture.symlink("nowhere", "broken").expect("dangling symlink");

        let outcome = WalkBuilder::new(fixture.root())
            .follow_symlinks(false)
            .run()
            .expect("walk");
        assert_eq!(
            sorted_strings(relative_paths(&outcome)),
            ["real/file.txt", "target.txt"]
        );
        assert!(outcome.soft_errors.is_empty());
    }

    #[test]
    fn symlinked_root_is_resolved() {
        let fixture = TreeFixture::new(&["file.txt"]).expect("fixture");
        let link = fixture.outside().join("root-link");
        std::os::unix::fs::symlink(fixture.root(), &link).expect("symlink");

        let outcome = WalkBuilder::new(&link)
            .follow_symlinks(false)
            .run()
            .expect("walk");
        let paths: Vec<PathBuf> = outcome
            .entries
            .iter()
            .map(|entry| entry.path().to_path_buf())
            .collect();
        assert_eq!(paths, [link.join("file.txt")]);
    }

    #[test]
    fn unreadable_directory_does_not_stop_siblings() {
        let fixture =
            TreeFixture::new(&["a.txt", "locked/secret.txt", "open/b.txt"]).expect("fixture");
        let Some(_guard) = deny_access(&fixture.path("locked")).expect("chmod") else {
            return;
        };

        let outcome = WalkBuilder::new(fixture.root()).run().expect("walk");
        assert_eq!(
            sorted_strings(relative_paths(&outcome)),
            ["a.txt", "open/b.txt"]
        );
        assert_eq!(outcome.soft_errors.len(), 1);
        let error = &outcome.soft_errors[0];
        assert!(error.is_permission_denied());
        assert_eq!(error.path(), fixture.path("locked"));
    }

    #[test]
    fn unreadable_root_is_fatal() {
        let fixture = TreeFixture::new(&["a.txt"]).expect("fixture");
        let Some(_guard) = deny_access(fixture.root()).expect("chmod") else {
            return;
        };

        let error = match WalkBuilder::new(fixture.root()).build() {
            Ok(_) => panic!("unreadable root should fail"),
            Err(error) => error,
        };
        assert!(error.is_permission_denied());
    }
}

#[cfg(feature = "parallel")]
mod parallel_walk {
    use super::*;

    #[test]
    fn parallel_walk_matches_sequential_order() {
        let fixture = TreeFixture::new(&[
            "a/one.ts",
            "a/b/two.ts",
            "a/b/c/three.ts",
            "d/four.ts",
            "five.ts",
            "node_modules/skip.ts",
        ])
        .expect("fixture");

        let build = || {
            WalkBuilder::new(fixture.root()).exclude(|name| name == "node_modules")
        };
        let sequential = build().run().expect("sequential");
        let parallel = build().run_parallel().expect("parallel");

        assert_eq!(parallel.entries, sequential.entries);
        assert!(!parallel.cancelled);
        assert!(parallel.soft_errors.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn parallel_walk_breaks_cycles_and_records_soft_errors() {
        let fixture = TreeFixture::new(&["a/one.ts", "a/b/two.ts", "c/three.ts"]).expect("fixture");
        fixture.symlink(fixture.path("a"), "a/b/up").expect("symlink");
        fixture.symlink(fixture.root(), "a/b/root").expect("symlink");
        fixture.symlink("nowhere", "c/broken").expect("symlink");

        let sequential = WalkBuilder::new(fixture.root()).run().expect("sequential");
        let parallel = WalkBuilder::new(fixture.root())
            .run_parallel()
            .expect("parallel");

        assert_eq!(
            sorted_strings(relative_paths(&parallel)),
            ["a/b/two.ts", "a/one.ts", "c/three.ts"]
        );
        assert_eq!(parallel.entries, sequential.entries);

        assert_eq!(parallel.soft_errors.len(), 1);
        assert!(matches!(
            parallel.soft_errors[0].kind(),
            TraversalErrorKind::DanglingSymlink { .. }
        ));
        assert_eq!(parallel.soft_errors[0].path(), fixture.path("c/broken"));
        assert_eq!(sequential.soft_errors.len(), 1);
        assert!(!parallel.cancelled);
    }

    #[test]
    fn parallel_walk_honours_cancellation() {
        let fixture = TreeFixture::new(&["a.txt", "dir/b.txt"]).expect("fixture");
        let token = CancelToken::new();
        token.cancel();
        let outcome = WalkBuilder::new(fixture.root())
            .cancel_token(token)
            .run_parallel()
            .expect("walk");
        assert!(outcome.entries.is_empty());
        assert!(outcome.cancelled);
    }
}
