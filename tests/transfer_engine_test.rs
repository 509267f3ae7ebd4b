//! Integration tests for the transfer engine
//!
//! Covers the per-item outcome contract (one outcome per requested item, a
//! failing item never aborts the batch), "(copy n)" collision naming through
//! real copies, the cross-device move fallback, trash, and cancellation.

mod common;

use std::fs;
use std::sync::Arc;

use common::{make_dir, write_file, FaultyFs};
use tanzfm::fs::RealFileSystem;
use tanzfm::logic::errors::ErrorKind;
use tanzfm::services::{
    CancelToken, TransferEngine, TransferItem, TransferJob, TransferOptions, TransferProgress, TransferStatus,
};
use tempfile::TempDir;

fn real_engine() -> TransferEngine {
    TransferEngine::new(Arc::new(RealFileSystem), TransferOptions::default())
}

fn items(paths: &[std::path::PathBuf]) -> Vec<TransferItem> {
    paths.iter().map(|p| TransferItem::from_path(&RealFileSystem, p)).collect()
}

/// Test: repeated copies of the same file produce monotonically numbered names
#[test]
fn test_repeated_copy_numbers_monotonically() {
    let tmp = TempDir::new().unwrap();
    let src_dir = make_dir(tmp.path(), "src");
    let dest = make_dir(tmp.path(), "dest");
    let src = write_file(&src_dir, "a.txt", b"payload");
    write_file(&dest, "a.txt", b"already here");

    let engine = real_engine();
    let first = engine.copy(&items(&[src.clone()]), &dest);
    let second = engine.copy(&items(&[src]), &dest);

    assert_eq!(first[0].final_name, "a (copy 1).txt");
    assert_eq!(second[0].final_name, "a (copy 2).txt");
    assert_eq!(fs::read(dest.join("a.txt")).unwrap(), b"already here");
    assert_eq!(fs::read(dest.join("a (copy 2).txt")).unwrap(), b"payload");
}

/// Test: directory collisions never split on a dot
#[test]
fn test_directory_collision_has_no_extension() {
    let tmp = TempDir::new().unwrap();
    let src = make_dir(tmp.path(), "src/notes");
    let dest = make_dir(tmp.path(), "dest");
    make_dir(&dest, "notes");

    let outcomes = real_engine().copy(&items(&[src]), &dest);
    assert_eq!(outcomes[0].final_name, "notes (copy 1)");
    assert!(dest.join("notes (copy 1)").is_dir());
}

/// Test: N items where one fails still yields N outcomes, in request order
#[test]
fn test_one_failure_does_not_abort_batch() {
    let tmp = TempDir::new().unwrap();
    let src_dir = make_dir(tmp.path(), "src");
    let dest = make_dir(tmp.path(), "dest");
    let sources: Vec<_> = ["a", "b", "c", "d"]
        .iter()
        .map(|n| write_file(&src_dir, n, n.as_bytes()))
        .collect();

    let fs_impl = Arc::new(FaultyFs::new());
    fs_impl.deny_read(&sources[2]);
    let engine = TransferEngine::new(fs_impl, TransferOptions::default());

    let outcomes = engine.copy(&items(&sources), &dest);
    assert_eq!(outcomes.len(), 4);
    for (idx, outcome) in outcomes.iter().enumerate() {
        assert_eq!(outcome.source, sources[idx]);
        if idx == 2 {
            assert_eq!(outcome.status, TransferStatus::Failed(ErrorKind::PermissionDenied));
        } else {
            assert!(outcome.succeeded(), "item {} should succeed", idx);
        }
    }
    assert!(!dest.join("c").exists());
}

/// Test: a nested failure aborts that item and leaves the partial tree in place
#[test]
fn test_nested_failure_keeps_partial_tree() {
    let tmp = TempDir::new().unwrap();
    let tree = make_dir(tmp.path(), "tree");
    write_file(&tree, "a_first.txt", b"1");
    let blocked = write_file(&tree, "b_blocked.txt", b"2");
    write_file(&tree, "c_never.txt", b"3");
    let dest = make_dir(tmp.path(), "dest");

    let fs_impl = Arc::new(FaultyFs::new());
    fs_impl.deny_read(&blocked);
    let engine = TransferEngine::new(fs_impl, TransferOptions::default());

    let outcomes = engine.copy(&items(&[tree]), &dest);
    assert_eq!(outcomes[0].status, TransferStatus::Failed(ErrorKind::PermissionDenied));
    assert!(dest.join("tree/a_first.txt").exists());
    assert!(!dest.join("tree/c_never.txt").exists());
}

/// Test: cross-device moves fall back to copy then delete
#[test]
fn test_cross_device_move_falls_back_to_copy() {
    let tmp = TempDir::new().unwrap();
    let src = make_dir(tmp.path(), "src/album");
    write_file(&src, "track.flac", b"music");
    let dest = make_dir(tmp.path(), "dest");

    let fs_impl = Arc::new(FaultyFs::new());
    fs_impl.force_cross_device();
    let engine = TransferEngine::new(fs_impl, TransferOptions::default());

    let outcomes = engine.move_items(&items(&[src.clone()]), &dest);
    assert!(outcomes[0].succeeded());
    assert_eq!(outcomes[0].warning, None);
    assert_eq!(fs::read(dest.join("album/track.flac")).unwrap(), b"music");
    assert!(!src.exists());
}

/// Test: failed source removal after a fallback copy is a warning, not a failure
#[test]
fn test_cross_device_move_source_not_removed() {
    let tmp = TempDir::new().unwrap();
    let src = write_file(tmp.path(), "src/a.txt", b"x");
    let dest = make_dir(tmp.path(), "dest");

    let fs_impl = Arc::new(FaultyFs::new());
    fs_impl.force_cross_device();
    fs_impl.deny_remove(&src);
    let engine = TransferEngine::new(fs_impl, TransferOptions::default());

    let outcomes = engine.move_items(&items(&[src.clone()]), &dest);
    assert!(outcomes[0].succeeded());
    assert_eq!(outcomes[0].warning, Some(ErrorKind::SourceNotRemoved));
    assert!(src.exists());
    assert!(dest.join("a.txt").exists());
}

/// Test: when the fallback copy fails the source is left untouched
#[test]
fn test_cross_device_copy_failure_keeps_source() {
    let tmp = TempDir::new().unwrap();
    let src = write_file(tmp.path(), "src/a.txt", b"x");
    let dest = make_dir(tmp.path(), "dest");

    let fs_impl = Arc::new(FaultyFs::new());
    fs_impl.force_cross_device();
    fs_impl.deny_read(&src);
    let engine = TransferEngine::new(fs_impl, TransferOptions::default());

    let outcomes = engine.move_items(&items(&[src.clone()]), &dest);
    assert_eq!(outcomes[0].status, TransferStatus::Failed(ErrorKind::PermissionDenied));
    assert_eq!(fs::read(&src).unwrap(), b"x");
}

/// Test: moves collide the same way copies do
#[test]
fn test_move_resolves_collisions() {
    let tmp = TempDir::new().unwrap();
    let src = write_file(tmp.path(), "src/report.pdf", b"new");
    let dest = make_dir(tmp.path(), "dest");
    write_file(&dest, "report.pdf", b"old");

    let outcomes = real_engine().move_items(&items(&[src]), &dest);
    assert_eq!(outcomes[0].final_name, "report (copy 1).pdf");
    assert_eq!(fs::read(dest.join("report.pdf")).unwrap(), b"old");
}

/// Test: the collision bound surfaces as ResourceExhausted
#[test]
fn test_collision_bound_is_enforced() {
    let tmp = TempDir::new().unwrap();
    let src = write_file(tmp.path(), "src/a.txt", b"x");
    let dest = make_dir(tmp.path(), "dest");
    write_file(&dest, "a.txt", b"");
    for n in 1..=3 {
        write_file(&dest, &format!("a (copy {}).txt", n), b"");
    }

    let engine = TransferEngine::new(
        Arc::new(RealFileSystem),
        TransferOptions {
            max_collision_attempts: 3,
            ..TransferOptions::default()
        },
    );
    let outcomes = engine.copy(&items(&[src]), &dest);
    assert_eq!(outcomes[0].status, TransferStatus::Failed(ErrorKind::ResourceExhausted));
}

/// Test: moving a directory into its own subtree is refused
#[test]
fn test_move_into_descendant_is_invalid() {
    let tmp = TempDir::new().unwrap();
    let src = make_dir(tmp.path(), "outer/inner");
    let outer = tmp.path().join("outer");

    let outcomes = real_engine().move_items(&items(&[outer.clone()]), &src);
    assert_eq!(outcomes[0].status, TransferStatus::Failed(ErrorKind::InvalidInput));
    assert!(outer.is_dir());
}

/// Test: trash moves every item and reports missing ones individually
#[test]
fn test_trash_per_item_outcomes() {
    let tmp = TempDir::new().unwrap();
    let trash = make_dir(tmp.path(), "trash");
    let a = write_file(tmp.path(), "work/a.txt", b"a");
    let ghost = tmp.path().join("work/ghost.txt");
    let engine = TransferEngine::new(Arc::new(FaultyFs::with_trash(&trash)), TransferOptions::default());

    let batch = vec![
        TransferItem::from_path(&RealFileSystem, &a),
        TransferItem::from_path(&RealFileSystem, &ghost),
    ];
    let outcomes = engine.move_to_trash(&batch);

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].succeeded());
    assert!(trash.join("a.txt").exists());
    assert!(!a.exists());
    assert_eq!(outcomes[1].status, TransferStatus::Failed(ErrorKind::NotFound));
}

/// Test: cancelling mid-batch keeps finished items and fails the rest
#[test]
fn test_cancel_mid_batch() {
    let tmp = TempDir::new().unwrap();
    let dest = make_dir(tmp.path(), "dest");
    let sources: Vec<_> = ["one", "two", "three"]
        .iter()
        .map(|n| write_file(tmp.path(), &format!("src/{}", n), &[1u8; 10_000]))
        .collect();

    let engine = TransferEngine::new(
        Arc::new(RealFileSystem),
        TransferOptions {
            chunk_size: 4096,
            ..TransferOptions::default()
        },
    );
    let cancel = CancelToken::new();
    let job = TransferJob::copy(items(&sources), &dest);

    // Cancel as soon as the second item starts
    let outcomes = engine.execute(&job, &cancel, &mut |p: &TransferProgress| {
        if p.item_index == 1 {
            cancel.cancel();
        }
    });

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].succeeded());
    assert_eq!(outcomes[1].status, TransferStatus::Failed(ErrorKind::Cancelled));
    assert_eq!(outcomes[2].status, TransferStatus::Failed(ErrorKind::Cancelled));
    assert!(dest.join("one").exists());
    assert!(!dest.join("three").exists());
}

/// Test: progress reports cumulative bytes for a directory item
#[test]
fn test_progress_accumulates_across_tree() {
    let tmp = TempDir::new().unwrap();
    let tree = make_dir(tmp.path(), "tree");
    write_file(&tree, "a", &[0u8; 3000]);
    write_file(&tree, "sub/b", &[0u8; 5000]);
    let dest = make_dir(tmp.path(), "dest");

    let engine = TransferEngine::new(Arc::new(FaultyFs::new()), TransferOptions::default());
    let mut seen = Vec::new();
    let job = TransferJob::copy(items(&[tree]), &dest);
    let outcomes = engine.execute(&job, &CancelToken::new(), &mut |p| seen.push(p.bytes_copied));

    assert!(outcomes[0].succeeded());
    assert_eq!(seen.first(), Some(&0));
    assert_eq!(seen.last(), Some(&8000));
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
}

/// Test: create and rename never auto-resolve collisions
#[test]
fn test_create_and_rename_refuse_collisions() {
    let tmp = TempDir::new().unwrap();
    make_dir(tmp.path(), "taken");
    let file = write_file(tmp.path(), "file.txt", b"x");
    let engine = real_engine();

    assert_eq!(engine.create_directory(tmp.path(), "taken"), Err(ErrorKind::AlreadyExists));
    assert_eq!(engine.rename(&file, "taken"), Err(ErrorKind::AlreadyExists));
    assert!(!tmp.path().join("taken (copy 1)").exists());
    assert!(file.exists());
}

/// Test: names that are not valid UTF-8 survive nested and top-level copies
#[cfg(unix)]
#[test]
fn test_copy_keeps_non_utf8_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = TempDir::new().unwrap();
    let raw = OsStr::from_bytes(b"bad\xff.txt");
    let src = make_dir(tmp.path(), "src");
    fs::write(src.join(raw), b"payload").unwrap();
    let loose = tmp.path().join(OsStr::from_bytes(b"loose\xfe"));
    fs::write(&loose, b"top").unwrap();
    let dest = make_dir(tmp.path(), "dest");

    let outcomes = real_engine().copy(&items(&[src, loose]), &dest);

    assert!(outcomes.iter().all(|o| o.succeeded()), "{:?}", outcomes);
    assert_eq!(fs::read(dest.join("src").join(raw)).unwrap(), b"payload");
    assert_eq!(fs::read(dest.join(OsStr::from_bytes(b"loose\xfe"))).unwrap(), b"top");
    assert_eq!(outcomes[1].destination, Some(dest.join(OsStr::from_bytes(b"loose\xfe"))));
}

/// Test: the cross-device fallback copies non-UTF-8 children and removes the source
#[cfg(unix)]
#[test]
fn test_cross_device_move_keeps_non_utf8_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = TempDir::new().unwrap();
    let raw = OsStr::from_bytes(b"caf\xe9");
    let src = make_dir(tmp.path(), "album");
    fs::write(src.join(raw), b"x").unwrap();
    let dest = make_dir(tmp.path(), "dest");

    let faulty = FaultyFs::new();
    faulty.force_cross_device();
    let engine = TransferEngine::new(Arc::new(faulty), TransferOptions::default());
    let outcomes = engine.move_items(&items(&[src.clone()]), &dest);

    assert!(outcomes[0].succeeded());
    assert_eq!(outcomes[0].warning, None);
    assert!(dest.join("album").join(raw).exists());
    assert!(!src.exists());
}

/// Test: a destination created between the check and the rename is not replaced
#[test]
fn test_rename_does_not_clobber_late_destination() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "draft.txt", b"mine");

    let faulty = FaultyFs::new();
    faulty.squat_on_rename(b"theirs");
    let engine = TransferEngine::new(Arc::new(faulty), TransferOptions::default());

    assert_eq!(engine.rename(&file, "final.txt"), Err(ErrorKind::AlreadyExists));
    assert_eq!(fs::read(tmp.path().join("final.txt")).unwrap(), b"theirs");
    assert_eq!(fs::read(&file).unwrap(), b"mine");
}

/// Test: a move racing another writer fails the item and keeps both files
#[test]
fn test_move_does_not_clobber_late_destination() {
    let tmp = TempDir::new().unwrap();
    let src = write_file(tmp.path(), "src/report.pdf", b"mine");
    let dest = make_dir(tmp.path(), "dest");

    let faulty = FaultyFs::new();
    faulty.squat_on_rename(b"theirs");
    let engine = TransferEngine::new(Arc::new(faulty), TransferOptions::default());
    let outcomes = engine.move_items(&items(&[src.clone()]), &dest);

    assert_eq!(outcomes[0].status, TransferStatus::Failed(ErrorKind::AlreadyExists));
    assert_eq!(fs::read(dest.join("report.pdf")).unwrap(), b"theirs");
    assert_eq!(fs::read(&src).unwrap(), b"mine");
}

/// Test: a cancel that lands after the last chunk does not fail a finished copy
#[test]
fn test_cancel_after_last_chunk_keeps_copy() {
    let tmp = TempDir::new().unwrap();
    let src = write_file(tmp.path(), "src/data.bin", &[3u8; 8192]);
    let dest = make_dir(tmp.path(), "dest");

    let engine = TransferEngine::new(
        Arc::new(RealFileSystem),
        TransferOptions {
            chunk_size: 4096,
            ..TransferOptions::default()
        },
    );
    let cancel = CancelToken::new();
    let job = TransferJob::copy(items(&[src]), &dest);
    let outcomes = engine.execute(&job, &cancel, &mut |p: &TransferProgress| {
        if p.bytes_copied == 8192 {
            cancel.cancel();
        }
    });

    assert!(cancel.is_cancelled());
    assert!(outcomes[0].succeeded());
    assert_eq!(fs::read(dest.join("data.bin")).unwrap().len(), 8192);
}

/// Test: the same late cancel still lets a cross-device move remove its source
#[test]
fn test_cancel_after_last_chunk_finishes_move() {
    let tmp = TempDir::new().unwrap();
    let src = write_file(tmp.path(), "src/data.bin", &[3u8; 8192]);
    let dest = make_dir(tmp.path(), "dest");

    let faulty = FaultyFs::new();
    faulty.force_cross_device();
    let engine = TransferEngine::new(
        Arc::new(faulty),
        TransferOptions {
            chunk_size: 4096,
            ..TransferOptions::default()
        },
    );
    let cancel = CancelToken::new();
    let job = TransferJob::move_items(items(&[src.clone()]), &dest);
    let outcomes = engine.execute(&job, &cancel, &mut |p: &TransferProgress| {
        if p.bytes_copied == 8192 {
            cancel.cancel();
        }
    });

    assert!(outcomes[0].succeeded());
    assert!(dest.join("data.bin").exists());
    assert!(!src.exists());
}

/// Test: a cancel mid-file stops before the next chunk is written
#[test]
fn test_cancel_mid_file_stops_writing() {
    let tmp = TempDir::new().unwrap();
    let src = write_file(tmp.path(), "src/data.bin", &[3u8; 16_384]);
    let dest = make_dir(tmp.path(), "dest");

    let engine = TransferEngine::new(
        Arc::new(RealFileSystem),
        TransferOptions {
            chunk_size: 4096,
            ..TransferOptions::default()
        },
    );
    let cancel = CancelToken::new();
    let job = TransferJob::copy(items(&[src]), &dest);
    let outcomes = engine.execute(&job, &cancel, &mut |p: &TransferProgress| {
        if p.bytes_copied == 4096 {
            cancel.cancel();
        }
    });

    assert_eq!(outcomes[0].status, TransferStatus::Failed(ErrorKind::Cancelled));
    let partial = fs::metadata(dest.join("data.bin")).map(|m| m.len()).unwrap_or(0);
    assert_eq!(partial, 4096);
}
