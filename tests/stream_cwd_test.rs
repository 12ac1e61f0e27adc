use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use verless::filter::{markdown_only, no_underscores};
use verless::stream::StreamRequest;

// Changes the working directory of the process, so it lives in its own test binary.
#[test]
fn test_streams_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();
    for file in ["notes.md", "_draft.md", "image.png"] {
        fs::write(file, "").unwrap();
    }

    let (files, walk) = StreamRequest::new(".")
        .filter(markdown_only)
        .filter(no_underscores)
        .spawn();
    let files: BTreeSet<PathBuf> = files.into_iter().collect();
    walk.join().unwrap().unwrap();

    assert_eq!(files, BTreeSet::from([PathBuf::from("notes.md")]));
}
