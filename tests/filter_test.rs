use std::path::Path;

use verless::error::Error;
use verless::filter::{exclude_globs, has_extension, markdown_only, no_underscores};

#[test]
fn test_markdown_only() {
    assert!(markdown_only(Path::new("notes.md")));
    assert!(markdown_only(Path::new("blog/first.md")));
    assert!(!markdown_only(Path::new("image.png")));
    assert!(!markdown_only(Path::new("md")));
    assert!(!markdown_only(Path::new("notes.md.bak")));
}

#[test]
fn test_no_underscores() {
    assert!(no_underscores(Path::new("notes.md")));
    assert!(!no_underscores(Path::new("_draft.md")));
    assert!(!no_underscores(Path::new("blog/_draft.md")));
    // Only the base name counts.
    assert!(no_underscores(Path::new("_drafts/post.md")));
}

#[test]
fn test_has_extension() {
    let html = has_extension("html");
    assert!(html(Path::new("templates/page.html")));
    assert!(!html(Path::new("templates/page.htm")));

    let dotted = has_extension(".css");
    assert!(dotted(Path::new("css/style.css")));
}

#[test]
fn test_exclude_globs() {
    let filter = exclude_globs(["*.png", "drafts/**"]).unwrap();

    assert!(filter(Path::new("blog/post.md")));
    assert!(!filter(Path::new("img/logo.png")));
    assert!(!filter(Path::new("drafts/wip.md")));
}

#[test]
fn test_exclude_globs_invalid_pattern() {
    match exclude_globs(["a[b"]) {
        Err(Error::FilterError(msg)) => assert!(msg.contains("a[b")),
        Err(e) => panic!("Expected FilterError, got {e:?}"),
        Ok(_) => panic!("Expected FilterError"),
    }
}
