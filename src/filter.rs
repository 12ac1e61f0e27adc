//! Filter predicates applied to candidate files while streaming a content tree.
//! A file passes only if every predicate in the chain returns true.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

use crate::error::{Error, Result};

/// A pure test over a file path deciding whether the file is streamed.
pub type FilterPredicate = dyn Fn(&Path) -> bool + Send + Sync;

/// Lets pass Markdown files only.
pub fn markdown_only(file: &Path) -> bool {
    file.extension().is_some_and(|ext| ext == "md")
}

/// Doesn't let pass files whose name starts with an underscore.
pub fn no_underscores(file: &Path) -> bool {
    !file
        .file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('_'))
}

/// Builds a predicate letting pass files with the given extension.
/// A leading dot in `ext` is ignored, so `"md"` and `".md"` are equivalent.
pub fn has_extension(ext: &str) -> impl Fn(&Path) -> bool + Send + Sync + 'static {
    let ext = ext.trim_start_matches('.').to_string();
    move |file: &Path| file.extension().is_some_and(|e| e == ext.as_str())
}

/// Builds a predicate rejecting files that match any of the glob patterns.
///
/// Patterns are matched against the traversal path and against the base name,
/// so `_*.md` excludes drafts anywhere in the tree.
///
/// # Errors
/// * `Error::FilterError` if a pattern is not a valid glob
pub fn exclude_globs<I, S>(patterns: I) -> Result<impl Fn(&Path) -> bool + Send + Sync + 'static>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::FilterError(format!("invalid pattern '{pattern}': {e}"))
        })?);
    }
    let glob_set: GlobSet = builder
        .build()
        .map_err(|e| Error::FilterError(e.to_string()))?;

    Ok(move |file: &Path| {
        if glob_set.is_match(file) {
            return false;
        }
        !file.file_name().is_some_and(|name| glob_set.is_match(name))
    })
}

/// Checks `file` against the chain, stopping at the first predicate that fails.
pub fn passes(file: &Path, filters: &[&FilterPredicate]) -> bool {
    filters.iter().all(|filter| filter(file))
}
