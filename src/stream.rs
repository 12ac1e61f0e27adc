//! Streaming of content files from a directory tree.
//!
//! [`stream_files`] walks a root directory and sends every regular file that
//! passes the filter chain through a bounded channel, relative to the root.
//! The send blocks while the channel is full, so the receiving side has to be
//! drained concurrently. [`StreamRequest::spawn`] runs the walk on its own
//! thread and hands back the receiving end together with the walk result.

use log::debug;
use std::path::{Component, Path, PathBuf};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, JoinHandle};
use walkdir::WalkDir;

use crate::error::Result;
use crate::filter::{passes, FilterPredicate};

/// Channel capacity used when a request doesn't set one.
pub const DEFAULT_CAPACITY: usize = 16;

/// Sends all relative paths of files inside `root` that match every filter.
///
/// Entries are visited in lexical order. For `.` the emitted path is the plain
/// relative path (`notes.md`). For any other root exactly the bytes of `root`
/// are cut off the front, so the separator stays: root `content` turns
/// `content/blog/post.md` into `/blog/post.md`. Pass the root without a
/// trailing separator.
///
/// The sender is consumed, so the channel is closed exactly once when this
/// function returns, whatever the outcome. A missing `root` yields an empty,
/// closed channel and no error. An unreadable entry aborts the walk and is
/// returned here, never through the channel: a closed channel plus `Err`
/// means partial results.
///
/// If the receiver hangs up, the walk stops early and `Ok(())` is returned.
pub fn stream_files<P: AsRef<Path>>(
    root: P,
    files: SyncSender<PathBuf>,
    filters: &[&FilterPredicate],
) -> Result<()> {
    let root = root.as_ref();
    if !root.exists() {
        debug!("Content root {} does not exist", root.display());
        return Ok(());
    }

    // The root itself is depth 0 and never emitted.
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if !passes(path, filters) {
            continue;
        }

        let relative = relative_path(root, path);
        debug!("Streaming {}", relative.display());

        if files.send(relative).is_err() {
            debug!("Receiver hung up, stopping walk of {}", root.display());
            return Ok(());
        }
    }

    Ok(())
}

// Cuts the bytes of `root` off `path`. Entries always start with `root`, as
// walkdir joins every name onto it.
fn relative_path(root: &Path, path: &Path) -> PathBuf {
    if root.components().all(|c| c == Component::CurDir) {
        return path.strip_prefix(root).unwrap_or(path).to_path_buf();
    }

    let prefix_len = root.as_os_str().as_encoded_bytes().len();
    match path.as_os_str().as_encoded_bytes().get(prefix_len..) {
        Some(rest) => PathBuf::from(String::from_utf8_lossy(rest).into_owned()),
        None => path.to_path_buf(),
    }
}

/// A single walk: root, filter chain and output channel capacity.
pub struct StreamRequest {
    root: PathBuf,
    filters: Vec<Box<FilterPredicate>>,
    capacity: usize,
}

impl StreamRequest {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            filters: Vec::new(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Appends a predicate to the chain. Cheap filters should come first.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    /// Sets the channel buffer size. A capacity of zero makes every send a
    /// rendezvous with the receiver.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Starts the walk on a background thread.
    ///
    /// # Returns
    /// * The receiving end of the path channel
    /// * A handle yielding the walk result once the channel has been closed
    pub fn spawn(self) -> (Receiver<PathBuf>, JoinHandle<Result<()>>) {
        let (sender, receiver) = sync_channel(self.capacity);
        let handle = thread::spawn(move || {
            let filters: Vec<&FilterPredicate> =
                self.filters.iter().map(|f| &**f).collect();
            stream_files(&self.root, sender, &filters)
        });
        (receiver, handle)
    }
}
