//! File locators for backing files.

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Locates the backing file for a logical name.
///
/// Implementations must resolve to exactly one existing file or to nothing;
/// partial or fuzzy matches are not part of the contract, and nothing is
/// cached across searches.
pub trait Finder: Debug + Send + Sync {
    /// Searches `folder` for `name` with `extension` (no leading dot).
    ///
    /// Logical names may contain `/` separators. With `recursive` set the
    /// search also descends into subdirectories of `folder`.
    fn search(
        &self,
        folder: &Path,
        name: &str,
        extension: &str,
        recursive: bool,
    ) -> Option<PathBuf>;
}

/// Filesystem-backed finder.
///
/// Recursive searches do not follow symlinked directories.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectoryFinder;

impl DirectoryFinder {
    /// Creates a new directory finder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn search_tree(folder: &Path, relative: &Path) -> Option<PathBuf> {
        let candidate = folder.join(relative);
        if candidate.is_file() {
            return Some(candidate);
        }

        let entries = fs::read_dir(folder).ok()?;
        for entry in entries.flatten() {
            // file_type() does not follow symlinks, so link cycles are
            // never descended into.
            let is_dir = entry.file_type().is_ok_and(|kind| kind.is_dir());
            if is_dir {
                if let Some(found) = Self::search_tree(&entry.path(), relative) {
                    return Some(found);
                }
            }
        }

        None
    }
}

impl Finder for DirectoryFinder {
    fn search(
        &self,
        folder: &Path,
        name: &str,
        extension: &str,
        recursive: bool,
    ) -> Option<PathBuf> {
        let relative = PathBuf::from(format!("{name}.{extension}"));

        if recursive {
            Self::search_tree(folder, &relative)
        } else {
            let candidate = folder.join(&relative);
            candidate.is_file().then_some(candidate)
        }
    }
}
