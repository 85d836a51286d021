//! On-disk folder layout for working and archive storage.
//!
//! Working copies live under `{root}/{texts,presentations,reviews}`; archive
//! copies under `{root}/archive/...`. Both review kinds share a folder, in
//! working and archive storage alike.

use std::path::{Path, PathBuf};

use crate::thesis::FileKind;

/// Resolves the working and archive directory for each artifact kind.
#[derive(Debug, Clone)]
pub struct StorageLayout {
    root: PathBuf,
}

impl StorageLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The storage root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding working copies of the given kind.
    pub fn working_dir(&self, kind: FileKind) -> PathBuf {
        self.root.join(kind_folder(kind))
    }

    /// Directory holding archive copies of the given kind.
    pub fn archive_dir(&self, kind: FileKind) -> PathBuf {
        self.root.join("archive").join(kind_folder(kind))
    }

    /// Full working path of a stored artifact.
    pub fn working_path(&self, kind: FileKind, filename: &str) -> PathBuf {
        self.working_dir(kind).join(filename)
    }

    /// Full archive path of an archived artifact.
    pub fn archive_path(&self, kind: FileKind, filename: &str) -> PathBuf {
        self.archive_dir(kind).join(filename)
    }
}

fn kind_folder(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Text => "texts",
        FileKind::Presentation => "presentations",
        FileKind::SupervisorReview | FileKind::ReviewerReview => "reviews",
    }
}
